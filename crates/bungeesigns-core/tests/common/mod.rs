//! Test doubles and fixtures for the configuration store contract tests

#![allow(dead_code)]

use bungeesigns_core::error::{Error, Result};
use bungeesigns_core::traits::{DocumentKind, DocumentStore};
use bungeesigns_core::{BundledResources, ConfigStore, MemoryDocumentStore};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const SETTINGS: &str = "logConsole: true
interval: 15
timeout: 4
cooldown: 3
servers:
  lobby:
    displayname: '&6Lobby'
    address: '10.0.0.1:25565'
  survival:
    displayname: '&aSurvival'
    address: '10.0.0.2:25566'
";

pub const LAYOUTS: &str = "layouts:
  default:
    online: '&aOnline'
    offline: '&cOffline'
    layout:
      - '%displayname%'
      - '%status%'
    teleport: true
    cooldown-message: 'wait'
  compact:
    layout: ['%name%']
variables:
  network:
    type: TEXT
    arguments: 'Example Network'
";

/// A document store the test keeps a handle to
///
/// Clones share the same documents, so a test can edit a document "on disk"
/// behind the configuration store's back or make writes fail.
#[derive(Debug, Clone, Default)]
pub struct SharedDocumentStore {
    inner: Rc<RefCell<MemoryDocumentStore>>,
    fail_writes: Rc<Cell<bool>>,
    write_count: Rc<Cell<usize>>,
}

impl SharedDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the standard settings and layouts and `signs`
    pub fn seeded(signs: &str) -> Self {
        let store = Self::new();
        store.put(DocumentKind::Settings, SETTINGS);
        store.put(DocumentKind::Layouts, LAYOUTS);
        store.put(DocumentKind::Signs, signs);
        store
    }

    pub fn put(&self, kind: DocumentKind, contents: &str) {
        self.inner
            .borrow_mut()
            .write(kind, contents)
            .expect("memory write succeeds");
    }

    pub fn get(&self, kind: DocumentKind) -> Option<String> {
        self.inner.borrow().get(kind).map(str::to_string)
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn write_count(&self) -> usize {
        self.write_count.get()
    }
}

impl DocumentStore for SharedDocumentStore {
    fn exists(&self, kind: DocumentKind) -> bool {
        self.inner.borrow().exists(kind)
    }

    fn read(&self, kind: DocumentKind) -> Result<Option<String>> {
        self.inner.borrow().read(kind)
    }

    fn write(&mut self, kind: DocumentKind, contents: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(Error::persist(kind.file_name(), "simulated write failure"));
        }
        self.write_count.set(self.write_count.get() + 1);
        self.inner.borrow_mut().write(kind, contents)
    }
}

/// A loaded store over a seeded shared document store
pub fn loaded_store(signs: &str) -> (ConfigStore, SharedDocumentStore) {
    let documents = SharedDocumentStore::seeded(signs);
    let mut store = ConfigStore::new(documents.clone(), BundledResources);
    store.load_config().expect("seeded documents load");
    (store, documents)
}

/// Decoded sign strings currently in the shared sign document
pub fn persisted_signs(documents: &SharedDocumentStore) -> Vec<String> {
    let text = documents
        .get(DocumentKind::Signs)
        .expect("sign document exists");
    let value: serde_yaml::Value = serde_yaml::from_str(&text).expect("sign document parses");
    bungeesigns_core::config::sign_list(&value).expect("sign list is valid")
}
