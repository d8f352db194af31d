// # Memory Document Store
//
// In-memory implementation of DocumentStore.
//
// Nothing survives the process. Useful for tests and for embedding the
// configuration store where documents come from somewhere other than disk.

use std::collections::HashMap;

use crate::Error;
use crate::traits::{DocumentKind, DocumentStore};

/// In-memory document store
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    documents: HashMap<DocumentKind, String>,
}

impl MemoryDocumentStore {
    /// Create a new empty memory document store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document, builder style
    pub fn with_document(mut self, kind: DocumentKind, contents: impl Into<String>) -> Self {
        self.documents.insert(kind, contents.into());
        self
    }

    /// Current text of a document
    pub fn get(&self, kind: DocumentKind) -> Option<&str> {
        self.documents.get(&kind).map(String::as_str)
    }

    /// Remove a document
    pub fn remove(&mut self, kind: DocumentKind) -> Option<String> {
        self.documents.remove(&kind)
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn exists(&self, kind: DocumentKind) -> bool {
        self.documents.contains_key(&kind)
    }

    fn read(&self, kind: DocumentKind) -> Result<Option<String>, Error> {
        Ok(self.documents.get(&kind).cloned())
    }

    fn write(&mut self, kind: DocumentKind, contents: &str) -> Result<(), Error> {
        self.documents.insert(kind, contents.to_string());
        Ok(())
    }
}
