// # Configuration Store
//
// Owns every piece of configuration state the plugin works with:
//
// - settings scalars (console logging, ping interval and timeout, cooldown)
// - ping targets from `config.yml`
// - layouts and custom variables from `layout.yml`
// - sign bindings from `signs.yml`, plus a registry of occupied blocks
//
// ## Lifecycle
//
// ```text
// ConfigStore::open ──► load_config ──► (accessors, add_sign, remove_sign)
//                            ▲                     │
//                            └──── reload_config ◄─┤
//                                                  ▼
//                                            unload_config
// ```
//
// Every load rebuilds all collections from the documents. A load that fails
// leaves the store unloaded; there is no partially loaded state.
//
// ## Persistence
//
// Only the sign document is written during normal operation. A failed write
// is returned to the caller and the in-memory state is rolled back, so
// memory and disk never disagree about which signs exist.

use serde_yaml::{Mapping, Value};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::codec;
use crate::config;
use crate::error::{Error, Result};
use crate::model::{BungeeSign, CustomVariable, Location, ServerPing, SignLayout};
use crate::resources::BundledResources;
use crate::state::FileDocumentStore;
use crate::traits::{DocumentKind, DocumentStore, ResourceProvider};

/// Configuration and sign registry of the plugin
///
/// # Example
///
/// ```rust,no_run
/// use bungeesigns_core::{ConfigStore, Location};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut store = ConfigStore::open("plugins/BungeeSigns")?;
///     store.load_config()?;
///
///     let location = Location::new("world", 10, 64, -20);
///     store.add_sign(location.clone(), "lobby", "default")?;
///     assert!(store.contains_sign(&location));
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ConfigStore {
    documents: Box<dyn DocumentStore>,
    resources: Box<dyn ResourceProvider>,

    settings_doc: Option<Value>,
    layout_doc: Option<Value>,
    sign_doc: Option<Value>,

    console_log: bool,
    ping_interval: u32,
    ping_timeout: u32,
    cooldown_ms: u64,

    servers: Vec<ServerPing>,
    signs: Vec<BungeeSign>,
    blocks: HashSet<Location>,
    layouts: HashMap<String, SignLayout>,
    variables: Vec<CustomVariable>,
}

/// Everything a successful load produces, committed in one step
struct Loaded {
    settings_doc: Value,
    layout_doc: Value,
    sign_doc: Value,
    settings: config::Settings,
    servers: Vec<ServerPing>,
    layouts: HashMap<String, SignLayout>,
    signs: Vec<BungeeSign>,
    variables: Vec<CustomVariable>,
}

impl ConfigStore {
    /// Create a store over the given document store and default resources
    ///
    /// Nothing is read until [`ConfigStore::load_config`] is called.
    pub fn new(
        documents: impl DocumentStore + 'static,
        resources: impl ResourceProvider + 'static,
    ) -> Self {
        let settings = config::Settings::default();
        Self {
            documents: Box::new(documents),
            resources: Box::new(resources),
            settings_doc: None,
            layout_doc: None,
            sign_doc: None,
            console_log: settings.log_console,
            ping_interval: settings.interval,
            ping_timeout: settings.timeout,
            cooldown_ms: u64::from(settings.cooldown) * 1000,
            servers: Vec::new(),
            signs: Vec::new(),
            blocks: HashSet::new(),
            layouts: HashMap::new(),
            variables: Vec::new(),
        }
    }

    /// Create a store over the files in `data_dir` with the bundled defaults
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let documents = FileDocumentStore::new(data_dir)?;
        Ok(Self::new(documents, BundledResources))
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    /// Load all documents, bootstrapping missing ones from the defaults
    ///
    /// Runs settings → servers → layouts → signs → variables. Servers need
    /// the ping timeout from the settings.
    pub fn load_config(&mut self) -> Result<()> {
        self.clear();

        let loaded = match self.load_all() {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::error!("Failed to load configuration: {}", e);
                return Err(e);
            }
        };

        self.console_log = loaded.settings.log_console;
        self.ping_interval = loaded.settings.interval;
        self.ping_timeout = loaded.settings.timeout;
        self.cooldown_ms = u64::from(loaded.settings.cooldown) * 1000;

        self.servers = loaded.servers;
        self.layouts = loaded.layouts;
        self.blocks = loaded
            .signs
            .iter()
            .map(|sign| sign.location().clone())
            .collect();
        self.signs = loaded.signs;
        self.variables = loaded.variables;

        self.settings_doc = Some(loaded.settings_doc);
        self.layout_doc = Some(loaded.layout_doc);
        self.sign_doc = Some(loaded.sign_doc);

        tracing::info!(
            "Configuration loaded: {} server(s), {} layout(s), {} sign(s), {} variable(s)",
            self.servers.len(),
            self.layouts.len(),
            self.signs.len(),
            self.variables.len()
        );
        Ok(())
    }

    /// Drop all state and load it again from the documents
    pub fn reload_config(&mut self) -> Result<()> {
        tracing::info!("Reloading configuration");
        self.load_config()
    }

    /// Drop all state without touching the documents on disk
    pub fn unload_config(&mut self) {
        self.clear();
        tracing::info!("Configuration unloaded");
    }

    /// Whether the documents are currently loaded
    pub fn is_loaded(&self) -> bool {
        self.settings_doc.is_some() && self.layout_doc.is_some() && self.sign_doc.is_some()
    }

    fn clear(&mut self) {
        self.settings_doc = None;
        self.layout_doc = None;
        self.sign_doc = None;

        self.servers.clear();
        self.signs.clear();
        self.blocks.clear();
        self.layouts.clear();
        self.variables.clear();
    }

    fn load_all(&mut self) -> Result<Loaded> {
        let settings_doc = self.load_document(DocumentKind::Settings)?;
        let layout_doc = self.load_document(DocumentKind::Layouts)?;
        let sign_doc = self.load_document(DocumentKind::Signs)?;

        let settings = config::parse_settings(&settings_doc)?;
        tracing::debug!(
            "Settings: logConsole={} interval={}s timeout={}s cooldown={}s",
            settings.log_console,
            settings.interval,
            settings.timeout,
            settings.cooldown
        );

        let servers = config::parse_servers(&settings_doc, settings.timeout)?;
        tracing::debug!("Loaded {} server(s)", servers.len());

        let layouts = config::parse_layouts(&layout_doc)?;
        tracing::debug!("Loaded {} layout(s)", layouts.len());

        let signs = Self::parse_signs(&sign_doc)?;
        tracing::debug!("Loaded {} sign(s)", signs.len());

        let variables = config::parse_variables(&layout_doc)?;
        tracing::debug!("Loaded {} variable(s)", variables.len());

        Ok(Loaded {
            settings_doc,
            layout_doc,
            sign_doc,
            settings,
            servers,
            layouts,
            signs,
            variables,
        })
    }

    /// Read and parse one document, copying the default into place first
    /// if it does not exist
    fn load_document(&mut self, kind: DocumentKind) -> Result<Value> {
        if !self.documents.exists(kind) {
            tracing::warn!("{} not found, creating it from defaults", kind);
            let default = self.resources.default_document(kind).to_string();
            self.documents.write(kind, &default)?;
        }

        let text = self
            .documents
            .read(kind)?
            .ok_or_else(|| Error::config(format!("{} disappeared while loading", kind)))?;

        let value: Value = serde_yaml::from_str(&text)
            .map_err(|e| Error::config(format!("Failed to parse {}: {}", kind, e)))?;

        match value {
            Value::Null => Ok(Value::Mapping(Mapping::new())),
            Value::Mapping(_) => Ok(value),
            _ => Err(Error::config(format!("{} must be a YAML mapping", kind))),
        }
    }

    fn parse_signs(doc: &Value) -> Result<Vec<BungeeSign>> {
        let mut signs: Vec<BungeeSign> = Vec::new();
        let mut seen = HashSet::new();

        for raw in config::sign_list(doc)? {
            let entry = codec::decode(&raw)?;
            if !seen.insert(entry.location.clone()) {
                tracing::warn!(
                    "Ignoring duplicate sign at {} ({})",
                    entry.location,
                    raw
                );
                continue;
            }
            signs.push(BungeeSign::new(entry.server, entry.location, entry.layout));
        }

        Ok(signs)
    }

    // ---------------------------------------------------------------------
    // Sign persistence
    // ---------------------------------------------------------------------

    /// Bind the sign at `location` to `server` using `layout`
    ///
    /// The sign document is saved before memory is touched. If the save
    /// fails the document is restored and the error returned.
    ///
    /// # Errors
    ///
    /// - `Error::NotLoaded`: the configuration is not loaded
    /// - `Error::SignExists`: a sign is already bound at `location`
    /// - `Error::InvalidSign`: the binding cannot be encoded
    /// - `Error::Persist` / `Error::Io`: the sign document could not be saved
    pub fn add_sign(&mut self, location: Location, server: &str, layout: &str) -> Result<()> {
        let doc = self.sign_doc.as_ref().ok_or(Error::NotLoaded)?;

        if self.blocks.contains(&location) {
            return Err(Error::SignExists(location.to_string()));
        }

        let encoded = codec::encode(&location, server, layout)?;
        let mut list = config::sign_list(doc)?;
        list.push(encoded);
        self.persist_sign_list(list)?;

        tracing::debug!("Added sign at {} for {} ({})", location, server, layout);
        self.blocks.insert(location.clone());
        self.signs.push(BungeeSign::new(server, location, layout));
        Ok(())
    }

    /// Remove the sign bound at `location`
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The sign was removed and the document saved
    /// - `Ok(false)`: No sign is bound at `location`
    /// - `Err(Error)`: The document could not be saved; nothing was removed
    pub fn remove_sign(&mut self, location: &Location) -> Result<bool> {
        let doc = self.sign_doc.as_ref().ok_or(Error::NotLoaded)?;

        let Some(index) = self.signs.iter().position(|s| s.location() == location) else {
            return Ok(false);
        };

        // Drop every entry at this block, including duplicates skipped on load
        let mut list = config::sign_list(doc)?;
        let before = list.len();
        list.retain(|raw| {
            codec::decode(raw)
                .map(|entry| entry.location != *location)
                .unwrap_or(true)
        });
        match before - list.len() {
            0 => tracing::warn!("Sign at {} missing from {}", location, DocumentKind::Signs),
            1 => {}
            n => tracing::debug!("Dropped {} entries for {}", n, location),
        }
        self.persist_sign_list(list)?;

        let sign = self.signs.remove(index);
        self.blocks.remove(location);
        tracing::debug!("Removed sign at {} for {}", location, sign.server());
        Ok(true)
    }

    /// Swap in a new sign list and save it, restoring the old document if
    /// the save fails
    fn persist_sign_list(&mut self, list: Vec<String>) -> Result<()> {
        let doc = self.sign_doc.as_mut().ok_or(Error::NotLoaded)?;
        let previous = doc.clone();
        config::set_sign_list(doc, list);

        if let Err(e) = self.save_document(DocumentKind::Signs) {
            tracing::error!("Failed to save {}: {}", DocumentKind::Signs, e);
            self.sign_doc = Some(previous);
            return Err(e);
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Documents
    // ---------------------------------------------------------------------

    /// Parsed content of a document, if loaded
    pub fn document(&self, kind: DocumentKind) -> Option<&Value> {
        match kind {
            DocumentKind::Settings => self.settings_doc.as_ref(),
            DocumentKind::Layouts => self.layout_doc.as_ref(),
            DocumentKind::Signs => self.sign_doc.as_ref(),
        }
    }

    /// Write a loaded document back to its store
    pub fn save_document(&mut self, kind: DocumentKind) -> Result<()> {
        let doc = self.document(kind).ok_or(Error::NotLoaded)?;
        let text = serde_yaml::to_string(doc)?;
        self.documents.write(kind, &text)
    }

    // ---------------------------------------------------------------------
    // Lookups
    // ---------------------------------------------------------------------

    /// Ping target by name
    pub fn server(&self, name: &str) -> Option<&ServerPing> {
        self.servers.iter().find(|s| s.name() == name)
    }

    /// Mutable ping target by name, for the pinger to record results
    pub fn server_mut(&mut self, name: &str) -> Option<&mut ServerPing> {
        self.servers.iter_mut().find(|s| s.name() == name)
    }

    /// Layout by name
    pub fn layout(&self, name: &str) -> Option<&SignLayout> {
        self.layouts.get(name)
    }

    /// Sign bound at `location`
    pub fn sign_at(&self, location: &Location) -> Option<&BungeeSign> {
        self.signs.iter().find(|s| s.location() == location)
    }

    /// Whether a sign is bound at `location`
    pub fn contains_sign(&self, location: &Location) -> bool {
        self.blocks.contains(location)
    }

    // ---------------------------------------------------------------------
    // Collections
    // ---------------------------------------------------------------------

    /// All ping targets, in document order
    pub fn servers(&self) -> &[ServerPing] {
        &self.servers
    }

    /// Replace the ping targets in memory
    pub fn set_servers(&mut self, servers: Vec<ServerPing>) {
        self.servers = servers;
    }

    /// All sign bindings
    pub fn signs(&self) -> &[BungeeSign] {
        &self.signs
    }

    /// Replace the sign bindings in memory; the block registry follows
    ///
    /// Later bindings at an already used location are dropped. The sign
    /// document is not written.
    pub fn set_signs(&mut self, signs: Vec<BungeeSign>) {
        self.blocks.clear();
        self.signs = signs
            .into_iter()
            .filter(|sign| self.blocks.insert(sign.location().clone()))
            .collect();
    }

    /// Locations of all bound signs
    pub fn blocks(&self) -> &HashSet<Location> {
        &self.blocks
    }

    /// Layouts keyed by name
    pub fn layouts(&self) -> &HashMap<String, SignLayout> {
        &self.layouts
    }

    /// Replace the layouts in memory
    pub fn set_layouts(&mut self, layouts: HashMap<String, SignLayout>) {
        self.layouts = layouts;
    }

    /// Custom variables, in document order
    pub fn variables(&self) -> &[CustomVariable] {
        &self.variables
    }

    /// Replace the custom variables in memory
    pub fn set_variables(&mut self, variables: Vec<CustomVariable>) {
        self.variables = variables;
    }

    // ---------------------------------------------------------------------
    // Settings
    // ---------------------------------------------------------------------

    /// Teleport cooldown in milliseconds
    pub fn cooldown(&self) -> u64 {
        self.cooldown_ms
    }

    /// Set the teleport cooldown in seconds
    pub fn set_cooldown(&mut self, seconds: u32) {
        self.cooldown_ms = u64::from(seconds) * 1000;
    }

    pub fn console_log(&self) -> bool {
        self.console_log
    }

    pub fn set_console_log(&mut self, enabled: bool) {
        self.console_log = enabled;
    }

    /// Seconds between two pings of the same server
    pub fn ping_interval(&self) -> u32 {
        self.ping_interval
    }

    pub fn set_ping_interval(&mut self, seconds: u32) {
        self.ping_interval = seconds;
    }

    /// Seconds to wait for a ping answer
    pub fn ping_timeout(&self) -> u32 {
        self.ping_timeout
    }

    pub fn set_ping_timeout(&mut self, seconds: u32) {
        self.ping_timeout = seconds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryDocumentStore;

    const SETTINGS: &str = "logConsole: true
interval: 20
timeout: 3
cooldown: 5
servers:
  lobby:
    displayname: Lobby
    address: '10.0.0.1:25565'
";

    const LAYOUTS: &str = "layouts:
  default:
    online: Online
    offline: Offline
    layout: ['%displayname%', '%status%']
    teleport: true
variables:
  network:
    type: TEXT
    arguments: Example
";

    fn store_with(signs: &str) -> ConfigStore {
        let documents = MemoryDocumentStore::new()
            .with_document(DocumentKind::Settings, SETTINGS)
            .with_document(DocumentKind::Layouts, LAYOUTS)
            .with_document(DocumentKind::Signs, signs);
        ConfigStore::new(documents, BundledResources)
    }

    #[test]
    fn test_load_settings_and_collections() {
        let mut store = store_with("signs:\n  - 'world;1;64;2;lobby;default'\n");
        store.load_config().unwrap();

        assert!(store.is_loaded());
        assert!(store.console_log());
        assert_eq!(store.ping_interval(), 20);
        assert_eq!(store.ping_timeout(), 3);
        assert_eq!(store.cooldown(), 5000);

        let lobby = store.server("lobby").unwrap();
        assert_eq!(lobby.host(), "10.0.0.1");
        assert_eq!(lobby.port(), 25565);
        assert!(store.server("missing").is_none());

        assert!(store.layout("default").unwrap().teleport);
        assert!(store.layout("missing").is_none());
        assert_eq!(store.variables()[0].placeholder(), "%network%");

        let location = Location::new("world", 1, 64, 2);
        assert!(store.contains_sign(&location));
        assert_eq!(store.sign_at(&location).unwrap().server(), "lobby");
    }

    #[test]
    fn test_duplicate_sign_entries_collapse() {
        let mut store = store_with(
            "signs:\n  - 'world;1;64;2;lobby;default'\n  - 'world;1;64;2;other;default'\n",
        );
        store.load_config().unwrap();
        assert_eq!(store.signs().len(), 1);
        assert_eq!(store.blocks().len(), 1);
    }

    #[test]
    fn test_failed_load_leaves_store_unloaded() {
        let mut store = store_with("signs:\n  - 'not a sign'\n");
        assert!(store.load_config().is_err());
        assert!(!store.is_loaded());
        assert!(store.servers().is_empty());
        assert!(store.layouts().is_empty());
    }

    #[test]
    fn test_operations_require_loaded_config() {
        let mut store = store_with("signs: []\n");
        let location = Location::new("world", 0, 0, 0);
        assert!(matches!(
            store.add_sign(location.clone(), "lobby", "default"),
            Err(Error::NotLoaded)
        ));
        assert!(matches!(store.remove_sign(&location), Err(Error::NotLoaded)));
        assert!(matches!(
            store.save_document(DocumentKind::Settings),
            Err(Error::NotLoaded)
        ));
    }

    #[test]
    fn test_add_sign_rejects_occupied_location() {
        let mut store = store_with("signs: []\n");
        store.load_config().unwrap();

        let location = Location::new("world", 5, 70, 5);
        store.add_sign(location.clone(), "lobby", "default").unwrap();
        let err = store.add_sign(location, "lobby", "default").unwrap_err();
        assert!(matches!(err, Error::SignExists(_)));
        assert_eq!(store.signs().len(), 1);
    }

    #[test]
    fn test_set_signs_rebuilds_registry() {
        let mut store = store_with("signs:\n  - 'world;1;64;2;lobby;default'\n");
        store.load_config().unwrap();

        let a = Location::new("world", 9, 9, 9);
        store.set_signs(vec![
            BungeeSign::new("lobby", a.clone(), "default"),
            BungeeSign::new("pvp", a.clone(), "default"),
        ]);
        assert_eq!(store.signs().len(), 1);
        assert!(store.contains_sign(&a));
        assert!(!store.contains_sign(&Location::new("world", 1, 64, 2)));
    }

    #[test]
    fn test_collection_setters() {
        let mut store = store_with("signs: []\n");
        store.load_config().unwrap();

        let mut layouts = HashMap::new();
        layouts.insert("compact".to_string(), SignLayout::new("compact"));
        store.set_layouts(layouts);
        assert!(store.layout("default").is_none());
        assert_eq!(store.layout("compact").unwrap().name, "compact");

        store.set_variables(vec![CustomVariable::new("TEXT", "motto", "Have fun")]);
        assert_eq!(store.variables().len(), 1);
        assert_eq!(store.variables()[0].placeholder(), "%motto%");

        store.set_servers(vec![ServerPing::new("hub", "Hub", "hub.local", 25565, 2)]);
        assert!(store.server("lobby").is_none());
        assert_eq!(store.server("hub").unwrap().port(), 25565);
    }

    #[test]
    fn test_setters() {
        let mut store = store_with("signs: []\n");
        store.set_cooldown(2);
        assert_eq!(store.cooldown(), 2000);
        store.set_ping_interval(30);
        store.set_ping_timeout(1);
        store.set_console_log(true);
        assert_eq!(store.ping_interval(), 30);
        assert_eq!(store.ping_timeout(), 1);
        assert!(store.console_log());
    }
}
