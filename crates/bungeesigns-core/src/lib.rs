// # bungeesigns-core
//
// Configuration and sign registry for the BungeeSigns server-network plugin.
//
// ## Architecture Overview
//
// - **ConfigStore**: Owns settings, ping targets, layouts, variables and the
//   sign registry, with an explicit load / reload / unload lifecycle
// - **DocumentStore**: Trait for reading and writing the three YAML documents
// - **ResourceProvider**: Trait supplying default documents on first start
// - **codec**: Sign string encoding used inside `signs.yml`
//
// ## Threading
//
// Everything here is synchronous and lock-free. The store is meant to be
// owned by the host's main loop; callers that share it serialize access
// themselves.

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod resources;
pub mod state;
pub mod store;
pub mod traits;

// Re-export core types for convenience
pub use error::{Error, Result};
pub use model::{BungeeSign, CustomVariable, Location, ServerPing, ServerStatus, SignLayout};
pub use resources::BundledResources;
pub use state::{FileDocumentStore, MemoryDocumentStore};
pub use store::ConfigStore;
pub use traits::{DocumentKind, DocumentStore, ResourceProvider};
