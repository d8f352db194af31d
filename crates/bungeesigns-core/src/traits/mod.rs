//! Seams between the configuration store and its environment
//!
//! - [`DocumentStore`]: Read and write the YAML documents
//! - [`ResourceProvider`]: Supply default documents for first start

pub mod document_store;
pub mod resource_provider;

pub use document_store::{DocumentKind, DocumentStore};
pub use resource_provider::ResourceProvider;
