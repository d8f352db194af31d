// # Document Store Trait
//
// Defines the interface for persisting the three configuration documents.
//
// ## Purpose
//
// The configuration store never touches the filesystem directly. It asks a
// document store for the raw text of `config.yml`, `layout.yml` and
// `signs.yml`, and hands back the full text when a document is saved.
//
// ## Implementations
//
// - File-based: one file per document inside a data directory
// - Memory: for tests and embedding without a disk

use std::fmt;

/// The documents managed by the configuration store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Global settings and the server list
    Settings,
    /// Layout templates and custom variables
    Layouts,
    /// Encoded sign bindings
    Signs,
}

impl DocumentKind {
    /// All documents in load order
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Settings,
        DocumentKind::Layouts,
        DocumentKind::Signs,
    ];

    /// Fixed file name of the document
    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::Settings => "config.yml",
            DocumentKind::Layouts => "layout.yml",
            DocumentKind::Signs => "signs.yml",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Trait for document store implementations
///
/// # Thread Safety
///
/// Implementations are used from a single thread. They are not required to
/// be `Sync`.
///
/// # Implementation Guidelines
///
/// - **Whole-document writes**: `write` replaces the full document
/// - **Durability**: `write` returns only after the data is on its backing store
/// - **No parsing**: Stores deal in text; YAML handling belongs to the caller
pub trait DocumentStore: fmt::Debug {
    /// Check whether a document exists
    fn exists(&self, kind: DocumentKind) -> bool;

    /// Read a document
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: The document text
    /// - `Ok(None)`: The document does not exist
    /// - `Err(Error)`: Storage error
    fn read(&self, kind: DocumentKind) -> Result<Option<String>, crate::Error>;

    /// Replace a document
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Written
    /// - `Err(Error)`: Storage error, previous content left in place
    fn write(&mut self, kind: DocumentKind, contents: &str) -> Result<(), crate::Error>;
}
