use super::DocumentKind;

/// Supplies the default text of a document that is missing on disk
///
/// The configuration store copies the default into place before loading,
/// so a first start always finds all three documents.
pub trait ResourceProvider: std::fmt::Debug {
    /// Default text for the given document
    fn default_document(&self, kind: DocumentKind) -> &str;
}
