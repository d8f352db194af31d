// # File Document Store
//
// File-based implementation of DocumentStore.
//
// ## Layout
//
// ```text
// <data_dir>/
//   config.yml
//   layout.yml
//   signs.yml
// ```
//
// ## Write Safety
//
// - Atomic writes: Uses write-then-rename so a crash never leaves a half
//   written document
// - Backup: The previous version of a document is kept as `<name>.backup`

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::Error;
use crate::traits::{DocumentKind, DocumentStore};

/// File-based document store rooted at a data directory
///
/// # Example
///
/// ```rust,no_run
/// use bungeesigns_core::state::FileDocumentStore;
/// use bungeesigns_core::traits::{DocumentKind, DocumentStore};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut store = FileDocumentStore::new("plugins/BungeeSigns")?;
///     store.write(DocumentKind::Signs, "signs: []\n")?;
///     assert!(store.exists(DocumentKind::Signs));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    dir: PathBuf,
}

impl FileDocumentStore {
    /// Create a store over `dir`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, Error> {
        let dir = dir.as_ref().to_path_buf();

        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                Error::config(format!(
                    "Failed to create data directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            tracing::debug!("Created data directory {}", dir.display());
        }

        Ok(Self { dir })
    }

    /// Data directory of this store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a document
    pub fn path(&self, kind: DocumentKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Path of the temporary file used for atomic writes
    fn temp_path(path: &Path) -> PathBuf {
        let mut temp = path.to_path_buf();
        temp.set_extension("yml.tmp");
        temp
    }

    /// Path of the backup kept from the previous write
    pub fn backup_path(&self, kind: DocumentKind) -> PathBuf {
        let mut backup = self.path(kind);
        backup.set_extension("yml.backup");
        backup
    }
}

impl DocumentStore for FileDocumentStore {
    fn exists(&self, kind: DocumentKind) -> bool {
        self.path(kind).exists()
    }

    fn read(&self, kind: DocumentKind) -> Result<Option<String>, Error> {
        let path = self.path(kind);
        if !path.exists() {
            tracing::debug!("Document does not exist: {}", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        Ok(Some(content))
    }

    fn write(&mut self, kind: DocumentKind, contents: &str) -> Result<(), Error> {
        let path = self.path(kind);
        let document = kind.file_name();

        // Write to temporary file first
        let temp_path = Self::temp_path(&path);
        {
            let mut file = fs::File::create(&temp_path).map_err(|e| {
                Error::persist(
                    document,
                    format!("Failed to create temp file {}: {}", temp_path.display(), e),
                )
            })?;

            file.write_all(contents.as_bytes()).map_err(|e| {
                Error::persist(
                    document,
                    format!("Failed to write temp file {}: {}", temp_path.display(), e),
                )
            })?;

            file.sync_all().map_err(|e| {
                Error::persist(
                    document,
                    format!("Failed to sync temp file {}: {}", temp_path.display(), e),
                )
            })?;
        }

        // Keep the previous version around
        if path.exists() {
            if let Err(e) = fs::copy(&path, self.backup_path(kind)) {
                tracing::warn!("Failed to back up {}: {}", path.display(), e);
            }
        }

        fs::rename(&temp_path, &path).map_err(|e| {
            Error::persist(
                document,
                format!(
                    "Failed to rename {} to {}: {}",
                    temp_path.display(),
                    path.display(),
                    e
                ),
            )
        })?;

        tracing::trace!("Document written: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_basic() {
        let dir = tempdir().unwrap();
        let mut store = FileDocumentStore::new(dir.path()).unwrap();

        assert!(!store.exists(DocumentKind::Signs));
        assert!(store.read(DocumentKind::Signs).unwrap().is_none());

        store.write(DocumentKind::Signs, "signs: []\n").unwrap();
        assert!(store.exists(DocumentKind::Signs));
        assert_eq!(
            store.read(DocumentKind::Signs).unwrap().as_deref(),
            Some("signs: []\n")
        );
        assert_eq!(store.path(DocumentKind::Signs), dir.path().join("signs.yml"));
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("plugins").join("BungeeSigns");

        let store = FileDocumentStore::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested.as_path());
    }

    #[test]
    fn test_file_store_keeps_backup() {
        let dir = tempdir().unwrap();
        let mut store = FileDocumentStore::new(dir.path()).unwrap();

        store.write(DocumentKind::Settings, "interval: 10\n").unwrap();
        store.write(DocumentKind::Settings, "interval: 20\n").unwrap();

        let backup = store.backup_path(DocumentKind::Settings);
        assert!(backup.exists(), "Backup file should exist after second write");
        assert_eq!(fs::read_to_string(backup).unwrap(), "interval: 10\n");
        assert_eq!(
            store.read(DocumentKind::Settings).unwrap().as_deref(),
            Some("interval: 20\n")
        );

        // No temp file left behind
        assert!(!FileDocumentStore::temp_path(&store.path(DocumentKind::Settings)).exists());
    }

    #[test]
    fn test_file_store_write_fails_when_directory_removed() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        let mut store = FileDocumentStore::new(&data).unwrap();
        fs::remove_dir_all(&data).unwrap();

        let err = store.write(DocumentKind::Signs, "signs: []\n").unwrap_err();
        assert!(err.is_persist());
    }
}
