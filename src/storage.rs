//! Gallery snapshot persistence.
//!
//! The accumulated items and cursor are written as JSON when the app exits
//! and read back on the next launch.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::StorageError;
use crate::models::GallerySnapshot;

/// Reads and writes the gallery snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot. A missing file yields `Ok(None)`.
    pub fn load(&self) -> Result<Option<GallerySnapshot>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let snapshot = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            StorageError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        Ok(Some(snapshot))
    }

    /// Load the snapshot, treating any failure as "nothing saved".
    pub fn load_or_default(&self) -> Option<GallerySnapshot> {
        match self.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Discarding unreadable gallery snapshot");
                None
            }
        }
    }

    /// Write the snapshot, creating the parent directory if needed.
    ///
    /// Writes to a sibling temp file first so a crash mid-write never leaves
    /// a truncated snapshot behind.
    pub fn save(&self, snapshot: &GallerySnapshot) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        {
            let file = File::create(&tmp_path).map_err(write_err)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, snapshot)?;
            writer.flush().map_err(write_err)?;
        }
        fs::rename(&tmp_path, &self.path).map_err(write_err)?;

        info!(
            path = %self.path.display(),
            items = snapshot.data.len(),
            offset = snapshot.offset,
            "Saved gallery snapshot"
        );
        Ok(())
    }

    /// Remove the snapshot. Succeeds if there was nothing to remove.
    pub fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gif;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SnapshotStore {
        SnapshotStore::new(dir.path().join("nested").join("gallery.json"))
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let snapshot = GallerySnapshot {
            data: vec![Gif::new("a", "https://media.giphy.com/a.gif", 480, 270)],
            offset: 20,
        };

        store.save(&snapshot).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("gallery.json"));
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.load(), Err(StorageError::Corrupt { .. })));
        assert!(store.load_or_default().is_none());
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.clear().unwrap();

        store.save(&GallerySnapshot::default()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
    }
}
