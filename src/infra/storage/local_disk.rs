//! On-disk backend: one JSON document per key under a root directory.
//!
//! This is the localStorage analog for a terminal host. Writes land in a
//! sibling temp file and are moved into place, so the document under a
//! key is always replaced atomically.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::application::storage::{KeyValueStorage, StorageError};

pub struct LocalDiskStorage {
    root: PathBuf,
}

impl LocalDiskStorage {
    /// Open the storage root, creating it when missing.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();

        fs::create_dir_all(&root).map_err(|error| StorageError::RootPathInvalid {
            path: root.clone(),
            reason: error.to_string(),
        })?;

        let attr = fs::metadata(&root).map_err(|error| StorageError::RootPathInvalid {
            path: root.clone(),
            reason: error.to_string(),
        })?;
        if attr.permissions().readonly() {
            return Err(StorageError::RootPathInvalid {
                path: root,
                reason: "root directory must be writable".to_string(),
            });
        }

        let root = root
            .canonicalize()
            .map_err(|error| StorageError::RootPathInvalid {
                path: root.clone(),
                reason: error.to_string(),
            })?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        // Keys are flat names; anything path-like is flattened so a key
        // can never escape the root.
        let file_name: String = key
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                    ch
                } else {
                    '-'
                }
            })
            .collect();
        self.root.join(format!("{file_name}.json"))
    }
}

impl KeyValueStorage for LocalDiskStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.document_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StorageError::Io(error)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.document_path(key);
        let staged = path.with_extension("json.tmp");
        fs::write(&staged, value)?;
        fs::rename(&staged, &path)?;
        debug!(path = %path.display(), bytes = value.len(), "replaced post document");
        Ok(())
    }
}
