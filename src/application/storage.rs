//! Storage capability consumed by the post store.
//!
//! The persisted state is a flat namespace of string keys to string
//! documents, mirroring the key-value store the original site persisted
//! into. Implementations live in [`crate::infra::storage`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("storage root `{path}` is not usable: {reason}")]
    RootPathInvalid { path: PathBuf, reason: String },
}

impl StorageError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Flat key-value persistence.
///
/// `get` returns the whole document under a key; `set` replaces it in a
/// single write. Implementations must make `set` atomic per key: a reader
/// observes either the previous document or the new one, never a torn
/// write.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
