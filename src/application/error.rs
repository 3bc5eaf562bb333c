use thiserror::Error;

use crate::application::storage::StorageError;
use crate::application::store::StoreError;
use crate::domain::error::DomainError;
use crate::domain::slug::SlugError;
use crate::infra::error::InfraError;

/// Top-level error for the binary: everything the layers below can
/// surface, plus a catch-all for startup faults.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Slug(#[from] SlugError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}
