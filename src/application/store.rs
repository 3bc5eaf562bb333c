//! The post store: sole authority for reading and mutating the persisted
//! post collection.
//!
//! All state lives in one serialized document behind an injected
//! [`KeyValueStorage`] backend. Every mutation is a whole-document
//! replacement; an internal mutex serializes read-modify-write cycles so
//! that contract is explicit even in a multi-threaded host. Concurrent
//! writers from other processes remain last-writer-wins.

use std::sync::{Arc, Mutex};

use metrics::counter;
use thiserror::Error;
use time::Date;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::storage::{KeyValueStorage, StorageError};
use crate::domain::posts::{self, Post};

/// Key the serialized post document is stored under.
pub const STORAGE_KEY: &str = "cifra-blog-posts";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("post storage is unavailable; the store is detached and read-only")]
    Detached,
    #[error("persisted post document is malformed: {reason}")]
    Malformed { reason: String },
    #[error("validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Fields for a new post, identifier excluded.
///
/// The caller computes `slug` and `read_time` with the domain helpers;
/// the store does not recompute them. Tags and read time are still
/// normalized on write so the stored collection upholds its invariants
/// regardless of the caller.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: Date,
    pub tags: Vec<String>,
    pub read_time: u32,
}

pub struct PostStore {
    backend: Option<Arc<dyn KeyValueStorage>>,
    key: String,
    // Serializes read-modify-write cycles within this process.
    write_guard: Mutex<()>,
}

impl PostStore {
    pub fn new(backend: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            backend: Some(backend),
            key: key.into(),
            write_guard: Mutex::new(()),
        }
    }

    /// A store with no persistent backend.
    ///
    /// Reads serve the built-in default set without side effects; writes
    /// are rejected with [`StoreError::Detached`].
    pub fn detached() -> Self {
        Self {
            backend: None,
            key: STORAGE_KEY.to_string(),
            write_guard: Mutex::new(()),
        }
    }

    pub fn is_detached(&self) -> bool {
        self.backend.is_none()
    }

    /// The whole collection, newest-created first.
    ///
    /// The first read against an empty backend writes the default set
    /// before returning it; later reads deserialize what is stored. A
    /// document that fails validation surfaces [`StoreError::Malformed`]
    /// and is left untouched.
    pub fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let Some(backend) = &self.backend else {
            return Ok(posts::default_posts());
        };

        match backend.get(&self.key)? {
            Some(raw) => decode_document(&raw),
            None => {
                let defaults = posts::default_posts();
                self.persist(backend.as_ref(), &defaults)?;
                counter!("cifra_store_seed_total").increment(1);
                info!(count = defaults.len(), "seeded post document with default set");
                Ok(defaults)
            }
        }
    }

    /// First post whose slug matches exactly, case-sensitive.
    /// Absence is a normal outcome, not an error.
    pub fn get_post(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        Ok(self
            .list_posts()?
            .into_iter()
            .find(|post| post.slug == slug))
    }

    /// Prepend a new post and rewrite the collection.
    ///
    /// The identifier is freshly generated and guaranteed unique against
    /// the identifiers already present.
    pub fn create_post(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let Some(backend) = &self.backend else {
            return Err(StoreError::Detached);
        };
        if new_post.title.trim().is_empty() {
            return Err(StoreError::Validation(
                "post title must not be empty".to_string(),
            ));
        }

        let _guard = self.write_guard.lock().unwrap_or_else(|err| err.into_inner());

        let mut collection = self.list_posts()?;
        let post = Post {
            id: unique_id(&collection),
            title: new_post.title,
            slug: new_post.slug,
            excerpt: new_post.excerpt,
            content: new_post.content,
            author: new_post.author,
            date: new_post.date,
            tags: posts::normalize_tags(new_post.tags),
            read_time: new_post.read_time.max(1),
            cover_image: None,
        };
        collection.insert(0, post.clone());
        self.persist(backend.as_ref(), &collection)?;

        counter!("cifra_posts_created_total").increment(1);
        debug!(id = %post.id, slug = %post.slug, "created post");
        Ok(post)
    }

    /// Remove the post with a matching identifier and rewrite the
    /// collection. An absent identifier is a no-op, not an error.
    pub fn delete_post(&self, id: &str) -> Result<(), StoreError> {
        let Some(backend) = &self.backend else {
            return Err(StoreError::Detached);
        };

        let _guard = self.write_guard.lock().unwrap_or_else(|err| err.into_inner());

        let mut collection = self.list_posts()?;
        let before = collection.len();
        collection.retain(|post| post.id != id);
        if collection.len() < before {
            counter!("cifra_posts_deleted_total").increment(1);
            debug!(id, "deleted post");
        } else {
            debug!(id, "delete requested for unknown post id");
        }
        self.persist(backend.as_ref(), &collection)
    }

    fn persist(
        &self,
        backend: &dyn KeyValueStorage,
        collection: &[Post],
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(collection).map_err(StorageError::from_persistence)?;
        backend.set(&self.key, &raw)?;
        Ok(())
    }
}

fn decode_document(raw: &str) -> Result<Vec<Post>, StoreError> {
    serde_json::from_str(raw).map_err(|err| {
        counter!("cifra_store_malformed_total").increment(1);
        warn!(error = %err, "persisted post document failed validation");
        StoreError::Malformed {
            reason: err.to_string(),
        }
    })
}

fn unique_id(collection: &[Post]) -> String {
    // A v4 collision is practically unreachable, but the uniqueness
    // invariant is cheap to uphold unconditionally.
    loop {
        let candidate = Uuid::new_v4().to_string();
        if !collection.iter().any(|post| post.id == candidate) {
            return candidate;
        }
    }
}
