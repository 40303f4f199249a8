// ABOUTME: Pluggable draft storage backends (LRU-bounded memory, JSON files)
// ABOUTME: File backend is the localStorage analogue used by the mobile shell
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Draft storage backends
//!
//! Storage is best-effort by contract: a payload that fails to parse is
//! treated as absent rather than surfaced as an error, matching how the
//! app shell treats a corrupt cache entry.

use super::{DraftEntry, DraftKey};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// Draft storage trait for pluggable backend implementations
#[async_trait]
pub trait DraftStorage: Send + Sync + Clone {
    /// Load the draft stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend itself fails; an unparseable payload
    /// is `Ok(None)`.
    async fn load(&self, key: &DraftKey) -> AppResult<Option<DraftEntry>>;

    /// Store a draft entry, replacing any previous one for its key
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    async fn store(&self, entry: &DraftEntry) -> AppResult<()>;

    /// Remove the draft stored under `key`; removing a missing key is not
    /// an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend delete fails.
    async fn remove(&self, key: &DraftKey) -> AppResult<()>;

    /// Keys of all currently stored drafts
    ///
    /// # Errors
    ///
    /// Returns an error if the backend enumeration fails.
    async fn keys(&self) -> AppResult<Vec<DraftKey>>;
}

/// In-memory draft storage bounded by an LRU cache
///
/// `Arc<RwLock<LruCache>>` for shared state between clones; the LRU bound
/// keeps an abandoned builder session from growing the cache without limit.
#[derive(Clone)]
pub struct MemoryDraftStorage {
    store: Arc<RwLock<LruCache<String, DraftEntry>>>,
}

impl MemoryDraftStorage {
    /// Fallback capacity when configured with zero entries
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a new memory backend holding at most `max_entries` drafts
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }
}

#[async_trait]
impl DraftStorage for MemoryDraftStorage {
    async fn load(&self, key: &DraftKey) -> AppResult<Option<DraftEntry>> {
        let mut store = self.store.write().await;
        Ok(store.get(&key.storage_key()).cloned())
    }

    async fn store(&self, entry: &DraftEntry) -> AppResult<()> {
        let mut store = self.store.write().await;
        store.push(entry.key.storage_key(), entry.clone());
        Ok(())
    }

    async fn remove(&self, key: &DraftKey) -> AppResult<()> {
        let mut store = self.store.write().await;
        store.pop(&key.storage_key());
        Ok(())
    }

    async fn keys(&self) -> AppResult<Vec<DraftKey>> {
        let store = self.store.read().await;
        Ok(store.iter().map(|(_, entry)| entry.key.clone()).collect())
    }
}

/// File-backed draft storage: one JSON document per draft key
#[derive(Clone)]
pub struct FileDraftStorage {
    dir: PathBuf,
}

impl FileDraftStorage {
    /// Create a file backend rooted at `dir`, creating the directory if
    /// needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn new(dir: PathBuf) -> AppResult<Self> {
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::storage(format!("create draft dir: {e}")))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &DraftKey) -> PathBuf {
        // Keys are uuid/slug/date shaped; keep the filename defensive anyway
        let name: String = key
            .storage_key()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl DraftStorage for FileDraftStorage {
    async fn load(&self, key: &DraftKey) -> AppResult<Option<DraftEntry>> {
        let path = self.path_for(key);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::storage(format!("read draft: {e}"))),
        };

        match serde_json::from_str::<DraftEntry>(&raw) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding unparseable draft payload");
                Ok(None)
            }
        }
    }

    async fn store(&self, entry: &DraftEntry) -> AppResult<()> {
        let path = self.path_for(&entry.key);
        let payload = serde_json::to_vec(entry)?;
        tokio::fs::write(&path, payload)
            .await
            .map_err(|e| AppError::storage(format!("write draft: {e}")))
    }

    async fn remove(&self, key: &DraftKey) -> AppResult<()> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("remove draft: {e}"))),
        }
    }

    async fn keys(&self) -> AppResult<Vec<DraftKey>> {
        let mut dir = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| AppError::storage(format!("read draft dir: {e}")))?;

        let mut keys = Vec::new();
        while let Some(dirent) = dir
            .next_entry()
            .await
            .map_err(|e| AppError::storage(format!("read draft dir: {e}")))?
        {
            let path = dirent.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            // Key recovery goes through the payload itself; a filename is
            // not enough because builder ids may contain separators
            match tokio::fs::read_to_string(&path).await {
                Ok(raw) => match serde_json::from_str::<DraftEntry>(&raw) {
                    Ok(entry) => keys.push(entry.key),
                    Err(e) => warn!(path = %path.display(), error = %e, "Skipping unparseable draft"),
                },
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable draft"),
            }
        }
        Ok(keys)
    }
}
