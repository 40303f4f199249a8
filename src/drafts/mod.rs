// ABOUTME: Local-first draft cache with debounced persistence and hash reconciliation
// ABOUTME: Optimistic client state; conflict rule is content-hash inequality
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! # Draft Cache
//!
//! The mobile shell edits boards optimistically and persists drafts locally
//! before the server sees anything. This module carries that behavior:
//!
//! - `save_draft` coalesces rapid edits through a per-key debounce window
//!   (default 1 second) so a burst of taps costs one storage write.
//! - `restore` returns the freshest local copy, preferring a pending
//!   not-yet-flushed save over the stored one.
//! - `reconcile` applies the conflict rule: a draft overwrites server state
//!   only when its content hash differs from the hash of the
//!   server-fetched board. Equal hashes mean the draft is stale
//!   bookkeeping and is dropped.
//!
//! There is no transactional protocol here; reconciliation is a hash
//! comparison and persistence is last-write-wins.

/// Pluggable storage backends
pub mod storage;

pub use storage::{DraftStorage, FileDraftStorage, MemoryDraftStorage};

use crate::board::hash::content_hash;
use crate::board::WeekBoard;
use crate::constants::storage_keys;
use crate::errors::AppResult;
use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

/// Identity of a draft: one per user, builder surface, and week
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftKey {
    /// Owning user
    pub user_id: Uuid,
    /// Builder surface the draft came from ("meal-builder", "holiday-feast")
    pub builder_id: String,
    /// Monday of the drafted week
    pub week_start: NaiveDate,
}

impl DraftKey {
    /// Create a key for a builder surface and week
    #[must_use]
    pub fn new(user_id: Uuid, builder_id: impl Into<String>, week_start: NaiveDate) -> Self {
        Self {
            user_id,
            builder_id: builder_id.into(),
            week_start,
        }
    }

    /// Storage key string; the shape is shared with older app builds
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!(
            "{}{}_{}_{}",
            storage_keys::BOARD_DRAFT_PREFIX,
            self.user_id,
            self.builder_id,
            self.week_start
        )
    }
}

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.storage_key())
    }
}

/// A stored draft: the board plus the bookkeeping needed for reconciliation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftEntry {
    /// When the draft was captured
    pub saved_at: DateTime<Utc>,
    /// Draft identity
    pub key: DraftKey,
    /// Content hash of `board` at capture time
    pub board_hash: u32,
    /// The drafted board
    pub board: WeekBoard,
}

/// Outcome of reconciling a local draft against the server copy
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciled {
    /// The draft differs from the server copy; the caller should push it
    UseLocal(WeekBoard),
    /// No draft, or the draft matches the server copy; use the server board
    UseServer,
}

/// Local-first draft store with per-key debounced persistence
///
/// Clones share state; the store is cheap to hand to background tasks.
#[derive(Clone)]
pub struct DraftStore<S: DraftStorage> {
    storage: S,
    debounce: Duration,
    pending: Arc<DashMap<String, DraftEntry>>,
    timers: Arc<DashMap<String, JoinHandle<()>>>,
}

impl<S: DraftStorage + 'static> DraftStore<S> {
    /// Create a store over `storage` with the given debounce window
    #[must_use]
    pub fn new(storage: S, debounce: Duration) -> Self {
        Self {
            storage,
            debounce,
            pending: Arc::new(DashMap::new()),
            timers: Arc::new(DashMap::new()),
        }
    }

    /// Capture a draft of `board` for a builder surface
    ///
    /// The write is optimistic and debounced: rapid successive saves for
    /// the same key coalesce into one storage write carrying the latest
    /// board. Returns the draft key immediately; the storage write happens
    /// after the debounce window (or on [`flush`](Self::flush)).
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be content-hashed.
    pub fn save_draft(&self, builder_id: &str, board: WeekBoard) -> AppResult<DraftKey> {
        let key = DraftKey::new(board.user_id, builder_id, board.week_start);
        let entry = DraftEntry {
            saved_at: Utc::now(),
            key: key.clone(),
            board_hash: content_hash(&board)?,
            board,
        };

        let skey = key.storage_key();
        self.pending.insert(skey.clone(), entry);

        let storage = self.storage.clone();
        let pending = Arc::clone(&self.pending);
        let debounce = self.debounce;
        let task_key = skey.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if let Some((_, entry)) = pending.remove(&task_key) {
                debug!(key = %entry.key, "Flushing debounced draft");
                if let Err(e) = storage.store(&entry).await {
                    // Best-effort by contract: the next save retries
                    warn!(key = %entry.key, error = %e, "Draft flush failed");
                }
            }
        });

        // Restarting the window: the previous timer for this key is dead
        if let Some(previous) = self.timers.insert(skey, handle) {
            previous.abort();
        }

        Ok(key)
    }

    /// Force out every pending draft immediately
    ///
    /// Used on shutdown and before an explicit sync.
    ///
    /// # Errors
    ///
    /// Attempts every pending write; returns the first storage error
    /// encountered, if any.
    pub async fn flush(&self) -> AppResult<()> {
        for timer in self.timers.iter() {
            timer.value().abort();
        }
        self.timers.clear();

        let drained: Vec<DraftEntry> = self
            .pending
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        self.pending.clear();

        let mut first_err = None;
        for entry in drained {
            if let Err(e) = self.storage.store(&entry).await {
                warn!(key = %entry.key, error = %e, "Draft flush failed");
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// The freshest local draft for `key`, if any
    ///
    /// A pending not-yet-flushed save wins over the stored copy. A stored
    /// entry whose hash no longer matches its own board (torn write) is
    /// discarded and reported as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn restore(&self, key: &DraftKey) -> AppResult<Option<DraftEntry>> {
        if let Some(entry) = self.pending.get(&key.storage_key()) {
            return Ok(Some(entry.value().clone()));
        }

        let Some(entry) = self.storage.load(key).await? else {
            return Ok(None);
        };

        let actual = content_hash(&entry.board)?;
        if actual != entry.board_hash {
            warn!(key = %key, "Discarding draft with mismatched content hash");
            self.storage.remove(key).await?;
            return Ok(None);
        }
        Ok(Some(entry))
    }

    /// Reconcile the local draft against a freshly fetched server board
    ///
    /// The draft is used to overwrite server state ONLY when its content
    /// hash differs from the hash of the server board. An equal hash means
    /// the server already has this content; the draft is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing or the storage backend fails.
    pub async fn reconcile(&self, key: &DraftKey, server_board: &WeekBoard) -> AppResult<Reconciled> {
        let Some(draft) = self.restore(key).await? else {
            return Ok(Reconciled::UseServer);
        };

        let server_hash = content_hash(server_board)?;
        if draft.board_hash == server_hash {
            debug!(key = %key, "Draft matches server copy; discarding");
            self.discard(key).await?;
            return Ok(Reconciled::UseServer);
        }
        Ok(Reconciled::UseLocal(draft.board))
    }

    /// Drop the draft for `key`, cancelling any pending debounce
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn discard(&self, key: &DraftKey) -> AppResult<()> {
        let skey = key.storage_key();
        if let Some((_, timer)) = self.timers.remove(&skey) {
            timer.abort();
        }
        self.pending.remove(&skey);
        self.storage.remove(key).await
    }

    /// Number of saves still waiting on their debounce window
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Borrow the underlying storage backend
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}
