// ABOUTME: Offline macro log queue with forgiving parse semantics
// ABOUTME: Parse failure yields an empty queue and zeroed totals, never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Offline macro log queue
//!
//! Entries captured while the API is unreachable wait here and replay on
//! reconnect. The stored payload (storage key `macros_offline_v1`) is
//! best-effort by contract: if it fails to parse, the queue comes back
//! empty and pending totals read as zero. Losing a queued log beats
//! blocking the tracking UI on a corrupt cache line.

use crate::client::BoardApiClient;
use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult};
use crate::models::{MacroLogEntry, MacroTotals};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Queue of macro logs awaiting replay, FIFO
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OfflineMacroQueue {
    entries: VecDeque<MacroLogEntry>,
}

impl OfflineMacroQueue {
    /// Empty queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stored payload
    ///
    /// A payload that fails to parse yields an EMPTY queue (merge no-ops
    /// and zeroed totals), not an error.
    #[must_use]
    pub fn from_payload(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!(error = %e, "Offline macro queue payload unparseable; starting empty");
            Self::new()
        })
    }

    /// Serialize for storage
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_payload(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Load from the offline cache file under `dir`
    ///
    /// Missing or unreadable files yield an empty queue.
    pub async fn load_from(dir: &Path) -> Self {
        match tokio::fs::read_to_string(Self::path_in(dir)).await {
            Ok(raw) => Self::from_payload(&raw),
            Err(_) => Self::new(),
        }
    }

    /// Persist to the offline cache file under `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn save_to(&self, dir: &Path) -> AppResult<()> {
        let payload = self.to_payload()?;
        tokio::fs::write(Self::path_in(dir), payload)
            .await
            .map_err(|e| AppError::storage(format!("write offline macro queue: {e}")))
    }

    fn path_in(dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", storage_keys::MACROS_OFFLINE))
    }

    /// Queue an entry captured offline
    pub fn push(&mut self, entry: MacroLogEntry) {
        self.entries.push_back(entry);
    }

    /// Number of queued entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is queued
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of queued totals (zero for an empty or unparseable queue)
    #[must_use]
    pub fn pending_totals(&self) -> MacroTotals {
        self.entries
            .iter()
            .fold(MacroTotals::default(), |acc, entry| acc + entry.totals)
    }

    /// Replay queued entries in FIFO order against the API
    ///
    /// Entries that fail to post are retained (in order) for the next
    /// drain. Returns how many entries were posted.
    pub async fn drain(&mut self, api: &BoardApiClient) -> usize {
        let mut posted = 0;
        let mut retained = VecDeque::new();

        while let Some(entry) = self.entries.pop_front() {
            match api.log_macros(&entry).await {
                Ok(()) => posted += 1,
                Err(e) => {
                    warn!(entry = %entry.id, error = %e, "Offline macro replay failed; retaining");
                    retained.push_back(entry);
                }
            }
        }

        self.entries = retained;
        posted
    }
}
