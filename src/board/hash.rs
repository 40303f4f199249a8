// ABOUTME: 32-bit rolling content hash over a canonical board serialization
// ABOUTME: Dirty-detection only; deliberately not cryptographic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! # Board Content Hashing
//!
//! Answers one question cheaply: "has this board changed since the last
//! server fetch?" The hash runs over a canonical JSON serialization that
//! excludes `version` and `meta.updated_at`, so re-saving identical content
//! under a newer version number does not read as a change.
//!
//! FNV-1a in 32 bits. Collisions are possible and acceptable: a collision
//! makes the draft layer keep a stale draft slightly longer, never lose
//! data.

use super::{BoardMeta, SlotLists, WeekBoard};
use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 16_777_619;

/// The board fields that participate in content identity
///
/// `version` and `meta.updated_at` are bookkeeping, not content: two boards
/// with the same meals must hash equal regardless of how often they were
/// saved. `BTreeMap` keeps the day keys in a deterministic order.
#[derive(Serialize)]
struct HashableBoard<'a> {
    id: Uuid,
    user_id: Uuid,
    week_start: NaiveDate,
    lists: &'a SlotLists,
    days: &'a BTreeMap<NaiveDate, SlotLists>,
    meta: HashableMeta<'a>,
}

#[derive(Serialize)]
struct HashableMeta<'a> {
    title: Option<&'a str>,
    servings: u32,
}

impl<'a> HashableMeta<'a> {
    fn of(meta: &'a BoardMeta) -> Self {
        Self {
            title: meta.title.as_deref(),
            servings: meta.servings,
        }
    }
}

/// 32-bit FNV-1a over a byte slice
#[must_use]
pub fn fnv1a32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in bytes {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Content hash of a week board
///
/// # Errors
///
/// Returns an error if the canonical serialization fails.
pub fn content_hash(board: &WeekBoard) -> AppResult<u32> {
    let view = HashableBoard {
        id: board.id,
        user_id: board.user_id,
        week_start: board.week_start,
        lists: &board.lists,
        days: &board.days,
        meta: HashableMeta::of(&board.meta),
    };
    let bytes = serde_json::to_vec(&view)?;
    Ok(fnv1a32(&bytes))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::board::MealEntry;
    use chrono::Utc;

    fn board() -> WeekBoard {
        WeekBoard::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        )
    }

    #[test]
    fn test_fnv1a32_known_vectors() {
        // Standard FNV-1a test vectors
        assert_eq!(fnv1a32(b""), 0x811c_9dc5);
        assert_eq!(fnv1a32(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a32(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_hash_ignores_version_and_timestamp() {
        let mut b = board();
        let before = content_hash(&b).unwrap();

        b.version += 5;
        b.meta.updated_at = Utc::now();
        assert_eq!(content_hash(&b).unwrap(), before);
    }

    #[test]
    fn test_hash_changes_with_content() {
        let mut b = board();
        let before = content_hash(&b).unwrap();

        b.lists.dinner.push(MealEntry::titled("Veggie chili"));
        assert_ne!(content_hash(&b).unwrap(), before);
    }
}
