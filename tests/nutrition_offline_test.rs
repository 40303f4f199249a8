// ABOUTME: Integration tests for the offline macro log queue
// ABOUTME: Forgiving parse semantics and file round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use remy_meal_server::models::{MacroLogEntry, MacroTotals, MealSlot};
use remy_meal_server::nutrition::{daily_totals, OfflineMacroQueue};
use uuid::Uuid;

fn entry(user: Uuid, calories: f64, protein: f64) -> MacroLogEntry {
    MacroLogEntry::new(
        user,
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        MealSlot::Lunch,
        MacroTotals {
            calories,
            protein_g: protein,
            carbs_g: 0.0,
            fat_g: 0.0,
        },
    )
}

#[test]
fn test_unparseable_payload_yields_empty_queue() {
    for garbage in ["", "{", "[1,2,3]", "null", "{\"entries\": \"nope\"}"] {
        let queue = OfflineMacroQueue::from_payload(garbage);
        assert!(queue.is_empty(), "payload {garbage:?} should yield empty");
        assert!(queue.pending_totals().is_zero());
    }
}

#[test]
fn test_payload_round_trip_preserves_order_and_totals() {
    let user = Uuid::new_v4();
    let mut queue = OfflineMacroQueue::new();
    queue.push(entry(user, 420.0, 25.0));
    queue.push(entry(user, 615.0, 40.0));

    let payload = queue.to_payload().unwrap();
    let restored = OfflineMacroQueue::from_payload(&payload);

    assert_eq!(restored.len(), 2);
    let totals = restored.pending_totals();
    assert!((totals.calories - 1035.0).abs() < f64::EPSILON);
    assert!((totals.protein_g - 65.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_file_round_trip_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    // Missing file is an empty queue, not an error
    let queue = OfflineMacroQueue::load_from(dir.path()).await;
    assert!(queue.is_empty());

    let user = Uuid::new_v4();
    let mut queue = OfflineMacroQueue::new();
    queue.push(entry(user, 300.0, 18.0));
    queue.save_to(dir.path()).await.unwrap();

    let restored = OfflineMacroQueue::load_from(dir.path()).await;
    assert_eq!(restored.len(), 1);
}

#[tokio::test]
async fn test_corrupt_file_yields_empty_queue() {
    let dir = tempfile::tempdir().unwrap();
    let user = Uuid::new_v4();

    let mut queue = OfflineMacroQueue::new();
    queue.push(entry(user, 300.0, 18.0));
    queue.save_to(dir.path()).await.unwrap();

    // Corrupt the stored payload in place
    let file = std::fs::read_dir(dir.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    std::fs::write(&file, b"v1|not-json-anymore").unwrap();

    let restored = OfflineMacroQueue::load_from(dir.path()).await;
    assert!(restored.is_empty());
    assert!(restored.pending_totals().is_zero());
}

#[test]
fn test_daily_totals_helper_matches_queue_totals() {
    let user = Uuid::new_v4();
    let entries = vec![entry(user, 420.0, 25.0), entry(user, 615.0, 40.0)];
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

    let totals = daily_totals(&entries, date);
    assert!((totals.calories - 1035.0).abs() < f64::EPSILON);

    let other_day = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
    assert!(daily_totals(&entries, other_day).is_zero());
}
