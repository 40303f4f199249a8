// ABOUTME: Macro tracking module organization
// ABOUTME: Daily totals aggregation plus the best-effort offline log queue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! # Macro Tracking
//!
//! Logged entries aggregate into per-day totals; the offline queue holds
//! entries captured while the API was unreachable and replays them on
//! reconnect. See [`offline`] for the queue's deliberately forgiving
//! parse semantics.

/// Offline macro log queue
pub mod offline;

pub use offline::OfflineMacroQueue;

use crate::models::{MacroLogEntry, MacroTotals};
use chrono::NaiveDate;

/// Fold log entries into the daily total for `date`
///
/// Entries for other dates are ignored, so callers can pass an unfiltered
/// slice.
#[must_use]
pub fn daily_totals(entries: &[MacroLogEntry], date: NaiveDate) -> MacroTotals {
    entries
        .iter()
        .filter(|entry| entry.date == date)
        .fold(MacroTotals::default(), |acc, entry| acc + entry.totals)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::MealSlot;
    use uuid::Uuid;

    #[test]
    fn test_daily_totals_filters_by_date() {
        let user = Uuid::new_v4();
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();

        let entries = vec![
            MacroLogEntry::new(
                user,
                monday,
                MealSlot::Breakfast,
                MacroTotals {
                    calories: 400.0,
                    protein_g: 20.0,
                    carbs_g: 40.0,
                    fat_g: 15.0,
                },
            ),
            MacroLogEntry::new(
                user,
                monday,
                MealSlot::Dinner,
                MacroTotals {
                    calories: 700.0,
                    protein_g: 45.0,
                    carbs_g: 60.0,
                    fat_g: 25.0,
                },
            ),
            MacroLogEntry::new(user, tuesday, MealSlot::Lunch, MacroTotals::default()),
        ];

        let totals = daily_totals(&entries, monday);
        assert!((totals.calories - 1100.0).abs() < f64::EPSILON);
        assert!((totals.protein_g - 65.0).abs() < f64::EPSILON);

        assert!(daily_totals(&entries, tuesday).is_zero());
    }
}
