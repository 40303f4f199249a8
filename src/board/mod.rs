// ABOUTME: Week-board model with day-keyed meal lists and an integer version counter
// ABOUTME: Last-write-wins per date key; content hashing lives in the hash submodule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! # Week Boards
//!
//! A board covers one ISO week. `lists` is the week template; `days` holds
//! per-date overrides keyed by calendar date. Reads for a date fall back to
//! the template when no override exists, which is how the meal builders show
//! a default plan before the user customizes individual days.
//!
//! Every successful mutation bumps `version` by exactly one. The counter is
//! the only concurrency control: persistence is last-write-wins per date
//! key, and conflict detection is left to the draft layer's content hash.

/// Content hashing for dirty detection
pub mod hash;

use crate::errors::{AppError, AppResult};
use crate::models::{IngredientLine, MacroTotals, MealSlot};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One meal on a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Unique entry identifier
    pub id: Uuid,
    /// Meal title shown on the board
    pub title: String,
    /// Ingredient lines, consumed by shopping-list generation
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
    /// Macro totals when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macros: Option<MacroTotals>,
    /// Estimated prep time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_minutes: Option<u32>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MealEntry {
    /// Create a bare entry with just a title
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            ingredients: Vec::new(),
            macros: None,
            prep_minutes: None,
            notes: None,
        }
    }
}

/// Per-slot meal lists for one day (or the week template)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SlotLists {
    /// Breakfast meals
    #[serde(default)]
    pub breakfast: Vec<MealEntry>,
    /// Lunch meals
    #[serde(default)]
    pub lunch: Vec<MealEntry>,
    /// Dinner meals
    #[serde(default)]
    pub dinner: Vec<MealEntry>,
    /// Snacks
    #[serde(default)]
    pub snacks: Vec<MealEntry>,
}

impl SlotLists {
    /// Borrow the list for a slot
    #[must_use]
    pub const fn slot(&self, slot: MealSlot) -> &Vec<MealEntry> {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    /// Mutably borrow the list for a slot
    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<MealEntry> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snacks => &mut self.snacks,
        }
    }

    /// Iterate every meal across all slots in display order
    pub fn iter_meals(&self) -> impl Iterator<Item = &MealEntry> {
        MealSlot::ALL.into_iter().flat_map(|slot| self.slot(slot))
    }

    /// Total meal count across slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len() + self.snacks.len()
    }

    /// True when no slot has meals
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Board metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardMeta {
    /// Optional board title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Servings the plan targets
    pub servings: u32,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl Default for BoardMeta {
    fn default() -> Self {
        Self {
            title: None,
            servings: 2,
            updated_at: Utc::now(),
        }
    }
}

/// A weekly meal-plan board keyed by day and meal slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBoard {
    /// Unique board identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Monday of the covered week
    pub week_start: NaiveDate,
    /// Integer version counter, bumped once per mutation
    pub version: i64,
    /// Week template lists
    pub lists: SlotLists,
    /// Per-date overrides; only dates inside the covered week
    #[serde(default)]
    pub days: BTreeMap<NaiveDate, SlotLists>,
    /// Metadata
    pub meta: BoardMeta,
}

impl WeekBoard {
    /// Create an empty board for the week containing `week_start`
    ///
    /// The date is normalized to the Monday of its week.
    #[must_use]
    pub fn new(user_id: Uuid, week_start: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            week_start: week_start_for(week_start),
            version: 0,
            lists: SlotLists::default(),
            days: BTreeMap::new(),
            meta: BoardMeta::default(),
        }
    }

    /// The 7 dates covered by this board, Monday first
    #[must_use]
    pub fn week_dates(&self) -> [NaiveDate; 7] {
        let mut dates = [self.week_start; 7];
        for (offset, slot) in dates.iter_mut().enumerate() {
            *slot = self.week_start + Duration::days(offset as i64);
        }
        dates
    }

    /// True when `date` falls inside the covered week
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.week_start && date < self.week_start + Duration::days(7)
    }

    /// Day-keyed read access: the override for `date`, falling back to the
    /// week template when none exists
    #[must_use]
    pub fn day_lists(&self, date: NaiveDate) -> &SlotLists {
        self.days.get(&date).unwrap_or(&self.lists)
    }

    /// Replace one day key; bumps the version counter
    ///
    /// # Errors
    ///
    /// Returns an error when `date` falls outside the covered week.
    pub fn set_day(&mut self, date: NaiveDate, lists: SlotLists) -> AppResult<()> {
        if !self.covers(date) {
            return Err(AppError::invalid_input(format!(
                "date {date} is outside the week starting {}",
                self.week_start
            )));
        }
        self.days.insert(date, lists);
        self.touch();
        Ok(())
    }

    /// Append a meal to one slot of one day; bumps the version counter
    ///
    /// The day inherits the current template lists before the edit when it
    /// had no override yet.
    ///
    /// # Errors
    ///
    /// Returns an error when `date` falls outside the covered week.
    pub fn apply_entry(&mut self, date: NaiveDate, slot: MealSlot, entry: MealEntry) -> AppResult<()> {
        if !self.covers(date) {
            return Err(AppError::invalid_input(format!(
                "date {date} is outside the week starting {}",
                self.week_start
            )));
        }
        let lists = self
            .days
            .entry(date)
            .or_insert_with(|| self.lists.clone());
        lists.slot_mut(slot).push(entry);
        self.touch();
        Ok(())
    }

    /// Remove a meal by id from one slot of one day; bumps the version
    /// counter when something was removed
    ///
    /// # Errors
    ///
    /// Returns an error when `date` falls outside the covered week or the
    /// entry does not exist.
    pub fn remove_entry(&mut self, date: NaiveDate, slot: MealSlot, id: Uuid) -> AppResult<()> {
        if !self.covers(date) {
            return Err(AppError::invalid_input(format!(
                "date {date} is outside the week starting {}",
                self.week_start
            )));
        }
        let lists = self
            .days
            .entry(date)
            .or_insert_with(|| self.lists.clone());
        let slot_list = lists.slot_mut(slot);
        let before = slot_list.len();
        slot_list.retain(|entry| entry.id != id);
        if slot_list.len() == before {
            return Err(AppError::not_found(format!("meal entry {id}")));
        }
        self.touch();
        Ok(())
    }

    /// Iterate every meal on the board: the week template plus every day
    /// override, each counted once
    pub fn iter_week_meals(&self) -> impl Iterator<Item = &MealEntry> {
        self.lists
            .iter_meals()
            .chain(self.days.values().flat_map(SlotLists::iter_meals))
    }

    /// Bump the version counter and refresh the mutation timestamp
    fn touch(&mut self) {
        self.version += 1;
        self.meta.updated_at = Utc::now();
    }
}

/// Monday of the week containing `date`
#[must_use]
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_week_start_normalization() {
        let wednesday = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
        assert_eq!(week_start_for(wednesday), monday());
        assert_eq!(week_start_for(monday()), monday());

        let board = WeekBoard::new(Uuid::new_v4(), wednesday);
        assert_eq!(board.week_start, monday());
    }

    #[test]
    fn test_day_lists_falls_back_to_template() {
        let mut board = WeekBoard::new(Uuid::new_v4(), monday());
        board.lists.dinner.push(MealEntry::titled("Sheet-pan salmon"));

        let tuesday = monday() + Duration::days(1);
        assert_eq!(board.day_lists(tuesday).dinner.len(), 1);

        let mut custom = SlotLists::default();
        custom.dinner.push(MealEntry::titled("Chicken stir fry"));
        board.set_day(tuesday, custom).unwrap();
        assert_eq!(board.day_lists(tuesday).dinner[0].title, "Chicken stir fry");
    }

    #[test]
    fn test_version_bumps_once_per_mutation() {
        let mut board = WeekBoard::new(Uuid::new_v4(), monday());
        assert_eq!(board.version, 0);

        board
            .apply_entry(monday(), MealSlot::Lunch, MealEntry::titled("Grain bowl"))
            .unwrap();
        assert_eq!(board.version, 1);

        board.set_day(monday(), SlotLists::default()).unwrap();
        assert_eq!(board.version, 2);
    }

    #[test]
    fn test_set_day_rejects_out_of_week_dates() {
        let mut board = WeekBoard::new(Uuid::new_v4(), monday());
        let next_monday = monday() + Duration::days(7);
        assert!(board.set_day(next_monday, SlotLists::default()).is_err());
        assert_eq!(board.version, 0);
    }

    #[test]
    fn test_remove_entry_missing_id() {
        let mut board = WeekBoard::new(Uuid::new_v4(), monday());
        let err = board.remove_entry(monday(), MealSlot::Dinner, Uuid::new_v4());
        assert!(err.is_err());
    }
}
