// ABOUTME: Shopping-list store with merge-on-insert consolidation
// ABOUTME: Merge key is (normalized_name, unit); quantities sum, notes concatenate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! # Shopping Lists
//!
//! A consolidated, categorized shopping list built from meal ingredient
//! lines. Inserting a line that collides on `(normalized_name, unit)`
//! merges instead of appending: quantities sum, notes concatenate, source
//! meals union, and the line un-checks (new need invalidates a done mark).
//!
//! Pantry staples are classified on insert and excluded from the default
//! view; callers can opt them back in.

/// Keyword-based category and starch classification
pub mod classifier;
/// Name and unit normalization
pub mod normalize;

pub use classifier::{classify, is_pantry_staple, starch_side_for, IngredientCategory, StarchSide};
pub use normalize::{normalize_name, Unit};

use crate::board::WeekBoard;
use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult};
use crate::models::IngredientLine;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// One consolidated shopping-list line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Unique line identifier
    pub id: Uuid,
    /// Display name (first raw name seen for this merge key)
    pub name: String,
    /// Merge-key name form
    pub normalized_name: String,
    /// Consolidated quantity in `unit`
    pub quantity: f64,
    /// Canonical unit
    pub unit: Unit,
    /// Aisle category
    pub category: IngredientCategory,
    /// True when the ingredient is a pantry staple
    pub is_pantry_staple: bool,
    /// Checked off by the user
    pub is_checked: bool,
    /// Concatenated notes, `"; "`-joined and deduplicated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Titles of the meals that contributed to this line
    #[serde(default)]
    pub source_meals: Vec<String>,
}

/// An un-consolidated line on its way into the list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShoppingItem {
    /// Raw ingredient name
    pub name: String,
    /// Amount in `unit`
    pub quantity: f64,
    /// Unit string as entered
    #[serde(default)]
    pub unit: String,
    /// Optional note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Meal the line came from, when generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_meal: Option<String>,
}

impl NewShoppingItem {
    /// Convenience constructor for a bare named line
    #[must_use]
    pub fn named(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            notes: None,
            source_meal: None,
        }
    }
}

/// The consolidated shopping list for one user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Lines in insertion order
    items: Vec<ShoppingListItem>,
    /// When true, the default view includes pantry staples
    #[serde(default)]
    include_pantry_staples: bool,
}

impl ShoppingList {
    /// Empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a consolidated list from every meal on a board
    #[must_use]
    pub fn from_board(board: &WeekBoard) -> Self {
        let mut list = Self::new();
        for meal in board.iter_week_meals() {
            for line in &meal.ingredients {
                list.add_line(line, Some(meal.title.clone()));
            }
        }
        list
    }

    /// Insert one line, consolidating on `(normalized_name, unit)`
    ///
    /// Returns the id of the line the insert landed on (new or merged).
    pub fn add(&mut self, item: NewShoppingItem) -> Uuid {
        let normalized = normalize_name(&item.name);
        let unit = Unit::parse(&item.unit);

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.normalized_name == normalized && line.unit == unit)
        {
            existing.quantity += item.quantity;
            merge_notes(&mut existing.notes, item.notes.as_deref());
            if let Some(meal) = item.source_meal {
                if !existing.source_meals.contains(&meal) {
                    existing.source_meals.push(meal);
                }
            }
            // A merged addition un-checks the line: new need, new trip
            existing.is_checked = false;
            return existing.id;
        }

        let item = ShoppingListItem {
            id: Uuid::new_v4(),
            category: classify(&normalized),
            is_pantry_staple: is_pantry_staple(&normalized),
            is_checked: false,
            name: item.name,
            normalized_name: normalized,
            quantity: item.quantity,
            unit,
            notes: item.notes,
            source_meals: item.source_meal.into_iter().collect(),
        };
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Insert one board ingredient line, recording its source meal
    fn add_line(&mut self, line: &IngredientLine, source_meal: Option<String>) {
        self.add(NewShoppingItem {
            name: line.name.clone(),
            quantity: line.quantity,
            unit: line.unit.clone(),
            notes: None,
            source_meal,
        });
    }

    /// Toggle the checked state of a line
    ///
    /// # Errors
    ///
    /// Returns an error when no line has the given id.
    pub fn toggle_checked(&mut self, id: Uuid) -> AppResult<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|line| line.id == id)
            .ok_or_else(|| AppError::not_found(format!("shopping list item {id}")))?;
        item.is_checked = !item.is_checked;
        Ok(item.is_checked)
    }

    /// Remove every checked line, returning how many were removed
    pub fn clear_checked(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|line| !line.is_checked);
        before - self.items.len()
    }

    /// Remove one line by id
    ///
    /// # Errors
    ///
    /// Returns an error when no line has the given id.
    pub fn remove(&mut self, id: Uuid) -> AppResult<()> {
        let before = self.items.len();
        self.items.retain(|line| line.id != id);
        if self.items.len() == before {
            return Err(AppError::not_found(format!("shopping list item {id}")));
        }
        Ok(())
    }

    /// Opt pantry staples in or out of the default view
    pub fn include_pantry_staples(&mut self, include: bool) {
        self.include_pantry_staples = include;
    }

    /// Lines in the default view: insertion order, staples filtered unless
    /// opted in
    pub fn visible_items(&self) -> impl Iterator<Item = &ShoppingListItem> {
        self.items
            .iter()
            .filter(move |line| self.include_pantry_staples || !line.is_pantry_staple)
    }

    /// All lines regardless of staple filtering
    #[must_use]
    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    /// Visible lines grouped by category, in display order; empty
    /// categories are omitted
    #[must_use]
    pub fn categorized(&self) -> Vec<(IngredientCategory, Vec<&ShoppingListItem>)> {
        IngredientCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let lines: Vec<&ShoppingListItem> = self
                    .visible_items()
                    .filter(|line| line.category == category)
                    .collect();
                if lines.is_empty() {
                    None
                } else {
                    Some((category, lines))
                }
            })
            .collect()
    }

    /// Load the device-cached list from `dir` (storage key
    /// `shopping-list-storage`)
    ///
    /// Missing or unparseable payloads yield an empty list, matching the
    /// app shell's treatment of a corrupt cache entry.
    pub async fn load_cached(dir: &Path) -> Self {
        let raw = match tokio::fs::read_to_string(Self::cache_path(dir)).await {
            Ok(raw) => raw,
            Err(_) => return Self::new(),
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Shopping list cache unparseable; starting empty");
            Self::new()
        })
    }

    /// Persist the list to the device cache under `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn save_cached(&self, dir: &Path) -> AppResult<()> {
        let payload = serde_json::to_string(self)?;
        tokio::fs::write(Self::cache_path(dir), payload)
            .await
            .map_err(|e| AppError::storage(format!("write shopping list cache: {e}")))
    }

    fn cache_path(dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", storage_keys::SHOPPING_LIST))
    }

    /// Total line count (including filtered staples)
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Concatenate notes with `"; "`, skipping duplicates
fn merge_notes(existing: &mut Option<String>, incoming: Option<&str>) {
    let Some(incoming) = incoming else { return };
    if incoming.is_empty() {
        return;
    }
    match existing {
        None => *existing = Some(incoming.into()),
        Some(current) => {
            let already = current.split("; ").any(|part| part == incoming);
            if !already {
                current.push_str("; ");
                current.push_str(incoming);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_merge_on_insert_sums_quantities() {
        let mut list = ShoppingList::new();
        let first = list.add(NewShoppingItem::named("2 large Roma tomatoes", 2.0, ""));
        let second = list.add(NewShoppingItem::named("roma tomato", 3.0, ""));

        assert_eq!(first, second);
        assert_eq!(list.len(), 1);
        assert!((list.items()[0].quantity - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distinct_units_do_not_merge() {
        let mut list = ShoppingList::new();
        list.add(NewShoppingItem::named("basmati rice", 200.0, "g"));
        list.add(NewShoppingItem::named("basmati rice", 1.0, "cup"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_merge_concatenates_and_dedupes_notes() {
        let mut list = ShoppingList::new();
        let mut item = NewShoppingItem::named("chicken breast", 2.0, "lb");
        item.notes = Some("skin on".into());
        list.add(item);

        let mut again = NewShoppingItem::named("chicken breast", 1.0, "lb");
        again.notes = Some("for stir fry".into());
        list.add(again);

        let mut third = NewShoppingItem::named("chicken breast", 1.0, "lb");
        third.notes = Some("skin on".into());
        list.add(third);

        assert_eq!(
            list.items()[0].notes.as_deref(),
            Some("skin on; for stir fry")
        );
    }

    #[test]
    fn test_merge_unchecks_line() {
        let mut list = ShoppingList::new();
        let id = list.add(NewShoppingItem::named("lemon", 2.0, ""));
        assert!(list.toggle_checked(id).unwrap());

        list.add(NewShoppingItem::named("lemons", 1.0, ""));
        assert!(!list.items()[0].is_checked);
    }

    #[test]
    fn test_pantry_staples_hidden_by_default() {
        let mut list = ShoppingList::new();
        list.add(NewShoppingItem::named("olive oil", 2.0, "tbsp"));
        list.add(NewShoppingItem::named("lemon", 1.0, ""));

        assert_eq!(list.visible_items().count(), 1);
        list.include_pantry_staples(true);
        assert_eq!(list.visible_items().count(), 2);
    }

    #[test]
    fn test_clear_checked() {
        let mut list = ShoppingList::new();
        let keep = list.add(NewShoppingItem::named("lemon", 1.0, ""));
        let done = list.add(NewShoppingItem::named("lime", 2.0, ""));
        list.toggle_checked(done).unwrap();

        assert_eq!(list.clear_checked(), 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, keep);
    }
}
