// ABOUTME: Core data models shared across the meal planning platform
// ABOUTME: Defines users, meal slots, ingredient lines, macro totals, and care-team links
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! # Data Models
//!
//! Common data structures shared by the board, shopping, nutrition, and
//! care-team modules. Board-specific types live in [`crate::board`];
//! shopping-list types in [`crate::shopping`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Email address (unique)
    pub email: String,
    /// Optional display name
    pub display_name: Option<String>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_active: DateTime<Utc>,
}

impl User {
    /// Create a new user with the current timestamp
    #[must_use]
    pub fn new(email: String, display_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            created_at: now,
            last_active: now,
        }
    }
}

/// The four meal slots of a board day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Anything between
    Snacks,
}

impl MealSlot {
    /// All slots in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Stable lowercase name used in storage and URLs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One ingredient line of a meal, as entered or generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Raw ingredient name ("2 large Roma tomatoes")
    pub name: String,
    /// Amount in `unit`
    pub quantity: f64,
    /// Unit string as entered ("g", "cups", "")
    pub unit: String,
}

impl IngredientLine {
    /// Convenience constructor
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// Macro nutrient totals for a meal or a day
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Kilocalories
    pub calories: f64,
    /// Protein, grams
    pub protein_g: f64,
    /// Carbohydrates, grams
    pub carbs_g: f64,
    /// Fat, grams
    pub fat_g: f64,
}

impl MacroTotals {
    /// Component-wise sum, used when folding log entries into daily totals
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein_g: self.protein_g + other.protein_g,
            carbs_g: self.carbs_g + other.carbs_g,
            fat_g: self.fat_g + other.fat_g,
        }
    }

    /// True when every component is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.calories.abs() < f64::EPSILON
            && self.protein_g.abs() < f64::EPSILON
            && self.carbs_g.abs() < f64::EPSILON
            && self.fat_g.abs() < f64::EPSILON
    }
}

impl std::ops::Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.merged(&rhs)
    }
}

/// A single logged macro entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroLogEntry {
    /// Unique entry identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Day the entry counts toward
    pub date: NaiveDate,
    /// Meal slot the entry belongs to
    pub meal_slot: MealSlot,
    /// Logged totals
    pub totals: MacroTotals,
    /// Capture timestamp
    pub logged_at: DateTime<Utc>,
}

impl MacroLogEntry {
    /// Create a new entry stamped with the current time
    #[must_use]
    pub fn new(user_id: Uuid, date: NaiveDate, meal_slot: MealSlot, totals: MacroTotals) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            meal_slot,
            totals,
            logged_at: Utc::now(),
        }
    }
}

/// Role of a linked care-team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareTeamRole {
    /// Treating physician
    Physician,
    /// Registered dietitian
    Dietitian,
    /// Health coach
    Coach,
    /// Anyone else the user shares with
    Other,
}

impl CareTeamRole {
    /// Stable lowercase name used in storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Physician => "physician",
            Self::Dietitian => "dietitian",
            Self::Coach => "coach",
            Self::Other => "other",
        }
    }

    /// Parse from the stored lowercase name, defaulting to `Other`
    #[must_use]
    pub fn from_str_or_other(s: &str) -> Self {
        match s {
            "physician" => Self::Physician,
            "dietitian" => Self::Dietitian,
            "coach" => Self::Coach,
            _ => Self::Other,
        }
    }
}

/// A link between a user and a care-team member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareTeamLink {
    /// Unique link identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Member display name
    pub member_name: String,
    /// Member role
    pub member_role: CareTeamRole,
    /// Contact email for report delivery
    pub member_email: String,
    /// Link creation timestamp
    pub linked_at: DateTime<Utc>,
}

impl CareTeamLink {
    /// Create a new link stamped with the current time
    #[must_use]
    pub fn new(
        user_id: Uuid,
        member_name: String,
        member_role: CareTeamRole,
        member_email: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            member_name,
            member_role,
            member_email,
            linked_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_totals_merge() {
        let breakfast = MacroTotals {
            calories: 420.0,
            protein_g: 22.0,
            carbs_g: 48.0,
            fat_g: 14.0,
        };
        let lunch = MacroTotals {
            calories: 615.0,
            protein_g: 38.0,
            carbs_g: 52.0,
            fat_g: 21.0,
        };

        let day = breakfast + lunch;
        assert!((day.calories - 1035.0).abs() < f64::EPSILON);
        assert!((day.protein_g - 60.0).abs() < f64::EPSILON);
        assert!(!day.is_zero());
        assert!(MacroTotals::default().is_zero());
    }

    #[test]
    fn test_meal_slot_round_trip() {
        for slot in MealSlot::ALL {
            let json = serde_json::to_string(&slot).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", slot.as_str()));
        }
    }

    #[test]
    fn test_care_team_role_parsing() {
        assert_eq!(
            CareTeamRole::from_str_or_other("physician"),
            CareTeamRole::Physician
        );
        assert_eq!(
            CareTeamRole::from_str_or_other("unknown"),
            CareTeamRole::Other
        );
    }
}
