// ABOUTME: Ingredient name normalization and grocery unit canonicalization
// ABOUTME: Produces the (normalized_name, unit) merge key for consolidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Name and unit normalization
//!
//! "2 large Roma tomatoes" and "roma tomato" must land on the same
//! shopping-list line. Normalization lowercases, strips leading quantity
//! tokens and preparation descriptors, and singularizes; units parse
//! case-insensitively with the common grocery aliases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Preparation/size descriptors dropped from merge keys
///
/// Form words like "frozen" and "canned" stay: they are classification
/// signal, not preparation noise.
const DESCRIPTORS: &[&str] = &[
    "fresh", "chopped", "diced", "minced", "sliced", "grated", "shredded", "peeled", "large",
    "small", "medium", "organic", "ripe", "raw", "boneless", "skinless", "finely", "roughly",
    "thinly", "extra",
];

/// Normalize an ingredient name into its merge-key form
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let mut words = Vec::new();
    let mut leading = true;

    for token in raw.to_lowercase().split_whitespace() {
        let token = token.trim_matches(|c: char| !c.is_ascii_alphanumeric());
        if token.is_empty() {
            continue;
        }
        if leading && is_quantity_token(token) {
            continue;
        }
        leading = false;
        if DESCRIPTORS.contains(&token) {
            continue;
        }
        words.push(singularize(token));
    }

    words.join(" ")
}

/// True for tokens like "2", "2.5", or "1/2"
fn is_quantity_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '/')
}

/// Naive singularization, good enough for grocery nouns
fn singularize(word: &str) -> String {
    if word.len() <= 3 || word.ends_with("ss") {
        return word.into();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("oes") {
        return format!("{stem}o");
    }
    word.strip_suffix('s').map_or_else(|| word.into(), Into::into)
}

/// Canonical grocery units
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    /// Discrete items ("3 lemons")
    Count,
    /// Grams
    Gram,
    /// Kilograms
    Kilogram,
    /// Milliliters
    Milliliter,
    /// Liters
    Liter,
    /// US cups
    Cup,
    /// Tablespoons
    Tablespoon,
    /// Teaspoons
    Teaspoon,
    /// Ounces
    Ounce,
    /// Pounds
    Pound,
    /// Anything else, kept verbatim (lowercased)
    Other(String),
}

impl Unit {
    /// Parse a unit string with the common grocery aliases
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "" | "count" | "unit" | "whole" | "piece" | "pieces" | "x" => Self::Count,
            "g" | "gram" | "grams" => Self::Gram,
            "kg" | "kilogram" | "kilograms" => Self::Kilogram,
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Self::Milliliter,
            "l" | "liter" | "liters" | "litre" | "litres" => Self::Liter,
            "cup" | "cups" => Self::Cup,
            "tbsp" | "tablespoon" | "tablespoons" => Self::Tablespoon,
            "tsp" | "teaspoon" | "teaspoons" => Self::Teaspoon,
            "oz" | "ounce" | "ounces" => Self::Ounce,
            "lb" | "lbs" | "pound" | "pounds" => Self::Pound,
            other => Self::Other(other.into()),
        }
    }

    /// Stable lowercase name used in storage and display
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Count => "count",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Milliliter => "ml",
            Self::Liter => "l",
            Self::Cup => "cup",
            Self::Tablespoon => "tbsp",
            Self::Teaspoon => "tsp",
            Self::Ounce => "oz",
            Self::Pound => "lb",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Unit {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_quantity_and_descriptors() {
        assert_eq!(normalize_name("2 large Roma tomatoes"), "roma tomato");
        assert_eq!(normalize_name("1/2 chopped red onion"), "red onion");
        assert_eq!(normalize_name("Fresh basil"), "basil");
    }

    #[test]
    fn test_normalize_keeps_form_words() {
        assert_eq!(normalize_name("frozen peas"), "frozen pea");
        assert_eq!(normalize_name("canned black beans"), "canned black bean");
    }

    #[test]
    fn test_singularize_families() {
        assert_eq!(singularize("tomatoes"), "tomato");
        assert_eq!(singularize("berries"), "berry");
        assert_eq!(singularize("eggs"), "egg");
        assert_eq!(singularize("swiss"), "swiss");
        assert_eq!(singularize("gas"), "gas");
    }

    #[test]
    fn test_unit_aliases() {
        assert_eq!(Unit::parse("Tbsp"), Unit::Tablespoon);
        assert_eq!(Unit::parse("GRAMS"), Unit::Gram);
        assert_eq!(Unit::parse(""), Unit::Count);
        assert_eq!(Unit::parse("bunch"), Unit::Other("bunch".into()));
    }
}
