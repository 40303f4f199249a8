// ABOUTME: Keyword-based ingredient category and pantry-staple classification
// ABOUTME: Also classifies meal titles into starch/side families for prep flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Ingredient classification
//!
//! Classification is a case-insensitive match against fixed keyword
//! tables: single-word keywords match on word boundaries (token equality),
//! multi-word keywords as substrings. Precedence puts form categories
//! (frozen, canned) ahead of content categories so "frozen peas" files
//! under Frozen, not Produce.
//!
//! This is deliberately dumb. The tables grew out of support tickets, not
//! a taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grocery aisle category of a shopping-list line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    /// Fruit and vegetables
    Produce,
    /// Meat, fish, and plant proteins
    Protein,
    /// Milk products and eggs' neighbors
    Dairy,
    /// Breads and wraps
    Bakery,
    /// Rice, pasta, and dry grains
    Grains,
    /// Freezer aisle
    Frozen,
    /// Canned and jarred goods
    Canned,
    /// Sauces and condiments
    Condiments,
    /// Herbs, spices, and seasonings
    Spices,
    /// Drinks
    Beverages,
    /// Everything unmatched
    Other,
}

impl IngredientCategory {
    /// All categories in shopping-view display order
    pub const ALL: [Self; 11] = [
        Self::Produce,
        Self::Protein,
        Self::Dairy,
        Self::Bakery,
        Self::Grains,
        Self::Frozen,
        Self::Canned,
        Self::Condiments,
        Self::Spices,
        Self::Beverages,
        Self::Other,
    ];

    /// Stable lowercase name used in storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "produce",
            Self::Protein => "protein",
            Self::Dairy => "dairy",
            Self::Bakery => "bakery",
            Self::Grains => "grains",
            Self::Frozen => "frozen",
            Self::Canned => "canned",
            Self::Condiments => "condiments",
            Self::Spices => "spices",
            Self::Beverages => "beverages",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification precedence: form categories first, Produce last so the
/// broad produce table cannot shadow "frozen spinach" or "canned corn"
const CLASSIFY_PRECEDENCE: [IngredientCategory; 10] = [
    IngredientCategory::Frozen,
    IngredientCategory::Canned,
    IngredientCategory::Spices,
    IngredientCategory::Condiments,
    IngredientCategory::Beverages,
    IngredientCategory::Bakery,
    IngredientCategory::Dairy,
    IngredientCategory::Protein,
    IngredientCategory::Grains,
    IngredientCategory::Produce,
];

const PRODUCE: &[&str] = &[
    "apple", "banana", "orange", "lemon", "lime", "berry", "strawberry", "blueberry", "grape",
    "avocado", "mango", "pineapple", "spinach", "lettuce", "kale", "arugula", "tomato", "onion",
    "garlic", "carrot", "celery", "cucumber", "zucchini", "broccoli", "cauliflower", "mushroom",
    "potato", "sweet potato", "pea", "green bean", "bell pepper", "jalapeno", "cilantro",
    "parsley", "ginger", "cabbage", "corn", "squash",
];

const PROTEIN: &[&str] = &[
    "chicken", "beef", "pork", "turkey", "lamb", "salmon", "tuna", "shrimp", "cod", "tilapia",
    "tofu", "tempeh", "egg", "bacon", "sausage", "steak", "ham", "ground beef", "ground turkey",
];

const DAIRY: &[&str] = &[
    "milk", "cheese", "yogurt", "butter", "cream", "sour cream", "cream cheese", "mozzarella",
    "cheddar", "parmesan", "feta", "ricotta",
];

const BAKERY: &[&str] = &[
    "bread", "bagel", "tortilla", "bun", "croissant", "pita", "naan", "baguette", "english muffin",
];

const GRAINS: &[&str] = &[
    "rice", "pasta", "quinoa", "oat", "oatmeal", "noodle", "couscous", "barley", "cereal",
    "flour", "breadcrumb", "granola", "spaghetti", "penne", "macaroni",
];

const FROZEN: &[&str] = &["frozen"];

const CANNED: &[&str] = &["canned", "jarred", "can of", "jar of"];

const CONDIMENTS: &[&str] = &[
    "ketchup", "mustard", "mayonnaise", "mayo", "soy sauce", "vinegar", "dressing", "salsa",
    "hot sauce", "sriracha", "jam", "maple syrup", "honey", "peanut butter", "tahini", "pesto",
    "worcestershire",
];

const SPICES: &[&str] = &[
    "salt", "black pepper", "peppercorn", "cumin", "paprika", "oregano", "basil", "thyme",
    "rosemary", "cinnamon", "nutmeg", "turmeric", "chili powder", "garlic powder", "onion powder",
    "curry powder", "bay leaf", "red pepper flake", "cayenne", "seasoning", "spice",
    "vanilla extract",
];

const BEVERAGES: &[&str] = &[
    "juice", "coffee", "tea", "soda", "sparkling water", "kombucha", "wine", "beer",
];

/// Ingredients commonly already on hand, excluded from the default
/// shopping view
const PANTRY_STAPLES: &[&str] = &[
    "salt", "black pepper", "olive oil", "vegetable oil", "canola oil", "flour", "sugar",
    "brown sugar", "baking powder", "baking soda", "vanilla extract", "soy sauce", "vinegar",
    "honey", "cooking spray",
];

/// Keyword match: multi-word keywords as substrings, single words on
/// word boundaries
fn matches_keyword(name: &str, keyword: &str) -> bool {
    if keyword.contains(' ') {
        name.contains(keyword)
    } else {
        name.split(|c: char| !c.is_ascii_alphanumeric())
            .any(|token| token == keyword)
    }
}

const fn table_for(category: IngredientCategory) -> &'static [&'static str] {
    match category {
        IngredientCategory::Produce => PRODUCE,
        IngredientCategory::Protein => PROTEIN,
        IngredientCategory::Dairy => DAIRY,
        IngredientCategory::Bakery => BAKERY,
        IngredientCategory::Grains => GRAINS,
        IngredientCategory::Frozen => FROZEN,
        IngredientCategory::Canned => CANNED,
        IngredientCategory::Condiments => CONDIMENTS,
        IngredientCategory::Spices => SPICES,
        IngredientCategory::Beverages => BEVERAGES,
        IngredientCategory::Other => &[],
    }
}

/// Classify a normalized ingredient name into its category
///
/// The input is expected lowercase (see
/// [`normalize_name`](super::normalize::normalize_name)); the match is
/// case-insensitive by lowering here as well.
#[must_use]
pub fn classify(name: &str) -> IngredientCategory {
    let name = name.to_lowercase();
    for category in CLASSIFY_PRECEDENCE {
        if table_for(category)
            .iter()
            .any(|keyword| matches_keyword(&name, keyword))
        {
            return category;
        }
    }
    IngredientCategory::Other
}

/// True when a normalized ingredient name is a pantry staple
#[must_use]
pub fn is_pantry_staple(name: &str) -> bool {
    let name = name.to_lowercase();
    PANTRY_STAPLES
        .iter()
        .any(|keyword| matches_keyword(&name, keyword))
}

/// Starch/side family of a meal, used by prep flows to suggest a default
/// carb side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarchSide {
    /// Rice family (rice, risotto, pilaf)
    Rice,
    /// Potato family (roasted, mashed, fries)
    Potato,
    /// Pasta and noodles
    Pasta,
    /// Bread-adjacent (sandwiches, wraps, burgers)
    Bread,
}

const RICE_MEALS: &[&str] = &["rice", "risotto", "pilaf", "paella", "biryani", "burrito bowl"];
const POTATO_MEALS: &[&str] = &["potato", "fries", "mashed", "hash", "gnocchi"];
const PASTA_MEALS: &[&str] = &[
    "pasta", "spaghetti", "penne", "noodle", "lasagna", "mac and cheese", "ramen", "lo mein",
];
const BREAD_MEALS: &[&str] = &[
    "sandwich", "toast", "burger", "wrap", "pita", "taco", "quesadilla", "panini", "sub",
];

/// Classify a meal title into a starch/side family, if any
#[must_use]
pub fn starch_side_for(meal_title: &str) -> Option<StarchSide> {
    let title = meal_title.to_lowercase();
    let families = [
        (StarchSide::Rice, RICE_MEALS),
        (StarchSide::Potato, POTATO_MEALS),
        (StarchSide::Pasta, PASTA_MEALS),
        (StarchSide::Bread, BREAD_MEALS),
    ];
    families
        .into_iter()
        .find(|(_, table)| table.iter().any(|keyword| matches_keyword(&title, keyword)))
        .map(|(family, _)| family)
}
