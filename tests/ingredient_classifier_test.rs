// ABOUTME: Integration tests for keyword-based ingredient classification
// ABOUTME: Word-boundary rules, precedence, staples, and starch-side families
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use remy_meal_server::shopping::{
    classify, is_pantry_staple, normalize_name, starch_side_for, IngredientCategory, StarchSide,
};

#[test]
fn test_classification_is_case_insensitive() {
    assert_eq!(classify("CHICKEN thighs"), IngredientCategory::Protein);
    assert_eq!(classify("Greek Yogurt"), IngredientCategory::Dairy);
    assert_eq!(classify("sourdough BREAD"), IngredientCategory::Bakery);
}

#[test]
fn test_single_word_keywords_match_on_word_boundaries() {
    // "pineapple" contains "apple" as a substring but not as a word
    assert_eq!(classify("pineapple"), IngredientCategory::Produce);
    // "butternut" must not match "butter"
    assert_ne!(classify("butternut squash"), IngredientCategory::Dairy);
    assert_eq!(classify("butternut squash"), IngredientCategory::Produce);
}

#[test]
fn test_multi_word_keywords_match_as_substrings() {
    assert_eq!(classify("reduced-fat sour cream"), IngredientCategory::Dairy);
    assert_eq!(
        classify("low sodium soy sauce"),
        IngredientCategory::Condiments
    );
    assert_eq!(classify("smoked black pepper"), IngredientCategory::Spices);
}

#[test]
fn test_form_categories_win_over_content_categories() {
    assert_eq!(classify("frozen spinach"), IngredientCategory::Frozen);
    assert_eq!(classify("canned corn"), IngredientCategory::Canned);
    assert_eq!(classify("spinach"), IngredientCategory::Produce);
    assert_eq!(classify("corn"), IngredientCategory::Produce);
}

#[test]
fn test_unmatched_names_fall_through_to_other() {
    assert_eq!(classify("nutritional yeast"), IngredientCategory::Other);
    assert_eq!(classify(""), IngredientCategory::Other);
}

#[test]
fn test_classification_composes_with_normalization() {
    assert_eq!(
        classify(&normalize_name("2 large Roma tomatoes")),
        IngredientCategory::Produce
    );
    assert_eq!(
        classify(&normalize_name("1/2 lb ground turkey")),
        IngredientCategory::Protein
    );
}

#[test]
fn test_pantry_staple_detection() {
    assert!(is_pantry_staple("olive oil"));
    assert!(is_pantry_staple("all-purpose flour"));
    assert!(is_pantry_staple("baking soda"));
    assert!(!is_pantry_staple("saffron"));
    // Word-boundary: "flourless" is not "flour"
    assert!(!is_pantry_staple("flourless cake mix"));
}

#[test]
fn test_starch_side_families() {
    assert_eq!(starch_side_for("Beef Burrito Bowl"), Some(StarchSide::Rice));
    assert_eq!(starch_side_for("Loaded baked potato"), Some(StarchSide::Potato));
    assert_eq!(starch_side_for("Spaghetti bolognese"), Some(StarchSide::Pasta));
    assert_eq!(starch_side_for("BLT Sandwich"), Some(StarchSide::Bread));
    assert_eq!(starch_side_for("Grilled salmon salad"), None);
}

#[test]
fn test_starch_side_first_family_wins() {
    // Title matches both rice and bread families; rice is checked first
    assert_eq!(
        starch_side_for("Rice bowl with pita chips"),
        Some(StarchSide::Rice)
    );
}
