// ABOUTME: Shared test setup helpers for integration tests
// ABOUTME: In-memory database, server resources, and sample board fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

#![allow(dead_code)] // not every test binary uses every helper

use remy_meal_server::board::{MealEntry, WeekBoard};
use remy_meal_server::config::environment::{DatabaseUrl, ServerConfig};
use remy_meal_server::context::ServerResources;
use remy_meal_server::database::Database;
use remy_meal_server::models::{IngredientLine, MealSlot};
use std::sync::Arc;

/// Monday used by board fixtures
pub fn monday() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

/// Fresh in-memory database with migrations applied
pub async fn create_test_database() -> anyhow::Result<Database> {
    Database::new("sqlite::memory:").await
}

/// Test configuration backed by an in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 8081,
        database: remy_meal_server::config::environment::DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        ..ServerConfig::default()
    }
}

/// Server resources over a fresh in-memory database
pub async fn create_test_resources() -> anyhow::Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    let config = Arc::new(test_config());
    Ok(Arc::new(ServerResources::new(database, config)))
}

/// A board with a couple of meals whose ingredients overlap, for
/// consolidation tests
pub fn sample_board(user_id: uuid::Uuid) -> WeekBoard {
    let mut board = WeekBoard::new(user_id, monday());

    let mut tacos = MealEntry::titled("Chicken Tacos");
    tacos.ingredients = vec![
        IngredientLine::new("chicken breast", 1.0, "lb"),
        IngredientLine::new("tortillas", 8.0, ""),
        IngredientLine::new("2 large Roma tomatoes", 2.0, ""),
    ];

    let mut salad = MealEntry::titled("Garden Salad");
    salad.ingredients = vec![
        IngredientLine::new("roma tomato", 3.0, ""),
        IngredientLine::new("lettuce", 1.0, ""),
        IngredientLine::new("olive oil", 2.0, "tbsp"),
    ];

    board
        .apply_entry(monday(), MealSlot::Dinner, tacos)
        .unwrap();
    board
        .apply_entry(monday(), MealSlot::Lunch, salad)
        .unwrap();
    board
}
