// ABOUTME: HTTP integration tests for macro tracking routes
// ABOUTME: Log entries, daily aggregation, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use remy_meal_server::models::{MacroLogEntry, MacroTotals, MealSlot};
use remy_meal_server::routes;
use remy_meal_server::routes::nutrition::DailyMacrosResponse;
use uuid::Uuid;

fn entry(user: Uuid, calories: f64) -> MacroLogEntry {
    MacroLogEntry::new(
        user,
        common::monday(),
        MealSlot::Breakfast,
        MacroTotals {
            calories,
            protein_g: calories / 20.0,
            carbs_g: calories / 10.0,
            fat_g: calories / 30.0,
        },
    )
}

#[tokio::test]
async fn test_log_and_daily_totals() {
    let resources = common::create_test_resources().await.unwrap();
    let app = routes::api_router(resources);
    let user = Uuid::new_v4();

    let first = AxumTestRequest::post("/api/macros/log")
        .json(&entry(user, 400.0))
        .send(app.clone())
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = AxumTestRequest::post("/api/macros/log")
        .json(&entry(user, 600.0))
        .send(app.clone())
        .await;
    assert_eq!(second.status(), StatusCode::CREATED);

    let response = AxumTestRequest::get(&format!(
        "/api/macros/daily?user_id={user}&date=2025-06-02"
    ))
    .send(app)
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let daily: DailyMacrosResponse = response.json();
    assert!((daily.totals.calories - 1000.0).abs() < f64::EPSILON);
    assert!((daily.totals.protein_g - 50.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_daily_totals_zero_when_nothing_logged() {
    let resources = common::create_test_resources().await.unwrap();
    let app = routes::api_router(resources);
    let user = Uuid::new_v4();

    let daily: DailyMacrosResponse = AxumTestRequest::get(&format!(
        "/api/macros/daily?user_id={user}&date=2025-06-02"
    ))
    .send(app)
    .await
    .json();
    assert!(daily.totals.is_zero());
}

#[tokio::test]
async fn test_daily_totals_isolated_per_user_and_date() {
    let resources = common::create_test_resources().await.unwrap();
    let app = routes::api_router(resources);
    let user = Uuid::new_v4();
    let other = Uuid::new_v4();

    AxumTestRequest::post("/api/macros/log")
        .json(&entry(user, 500.0))
        .send(app.clone())
        .await;
    AxumTestRequest::post("/api/macros/log")
        .json(&entry(other, 900.0))
        .send(app.clone())
        .await;

    let daily: DailyMacrosResponse = AxumTestRequest::get(&format!(
        "/api/macros/daily?user_id={user}&date=2025-06-02"
    ))
    .send(app.clone())
    .await
    .json();
    assert!((daily.totals.calories - 500.0).abs() < f64::EPSILON);

    let other_day: DailyMacrosResponse = AxumTestRequest::get(&format!(
        "/api/macros/daily?user_id={user}&date=2025-06-03"
    ))
    .send(app)
    .await
    .json();
    assert!(other_day.totals.is_zero());
}

#[tokio::test]
async fn test_log_rejects_negative_totals() {
    let resources = common::create_test_resources().await.unwrap();
    let app = routes::api_router(resources);

    let mut bad = entry(Uuid::new_v4(), 400.0);
    bad.totals.protein_g = -5.0;

    let response = AxumTestRequest::post("/api/macros/log")
        .json(&bad)
        .send(app)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
