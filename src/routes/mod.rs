// ABOUTME: Route module organization for the meal planning HTTP endpoints
// ABOUTME: Centralized router assembly with tracing, CORS, timeout, and body limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Route module for the Remy meal server
//!
//! Each domain module contains only route definitions and thin handler
//! functions; the engines they call live in [`crate::board`],
//! [`crate::shopping`], and [`crate::nutrition`].

/// Care-team linking routes
pub mod care_team;
/// Health check and readiness routes
pub mod health;
/// Macro tracking routes
pub mod nutrition;
/// Shopping-list routes
pub mod shopping_list;
/// User account routes
pub mod users;
/// Week-board routes
pub mod week_board;

/// Care-team route handlers
pub use care_team::CareTeamRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Macro tracking route handlers
pub use nutrition::NutritionRoutes;
/// Shopping-list route handlers
pub use shopping_list::ShoppingListRoutes;
/// User account route handlers
pub use users::UserRoutes;
/// Week-board route handlers
pub use week_board::WeekBoardRoutes;

use crate::constants::defaults;
use crate::context::ServerResources;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Assemble the full API router with shared middleware
#[must_use]
pub fn api_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(WeekBoardRoutes::routes(Arc::clone(&resources)))
        .merge(ShoppingListRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionRoutes::routes(Arc::clone(&resources)))
        .merge(CareTeamRoutes::routes(Arc::clone(&resources)))
        .merge(UserRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            defaults::REQUEST_TIMEOUT_SECS,
        )))
        .layer(RequestBodyLimitLayer::new(
            defaults::REQUEST_BODY_LIMIT_BYTES,
        ))
}
