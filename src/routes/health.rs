// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides system health and readiness endpoints for monitoring infrastructure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Health check routes for service monitoring
//!
//! `/health` is liveness only; `/ready` also probes the database so load
//! balancers stop routing before queries start failing.

use crate::constants::service_names;
use crate::context::ServerResources;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": service_names::REMY_MEAL_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        match resources.database.health_check().await {
            Ok(()) => (
                StatusCode::OK,
                Json(serde_json::json!({
                    "status": "ready",
                    "timestamp": chrono::Utc::now().to_rfc3339()
                })),
            )
                .into_response(),
            Err(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "degraded",
                    "error": e.to_string(),
                    "timestamp": chrono::Utc::now().to_rfc3339()
                })),
            )
                .into_response(),
        }
    }
}
