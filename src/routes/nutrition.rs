// ABOUTME: Macro tracking route handlers: log entries and daily totals
// ABOUTME: The offline queue drains through the same log endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Macro tracking routes

use crate::context::ServerResources;
use crate::errors::AppError;
use crate::models::{MacroLogEntry, MacroTotals};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use axum::routing::{get, post};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Query parameters for daily totals
#[derive(Debug, Deserialize)]
struct DailyQuery {
    user_id: Uuid,
    date: NaiveDate,
}

/// Response carrying daily macro totals
#[derive(Debug, Serialize, Deserialize)]
pub struct DailyMacrosResponse {
    /// Owning user
    pub user_id: Uuid,
    /// Day the totals cover
    pub date: NaiveDate,
    /// Summed totals (zeros when nothing is logged)
    pub totals: MacroTotals,
}

/// Macro tracking routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all macro tracking routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/macros/log", post(Self::handle_log))
            .route("/api/macros/daily", get(Self::handle_daily))
            .with_state(resources)
    }

    /// Handle one macro log entry
    async fn handle_log(
        State(resources): State<Arc<ServerResources>>,
        Json(entry): Json<MacroLogEntry>,
    ) -> Result<Response, AppError> {
        if entry.totals.calories < 0.0
            || entry.totals.protein_g < 0.0
            || entry.totals.carbs_g < 0.0
            || entry.totals.fat_g < 0.0
        {
            return Err(AppError::invalid_input("macro totals must be non-negative"));
        }

        resources
            .database
            .insert_macro_log(&entry)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        Ok((StatusCode::CREATED, Json(entry)).into_response())
    }

    /// Handle daily totals fetch
    async fn handle_daily(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<DailyQuery>,
    ) -> Result<Response, AppError> {
        let totals = resources
            .database
            .daily_macro_totals(params.user_id, params.date)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let response = DailyMacrosResponse {
            user_id: params.user_id,
            date: params.date,
            totals,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
