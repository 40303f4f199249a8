// ABOUTME: Week-board route handlers: fetch, full save, and single-day save
// ABOUTME: Version arbitration is last-write-wins with an in-band soft conflict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Week-board routes
//!
//! A full save is accepted when the submitted version is not behind the
//! stored one. A declined save is NOT an HTTP error: the response carries
//! `accepted: false` plus the stored board, and the client's hash
//! reconciliation takes it from there.

use crate::board::{week_start_for, SlotLists, WeekBoard};
use crate::constants::limits;
use crate::context::ServerResources;
use crate::errors::AppError;
use crate::models::MealSlot;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use axum::routing::{get, put};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Query parameters for board fetches
#[derive(Debug, Deserialize)]
struct BoardQuery {
    user_id: Uuid,
    week_start: NaiveDate,
}

/// Response to a full-board save
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveBoardResponse {
    /// False when the submitted version was behind the stored one
    pub accepted: bool,
    /// The board now considered current (stored copy when declined)
    pub board: WeekBoard,
}

/// Request body for a single-day save
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveDayRequest {
    /// Owning user
    pub user_id: Uuid,
    /// Monday of the board week
    pub week_start: NaiveDate,
    /// Day being replaced
    pub date: NaiveDate,
    /// New lists for the day
    pub lists: SlotLists,
}

/// Week-board routes
pub struct WeekBoardRoutes;

impl WeekBoardRoutes {
    /// Create all week-board routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/week-board", get(Self::handle_get_board))
            .route("/api/week-board", put(Self::handle_save_board))
            .route("/api/week-board/day", put(Self::handle_save_day))
            .with_state(resources)
    }

    /// Handle board fetch; first access creates an empty board
    async fn handle_get_board(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<BoardQuery>,
    ) -> Result<Response, AppError> {
        let week_start = week_start_for(params.week_start);
        let board = Self::load_or_create(&resources, params.user_id, week_start).await?;

        // Best-effort activity bookkeeping; board fetches must not fail on it
        if let Err(e) = resources.database.update_last_active(params.user_id).await {
            tracing::debug!(user = %params.user_id, error = %e, "last_active update failed");
        }

        Ok((StatusCode::OK, Json(board)).into_response())
    }

    /// Handle full-board save with version arbitration
    async fn handle_save_board(
        State(resources): State<Arc<ServerResources>>,
        Json(board): Json<WeekBoard>,
    ) -> Result<Response, AppError> {
        validate_board(&board)?;

        let stored_version = resources
            .database
            .get_board_version(board.user_id, board.week_start)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let accepted = stored_version.map_or(true, |stored| board.version >= stored);
        if accepted {
            resources
                .database
                .upsert_week_board(&board)
                .await
                .map_err(|e| AppError::database(e.to_string()))?;
            info!(user = %board.user_id, week = %board.week_start, version = board.version, "Board saved");
            let response = SaveBoardResponse {
                accepted: true,
                board,
            };
            return Ok((StatusCode::OK, Json(response)).into_response());
        }

        // Stale submission: hand back the stored copy in-band
        let stored = resources
            .database
            .get_week_board(board.user_id, board.week_start)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::not_found("week board"))?;
        info!(user = %board.user_id, week = %board.week_start, "Stale board save declined");
        let response = SaveBoardResponse {
            accepted: false,
            board: stored,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle single-day save (day-keyed last-write-wins)
    async fn handle_save_day(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SaveDayRequest>,
    ) -> Result<Response, AppError> {
        validate_lists(&request.lists)?;
        let week_start = week_start_for(request.week_start);

        let mut board = Self::load_or_create(&resources, request.user_id, week_start).await?;
        board.set_day(request.date, request.lists)?;

        resources
            .database
            .upsert_week_board(&board)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        Ok((StatusCode::OK, Json(board)).into_response())
    }

    async fn load_or_create(
        resources: &Arc<ServerResources>,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> Result<WeekBoard, AppError> {
        let existing = resources
            .database
            .get_week_board(user_id, week_start)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        if let Some(board) = existing {
            return Ok(board);
        }

        let board = WeekBoard::new(user_id, week_start);
        resources
            .database
            .upsert_week_board(&board)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        Ok(board)
    }
}

/// Reject boards with out-of-week day keys or oversized slots
fn validate_board(board: &WeekBoard) -> Result<(), AppError> {
    if board.week_start != week_start_for(board.week_start) {
        return Err(AppError::invalid_input(format!(
            "week_start {} is not a Monday",
            board.week_start
        )));
    }
    for date in board.days.keys() {
        if !board.covers(*date) {
            return Err(AppError::invalid_input(format!(
                "day key {date} is outside the week starting {}",
                board.week_start
            )));
        }
    }
    validate_lists(&board.lists)?;
    for lists in board.days.values() {
        validate_lists(lists)?;
    }
    Ok(())
}

fn validate_lists(lists: &SlotLists) -> Result<(), AppError> {
    for slot in MealSlot::ALL {
        if lists.slot(slot).len() > limits::MAX_ENTRIES_PER_SLOT {
            return Err(AppError::invalid_input(format!(
                "too many meals in {slot} (max {})",
                limits::MAX_ENTRIES_PER_SLOT
            )));
        }
    }
    Ok(())
}
