// ABOUTME: Shopping-list route handlers: consolidating add, toggle, clear, regenerate
// ABOUTME: Consolidation runs server-side through the shopping engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Shopping-list routes
//!
//! All mutating endpoints load the user's stored list, run the engine, and
//! write the result back. The list is one document per user; there is no
//! per-line persistence.

use crate::constants::limits;
use crate::context::ServerResources;
use crate::errors::AppError;
use crate::shopping::{NewShoppingItem, ShoppingList};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use axum::routing::{get, post};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Query parameters for list fetches
#[derive(Debug, Deserialize)]
struct ListQuery {
    user_id: Uuid,
}

/// Request body for adding lines
#[derive(Debug, Serialize, Deserialize)]
pub struct AddItemsRequest {
    /// Owning user
    pub user_id: Uuid,
    /// Lines to consolidate into the list
    pub items: Vec<NewShoppingItem>,
}

/// Request body for toggling a line's checked state
#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleItemRequest {
    /// Owning user
    pub user_id: Uuid,
    /// Line to toggle
    pub item_id: Uuid,
}

/// Request body for clearing checked lines
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearCheckedRequest {
    /// Owning user
    pub user_id: Uuid,
}

/// Response to a clear-checked call
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearCheckedResponse {
    /// How many lines were removed
    pub removed: usize,
    /// The list after clearing
    pub list: ShoppingList,
}

/// Request body for regenerating the list from a week board
#[derive(Debug, Serialize, Deserialize)]
pub struct FromBoardRequest {
    /// Owning user
    pub user_id: Uuid,
    /// Week board to consolidate
    pub week_start: NaiveDate,
}

/// Shopping-list routes
pub struct ShoppingListRoutes;

impl ShoppingListRoutes {
    /// Create all shopping-list routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/shopping-list", get(Self::handle_get_list))
            .route("/api/shopping-list/items", post(Self::handle_add_items))
            .route("/api/shopping-list/toggle", post(Self::handle_toggle))
            .route(
                "/api/shopping-list/clear-checked",
                post(Self::handle_clear_checked),
            )
            .route("/api/shopping-list/from-board", post(Self::handle_from_board))
            .with_state(resources)
    }

    /// Handle list fetch; users without a stored list get an empty one
    async fn handle_get_list(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        let list = Self::load_or_empty(&resources, params.user_id).await?;
        Ok((StatusCode::OK, Json(list)).into_response())
    }

    /// Handle consolidating add
    async fn handle_add_items(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<AddItemsRequest>,
    ) -> Result<Response, AppError> {
        let mut list = Self::load_or_empty(&resources, request.user_id).await?;

        if list.len() + request.items.len() > limits::MAX_SHOPPING_ITEMS {
            return Err(AppError::invalid_input(format!(
                "shopping list would exceed {} lines",
                limits::MAX_SHOPPING_ITEMS
            )));
        }

        for item in request.items {
            list.add(item);
        }
        Self::save(&resources, request.user_id, &list).await?;
        Ok((StatusCode::OK, Json(list)).into_response())
    }

    /// Handle toggling one line
    async fn handle_toggle(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ToggleItemRequest>,
    ) -> Result<Response, AppError> {
        let mut list = resources
            .database
            .get_shopping_list(request.user_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::not_found("shopping list"))?;

        list.toggle_checked(request.item_id)?;
        Self::save(&resources, request.user_id, &list).await?;
        Ok((StatusCode::OK, Json(list)).into_response())
    }

    /// Handle removing checked lines
    async fn handle_clear_checked(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ClearCheckedRequest>,
    ) -> Result<Response, AppError> {
        let mut list = Self::load_or_empty(&resources, request.user_id).await?;
        let removed = list.clear_checked();
        Self::save(&resources, request.user_id, &list).await?;

        let response = ClearCheckedResponse { removed, list };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle regenerating the list from a stored week board
    async fn handle_from_board(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<FromBoardRequest>,
    ) -> Result<Response, AppError> {
        let board = resources
            .database
            .get_week_board(request.user_id, request.week_start)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::not_found("week board"))?;

        let list = ShoppingList::from_board(&board);
        Self::save(&resources, request.user_id, &list).await?;
        Ok((StatusCode::OK, Json(list)).into_response())
    }

    async fn load_or_empty(
        resources: &Arc<ServerResources>,
        user_id: Uuid,
    ) -> Result<ShoppingList, AppError> {
        let stored = resources
            .database
            .get_shopping_list(user_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        Ok(stored.unwrap_or_default())
    }

    async fn save(
        resources: &Arc<ServerResources>,
        user_id: Uuid,
        list: &ShoppingList,
    ) -> Result<(), AppError> {
        resources
            .database
            .save_shopping_list(user_id, list)
            .await
            .map_err(|e| AppError::database(e.to_string()))
    }
}
