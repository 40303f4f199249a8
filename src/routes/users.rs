// ABOUTME: User account route handlers: registration and lookup
// ABOUTME: Session auth lives in the web tier; this surface is account CRUD only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! User account routes

use crate::context::ServerResources;
use crate::errors::{AppError, ErrorCode};
use crate::models::User;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Request body for registration
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Email address (unique)
    pub email: String,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// User account routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users", post(Self::handle_create))
            .route("/api/users/:user_id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle registration
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateUserRequest>,
    ) -> Result<Response, AppError> {
        if !request.email.contains('@') {
            return Err(AppError::invalid_input("email is not an email"));
        }

        let user = User::new(request.email, request.display_name);
        resources.database.create_user(&user).await.map_err(|e| {
            let message = e.to_string();
            if message.contains("already in use") {
                AppError::new(ErrorCode::ResourceAlreadyExists, message)
            } else {
                AppError::database(message)
            }
        })?;

        info!(user = %user.id, "User registered");
        Ok((StatusCode::CREATED, Json(user)).into_response())
    }

    /// Handle lookup by id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let user = resources
            .database
            .get_user(user_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::not_found(format!("user {user_id}")))?;
        Ok((StatusCode::OK, Json(user)).into_response())
    }
}
