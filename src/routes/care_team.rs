// ABOUTME: Care-team route handlers for physician and dietitian linking
// ABOUTME: Links are per-user, unique per member email
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Care-team routes

use crate::context::ServerResources;
use crate::errors::{AppError, ErrorCode};
use crate::models::{CareTeamLink, CareTeamRole};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use axum::routing::{delete, get, post};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Query parameters for care-team operations
#[derive(Debug, Deserialize)]
struct CareTeamQuery {
    user_id: Uuid,
}

/// Request body for linking a care-team member
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkCareTeamRequest {
    /// Owning user
    pub user_id: Uuid,
    /// Member display name
    pub member_name: String,
    /// Member role
    pub member_role: CareTeamRole,
    /// Member contact email
    pub member_email: String,
}

/// Care-team routes
pub struct CareTeamRoutes;

impl CareTeamRoutes {
    /// Create all care-team routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/care-team", get(Self::handle_list))
            .route("/api/care-team/link", post(Self::handle_link))
            .route("/api/care-team/:link_id", delete(Self::handle_unlink))
            .with_state(resources)
    }

    /// Handle care-team listing
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<CareTeamQuery>,
    ) -> Result<Response, AppError> {
        let links = resources
            .database
            .get_care_team(params.user_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        Ok((StatusCode::OK, Json(links)).into_response())
    }

    /// Handle linking a member
    async fn handle_link(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LinkCareTeamRequest>,
    ) -> Result<Response, AppError> {
        if request.member_name.trim().is_empty() {
            return Err(AppError::invalid_input("member_name must not be empty"));
        }
        if !request.member_email.contains('@') {
            return Err(AppError::invalid_input("member_email is not an email"));
        }

        let link = CareTeamLink::new(
            request.user_id,
            request.member_name,
            request.member_role,
            request.member_email,
        );

        resources
            .database
            .insert_care_team_link(&link)
            .await
            .map_err(|e| {
                let message = e.to_string();
                if message.contains("already linked") {
                    AppError::new(ErrorCode::ResourceAlreadyExists, message)
                } else {
                    AppError::database(message)
                }
            })?;

        info!(user = %link.user_id, member = %link.member_email, "Care-team member linked");
        Ok((StatusCode::CREATED, Json(link)).into_response())
    }

    /// Handle unlinking a member
    async fn handle_unlink(
        State(resources): State<Arc<ServerResources>>,
        Path(link_id): Path<Uuid>,
        Query(params): Query<CareTeamQuery>,
    ) -> Result<Response, AppError> {
        let removed = resources
            .database
            .delete_care_team_link(params.user_id, link_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        if !removed {
            return Err(AppError::not_found(format!("care-team link {link_id}")));
        }
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
