// ABOUTME: Typed REST client data layer for the meal planning API
// ABOUTME: Thin JSON wrappers plus the draft sync flow built on reconciliation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! # Board API Client
//!
//! Thin typed wrappers over the REST endpoints, used by the mobile shell's
//! data layer and by the offline macro queue drain. All payloads are JSON
//! over HTTP(S); failures map onto the external-service error class and
//! surface to callers unchanged (one-shot, no retry policy).

use crate::board::{SlotLists, WeekBoard};
use crate::config::environment::ClientConfig;
use crate::drafts::{DraftKey, DraftStorage, DraftStore, Reconciled};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::MacroLogEntry;
use crate::routes::shopping_list::AddItemsRequest;
use crate::routes::week_board::{SaveBoardResponse, SaveDayRequest};
use crate::shopping::{NewShoppingItem, ShoppingList};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;
use uuid::Uuid;

/// Service label used in error messages
const SERVICE: &str = "board-api";

/// Typed client for the meal planning REST API
#[derive(Debug, Clone)]
pub struct BoardApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BoardApiClient {
    /// Create a client for the API at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL fails to parse.
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::config(format!("invalid API base URL: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Create a client from the environment-derived configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL fails to parse.
    pub fn from_config(config: &ClientConfig) -> AppResult<Self> {
        Self::new(&config.api_base_url)
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::config(format!("invalid API path {path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> AppResult<T> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    format!("{SERVICE}: {e}"),
                )
            })?;
        Self::decode(response).await
    }

    async fn send_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    format!("{SERVICE}: {e}"),
                )
            })?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                SERVICE,
                format!("HTTP {status}: {body}"),
            ));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::serialization(format!("{SERVICE} response: {e}")))
    }

    /// Fetch the week board for a user and week (created empty on first
    /// access server-side)
    ///
    /// # Errors
    ///
    /// Returns an error when the API is unreachable or responds non-2xx.
    pub async fn fetch_week_board(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> AppResult<WeekBoard> {
        self.get_json(
            "/api/week-board",
            &[
                ("user_id", user_id.to_string()),
                ("week_start", week_start.to_string()),
            ],
        )
        .await
    }

    /// Save a full week board (last-write-wins; the server may decline a
    /// stale version and return its copy)
    ///
    /// # Errors
    ///
    /// Returns an error when the API is unreachable or responds non-2xx.
    pub async fn save_week_board(&self, board: &WeekBoard) -> AppResult<SaveBoardResponse> {
        self.send_json(reqwest::Method::PUT, "/api/week-board", board)
            .await
    }

    /// Save a single day of a board
    ///
    /// # Errors
    ///
    /// Returns an error when the API is unreachable or responds non-2xx.
    pub async fn save_day(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
        date: NaiveDate,
        lists: SlotLists,
    ) -> AppResult<WeekBoard> {
        let request = SaveDayRequest {
            user_id,
            week_start,
            date,
            lists,
        };
        self.send_json(reqwest::Method::PUT, "/api/week-board/day", &request)
            .await
    }

    /// Fetch the consolidated shopping list for a user
    ///
    /// # Errors
    ///
    /// Returns an error when the API is unreachable or responds non-2xx.
    pub async fn fetch_shopping_list(&self, user_id: Uuid) -> AppResult<ShoppingList> {
        self.get_json("/api/shopping-list", &[("user_id", user_id.to_string())])
            .await
    }

    /// Add lines to the shopping list (consolidating server-side)
    ///
    /// # Errors
    ///
    /// Returns an error when the API is unreachable or responds non-2xx.
    pub async fn add_shopping_items(
        &self,
        user_id: Uuid,
        items: Vec<NewShoppingItem>,
    ) -> AppResult<ShoppingList> {
        let request = AddItemsRequest { user_id, items };
        self.send_json(reqwest::Method::POST, "/api/shopping-list/items", &request)
            .await
    }

    /// Post one macro log entry
    ///
    /// # Errors
    ///
    /// Returns an error when the API is unreachable or responds non-2xx.
    pub async fn log_macros(&self, entry: &MacroLogEntry) -> AppResult<()> {
        let _: MacroLogEntry = self
            .send_json(reqwest::Method::POST, "/api/macros/log", entry)
            .await?;
        Ok(())
    }

    /// Sync a drafted board against the server
    ///
    /// Fetches the server copy, reconciles via content hash, and pushes the
    /// draft when (and only when) it differs. Either way the caller gets
    /// the board the app should display, and the draft is discarded once
    /// the server has spoken.
    ///
    /// # Errors
    ///
    /// Returns an error when the API is unreachable, responds non-2xx, or
    /// the draft storage backend fails.
    pub async fn sync_week_board<S: DraftStorage + 'static>(
        &self,
        store: &DraftStore<S>,
        key: &DraftKey,
    ) -> AppResult<WeekBoard> {
        let server_board = self.fetch_week_board(key.user_id, key.week_start).await?;

        match store.reconcile(key, &server_board).await? {
            Reconciled::UseServer => {
                debug!(key = %key, "Sync: server copy is current");
                Ok(server_board)
            }
            Reconciled::UseLocal(local) => {
                let response = self.save_week_board(&local).await?;
                store.discard(key).await?;
                if response.accepted {
                    info!(key = %key, "Sync: pushed local draft");
                } else {
                    info!(key = %key, "Sync: server copy was newer; draft dropped");
                }
                Ok(response.board)
            }
        }
    }
}
