// ABOUTME: Shopping-list persistence operations
// ABOUTME: One consolidated JSON document per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

use super::Database;
use crate::shopping::ShoppingList;
use anyhow::Result;
use chrono::Utc;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the shopping-list table
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails.
    pub(super) async fn migrate_shopping(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS shopping_lists (
                user_id TEXT PRIMARY KEY,
                items_json TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Get the stored shopping list for a user, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored document is
    /// unparseable.
    pub async fn get_shopping_list(&self, user_id: Uuid) -> Result<Option<ShoppingList>> {
        let row = sqlx::query("SELECT items_json FROM shopping_lists WHERE user_id = $1")
            .bind(user_id.to_string())
            .fetch_optional(self.pool())
            .await?;

        match row {
            Some(row) => {
                let json: String = row.try_get("items_json")?;
                Ok(Some(serde_json::from_str(&json)?))
            }
            None => Ok(None),
        }
    }

    /// Insert or replace the shopping list for a user
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn save_shopping_list(&self, user_id: Uuid, list: &ShoppingList) -> Result<()> {
        let json = serde_json::to_string(list)?;
        sqlx::query(
            r"
            INSERT INTO shopping_lists (user_id, items_json, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT(user_id) DO UPDATE SET
                items_json = excluded.items_json,
                updated_at = excluded.updated_at
            ",
        )
        .bind(user_id.to_string())
        .bind(json)
        .bind(Utc::now().to_rfc3339())
        .execute(self.pool())
        .await?;
        Ok(())
    }
}
