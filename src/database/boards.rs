// ABOUTME: Week-board persistence operations
// ABOUTME: Boards persist as JSON documents keyed by (user_id, week_start)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

use super::Database;
use crate::board::WeekBoard;
use anyhow::Result;
use chrono::NaiveDate;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the week-board table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_boards(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS week_boards (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                week_start TEXT NOT NULL,
                version INTEGER NOT NULL DEFAULT 0,
                board_json TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE(user_id, week_start)
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_week_boards_user ON week_boards(user_id)")
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Get the board for a user and week, if stored
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored document is
    /// unparseable.
    pub async fn get_week_board(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> Result<Option<WeekBoard>> {
        let row = sqlx::query(
            "SELECT board_json FROM week_boards WHERE user_id = $1 AND week_start = $2",
        )
        .bind(user_id.to_string())
        .bind(week_start.to_string())
        .fetch_optional(self.pool())
        .await?;

        match row {
            Some(row) => {
                let json: String = row.try_get("board_json")?;
                Ok(Some(serde_json::from_str(&json)?))
            }
            None => Ok(None),
        }
    }

    /// Insert or replace the board for `(user_id, week_start)`
    ///
    /// Last-write-wins by contract; version arbitration happens in the
    /// route layer before this call.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn upsert_week_board(&self, board: &WeekBoard) -> Result<()> {
        let json = serde_json::to_string(board)?;
        sqlx::query(
            r"
            INSERT INTO week_boards (id, user_id, week_start, version, board_json, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT(user_id, week_start) DO UPDATE SET
                version = excluded.version,
                board_json = excluded.board_json,
                updated_at = excluded.updated_at
            ",
        )
        .bind(board.id.to_string())
        .bind(board.user_id.to_string())
        .bind(board.week_start.to_string())
        .bind(board.version)
        .bind(json)
        .bind(board.meta.updated_at.to_rfc3339())
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Stored version counter for `(user_id, week_start)`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_board_version(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> Result<Option<i64>> {
        let row = sqlx::query(
            "SELECT version FROM week_boards WHERE user_id = $1 AND week_start = $2",
        )
        .bind(user_id.to_string())
        .bind(week_start.to_string())
        .fetch_optional(self.pool())
        .await?;

        match row {
            Some(row) => Ok(Some(row.try_get("version")?)),
            None => Ok(None),
        }
    }
}
