// ABOUTME: Macro log persistence and daily totals aggregation
// ABOUTME: One row per logged entry; totals sum server-side
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

use super::Database;
use crate::models::{MacroLogEntry, MacroTotals};
use anyhow::Result;
use chrono::NaiveDate;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the macro-log table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_nutrition(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS macro_logs (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                meal_slot TEXT NOT NULL,
                calories REAL NOT NULL DEFAULT 0,
                protein_g REAL NOT NULL DEFAULT 0,
                carbs_g REAL NOT NULL DEFAULT 0,
                fat_g REAL NOT NULL DEFAULT 0,
                logged_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_macro_logs_user_date ON macro_logs(user_id, date)",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Insert one macro log entry
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn insert_macro_log(&self, entry: &MacroLogEntry) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO macro_logs
                (id, user_id, date, meal_slot, calories, protein_g, carbs_g, fat_g, logged_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(entry.id.to_string())
        .bind(entry.user_id.to_string())
        .bind(entry.date.to_string())
        .bind(entry.meal_slot.as_str())
        .bind(entry.totals.calories)
        .bind(entry.totals.protein_g)
        .bind(entry.totals.carbs_g)
        .bind(entry.totals.fat_g)
        .bind(entry.logged_at.to_rfc3339())
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Daily macro totals for a user and date; zeros when nothing is logged
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn daily_macro_totals(&self, user_id: Uuid, date: NaiveDate) -> Result<MacroTotals> {
        let row = sqlx::query(
            r"
            SELECT
                COALESCE(SUM(calories), 0.0) AS calories,
                COALESCE(SUM(protein_g), 0.0) AS protein_g,
                COALESCE(SUM(carbs_g), 0.0) AS carbs_g,
                COALESCE(SUM(fat_g), 0.0) AS fat_g
            FROM macro_logs
            WHERE user_id = $1 AND date = $2
            ",
        )
        .bind(user_id.to_string())
        .bind(date.to_string())
        .fetch_one(self.pool())
        .await?;

        Ok(MacroTotals {
            calories: row.try_get("calories")?,
            protein_g: row.try_get("protein_g")?,
            carbs_g: row.try_get("carbs_g")?,
            fat_g: row.try_get("fat_g")?,
        })
    }
}
