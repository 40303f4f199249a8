// ABOUTME: Care-team link persistence operations
// ABOUTME: One row per user-to-member link, unique per member email
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

use super::Database;
use crate::models::{CareTeamLink, CareTeamRole};
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the care-team table
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails.
    pub(super) async fn migrate_care_team(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS care_team_links (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                member_name TEXT NOT NULL,
                member_role TEXT NOT NULL,
                member_email TEXT NOT NULL,
                linked_at TEXT NOT NULL,
                UNIQUE(user_id, member_email)
            )
            ",
        )
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// All care-team links for a user, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn get_care_team(&self, user_id: Uuid) -> Result<Vec<CareTeamLink>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, member_name, member_role, member_email, linked_at
            FROM care_team_links
            WHERE user_id = $1
            ORDER BY linked_at ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(self.pool())
        .await?;

        rows.into_iter()
            .map(|row| {
                let id: String = row.try_get("id")?;
                let user_id: String = row.try_get("user_id")?;
                let member_role: String = row.try_get("member_role")?;
                let linked_at: String = row.try_get("linked_at")?;
                Ok(CareTeamLink {
                    id: Uuid::parse_str(&id)?,
                    user_id: Uuid::parse_str(&user_id)?,
                    member_name: row.try_get("member_name")?,
                    member_role: CareTeamRole::from_str_or_other(&member_role),
                    member_email: row.try_get("member_email")?,
                    linked_at: DateTime::parse_from_rfc3339(&linked_at)?.with_timezone(&Utc),
                })
            })
            .collect()
    }

    /// Insert one care-team link
    ///
    /// # Errors
    ///
    /// Returns an error if the member email is already linked for this
    /// user, or if the write fails.
    pub async fn insert_care_team_link(&self, link: &CareTeamLink) -> Result<()> {
        let result = sqlx::query(
            r"
            INSERT OR IGNORE INTO care_team_links
                (id, user_id, member_name, member_role, member_email, linked_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(link.id.to_string())
        .bind(link.user_id.to_string())
        .bind(&link.member_name)
        .bind(link.member_role.as_str())
        .bind(&link.member_email)
        .bind(link.linked_at.to_rfc3339())
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(anyhow!(
                "care-team member {} already linked",
                link.member_email
            ));
        }
        Ok(())
    }

    /// Delete one care-team link; true when a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub async fn delete_care_team_link(&self, user_id: Uuid, link_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM care_team_links WHERE id = $1 AND user_id = $2")
            .bind(link_id.to_string())
            .bind(user_id.to_string())
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
