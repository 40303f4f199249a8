// ABOUTME: User account persistence operations
// ABOUTME: Minimal registration surface; session auth lives in the web tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

use super::Database;
use crate::models::User;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the users table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                display_name TEXT,
                created_at TEXT NOT NULL,
                last_active TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Create a user account
    ///
    /// # Errors
    ///
    /// Returns an error if the email is already in use or the write fails.
    pub async fn create_user(&self, user: &User) -> Result<Uuid> {
        if self.get_user_by_email(&user.email).await?.is_some() {
            return Err(anyhow!("email already in use: {}", user.email));
        }

        sqlx::query(
            r"
            INSERT INTO users (id, email, display_name, created_at, last_active)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(user.created_at.to_rfc3339())
        .bind(user.last_active.to_rfc3339())
        .execute(self.pool())
        .await?;

        Ok(user.id)
    }

    /// Get a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, display_name, created_at, last_active FROM users WHERE id = $1",
        )
        .bind(user_id.to_string())
        .fetch_optional(self.pool())
        .await?;

        row.map(Self::row_to_user).transpose()
    }

    /// Get a user by email address
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, display_name, created_at, last_active FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await?;

        row.map(Self::row_to_user).transpose()
    }

    /// Update a user's last-active timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn update_last_active(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE users SET last_active = $1 WHERE id = $2")
            .bind(Utc::now().to_rfc3339())
            .bind(user_id.to_string())
            .execute(self.pool())
            .await?;
        Ok(())
    }

    fn row_to_user(row: sqlx::sqlite::SqliteRow) -> Result<User> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        let last_active: String = row.try_get("last_active")?;
        Ok(User {
            id: Uuid::parse_str(&id)?,
            email: row.try_get("email")?,
            display_name: row.try_get("display_name")?,
            created_at: DateTime::parse_from_rfc3339(&created_at)?.with_timezone(&Utc),
            last_active: DateTime::parse_from_rfc3339(&last_active)?.with_timezone(&Utc),
        })
    }
}
