// ABOUTME: SQLite-backed persistence for boards, lists, logs, and care teams
// ABOUTME: Single Database struct owning the pool; schema lives in per-domain files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! # Database Management
//!
//! SQLite via `sqlx`. Schema is created by idempotent `CREATE TABLE IF NOT
//! EXISTS` migrations in code, split across per-domain files:
//!
//! - week-board documents keyed by `(user_id, week_start)`
//! - shopping lists, one consolidated document per user
//! - macro logs, one row per logged entry
//! - care-team links and users
//!
//! Boards and shopping lists persist as JSON documents. The board version
//! counter is the only concurrency control; writes are last-write-wins.

mod boards;
mod care_team;
mod nutrition;
mod shopping;
mod users;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

/// Database manager for meal-planning persistence
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // In-memory SQLite is per-connection; cap the pool at one so every
        // query sees the same database in tests
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new().connect_with(options).await?
        };

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index creation fails.
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_users().await?;
        self.migrate_boards().await?;
        self.migrate_shopping().await?;
        self.migrate_nutrition().await?;
        self.migrate_care_team().await?;
        Ok(())
    }

    /// Verify the database answers queries
    ///
    /// # Errors
    ///
    /// Returns an error if the probe query fails.
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Borrow the underlying pool
    pub(crate) const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}
