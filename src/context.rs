// ABOUTME: Shared server state handed to route handlers via axum State
// ABOUTME: Arc-shared database and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Shared server resources

use crate::config::environment::ServerConfig;
use crate::database::Database;
use std::sync::Arc;

/// Everything a route handler needs, shared behind `Arc`
pub struct ServerResources {
    /// Persistence layer
    pub database: Arc<Database>,
    /// Runtime configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper `Arc` sharing
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self {
            database: Arc::new(database),
            config,
        }
    }
}
