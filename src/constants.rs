// ABOUTME: Application constants and default configuration values
// ABOUTME: Centralizes ports, storage keys, timing windows, and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Application-wide constants organized by domain

/// Service identification
pub mod service_names {
    /// Canonical service name used in logs and health payloads
    pub const REMY_MEAL_SERVER: &str = "remy-meal-server";
}

/// Default values applied when the environment does not override them
pub mod defaults {
    /// Default HTTP API port
    pub const HTTP_PORT: u16 = 8081;

    /// Default SQLite database path
    pub const DATABASE_PATH: &str = "./data/remy.db";

    /// Draft debounce window in milliseconds: rapid successive saves for the
    /// same draft key coalesce into a single storage write
    pub const DRAFT_DEBOUNCE_MS: u64 = 1000;

    /// Maximum number of drafts retained by the in-memory storage backend
    pub const DRAFT_CACHE_MAX_ENTRIES: usize = 256;

    /// Default base URL the client data layer talks to
    pub const API_BASE_URL: &str = "http://127.0.0.1:8081";

    /// Request timeout applied to the assembled router, in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Maximum accepted request body, in bytes (boards are small JSON docs)
    pub const REQUEST_BODY_LIMIT_BYTES: usize = 1024 * 1024;
}

/// Environment variable names read by `ServerConfig::from_env`
pub mod env_names {
    /// HTTP port override
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Database URL (`sqlite:...` or `sqlite::memory:`)
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Draft debounce override, milliseconds
    pub const DRAFT_DEBOUNCE_MS: &str = "DRAFT_DEBOUNCE_MS";
    /// Draft cache directory for the file storage backend
    pub const DRAFT_CACHE_DIR: &str = "DRAFT_CACHE_DIR";
    /// Base URL for the client data layer
    pub const API_BASE_URL: &str = "API_BASE_URL";
}

/// Storage key formats shared with the mobile shell
///
/// The string shapes are load-bearing: drafts written by older app builds
/// must remain restorable.
pub mod storage_keys {
    /// Prefix for per-board draft entries
    pub const BOARD_DRAFT_PREFIX: &str = "mpm_board_draft_";

    /// Persisted shopping-list store key
    pub const SHOPPING_LIST: &str = "shopping-list-storage";

    /// Offline macro log queue key (versioned payload shape)
    pub const MACROS_OFFLINE: &str = "macros_offline_v1";
}

/// Hard limits
pub mod limits {
    /// Upper bound on meals per slot per day accepted from clients
    pub const MAX_ENTRIES_PER_SLOT: usize = 20;

    /// Upper bound on shopping-list lines per user
    pub const MAX_SHOPPING_ITEMS: usize = 500;
}
