// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_names};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Full tracing output
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info, // Default fallback
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// CI / test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development, // Default fallback for unrecognized values
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string
    ///
    /// # Errors
    ///
    /// Returns an error for URL schemes other than `sqlite:`; a bare path is
    /// treated as a SQLite file path.
    pub fn parse_url(s: &str) -> AppResult<Self> {
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.contains("://") {
            Err(AppError::config(format!("unsupported database URL: {s}")))
        } else {
            // Fallback: treat as SQLite file path
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(defaults::DATABASE_PATH),
        }
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: DatabaseUrl,
}

/// Draft cache configuration for the local-first sync core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Debounce window applied to draft saves, in milliseconds
    pub debounce_ms: u64,
    /// Directory used by the file storage backend
    pub cache_dir: PathBuf,
    /// Entry bound for the in-memory storage backend
    pub max_entries: usize,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            debounce_ms: defaults::DRAFT_DEBOUNCE_MS,
            cache_dir: default_cache_dir(),
            max_entries: defaults::DRAFT_CACHE_MAX_ENTRIES,
        }
    }
}

impl DraftConfig {
    /// Debounce window as a `Duration`
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Client data layer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for REST calls
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: defaults::API_BASE_URL.into(),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Draft cache configuration
    pub drafts: DraftConfig,
    /// Client data layer configuration
    pub client: ClientConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            drafts: DraftConfig::default(),
            client: ClientConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment value fails to parse (port,
    /// database URL, debounce window).
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var(env_names::HTTP_PORT) {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("invalid HTTP_PORT: {e}")))?,
            Err(_) => defaults::HTTP_PORT,
        };

        let database_url = match env::var(env_names::DATABASE_URL) {
            Ok(v) => DatabaseUrl::parse_url(&v)?,
            Err(_) => DatabaseUrl::default(),
        };

        let debounce_ms = match env::var(env_names::DRAFT_DEBOUNCE_MS) {
            Ok(v) => v
                .parse::<u64>()
                .map_err(|e| AppError::config(format!("invalid DRAFT_DEBOUNCE_MS: {e}")))?,
            Err(_) => defaults::DRAFT_DEBOUNCE_MS,
        };

        let cache_dir = env::var(env_names::DRAFT_CACHE_DIR)
            .map_or_else(|_| default_cache_dir(), PathBuf::from);

        let log_level = env::var("RUST_LOG")
            .map(|v| LogLevel::from_str_or_default(&v))
            .unwrap_or_default();

        let environment = env::var(env_names::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();

        let api_base_url =
            env::var(env_names::API_BASE_URL).unwrap_or_else(|_| defaults::API_BASE_URL.into());

        Ok(Self {
            http_port,
            log_level,
            environment,
            database: DatabaseConfig { url: database_url },
            drafts: DraftConfig {
                debounce_ms,
                cache_dir,
                max_entries: defaults::DRAFT_CACHE_MAX_ENTRIES,
            },
            client: ClientConfig { api_base_url },
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the port is zero or the debounce window is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.http_port == 0 {
            return Err(AppError::config("http_port must be non-zero"));
        }
        if self.drafts.debounce_ms == 0 {
            return Err(AppError::config("draft debounce window must be non-zero"));
        }
        Ok(())
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} env={} db={} draft_debounce={}ms",
            self.http_port,
            self.environment,
            self.database.url,
            self.drafts.debounce_ms
        )
    }
}

/// Platform cache directory for file-backed drafts
fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("remy-meal-server")
        .join("drafts")
}
