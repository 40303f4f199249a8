// ABOUTME: Main library entry point for the Remy meal planning platform
// ABOUTME: Provides the meal-board sync core, shopping-list engine, and REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

#![deny(unsafe_code)]

//! # Remy Meal Server
//!
//! Backend and embeddable data layer for the Remy meal planning application.
//! The server exposes week-board, shopping-list, macro-log, and care-team
//! REST endpoints; the library half carries the local-first sync core the
//! mobile shell embeds.
//!
//! ## Features
//!
//! - **Week boards**: day-keyed meal plans with an integer version counter
//! - **Local-first drafts**: debounced draft persistence with content-hash
//!   dirty tracking and last-write-wins reconciliation
//! - **Shopping lists**: merge-on-insert consolidation with keyword-based
//!   ingredient classification and pantry-staple filtering
//! - **Macro tracking**: daily totals plus a best-effort offline log queue
//!
//! ## Architecture
//!
//! The crate follows a modular architecture:
//! - **Board**: week-board model and content hashing
//! - **Drafts**: local draft cache with pluggable storage backends
//! - **Shopping**: consolidation and classification engine
//! - **Client**: typed REST client used by the sync flows
//! - **Routes**: axum HTTP handlers backed by the SQLite database
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use remy_meal_server::config::environment::ServerConfig;
//! use remy_meal_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Remy meal server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the server binary (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access
// them.

/// Week-board model and content hashing
pub mod board;

/// Typed REST client data layer ("board API")
pub mod client;

/// Configuration management and persistence
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Shared server state passed to route handlers
pub mod context;

/// SQLite-backed persistence layer
pub mod database;

/// Local-first draft cache with debounced persistence and reconciliation
pub mod drafts;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// Common data models shared across modules
pub mod models;

/// Macro tracking and the offline log queue
pub mod nutrition;

/// `HTTP` routes for boards, shopping lists, macros, and care teams
pub mod routes;

/// Shopping-list consolidation and ingredient classification engine
pub mod shopping;
