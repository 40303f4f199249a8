// ABOUTME: Configuration module organization for the Remy meal server
// ABOUTME: Environment-based configuration is the single source of runtime settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

/// Environment-based configuration management
pub mod environment;
