// ABOUTME: Test helper module organization
// ABOUTME: HTTP testing utilities shared by route integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

pub mod axum_test;
