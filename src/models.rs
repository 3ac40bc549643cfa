// ABOUTME: Data models shared by the database, routes and CLI
// ABOUTME: Re-exports the portable models from healthcare-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! # Data Models
//!
//! The models live in `healthcare-core` so the risk engine can use them
//! without depending on the server.

pub use healthcare_core::models::*;
