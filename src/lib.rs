// ABOUTME: Main library entry point for the healthcare risk assessment portal
// ABOUTME: Provides the REST API, storage, authentication and configuration around the risk engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

#![deny(unsafe_code)]

//! # Healthcare Portal
//!
//! A REST service where users register, submit health questionnaires, receive
//! a risk score with recommendations, and review their assessment history.
//!
//! ## Architecture
//!
//! - **`healthcare-core`**: models, constants and the unified `AppError`
//! - **`healthcare-intelligence`**: the deterministic risk scoring engine
//! - **This crate**: configuration, logging, `SQLite` storage, JWT sessions,
//!   axum routes and the server bootstrap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use healthcare_portal::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Healthcare portal configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// JWT session tokens and password hashing
pub mod auth;

/// Configuration management
pub mod config;

/// Application constants, re-exported from `healthcare-core`
pub mod constants;

/// `SQLite` storage for users and assessments
pub mod database;

/// Unified error handling, re-exported from `healthcare-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request ids, tracing)
pub mod middleware;

/// Data models, re-exported from `healthcare-core`
pub mod models;

/// Shared server resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// HTTP server bootstrap
pub mod server;

pub use healthcare_intelligence::{RiskEngine, RiskEngineConfig};
