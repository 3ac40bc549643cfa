// ABOUTME: Core types and constants for the healthcare risk assessment portal
// ABOUTME: Foundation crate with error handling, health metric models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

#![deny(unsafe_code)]

//! # Healthcare Core
//!
//! Foundation crate providing shared types and constants for the healthcare
//! portal. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `RiskError`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Health metrics, risk assessments, users, and stored records

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (`HealthMetrics`, `RiskAssessment`, `User`, etc.)
pub mod models;
