// ABOUTME: Risk engine configuration module
// ABOUTME: Thresholds, weights and recommendation texts with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

/// Configuration errors
pub mod error;
/// Risk rule thresholds, weights and messages
pub mod risk;

pub use error::ConfigError;
pub use risk::{RiskEngineConfig, RiskMessages, RiskThresholds, RiskWeights};
