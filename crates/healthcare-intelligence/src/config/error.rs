// ABOUTME: Error type for invalid risk engine configuration
// ABOUTME: Raised by RiskEngineConfig::validate before an engine is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

use thiserror::Error;

/// Configuration validation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A pair of ordered thresholds is not strictly increasing
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A recommendation message is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A value is outside the allowed range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
