// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven server config plus optional risk engine overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! Configuration module for the healthcare portal
//!
//! - **Environment**: server configuration from environment variables
//! - **Risk**: optional JSON file overriding risk thresholds, weights and messages

/// Environment and server configuration
pub mod environment;

use anyhow::{anyhow, Context, Result};
use healthcare_intelligence::RiskEngineConfig;
use std::fs;
use std::path::Path;
use tracing::info;

pub use environment::{
    AuthConfig, CorsConfig, DatabaseConfig, DatabaseUrl, Environment, ServerConfig,
};

/// Load a risk engine configuration from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or fails validation
pub fn load_risk_engine_config(path: &Path) -> Result<RiskEngineConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read risk config {}", path.display()))?;
    let config: RiskEngineConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid risk config {}", path.display()))?;
    config
        .validate()
        .map_err(|e| anyhow!("Risk config {} rejected: {e}", path.display()))?;

    info!(path = %path.display(), "Loaded risk engine configuration");
    Ok(config)
}
