// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the healthcare portal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! Constants module
//!
//! This module organizes application constants by domain for better maintainability.

/// Service identity
pub mod service_names {
    /// Service name used in logs and JWT audience
    pub const HEALTHCARE_PORTAL: &str = "healthcare-portal";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 3000;
}

/// Default configuration values
pub mod defaults {
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/healthcare_portal.db";
    /// Default CORS allowed origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Default limits
pub mod limits {
    /// Minimum accepted password length at registration
    pub const MIN_PASSWORD_LENGTH: usize = 6;
    /// Default session hours for JWT tokens
    pub const DEFAULT_SESSION_HOURS: i64 = 24;
    /// Longest session a configuration may request (one week)
    pub const MAX_SESSION_HOURS: i64 = 168;
    /// Lowest bcrypt cost accepted by the bcrypt crate
    pub const MIN_BCRYPT_COST: u32 = 4;
    /// Highest bcrypt cost accepted by the bcrypt crate
    pub const MAX_BCRYPT_COST: u32 = 31;
    /// Maximum request size in bytes
    pub const MAX_REQUEST_SIZE: usize = 1_048_576; // 1MB
    /// Maximum length of the free-text questionnaire fields
    pub const MAX_FREE_TEXT_LENGTH: usize = 4_000;
}

/// Timeout configurations
pub mod timeouts {
    /// Default HTTP request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Database connection timeout in seconds
    pub const DATABASE_TIMEOUT_SECS: u64 = 10;
}

/// Risk level boundaries (score is inclusive lower bound)
pub mod risk_levels {
    /// Lowest score classified as medium risk
    pub const MEDIUM_RISK_MIN_SCORE: u32 = 50;
    /// Lowest score classified as high risk
    pub const HIGH_RISK_MIN_SCORE: u32 = 100;
}

/// User-facing error messages
pub mod error_messages {
    /// Registration with missing fields
    pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
    /// Password shorter than the minimum
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
    /// Email without a plausible shape
    pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format";
    /// Duplicate registration
    pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";
    /// Login with missing fields
    pub const EMAIL_AND_PASSWORD_REQUIRED: &str = "Email and password are required";
    /// Unknown email or wrong password
    pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
    /// Access to another user's data
    pub const OTHER_USER_DATA: &str = "You can only access your own assessments";
}
