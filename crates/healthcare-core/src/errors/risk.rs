// ABOUTME: Risk engine error types raised when health metrics cannot be scored
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! # Risk Error Types
//!
//! The risk engine has a single failure mode: input it cannot turn into a
//! score. Everything else (transport, storage) belongs to `AppError`.

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by the risk scoring engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RiskError {
    /// A metric could not be interpreted (unparseable blood pressure, non-positive height)
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending metric, as it appears in the request payload
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl RiskError {
    /// Create an "invalid input" error
    #[must_use]
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the metric that caused the error
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}

impl From<RiskError> for AppError {
    fn from(error: RiskError) -> Self {
        let field = error.field();
        Self::new(ErrorCode::InvalidInput, error.to_string())
            .with_details(serde_json::json!({ "field": field }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_error_maps_to_bad_request() {
        let error = RiskError::invalid_input("bloodPressure", "systolic value 'abc' is not a number");
        assert_eq!(error.field(), "bloodPressure");

        let app_error = AppError::from(error);
        assert_eq!(app_error.code, ErrorCode::InvalidInput);
        assert_eq!(app_error.http_status(), 400);
        assert_eq!(app_error.context.details["field"], "bloodPressure");
        assert!(app_error.message.contains("abc"));
    }
}
