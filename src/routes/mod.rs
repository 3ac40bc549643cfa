// ABOUTME: Route module organization for the healthcare portal HTTP endpoints
// ABOUTME: Groups route definitions by domain and shares the bearer authentication helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! Route module for the healthcare portal
//!
//! Each domain module owns a `*Routes` type whose `routes()` builds an axum
//! `Router` with thin handlers that delegate to the database and risk engine.

/// Risk assessment submission, history and deletion
pub mod assessments;
/// Registration and login
pub mod auth;
/// Liveness and readiness checks
pub mod health;
/// Stateless risk evaluation preview
pub mod risk;
/// Current user profile and statistics
pub mod users;

pub use assessments::AssessmentRoutes;
pub use auth::AuthRoutes;
pub use health::HealthRoutes;
pub use risk::RiskRoutes;
pub use users::UserRoutes;

use crate::auth::AuthResult;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, HeaderMap};
use axum::Json;

/// Resolve the `Authorization` header of a request to the calling user
pub(crate) fn authenticate(
    headers: &HeaderMap,
    resources: &ServerResources,
) -> Result<AuthResult, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    resources.auth_manager.authenticate_request(auth_header)
}

/// Unwrap a JSON request body, turning axum's rejection into the API error envelope
///
/// A missing key becomes `MISSING_REQUIRED_FIELD`; malformed JSON, wrong types
/// and unknown enum values become `INVALID_INPUT`. Both answer 400.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(rejection_to_error(&rejection)),
    }
}

fn rejection_to_error(rejection: &JsonRejection) -> AppError {
    let detail = rejection.body_text();
    let detail = detail
        .split_once("target type: ")
        .map_or(detail.as_str(), |(_, reason)| reason);

    if let Some(field) = missing_field_name(detail) {
        return AppError::missing_field(field);
    }

    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::invalid_input("Expected request with Content-Type: application/json")
        }
        JsonRejection::JsonSyntaxError(_) => AppError::invalid_input("Malformed JSON body"),
        _ => AppError::invalid_input(detail),
    }
}

/// Field name from a serde "missing field `name`" message
fn missing_field_name(detail: &str) -> Option<&str> {
    let rest = detail.split_once("missing field `")?.1;
    rest.split_once('`').map(|(field, _)| field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_name() {
        assert_eq!(
            missing_field_name("missing field `bloodPressure` at line 1 column 20"),
            Some("bloodPressure")
        );
        assert_eq!(
            missing_field_name("unknown variant `sometimes`, expected one of `none`"),
            None
        );
    }
}
