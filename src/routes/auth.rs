// ABOUTME: User authentication route handlers for registration and login
// ABOUTME: Validates credentials, hashes passwords and issues JWT session tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! Authentication routes
//!
//! Registration stores a bcrypt hash of the password. Login answers with the
//! same "Invalid email or password" message whether the email is unknown or
//! the password is wrong.

use crate::{
    auth::{hash_password, verify_password},
    constants::{error_messages, limits},
    errors::{AppError, ErrorCode},
    logging::AppLogger,
    models::User,
    resources::ServerResources,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use tracing::info;

use super::json_body;

/// User registration request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Login email
    #[serde(default)]
    pub email: String,
    /// Plain-text password
    #[serde(default)]
    pub password: String,
}

/// User registration response
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Always true
    pub success: bool,
    /// Human-readable confirmation
    pub message: String,
    /// Identifier of the new user
    pub user_id: String,
}

/// User login request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    /// Login email
    #[serde(default)]
    pub email: String,
    /// Plain-text password
    #[serde(default)]
    pub password: String,
}

/// Public user info returned at login
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfo {
    /// User identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// User login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Always true
    pub success: bool,
    /// Bearer token for authenticated routes
    pub token: String,
    /// Token expiry as RFC 3339
    pub expires_at: String,
    /// Logged-in user
    pub user: UserInfo,
}

/// Authentication routes handler
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .with_state(resources)
    }

    /// Check registration fields before touching the database
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` for blank fields and `INVALID_INPUT`
    /// for a short password or malformed email
    pub fn validate_registration(request: &RegisterRequest) -> Result<(), AppError> {
        if request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                error_messages::ALL_FIELDS_REQUIRED,
            ));
        }

        if request.password.chars().count() < limits::MIN_PASSWORD_LENGTH {
            return Err(AppError::invalid_input(error_messages::PASSWORD_TOO_SHORT));
        }

        if !Self::is_valid_email(request.email.trim()) {
            return Err(AppError::invalid_input(error_messages::INVALID_EMAIL_FORMAT));
        }

        Ok(())
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
        EMAIL_REGEX
            .get_or_init(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok())
            .as_ref()
            .is_some_and(|re| re.is_match(email))
    }

    /// Handle POST /api/auth/register
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<RegisterRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(payload)?;
        Self::validate_registration(&request)?;
        info!(email = %request.email.trim(), "User registration attempt");

        let password_hash =
            hash_password(request.password, resources.config.auth.bcrypt_cost).await?;
        let user = User::new(request.name.trim().to_owned(), request.email, password_hash);

        let user_id = match resources.database.create_user(&user).await {
            Ok(user_id) => user_id,
            Err(e) => {
                let reason = e.to_string();
                AppLogger::log_auth_event(&user.email, "register", false, Some(reason.as_str()));
                return Err(e.into());
            }
        };
        AppLogger::log_auth_event(&user.email, "register", true, None);

        let response = RegisterResponse {
            success: true,
            message: "User registered successfully".to_owned(),
            user_id: user_id.to_string(),
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle POST /api/auth/login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<LoginRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(payload)?;
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                error_messages::EMAIL_AND_PASSWORD_REQUIRED,
            ));
        }

        let Some(user) = resources.database.get_user_by_email(&request.email).await? else {
            AppLogger::log_auth_event(&request.email, "login", false, Some("unknown email"));
            return Err(AppError::auth_invalid(error_messages::INVALID_CREDENTIALS));
        };

        if !verify_password(request.password, user.password_hash.clone()).await? {
            AppLogger::log_auth_event(&user.email, "login", false, Some("wrong password"));
            return Err(AppError::auth_invalid(error_messages::INVALID_CREDENTIALS));
        }

        let issued = resources.auth_manager.generate_token(&user)?;
        AppLogger::log_auth_event(&user.email, "login", true, None);

        let response = LoginResponse {
            success: true,
            token: issued.token,
            expires_at: issued.expires_at.to_rfc3339(),
            user: UserInfo::from(&user),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }

    #[test]
    fn test_registration_validation() {
        assert!(AuthRoutes::validate_registration(&request("Ada", "ada@example.com", "secret1")).is_ok());

        let blank = AuthRoutes::validate_registration(&request(" ", "ada@example.com", "secret1"))
            .unwrap_err();
        assert_eq!(blank.code, ErrorCode::MissingRequiredField);
        assert_eq!(blank.message, error_messages::ALL_FIELDS_REQUIRED);

        let short = AuthRoutes::validate_registration(&request("Ada", "ada@example.com", "12345"))
            .unwrap_err();
        assert_eq!(short.message, error_messages::PASSWORD_TOO_SHORT);

        let email = AuthRoutes::validate_registration(&request("Ada", "not-an-email", "secret1"))
            .unwrap_err();
        assert_eq!(email.message, error_messages::INVALID_EMAIL_FORMAT);
    }

    #[test]
    fn test_password_of_exactly_minimum_length_accepted() {
        assert!(AuthRoutes::validate_registration(&request("Ada", "ada@example.com", "123456")).is_ok());
    }
}
