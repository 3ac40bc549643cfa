// ABOUTME: Route handlers for the current user's profile and assessment statistics
// ABOUTME: Statistics are only visible to the user they describe

use crate::{
    constants::error_messages,
    errors::AppError,
    logging::AppLogger,
    models::UserAssessmentStats,
    resources::ServerResources,
};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::authenticate;

/// Public profile of the authenticated user
#[derive(Debug, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Registration time as RFC 3339
    pub created_at: String,
}

/// Response for GET /api/users/me
#[derive(Debug, Serialize, Deserialize)]
pub struct UserProfileResponse {
    /// Always true
    pub success: bool,
    /// The caller's profile
    pub user: UserProfile,
}

/// Response for GET /api/users/:user_id/stats
#[derive(Debug, Serialize, Deserialize)]
pub struct UserStatsResponse {
    /// Always true
    pub success: bool,
    /// Aggregates over the user's assessments
    pub stats: UserAssessmentStats,
}

/// User routes handler
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users/me", get(Self::handle_me))
            .route("/api/users/:user_id/stats", get(Self::handle_stats))
            .with_state(resources)
    }

    /// Handle GET /api/users/me
    async fn handle_me(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let user = resources
            .database
            .get_user(auth.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {}", auth.user_id)))?;

        let response = UserProfileResponse {
            success: true,
            user: UserProfile {
                id: user.id.to_string(),
                name: user.name,
                email: user.email,
                created_at: user.created_at.to_rfc3339(),
            },
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/users/:user_id/stats
    async fn handle_stats(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(user_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        if auth.user_id != user_id {
            AppLogger::log_security_event(
                "cross_user_access",
                "medium",
                &format!("requested assessment statistics of user {user_id}"),
                Some(auth.user_id),
            );
            return Err(AppError::permission_denied(error_messages::OTHER_USER_DATA)
                .with_user_id(auth.user_id));
        }

        let stats = resources.database.get_user_stats(user_id).await?;
        Ok((StatusCode::OK, Json(UserStatsResponse { success: true, stats })).into_response())
    }
}
