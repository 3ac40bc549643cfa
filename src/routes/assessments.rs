// ABOUTME: Route handlers for submitting, listing, fetching and deleting risk assessments
// ABOUTME: Scores submissions server-side and scopes every read and delete to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! Assessment routes
//!
//! A submission carries the questionnaire and, from older clients, the risk
//! score, level and recommendations they computed locally. Those hints are
//! never stored: the server always re-runs the risk engine and only logs when
//! the client's numbers disagree with its own.

use crate::{
    constants::error_messages,
    errors::AppError,
    logging::AppLogger,
    models::{AssessmentRecord, HealthMetrics, RiskAssessment, RiskLevel},
    resources::ServerResources,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::{authenticate, json_body};

/// Assessment submission body: the questionnaire plus optional client-side results
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentRequest {
    /// Questionnaire answers
    #[serde(flatten)]
    pub metrics: HealthMetrics,
    /// Score the client computed, if any
    #[serde(default)]
    pub risk_score: Option<u32>,
    /// Level the client computed, if any ("medium", "Medium Risk", ...)
    #[serde(default)]
    pub risk_level: Option<String>,
    /// Recommendations the client computed, if any
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
}

impl SubmitAssessmentRequest {
    /// Whether any client-side result disagrees with the server's assessment
    #[must_use]
    pub fn hints_disagree_with(&self, assessment: &RiskAssessment) -> bool {
        let score_differs = self.risk_score.is_some_and(|score| score != assessment.score);
        let level_differs = self
            .risk_level
            .as_deref()
            .is_some_and(|level| parse_level_hint(level) != Some(assessment.level));
        let recommendations_differ = self
            .recommendations
            .as_ref()
            .is_some_and(|recs| *recs != assessment.recommendations);

        score_differs || level_differs || recommendations_differ
    }
}

/// Accept both the storage form ("high") and the display form ("High Risk")
fn parse_level_hint(level: &str) -> Option<RiskLevel> {
    let normalized = level.trim().to_lowercase();
    let bare = normalized.strip_suffix(" risk").unwrap_or(&normalized);
    bare.parse().ok()
}

/// Flat view of a stored assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    /// Assessment identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Submitted questionnaire
    #[serde(flatten)]
    pub metrics: HealthMetrics,
    /// Server-computed score
    pub risk_score: u32,
    /// Server-computed level
    pub risk_level: RiskLevel,
    /// Display label for the level
    pub risk_label: String,
    /// Body mass index rounded to one decimal
    pub bmi: f64,
    /// Advice in rule order
    pub recommendations: Vec<String>,
    /// Submission time as RFC 3339
    pub created_at: String,
}

impl From<AssessmentRecord> for AssessmentResponse {
    fn from(record: AssessmentRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            metrics: record.metrics,
            risk_score: record.assessment.score,
            risk_level: record.assessment.level,
            risk_label: record.assessment.level.label().to_owned(),
            bmi: record.assessment.bmi,
            recommendations: record.assessment.recommendations,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// Response for a created assessment
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAssessmentResponse {
    /// Always true
    pub success: bool,
    /// Human-readable confirmation
    pub message: String,
    /// The stored assessment
    pub assessment: AssessmentResponse,
}

/// Response for a single assessment
#[derive(Debug, Serialize, Deserialize)]
pub struct AssessmentDetailResponse {
    /// Always true
    pub success: bool,
    /// The requested assessment
    pub assessment: AssessmentResponse,
}

/// Response for assessment history
#[derive(Debug, Serialize, Deserialize)]
pub struct AssessmentListResponse {
    /// Always true
    pub success: bool,
    /// Assessments, newest first
    pub assessments: Vec<AssessmentResponse>,
}

/// Response for a deletion
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteAssessmentResponse {
    /// Always true
    pub success: bool,
    /// Human-readable confirmation
    pub message: String,
}

/// Assessment routes handler
pub struct AssessmentRoutes;

impl AssessmentRoutes {
    /// Create all assessment routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/assessments",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/api/assessments/user/:user_id", get(Self::handle_list_for_user))
            .route(
                "/api/assessments/:id",
                get(Self::handle_get).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /api/assessments
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<SubmitAssessmentRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let request = json_body(payload)?;

        request.metrics.validate()?;
        let assessment = resources.risk_engine.evaluate(&request.metrics)?;

        if request.hints_disagree_with(&assessment) {
            warn!(
                user.id = %auth.user_id,
                client.score = ?request.risk_score,
                client.level = ?request.risk_level,
                server.score = assessment.score,
                server.level = %assessment.level,
                "Client-computed risk differs from server assessment; storing server result"
            );
        }

        let record = resources
            .database
            .create_assessment(auth.user_id, &request.metrics, &assessment)
            .await?;
        AppLogger::log_assessment_event(
            auth.user_id,
            record.id,
            assessment.score,
            assessment.level.as_str(),
        );

        let response = CreateAssessmentResponse {
            success: true,
            message: "Assessment saved successfully".to_owned(),
            assessment: record.into(),
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/assessments
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        Self::list_for(&resources, auth.user_id).await
    }

    /// Handle GET /api/assessments/user/:user_id
    async fn handle_list_for_user(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(user_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        if auth.user_id != user_id {
            AppLogger::log_security_event(
                "cross_user_access",
                "medium",
                &format!("requested assessment history of user {user_id}"),
                Some(auth.user_id),
            );
            return Err(AppError::permission_denied(error_messages::OTHER_USER_DATA)
                .with_user_id(auth.user_id));
        }
        Self::list_for(&resources, user_id).await
    }

    async fn list_for(resources: &ServerResources, user_id: Uuid) -> Result<Response, AppError> {
        let records = resources.database.list_assessments_for_user(user_id).await?;
        info!(user.id = %user_id, count = records.len(), "Listed assessments");

        let response = AssessmentListResponse {
            success: true,
            assessments: records.into_iter().map(Into::into).collect(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/assessments/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;

        // Someone else's assessment is reported as missing
        let record = resources
            .database
            .get_assessment(id)
            .await?
            .filter(|record| record.user_id == auth.user_id)
            .ok_or_else(|| AppError::not_found("Assessment").with_resource_id(id.to_string()))?;

        let response = AssessmentDetailResponse {
            success: true,
            assessment: record.into(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /api/assessments/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;

        if !resources.database.delete_assessment(id, auth.user_id).await? {
            return Err(AppError::not_found("Assessment").with_resource_id(id.to_string()));
        }
        info!(user.id = %auth.user_id, assessment.id = %id, "Assessment deleted");

        let response = DeleteAssessmentResponse {
            success: true,
            message: "Assessment deleted successfully".to_owned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
