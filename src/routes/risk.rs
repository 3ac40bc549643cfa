// ABOUTME: Stateless risk evaluation route for previewing a questionnaire score
// ABOUTME: Runs the risk engine without authentication and without persisting anything
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

use crate::{
    errors::AppError,
    models::{HealthMetrics, RiskAssessment},
    resources::ServerResources,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::json_body;

/// Response for POST /api/risk/evaluate
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskPreviewResponse {
    /// Always true
    pub success: bool,
    /// Computed assessment
    pub assessment: RiskAssessment,
    /// Display label for the level, e.g. "High Risk"
    pub risk_label: String,
    /// One-line advice for the level
    pub advice: String,
}

/// Risk preview routes handler
pub struct RiskRoutes;

impl RiskRoutes {
    /// Create the risk preview route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/risk/evaluate", post(Self::handle_evaluate))
            .with_state(resources)
    }

    /// Handle POST /api/risk/evaluate
    async fn handle_evaluate(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<HealthMetrics>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let metrics = json_body(payload)?;
        metrics.validate()?;
        let assessment = resources.risk_engine.evaluate(&metrics)?;

        let response = RiskPreviewResponse {
            success: true,
            risk_label: assessment.level.label().to_owned(),
            advice: assessment.level.advice().to_owned(),
            assessment,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
