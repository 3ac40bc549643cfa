// ABOUTME: Persisted assessment record and per-user assessment statistics
// ABOUTME: Couples the submitted metrics with the server-computed risk assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HealthMetrics, RiskAssessment};

/// A stored questionnaire together with the assessment computed for it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    /// Record identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Submitted questionnaire
    pub metrics: HealthMetrics,
    /// Server-computed assessment
    pub assessment: RiskAssessment,
    /// Submission time
    pub created_at: DateTime<Utc>,
}

/// Aggregate statistics over one user's assessments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAssessmentStats {
    /// Number of stored assessments
    pub total_assessments: i64,
    /// Mean risk score, `None` when there are no assessments
    pub avg_risk_score: Option<f64>,
    /// Time of the most recent assessment
    pub last_assessment: Option<DateTime<Utc>>,
}
