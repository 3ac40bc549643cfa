// ABOUTME: Core data models for the healthcare portal
// ABOUTME: Re-exports HealthMetrics, RiskAssessment, User and stored assessment records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! # Data Models
//!
//! - `HealthMetrics`: one questionnaire submission, the risk engine input
//! - `RiskAssessment`: score, level, BMI and recommendations computed from it
//! - `User`: a registered account
//! - `AssessmentRecord`: a persisted submission together with its assessment

mod assessment;
mod health;
mod risk;
mod user;

pub use assessment::{AssessmentRecord, UserAssessmentStats};
pub use health::{ExerciseLevel, Gender, HealthMetrics, SmokingStatus};
pub use risk::{RiskAssessment, RiskLevel};
pub use user::User;
