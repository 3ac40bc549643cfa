// ABOUTME: Health risk intelligence crate: scoring rules, thresholds, and the risk engine
// ABOUTME: Pure computation with no I/O, shared by the HTTP service and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

#![deny(unsafe_code)]

//! # Healthcare Intelligence
//!
//! Maps a [`HealthMetrics`](healthcare_core::models::HealthMetrics) questionnaire
//! to a [`RiskAssessment`](healthcare_core::models::RiskAssessment).
//!
//! ```rust
//! use healthcare_core::models::{ExerciseLevel, Gender, HealthMetrics, RiskLevel, SmokingStatus};
//! use healthcare_intelligence::RiskEngine;
//!
//! let metrics = HealthMetrics {
//!     age: 30,
//!     gender: Gender::Male,
//!     height: 170,
//!     weight: 70,
//!     blood_pressure: "120/80".into(),
//!     blood_sugar: 90,
//!     cholesterol: 180,
//!     heart_rate: 70,
//!     smoking: SmokingStatus::None,
//!     exercise: ExerciseLevel::Regular,
//!     medical_history: String::new(),
//!     medications: String::new(),
//! };
//!
//! let assessment = RiskEngine::new().evaluate(&metrics)?;
//! assert_eq!(assessment.score, 0);
//! assert_eq!(assessment.level, RiskLevel::Low);
//! assert!((assessment.bmi - 24.2).abs() < f64::EPSILON);
//! # Ok::<(), healthcare_core::errors::RiskError>(())
//! ```

/// Body mass index helpers
pub mod bmi;

/// Risk engine configuration (thresholds, weights, messages)
pub mod config;

/// Clinical cut-off values used by the default rule table
pub mod physiological_constants;

/// The risk scoring engine
pub mod risk_engine;

/// Data-driven rule table
pub mod rules;

pub use bmi::{calculate_bmi, round_to_tenth};
pub use config::{ConfigError, RiskEngineConfig};
pub use risk_engine::{parse_systolic, RiskEngine};
pub use rules::{Condition, Reading, RiskBand, RiskFactor, RiskRule};
