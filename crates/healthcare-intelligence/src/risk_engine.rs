// ABOUTME: Risk engine turning a health questionnaire into a scored risk assessment
// ABOUTME: Deterministic evaluation over the ordered rule table, with parallel batch support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! Risk Engine
//!
//! Evaluation steps for one [`HealthMetrics`]:
//!
//! 1. Compute the unrounded BMI (rejects non-positive height).
//! 2. Parse the systolic value from the blood pressure text.
//! 3. Walk the rule table in order; each rule contributes at most one band.
//! 4. Sum the weights, derive the [`RiskLevel`], round the BMI for display.
//!
//! When no band fires the recommendations contain only the all-clear message.

use healthcare_core::errors::RiskError;
use healthcare_core::models::{
    ExerciseLevel, HealthMetrics, RiskAssessment, RiskLevel, SmokingStatus,
};
use rayon::prelude::*;
use tracing::debug;

use crate::bmi::{calculate_bmi, round_to_tenth};
use crate::config::{ConfigError, RiskEngineConfig};
use crate::rules::{Reading, RiskFactor, RiskRule};

/// Stateless, thread-safe risk evaluator
#[derive(Debug, Clone)]
pub struct RiskEngine {
    rules: Vec<RiskRule>,
    healthy_message: String,
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskEngine {
    /// Engine with the default clinical thresholds and messages
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&RiskEngineConfig::default())
    }

    /// Engine with custom thresholds, weights or messages
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn with_config(config: &RiskEngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: &RiskEngineConfig) -> Self {
        Self {
            rules: RiskRule::default_table(config),
            healthy_message: config.messages.healthy.clone(),
        }
    }

    /// The rule table in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[RiskRule] {
        &self.rules
    }

    /// Score a questionnaire
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidInput`] when the height is not positive or
    /// the systolic part of the blood pressure is not an integer.
    pub fn evaluate(&self, metrics: &HealthMetrics) -> Result<RiskAssessment, RiskError> {
        let readings = FactorReadings::from_metrics(metrics)?;

        let mut score: u32 = 0;
        let mut recommendations = Vec::new();

        for rule in &self.rules {
            if let Some(band) = rule.matching_band(readings.get(rule.factor)) {
                score = score.saturating_add(band.weight);
                recommendations.push(band.message.clone());
            }
        }

        if recommendations.is_empty() {
            recommendations.push(self.healthy_message.clone());
        }

        let level = RiskLevel::from_score(score);
        debug!(
            score,
            level = level.as_str(),
            triggered = recommendations.len(),
            "Risk assessment computed"
        );

        Ok(RiskAssessment {
            score,
            level,
            bmi: round_to_tenth(readings.bmi),
            recommendations,
        })
    }

    /// Score many questionnaires in parallel, results in input order
    #[must_use]
    pub fn evaluate_batch(
        &self,
        batch: &[HealthMetrics],
    ) -> Vec<Result<RiskAssessment, RiskError>> {
        batch.par_iter().map(|metrics| self.evaluate(metrics)).collect()
    }
}

/// Extract the systolic value from text such as `"120/80"`
///
/// Only the part before the first `/` is read, trimmed, and parsed strictly as
/// an integer. A bare number without a diastolic part is accepted.
///
/// # Errors
///
/// Returns [`RiskError::InvalidInput`] for `bloodPressure` when that part is
/// empty or not an integer.
pub fn parse_systolic(blood_pressure: &str) -> Result<i32, RiskError> {
    let systolic = blood_pressure.split('/').next().unwrap_or_default().trim();

    if systolic.is_empty() {
        return Err(RiskError::invalid_input(
            "bloodPressure",
            format!("expected 'systolic/diastolic', got '{blood_pressure}'"),
        ));
    }

    systolic.parse::<i32>().map_err(|_| {
        RiskError::invalid_input(
            "bloodPressure",
            format!("systolic value '{systolic}' is not an integer"),
        )
    })
}

/// Per-factor readings computed once per evaluation
struct FactorReadings {
    bmi: f64,
    systolic: i32,
    age: i32,
    blood_sugar: i32,
    cholesterol: i32,
    heart_rate: i32,
    smoking: SmokingStatus,
    exercise: ExerciseLevel,
}

impl FactorReadings {
    fn from_metrics(metrics: &HealthMetrics) -> Result<Self, RiskError> {
        Ok(Self {
            bmi: calculate_bmi(metrics.height, metrics.weight)?,
            systolic: parse_systolic(&metrics.blood_pressure)?,
            age: metrics.age,
            blood_sugar: metrics.blood_sugar,
            cholesterol: metrics.cholesterol,
            heart_rate: metrics.heart_rate,
            smoking: metrics.smoking,
            exercise: metrics.exercise,
        })
    }

    fn get(&self, factor: RiskFactor) -> Reading {
        match factor {
            RiskFactor::Bmi => Reading::Numeric(self.bmi),
            RiskFactor::BloodPressure => Reading::Numeric(f64::from(self.systolic)),
            RiskFactor::BloodSugar => Reading::Numeric(f64::from(self.blood_sugar)),
            RiskFactor::Cholesterol => Reading::Numeric(f64::from(self.cholesterol)),
            RiskFactor::Smoking => Reading::Smoking(self.smoking),
            RiskFactor::Exercise => Reading::Exercise(self.exercise),
            RiskFactor::Age => Reading::Numeric(f64::from(self.age)),
            RiskFactor::HeartRate => Reading::Numeric(f64::from(self.heart_rate)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthcare_core::models::Gender;

    fn healthy_metrics() -> HealthMetrics {
        HealthMetrics {
            age: 30,
            gender: Gender::Male,
            height: 170,
            weight: 70,
            blood_pressure: "120/80".into(),
            blood_sugar: 90,
            cholesterol: 180,
            heart_rate: 70,
            smoking: SmokingStatus::None,
            exercise: ExerciseLevel::Regular,
            medical_history: String::new(),
            medications: String::new(),
        }
    }

    #[test]
    fn test_healthy_adult_gets_fallback() {
        let assessment = RiskEngine::new().evaluate(&healthy_metrics()).unwrap();

        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert!((assessment.bmi - 24.2).abs() < f64::EPSILON);
        assert_eq!(
            assessment.recommendations,
            vec!["Your health metrics look good! Maintain healthy lifestyle.".to_owned()]
        );
    }

    #[test]
    fn test_high_risk_smoker() {
        let metrics = HealthMetrics {
            age: 65,
            height: 160,
            weight: 90,
            blood_pressure: "145/95".into(),
            blood_sugar: 130,
            cholesterol: 250,
            heart_rate: 105,
            smoking: SmokingStatus::Current,
            exercise: ExerciseLevel::None,
            ..healthy_metrics()
        };

        let assessment = RiskEngine::new().evaluate(&metrics).unwrap();

        assert_eq!(assessment.score, 225);
        assert_eq!(assessment.level, RiskLevel::High);
        assert!((assessment.bmi - 35.2).abs() < f64::EPSILON);
        assert_eq!(
            assessment.recommendations,
            vec![
                "Obese. Consult healthcare provider.",
                "High BP. Monitor regularly.",
                "High blood sugar. Diabetes screening recommended.",
                "High cholesterol. Reduce fats.",
                "Smoking increases health risks. Consider quitting.",
                "Sedentary lifestyle. Aim for daily exercise.",
                "Regular health check-ups recommended.",
                "Irregular heart rate. Consider cardiac evaluation.",
            ]
        );
    }

    #[test]
    fn test_medium_boundary_at_fifty() {
        // overweight (20) + elevated BP (20) + occasional exercise (10)
        let metrics = HealthMetrics {
            weight: 75,
            blood_pressure: "130/85".into(),
            exercise: ExerciseLevel::Occasional,
            ..healthy_metrics()
        };

        let assessment = RiskEngine::new().evaluate(&metrics).unwrap();

        assert_eq!(assessment.score, 50);
        assert_eq!(assessment.level, RiskLevel::Medium);
        assert!((assessment.bmi - 26.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparseable_blood_pressure() {
        let metrics = HealthMetrics {
            blood_pressure: "abc".into(),
            ..healthy_metrics()
        };

        let err = RiskEngine::new().evaluate(&metrics).unwrap_err();
        assert_eq!(err.field(), "bloodPressure");
    }

    #[test]
    fn test_zero_height_rejected() {
        let metrics = HealthMetrics {
            height: 0,
            ..healthy_metrics()
        };

        let err = RiskEngine::new().evaluate(&metrics).unwrap_err();
        assert_eq!(err.field(), "height");
    }

    #[test]
    fn test_parse_systolic_variants() {
        assert_eq!(parse_systolic("120/80").unwrap(), 120);
        assert_eq!(parse_systolic(" 135 / 90 ").unwrap(), 135);
        assert_eq!(parse_systolic("140").unwrap(), 140);
        assert!(parse_systolic("145abc/90").is_err());
        assert!(parse_systolic("/80").is_err());
        assert!(parse_systolic("").is_err());
    }

    #[test]
    fn test_custom_weights_change_score() {
        let mut config = RiskEngineConfig::default();
        config.weights.occasional_exercise = 55;
        let engine = RiskEngine::with_config(&config).unwrap();

        let metrics = HealthMetrics {
            exercise: ExerciseLevel::Occasional,
            ..healthy_metrics()
        };
        let assessment = engine.evaluate(&metrics).unwrap();

        assert_eq!(assessment.score, 55);
        assert_eq!(assessment.level, RiskLevel::Medium);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = RiskEngineConfig::default();
        config.thresholds.cholesterol_high_from = 100;
        assert!(RiskEngine::with_config(&config).is_err());
    }
}
