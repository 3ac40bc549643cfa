// ABOUTME: Risk engine configuration for health risk scoring
// ABOUTME: Configures thresholds, per-band weights, and recommendation messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! Risk Engine Configuration
//!
//! Every number and message used by the default rule table lives here, so a
//! deployment can retune the scoring without touching the engine.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::physiological_constants::{age, blood_pressure, blood_sugar, bmi, cholesterol, heart_rate};

/// Risk Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RiskEngineConfig {
    /// Cut-off values that select a band within each factor
    pub thresholds: RiskThresholds,
    /// Points added to the score when a band fires
    pub weights: RiskWeights,
    /// Recommendation text emitted when a band fires
    pub messages: RiskMessages,
}

/// Thresholds for each risk factor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskThresholds {
    /// BMI strictly below this is underweight
    pub bmi_underweight_below: f64,
    /// BMI at or above this (and below obese) is overweight
    pub bmi_overweight_from: f64,
    /// BMI at or above this is obese
    pub bmi_obese_from: f64,
    /// Systolic at or above this (and below high) is elevated
    pub systolic_elevated_from: i32,
    /// Systolic at or above this is high
    pub systolic_high_from: i32,
    /// Fasting glucose at or above this (and below high) is pre-diabetic
    pub blood_sugar_prediabetic_from: i32,
    /// Fasting glucose at or above this is high
    pub blood_sugar_high_from: i32,
    /// Cholesterol at or above this (and below high) is borderline
    pub cholesterol_borderline_from: i32,
    /// Cholesterol at or above this is high
    pub cholesterol_high_from: i32,
    /// Age strictly above this triggers the check-up recommendation
    pub senior_age_above: i32,
    /// Heart rate strictly below this is irregular
    pub heart_rate_low_below: i32,
    /// Heart rate strictly above this is irregular
    pub heart_rate_high_above: i32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            bmi_underweight_below: bmi::UNDERWEIGHT_BELOW,
            bmi_overweight_from: bmi::OVERWEIGHT_FROM,
            bmi_obese_from: bmi::OBESE_FROM,
            systolic_elevated_from: blood_pressure::ELEVATED_SYSTOLIC_FROM,
            systolic_high_from: blood_pressure::HIGH_SYSTOLIC_FROM,
            blood_sugar_prediabetic_from: blood_sugar::PREDIABETIC_FROM,
            blood_sugar_high_from: blood_sugar::HIGH_FROM,
            cholesterol_borderline_from: cholesterol::BORDERLINE_FROM,
            cholesterol_high_from: cholesterol::HIGH_FROM,
            senior_age_above: age::SENIOR_ABOVE,
            heart_rate_low_below: heart_rate::RESTING_LOW_BELOW,
            heart_rate_high_above: heart_rate::RESTING_HIGH_ABOVE,
        }
    }
}

/// Points contributed by each band
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskWeights {
    /// BMI underweight
    pub underweight: u32,
    /// BMI overweight
    pub overweight: u32,
    /// BMI obese
    pub obese: u32,
    /// Systolic high
    pub high_blood_pressure: u32,
    /// Systolic elevated
    pub elevated_blood_pressure: u32,
    /// Glucose high
    pub high_blood_sugar: u32,
    /// Glucose pre-diabetic
    pub prediabetic: u32,
    /// Cholesterol high
    pub high_cholesterol: u32,
    /// Cholesterol borderline
    pub borderline_cholesterol: u32,
    /// Current smoker
    pub current_smoker: u32,
    /// Former smoker
    pub former_smoker: u32,
    /// No exercise
    pub sedentary: u32,
    /// Occasional exercise
    pub occasional_exercise: u32,
    /// Age above the senior threshold
    pub senior_age: u32,
    /// Heart rate outside the resting range
    pub irregular_heart_rate: u32,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            underweight: 10,
            overweight: 20,
            obese: 35,
            high_blood_pressure: 30,
            elevated_blood_pressure: 20,
            high_blood_sugar: 35,
            prediabetic: 20,
            high_cholesterol: 30,
            borderline_cholesterol: 15,
            current_smoker: 40,
            former_smoker: 10,
            sedentary: 25,
            occasional_exercise: 10,
            senior_age: 15,
            irregular_heart_rate: 15,
        }
    }
}

/// Recommendation texts, one per band plus the all-clear message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskMessages {
    /// BMI underweight
    pub underweight: String,
    /// BMI overweight
    pub overweight: String,
    /// BMI obese
    pub obese: String,
    /// Systolic high
    pub high_blood_pressure: String,
    /// Systolic elevated
    pub elevated_blood_pressure: String,
    /// Glucose high
    pub high_blood_sugar: String,
    /// Glucose pre-diabetic
    pub prediabetic: String,
    /// Cholesterol high
    pub high_cholesterol: String,
    /// Cholesterol borderline
    pub borderline_cholesterol: String,
    /// Current smoker
    pub current_smoker: String,
    /// Former smoker
    pub former_smoker: String,
    /// No exercise
    pub sedentary: String,
    /// Occasional exercise
    pub occasional_exercise: String,
    /// Age above the senior threshold
    pub senior_age: String,
    /// Heart rate outside the resting range
    pub irregular_heart_rate: String,
    /// Emitted alone when no band fires
    pub healthy: String,
}

impl Default for RiskMessages {
    fn default() -> Self {
        Self {
            underweight: "Underweight. Consider nutrition guidance.".into(),
            overweight: "Overweight. Regular exercise recommended.".into(),
            obese: "Obese. Consult healthcare provider.".into(),
            high_blood_pressure: "High BP. Monitor regularly.".into(),
            elevated_blood_pressure: "Elevated BP. Reduce salt intake.".into(),
            high_blood_sugar: "High blood sugar. Diabetes screening recommended.".into(),
            prediabetic: "Pre-diabetic. Monitor diet.".into(),
            high_cholesterol: "High cholesterol. Reduce fats.".into(),
            borderline_cholesterol: "Borderline cholesterol. Exercise regularly.".into(),
            current_smoker: "Smoking increases health risks. Consider quitting.".into(),
            former_smoker: "Quit smoking. Stay smoke-free.".into(),
            sedentary: "Sedentary lifestyle. Aim for daily exercise.".into(),
            occasional_exercise: "Increase exercise frequency.".into(),
            senior_age: "Regular health check-ups recommended.".into(),
            irregular_heart_rate: "Irregular heart rate. Consider cardiac evaluation.".into(),
            healthy: "Your health metrics look good! Maintain healthy lifestyle.".into(),
        }
    }
}

impl RiskEngineConfig {
    /// Validate threshold ordering and message presence
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the bands of a factor would overlap or a
    /// message is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        self.messages.validate()
    }
}

impl RiskThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.bmi_underweight_below.is_finite()
            || !self.bmi_overweight_from.is_finite()
            || !self.bmi_obese_from.is_finite()
        {
            return Err(ConfigError::ValueOutOfRange(
                "BMI thresholds must be finite numbers",
            ));
        }
        if self.bmi_underweight_below > self.bmi_overweight_from {
            return Err(ConfigError::InvalidRange(
                "bmi_underweight_below must not exceed bmi_overweight_from",
            ));
        }
        if self.bmi_overweight_from >= self.bmi_obese_from {
            return Err(ConfigError::InvalidRange(
                "bmi_overweight_from must be less than bmi_obese_from",
            ));
        }
        if self.systolic_elevated_from >= self.systolic_high_from {
            return Err(ConfigError::InvalidRange(
                "systolic_elevated_from must be less than systolic_high_from",
            ));
        }
        if self.blood_sugar_prediabetic_from >= self.blood_sugar_high_from {
            return Err(ConfigError::InvalidRange(
                "blood_sugar_prediabetic_from must be less than blood_sugar_high_from",
            ));
        }
        if self.cholesterol_borderline_from >= self.cholesterol_high_from {
            return Err(ConfigError::InvalidRange(
                "cholesterol_borderline_from must be less than cholesterol_high_from",
            ));
        }
        if self.heart_rate_low_below > self.heart_rate_high_above {
            return Err(ConfigError::InvalidRange(
                "heart_rate_low_below must not exceed heart_rate_high_above",
            ));
        }
        Ok(())
    }
}

impl RiskMessages {
    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            (&self.underweight, "messages.underweight"),
            (&self.overweight, "messages.overweight"),
            (&self.obese, "messages.obese"),
            (&self.high_blood_pressure, "messages.high_blood_pressure"),
            (&self.elevated_blood_pressure, "messages.elevated_blood_pressure"),
            (&self.high_blood_sugar, "messages.high_blood_sugar"),
            (&self.prediabetic, "messages.prediabetic"),
            (&self.high_cholesterol, "messages.high_cholesterol"),
            (&self.borderline_cholesterol, "messages.borderline_cholesterol"),
            (&self.current_smoker, "messages.current_smoker"),
            (&self.former_smoker, "messages.former_smoker"),
            (&self.sedentary, "messages.sedentary"),
            (&self.occasional_exercise, "messages.occasional_exercise"),
            (&self.senior_age, "messages.senior_age"),
            (&self.irregular_heart_rate, "messages.irregular_heart_rate"),
            (&self.healthy, "messages.healthy"),
        ];

        match required.iter().find(|(text, _)| text.trim().is_empty()) {
            Some((_, name)) => Err(ConfigError::MissingField(name)),
            None => Ok(()),
        }
    }
}
