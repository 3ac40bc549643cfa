// ABOUTME: Data-driven risk rule table: factors, band conditions, weights and messages
// ABOUTME: Builds the ordered default table from a RiskEngineConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! Risk rules
//!
//! A [`RiskRule`] covers one [`RiskFactor`] and holds mutually exclusive
//! [`RiskBand`]s. At most one band per rule fires; its weight is added to the
//! score and its message appended to the recommendations. Rules are evaluated
//! in table order, which is also the order of the recommendations.

use healthcare_core::models::{ExerciseLevel, SmokingStatus};
use serde::{Deserialize, Serialize};

use crate::config::RiskEngineConfig;

/// The health factors scored by the engine, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    /// Body mass index (unrounded)
    Bmi,
    /// Systolic blood pressure
    BloodPressure,
    /// Fasting blood sugar
    BloodSugar,
    /// Total cholesterol
    Cholesterol,
    /// Smoking status
    Smoking,
    /// Exercise level
    Exercise,
    /// Age in years
    Age,
    /// Resting heart rate
    HeartRate,
}

impl RiskFactor {
    /// Every factor in evaluation order
    pub const ORDERED: [Self; 8] = [
        Self::Bmi,
        Self::BloodPressure,
        Self::BloodSugar,
        Self::Cholesterol,
        Self::Smoking,
        Self::Exercise,
        Self::Age,
        Self::HeartRate,
    ];

    /// Stable snake-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bmi => "bmi",
            Self::BloodPressure => "blood_pressure",
            Self::BloodSugar => "blood_sugar",
            Self::Cholesterol => "cholesterol",
            Self::Smoking => "smoking",
            Self::Exercise => "exercise",
            Self::Age => "age",
            Self::HeartRate => "heart_rate",
        }
    }
}

/// The value a factor takes for one questionnaire
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// Numeric measurement
    Numeric(f64),
    /// Smoking status
    Smoking(SmokingStatus),
    /// Exercise level
    Exercise(ExerciseLevel),
}

/// Predicate deciding whether a band fires for a reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// `value < limit`
    Below(f64),
    /// `value >= limit`
    AtLeast(f64),
    /// `from <= value < below`
    Between {
        /// Inclusive lower bound
        from: f64,
        /// Exclusive upper bound
        below: f64,
    },
    /// `value > limit`
    Above(f64),
    /// `value < low || value > high`
    Outside {
        /// Values strictly below fire
        low: f64,
        /// Values strictly above fire
        high: f64,
    },
    /// Exact smoking status
    Smoking(SmokingStatus),
    /// Exact exercise level
    Exercise(ExerciseLevel),
}

impl Condition {
    /// Whether this condition holds for `reading`
    ///
    /// A numeric condition never matches a categorical reading and vice versa.
    #[must_use]
    pub fn matches(&self, reading: Reading) -> bool {
        match (*self, reading) {
            (Self::Below(limit), Reading::Numeric(value)) => value < limit,
            (Self::AtLeast(limit), Reading::Numeric(value)) => value >= limit,
            (Self::Between { from, below }, Reading::Numeric(value)) => {
                value >= from && value < below
            }
            (Self::Above(limit), Reading::Numeric(value)) => value > limit,
            (Self::Outside { low, high }, Reading::Numeric(value)) => value < low || value > high,
            (Self::Smoking(expected), Reading::Smoking(actual)) => expected == actual,
            (Self::Exercise(expected), Reading::Exercise(actual)) => expected == actual,
            _ => false,
        }
    }
}

/// One outcome of a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBand {
    /// When the band fires
    pub condition: Condition,
    /// Points added to the score
    pub weight: u32,
    /// Recommendation appended to the assessment
    pub message: String,
}

impl RiskBand {
    fn new(condition: Condition, weight: u32, message: &str) -> Self {
        Self {
            condition,
            weight,
            message: message.to_owned(),
        }
    }
}

/// All bands for one factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRule {
    /// Factor this rule reads
    pub factor: RiskFactor,
    /// Mutually exclusive bands, first match wins
    pub bands: Vec<RiskBand>,
}

impl RiskRule {
    /// First band whose condition holds, if any
    #[must_use]
    pub fn matching_band(&self, reading: Reading) -> Option<&RiskBand> {
        self.bands
            .iter()
            .find(|band| band.condition.matches(reading))
    }

    /// Build the default table, one rule per factor in [`RiskFactor::ORDERED`]
    #[must_use]
    pub fn default_table(config: &RiskEngineConfig) -> Vec<Self> {
        RiskFactor::ORDERED
            .iter()
            .map(|&factor| Self {
                factor,
                bands: default_bands(factor, config),
            })
            .collect()
    }
}

fn default_bands(factor: RiskFactor, config: &RiskEngineConfig) -> Vec<RiskBand> {
    let t = &config.thresholds;
    let w = &config.weights;
    let m = &config.messages;

    match factor {
        RiskFactor::Bmi => vec![
            RiskBand::new(Condition::Below(t.bmi_underweight_below), w.underweight, &m.underweight),
            RiskBand::new(
                Condition::Between {
                    from: t.bmi_overweight_from,
                    below: t.bmi_obese_from,
                },
                w.overweight,
                &m.overweight,
            ),
            RiskBand::new(Condition::AtLeast(t.bmi_obese_from), w.obese, &m.obese),
        ],
        RiskFactor::BloodPressure => vec![
            RiskBand::new(
                Condition::AtLeast(f64::from(t.systolic_high_from)),
                w.high_blood_pressure,
                &m.high_blood_pressure,
            ),
            RiskBand::new(
                Condition::Between {
                    from: f64::from(t.systolic_elevated_from),
                    below: f64::from(t.systolic_high_from),
                },
                w.elevated_blood_pressure,
                &m.elevated_blood_pressure,
            ),
        ],
        RiskFactor::BloodSugar => vec![
            RiskBand::new(
                Condition::AtLeast(f64::from(t.blood_sugar_high_from)),
                w.high_blood_sugar,
                &m.high_blood_sugar,
            ),
            RiskBand::new(
                Condition::Between {
                    from: f64::from(t.blood_sugar_prediabetic_from),
                    below: f64::from(t.blood_sugar_high_from),
                },
                w.prediabetic,
                &m.prediabetic,
            ),
        ],
        RiskFactor::Cholesterol => vec![
            RiskBand::new(
                Condition::AtLeast(f64::from(t.cholesterol_high_from)),
                w.high_cholesterol,
                &m.high_cholesterol,
            ),
            RiskBand::new(
                Condition::Between {
                    from: f64::from(t.cholesterol_borderline_from),
                    below: f64::from(t.cholesterol_high_from),
                },
                w.borderline_cholesterol,
                &m.borderline_cholesterol,
            ),
        ],
        RiskFactor::Smoking => vec![
            RiskBand::new(
                Condition::Smoking(SmokingStatus::Current),
                w.current_smoker,
                &m.current_smoker,
            ),
            RiskBand::new(
                Condition::Smoking(SmokingStatus::Former),
                w.former_smoker,
                &m.former_smoker,
            ),
        ],
        RiskFactor::Exercise => vec![
            RiskBand::new(
                Condition::Exercise(ExerciseLevel::None),
                w.sedentary,
                &m.sedentary,
            ),
            RiskBand::new(
                Condition::Exercise(ExerciseLevel::Occasional),
                w.occasional_exercise,
                &m.occasional_exercise,
            ),
        ],
        RiskFactor::Age => vec![RiskBand::new(
            Condition::Above(f64::from(t.senior_age_above)),
            w.senior_age,
            &m.senior_age,
        )],
        RiskFactor::HeartRate => vec![RiskBand::new(
            Condition::Outside {
                low: f64::from(t.heart_rate_low_below),
                high: f64::from(t.heart_rate_high_above),
            },
            w.irregular_heart_rate,
            &m.irregular_heart_rate,
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_follows_factor_order() {
        let table = RiskRule::default_table(&RiskEngineConfig::default());
        let factors: Vec<RiskFactor> = table.iter().map(|rule| rule.factor).collect();
        assert_eq!(factors, RiskFactor::ORDERED.to_vec());
    }

    #[test]
    fn test_bmi_band_boundaries() {
        let table = RiskRule::default_table(&RiskEngineConfig::default());
        let bmi = &table[0];

        assert!(bmi.matching_band(Reading::Numeric(18.49)).is_some());
        assert!(bmi.matching_band(Reading::Numeric(18.5)).is_none());
        assert!(bmi.matching_band(Reading::Numeric(24.99)).is_none());
        assert_eq!(bmi.matching_band(Reading::Numeric(25.0)).map(|b| b.weight), Some(20));
        assert_eq!(bmi.matching_band(Reading::Numeric(29.99)).map(|b| b.weight), Some(20));
        assert_eq!(bmi.matching_band(Reading::Numeric(30.0)).map(|b| b.weight), Some(35));
    }

    #[test]
    fn test_heart_rate_range_is_inclusive() {
        let table = RiskRule::default_table(&RiskEngineConfig::default());
        let heart_rate = &table[7];

        assert!(heart_rate.matching_band(Reading::Numeric(60.0)).is_none());
        assert!(heart_rate.matching_band(Reading::Numeric(100.0)).is_none());
        assert!(heart_rate.matching_band(Reading::Numeric(59.0)).is_some());
        assert!(heart_rate.matching_band(Reading::Numeric(101.0)).is_some());
    }

    #[test]
    fn test_condition_kind_mismatch_never_matches() {
        assert!(!Condition::Below(10.0).matches(Reading::Smoking(SmokingStatus::Current)));
        assert!(!Condition::Smoking(SmokingStatus::Current)
            .matches(Reading::Exercise(ExerciseLevel::None)));
    }
}
