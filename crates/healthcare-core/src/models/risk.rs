// ABOUTME: Risk assessment output model with score, level, BMI, and recommendations
// ABOUTME: Level classification is a pure function of the score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::risk_levels::{HIGH_RISK_MIN_SCORE, MEDIUM_RISK_MIN_SCORE};
use crate::errors::AppError;

/// Coarse risk bucket derived from the risk score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score below 50
    Low,
    /// Score from 50 up to (excluding) 100
    Medium,
    /// Score of 100 or more
    High,
}

impl RiskLevel {
    /// Classify a score
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= HIGH_RISK_MIN_SCORE {
            Self::High
        } else if score >= MEDIUM_RISK_MIN_SCORE {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Storage representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Display label, e.g. "Medium Risk"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    /// One-line advice shown next to the level
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Low => "Low risk. Keep it up!",
            Self::Medium => "Medium risk. Follow recommendations.",
            Self::High => "High risk. Consult healthcare provider.",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_input(format!("Unknown risk level: {other}"))),
        }
    }
}

/// Result of scoring one `HealthMetrics` record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    /// Sum of the weights of every triggered rule
    pub score: u32,
    /// Bucket derived from `score`
    pub level: RiskLevel,
    /// Body mass index rounded to one decimal
    pub bmi: f64,
    /// Advice in rule evaluation order, never empty
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(49), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(99), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(225), RiskLevel::High);
    }

    #[test]
    fn test_level_is_monotonic() {
        let mut previous = RiskLevel::Low;
        for score in 0..=300 {
            let level = RiskLevel::from_score(score);
            assert!(level >= previous, "level decreased at score {score}");
            previous = level;
        }
    }

    #[test]
    fn test_level_string_round_trip() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            assert_eq!(level.as_str().parse::<RiskLevel>().unwrap(), level);
        }
        assert!("severe".parse::<RiskLevel>().is_err());
    }
}
