// ABOUTME: Health questionnaire model used as input to the risk engine
// ABOUTME: Defines HealthMetrics with gender, smoking and exercise enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::limits::MAX_FREE_TEXT_LENGTH;
use crate::errors::{AppError, AppResult};

/// Self-reported gender, informational only
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other
    Other,
    /// Not provided or not recognised
    #[default]
    #[serde(other)]
    Unspecified,
}

impl Gender {
    /// Storage representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            "other" => Self::Other,
            _ => Self::Unspecified,
        })
    }
}

/// Smoking status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    /// Never smoked
    None,
    /// Quit smoking
    Former,
    /// Smokes now
    Current,
}

impl SmokingStatus {
    /// Storage representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Former => "former",
            Self::Current => "current",
        }
    }
}

impl fmt::Display for SmokingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SmokingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "former" => Ok(Self::Former),
            "current" => Ok(Self::Current),
            other => Err(AppError::invalid_input(format!(
                "Unknown smoking status: {other}"
            ))),
        }
    }
}

/// Exercise frequency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseLevel {
    /// No exercise
    None,
    /// Exercises now and then
    Occasional,
    /// Exercises regularly
    Regular,
}

impl ExerciseLevel {
    /// Storage representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Occasional => "occasional",
            Self::Regular => "regular",
        }
    }
}

impl fmt::Display for ExerciseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "occasional" => Ok(Self::Occasional),
            "regular" => Ok(Self::Regular),
            other => Err(AppError::invalid_input(format!(
                "Unknown exercise level: {other}"
            ))),
        }
    }
}

/// One health questionnaire submission
///
/// Field names follow the questionnaire payload (`bloodPressure`, `heartRate`, ...).
/// Only the numeric metrics, smoking and exercise are scored; gender, medical
/// history and medications are stored for the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// Age in years
    pub age: i32,
    /// Self-reported gender
    #[serde(default)]
    pub gender: Gender,
    /// Height in centimeters
    pub height: i32,
    /// Weight in kilograms
    pub weight: i32,
    /// Blood pressure reading as "systolic/diastolic"
    pub blood_pressure: String,
    /// Fasting blood sugar in mg/dL
    pub blood_sugar: i32,
    /// Total cholesterol in mg/dL
    pub cholesterol: i32,
    /// Resting heart rate in bpm
    pub heart_rate: i32,
    /// Smoking status
    pub smoking: SmokingStatus,
    /// Exercise frequency
    pub exercise: ExerciseLevel,
    /// Free-text medical history
    #[serde(default)]
    pub medical_history: String,
    /// Free-text current medications
    #[serde(default)]
    pub medications: String,
}

impl HealthMetrics {
    /// Check the ranges a questionnaire must satisfy before it is scored
    ///
    /// The risk engine itself only rejects input it cannot compute with; this is
    /// the stricter check applied to submissions coming over the API.
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` for a blank blood pressure and
    /// `VALUE_OUT_OF_RANGE` for any numeric field outside its range.
    pub fn validate(&self) -> AppResult<()> {
        if self.blood_pressure.trim().is_empty() {
            return Err(AppError::missing_field("bloodPressure"));
        }

        let positive = [
            ("age", self.age),
            ("height", self.height),
            ("weight", self.weight),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(AppError::out_of_range(format!(
                    "{field} must be greater than 0"
                )));
            }
        }

        let non_negative = [
            ("bloodSugar", self.blood_sugar),
            ("cholesterol", self.cholesterol),
            ("heartRate", self.heart_rate),
        ];
        for (field, value) in non_negative {
            if value < 0 {
                return Err(AppError::out_of_range(format!(
                    "{field} must not be negative"
                )));
            }
        }

        for (field, text) in [
            ("medicalHistory", &self.medical_history),
            ("medications", &self.medications),
        ] {
            if text.len() > MAX_FREE_TEXT_LENGTH {
                return Err(AppError::out_of_range(format!(
                    "{field} must be at most {MAX_FREE_TEXT_LENGTH} characters"
                )));
            }
        }

        Ok(())
    }
}
