// ABOUTME: Clinical thresholds for BMI, blood pressure, glucose, cholesterol, age and heart rate
// ABOUTME: Reference values feeding the default risk rule table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! Clinical cut-off values
//!
//! These are the screening thresholds used by the default rule table. They are
//! deliberately coarse: the portal flags metrics for follow-up, it does not
//! diagnose.

/// Body mass index categories (kg/m²)
///
/// Reference: WHO, "A healthy lifestyle - WHO recommendations" (2010)
pub mod bmi {
    /// Below this value a person is classified as underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// From this value a person is classified as overweight
    pub const OVERWEIGHT_FROM: f64 = 25.0;
    /// From this value a person is classified as obese
    pub const OBESE_FROM: f64 = 30.0;
}

/// Systolic blood pressure categories (mmHg)
///
/// Reference: 2017 ACC/AHA Guideline for High Blood Pressure in Adults
pub mod blood_pressure {
    /// Elevated / stage 1 starts here
    pub const ELEVATED_SYSTOLIC_FROM: i32 = 130;
    /// Stage 2 hypertension starts here
    pub const HIGH_SYSTOLIC_FROM: i32 = 140;
}

/// Fasting plasma glucose categories (mg/dL)
///
/// Reference: American Diabetes Association, Standards of Care, section 2
pub mod blood_sugar {
    /// Impaired fasting glucose (prediabetes) starts here
    pub const PREDIABETIC_FROM: i32 = 100;
    /// Diabetes range starts here
    pub const HIGH_FROM: i32 = 126;
}

/// Total cholesterol categories (mg/dL)
///
/// Reference: NCEP Adult Treatment Panel III
pub mod cholesterol {
    /// Borderline high starts here
    pub const BORDERLINE_FROM: i32 = 200;
    /// High starts here
    pub const HIGH_FROM: i32 = 240;
}

/// Age screening
pub mod age {
    /// Ages strictly above this get a regular check-up recommendation
    pub const SENIOR_ABOVE: i32 = 60;
}

/// Resting heart rate (bpm)
///
/// Reference: American Heart Association, normal adult resting rate 60-100 bpm
pub mod heart_rate {
    /// Resting rates strictly below this are flagged (bradycardia)
    pub const RESTING_LOW_BELOW: i32 = 60;
    /// Resting rates strictly above this are flagged (tachycardia)
    pub const RESTING_HIGH_ABOVE: i32 = 100;
}
