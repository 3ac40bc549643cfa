// ABOUTME: Body mass index calculation and one-decimal rounding
// ABOUTME: Rejects non-positive heights instead of dividing by zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

use healthcare_core::errors::RiskError;

/// Centimeters per meter
const CM_PER_METER: f64 = 100.0;

/// Compute BMI as weight / (height in meters)², unrounded
///
/// # Errors
///
/// Returns [`RiskError::InvalidInput`] when `height_cm` is zero or negative.
pub fn calculate_bmi(height_cm: i32, weight_kg: i32) -> Result<f64, RiskError> {
    if height_cm <= 0 {
        return Err(RiskError::invalid_input(
            "height",
            format!("height must be greater than 0 to compute BMI, got {height_cm}"),
        ));
    }

    let height_m = f64::from(height_cm) / CM_PER_METER;
    Ok(f64::from(weight_kg) / (height_m * height_m))
}

/// Round to one fractional digit, half away from zero
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_values() {
        let bmi = calculate_bmi(170, 70).unwrap();
        assert!((round_to_tenth(bmi) - 24.2).abs() < f64::EPSILON);

        let bmi = calculate_bmi(160, 90).unwrap();
        assert!((bmi - 35.156_25).abs() < 1e-9);
        assert!((round_to_tenth(bmi) - 35.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_height_rejected() {
        let err = calculate_bmi(0, 70).unwrap_err();
        assert_eq!(err.field(), "height");
        assert!(calculate_bmi(-170, 70).is_err());
    }

    #[test]
    fn test_round_to_tenth() {
        assert!((round_to_tenth(18.449) - 18.4).abs() < f64::EPSILON);
        assert!((round_to_tenth(29.96) - 30.0).abs() < f64::EPSILON);
    }
}
