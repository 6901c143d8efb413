// ABOUTME: Integration tests for BMR, TDEE and PFC macro target calculation
// ABOUTME: Covers reference scenarios, validation, activity fallback and numeric properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Nutrition calculator tests
//!
//! - Revised Harris-Benedict BMR for both sexes
//! - TDEE across all activity levels and the sedentary fallback
//! - Rounded 25/25/50 macro split and its rounding drift bound
//! - Validation of height, weight and age

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pfc_planner::config::NutritionConfig;
use pfc_planner::intelligence::nutrition_calculator::{
    calculate, calculate_harris_benedict, calculate_tdee, validate, FieldError,
    NutritionCalculator, ValidationResult,
};
use pfc_planner::{ActivityLevel, BodyProfile, ErrorCode, MacroGrams, Sex};

mod common;

use common::{assert_close, init_test_logging, reference_profile};

/// Largest possible gap between rounded macro energy and TDEE: 0.5 g x (4 + 9 + 4)
const MAX_MACRO_DRIFT_KCAL: f64 = 8.5;

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn test_male_sedentary_reference() {
    init_test_logging();
    let result = calculate(&reference_profile(Sex::Male));

    // 66.5 + 893.75 + 850.51 - 202.5
    assert_close(result.bmr_kcal, 1608.26);
    assert_close(result.tdee_kcal, 1929.912);
    assert_eq!(
        result.macros,
        MacroGrams {
            protein_grams: 121,
            fat_grams: 54,
            carbs_grams: 241,
        }
    );
}

#[test]
fn test_female_sedentary_reference() {
    init_test_logging();
    let result = calculate(&reference_profile(Sex::Female));

    // 655.1 + 621.595 + 314.5 - 140.28
    assert_close(result.bmr_kcal, 1450.915);
    assert_close(result.tdee_kcal, 1741.098);
    assert_eq!(
        result.macros,
        MacroGrams {
            protein_grams: 109,
            fat_grams: 48,
            carbs_grams: 218,
        }
    );
}

#[test]
fn test_unrecognized_activity_label_uses_sedentary_multiplier() {
    init_test_logging();
    let level = ActivityLevel::from_str_lossy("couch_potato");
    assert_eq!(level, ActivityLevel::Sedentary);

    let profile = reference_profile(Sex::Male).with_activity_level(level);
    let result = calculate(&profile);
    assert_close(result.tdee_kcal, result.bmr_kcal * 1.2);
}

#[test]
fn test_out_of_range_move_level_uses_sedentary_multiplier() {
    let profile =
        reference_profile(Sex::Female).with_activity_level(ActivityLevel::from_move_level(7));
    let result = calculate(&profile);
    assert_close(result.tdee_kcal, result.bmr_kcal * 1.2);
}

#[test]
fn test_activity_multipliers() {
    let expected = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::LightlyActive, 1.375),
        (ActivityLevel::ModeratelyActive, 1.55),
        (ActivityLevel::VeryActive, 1.725),
        (ActivityLevel::ExtraActive, 1.9),
    ];
    let config = NutritionConfig::default();
    for (level, multiplier) in expected {
        assert_close(
            calculate_tdee(1500.0, level, &config.activity_factors),
            1500.0 * multiplier,
        );
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

fn sample_profiles() -> Vec<BodyProfile> {
    let mut profiles = Vec::new();
    for height in [140.0, 155.5, 170.0, 183.2, 201.0] {
        for weight in [38.0, 52.7, 65.0, 88.8, 130.0] {
            for age in [16, 25, 44, 67, 90] {
                for sex in [Sex::Male, Sex::Female] {
                    for level in ActivityLevel::ALL {
                        profiles.push(BodyProfile::new(height, weight, age, sex, level));
                    }
                }
            }
        }
    }
    profiles
}

#[test]
fn test_calculation_is_deterministic() {
    for profile in sample_profiles() {
        let first = calculate(&profile);
        let second = calculate(&profile);
        assert_eq!(first.bmr_kcal.to_bits(), second.bmr_kcal.to_bits());
        assert_eq!(first.tdee_kcal.to_bits(), second.tdee_kcal.to_bits());
        assert_eq!(first.macros, second.macros);
    }
}

#[test]
fn test_tdee_strictly_increases_with_activity() {
    for profile in sample_profiles()
        .into_iter()
        .filter(|p| p.activity_level == ActivityLevel::Sedentary)
    {
        let tdees: Vec<f64> = ActivityLevel::ALL
            .iter()
            .map(|level| calculate(&profile.with_activity_level(*level)).tdee_kcal)
            .collect();
        assert!(tdees[0] > 0.0);
        assert!(
            tdees.windows(2).all(|pair| pair[0] < pair[1]),
            "TDEE not increasing for {profile:?}: {tdees:?}"
        );
    }
}

#[test]
fn test_macro_energy_within_rounding_drift() {
    let calculator = NutritionCalculator::default();
    for profile in sample_profiles() {
        let result = calculator.calculate(&profile);
        let drift = (calculator.macro_kcal(&result) - result.tdee_kcal).abs();
        assert!(
            drift <= MAX_MACRO_DRIFT_KCAL + 1e-9,
            "drift {drift} too large for {profile:?}"
        );
    }
}

#[test]
fn test_sex_selects_formula_branch() {
    for profile in sample_profiles() {
        let male = calculate(&profile.with_sex(Sex::Male));
        let female = calculate(&profile.with_sex(Sex::Female));
        assert!((male.bmr_kcal - female.bmr_kcal).abs() > 1e-6);
    }
}

#[test]
fn test_negative_bmr_is_not_floored() {
    let profile = BodyProfile::new(1.0, 1.0, 100, Sex::Male, ActivityLevel::Sedentary);
    assert!(validate(&profile).is_valid());

    let result = calculate(&profile);
    assert!(result.bmr_kcal < 0.0);
    assert!(result.macros.protein_grams < 0);
    assert!(result.macros.carbs_grams < 0);
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_all_negative_fields_report_every_error() {
    let profile = BodyProfile::new(-1.0, -1.0, -1, Sex::Male, ActivityLevel::Sedentary);
    assert_eq!(
        validate(&profile).errors(),
        vec![
            FieldError::InvalidHeight,
            FieldError::InvalidWeight,
            FieldError::InvalidAge,
        ]
    );
}

#[test]
fn test_zero_fields_are_invalid() {
    let zero_height = BodyProfile::new(0.0, 65.0, 30, Sex::Male, ActivityLevel::Sedentary);
    assert_eq!(validate(&zero_height).errors(), vec![FieldError::InvalidHeight]);

    let zero_weight = BodyProfile::new(170.0, 0.0, 30, Sex::Male, ActivityLevel::Sedentary);
    assert_eq!(validate(&zero_weight).errors(), vec![FieldError::InvalidWeight]);

    let zero_age = BodyProfile::new(170.0, 65.0, 0, Sex::Male, ActivityLevel::Sedentary);
    assert_eq!(validate(&zero_age).errors(), vec![FieldError::InvalidAge]);
}

#[test]
fn test_tiny_positive_height_is_valid_and_computes() {
    let profile = BodyProfile::new(0.0001, 65.0, 30, Sex::Female, ActivityLevel::ExtraActive);
    assert_eq!(validate(&profile), ValidationResult::Valid);

    let result = calculate(&profile);
    assert!(result.bmr_kcal.is_finite());
    assert!(result.tdee_kcal.is_finite());
}

#[test]
fn test_validate_and_calculate_rejects_with_invalid_input() {
    let calculator = NutritionCalculator::default();
    let profile = BodyProfile::new(170.0, -3.0, 30, Sex::Male, ActivityLevel::Sedentary);

    let error = calculator.validate_and_calculate(&profile).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.context.details["fields"][0], "weight_kg");
}

#[test]
fn test_harris_benedict_component_function() {
    let config = NutritionConfig::default();
    assert_close(
        calculate_harris_benedict(80.0, 180.0, 40, Sex::Male, &config.bmr),
        // 66.5 + 1100.0 + 900.54 - 270.0
        1797.04,
    );
}

#[test]
fn test_macro_energy_uses_configured_densities() {
    let mut config = NutritionConfig::default();
    config.macronutrients.fat_kcal_per_gram = 8.0;
    let calculator = NutritionCalculator::new(config);

    let result = calculator.calculate(&reference_profile(Sex::Male));
    // 1929.912 x 0.25 / 8 = 60.3 g fat
    assert_eq!(
        result.macros,
        MacroGrams {
            protein_grams: 121,
            fat_grams: 60,
            carbs_grams: 241,
        }
    );
    // 121 x 4 + 60 x 8 + 241 x 4
    assert_close(calculator.macro_kcal(&result), 1928.0);
    assert_close(NutritionCalculator::default().macro_kcal(&result), 1988.0);
}
