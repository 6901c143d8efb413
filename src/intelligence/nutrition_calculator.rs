// ABOUTME: Nutrition target calculation from body metrics and activity level
// ABOUTME: Revised Harris-Benedict BMR, activity-scaled TDEE and 25/25/50 PFC gram split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Turns a [`BodyProfile`] into daily energy and macronutrient targets.
//! Every function here is pure: no I/O, no shared state, and the same input
//! always yields a bit-identical [`NutritionResult`].
//!
//! # Scientific References
//!
//! - Roza, A.M. & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated:
//!   resting energy requirements and the body cell mass.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::{ActivityFactorsConfig, BmrConfig, MacroRatioConfig, NutritionConfig};
use pfc_core::errors::{AppError, AppResult};
use pfc_core::models::{ActivityLevel, BodyProfile, MacroGrams, NutritionResult, Sex};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

/// A single body metric that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// Height missing, non-numeric or not positive
    #[error("Height must be a positive number of centimeters")]
    InvalidHeight,
    /// Weight missing, non-numeric or not positive
    #[error("Weight must be a positive number of kilograms")]
    InvalidWeight,
    /// Age missing, non-numeric or not positive
    #[error("Age must be a positive whole number of years")]
    InvalidAge,
}

impl FieldError {
    /// Name of the offending profile field
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::InvalidHeight => "height_cm",
            Self::InvalidWeight => "weight_kg",
            Self::InvalidAge => "age_years",
        }
    }
}

/// Outcome of [`validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields satisfy their invariants
    Valid,
    /// Every failing field, never empty
    Invalid(BTreeSet<FieldError>),
}

impl ValidationResult {
    /// Build a result from a set of collected errors
    #[must_use]
    pub fn from_errors(errors: BTreeSet<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    /// Whether the profile passed validation
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Failing fields in check order (empty when valid)
    #[must_use]
    pub fn errors(&self) -> Vec<FieldError> {
        match self {
            Self::Valid => Vec::new(),
            Self::Invalid(errors) => errors.iter().copied().collect(),
        }
    }

    /// Convert into an application error carrying every failing field
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` when the result is `Invalid`
    pub fn into_result(self) -> AppResult<()> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(errors) => Err(field_errors_to_app_error(&errors)),
        }
    }
}

/// Map a set of field errors to an `InvalidInput` application error
#[must_use]
pub fn field_errors_to_app_error(errors: &BTreeSet<FieldError>) -> AppError {
    let message = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
    AppError::invalid_input(message).with_details(json!({ "fields": fields }))
}

/// Check the body metrics of a profile
///
/// Height and weight must be finite and strictly positive, age strictly
/// positive. All failures are collected, never just the first.
#[must_use]
pub fn validate(profile: &BodyProfile) -> ValidationResult {
    let mut errors = BTreeSet::new();
    if !is_valid_measurement(profile.height_cm) {
        errors.insert(FieldError::InvalidHeight);
    }
    if !is_valid_measurement(profile.weight_kg) {
        errors.insert(FieldError::InvalidWeight);
    }
    if !is_valid_age(profile.age_years) {
        errors.insert(FieldError::InvalidAge);
    }
    ValidationResult::from_errors(errors)
}

/// Height or weight: finite and strictly positive
#[must_use]
pub fn is_valid_measurement(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Age in whole years: strictly positive
#[must_use]
pub const fn is_valid_age(age_years: i32) -> bool {
    age_years > 0
}

/// Calculate targets with the standard coefficients
///
/// Expects a profile that passed [`validate`]. Never panics; extreme inputs
/// may produce a negative BMR, which is returned as-is.
#[must_use]
pub fn calculate(profile: &BodyProfile) -> NutritionResult {
    NutritionCalculator::default().calculate(profile)
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// - Male: `66.5 + 13.75 x weight + 5.003 x height - 6.75 x age`
/// - Female: `655.1 + 9.563 x weight + 1.850 x height - 4.676 x age`
///
/// The result is not floored at zero.
///
/// # Reference
/// Roza & Shizgal (1984) DOI: 10.1093/ajcn/40.1.168
#[must_use]
pub fn calculate_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let coefficients = config.coefficients(sex);

    let weight_component = coefficients.weight * weight_kg;
    let height_component = coefficients.height * height_cm;
    let age_component = coefficients.age * f64::from(age_years);

    coefficients.constant + weight_component + height_component - age_component
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
///
/// # Reference
/// `McArdle` et al. (2010) - Exercise Physiology
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Split TDEE into protein, fat and carbohydrate grams
///
/// Each gram value is `round(tdee x ratio / kcal_per_gram)`, rounded half
/// away from zero. The grams are not renormalized, so their energy can drift
/// from TDEE by up to half a gram of each macro.
#[must_use]
pub fn calculate_macros(tdee: f64, config: &MacroRatioConfig) -> MacroGrams {
    MacroGrams {
        protein_grams: grams(tdee, config.protein_ratio, config.protein_kcal_per_gram),
        fat_grams: grams(tdee, config.fat_ratio, config.fat_kcal_per_gram),
        carbs_grams: grams(tdee, config.carbs_ratio, config.carbs_kcal_per_gram),
    }
}

fn grams(tdee: f64, ratio: f64, kcal_per_gram: f64) -> i64 {
    (tdee * ratio / kcal_per_gram).round() as i64
}

/// Calculator bound to an explicit configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionCalculator {
    config: NutritionConfig,
}

impl NutritionCalculator {
    /// Create a calculator with the given configuration
    #[must_use]
    pub const fn new(config: NutritionConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Check the body metrics of a profile
    #[must_use]
    pub fn validate(&self, profile: &BodyProfile) -> ValidationResult {
        validate(profile)
    }

    /// Calculate BMR, TDEE and macro targets for a profile
    #[must_use]
    pub fn calculate(&self, profile: &BodyProfile) -> NutritionResult {
        let bmr_kcal = calculate_harris_benedict(
            profile.weight_kg,
            profile.height_cm,
            profile.age_years,
            profile.sex,
            &self.config.bmr,
        );
        let tdee_kcal = calculate_tdee(
            bmr_kcal,
            profile.activity_level,
            &self.config.activity_factors,
        );
        let macros = calculate_macros(tdee_kcal, &self.config.macronutrients);

        debug!(
            sex = %profile.sex,
            activity_level = %profile.activity_level,
            bmr_kcal,
            tdee_kcal,
            protein_g = macros.protein_grams,
            fat_g = macros.fat_grams,
            carbs_g = macros.carbs_grams,
            "Calculated nutrition targets"
        );

        NutritionResult {
            bmr_kcal,
            tdee_kcal,
            macros,
        }
    }

    /// Energy implied by the rounded macro grams at the configured densities
    #[must_use]
    pub fn macro_kcal(&self, result: &NutritionResult) -> f64 {
        self.config.macronutrients.kcal_of(&result.macros)
    }

    /// Validate, then calculate
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` listing every failing field
    pub fn validate_and_calculate(&self, profile: &BodyProfile) -> AppResult<NutritionResult> {
        self.validate(profile).into_result()?;
        Ok(self.calculate(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfc_core::errors::ErrorCode;

    const EPSILON: f64 = 1e-9;

    fn reference_profile() -> BodyProfile {
        BodyProfile::new(170.0, 65.0, 30, Sex::Male, ActivityLevel::Sedentary)
    }

    #[test]
    fn test_harris_benedict_male() {
        let bmr = calculate_harris_benedict(65.0, 170.0, 30, Sex::Male, &BmrConfig::default());
        assert!((bmr - 1608.26).abs() < EPSILON);
    }

    #[test]
    fn test_harris_benedict_female() {
        let bmr = calculate_harris_benedict(65.0, 170.0, 30, Sex::Female, &BmrConfig::default());
        assert!((bmr - 1450.915).abs() < EPSILON);
    }

    #[test]
    fn test_bmr_not_floored() {
        let bmr = calculate_harris_benedict(0.1, 0.1, 120, Sex::Male, &BmrConfig::default());
        assert!(bmr < 0.0);
    }

    #[test]
    fn test_tdee_uses_activity_factor() {
        let config = ActivityFactorsConfig::default();
        assert!((calculate_tdee(1000.0, ActivityLevel::VeryActive, &config) - 1725.0).abs() < EPSILON);
        assert!((calculate_tdee(1000.0, ActivityLevel::ExtraActive, &config) - 1900.0).abs() < EPSILON);
    }

    #[test]
    fn test_macros_round_half_away_from_zero() {
        // 2000 kcal: protein 125.0, fat 55.55.., carbs 250.0
        let macros = calculate_macros(2000.0, &MacroRatioConfig::default());
        assert_eq!(macros.protein_grams, 125);
        assert_eq!(macros.fat_grams, 56);
        assert_eq!(macros.carbs_grams, 250);

        // 1002 kcal: protein 62.625 -> 63, carbs 125.25 -> 125
        let macros = calculate_macros(1002.0, &MacroRatioConfig::default());
        assert_eq!(macros.protein_grams, 63);
        assert_eq!(macros.carbs_grams, 125);

        // 18 kcal: fat exactly 0.5 g rounds up
        assert_eq!(calculate_macros(18.0, &MacroRatioConfig::default()).fat_grams, 1);
    }

    #[test]
    fn test_reference_scenario() {
        let result = calculate(&reference_profile());
        assert!((result.bmr_kcal - 1608.26).abs() < EPSILON);
        assert!((result.tdee_kcal - 1929.912).abs() < EPSILON);
        assert_eq!(
            result.macros,
            MacroGrams {
                protein_grams: 121,
                fat_grams: 54,
                carbs_grams: 241,
            }
        );
        assert_eq!(result.display_bmr(), 1608);
        assert_eq!(result.display_tdee(), 1930);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let profile = BodyProfile::new(-1.0, -1.0, -1, Sex::Male, ActivityLevel::Sedentary);
        let result = validate(&profile);
        assert!(!result.is_valid());
        assert_eq!(
            result.errors(),
            vec![
                FieldError::InvalidHeight,
                FieldError::InvalidWeight,
                FieldError::InvalidAge
            ]
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let profile = BodyProfile::new(f64::NAN, f64::INFINITY, 30, Sex::Male, ActivityLevel::Sedentary);
        assert_eq!(
            validate(&profile).errors(),
            vec![FieldError::InvalidHeight, FieldError::InvalidWeight]
        );
    }

    #[test]
    fn test_into_result_carries_fields() {
        let profile = BodyProfile::new(170.0, 0.0, 0, Sex::Female, ActivityLevel::Sedentary);
        let error = validate(&profile).into_result().unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(
            error.context.details["fields"],
            json!(["weight_kg", "age_years"])
        );
    }

    #[test]
    fn test_custom_config_changes_split() {
        let mut config = NutritionConfig::default();
        config.macronutrients.protein_ratio = 0.30;
        config.macronutrients.carbs_ratio = 0.45;
        let calculator = NutritionCalculator::new(config);
        let result = calculator.calculate(&reference_profile());
        // 1929.912 * 0.30 / 4 = 144.7434
        assert_eq!(result.macros.protein_grams, 145);
    }
}
