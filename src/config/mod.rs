// ABOUTME: Configuration management for the nutrition calculator and its callers
// ABOUTME: Loads defaults, applies PFC_* environment overrides and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is an explicit value: [`NutritionConfig::load`] returns a
//! validated config that the caller hands to
//! [`NutritionCalculator::new`](crate::intelligence::nutrition_calculator::NutritionCalculator::new).
//! There is no process-wide configuration singleton.
//!
//! # Environment Variables
//!
//! | Variable | Field |
//! |---|---|
//! | `PFC_BMR_MALE_CONSTANT` .. `PFC_BMR_FEMALE_AGE_COEF` | [`BmrConfig`] |
//! | `PFC_ACTIVITY_SEDENTARY` .. `PFC_ACTIVITY_EXTRA_ACTIVE` | [`ActivityFactorsConfig`] |
//! | `PFC_MACRO_PROTEIN_RATIO`, `PFC_MACRO_FAT_RATIO`, `PFC_MACRO_CARBS_RATIO` | [`MacroRatioConfig`] ratios |
//! | `PFC_MACRO_PROTEIN_KCAL`, `PFC_MACRO_FAT_KCAL`, `PFC_MACRO_CARBS_KCAL` | [`MacroRatioConfig`] densities |

/// Nutrition calculator configuration types
pub mod nutrition;

pub use nutrition::{
    ActivityFactorsConfig, BmrCoefficients, BmrConfig, MacroRatioConfig, NutritionConfig,
};

use pfc_core::constants::macros::RATIO_SUM_TOLERANCE;
use pfc_core::errors::{AppError, ErrorCode};
use std::env;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Upper bound accepted for any activity multiplier
const MAX_ACTIVITY_FACTOR: f64 = 2.5;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Ratio values do not form a valid split
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// A single value is outside its accepted range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::Parse(_) => ErrorCode::ConfigError,
            _ => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl NutritionConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an unparsable
    /// value or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        info!(
            sedentary = config.activity_factors.sedentary,
            extra_active = config.activity_factors.extra_active,
            protein_ratio = config.macronutrients.protein_ratio,
            fat_ratio = config.macronutrients.fat_ratio,
            carbs_ratio = config.macronutrients.carbs_ratio,
            "Nutrition configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if coefficients are not positive, activity factors
    /// are outside `[1.0, 2.5]` or not strictly ascending, ratios do not sum
    /// to one, or a caloric density is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_bmr()?;
        self.validate_activity_factors()?;
        self.validate_macronutrients()
    }

    fn validate_bmr(&self) -> Result<(), ConfigError> {
        let bmr = &self.bmr;
        let coefficients = [
            bmr.male_weight_coef,
            bmr.male_height_coef,
            bmr.female_weight_coef,
            bmr.female_height_coef,
        ];
        if coefficients.iter().any(|c| !c.is_finite() || *c <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if !bmr.male_age_coef.is_finite()
            || !bmr.female_age_coef.is_finite()
            || bmr.male_age_coef < 0.0
            || bmr.female_age_coef < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficients must be non-negative",
            ));
        }
        if !bmr.male_constant.is_finite() || !bmr.female_constant.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "BMR constants must be finite",
            ));
        }
        Ok(())
    }

    fn validate_activity_factors(&self) -> Result<(), ConfigError> {
        let factors = self.activity_factors.as_array();
        if factors
            .iter()
            .any(|f| !f.is_finite() || *f < 1.0 || *f > MAX_ACTIVITY_FACTOR)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }

    fn validate_macronutrients(&self) -> Result<(), ConfigError> {
        let m = &self.macronutrients;
        let ratios = [m.protein_ratio, m.fat_ratio, m.carbs_ratio];
        if ratios
            .iter()
            .any(|r| !r.is_finite() || *r < 0.0 || *r > 1.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Macro ratios must be between 0 and 1",
            ));
        }
        if (ratios.iter().sum::<f64>() - 1.0).abs() > RATIO_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights("Macro ratios must sum to 1.0"));
        }
        let densities = [
            m.protein_kcal_per_gram,
            m.fat_kcal_per_gram,
            m.carbs_kcal_per_gram,
        ];
        if densities.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Caloric densities must be positive",
            ));
        }
        Ok(())
    }

    /// Helper to apply an environment variable override if present
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
            debug!(variable = env_var_name, "Applied configuration override");
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // BMR coefficients
        Self::apply_env_var("PFC_BMR_MALE_CONSTANT", &mut self.bmr.male_constant)?;
        Self::apply_env_var("PFC_BMR_MALE_WEIGHT_COEF", &mut self.bmr.male_weight_coef)?;
        Self::apply_env_var("PFC_BMR_MALE_HEIGHT_COEF", &mut self.bmr.male_height_coef)?;
        Self::apply_env_var("PFC_BMR_MALE_AGE_COEF", &mut self.bmr.male_age_coef)?;
        Self::apply_env_var("PFC_BMR_FEMALE_CONSTANT", &mut self.bmr.female_constant)?;
        Self::apply_env_var(
            "PFC_BMR_FEMALE_WEIGHT_COEF",
            &mut self.bmr.female_weight_coef,
        )?;
        Self::apply_env_var(
            "PFC_BMR_FEMALE_HEIGHT_COEF",
            &mut self.bmr.female_height_coef,
        )?;
        Self::apply_env_var("PFC_BMR_FEMALE_AGE_COEF", &mut self.bmr.female_age_coef)?;

        // Activity factors
        Self::apply_env_var(
            "PFC_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "PFC_ACTIVITY_LIGHTLY_ACTIVE",
            &mut self.activity_factors.lightly_active,
        )?;
        Self::apply_env_var(
            "PFC_ACTIVITY_MODERATELY_ACTIVE",
            &mut self.activity_factors.moderately_active,
        )?;
        Self::apply_env_var(
            "PFC_ACTIVITY_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;
        Self::apply_env_var(
            "PFC_ACTIVITY_EXTRA_ACTIVE",
            &mut self.activity_factors.extra_active,
        )?;

        // Macro policy
        Self::apply_env_var(
            "PFC_MACRO_PROTEIN_RATIO",
            &mut self.macronutrients.protein_ratio,
        )?;
        Self::apply_env_var("PFC_MACRO_FAT_RATIO", &mut self.macronutrients.fat_ratio)?;
        Self::apply_env_var(
            "PFC_MACRO_CARBS_RATIO",
            &mut self.macronutrients.carbs_ratio,
        )?;
        Self::apply_env_var(
            "PFC_MACRO_PROTEIN_KCAL",
            &mut self.macronutrients.protein_kcal_per_gram,
        )?;
        Self::apply_env_var(
            "PFC_MACRO_FAT_KCAL",
            &mut self.macronutrients.fat_kcal_per_gram,
        )?;
        Self::apply_env_var(
            "PFC_MACRO_CARBS_KCAL",
            &mut self.macronutrients.carbs_kcal_per_gram,
        )?;

        Ok(self)
    }
}
