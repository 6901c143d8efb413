// ABOUTME: Nutrition calculator configuration for BMR, TDEE and macronutrient policy
// ABOUTME: Harris-Benedict coefficients, activity multipliers and PFC ratio split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculation Configuration
//!
//! Every field defaults to the fixed constants from `pfc_core::constants`, so a
//! default configuration reproduces the standard formulas exactly.
//!
//! # Scientific References
//!
//! - BMR: Roza & Shizgal (1984), revised Harris-Benedict equation
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use pfc_core::constants::{activity_factors, harris_benedict, macros};
use pfc_core::models::{ActivityLevel, MacroGrams, Sex};
use serde::{Deserialize, Serialize};

/// Nutrition Calculation Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Macronutrient split and caloric densities
    pub macronutrients: MacroRatioConfig,
}

/// Revised Harris-Benedict coefficients, per sex
///
/// `BMR = constant + weight_coef * kg + height_coef * cm - age_coef * years`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmrConfig {
    /// Male intercept (66.5)
    pub male_constant: f64,
    /// Male weight coefficient (13.75)
    pub male_weight_coef: f64,
    /// Male height coefficient (5.003)
    pub male_height_coef: f64,
    /// Male age coefficient, subtracted (6.75)
    pub male_age_coef: f64,
    /// Female intercept (655.1)
    pub female_constant: f64,
    /// Female weight coefficient (9.563)
    pub female_weight_coef: f64,
    /// Female height coefficient (1.850)
    pub female_height_coef: f64,
    /// Female age coefficient, subtracted (4.676)
    pub female_age_coef: f64,
}

/// Coefficients of one sex branch of the BMR formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmrCoefficients {
    /// Intercept (kcal)
    pub constant: f64,
    /// kcal per kilogram
    pub weight: f64,
    /// kcal per centimeter
    pub height: f64,
    /// kcal per year of age (subtracted)
    pub age: f64,
}

impl BmrConfig {
    /// Select the coefficients for the given sex
    #[must_use]
    pub const fn coefficients(&self, sex: Sex) -> BmrCoefficients {
        match sex {
            Sex::Male => BmrCoefficients {
                constant: self.male_constant,
                weight: self.male_weight_coef,
                height: self.male_height_coef,
                age: self.male_age_coef,
            },
            Sex::Female => BmrCoefficients {
                constant: self.female_constant,
                weight: self.female_weight_coef,
                height: self.female_height_coef,
                age: self.female_age_coef,
            },
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male_constant: harris_benedict::MALE_CONSTANT,
            male_weight_coef: harris_benedict::MALE_WEIGHT_COEF,
            male_height_coef: harris_benedict::MALE_HEIGHT_COEF,
            male_age_coef: harris_benedict::MALE_AGE_COEF,
            female_constant: harris_benedict::FEMALE_CONSTANT,
            female_weight_coef: harris_benedict::FEMALE_WEIGHT_COEF,
            female_height_coef: harris_benedict::FEMALE_HEIGHT_COEF,
            female_age_coef: harris_benedict::FEMALE_AGE_COEF,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (very hard exercise, physical job): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, activity_level: ActivityLevel) -> f64 {
        match activity_level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }

    /// Factors ordered from least to most active
    #[must_use]
    pub const fn as_array(&self) -> [f64; 5] {
        [
            self.sedentary,
            self.lightly_active,
            self.moderately_active,
            self.very_active,
            self.extra_active,
        ]
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            lightly_active: activity_factors::LIGHTLY_ACTIVE,
            moderately_active: activity_factors::MODERATELY_ACTIVE,
            very_active: activity_factors::VERY_ACTIVE,
            extra_active: activity_factors::EXTRA_ACTIVE,
        }
    }
}

/// Macronutrient ratio policy
///
/// Ratios are fractions of TDEE and must sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroRatioConfig {
    /// Protein share of TDEE (0.25)
    pub protein_ratio: f64,
    /// Fat share of TDEE (0.25)
    pub fat_ratio: f64,
    /// Carbohydrate share of TDEE (0.50)
    pub carbs_ratio: f64,
    /// Protein energy density, kcal/g (4)
    pub protein_kcal_per_gram: f64,
    /// Fat energy density, kcal/g (9)
    pub fat_kcal_per_gram: f64,
    /// Carbohydrate energy density, kcal/g (4)
    pub carbs_kcal_per_gram: f64,
}

impl Default for MacroRatioConfig {
    fn default() -> Self {
        Self {
            protein_ratio: macros::PROTEIN_RATIO,
            fat_ratio: macros::FAT_RATIO,
            carbs_ratio: macros::CARBS_RATIO,
            protein_kcal_per_gram: macros::PROTEIN_KCAL_PER_GRAM,
            fat_kcal_per_gram: macros::FAT_KCAL_PER_GRAM,
            carbs_kcal_per_gram: macros::CARBS_KCAL_PER_GRAM,
        }
    }
}

impl MacroRatioConfig {
    /// Energy of a gram split at these densities
    #[must_use]
    pub fn kcal_of(&self, grams: &MacroGrams) -> f64 {
        grams.kcal_at(
            self.protein_kcal_per_gram,
            self.fat_kcal_per_gram,
            self.carbs_kcal_per_gram,
        )
    }
}
