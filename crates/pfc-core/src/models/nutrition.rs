// ABOUTME: Nutrition target models produced by the calculator
// ABOUTME: NutritionResult and MacroGrams value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Rounded daily macronutrient targets in grams
///
/// Values are signed: a negative TDEE (possible for extreme inputs, since
/// BMR is not floored) produces negative gram targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroGrams {
    /// Protein (g)
    pub protein_grams: i64,
    /// Fat (g)
    pub fat_grams: i64,
    /// Carbohydrate (g)
    pub carbs_grams: i64,
}

impl MacroGrams {
    /// Energy represented by these grams at the given kcal-per-gram densities
    #[must_use]
    pub fn kcal_at(
        &self,
        protein_kcal_per_gram: f64,
        fat_kcal_per_gram: f64,
        carbs_kcal_per_gram: f64,
    ) -> f64 {
        (self.protein_grams as f64).mul_add(
            protein_kcal_per_gram,
            (self.fat_grams as f64).mul_add(
                fat_kcal_per_gram,
                self.carbs_grams as f64 * carbs_kcal_per_gram,
            ),
        )
    }
}

/// Result of a nutrition target calculation
///
/// BMR and TDEE are kept at full precision; only the macro grams are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr_kcal: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee_kcal: f64,
    /// Rounded macro targets derived from TDEE
    pub macros: MacroGrams,
}

impl NutritionResult {
    /// BMR rounded to whole kilocalories for display
    #[must_use]
    pub fn display_bmr(&self) -> i64 {
        self.bmr_kcal.round() as i64
    }

    /// TDEE rounded to whole kilocalories for display
    #[must_use]
    pub fn display_tdee(&self) -> i64 {
        self.tdee_kcal.round() as i64
    }
}
