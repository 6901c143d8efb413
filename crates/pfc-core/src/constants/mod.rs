// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Formula coefficients, activity multipliers and macro policy for nutrition targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. The values here are the defaults of
//! the calculator configuration; a caller can override them through
//! `NutritionConfig` but the calculator never reads them from global state.

/// Revised Harris-Benedict equation coefficients
///
/// Reference: Roza, A.M. & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
/// *American Journal of Clinical Nutrition*, 40(1), 168-182.
pub mod harris_benedict {
    /// Male intercept (kcal)
    pub const MALE_CONSTANT: f64 = 66.5;
    /// Male weight coefficient (kcal per kg)
    pub const MALE_WEIGHT_COEF: f64 = 13.75;
    /// Male height coefficient (kcal per cm)
    pub const MALE_HEIGHT_COEF: f64 = 5.003;
    /// Male age coefficient (kcal per year, subtracted)
    pub const MALE_AGE_COEF: f64 = 6.75;

    /// Female intercept (kcal)
    pub const FEMALE_CONSTANT: f64 = 655.1;
    /// Female weight coefficient (kcal per kg)
    pub const FEMALE_WEIGHT_COEF: f64 = 9.563;
    /// Female height coefficient (kcal per cm)
    pub const FEMALE_HEIGHT_COEF: f64 = 1.850;
    /// Female age coefficient (kcal per year, subtracted)
    pub const FEMALE_AGE_COEF: f64 = 4.676;
}

/// TDEE activity multipliers
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHTLY_ACTIVE: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATELY_ACTIVE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const VERY_ACTIVE: f64 = 1.725;
    /// Very hard exercise or physical job
    pub const EXTRA_ACTIVE: f64 = 1.9;
}

/// Macronutrient split and caloric densities
pub mod macros {
    /// Share of TDEE assigned to protein
    pub const PROTEIN_RATIO: f64 = 0.25;
    /// Share of TDEE assigned to fat
    pub const FAT_RATIO: f64 = 0.25;
    /// Share of TDEE assigned to carbohydrate
    pub const CARBS_RATIO: f64 = 0.50;

    /// Protein energy density (kcal/g)
    pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
    /// Fat energy density (kcal/g)
    pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
    /// Carbohydrate energy density (kcal/g)
    pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;

    /// Tolerance when checking that the three ratios sum to one
    pub const RATIO_SUM_TOLERANCE: f64 = 0.001;
}

/// Workout energy estimation
pub mod workout {
    /// Seconds covered by one unit of base calories for time-based exercises
    pub const TIME_UNIT_SECONDS: f64 = 10.0;
}

/// Service identification used in structured logs
pub mod service_names {
    /// Library/CLI service name
    pub const PFC_PLANNER: &str = "pfc-planner";
}
