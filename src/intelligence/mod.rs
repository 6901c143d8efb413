// ABOUTME: Nutrition intelligence: target calculation, energy balance and meal suggestions
// ABOUTME: Pure, synchronous calculations with no storage or I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Daily calorie balance, ring progress and workout calorie estimates
pub mod energy_balance;
/// Food-group suggestions attached to a nutrition plan
pub mod meal_suggestions;
/// BMR, TDEE and PFC macro targets
pub mod nutrition_calculator;

pub use energy_balance::{
    group_by_date, parse_record_date, playlist_item_calories, ring_progress, workout_calories,
    DailyEnergyBalance,
};
pub use meal_suggestions::{meal_suggestions, Macronutrient, MealSuggestion, MEAL_SUGGESTION_NOTE};
pub use nutrition_calculator::{
    calculate, calculate_harris_benedict, calculate_macros, calculate_tdee, validate, FieldError,
    NutritionCalculator, ValidationResult,
};
