// ABOUTME: Static food-group suggestions shown alongside a computed PFC target
// ABOUTME: One group per macronutrient plus a general advisory note
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// Macronutrient a food group mainly supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Macronutrient {
    /// Protein (P)
    Protein,
    /// Fat (F)
    Fat,
    /// Carbohydrate (C)
    Carbohydrate,
}

/// A group of foods recommended for one macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealSuggestion {
    /// Macronutrient the group covers
    pub macronutrient: Macronutrient,
    /// Heading shown above the foods
    pub heading: &'static str,
    /// Example foods
    pub foods: &'static [&'static str],
}

/// Advisory shown under the suggestions
pub const MEAL_SUGGESTION_NOTE: &str = "These are general suggestions only. \
     Adjust actual meals to your own preferences and physical condition.";

static SUGGESTIONS: [MealSuggestion; 3] = [
    MealSuggestion {
        macronutrient: Macronutrient::Protein,
        heading: "High-protein sources",
        foods: &[
            "chicken breast",
            "fish (salmon, mackerel)",
            "eggs",
            "tofu",
            "natto",
            "protein powder",
        ],
    },
    MealSuggestion {
        macronutrient: Macronutrient::Fat,
        heading: "Quality fat sources",
        foods: &["avocado", "nuts", "olive oil", "fish oil", "flaxseed oil"],
    },
    MealSuggestion {
        macronutrient: Macronutrient::Carbohydrate,
        heading: "Complex carbohydrate sources",
        foods: &[
            "brown rice",
            "whole-grain bread",
            "oatmeal",
            "sweet potato",
            "potato",
        ],
    },
];

/// Food groups to combine toward a PFC-balanced diet
#[must_use]
pub fn meal_suggestions() -> &'static [MealSuggestion] {
    &SUGGESTIONS
}
