// ABOUTME: Core data models for the PFC planner
// ABOUTME: Re-exports body profile, nutrition result and calorie record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Transient value objects passed between the caller and the calculator.
//! All models are `Copy` and support JSON serialization.

mod energy;
mod nutrition;
mod profile;

pub use energy::{DailyKcalSummary, ExerciseUnit, KcalRecord};
pub use nutrition::{MacroGrams, NutritionResult};
pub use profile::{ActivityLevel, BodyProfile, Sex};
