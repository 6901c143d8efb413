// ABOUTME: Main library entry point for the PFC planner nutrition target calculator
// ABOUTME: Exposes calculation, input parsing, profile storage, configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # PFC Planner
//!
//! Computes daily nutrition targets from body metrics: basal metabolic rate
//! (revised Harris-Benedict), total daily energy expenditure (activity
//! multiplier) and a protein/fat/carbohydrate gram split (25/25/50).
//!
//! ## Architecture
//!
//! - **Intelligence**: pure calculators (nutrition targets, energy balance)
//! - **Input**: string form fields to typed [`BodyProfile`]
//! - **Profile store**: injected persistence for the last submitted profile
//! - **Service**: parse, validate, calculate and save in one call
//! - **Config**: explicit, validated coefficient configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use pfc_planner::{calculate, validate, ActivityLevel, BodyProfile, Sex};
//!
//! let profile = BodyProfile::new(170.0, 65.0, 30, Sex::Male, ActivityLevel::Sedentary);
//! assert!(validate(&profile).is_valid());
//!
//! let result = calculate(&profile);
//! assert_eq!(result.macros.protein_grams, 121);
//! ```

/// Calculator configuration with environment overrides
pub mod config;

/// Raw form input parsing
pub mod input;

/// Nutrition target, energy balance and meal suggestion calculations
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Last-profile persistence abstraction
pub mod profile_store;

/// Nutrition plan orchestration
pub mod service;

pub use config::NutritionConfig;
pub use input::{ParseErrors, ProfileInput};
pub use intelligence::nutrition_calculator::{
    calculate, validate, FieldError, NutritionCalculator, ValidationResult,
};
pub use pfc_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use pfc_core::models::{
    ActivityLevel, BodyProfile, DailyKcalSummary, ExerciseUnit, KcalRecord, MacroGrams,
    NutritionResult, Sex,
};
pub use profile_store::{InMemoryProfileStore, ProfileStore, StoredProfile};
pub use service::{NutritionPlan, NutritionPlanService};
