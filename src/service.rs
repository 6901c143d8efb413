// ABOUTME: Nutrition plan service combining input parsing, calculation and profile storage
// ABOUTME: Parses and validates a profile, computes targets and remembers the last profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition plan service
//!
//! The calculator is pure; remembering a user's last profile is the job of
//! the injected [`ProfileStore`]. Nothing is saved unless the profile passes
//! validation.

use crate::input::ProfileInput;
use crate::intelligence::meal_suggestions::{meal_suggestions, MealSuggestion, MEAL_SUGGESTION_NOTE};
use crate::intelligence::nutrition_calculator::NutritionCalculator;
use crate::profile_store::ProfileStore;
use chrono::{DateTime, Utc};
use pfc_core::errors::{AppError, AppResult};
use pfc_core::models::{BodyProfile, NutritionResult};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

/// Targets computed for a user, with the profile they came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionPlan {
    /// User the plan belongs to
    pub user_id: Uuid,
    /// Profile used for the calculation
    pub profile: BodyProfile,
    /// BMR, TDEE and macro targets
    pub result: NutritionResult,
    /// Food groups to reach the targets
    pub suggestions: &'static [MealSuggestion],
    /// Advisory shown with the suggestions
    pub note: &'static str,
    /// When the profile was saved
    pub saved_at: DateTime<Utc>,
}

/// Orchestrates parse, validate, calculate and save
#[derive(Debug)]
pub struct NutritionPlanService<S: ProfileStore> {
    calculator: NutritionCalculator,
    store: S,
}

impl<S: ProfileStore> NutritionPlanService<S> {
    /// Create a service with an explicit calculator
    pub const fn new(calculator: NutritionCalculator, store: S) -> Self {
        Self { calculator, store }
    }

    /// Create a service using the standard coefficients
    pub fn with_store(store: S) -> Self {
        Self::new(NutritionCalculator::default(), store)
    }

    /// Parse raw form input and plan from it
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` listing every unparsable or
    /// out-of-range field, or a storage error if the profile cannot be saved
    pub fn plan(&self, user_id: Uuid, input: &ProfileInput) -> AppResult<NutritionPlan> {
        let profile = input.parse().map_err(|errors| {
            warn!(user.id = %user_id, %errors, "Rejected unparsable profile input");
            AppError::from(errors).with_user_id(user_id)
        })?;
        self.plan_profile(user_id, &profile)
    }

    /// Validate a typed profile, calculate targets and save the profile
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` listing every failing field, or a
    /// storage error if the profile cannot be saved
    pub fn plan_profile(&self, user_id: Uuid, profile: &BodyProfile) -> AppResult<NutritionPlan> {
        self.calculator
            .validate(profile)
            .into_result()
            .map_err(|e| e.with_user_id(user_id))?;

        let result = self.calculator.calculate(profile);
        let stored = self.store.save(user_id, profile)?;

        info!(
            user.id = %user_id,
            bmr_kcal = result.display_bmr(),
            tdee_kcal = result.display_tdee(),
            "Nutrition plan created"
        );

        Ok(NutritionPlan {
            user_id,
            profile: *profile,
            result,
            suggestions: meal_suggestions(),
            note: MEAL_SUGGESTION_NOTE,
            saved_at: stored.updated_at,
        })
    }

    /// The user's last saved profile
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read
    pub fn last_profile(&self, user_id: Uuid) -> AppResult<Option<BodyProfile>> {
        Ok(self.store.load(user_id)?.map(|stored| stored.profile))
    }

    /// Form fields pre-filled from the last saved profile, or empty
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read
    pub fn prefill(&self, user_id: Uuid) -> AppResult<ProfileInput> {
        Ok(self
            .last_profile(user_id)?
            .map_or_else(ProfileInput::default, |profile| {
                ProfileInput::from_profile(&profile)
            }))
    }
}
