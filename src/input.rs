// ABOUTME: Raw form input boundary converting user-entered strings into a BodyProfile
// ABOUTME: Collects every unparsable or out-of-range numeric field instead of stopping at the first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile input parsing
//!
//! The calculator only accepts typed values. This module owns the string
//! coercion that happens before it: height and weight parse as positive
//! decimals, age as a positive whole number, and the sex and activity labels
//! map leniently.

use crate::intelligence::nutrition_calculator::{
    field_errors_to_app_error, is_valid_age, is_valid_measurement, FieldError,
};
use pfc_core::errors::AppError;
use pfc_core::models::{ActivityLevel, BodyProfile, Sex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Unparsed profile fields as entered by a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    /// Height in centimeters
    pub height: String,
    /// Weight in kilograms
    pub weight: String,
    /// Age in years
    pub age: String,
    /// Sex label
    pub sex: String,
    /// Activity level label
    pub activity_level: String,
}

/// Every field of a [`ProfileInput`] that is unparsable or out of range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseErrors(BTreeSet<FieldError>);

impl ParseErrors {
    /// Failing fields in check order
    #[must_use]
    pub const fn fields(&self) -> &BTreeSet<FieldError> {
        &self.0
    }

    /// Whether a given field failed
    #[must_use]
    pub fn contains(&self, error: FieldError) -> bool {
        self.0.contains(&error)
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "Invalid profile input: {}", messages.join("; "))
    }
}

impl From<ParseErrors> for AppError {
    fn from(errors: ParseErrors) -> Self {
        field_errors_to_app_error(&errors.0)
    }
}

impl ProfileInput {
    /// Create input from its raw fields
    pub fn new(
        height: impl Into<String>,
        weight: impl Into<String>,
        age: impl Into<String>,
        sex: impl Into<String>,
        activity_level: impl Into<String>,
    ) -> Self {
        Self {
            height: height.into(),
            weight: weight.into(),
            age: age.into(),
            sex: sex.into(),
            activity_level: activity_level.into(),
        }
    }

    /// Pre-fill form fields from a stored profile
    #[must_use]
    pub fn from_profile(profile: &BodyProfile) -> Self {
        Self {
            height: profile.height_cm.to_string(),
            weight: profile.weight_kg.to_string(),
            age: profile.age_years.to_string(),
            sex: profile.sex.as_str().to_owned(),
            activity_level: profile.activity_level.as_str().to_owned(),
        }
    }

    /// Parse into a typed profile
    ///
    /// Numbers must parse and be in range: height and weight finite and
    /// positive, age a positive whole number. Unknown sex or activity labels
    /// fall back leniently.
    ///
    /// # Errors
    ///
    /// Returns every numeric field that is unparsable or out of range
    pub fn parse(&self) -> Result<BodyProfile, ParseErrors> {
        let mut errors = BTreeSet::new();

        let height_cm = parse_decimal(&self.height).filter(|&value| is_valid_measurement(value));
        if height_cm.is_none() {
            errors.insert(FieldError::InvalidHeight);
        }
        let weight_kg = parse_decimal(&self.weight).filter(|&value| is_valid_measurement(value));
        if weight_kg.is_none() {
            errors.insert(FieldError::InvalidWeight);
        }
        let age_years = parse_age(&self.age).filter(|&age| is_valid_age(age));
        if age_years.is_none() {
            errors.insert(FieldError::InvalidAge);
        }

        match (height_cm, weight_kg, age_years) {
            (Some(height_cm), Some(weight_kg), Some(age_years)) => Ok(BodyProfile::new(
                height_cm,
                weight_kg,
                age_years,
                Sex::from_str_lossy(&self.sex),
                ActivityLevel::from_str_lossy(&self.activity_level),
            )),
            _ => Err(ParseErrors(errors)),
        }
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Whole years; a decimal age is truncated toward zero
fn parse_age(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(age) = raw.parse::<i32>() {
        return Some(age);
    }
    let truncated = parse_decimal(raw)?.trunc();
    if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
        return None;
    }
    Some(truncated as i32)
}
