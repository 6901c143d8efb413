// ABOUTME: Daily calorie balance, target progress and workout energy estimates
// ABOUTME: Ring progress, net intake, per-exercise calories and per-day record grouping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy balance helpers
//!
//! Small derived calculations shown next to the nutrition targets: how far a
//! day's intake and expenditure are toward their targets, what a workout
//! burned, and per-day totals of logged calorie records.

use chrono::{DateTime, NaiveDate};
use pfc_core::constants::workout::TIME_UNIT_SECONDS;
use pfc_core::errors::{AppError, AppResult};
use pfc_core::models::{DailyKcalSummary, ExerciseUnit, KcalRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fraction of a target reached, clamped to `[0.0, 1.0]`
///
/// A target that is not a positive finite number yields `0.0`.
#[must_use]
pub fn ring_progress(current: f64, target: f64) -> f64 {
    if !target.is_finite() || target <= 0.0 || !current.is_finite() {
        return 0.0;
    }
    (current.max(0.0) / target).min(1.0)
}

/// One day's energy in and out, with targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyEnergyBalance {
    /// Resting expenditure for the day (kcal)
    pub basal_kcal: f64,
    /// Expenditure from logged exercise (kcal)
    pub exercise_kcal: f64,
    /// Calories eaten (kcal)
    pub intake_kcal: f64,
    /// Expenditure goal (kcal)
    pub target_consumption_kcal: f64,
    /// Intake goal (kcal)
    pub target_intake_kcal: f64,
}

impl DailyEnergyBalance {
    /// Basal plus exercise expenditure
    #[must_use]
    pub fn total_consumption(&self) -> f64 {
        self.basal_kcal + self.exercise_kcal
    }

    /// Intake minus total expenditure; negative means a deficit
    #[must_use]
    pub fn net_kcal(&self) -> f64 {
        self.intake_kcal - self.total_consumption()
    }

    /// Progress of expenditure toward its target
    #[must_use]
    pub fn consumption_progress(&self) -> f64 {
        ring_progress(self.total_consumption(), self.target_consumption_kcal)
    }

    /// Progress of intake toward its target
    #[must_use]
    pub fn intake_progress(&self) -> f64 {
        ring_progress(self.intake_kcal, self.target_intake_kcal)
    }
}

/// Calories burned by one performed exercise, rounded to whole kcal
///
/// For `Reps`, `base_calories` is per repetition. For `Time`,
/// `base_calories` is per ten seconds and `performance_value` is seconds.
#[must_use]
pub fn workout_calories(base_calories: f64, unit: ExerciseUnit, performance_value: f64) -> i64 {
    let kcal = match unit {
        ExerciseUnit::Reps => base_calories * performance_value,
        ExerciseUnit::Time => base_calories * performance_value / TIME_UNIT_SECONDS,
    };
    kcal.round() as i64
}

/// Estimated calories of a training playlist item
#[must_use]
pub fn playlist_item_calories(base_calories: f64, reps_or_duration: f64) -> f64 {
    base_calories * reps_or_duration
}

/// Sum calorie records per calendar day, newest day first
#[must_use]
pub fn group_by_date(records: &[KcalRecord]) -> Vec<DailyKcalSummary> {
    let mut by_day: BTreeMap<NaiveDate, DailyKcalSummary> = BTreeMap::new();
    for record in records {
        let summary = by_day.entry(record.date).or_insert(DailyKcalSummary {
            date: record.date,
            intake_calories: 0.0,
            burned_calories: 0.0,
            record_count: 0,
        });
        summary.intake_calories += record.intake_calories;
        summary.burned_calories += record.burned_calories;
        summary.record_count += 1;
    }
    by_day.into_values().rev().collect()
}

/// Parse a stored record date
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp, whose local
/// calendar date is used.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidFormat` if the value matches neither form
pub fn parse_record_date(value: &str) -> AppResult<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|e| {
            AppError::invalid_format(format!("Unrecognized record date '{value}'")).with_source(e)
        })
}
