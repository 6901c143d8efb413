// ABOUTME: Calorie intake/expenditure record models
// ABOUTME: KcalRecord, DailyKcalSummary and ExerciseUnit definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a workout's performance value is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseUnit {
    /// Repetition count; base calories are per repetition
    Reps,
    /// Duration in seconds; base calories are per ten seconds
    Time,
}

/// One logged calorie entry for a day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KcalRecord {
    /// Calendar day the entry belongs to
    pub date: NaiveDate,
    /// Calories eaten (kcal)
    pub intake_calories: f64,
    /// Calories burned by exercise (kcal)
    pub burned_calories: f64,
}

impl KcalRecord {
    /// Create a record
    #[must_use]
    pub const fn new(date: NaiveDate, intake_calories: f64, burned_calories: f64) -> Self {
        Self {
            date,
            intake_calories,
            burned_calories,
        }
    }
}

/// Calorie totals for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyKcalSummary {
    /// Calendar day
    pub date: NaiveDate,
    /// Sum of intake over the day's records (kcal)
    pub intake_calories: f64,
    /// Sum of burned calories over the day's records (kcal)
    pub burned_calories: f64,
    /// Number of records merged into this summary
    pub record_count: usize,
}

impl DailyKcalSummary {
    /// Intake minus burned calories
    #[must_use]
    pub fn net_calories(&self) -> f64 {
        self.intake_calories - self.burned_calories
    }
}
