// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides test logging setup and reference body profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pfc_planner`

use pfc_planner::{ActivityLevel, BodyProfile, Sex};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for comparing raw BMR/TDEE values
pub const EPSILON: f64 = 1e-9;

/// Initialize quiet logging for tests
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 170 cm, 65 kg, 30 years, sedentary
pub fn reference_profile(sex: Sex) -> BodyProfile {
    BodyProfile::new(170.0, 65.0, 30, sex, ActivityLevel::Sedentary)
}

/// Assert two floats are within `EPSILON`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
