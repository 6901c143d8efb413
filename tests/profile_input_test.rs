// ABOUTME: Integration tests for parsing raw form input into a body profile
// ABOUTME: Covers numeric coercion, collected errors and lenient sex/activity labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pfc_planner::{
    validate, ActivityLevel, AppError, BodyProfile, ErrorCode, FieldError, ProfileInput, Sex,
};
use std::collections::BTreeSet;

mod common;

#[test]
fn test_parse_well_formed_input() {
    common::init_test_logging();
    let input = ProfileInput::new(" 170 ", "65.5", "30", "female", "very_active");
    let profile = input.parse().unwrap();

    assert_eq!(
        profile,
        BodyProfile::new(170.0, 65.5, 30, Sex::Female, ActivityLevel::VeryActive)
    );
}

#[test]
fn test_parse_collects_every_failing_field() {
    let input = ProfileInput::new("", "abc", "x", "male", "sedentary");
    let errors = input.parse().unwrap_err();

    let expected: BTreeSet<FieldError> = [
        FieldError::InvalidHeight,
        FieldError::InvalidWeight,
        FieldError::InvalidAge,
    ]
    .into_iter()
    .collect();
    assert_eq!(errors.fields(), &expected);
}

#[test]
fn test_parse_reports_only_bad_fields() {
    let input = ProfileInput::new("170", "sixty", "30", "male", "sedentary");
    let errors = input.parse().unwrap_err();
    assert!(errors.contains(FieldError::InvalidWeight));
    assert!(!errors.contains(FieldError::InvalidHeight));
    assert!(!errors.contains(FieldError::InvalidAge));
}

#[test]
fn test_decimal_age_truncates() {
    let profile = ProfileInput::new("170", "65", "30.7", "male", "sedentary")
        .parse()
        .unwrap();
    assert_eq!(profile.age_years, 30);
}

#[test]
fn test_negative_numbers_are_rejected_at_parse() {
    let errors = ProfileInput::new("-170", "65", "-2", "male", "sedentary")
        .parse()
        .unwrap_err();
    assert_eq!(
        errors.fields().iter().copied().collect::<Vec<_>>(),
        vec![FieldError::InvalidHeight, FieldError::InvalidAge]
    );
}

#[test]
fn test_range_and_parse_failures_are_reported_together() {
    let errors = ProfileInput::new("0", "abc", "-3", "male", "sedentary")
        .parse()
        .unwrap_err();

    let expected: BTreeSet<FieldError> = [
        FieldError::InvalidHeight,
        FieldError::InvalidWeight,
        FieldError::InvalidAge,
    ]
    .into_iter()
    .collect();
    assert_eq!(errors.fields(), &expected);
}

#[test]
fn test_parsed_profile_always_passes_validation() {
    for (height, weight, age) in [("170", "65", "30"), ("0.1", "0.1", "0.9"), ("250", "1", "1")] {
        match ProfileInput::new(height, weight, age, "female", "extra_active").parse() {
            Ok(profile) => assert!(validate(&profile).is_valid()),
            Err(errors) => assert_eq!(
                errors.fields().iter().copied().collect::<Vec<_>>(),
                vec![FieldError::InvalidAge]
            ),
        }
    }
}

#[test]
fn test_unknown_labels_fall_back() {
    let profile = ProfileInput::new("170", "65", "30", "その他", "marathoner")
        .parse()
        .unwrap();
    assert_eq!(profile.sex, Sex::Male);
    assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
}

#[test]
fn test_parse_errors_convert_to_app_error() {
    let errors = ProfileInput::default().parse().unwrap_err();
    let error = AppError::from(errors);

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(
        error.context.details["fields"],
        serde_json::json!(["height_cm", "weight_kg", "age_years"])
    );
}

#[test]
fn test_prefill_round_trips_through_parse() {
    let profile = BodyProfile::new(172.5, 61.2, 41, Sex::Female, ActivityLevel::LightlyActive);
    let input = ProfileInput::from_profile(&profile);
    assert_eq!(input.height, "172.5");
    assert_eq!(input.activity_level, "lightly_active");
    assert_eq!(input.parse().unwrap(), profile);
}

#[test]
fn test_input_deserializes_with_missing_fields() {
    let input: ProfileInput = serde_json::from_str(r#"{"height":"170","age":"30"}"#).unwrap();
    let errors = input.parse().unwrap_err();
    assert_eq!(
        errors.fields().iter().copied().collect::<Vec<_>>(),
        vec![FieldError::InvalidWeight]
    );
}
