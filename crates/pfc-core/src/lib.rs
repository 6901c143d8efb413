// ABOUTME: Core types and constants for the PFC planner nutrition calculator
// ABOUTME: Foundation crate with error handling, nutrition constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # PFC Core
//!
//! Foundation crate providing shared types and constants for the PFC planner.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Formula coefficients, activity multipliers, macro ratios
//! - **models**: Body profile, nutrition result, calorie record types

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition constants organized by domain
pub mod constants;

/// Core data models (`BodyProfile`, `NutritionResult`, `KcalRecord`, etc.)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
