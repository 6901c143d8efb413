// ABOUTME: PFC planner CLI - computes nutrition targets from body metrics on the command line
// ABOUTME: Prints BMR, TDEE and PFC grams, or every invalid field with exit code 2
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Targets for a sedentary 30 year old man, 170 cm, 65 kg
//! pfc-cli plan --height 170 --weight 65 --age 30 --sex male --activity sedentary
//!
//! # Same, as JSON
//! pfc-cli plan --height 170 --weight 65 --age 30 --json
//!
//! # Show the activity multiplier table
//! pfc-cli activity-levels
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pfc_planner::config::NutritionConfig;
use pfc_planner::input::ProfileInput;
use pfc_planner::intelligence::meal_suggestions::{meal_suggestions, MEAL_SUGGESTION_NOTE};
use pfc_planner::intelligence::nutrition_calculator::{
    field_errors_to_app_error, FieldError, NutritionCalculator, ValidationResult,
};
use pfc_planner::logging::LoggingConfig;
use pfc_planner::ErrorResponse;
use pfc_planner::{ActivityLevel, BodyProfile, NutritionResult};
use serde_json::json;
use std::collections::BTreeSet;
use std::process::ExitCode;
use tracing::debug;

/// Exit status for rejected body metrics
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser)]
#[command(
    name = "pfc-cli",
    about = "PFC Planner nutrition target calculator",
    long_about = "Computes BMR, TDEE and a protein/fat/carbohydrate split from body metrics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate nutrition targets
    Plan {
        /// Height in centimeters
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Age in years
        #[arg(long, allow_hyphen_values = true)]
        age: String,

        /// Sex (male or female)
        #[arg(long, default_value = "male")]
        sex: String,

        /// Activity level (sedentary, lightly_active, moderately_active, very_active, extra_active)
        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List activity levels and their TDEE multipliers
    ActivityLevels,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = NutritionConfig::load().context("Failed to load nutrition configuration")?;
    let calculator = NutritionCalculator::new(config);

    match cli.command {
        Command::Plan {
            height,
            weight,
            age,
            sex,
            activity,
            json,
        } => {
            let input = ProfileInput::new(height, weight, age, sex, activity);
            plan(&calculator, &input, json)
        }
        Command::ActivityLevels => {
            print_activity_levels(&calculator);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn plan(calculator: &NutritionCalculator, input: &ProfileInput, json: bool) -> Result<ExitCode> {
    let profile = match input.parse() {
        Ok(profile) => profile,
        Err(errors) => return report_invalid(errors.fields(), json),
    };

    if let ValidationResult::Invalid(errors) = calculator.validate(&profile) {
        return report_invalid(&errors, json);
    }

    let result = calculator.calculate(&profile);
    debug!(?profile, ?result, "Plan computed");

    if json {
        print_json(&profile, &result)?;
    } else {
        print_text(&profile, &result);
    }
    Ok(ExitCode::SUCCESS)
}

fn report_invalid(errors: &BTreeSet<FieldError>, json: bool) -> Result<ExitCode> {
    if json {
        let response = ErrorResponse::from(field_errors_to_app_error(errors));
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        for error in errors {
            eprintln!("error: {}: {error}", error.field());
        }
    }
    Ok(ExitCode::from(EXIT_INVALID_INPUT))
}

fn print_json(profile: &BodyProfile, result: &NutritionResult) -> Result<()> {
    let output = json!({
        "profile": profile,
        "result": result,
        "display": {
            "bmr_kcal": result.display_bmr(),
            "tdee_kcal": result.display_tdee(),
        },
        "suggestions": meal_suggestions(),
        "note": MEAL_SUGGESTION_NOTE,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_text(profile: &BodyProfile, result: &NutritionResult) {
    println!(
        "Profile: {} cm, {} kg, {} years, {}, {}",
        profile.height_cm, profile.weight_kg, profile.age_years, profile.sex, profile.activity_level
    );
    println!();
    println!("BMR:  {} kcal", result.display_bmr());
    println!("TDEE: {} kcal", result.display_tdee());
    println!();
    println!("Protein (P): {} g", result.macros.protein_grams);
    println!("Fat (F):     {} g", result.macros.fat_grams);
    println!("Carbs (C):   {} g", result.macros.carbs_grams);
    println!();
    for suggestion in meal_suggestions() {
        println!("{}: {}", suggestion.heading, suggestion.foods.join(", "));
    }
    println!("{MEAL_SUGGESTION_NOTE}");
}

fn print_activity_levels(calculator: &NutritionCalculator) {
    let factors = &calculator.config().activity_factors;
    for level in ActivityLevel::ALL {
        println!(
            "{:<18} x{:<6} {}",
            level.as_str(),
            factors.factor_for(level),
            level.description()
        );
    }
}
