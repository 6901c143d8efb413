// ABOUTME: Body profile model feeding the nutrition target calculator
// ABOUTME: BodyProfile, Sex and ActivityLevel with lossy code conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Biological sex, selecting the BMR formula branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Sex {
    /// Male coefficients
    Male,
    /// Female coefficients
    Female,
}

impl Sex {
    /// Parse sex from a stored or user-entered label
    ///
    /// Only an explicit female label selects `Female`. Every other value,
    /// including "other", falls back to `Male`.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" | "woman" | "女性" => Self::Female,
            "male" | "m" | "man" | "男性" => Self::Male,
            other => {
                warn!(sex = %other, "Unrecognized sex label, using male coefficients");
                Self::Male
            }
        }
    }

    /// Canonical snake_case label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<Sex> for &'static str {
    fn from(value: Sex) -> Self {
        value.as_str()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity level for TDEE calculation
///
/// The enum is closed: every conversion from an external representation
/// (string label, stored move level, JSON of any shape) maps unknown values
/// to `Sedentary` instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    #[default]
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (very hard exercise or physical job)
    ExtraActive,
}

impl ActivityLevel {
    /// All levels from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Parse activity level from a label, falling back to `Sedentary`
    ///
    /// Accepts snake_case, kebab-case and PascalCase spellings.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "sedentary" => Self::Sedentary,
            "lightlyactive" => Self::LightlyActive,
            "moderatelyactive" => Self::ModeratelyActive,
            "veryactive" => Self::VeryActive,
            "extraactive" => Self::ExtraActive,
            _ => {
                warn!(activity_level = %s, "Unrecognized activity level, falling back to sedentary");
                Self::Sedentary
            }
        }
    }

    /// Map the stored 0-5 move level code to an activity level
    ///
    /// Levels 4 and 5 both mean extra active; anything out of range is sedentary.
    #[must_use]
    pub fn from_move_level(level: u8) -> Self {
        match level {
            0 => Self::Sedentary,
            1 => Self::LightlyActive,
            2 => Self::ModeratelyActive,
            3 => Self::VeryActive,
            4 | 5 => Self::ExtraActive,
            other => {
                warn!(move_level = other, "Move level out of range, falling back to sedentary");
                Self::Sedentary
            }
        }
    }

    /// Stored move level code for this activity level
    #[must_use]
    pub const fn move_level(self) -> u8 {
        match self {
            Self::Sedentary => 0,
            Self::LightlyActive => 1,
            Self::ModeratelyActive => 2,
            Self::VeryActive => 3,
            Self::ExtraActive => 4,
        }
    }

    /// Canonical snake_case label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        }
    }

    /// Human-readable description of the exercise habit
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sedentary => "Little or no exercise",
            Self::LightlyActive => "Light exercise 1-3 times a week",
            Self::ModeratelyActive => "Moderate exercise 3-5 times a week",
            Self::VeryActive => "Hard exercise 6-7 times a week",
            Self::ExtraActive => "Very hard exercise or physical labor",
        }
    }
}

impl<'de> Deserialize<'de> for ActivityLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};

        struct ActivityLevelVisitor;

        impl ActivityLevelVisitor {
            fn fallback(kind: &str) -> ActivityLevel {
                warn!(kind, "Unsupported activity level value, falling back to sedentary");
                ActivityLevel::Sedentary
            }
        }

        impl<'de> Visitor<'de> for ActivityLevelVisitor {
            type Value = ActivityLevel;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an activity level label or move level")
            }

            fn visit_str<E>(self, value: &str) -> Result<ActivityLevel, E>
            where
                E: de::Error,
            {
                Ok(ActivityLevel::from_str_lossy(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<ActivityLevel, E>
            where
                E: de::Error,
            {
                Ok(u8::try_from(value).map_or_else(
                    |_| Self::fallback("move level"),
                    ActivityLevel::from_move_level,
                ))
            }

            fn visit_i64<E>(self, value: i64) -> Result<ActivityLevel, E>
            where
                E: de::Error,
            {
                Ok(u8::try_from(value).map_or_else(
                    |_| Self::fallback("move level"),
                    ActivityLevel::from_move_level,
                ))
            }

            fn visit_f64<E>(self, _value: f64) -> Result<ActivityLevel, E>
            where
                E: de::Error,
            {
                Ok(Self::fallback("float"))
            }

            fn visit_bool<E>(self, _value: bool) -> Result<ActivityLevel, E>
            where
                E: de::Error,
            {
                Ok(Self::fallback("bool"))
            }

            fn visit_unit<E>(self) -> Result<ActivityLevel, E>
            where
                E: de::Error,
            {
                Ok(ActivityLevel::Sedentary)
            }

            fn visit_none<E>(self) -> Result<ActivityLevel, E>
            where
                E: de::Error,
            {
                Ok(ActivityLevel::Sedentary)
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<ActivityLevel, D2::Error>
            where
                D2: serde::Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<ActivityLevel, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Self::fallback("sequence"))
            }

            fn visit_map<A>(self, mut map: A) -> Result<ActivityLevel, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(Self::fallback("map"))
            }
        }

        deserializer.deserialize_any(ActivityLevelVisitor)
    }
}

impl From<ActivityLevel> for &'static str {
    fn from(value: ActivityLevel) -> Self {
        value.as_str()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body metrics and activity level of one person
///
/// Fields are plain numbers so that out-of-range values can be represented
/// and reported by validation instead of being rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Height in centimeters (must be > 0)
    pub height_cm: f64,
    /// Weight in kilograms (must be > 0)
    pub weight_kg: f64,
    /// Age in whole years (must be > 0)
    pub age_years: i32,
    /// Selects the BMR formula branch
    pub sex: Sex,
    /// Selects the TDEE multiplier
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl BodyProfile {
    /// Create a profile from its parts
    #[must_use]
    pub const fn new(
        height_cm: f64,
        weight_kg: f64,
        age_years: i32,
        sex: Sex,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            height_cm,
            weight_kg,
            age_years,
            sex,
            activity_level,
        }
    }

    /// Copy of this profile with a different activity level
    #[must_use]
    pub fn with_activity_level(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = activity_level;
        self
    }

    /// Copy of this profile with a different sex
    #[must_use]
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }
}
