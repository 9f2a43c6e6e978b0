// ABOUTME: Body metrics, sex, and activity level inputs to the energy budget calculator
// ABOUTME: Lenient label parsing plus imperial/metric unit conversions used at profile setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

use challenge_core::constants::energy::{CM_PER_INCH, INCHES_PER_FOOT, KG_PER_POUND};
use challenge_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male constant (+5)
    Male,
    /// Everyone else (-161)
    Other,
}

impl Sex {
    /// Interpret a free-text label
    ///
    /// `"male"` or `"m"` (any case, surrounding whitespace ignored) is
    /// [`Sex::Male`]; every other label is [`Sex::Other`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_ascii_lowercase();
        if normalized == "male" || normalized == "m" {
            Self::Male
        } else {
            Self::Other
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Hard daily exercise plus physical job or 2x/day training
    Extreme,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::Extreme,
    ];

    /// Wire label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::Extreme => "extreme",
        }
    }

    /// Recognise a label, case-insensitively
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
    }

    /// Recognise a label, defaulting to [`ActivityLevel::Moderate`]
    #[must_use]
    pub fn from_label_or_default(label: &str) -> Self {
        Self::from_label(label).unwrap_or_else(|| {
            tracing::debug!(label, "unknown activity level, using moderate");
            Self::Moderate
        })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            AppError::invalid_input(format!(
                "unknown activity level '{s}' (expected sedentary, light, moderate, active or extreme)"
            ))
            .with_field("activity_level")
        })
    }
}

/// Body measurements feeding the BMR formula
///
/// Values are not range-checked; nonsensical input yields a nonsensical
/// but finite result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Sex for the formula constant
    pub sex: Sex,
}

/// Pounds to kilograms
#[must_use]
pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_POUND
}

/// Kilograms to pounds
#[must_use]
pub fn kg_to_pounds(kg: f64) -> f64 {
    kg / KG_PER_POUND
}

/// Feet and inches to centimeters
#[must_use]
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    feet.mul_add(INCHES_PER_FOOT, inches) * CM_PER_INCH
}
