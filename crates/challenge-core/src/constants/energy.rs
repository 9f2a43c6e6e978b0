// ABOUTME: Energy budget constants for BMR, TDEE, and calorie target calculations
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers, and the hard calorie floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

//! Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
//! resting energy expenditure. *American Journal of Clinical Nutrition*,
//! 51(2), 241-247.

/// Mifflin-St Jeor weight coefficient (per kg)
pub const MSJ_WEIGHT_COEF: f64 = 10.0;

/// Mifflin-St Jeor height coefficient (per cm)
pub const MSJ_HEIGHT_COEF: f64 = 6.25;

/// Mifflin-St Jeor age coefficient (per year)
pub const MSJ_AGE_COEF: f64 = -5.0;

/// Mifflin-St Jeor constant for males
pub const MSJ_MALE_CONSTANT: f64 = 5.0;

/// Mifflin-St Jeor constant for everyone else
pub const MSJ_OTHER_CONSTANT: f64 = -161.0;

/// Sedentary (little/no exercise)
pub const ACTIVITY_SEDENTARY: f64 = 1.2;

/// Lightly active (1-3 days/week)
pub const ACTIVITY_LIGHT: f64 = 1.375;

/// Moderately active (3-5 days/week)
pub const ACTIVITY_MODERATE: f64 = 1.55;

/// Very active (6-7 days/week)
pub const ACTIVITY_ACTIVE: f64 = 1.725;

/// Extremely active (hard training 2x/day)
pub const ACTIVITY_EXTREME: f64 = 1.9;

/// Multiplier used when an activity level label is not recognised
pub const ACTIVITY_FALLBACK: f64 = ACTIVITY_MODERATE;

/// Energy in one pound of body weight (kcal)
pub const KCAL_PER_POUND: f64 = 3500.0;

/// Minimum daily calorie target that may ever be recommended (kcal)
pub const MIN_CALORIE_TARGET_KCAL: u32 = 1200;

/// Kilograms per pound
pub const KG_PER_POUND: f64 = 0.453_592_37;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;
