// ABOUTME: Energy budget calculator for daily calorie targets during the challenge
// ABOUTME: Body metrics, activity levels, BMR/TDEE formulas, and goal weight projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

//! # Energy Budget Calculator
//!
//! Derives a daily calorie target from body metrics and a desired weekly
//! rate of weight change. Independent of the calendar engine except for goal
//! projection, which counts weeks from a challenge start date.

/// Body metrics, sex, activity level, and unit conversions
pub mod body;

/// BMR, TDEE, and calorie target formulas
pub mod energy_budget;

/// Goal weight projection
pub mod goal;

pub use body::{feet_inches_to_cm, kg_to_pounds, pounds_to_kg, ActivityLevel, BodyMetrics, Sex};
pub use energy_budget::{
    activity_multiplier, activity_multiplier_for_label, basal_metabolic_rate, calorie_target,
    daily_deficit, energy_target, total_daily_energy_expenditure, weeks_to_goal, EnergyTarget,
};
pub use goal::{plan_goal, GoalPlan};
