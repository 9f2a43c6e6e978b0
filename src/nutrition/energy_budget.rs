// ABOUTME: Daily energy budget: Mifflin-St Jeor BMR, activity-scaled TDEE, and calorie target
// ABOUTME: Calorie targets never drop below the configured floor (1200 kcal minimum)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

//! Energy Budget Calculator
//!
//! Stateless computations over caller-supplied body metrics. Inputs are not
//! validated: out-of-range numbers give meaningless but finite results. The
//! one hard rule is the calorie floor, which no weekly-loss request can push
//! the target beneath.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use super::body::{ActivityLevel, BodyMetrics, Sex};
use crate::config::{ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, EnergyBudgetConfig};
use challenge_core::constants::challenge::DAYS_PER_WEEK;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily energy numbers for a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyTarget {
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: i64,
    /// Recommended daily intake (kcal/day), never below the floor
    pub calorie_target: u32,
    /// Whether the floor replaced a lower computed target
    pub floor_applied: bool,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Other: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn basal_metabolic_rate(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Other => config.msj_other_constant,
    };

    config.msj_weight_coef.mul_add(
        weight_kg,
        config
            .msj_height_coef
            .mul_add(height_cm, config.msj_age_coef * f64::from(age_years)),
    ) + sex_constant
}

/// Activity multiplier for a known level
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::Extreme => config.extreme,
    }
}

/// Activity multiplier for a free-text label
///
/// Unknown labels use the fallback multiplier (moderate, 1.55) instead of
/// failing.
#[must_use]
pub fn activity_multiplier_for_label(label: &str, config: &ActivityFactorsConfig) -> f64 {
    ActivityLevel::from_label(label).map_or_else(
        || {
            debug!(label, fallback = config.fallback, "unknown activity level");
            config.fallback
        },
        |level| activity_multiplier(level, config),
    )
}

/// Total Daily Energy Expenditure: `round(BMR x activity multiplier)`
#[must_use]
pub fn total_daily_energy_expenditure(
    metrics: &BodyMetrics,
    level: ActivityLevel,
    config: &EnergyBudgetConfig,
) -> i64 {
    let bmr = basal_metabolic_rate(
        metrics.weight_kg,
        metrics.height_cm,
        metrics.age_years,
        metrics.sex,
        &config.bmr,
    );
    (bmr * activity_multiplier(level, &config.activity_factors)).round() as i64
}

/// Daily deficit (kcal) needed to lose `weekly_loss_lbs` per week
#[must_use]
pub fn daily_deficit(weekly_loss_lbs: f64, config: &CalorieTargetConfig) -> f64 {
    weekly_loss_lbs * config.kcal_per_pound / f64::from(DAYS_PER_WEEK)
}

/// Daily calorie target for a weekly loss goal
///
/// `max(round(tdee - weekly_loss_lbs x 3500 / 7), floor)`. A negative weekly
/// loss produces a surplus.
#[must_use]
pub fn calorie_target(tdee: i64, weekly_loss_lbs: f64, config: &CalorieTargetConfig) -> u32 {
    target_with_floor(tdee, weekly_loss_lbs, config).0
}

fn target_with_floor(tdee: i64, weekly_loss_lbs: f64, config: &CalorieTargetConfig) -> (u32, bool) {
    let raw = (tdee as f64 - daily_deficit(weekly_loss_lbs, config)).round() as i64;
    let floor = i64::from(config.calorie_floor_kcal);
    if raw < floor {
        debug!(tdee, weekly_loss_lbs, raw, floor, "calorie target clamped to floor");
        (config.calorie_floor_kcal, true)
    } else {
        (u32::try_from(raw).unwrap_or(u32::MAX), false)
    }
}

/// TDEE and calorie target for a profile in one step
#[must_use]
pub fn energy_target(
    metrics: &BodyMetrics,
    level: ActivityLevel,
    weekly_loss_lbs: f64,
    config: &EnergyBudgetConfig,
) -> EnergyTarget {
    let tdee = total_daily_energy_expenditure(metrics, level, config);
    let (calorie_target, floor_applied) = target_with_floor(tdee, weekly_loss_lbs, &config.targets);
    EnergyTarget {
        tdee,
        calorie_target,
        floor_applied,
    }
}

/// Whole weeks needed to move from `current_weight` down to `goal_weight`
///
/// Zero when the goal is already met or `weekly_loss <= 0` (no valid plan).
/// Weights and rate only need to share a unit.
#[must_use]
pub fn weeks_to_goal(current_weight: f64, goal_weight: f64, weekly_loss: f64) -> u32 {
    if current_weight <= goal_weight || weekly_loss <= 0.0 {
        return 0;
    }
    ((current_weight - goal_weight) / weekly_loss).ceil() as u32
}
