// ABOUTME: Energy budget commands for challenge-cli
// ABOUTME: Computes TDEE and daily calorie targets and projects goal weight dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

use crate::helpers::display::{display_energy_target, display_goal_plan, Output};
use challenge_tracker::calendar::{start_date_for_new_challenge, CivilDate, Clock};
use challenge_tracker::config::EnergyBudgetConfig;
use challenge_tracker::errors::AppResult;
use challenge_tracker::nutrition::{energy_target, plan_goal, ActivityLevel, BodyMetrics, Sex};

/// Inputs for `energy target`
pub struct TargetArgs {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: String,
    pub activity: String,
    pub weekly_loss_lbs: f64,
    pub strict: bool,
}

/// Compute TDEE and the daily calorie target for a profile
pub fn target(args: &TargetArgs, config: &EnergyBudgetConfig, output: Output) -> AppResult<()> {
    let level = if args.strict {
        args.activity.parse::<ActivityLevel>()?
    } else {
        ActivityLevel::from_label_or_default(&args.activity)
    };

    let metrics = BodyMetrics {
        weight_kg: args.weight_kg,
        height_cm: args.height_cm,
        age_years: args.age,
        sex: Sex::from_label(&args.sex),
    };
    let result = energy_target(&metrics, level, args.weekly_loss_lbs, config);

    output.emit(&result, display_energy_target)
}

/// Project when a goal weight is reached
///
/// Without `start`, counts from the start date a new challenge would get today.
pub fn goal(
    current: f64,
    goal: f64,
    weekly_loss: f64,
    start: Option<CivilDate>,
    clock: &dyn Clock,
    output: Output,
) -> AppResult<()> {
    let start = start.unwrap_or_else(|| start_date_for_new_challenge(clock.today()));
    let plan = plan_goal(current, goal, weekly_loss, start);

    output.emit(&plan, display_goal_plan)
}
