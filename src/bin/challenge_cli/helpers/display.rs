// ABOUTME: Output formatting helpers for challenge-cli
// ABOUTME: Renders results either as human-readable text or as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

use challenge_tracker::calendar::{ChallengeSnapshot, CivilDate, WeekRange};
use challenge_tracker::errors::{AppError, AppResult, ErrorResponse};
use challenge_tracker::nutrition::{EnergyTarget, GoalPlan};
use serde::Serialize;

/// Output mode selected on the command line
#[derive(Debug, Clone, Copy)]
pub enum Output {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Output {
    /// Print `value` as JSON, or through `render` in text mode
    pub fn emit<T: Serialize>(self, value: &T, render: impl FnOnce(&T)) -> AppResult<()> {
        match self {
            Self::Json => {
                let json = serde_json::to_string_pretty(value).map_err(|e| {
                    AppError::internal(format!("failed to serialize output: {e}")).with_source(e)
                })?;
                println!("{json}");
            }
            Self::Text => render(value),
        }
        Ok(())
    }

    /// Report an error in the selected format
    pub fn error(self, error: AppError) {
        match self {
            Self::Json => {
                let response = ErrorResponse::from(error);
                match serde_json::to_string_pretty(&response) {
                    Ok(json) => println!("{json}"),
                    Err(e) => eprintln!("Error: failed to serialize error response: {e}"),
                }
            }
            Self::Text => eprintln!("Error: {error}"),
        }
    }
}

/// Print a challenge snapshot as a status table
pub fn display_snapshot(start: CivilDate, snapshot: &ChallengeSnapshot) {
    println!("Challenge started {start}");
    println!("{}", "=".repeat(40));
    println!("   Today:          {}", snapshot.today);
    println!("   Status:         {}", snapshot.status);
    println!("   Week:           {} of 17", snapshot.week_number);
    println!("   Day:            {}", snapshot.day_of_challenge);
    println!("   Days remaining: {}", snapshot.days_remaining);
    println!("   Progress:       {:.0}%", snapshot.progress * 100.0);
    println!(
        "   This week:      {} .. {}",
        snapshot.current_week.start, snapshot.current_week.end
    );
}

/// Print one challenge week with its seven dates
pub fn display_week(week_number: u32, range: &WeekRange) {
    println!("Week {week_number}: {} .. {}", range.start, range.end);
    for day in range.days() {
        println!("   {} {}", day.weekday(), day);
    }
}

/// Print TDEE and the daily calorie target
pub fn display_energy_target(target: &EnergyTarget) {
    println!("TDEE:           {} kcal/day", target.tdee);
    println!("Calorie target: {} kcal/day", target.calorie_target);
    if target.floor_applied {
        println!("(raised to the minimum safe target)");
    }
}

/// Print a goal weight projection
pub fn display_goal_plan(plan: &GoalPlan) {
    if plan.already_met {
        println!("Goal weight already reached");
        return;
    }
    match plan.projected_goal_date {
        Some(date) => {
            println!("Weeks to goal:  {}", plan.weeks_to_goal);
            println!("Projected date: {date}");
            println!(
                "Within the 17-week challenge: {}",
                if plan.fits_in_challenge { "yes" } else { "no" }
            );
        }
        None => println!("No valid plan: weekly loss must be greater than zero"),
    }
}
