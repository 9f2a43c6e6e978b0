// ABOUTME: Goal weight projection against the 17-week challenge window
// ABOUTME: Turns weeks-to-goal into a projected date and whether it lands inside the challenge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

use super::energy_budget::weeks_to_goal;
use crate::calendar::CivilDate;
use challenge_core::constants::challenge::{CHALLENGE_WEEKS, DAYS_PER_WEEK};
use serde::{Deserialize, Serialize};

/// Projection of a weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlan {
    /// Whole weeks needed at the requested rate (0 if met or no valid plan)
    pub weeks_to_goal: u32,
    /// Current weight is already at or below the goal
    pub already_met: bool,
    /// The goal is reached within the 17 challenge weeks
    pub fits_in_challenge: bool,
    /// Date the goal is reached, counted from `start`; `None` without a valid plan
    pub projected_goal_date: Option<CivilDate>,
}

/// Project reaching `goal_weight` from `current_weight` at `weekly_loss` per week
#[must_use]
pub fn plan_goal(
    current_weight: f64,
    goal_weight: f64,
    weekly_loss: f64,
    start: CivilDate,
) -> GoalPlan {
    let already_met = current_weight <= goal_weight;
    let weeks = weeks_to_goal(current_weight, goal_weight, weekly_loss);

    if already_met {
        return GoalPlan {
            weeks_to_goal: 0,
            already_met,
            fits_in_challenge: true,
            projected_goal_date: Some(start),
        };
    }

    // weekly_loss <= 0 with weight still to lose
    if weeks == 0 {
        return GoalPlan {
            weeks_to_goal: 0,
            already_met,
            fits_in_challenge: false,
            projected_goal_date: None,
        };
    }

    GoalPlan {
        weeks_to_goal: weeks,
        already_met,
        fits_in_challenge: weeks <= CHALLENGE_WEEKS,
        projected_goal_date: Some(start.add_days(i64::from(weeks) * i64::from(DAYS_PER_WEEK))),
    }
}
