// ABOUTME: Challenge timeline commands for challenge-cli
// ABOUTME: Suggests start dates and reports status, week, and day for a running challenge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

use crate::helpers::display::{display_snapshot, display_week, Output};
use challenge_tracker::calendar::{
    start_date_for_new_challenge, ChallengeWindow, CivilDate, Clock, WeekRange,
};
use challenge_tracker::constants::challenge::{FIRST_WEEK, LAST_WEEK};
use challenge_tracker::errors::{AppError, AppResult};
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartDateReport {
    today: CivilDate,
    start_date: CivilDate,
    end_date: CivilDate,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeekReport {
    week_number: u32,
    #[serde(flatten)]
    range: WeekRange,
}

/// Suggest the Monday a challenge created today should start on
pub fn start_date(clock: &dyn Clock, output: Output) -> AppResult<()> {
    let today = clock.today();
    let window = ChallengeWindow::new(start_date_for_new_challenge(today));
    let report = StartDateReport {
        today,
        start_date: window.start_date,
        end_date: window.end_date(),
    };

    output.emit(&report, |r| {
        println!("Today:      {}", r.today);
        println!("Start date: {} ({})", r.start_date, r.start_date.weekday());
        println!("Ends:       {}", r.end_date);
    })
}

/// Show status, week, day, and remaining days for a challenge
pub fn status(start: CivilDate, clock: &dyn Clock, output: Output) -> AppResult<()> {
    if !start.is_monday() {
        debug!(%start, "challenge start date is not a Monday");
    }
    let window = ChallengeWindow::new(start);
    let snapshot = window.snapshot(clock);

    output.emit(&snapshot, |s| display_snapshot(start, s))
}

/// Show the dates covered by one challenge week
pub fn week(start: CivilDate, week_number: u32, output: Output) -> AppResult<()> {
    if !(FIRST_WEEK..=LAST_WEEK).contains(&week_number) {
        return Err(AppError::value_out_of_range(format!(
            "week must be between {FIRST_WEEK} and {LAST_WEEK}, got {week_number}"
        ))
        .with_field("week"));
    }

    let report = WeekReport {
        week_number,
        range: ChallengeWindow::new(start).week_range(week_number),
    };

    output.emit(&report, |r| display_week(r.week_number, &r.range))
}
