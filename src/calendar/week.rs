// ABOUTME: Monday-anchored week arithmetic (ISO convention, Sunday ends the week)
// ABOUTME: Start-of-week, next Monday, new-challenge start date, and Monday..Sunday ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

use super::CivilDate;
use challenge_core::constants::challenge::DAYS_PER_WEEK;
use serde::{Deserialize, Serialize};

/// The Monday on or before `date`
///
/// Weeks start on Monday, so a Sunday belongs to the week that began six
/// days earlier.
#[must_use]
pub fn monday_of_week(date: CivilDate) -> CivilDate {
    let offset = i64::from(date.weekday().num_days_from_monday());
    date.add_days(-offset)
}

/// The first Monday strictly after `now`
///
/// On a Monday this is the following Monday, seven days later.
#[must_use]
pub fn next_monday(now: impl Into<CivilDate>) -> CivilDate {
    let today = now.into();
    let until_monday = i64::from(DAYS_PER_WEEK - today.weekday().num_days_from_monday());
    today.add_days(until_monday)
}

/// Start date for a challenge created at `now`
///
/// Challenges start on a Monday: today if today is Monday, otherwise the
/// next upcoming Monday.
#[must_use]
pub fn start_date_for_new_challenge(now: impl Into<CivilDate>) -> CivilDate {
    let today = now.into();
    if today.is_monday() {
        today
    } else {
        next_monday(today)
    }
}

/// An inclusive Monday..=Sunday span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    /// Monday
    pub start: CivilDate,
    /// Sunday
    pub end: CivilDate,
}

impl WeekRange {
    /// The week containing `date`
    #[must_use]
    pub fn containing(date: CivilDate) -> Self {
        let start = monday_of_week(date);
        Self {
            start,
            end: start.add_days(i64::from(DAYS_PER_WEEK) - 1),
        }
    }

    /// Whether `date` falls within this week
    #[must_use]
    pub fn contains(&self, date: CivilDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The seven dates of the week, Monday first
    #[must_use]
    pub fn days(&self) -> Vec<CivilDate> {
        (0..i64::from(DAYS_PER_WEEK))
            .map(|offset| self.start.add_days(offset))
            .collect()
    }
}
