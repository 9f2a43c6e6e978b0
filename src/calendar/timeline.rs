// ABOUTME: Challenge timeline rules: status phase, week number, and day-of-challenge
// ABOUTME: Derives every value from the start date and an explicit "today", never from stored state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

//! Challenge timeline.
//!
//! A challenge covers 17 weeks (119 days) starting at `start_date`. The status
//! partitions time into three phases with no gap or overlap:
//!
//! | today                         | status          |
//! |-------------------------------|-----------------|
//! | `today < start`               | `PRE_CHALLENGE` |
//! | `start <= today < start+119`  | `ACTIVE`        |
//! | `today >= start+119`          | `COMPLETED`     |
//!
//! Week numbers are Monday-aligned and clamped into `1..=17`; they never
//! signal "outside the challenge" on their own, callers check the status.

use super::week::{monday_of_week, start_date_for_new_challenge, WeekRange};
use super::{CivilDate, Clock};
use challenge_core::constants::challenge::{CHALLENGE_DAYS, DAYS_PER_WEEK, FIRST_WEEK, LAST_WEEK};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Phase of a challenge relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChallengeStatus {
    /// Start date is still in the future
    PreChallenge,
    /// Within the 119-day window
    Active,
    /// The window has ended
    Completed,
}

impl ChallengeStatus {
    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreChallenge => "PRE_CHALLENGE",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for ChallengeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed 17-week span of a challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeWindow {
    /// First day of the challenge
    pub start_date: CivilDate,
}

/// Everything the UI needs to render the current state of a challenge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSnapshot {
    /// Date the snapshot was taken for
    pub today: CivilDate,
    /// Phase of the challenge
    pub status: ChallengeStatus,
    /// Week number, clamped into 1..=17
    pub week_number: u32,
    /// Day index, 1 on the start date, 0 before it
    pub day_of_challenge: u32,
    /// Days left until the window ends
    pub days_remaining: u32,
    /// Fraction of the window elapsed, in `[0, 1]`
    pub progress: f64,
    /// Monday..Sunday of the current challenge week
    pub current_week: WeekRange,
}

impl ChallengeWindow {
    /// Window starting on `start_date`
    #[must_use]
    pub const fn new(start_date: CivilDate) -> Self {
        Self { start_date }
    }

    /// Window for a challenge created at `now` (starts this or next Monday)
    #[must_use]
    pub fn starting_for_new_challenge(now: impl Into<CivilDate>) -> Self {
        Self::new(start_date_for_new_challenge(now))
    }

    /// First day of `COMPLETED` (start + 119 days)
    #[must_use]
    pub fn end_date(&self) -> CivilDate {
        self.start_date.add_days(i64::from(CHALLENGE_DAYS))
    }

    /// Last day of `ACTIVE`
    #[must_use]
    pub fn last_day(&self) -> CivilDate {
        self.end_date().add_days(-1)
    }

    /// Status on `today`
    #[must_use]
    pub fn status_on(&self, today: CivilDate) -> ChallengeStatus {
        if today < self.start_date {
            ChallengeStatus::PreChallenge
        } else if today < self.end_date() {
            ChallengeStatus::Active
        } else {
            ChallengeStatus::Completed
        }
    }

    /// Status according to `clock`
    #[must_use]
    pub fn status(&self, clock: &dyn Clock) -> ChallengeStatus {
        self.status_on(clock.today())
    }

    /// Week number on `today`, clamped into `1..=17`
    #[must_use]
    pub fn week_number_on(&self, today: CivilDate) -> u32 {
        let weeks_since_start = monday_of_week(today)
            .days_since(monday_of_week(self.start_date))
            .div_euclid(i64::from(DAYS_PER_WEEK));
        let raw = weeks_since_start.saturating_add(1);
        let clamped = raw.clamp(i64::from(FIRST_WEEK), i64::from(LAST_WEEK));
        if clamped != raw {
            debug!(start = %self.start_date, %today, raw, "week number clamped");
        }
        clamped as u32
    }

    /// Day index on `today`: 1 on the start date, 0 for any earlier date
    #[must_use]
    pub fn day_of_challenge_on(&self, today: CivilDate) -> u32 {
        let day = today.days_since(self.start_date).saturating_add(1).max(0);
        u32::try_from(day).unwrap_or(u32::MAX)
    }

    /// Monday of challenge week `week_number`
    ///
    /// Meaningful for `1..=17`; other values extrapolate linearly and must be
    /// validated by the caller.
    #[must_use]
    pub fn monday_of_week(&self, week_number: u32) -> CivilDate {
        let offset = (i64::from(week_number) - 1) * i64::from(DAYS_PER_WEEK);
        monday_of_week(self.start_date).add_days(offset)
    }

    /// Monday..=Sunday of challenge week `week_number`
    #[must_use]
    pub fn week_range(&self, week_number: u32) -> WeekRange {
        WeekRange::containing(self.monday_of_week(week_number))
    }

    /// All 17 weeks in order
    #[must_use]
    pub fn weeks(&self) -> Vec<WeekRange> {
        (FIRST_WEEK..=LAST_WEEK)
            .map(|week| self.week_range(week))
            .collect()
    }

    /// Days left until the window ends
    ///
    /// The full 119 before the start, 0 once completed.
    #[must_use]
    pub fn days_remaining_on(&self, today: CivilDate) -> u32 {
        match self.status_on(today) {
            ChallengeStatus::PreChallenge => CHALLENGE_DAYS,
            ChallengeStatus::Active => self.end_date().days_since(today) as u32,
            ChallengeStatus::Completed => 0,
        }
    }

    /// Fraction of the 119 days elapsed on `today`, in `[0, 1]`
    #[must_use]
    pub fn progress_on(&self, today: CivilDate) -> f64 {
        let elapsed = today
            .days_since(self.start_date)
            .clamp(0, i64::from(CHALLENGE_DAYS));
        elapsed as f64 / f64::from(CHALLENGE_DAYS)
    }

    /// Snapshot of the challenge on `today`
    #[must_use]
    pub fn snapshot_on(&self, today: CivilDate) -> ChallengeSnapshot {
        let week_number = self.week_number_on(today);
        ChallengeSnapshot {
            today,
            status: self.status_on(today),
            week_number,
            day_of_challenge: self.day_of_challenge_on(today),
            days_remaining: self.days_remaining_on(today),
            progress: self.progress_on(today),
            current_week: self.week_range(week_number),
        }
    }

    /// Snapshot according to `clock`
    #[must_use]
    pub fn snapshot(&self, clock: &dyn Clock) -> ChallengeSnapshot {
        self.snapshot_on(clock.today())
    }
}

/// Status of a challenge starting on `start_date` at `now`
#[must_use]
pub fn challenge_status(start_date: CivilDate, now: impl Into<CivilDate>) -> ChallengeStatus {
    ChallengeWindow::new(start_date).status_on(now.into())
}

/// Week number (1..=17) of a challenge starting on `start_date` at `now`
#[must_use]
pub fn current_week_number(start_date: CivilDate, now: impl Into<CivilDate>) -> u32 {
    ChallengeWindow::new(start_date).week_number_on(now.into())
}

/// Day index of a challenge starting on `start_date` at `now` (0 before start)
#[must_use]
pub fn day_of_challenge(start_date: CivilDate, now: impl Into<CivilDate>) -> u32 {
    ChallengeWindow::new(start_date).day_of_challenge_on(now.into())
}

/// Monday of challenge week `week_number`
#[must_use]
pub fn monday_date_for_week(start_date: CivilDate, week_number: u32) -> CivilDate {
    ChallengeWindow::new(start_date).monday_of_week(week_number)
}
