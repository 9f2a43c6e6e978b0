// ABOUTME: Calendar engine for the 17-week challenge timeline
// ABOUTME: Civil dates, Monday-anchored weeks, challenge status/week/day, and an injectable clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

//! # Calendar Engine
//!
//! Pure functions turning a challenge start date and "now" into a status,
//! week number and day index, plus the date helpers used by daily logging
//! and weekly photo comparison. All arithmetic is done on [`CivilDate`]s,
//! never on instants.

/// Civil date type and `YYYY-MM-DD` parsing/formatting
pub mod civil_date;

/// Injectable "today"
pub mod clock;

/// Challenge status, week number, and day index
pub mod timeline;

/// Monday-anchored week helpers
pub mod week;

pub use civil_date::CivilDate;
pub use clock::{Clock, FixedClock, SystemClock};
pub use timeline::{
    challenge_status, current_week_number, day_of_challenge, monday_date_for_week,
    ChallengeSnapshot, ChallengeStatus, ChallengeWindow,
};
pub use week::{monday_of_week, next_monday, start_date_for_new_challenge, WeekRange};

use challenge_core::errors::AppResult;

/// Format a date in the canonical `YYYY-MM-DD` form
#[must_use]
pub fn format_date(date: CivilDate) -> String {
    date.to_string()
}

/// Parse the canonical `YYYY-MM-DD` form
///
/// # Errors
///
/// Returns `INVALID_FORMAT` when the text is not a valid, zero-padded date.
pub fn parse_date(text: &str) -> AppResult<CivilDate> {
    CivilDate::parse(text)
}

/// Whether two instants or dates fall on the same civil day
#[must_use]
pub fn is_same_day(a: impl Into<CivilDate>, b: impl Into<CivilDate>) -> bool {
    a.into().is_same_day(b.into())
}

/// Whether `date` is strictly before the clock's today
#[must_use]
pub fn is_before_today(date: impl Into<CivilDate>, clock: &dyn Clock) -> bool {
    date.into().is_before(clock.today())
}

/// `date` shifted by `days`
#[must_use]
pub fn add_days(date: impl Into<CivilDate>, days: i64) -> CivilDate {
    date.into().add_days(days)
}
