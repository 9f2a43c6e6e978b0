// ABOUTME: Integration tests for the challenge calendar engine
// ABOUTME: Week anchoring, start-date selection, status phases, week and day numbering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors
//! Calendar engine tests
//!
//! Sweeps every date from 2023 through 2026 for the week-anchoring
//! properties, then pins the documented boundary cases.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use challenge_tracker::calendar::{
    add_days, challenge_status, current_week_number, day_of_challenge, format_date,
    is_before_today, is_same_day, monday_date_for_week, monday_of_week, next_monday, parse_date,
    start_date_for_new_challenge, ChallengeStatus, FixedClock,
};
use challenge_tracker::errors::ErrorCode;
use chrono::{NaiveDate, Weekday};
use common::{date, dates_between, init_test_logging};

// ============================================================================
// Week anchoring
// ============================================================================

#[test]
fn test_monday_of_week_is_monday_within_six_days() {
    init_test_logging();
    for day in dates_between("2023-01-01", "2026-12-31") {
        let monday = monday_of_week(day);
        assert_eq!(monday.weekday(), Weekday::Mon, "{day}");
        let gap = day.days_since(monday);
        assert!((0..=6).contains(&gap), "{day}: gap {gap}");
    }
}

#[test]
fn test_sunday_belongs_to_preceding_week() {
    assert_eq!(monday_of_week(date("2024-01-07")), date("2024-01-01"));
    assert_eq!(monday_of_week(date("2024-01-08")), date("2024-01-08"));
}

#[test]
fn test_start_date_for_new_challenge_every_day() {
    for day in dates_between("2023-01-01", "2026-12-31") {
        let start = start_date_for_new_challenge(day);
        if day.is_monday() {
            assert_eq!(start, day);
        } else {
            assert_eq!(start, next_monday(day));
        }
        assert!(start.is_monday());
    }
}

#[test]
fn test_next_monday_is_strictly_after() {
    // 2024-01-01 is a Monday
    assert_eq!(next_monday(date("2024-01-01")), date("2024-01-08"));
    assert_eq!(next_monday(date("2024-01-07")), date("2024-01-08"));
    assert_eq!(next_monday(date("2024-01-03")), date("2024-01-08"));
    assert_eq!(start_date_for_new_challenge(date("2024-01-01")), date("2024-01-01"));
}

#[test]
fn test_start_date_accepts_timestamps() {
    let late_monday = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    assert_eq!(start_date_for_new_challenge(late_monday), date("2024-01-01"));
}

// ============================================================================
// Status phases
// ============================================================================

#[test]
fn test_status_partitions_time() {
    let start = date("2024-01-01");
    assert_eq!(
        challenge_status(start, date("2023-12-31")),
        ChallengeStatus::PreChallenge
    );
    assert_eq!(challenge_status(start, start), ChallengeStatus::Active);
    assert_eq!(
        challenge_status(start, start.add_days(118)),
        ChallengeStatus::Active
    );
    assert_eq!(
        challenge_status(start, start.add_days(119)),
        ChallengeStatus::Completed
    );
}

#[test]
fn test_status_ignores_time_of_day() {
    let start = date("2024-01-01");
    let just_before_midnight = NaiveDate::from_ymd_opt(2023, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let midnight = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(
        challenge_status(start, just_before_midnight),
        ChallengeStatus::PreChallenge
    );
    assert_eq!(challenge_status(start, midnight), ChallengeStatus::Active);
}

#[test]
fn test_status_phases_never_go_backwards() {
    let start = date("2025-03-03");
    let mut previous = ChallengeStatus::PreChallenge;
    for day in dates_between("2025-01-01", "2025-12-31") {
        let status = challenge_status(start, day);
        let rank = |s: ChallengeStatus| match s {
            ChallengeStatus::PreChallenge => 0,
            ChallengeStatus::Active => 1,
            ChallengeStatus::Completed => 2,
        };
        assert!(rank(status) >= rank(previous), "{day}");
        previous = status;
    }
}

// ============================================================================
// Week and day numbering
// ============================================================================

#[test]
fn test_week_number_monotonic_and_bounded() {
    for start in [date("2023-01-02"), date("2024-02-26"), date("2025-12-29")] {
        let mut previous = 1;
        for day in dates_between("2022-12-01", "2026-12-31") {
            let week = current_week_number(start, day);
            assert!((1..=17).contains(&week), "{start} {day}: {week}");
            assert!(week >= previous, "{start} {day}");
            previous = week;
        }
    }
}

#[test]
fn test_week_number_boundaries() {
    let start = date("2024-01-01");
    assert_eq!(current_week_number(start, date("2023-11-01")), 1);
    assert_eq!(current_week_number(start, date("2024-01-07")), 1);
    assert_eq!(current_week_number(start, date("2024-01-08")), 2);
    assert_eq!(current_week_number(start, date("2024-04-28")), 17);
    assert_eq!(current_week_number(start, date("2025-01-01")), 17);
}

#[test]
fn test_week_number_non_monday_start_uses_its_week() {
    // A Thursday start still counts weeks from its Monday
    let start = date("2024-01-04");
    assert_eq!(current_week_number(start, date("2024-01-07")), 1);
    assert_eq!(current_week_number(start, date("2024-01-08")), 2);
}

#[test]
fn test_day_of_challenge() {
    let start = date("2024-01-01");
    assert_eq!(day_of_challenge(start, start), 1);
    assert_eq!(day_of_challenge(start, start.add_days(-1)), 0);
    assert_eq!(day_of_challenge(start, date("2023-06-01")), 0);
    assert_eq!(day_of_challenge(start, date("2024-01-10")), 10);
    assert_eq!(day_of_challenge(start, start.add_days(118)), 119);
}

#[test]
fn test_monday_date_for_week() {
    let start = date("2024-01-01");
    assert_eq!(monday_date_for_week(start, 1), monday_of_week(start));
    assert_eq!(monday_date_for_week(start, 2), date("2024-01-08"));
    assert_eq!(monday_date_for_week(start, 17), date("2024-04-22"));

    let wednesday_start = date("2024-01-03");
    assert_eq!(monday_date_for_week(wednesday_start, 1), date("2024-01-01"));
}

// ============================================================================
// Date helpers
// ============================================================================

#[test]
fn test_format_and_parse() {
    let day = parse_date("2024-02-29").unwrap();
    assert_eq!(format_date(day), "2024-02-29");
}

#[test]
fn test_parse_rejects_malformed_dates() {
    let malformed = [
        "",
        "2024-1-5",
        "2024/01/05",
        "2023-02-29",
        "2024-13-01",
        "01-05-2024",
        "2024-01-05T00:00",
    ];
    for bad in malformed {
        let err = parse_date(bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat, "{bad}");
    }
}

#[test]
fn test_same_day_and_before_today() {
    let morning = NaiveDate::from_ymd_opt(2024, 5, 6)
        .unwrap()
        .and_hms_opt(6, 0, 0)
        .unwrap();
    let evening = NaiveDate::from_ymd_opt(2024, 5, 6)
        .unwrap()
        .and_hms_opt(22, 30, 0)
        .unwrap();
    assert!(is_same_day(morning, evening));
    assert!(!is_same_day(date("2024-05-06"), date("2024-05-07")));

    let clock = FixedClock::new(date("2024-05-06"));
    assert!(is_before_today(date("2024-05-05"), &clock));
    assert!(!is_before_today(date("2024-05-06"), &clock));
    assert!(!is_before_today(date("2024-05-07"), &clock));
}

#[test]
fn test_add_days_crosses_month_and_year() {
    assert_eq!(add_days(date("2024-02-28"), 1), date("2024-02-29"));
    assert_eq!(add_days(date("2024-12-31"), 1), date("2025-01-01"));
    assert_eq!(add_days(date("2024-01-01"), -1), date("2023-12-31"));
}
