// ABOUTME: Challenge timeline constants for the fixed 17-week program
// ABOUTME: Week bounds and day counts shared by the calendar engine and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

/// Number of weeks in every challenge
pub const CHALLENGE_WEEKS: u32 = 17;

/// Days in a week
pub const DAYS_PER_WEEK: u32 = 7;

/// Total length of a challenge in days (17 x 7)
pub const CHALLENGE_DAYS: u32 = CHALLENGE_WEEKS * DAYS_PER_WEEK;

/// First valid week number
pub const FIRST_WEEK: u32 = 1;

/// Last valid week number
pub const LAST_WEEK: u32 = CHALLENGE_WEEKS;
