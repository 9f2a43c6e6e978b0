// ABOUTME: Main library entry point for the 17-week challenge tracker
// ABOUTME: Exposes the calendar engine, energy budget calculator, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

#![deny(unsafe_code)]

//! # Challenge Tracker
//!
//! Domain core of a fitness-challenge app. Users run a fixed 17-week
//! challenge that always starts on a Monday; the app needs to know which
//! phase a challenge is in, which week and day it is, and what daily calorie
//! target to show. Everything here is a pure computation over explicit
//! inputs: no storage, no network, no hidden timers.
//!
//! ## Architecture
//!
//! - **calendar**: civil dates, Monday-anchored weeks, challenge status/week/day
//! - **nutrition**: Mifflin-St Jeor BMR, TDEE, calorie target, goal projection
//! - **config**: environment-driven configuration with validation
//! - **logging**: structured `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust
//! use challenge_tracker::calendar::{ChallengeStatus, ChallengeWindow, CivilDate};
//! use challenge_tracker::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let window = ChallengeWindow::new(CivilDate::parse("2024-01-01")?);
//!     let today = CivilDate::parse("2024-01-10")?;
//!
//!     assert_eq!(window.status_on(today), ChallengeStatus::Active);
//!     assert_eq!(window.week_number_on(today), 2);
//!     assert_eq!(window.day_of_challenge_on(today), 10);
//!     Ok(())
//! }
//! ```

/// Calendar engine: challenge timeline and date helpers
pub mod calendar;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Energy budget calculator
pub mod nutrition;

/// Unified error types (re-exported from `challenge-core`)
pub use challenge_core::errors;

/// Domain constants (re-exported from `challenge-core`)
pub use challenge_core::constants;
