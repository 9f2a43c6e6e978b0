// ABOUTME: Injectable source of "today" for the calendar engine
// ABOUTME: System clock for production, fixed clock for tests, demos, and date overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

use super::CivilDate;
use chrono::Local;

/// Source of the current civil date
///
/// Calendar functions never read the wall clock themselves; callers pass a
/// date, or a `Clock` when they want "now".
pub trait Clock: Send + Sync {
    /// Today's civil date
    fn today(&self) -> CivilDate;
}

/// Wall clock in the process's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CivilDate {
        CivilDate::from(Local::now())
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(CivilDate);

impl FixedClock {
    /// Clock that always reports `today`
    #[must_use]
    pub const fn new(today: CivilDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CivilDate {
        self.0
    }
}
