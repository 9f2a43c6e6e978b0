// ABOUTME: Shared helpers for challenge tracker integration tests
// ABOUTME: Quiet test logging setup and terse date/config constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use challenge_tracker::calendar::CivilDate;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default stays quiet
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Parse a `YYYY-MM-DD` literal
pub fn date(text: &str) -> CivilDate {
    CivilDate::parse(text).unwrap_or_else(|e| panic!("bad test date {text}: {e}"))
}

/// Every date from `first` through `last`, inclusive
pub fn dates_between(first: &str, last: &str) -> Vec<CivilDate> {
    let first = date(first);
    let last = date(last);
    let span = last.days_since(first);
    (0..=span).map(|offset| first.add_days(offset)).collect()
}
