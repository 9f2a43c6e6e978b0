// ABOUTME: Integration test for installing the global tracing subscriber
// ABOUTME: First init succeeds, a second init reports an error instead of panicking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors
//! Runs in its own test binary so no other test has installed a subscriber.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use challenge_tracker::logging::{LogFormat, LoggingConfig};

#[test]
fn test_second_init_fails() {
    let config = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    }
    .with_level("warn");

    config.init().unwrap();

    let err = LoggingConfig::default().init().unwrap_err();
    assert!(err.to_string().contains("subscriber"));
}
