// ABOUTME: Configuration error types for environment loading and validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and unreadable variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

//! Configuration error types.

use super::AppError;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Related values are inconsistent (e.g. multipliers not increasing)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Date-valued variable is not a `YYYY-MM-DD` date
    #[error("Invalid {variable} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// Environment variable name
        variable: &'static str,
        /// Underlying parse failure
        #[source]
        source: AppError,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
