// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups challenge timeline and energy budget constants by concern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file.

/// Challenge timeline constants (length, week bounds)
pub mod challenge;

/// Energy budget constants (Mifflin-St Jeor, activity multipliers, calorie floor)
pub mod energy;

/// Canonical text form for dates at every boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";
