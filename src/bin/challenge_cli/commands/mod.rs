// ABOUTME: Re-exports command modules for challenge-cli
// ABOUTME: Provides access to challenge timeline and energy budget commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

pub mod challenge;
pub mod energy;
