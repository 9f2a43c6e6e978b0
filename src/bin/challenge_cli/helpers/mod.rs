// ABOUTME: Helper modules for challenge-cli
// ABOUTME: Output rendering shared by all commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

pub mod display;
