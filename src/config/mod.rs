// ABOUTME: Application configuration loaded from defaults plus environment overrides
// ABOUTME: Validated once, cached process-wide, and passed explicitly into computations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

//! Configuration
//!
//! Configuration is environment-only. Every value has a default matching the
//! published formulas, and environment variables override individual fields:
//!
//! ```bash
//! export CHALLENGE_TODAY_OVERRIDE=2024-03-04   # pin "today" for demos
//! export CHALLENGE_CALORIE_FLOOR_KCAL=1400      # may only be raised
//! export CHALLENGE_ACTIVITY_MODERATE=1.5
//! ```
//!
//! Computation functions take the relevant section by reference; the
//! process-wide [`ChallengeConfig::global`] is a convenience for binaries.

/// Energy budget configuration (BMR, activity factors, calorie targets)
pub mod energy;

pub use energy::{ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, EnergyBudgetConfig};

use crate::calendar::{CivilDate, Clock, FixedClock, SystemClock};
use challenge_core::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Calendar configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Pin "today" to a fixed date instead of reading the system clock
    pub today_override: Option<CivilDate>,
}

impl CalendarConfig {
    /// Clock honouring `today_override`
    #[must_use]
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.today_override {
            Some(today) => Box::new(FixedClock::new(today)),
            None => Box::new(SystemClock),
        }
    }
}

/// Main configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChallengeConfig {
    /// Calendar settings
    pub calendar: CalendarConfig,
    /// Energy budget settings
    pub energy: EnergyBudgetConfig,
}

static CHALLENGE_CONFIG: OnceLock<ChallengeConfig> = OnceLock::new();

impl ChallengeConfig {
    /// Get the process-wide configuration, loading it on first use
    ///
    /// Falls back to defaults if the environment holds invalid values.
    pub fn global() -> &'static Self {
        CHALLENGE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load challenge config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.energy.validate()
    }

    /// Clock honouring the calendar configuration
    #[must_use]
    pub fn clock(&self) -> Box<dyn Clock> {
        self.calendar.clock()
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        match env::var("CHALLENGE_TODAY_OVERRIDE") {
            Ok(val) => {
                let today = CivilDate::parse(val.trim()).map_err(|source| ConfigError::InvalidDate {
                    variable: "CHALLENGE_TODAY_OVERRIDE",
                    source,
                })?;
                self.calendar.today_override = Some(today);
            }
            Err(VarError::NotPresent) => {}
            Err(e) => return Err(ConfigError::EnvVar(e)),
        }

        override_from_env(
            "CHALLENGE_CALORIE_FLOOR_KCAL",
            &mut self.energy.targets.calorie_floor_kcal,
        )?;
        override_from_env(
            "CHALLENGE_KCAL_PER_POUND",
            &mut self.energy.targets.kcal_per_pound,
        )?;

        let factors = &mut self.energy.activity_factors;
        override_from_env("CHALLENGE_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        override_from_env("CHALLENGE_ACTIVITY_LIGHT", &mut factors.light)?;
        override_from_env("CHALLENGE_ACTIVITY_MODERATE", &mut factors.moderate)?;
        override_from_env("CHALLENGE_ACTIVITY_ACTIVE", &mut factors.active)?;
        override_from_env("CHALLENGE_ACTIVITY_EXTREME", &mut factors.extreme)?;

        Ok(self)
    }
}

/// Replace `target` with the parsed value of `name` when it is set
fn override_from_env<T: FromStr>(name: &str, target: &mut T) -> Result<(), ConfigError> {
    match env::var(name) {
        Ok(val) => {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))?;
            Ok(())
        }
        Err(VarError::NotPresent) => Ok(()),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
