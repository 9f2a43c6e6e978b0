// ABOUTME: Energy budget configuration for BMR, activity multipliers, and calorie targets
// ABOUTME: Defaults reproduce Mifflin-St Jeor and the standard five-level activity table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

//! Energy Budget Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology

use challenge_core::constants::energy;
use challenge_core::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Energy budget configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnergyBudgetConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie target limits
    pub targets: CalorieTargetConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor constant for everyone else (-161)
    pub msj_other_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub active: f64,
    /// Extremely active (hard training 2x/day): 1.9
    pub extreme: f64,
    /// Used for unrecognised activity labels: 1.55
    pub fallback: f64,
}

/// Calorie target limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieTargetConfig {
    /// Lowest daily target ever recommended; never below 1200 kcal
    pub calorie_floor_kcal: u32,
    /// Energy per pound of body weight change (3500 kcal)
    pub kcal_per_pound: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: energy::MSJ_WEIGHT_COEF,
            msj_height_coef: energy::MSJ_HEIGHT_COEF,
            msj_age_coef: energy::MSJ_AGE_COEF,
            msj_male_constant: energy::MSJ_MALE_CONSTANT,
            msj_other_constant: energy::MSJ_OTHER_CONSTANT,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: energy::ACTIVITY_SEDENTARY,
            light: energy::ACTIVITY_LIGHT,
            moderate: energy::ACTIVITY_MODERATE,
            active: energy::ACTIVITY_ACTIVE,
            extreme: energy::ACTIVITY_EXTREME,
            fallback: energy::ACTIVITY_FALLBACK,
        }
    }
}

impl Default for CalorieTargetConfig {
    fn default() -> Self {
        Self {
            calorie_floor_kcal: energy::MIN_CALORIE_TARGET_KCAL,
            kcal_per_pound: energy::KCAL_PER_POUND,
        }
    }
}

/// Largest multiplier accepted by validation
const MAX_ACTIVITY_FACTOR: f64 = 2.5;

impl ActivityFactorsConfig {
    /// Validate that multipliers are in range and strictly increasing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a multiplier is outside `(1.0, 2.5]`,
    /// or `ConfigError::InvalidRange` if the levels are not strictly increasing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.extreme,
        ];

        for factor in ordered.iter().chain(std::iter::once(&self.fallback)) {
            if !(*factor > 1.0 && *factor <= MAX_ACTIVITY_FACTOR) {
                return Err(ConfigError::ValueOutOfRange(
                    "activity factors must be greater than 1.0 and at most 2.5",
                ));
            }
        }

        if ordered.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must increase from sedentary to extreme",
            ));
        }

        Ok(())
    }
}

impl CalorieTargetConfig {
    /// Validate the calorie floor and energy density
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the floor is below 1200 kcal
    /// or the energy per pound is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calorie_floor_kcal < energy::MIN_CALORIE_TARGET_KCAL {
            return Err(ConfigError::ValueOutOfRange(
                "calorie floor cannot be lowered below 1200 kcal",
            ));
        }
        if !(self.kcal_per_pound.is_finite() && self.kcal_per_pound > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "kcal per pound must be a positive number",
            ));
        }
        Ok(())
    }
}

impl EnergyBudgetConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.targets.validate()
    }
}
