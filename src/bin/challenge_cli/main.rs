// ABOUTME: challenge-cli - command-line front end for the challenge calendar and energy budget
// ABOUTME: Reports challenge status, week ranges, calorie targets, and goal projections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors
//!
//! Usage:
//! ```bash
//! # Monday a challenge created today would start on
//! challenge-cli challenge start-date
//!
//! # Status of a running challenge, pretending today is 2024-01-10
//! challenge-cli --today 2024-01-10 challenge status --start 2024-01-01
//!
//! # Dates covered by week 5
//! challenge-cli challenge week --start 2024-01-01 --week 5
//!
//! # Daily calorie target as JSON
//! challenge-cli --json energy target --weight-kg 70 --height-cm 175 --age 30 \
//!     --sex male --activity moderate --weekly-loss-lbs 1
//!
//! # When 75 kg is reached from 80 kg at 0.5 kg/week
//! challenge-cli energy goal --current 80 --goal 75 --weekly-loss 0.5
//! ```

mod commands;
mod helpers;

use challenge_tracker::calendar::{CivilDate, Clock, FixedClock};
use challenge_tracker::config::ChallengeConfig;
use challenge_tracker::errors::{AppError, AppResult};
use challenge_tracker::logging::LoggingConfig;
use clap::{Parser, Subcommand};
use commands::energy::TargetArgs;
use helpers::display::Output;
use std::env;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "challenge-cli",
    about = "17-week challenge calendar and energy budget",
    long_about = "Computes challenge status, week and day numbers, and daily calorie targets for a 17-week fitness challenge."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<CivilDate>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Challenge timeline commands
    Challenge {
        #[command(subcommand)]
        action: ChallengeCommand,
    },
    /// Energy budget commands
    Energy {
        #[command(subcommand)]
        action: EnergyCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ChallengeCommand {
    /// Suggest the start date for a challenge created today
    StartDate,
    /// Show status, week, and day of a challenge
    Status {
        /// Challenge start date (YYYY-MM-DD)
        #[arg(long)]
        start: CivilDate,
    },
    /// Show the seven dates of a challenge week
    Week {
        /// Challenge start date (YYYY-MM-DD)
        #[arg(long)]
        start: CivilDate,
        /// Week number (1-17)
        #[arg(long)]
        week: u32,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum EnergyCommand {
    /// Compute TDEE and daily calorie target
    Target {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,
        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,
        /// Age in years
        #[arg(long)]
        age: u32,
        /// Sex ("male" or anything else)
        #[arg(long)]
        sex: String,
        /// Activity level: sedentary, light, moderate, active, extreme
        #[arg(long, default_value = "moderate")]
        activity: String,
        /// Desired weight loss per week in pounds (negative for gain)
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        weekly_loss_lbs: f64,
        /// Reject unknown activity levels instead of using moderate
        #[arg(long)]
        strict: bool,
    },
    /// Project when a goal weight is reached
    Goal {
        /// Current weight
        #[arg(long)]
        current: f64,
        /// Goal weight, same unit as current
        #[arg(long)]
        goal: f64,
        /// Loss per week, same unit as current
        #[arg(long, allow_negative_numbers = true)]
        weekly_loss: f64,
        /// Count from this start date instead of the next challenge start
        #[arg(long)]
        start: Option<CivilDate>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = if cli.json { Output::Json } else { Output::Text };

    match run(cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output.error(e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, output: Output) -> AppResult<()> {
    init_logging(cli.verbose)?;

    let config = ChallengeConfig::load()?;
    let clock: Box<dyn Clock> = match cli.today {
        Some(today) => Box::new(FixedClock::new(today)),
        None => config.clock(),
    };
    debug!(today = %clock.today(), "clock resolved");

    match cli.command {
        Command::Challenge { action } => match action {
            ChallengeCommand::StartDate => commands::challenge::start_date(clock.as_ref(), output),
            ChallengeCommand::Status { start } => {
                commands::challenge::status(start, clock.as_ref(), output)
            }
            ChallengeCommand::Week { start, week } => {
                commands::challenge::week(start, week, output)
            }
        },
        Command::Energy { action } => match action {
            EnergyCommand::Target {
                weight_kg,
                height_cm,
                age,
                sex,
                activity,
                weekly_loss_lbs,
                strict,
            } => {
                let args = TargetArgs {
                    weight_kg,
                    height_cm,
                    age,
                    sex,
                    activity,
                    weekly_loss_lbs,
                    strict,
                };
                commands::energy::target(&args, &config.energy, output)
            }
            EnergyCommand::Goal {
                current,
                goal,
                weekly_loss,
                start,
            } => commands::energy::goal(current, goal, weekly_loss, start, clock.as_ref(), output),
        },
    }
}

/// Warn level by default, debug with `-v`; `RUST_LOG` wins when set
fn init_logging(verbose: bool) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env();
    if verbose {
        logging = logging.with_level("debug");
    } else if env::var("RUST_LOG").is_err() {
        logging = logging.with_level("warn");
    }

    logging.init().map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))
}
