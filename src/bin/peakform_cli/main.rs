// ABOUTME: PeakForm CLI - command-line host for the training engine
// ABOUTME: Reads profile and history JSON files and prints plans, predictions, loads, and analytics as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence
//!
//! Usage:
//! ```bash
//! # Generate the plan for week 5
//! peakform-cli plan --profile athlete.json --week 5
//!
//! # Predict 8 weeks of power training
//! peakform-cli predict --profile athlete.json --training-type power --weeks 8
//!
//! # Prescribe a load for an explosive exercise, adapted to recent tests
//! peakform-cli load --profile athlete.json --exercise-type explosive --history tests.json
//!
//! # Analyze a history stored newest first
//! peakform-cli --order newest-first analyze --history tests.json --baselines baselines.json
//!
//! # Monthly report ending now
//! peakform-cli report --history tests.json --sessions sessions.json --period monthly
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use uuid::Uuid;

use peakform::analytics::ReportPeriod;
use peakform::logging::LoggingConfig;
use peakform::models::{ExerciseType, TrainingType};
use peakform::EngineConfig;

use helpers::input::{parse_enum, HistoryOrder};

#[derive(Parser)]
#[command(
    name = "peakform-cli",
    about = "PeakForm training engine CLI",
    long_about = "Generates periodized training plans, improvement predictions, exercise loads, and performance analytics from JSON input files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file overlaying the built-in tables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ordering of records in history files
    #[arg(long, global = true, value_enum, default_value_t = HistoryOrder::Unordered)]
    order: HistoryOrder,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate the weekly training plan
    Plan {
        /// Athlete profile JSON
        #[arg(long)]
        profile: PathBuf,

        /// Program week (1-based)
        #[arg(long, default_value = "1")]
        week: u32,

        /// Performance history JSON (enables adaptive adjustments)
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Predict improvement per metric
    Predict {
        /// Athlete profile JSON
        #[arg(long)]
        profile: PathBuf,

        /// Training type (e.g. "power", "`sport_specific`")
        #[arg(long, value_parser = parse_enum::<TrainingType>)]
        training_type: TrainingType,

        /// Weeks ahead
        #[arg(long, default_value = "4")]
        weeks: u32,
    },

    /// Optimize load parameters for an exercise type
    Load {
        /// Athlete profile JSON
        #[arg(long)]
        profile: PathBuf,

        /// Exercise type (e.g. "strength", "`agility_drill`")
        #[arg(long, value_parser = parse_enum::<ExerciseType>)]
        exercise_type: ExerciseType,

        /// Performance history JSON
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Analyze a performance history
    Analyze {
        /// Performance history JSON
        #[arg(long)]
        history: PathBuf,

        /// Baselines JSON
        #[arg(long)]
        baselines: Option<PathBuf>,

        /// Athlete profile JSON (enables recovery age checks)
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Record a single test result
    Record {
        /// Athlete profile JSON
        #[arg(long)]
        profile: PathBuf,

        /// Performance record JSON
        #[arg(long)]
        test: PathBuf,

        /// Athlete identifier (generated when omitted)
        #[arg(long)]
        athlete_id: Option<Uuid>,

        /// Prior performance history JSON
        #[arg(long)]
        history: Option<PathBuf>,

        /// Existing baseline JSON for this test series
        #[arg(long)]
        baseline: Option<PathBuf>,
    },

    /// Build a weekly, monthly, or quarterly report
    Report {
        /// Performance history JSON
        #[arg(long)]
        history: PathBuf,

        /// Session logs JSON
        #[arg(long)]
        sessions: Option<PathBuf>,

        /// Report period
        #[arg(long, default_value = "monthly")]
        period: ReportPeriod,

        /// Period end as RFC 3339 (defaults to now)
        #[arg(long)]
        end: Option<String>,
    },

    /// Summary statistics over history and baselines
    Stats {
        /// Performance history JSON
        #[arg(long)]
        history: PathBuf,

        /// Baselines JSON
        #[arg(long)]
        baselines: Option<PathBuf>,

        /// Reference time as RFC 3339 (defaults to now)
        #[arg(long)]
        now: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(error = %format!("{error:#}"), "Command failed");
            helpers::output::print_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "Loading engine configuration");
            EngineConfig::from_file(path)?.validated()?
        }
        None => EngineConfig::global().clone(),
    };
    let order = cli.order;

    match cli.command {
        Command::Plan {
            profile,
            week,
            history,
        } => commands::training::plan(&config, &profile, week, history.as_deref(), order)?,
        Command::Predict {
            profile,
            training_type,
            weeks,
        } => commands::training::predict(&config, &profile, training_type, weeks)?,
        Command::Load {
            profile,
            exercise_type,
            history,
        } => commands::training::load(
            &config,
            &profile,
            exercise_type,
            history.as_deref(),
            order,
        )?,
        Command::Analyze {
            history,
            baselines,
            profile,
        } => commands::analytics::analyze(
            &config,
            &history,
            order,
            baselines.as_deref(),
            profile.as_deref(),
        )?,
        Command::Record {
            profile,
            test,
            athlete_id,
            history,
            baseline,
        } => commands::analytics::record(
            &config,
            &profile,
            &test,
            athlete_id.unwrap_or_else(Uuid::new_v4),
            history.as_deref(),
            order,
            baseline.as_deref(),
        )?,
        Command::Report {
            history,
            sessions,
            period,
            end,
        } => commands::analytics::report(
            &config,
            &history,
            order,
            sessions.as_deref(),
            period,
            end.as_deref(),
        )?,
        Command::Stats {
            history,
            baselines,
            now,
        } => commands::analytics::stats(
            &config,
            &history,
            order,
            baselines.as_deref(),
            now.as_deref(),
        )?,
    }

    Ok(())
}
