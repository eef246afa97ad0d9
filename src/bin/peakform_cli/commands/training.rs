// ABOUTME: Training commands for peakform-cli
// ABOUTME: Weekly plan generation, improvement prediction, and exercise load optimization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use std::path::Path;

use anyhow::Result;
use tracing::info;

use peakform::models::{AthleteProfile, ExerciseType, TrainingType};
use peakform::{EngineConfig, ImprovementPredictor, LoadOptimizer, PlanGenerator};

use crate::helpers::input::{read_json, read_optional_history, HistoryOrder};
use crate::helpers::output::print_json;

/// Generate and print the plan for `week`
pub fn plan(
    config: &EngineConfig,
    profile: &Path,
    week: u32,
    history: Option<&Path>,
    order: HistoryOrder,
) -> Result<()> {
    let profile: AthleteProfile = read_json(profile)?;
    let history = read_optional_history(history, order)?;

    let plan =
        PlanGenerator::with_config(config.plan.clone()).generate(&profile, week, history.as_ref())?;
    info!(week, sessions = plan.sessions.len(), "Plan ready");
    print_json(&plan)
}

/// Predict and print per-metric improvement
pub fn predict(
    config: &EngineConfig,
    profile: &Path,
    training_type: TrainingType,
    weeks: u32,
) -> Result<()> {
    let profile: AthleteProfile = read_json(profile)?;
    let predictions = ImprovementPredictor::with_config(config.prediction.clone()).predict(
        &profile,
        training_type,
        weeks,
    )?;
    print_json(&predictions)
}

/// Optimize and print the load for one exercise type
pub fn load(
    config: &EngineConfig,
    profile: &Path,
    exercise_type: ExerciseType,
    history: Option<&Path>,
    order: HistoryOrder,
) -> Result<()> {
    let profile: AthleteProfile = read_json(profile)?;
    let history = read_optional_history(history, order)?;

    let load = LoadOptimizer::with_config(config.load.clone()).optimize(
        exercise_type,
        &profile,
        history.as_ref(),
    );
    print_json(&load)
}
