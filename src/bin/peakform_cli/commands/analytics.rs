// ABOUTME: Analytics commands for peakform-cli
// ABOUTME: History analysis, single test recording, period reports, and summary statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use peakform::analytics::{performance_stats, ReportPeriod};
use peakform::models::{AthleteProfile, Baseline, PerformanceRecord, SessionLog};
use peakform::{EngineConfig, HistoryAnalyzer, PeriodReporter, TestRecorder};

use crate::helpers::input::{
    read_history, read_json, read_json_or_default, read_optional_history, HistoryOrder,
};
use crate::helpers::output::print_json;

/// Analyze and print a history against its baselines
pub fn analyze(
    config: &EngineConfig,
    history: &Path,
    order: HistoryOrder,
    baselines: Option<&Path>,
    profile: Option<&Path>,
) -> Result<()> {
    let history = read_history(history, order)?;
    let baselines: Vec<Baseline> = read_json_or_default(baselines)?;

    let mut analyzer = HistoryAnalyzer::with_config(config.analytics.clone());
    if let Some(path) = profile {
        analyzer = analyzer.with_profile(read_json::<AthleteProfile>(path)?);
    }
    let analysis = analyzer.analyze(&history, &baselines);
    info!(
        trends = analysis.trends.len(),
        overall_score = analysis.overall_score,
        "History analyzed"
    );
    print_json(&analysis)
}

/// Record one test and print the result with the updated baseline
#[allow(clippy::too_many_arguments)]
pub fn record(
    config: &EngineConfig,
    profile: &Path,
    record: &Path,
    athlete_id: Uuid,
    history: Option<&Path>,
    order: HistoryOrder,
    baseline: Option<&Path>,
) -> Result<()> {
    let profile: AthleteProfile = read_json(profile)?;
    let record: PerformanceRecord = read_json(record)?;
    let history = read_optional_history(history, order)?.unwrap_or_default();
    let baseline: Option<Baseline> = baseline.map(read_json).transpose()?;

    let recorded = TestRecorder::with_config(config.analytics.clone()).record(
        &profile,
        athlete_id,
        &record,
        &history,
        baseline.as_ref(),
    )?;
    print_json(&recorded)
}

/// Build and print a period report
pub fn report(
    config: &EngineConfig,
    history: &Path,
    order: HistoryOrder,
    sessions: Option<&Path>,
    period: ReportPeriod,
    end: Option<&str>,
) -> Result<()> {
    let history = read_history(history, order)?;
    let sessions: Vec<SessionLog> = read_json_or_default(sessions)?;
    let period_end = parse_timestamp(end)?;

    let report = PeriodReporter::with_config(config.analytics.clone()).generate(
        period,
        period_end,
        &history,
        &sessions,
    );
    print_json(&report)
}

/// Print summary statistics
pub fn stats(
    config: &EngineConfig,
    history: &Path,
    order: HistoryOrder,
    baselines: Option<&Path>,
    now: Option<&str>,
) -> Result<()> {
    let history = read_history(history, order)?;
    let baselines: Vec<Baseline> = read_json_or_default(baselines)?;
    let now = parse_timestamp(now)?;
    print_json(&performance_stats(&history, &baselines, now, &config.analytics))
}

/// RFC 3339 timestamp, or the current time when absent
fn parse_timestamp(value: Option<&str>) -> Result<DateTime<Utc>> {
    value.map_or_else(
        || Ok(Utc::now()),
        |raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|t| t.with_timezone(&Utc))
                .with_context(|| format!("invalid RFC 3339 timestamp: {raw}"))
        },
    )
}
