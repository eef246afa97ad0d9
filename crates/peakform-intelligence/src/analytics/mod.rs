// ABOUTME: Trend and baseline analytics over recorded performance tests and training sessions
// ABOUTME: History analysis, single-test recording, period reports, risk flags, and summary stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

//! # Trend & Baseline Analytics
//!
//! Every operation here is a pure function of the history, baselines and
//! sessions it is handed. Histories are [`PerformanceHistory`] values, which
//! are always chronological; callers choose the ordering of their raw records
//! when they build one.

/// History analysis: trends, strengths, weaknesses, recommendations
pub mod history;
/// Recording a single test against prior history and its baseline
pub mod recorder;
/// Weekly, monthly and quarterly reports
pub mod report;
/// Aggregate risk flags
pub mod risk;
/// Summary statistics across all tests
pub mod stats;
/// OLS trend classification
pub mod trend;

pub use history::{
    BaselinesSummary, HistoryAnalysis, HistoryAnalyzer, HistoryRecommendations, PriorityArea,
    ProgressEntry, RecoveryRecommendation, TestSummary, TrainingAdjustment,
};
pub use recorder::{
    ImmediateAction, LifestyleFactor, RecordedTest, RetestWindow, TestAnalysis, TestCategory,
    TestInsight, TestRecommendations, TestRecorder, TestTrend, TrainingEmphasis,
};
pub use report::{
    MetricImprovement, NextPeriodGoal, OverallProgress, PeriodInsight, PeriodRecommendation,
    PeriodReport, PeriodReporter, ReportPeriod,
};
pub use risk::{RiskAssessor, RiskFlag, RiskKind, RiskSeverity};
pub use stats::{performance_stats, PerformanceStats, RecentImprovement, TargetsAchieved};
pub use trend::{SeriesTrend, TrendAnalysis, TrendDirection};

use std::collections::HashMap;

use peakform_core::models::{PerformanceHistory, SeriesKey};

use crate::statistics::StatisticalAnalyzer;

/// Improvement of each record over the previous record of the same series
///
/// One entry per record, aligned with [`PerformanceHistory::records`]. The
/// first record of each series has no reference and yields `None`.
#[must_use]
pub fn improvements_from_previous(history: &PerformanceHistory) -> Vec<Option<f64>> {
    let mut last_seen: HashMap<SeriesKey, f64> = HashMap::new();
    history
        .records()
        .iter()
        .map(|record| {
            let improvement = last_seen.get(&record.key()).map(|&previous| {
                StatisticalAnalyzer::improvement_percent(record.value, previous, record.test_type)
            });
            last_seen.insert(record.key(), record.value);
            improvement
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use peakform_core::models::{Metric, PerformanceRecord, TestType};

    #[test]
    fn test_improvements_track_each_series_separately() {
        let start = Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap();
        let record = |test_type, value, day| PerformanceRecord {
            test_type,
            metric: Metric::Power,
            value,
            unit: "u".into(),
            timestamp: start + Duration::days(day),
        };
        let history = PerformanceHistory::from_chronological(vec![
            record(TestType::VerticalJump, 40.0, 0),
            record(TestType::Sprint20m, 3.0, 1),
            record(TestType::VerticalJump, 44.0, 2),
            record(TestType::Sprint20m, 3.3, 3),
        ]);
        let improvements = improvements_from_previous(&history);
        assert_eq!(improvements, vec![None, None, Some(10.0), Some(-10.0)]);
    }
}
