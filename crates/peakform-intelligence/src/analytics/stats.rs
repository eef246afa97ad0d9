// ABOUTME: Summary statistics across an athlete's full test history and baselines
// ABOUTME: Test totals and distribution, recent improvement rate, and target achievement rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use peakform_core::math::{percentage, round_to};
use peakform_core::models::{Baseline, PerformanceHistory, TestType};

use super::improvements_from_previous;
use crate::config::AnalyticsConfig;

/// Improvement over the recent window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentImprovement {
    /// Tests in the recent window
    pub total_recent_tests: usize,
    /// Recent tests that beat the previous test of their series
    pub improved_tests: usize,
    /// Improved share, percent
    pub improvement_rate: f64,
}

/// Short-term target achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetsAchieved {
    /// Baselines considered
    pub total_targets: usize,
    /// Baselines at 100% progress
    pub achieved_targets: usize,
    /// Achieved share, percent
    pub achievement_rate: f64,
}

/// Summary of all tests and baselines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Tests recorded
    pub total_tests: usize,
    /// Tests per test type, only types with at least one test
    pub test_distribution: BTreeMap<TestType, usize>,
    /// Baselines established
    pub total_baselines: usize,
    /// Improvement in the recent window
    pub recent_performance: RecentImprovement,
    /// Target achievement
    pub goals: TargetsAchieved,
}

/// Summarize `history` and `baselines` as of `now`
///
/// A recent window reaching past the representable range covers the whole
/// history.
#[must_use]
pub fn performance_stats(
    history: &PerformanceHistory,
    baselines: &[Baseline],
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> PerformanceStats {
    let mut test_distribution = BTreeMap::new();
    for record in history.records() {
        *test_distribution.entry(record.test_type).or_insert(0) += 1;
    }

    let recent_start = Duration::try_days(config.recent_window_days.max(0))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let (recent, improved) = history
        .records()
        .iter()
        .zip(improvements_from_previous(history))
        .filter(|(r, _)| r.timestamp >= recent_start && r.timestamp <= now)
        .fold((0, 0), |(total, improved), (_, improvement)| {
            (total + 1, improved + usize::from(improvement.is_some_and(|i| i > 0.0)))
        });

    let achieved = baselines.iter().filter(|b| b.progress() >= 100.0).count();

    PerformanceStats {
        total_tests: history.len(),
        test_distribution,
        total_baselines: baselines.len(),
        recent_performance: RecentImprovement {
            total_recent_tests: recent,
            improved_tests: improved,
            improvement_rate: round_to(percentage(improved, recent), 2),
        },
        goals: TargetsAchieved {
            total_targets: baselines.len(),
            achieved_targets: achieved,
            achievement_rate: round_to(percentage(achieved, baselines.len()), 2),
        },
    }
}
