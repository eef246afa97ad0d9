// ABOUTME: Trend and baseline analytics configuration: classification and risk thresholds
// ABOUTME: Slope cutoffs, progress bands, risk ratios, report windows, and goal uplift
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use serde::{Deserialize, Serialize};

/// Analytics thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Absolute slope above which a series is trending
    pub slope_threshold: f64,
    /// Prior tests of the series classifying a recorded test's trend
    pub short_term_window: usize,
    /// Prior tests plus the current one used for long-term trend percentage
    pub long_term_window: usize,
    /// Minimum points for a long-term trend percentage
    pub long_term_min_points: usize,
    /// Target progress at or above which a metric is a strength
    pub strength_progress: f64,
    /// Target progress below which a metric is a weakness
    pub weakness_progress: f64,
    /// Target progress below which a metric is a priority area
    pub priority_progress: f64,
    /// Ages above this receive recovery recommendations
    pub recovery_age_above: u32,
    /// Drop from the prior test, percent, that counts as a decline
    pub decline_percent: f64,
    /// Share of declining tests that raises the decline flag
    pub decline_ratio: f64,
    /// Perceived exertion above which a session counts as hard
    pub high_exertion_rpe: u8,
    /// Share of hard sessions that raises the overtraining flag
    pub overtraining_ratio: f64,
    /// Improvement above which a test is excellent
    pub excellent_improvement: f64,
    /// Improvement below which a test is concerning
    pub concerning_improvement: f64,
    /// Tests feeding next-period goals
    pub goal_tests: usize,
    /// Relative uplift for next-period goals
    pub goal_uplift: f64,
    /// Weeks allowed to reach a next-period goal
    pub goal_timeframe_weeks: u32,
    /// Days counted as recent in performance stats
    pub recent_window_days: i64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            slope_threshold: 0.1,
            short_term_window: 3,
            long_term_window: 7,
            long_term_min_points: 3,
            strength_progress: 80.0,
            weakness_progress: 30.0,
            priority_progress: 50.0,
            recovery_age_above: 35,
            decline_percent: -5.0,
            decline_ratio: 0.5,
            high_exertion_rpe: 8,
            overtraining_ratio: 0.7,
            excellent_improvement: 5.0,
            concerning_improvement: -5.0,
            goal_tests: 3,
            goal_uplift: 0.03,
            goal_timeframe_weeks: 4,
            recent_window_days: 28,
        }
    }
}
