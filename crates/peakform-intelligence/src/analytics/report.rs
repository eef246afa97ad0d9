// ABOUTME: Weekly, monthly and quarterly performance reports over tests and training sessions
// ABOUTME: Progress totals, per-metric improvements, effectiveness, insights, risks, and next goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use peakform_core::errors::AppError;
use peakform_core::math::{mean, percentage, round_to};
use peakform_core::models::{sessions_within, Metric, PerformanceHistory, SessionLog, TestType};

use super::improvements_from_previous;
use super::risk::{RiskAssessor, RiskFlag};
use crate::config::{AnalyticsConfig, EngineConfig};
use crate::statistics::StatisticalAnalyzer;

/// Average improvement above which the period is called excellent
const EXCELLENT_PERIOD_IMPROVEMENT: f64 = 2.0;
/// Average improvement above which intensity should be kept as is
const MAINTAIN_INTENSITY_IMPROVEMENT: f64 = 5.0;
/// Completion rate above which consistency is outstanding
const OUTSTANDING_COMPLETION: f64 = 90.0;
/// Completion rate below which consistency is flagged as an insight
const LOW_COMPLETION_INSIGHT: f64 = 70.0;
/// Completion rate below which consistency becomes a recommendation
const LOW_COMPLETION_RECOMMENDATION: f64 = 80.0;

/// Effectiveness weights
const COMPLETION_WEIGHT: f64 = 0.4;
const RATING_WEIGHT: f64 = 0.3;
const IMPROVEMENT_WEIGHT: f64 = 0.3;
const RATING_SCALE: f64 = 10.0;

/// Reporting period length
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    /// Seven days
    #[default]
    Weekly,
    /// Thirty days
    Monthly,
    /// Ninety days
    Quarterly,
}

impl ReportPeriod {
    /// Days covered by the period
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Weekly => 7,
            Self::Monthly => 30,
            Self::Quarterly => 90,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportPeriod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            other => Err(AppError::invalid_input(format!(
                "invalid report period '{other}', expected weekly, monthly or quarterly"
            ))),
        }
    }
}

/// Totals for the period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallProgress {
    /// Tests recorded in the period
    pub tests_completed: usize,
    /// Sessions completed in the period
    pub sessions_completed: usize,
    /// Mean improvement over the previous test; tests without one count as 0
    pub average_improvement: f64,
    /// Session consistency score
    pub consistency_score: f64,
}

/// Improvement summary for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricImprovement {
    /// Metric recorded
    pub metric: Metric,
    /// Mean improvement, percent
    pub average_improvement: f64,
    /// Largest improvement, percent
    pub best_improvement: f64,
    /// Tests with a previous test to compare against
    pub test_count: usize,
    /// Consistency of the improvements
    pub consistency: f64,
}

/// How well training translated into results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingEffectiveness {
    /// Weighted score of completion, rating and improvement
    pub effectiveness_score: f64,
    /// Completed sessions, percent
    pub completion_rate: f64,
    /// Mean rating of completed, rated sessions
    pub average_rating: f64,
    /// Mean improvement across the period's tests
    pub average_improvement: f64,
}

/// Observation about the period
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PeriodInsight {
    /// Strong average improvement
    ExcellentImprovement,
    /// Positive average improvement
    PositiveTrend,
    /// No average improvement
    Plateau,
    /// Nearly every session completed
    OutstandingConsistency,
    /// Many sessions missed
    ConsistencyCouldImprove,
}

/// Advice for the next period
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PeriodRecommendation {
    /// Schedule a deload week or modify training
    ConsiderDeload,
    /// Keep the current training intensity
    MaintainIntensity,
    /// Complete more planned sessions
    ImproveConsistency,
}

/// Goal for the next period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextPeriodGoal {
    /// Test performed
    pub test_type: TestType,
    /// Metric recorded
    pub metric: Metric,
    /// Latest value
    pub current_value: f64,
    /// Value to reach
    pub target_value: f64,
    /// Weeks allowed
    pub timeframe_weeks: u32,
}

/// Report for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// Period length
    pub period: ReportPeriod,
    /// Start of the window, inclusive
    pub period_start: DateTime<Utc>,
    /// End of the window, inclusive
    pub period_end: DateTime<Utc>,
    /// Totals
    pub overall_progress: OverallProgress,
    /// Improvement by metric
    pub metric_improvements: Vec<MetricImprovement>,
    /// `None` without sessions in the period
    pub training_effectiveness: Option<TrainingEffectiveness>,
    /// Observations
    pub insights: Vec<PeriodInsight>,
    /// Advice
    pub recommendations: Vec<PeriodRecommendation>,
    /// Raised risk flags
    pub risk_factors: Vec<RiskFlag>,
    /// Goals for the next period
    pub next_period_goals: Vec<NextPeriodGoal>,
}

/// Builds period reports
pub struct PeriodReporter {
    config: AnalyticsConfig,
}

impl Default for PeriodReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodReporter {
    /// Reporter using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().analytics.clone())
    }

    /// Reporter using explicit thresholds
    #[must_use]
    pub const fn with_config(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Report on the `period` ending at `period_end`
    ///
    /// Improvements of tests inside the window are measured against the
    /// previous test of the same series anywhere in `history`, so tests just
    /// before the window still serve as references.
    #[must_use]
    pub fn generate(
        &self,
        period: ReportPeriod,
        period_end: DateTime<Utc>,
        history: &PerformanceHistory,
        sessions: &[SessionLog],
    ) -> PeriodReport {
        let period_start = period_end - Duration::days(period.days());
        let improvements = improvements_from_previous(history);
        let window: Vec<(usize, Option<f64>)> = history
            .records()
            .iter()
            .zip(improvements)
            .enumerate()
            .filter(|(_, (r, _))| r.timestamp >= period_start && r.timestamp <= period_end)
            .map(|(i, (_, improvement))| (i, improvement))
            .collect();
        let window_improvements: Vec<Option<f64>> = window.iter().map(|(_, i)| *i).collect();
        let period_sessions = sessions_within(sessions, period_start, period_end);

        debug!(
            period = %period,
            tests = window.len(),
            sessions = period_sessions.len(),
            "Generating period report"
        );

        let average_improvement = Self::average_improvement(&window_improvements);
        let completion_rate = Self::completion_rate(&period_sessions);

        PeriodReport {
            period,
            period_start,
            period_end,
            overall_progress: OverallProgress {
                tests_completed: window.len(),
                sessions_completed: period_sessions.iter().filter(|s| s.completed).count(),
                average_improvement: round_to(average_improvement.unwrap_or(0.0), 2),
                consistency_score: StatisticalAnalyzer::session_consistency(&period_sessions),
            },
            metric_improvements: Self::metric_improvements(history, &window),
            training_effectiveness: Self::training_effectiveness(
                &period_sessions,
                average_improvement.unwrap_or(0.0),
            ),
            insights: Self::insights(window.len(), average_improvement, completion_rate),
            recommendations: Self::recommendations(average_improvement, completion_rate),
            risk_factors: RiskAssessor::new(&self.config)
                .assess(&window_improvements, &period_sessions),
            next_period_goals: self.next_period_goals(history, &window),
        }
    }

    fn average_improvement(improvements: &[Option<f64>]) -> Option<f64> {
        let values: Vec<f64> = improvements.iter().map(|i| i.unwrap_or(0.0)).collect();
        mean(&values)
    }

    fn completion_rate(sessions: &[SessionLog]) -> Option<f64> {
        if sessions.is_empty() {
            return None;
        }
        Some(percentage(
            sessions.iter().filter(|s| s.completed).count(),
            sessions.len(),
        ))
    }

    fn metric_improvements(
        history: &PerformanceHistory,
        window: &[(usize, Option<f64>)],
    ) -> Vec<MetricImprovement> {
        let mut by_metric: BTreeMap<Metric, Vec<f64>> = BTreeMap::new();
        for (index, improvement) in window {
            if let (Some(record), Some(value)) = (history.records().get(*index), improvement) {
                by_metric.entry(record.metric).or_default().push(*value);
            }
        }

        by_metric
            .into_iter()
            .filter_map(|(metric, values)| {
                let average = mean(&values)?;
                let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                Some(MetricImprovement {
                    metric,
                    average_improvement: round_to(average, 2),
                    best_improvement: best,
                    test_count: values.len(),
                    consistency: StatisticalAnalyzer::metric_consistency(&values),
                })
            })
            .collect()
    }

    fn training_effectiveness(
        sessions: &[SessionLog],
        average_improvement: f64,
    ) -> Option<TrainingEffectiveness> {
        let completion_rate = Self::completion_rate(sessions)?;
        let ratings: Vec<f64> = sessions
            .iter()
            .filter(|s| s.completed)
            .filter_map(|s| s.rating)
            .map(f64::from)
            .collect();
        let average_rating = mean(&ratings).unwrap_or(0.0);
        let score = IMPROVEMENT_WEIGHT.mul_add(
            average_improvement.max(0.0),
            completion_rate.mul_add(COMPLETION_WEIGHT, average_rating * RATING_SCALE * RATING_WEIGHT),
        );

        Some(TrainingEffectiveness {
            effectiveness_score: round_to(score, 2),
            completion_rate: round_to(completion_rate, 2),
            average_rating: round_to(average_rating, 2),
            average_improvement: round_to(average_improvement, 2),
        })
    }

    fn insights(
        tests: usize,
        average_improvement: Option<f64>,
        completion_rate: Option<f64>,
    ) -> Vec<PeriodInsight> {
        let mut insights = Vec::new();
        if tests >= 2 {
            if let Some(avg) = average_improvement {
                insights.push(if avg > EXCELLENT_PERIOD_IMPROVEMENT {
                    PeriodInsight::ExcellentImprovement
                } else if avg > 0.0 {
                    PeriodInsight::PositiveTrend
                } else {
                    PeriodInsight::Plateau
                });
            }
        }
        match completion_rate {
            Some(rate) if rate > OUTSTANDING_COMPLETION => {
                insights.push(PeriodInsight::OutstandingConsistency);
            }
            Some(rate) if rate < LOW_COMPLETION_INSIGHT => {
                insights.push(PeriodInsight::ConsistencyCouldImprove);
            }
            _ => {}
        }
        insights
    }

    fn recommendations(
        average_improvement: Option<f64>,
        completion_rate: Option<f64>,
    ) -> Vec<PeriodRecommendation> {
        let mut recommendations = Vec::new();
        match average_improvement {
            Some(avg) if avg < 0.0 => recommendations.push(PeriodRecommendation::ConsiderDeload),
            Some(avg) if avg > MAINTAIN_INTENSITY_IMPROVEMENT => {
                recommendations.push(PeriodRecommendation::MaintainIntensity);
            }
            _ => {}
        }
        if completion_rate.is_some_and(|rate| rate < LOW_COMPLETION_RECOMMENDATION) {
            recommendations.push(PeriodRecommendation::ImproveConsistency);
        }
        recommendations
    }

    fn next_period_goals(
        &self,
        history: &PerformanceHistory,
        window: &[(usize, Option<f64>)],
    ) -> Vec<NextPeriodGoal> {
        let recent = &window[window.len().saturating_sub(self.config.goal_tests)..];
        recent
            .iter()
            .filter_map(|(index, _)| history.records().get(*index))
            .map(|record| {
                let factor = if record.test_type.is_time_based() {
                    1.0 - self.config.goal_uplift
                } else {
                    1.0 + self.config.goal_uplift
                };
                NextPeriodGoal {
                    test_type: record.test_type,
                    metric: record.metric,
                    current_value: record.value,
                    target_value: round_to(record.value * factor, 2),
                    timeframe_weeks: self.config.goal_timeframe_weeks,
                }
            })
            .collect()
    }
}
