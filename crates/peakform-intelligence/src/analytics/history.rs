// ABOUTME: Whole-history analysis combining per-series trends with baseline target progress
// ABOUTME: Overall score, strengths and weaknesses, prioritized recommendations, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use peakform_core::math::{percentage, round_to};
use peakform_core::models::{AthleteProfile, Baseline, Metric, PerformanceHistory, SeriesKey, TestType};

use super::improvements_from_previous;
use super::trend::{SeriesTrend, TrendAnalysis, TrendDirection};
use crate::config::{AnalyticsConfig, EngineConfig};

/// Target progress of one baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Test performed
    pub test_type: TestType,
    /// Metric recorded
    pub metric: Metric,
    /// Short-term target progress, percent
    pub progress: f64,
    /// Current best relative to the baseline, percent
    pub improvement: f64,
}

/// Metric that is far from its target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityArea {
    /// Test performed
    pub test_type: TestType,
    /// Metric recorded
    pub metric: Metric,
    /// Remaining progress to the target, percent
    pub deficit: f64,
}

/// Adjustment to the training program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrainingAdjustment {
    /// Performance is trending down in these series
    AddressDecline {
        /// Declining series
        series: Vec<SeriesKey>,
    },
}

/// Recovery advice for older athletes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecoveryRecommendation {
    /// Space high-intensity sessions apart
    HighIntensitySpacing {
        /// Minimum hours between sessions
        min_hours: u32,
        /// Maximum hours between sessions
        max_hours: u32,
    },
    /// Schedule active recovery days
    ActiveRecoveryDays,
    /// Track sleep quality and duration
    MonitorSleep,
}

/// Recommendations derived from a history analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecommendations {
    /// Metrics furthest from their targets
    pub priority_areas: Vec<PriorityArea>,
    /// Program changes
    pub training_adjustments: Vec<TrainingAdjustment>,
    /// Recovery advice
    pub recovery: Vec<RecoveryRecommendation>,
}

/// Counts over the analyzed tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSummary {
    /// Tests analyzed
    pub total_tests: usize,
    /// Distinct test types
    pub test_types: usize,
    /// Share of tests that beat the previous test of their series, percent
    pub improvement_rate: f64,
}

/// Counts over the baselines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselinesSummary {
    /// Baselines analyzed
    pub total_baselines: usize,
    /// Baselines whose short-term target is reached
    pub targets_met: usize,
    /// Mean short-term target progress, percent
    pub average_progress: f64,
}

/// Result of [`HistoryAnalyzer::analyze`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryAnalysis {
    /// Mean target progress capped at 100
    pub overall_score: f64,
    /// Trend per series with at least two tests
    pub trends: Vec<SeriesTrend>,
    /// Baselines close to their targets
    pub strengths: Vec<ProgressEntry>,
    /// Baselines far from their targets
    pub weaknesses: Vec<ProgressEntry>,
    /// What to change
    pub recommendations: HistoryRecommendations,
    /// Test counts
    pub test_summary: TestSummary,
    /// Baseline counts
    pub baselines_summary: BaselinesSummary,
}

/// Analyzes a full performance history against the athlete's baselines
pub struct HistoryAnalyzer {
    config: AnalyticsConfig,
    profile: Option<AthleteProfile>,
}

impl Default for HistoryAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryAnalyzer {
    /// Analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().analytics.clone())
    }

    /// Analyzer using explicit thresholds
    #[must_use]
    pub const fn with_config(config: AnalyticsConfig) -> Self {
        Self {
            config,
            profile: None,
        }
    }

    /// Attach the athlete profile, enabling age-based recovery advice
    #[must_use]
    pub fn with_profile(mut self, profile: AthleteProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Analyze `history` and `baselines`
    #[must_use]
    pub fn analyze(&self, history: &PerformanceHistory, baselines: &[Baseline]) -> HistoryAnalysis {
        debug!(
            records = history.len(),
            baselines = baselines.len(),
            "Analyzing performance history"
        );

        let trends = self.series_trends(history);
        let progress: Vec<ProgressEntry> = baselines
            .iter()
            .map(|b| ProgressEntry {
                test_type: b.test_type,
                metric: b.metric,
                progress: b.progress(),
                improvement: b.current_improvement(),
            })
            .collect();

        let strengths = progress
            .iter()
            .filter(|p| p.progress >= self.config.strength_progress)
            .cloned()
            .collect();
        let weaknesses = progress
            .iter()
            .filter(|p| p.progress < self.config.weakness_progress)
            .cloned()
            .collect();

        HistoryAnalysis {
            overall_score: Self::overall_score(&progress),
            recommendations: self.recommendations(&progress, &trends),
            test_summary: Self::test_summary(history),
            baselines_summary: Self::baselines_summary(&progress),
            trends,
            strengths,
            weaknesses,
        }
    }

    /// Trend of every series with at least two tests, ordered by key
    #[must_use]
    pub fn series_trends(&self, history: &PerformanceHistory) -> Vec<SeriesTrend> {
        let mut grouped: BTreeMap<SeriesKey, Vec<f64>> = BTreeMap::new();
        for record in history.records() {
            grouped.entry(record.key()).or_default().push(record.value);
        }
        let series: Vec<(SeriesKey, Vec<f64>)> =
            grouped.into_iter().filter(|(_, v)| v.len() >= 2).collect();

        series
            .par_iter()
            .map(|(key, values)| SeriesTrend {
                test_type: key.test_type,
                metric: key.metric,
                analysis: TrendAnalysis::of_values(values, key.test_type, &self.config),
            })
            .collect()
    }

    fn overall_score(progress: &[ProgressEntry]) -> f64 {
        if progress.is_empty() {
            return 0.0;
        }
        let average = progress.iter().map(|p| p.progress).sum::<f64>() / progress.len() as f64;
        round_to(average.min(100.0), 2)
    }

    fn recommendations(
        &self,
        progress: &[ProgressEntry],
        trends: &[SeriesTrend],
    ) -> HistoryRecommendations {
        let priority_areas = progress
            .iter()
            .filter(|p| p.progress < self.config.priority_progress)
            .map(|p| PriorityArea {
                test_type: p.test_type,
                metric: p.metric,
                deficit: round_to(100.0 - p.progress, 2),
            })
            .collect();

        let declining: Vec<SeriesKey> = trends
            .iter()
            .filter(|t| t.analysis.performance_direction == TrendDirection::Declining)
            .map(|t| SeriesKey {
                test_type: t.test_type,
                metric: t.metric,
            })
            .collect();
        let training_adjustments = if declining.is_empty() {
            Vec::new()
        } else {
            vec![TrainingAdjustment::AddressDecline { series: declining }]
        };

        let needs_recovery = self
            .profile
            .as_ref()
            .is_some_and(|p| p.is_older_than(self.config.recovery_age_above));
        let recovery = if needs_recovery {
            vec![
                RecoveryRecommendation::HighIntensitySpacing {
                    min_hours: 48,
                    max_hours: 72,
                },
                RecoveryRecommendation::ActiveRecoveryDays,
                RecoveryRecommendation::MonitorSleep,
            ]
        } else {
            Vec::new()
        };

        HistoryRecommendations {
            priority_areas,
            training_adjustments,
            recovery,
        }
    }

    fn test_summary(history: &PerformanceHistory) -> TestSummary {
        let improvement_rate = if history.len() < 2 {
            0.0
        } else {
            let improved = improvements_from_previous(history)
                .into_iter()
                .flatten()
                .filter(|&i| i > 0.0)
                .count();
            round_to(percentage(improved, history.len()), 2)
        };
        TestSummary {
            total_tests: history.len(),
            test_types: history.test_types().len(),
            improvement_rate,
        }
    }

    fn baselines_summary(progress: &[ProgressEntry]) -> BaselinesSummary {
        let average_progress = if progress.is_empty() {
            0.0
        } else {
            round_to(
                progress.iter().map(|p| p.progress).sum::<f64>() / progress.len() as f64,
                2,
            )
        };
        BaselinesSummary {
            total_baselines: progress.len(),
            targets_met: progress.iter().filter(|p| p.progress >= 100.0).count(),
            average_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use peakform_core::models::{BaselineTargets, PerformanceRecord};
    use uuid::Uuid;

    fn record(test_type: TestType, metric: Metric, value: f64, day: i64) -> PerformanceRecord {
        PerformanceRecord {
            test_type,
            metric,
            value,
            unit: "u".into(),
            timestamp: Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap() + Duration::days(day),
        }
    }

    fn baseline_with_progress(metric: Metric, best: f64) -> Baseline {
        let mut baseline = Baseline::establish(
            Uuid::new_v4(),
            &record(TestType::VerticalJump, metric, 40.0, 0),
            Some(28),
            None,
        )
        .with_targets(BaselineTargets {
            short_term: Some(50.0),
            ..BaselineTargets::default()
        });
        baseline.update_current_best(best, Utc::now());
        baseline
    }

    #[test]
    fn test_strengths_weaknesses_and_priorities() {
        let baselines = [
            baseline_with_progress(Metric::Power, 49.0),
            baseline_with_progress(Metric::Strength, 42.0),
            baseline_with_progress(Metric::Agility, 44.0),
        ];
        let analysis = HistoryAnalyzer::with_config(AnalyticsConfig::default())
            .analyze(&PerformanceHistory::new(), &baselines);

        assert_eq!(analysis.strengths.len(), 1);
        assert_eq!(analysis.strengths[0].metric, Metric::Power);
        assert_eq!(analysis.weaknesses.len(), 1);
        assert_eq!(analysis.weaknesses[0].metric, Metric::Strength);
        assert_eq!(analysis.recommendations.priority_areas.len(), 2);
        assert!((analysis.recommendations.priority_areas[0].deficit - 80.0).abs() < 1e-9);
        assert!((analysis.overall_score - 50.0).abs() < 1e-9);
        assert_eq!(analysis.baselines_summary.targets_met, 0);
        assert!(analysis.recommendations.recovery.is_empty());
    }

    #[test]
    fn test_declining_series_and_summary() {
        let history = PerformanceHistory::from_chronological(vec![
            record(TestType::VerticalJump, Metric::Power, 50.0, 0),
            record(TestType::Sprint20m, Metric::Speed, 3.0, 1),
            record(TestType::VerticalJump, Metric::Power, 45.0, 2),
            record(TestType::Sprint20m, Metric::Speed, 2.8, 3),
            record(TestType::VerticalJump, Metric::Power, 40.0, 4),
            record(TestType::Flexibility, Metric::Flexibility, 20.0, 5),
        ]);
        let analysis =
            HistoryAnalyzer::with_config(AnalyticsConfig::default()).analyze(&history, &[]);

        assert_eq!(analysis.trends.len(), 2);
        assert_eq!(
            analysis.recommendations.training_adjustments,
            vec![TrainingAdjustment::AddressDecline {
                series: vec![SeriesKey {
                    test_type: TestType::VerticalJump,
                    metric: Metric::Power,
                }],
            }]
        );
        assert_eq!(analysis.test_summary.total_tests, 6);
        assert_eq!(analysis.test_summary.test_types, 3);
        assert!((analysis.test_summary.improvement_rate - 16.67).abs() < 1e-9);
        assert!(analysis.overall_score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_recovery_advice_for_older_athletes() {
        let profile = AthleteProfile {
            age: Some(41),
            height_cm: 180.0,
            weight_kg: 80.0,
            sport: None,
            fitness_level: None,
            years_experience: 12,
            training_frequency: None,
            has_injuries: false,
            injury_description: None,
        };
        let analysis = HistoryAnalyzer::with_config(AnalyticsConfig::default())
            .with_profile(profile)
            .analyze(&PerformanceHistory::new(), &[]);
        assert_eq!(analysis.recommendations.recovery.len(), 3);
        assert!(analysis.test_summary.improvement_rate.abs() < f64::EPSILON);
    }
}
