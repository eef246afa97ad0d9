// ABOUTME: Records a single performance test against prior history and the series baseline
// ABOUTME: Improvement percentages, baseline establishment or update, test analysis and advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use peakform_core::errors::{AppError, AppResult};
use peakform_core::models::{AthleteProfile, Baseline, PerformanceHistory, PerformanceRecord};

use crate::config::{AnalyticsConfig, EngineConfig};
use crate::statistics::StatisticalAnalyzer;

/// Improvement above which an insight calls out a positive change
const POSITIVE_IMPROVEMENT: f64 = 0.0;

/// Quality of a single result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    /// Large gain over the previous test
    Excellent,
    /// Small gain, flat, or first test
    Good,
    /// Large drop from the previous test
    Concerning,
}

/// Shape of the most recent prior tests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TestTrend {
    /// Non-decreasing values
    Improving,
    /// Non-increasing values
    Declining,
    /// Neither
    Variable,
    /// Too few prior tests
    Stable,
}

/// Observations about a single result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TestInsight {
    /// Improvement above the excellent threshold
    SignificantImprovement,
    /// Improvement above zero
    PositiveImprovement,
    /// Drop beyond the concerning threshold
    PerformanceDecline,
}

/// Analysis of a recorded test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAnalysis {
    /// Result quality
    pub category: TestCategory,
    /// Shape of the prior tests
    pub trend: TestTrend,
    /// Observations
    pub insights: Vec<TestInsight>,
}

/// Action to take right away
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ImmediateAction {
    /// Keep the current program
    ContinueCurrentApproach,
    /// Revisit the program
    ReviewTrainingProgram,
}

/// Where training should concentrate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingEmphasis {
    /// Keep intensity and progression on track
    MaintainProgression,
    /// Refine technique
    TechniqueRefinement,
    /// Prioritize injury prevention work
    InjuryPrevention,
}

/// Lifestyle advice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleFactor {
    /// Leave enough recovery between sessions
    AdequateRecovery,
}

/// When to repeat the test
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetestWindow {
    /// Earliest week
    pub min_weeks: u32,
    /// Latest week
    pub max_weeks: u32,
}

/// Advice following a recorded test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecommendations {
    /// Actions to take now
    pub immediate_actions: Vec<ImmediateAction>,
    /// Training emphasis
    pub training_focus: Vec<TrainingEmphasis>,
    /// Lifestyle advice
    pub lifestyle_factors: Vec<LifestyleFactor>,
    /// When to retest
    pub next_test_window: RetestWindow,
}

/// Result of [`TestRecorder::record`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedTest {
    /// The recorded test
    pub record: PerformanceRecord,
    /// Improvement over the previous test of the same series
    pub improvement_from_last_test: Option<f64>,
    /// Improvement over the baseline value
    pub improvement_from_baseline: f64,
    /// Whether this test established the baseline
    pub established_baseline: bool,
    /// Baseline after this test
    pub baseline: Baseline,
    /// Analysis of the result
    pub analysis: TestAnalysis,
    /// Advice following the result
    pub recommendations: TestRecommendations,
    /// Population percentile; never computed
    pub percentile_rank: Option<f64>,
}

/// Records tests and keeps the series baseline current
pub struct TestRecorder {
    config: AnalyticsConfig,
}

impl Default for TestRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRecorder {
    /// Recorder using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().analytics.clone())
    }

    /// Recorder using explicit thresholds
    #[must_use]
    pub const fn with_config(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Record `record` for an athlete
    ///
    /// `prior_history` holds the athlete's earlier tests and must not contain
    /// `record`. `baseline` is the current baseline of the record's series,
    /// or `None` if this is the first test of the series.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `baseline` belongs to a different series or athlete.
    pub fn record(
        &self,
        profile: &AthleteProfile,
        athlete_id: Uuid,
        record: &PerformanceRecord,
        prior_history: &PerformanceHistory,
        baseline: Option<&Baseline>,
    ) -> AppResult<RecordedTest> {
        let prior = prior_history.for_key(record.key());
        let improvement_from_last_test = prior.latest().map(|previous| {
            StatisticalAnalyzer::improvement_percent(record.value, previous.value, record.test_type)
        });

        let (baseline, improvement_from_baseline, established_baseline) = match baseline {
            Some(existing) => {
                if existing.key() != record.key() || existing.athlete_id != athlete_id {
                    return Err(AppError::invalid_input(
                        "baseline does not belong to the recorded test series",
                    )
                    .with_operation("record_test"));
                }
                let mut updated = existing.clone();
                updated.update_current_best(record.value, record.timestamp);
                let improvement = StatisticalAnalyzer::improvement_percent(
                    record.value,
                    existing.baseline_value,
                    record.test_type,
                );
                (updated, improvement, false)
            }
            None => {
                debug!(test_type = %record.test_type, metric = %record.metric, "Establishing baseline");
                (
                    Baseline::establish(athlete_id, record, profile.age, profile.fitness_level),
                    0.0,
                    true,
                )
            }
        };

        let analysis = self.analyze(improvement_from_last_test, &prior.values());
        let recommendations = self.recommend(profile, improvement_from_last_test);

        Ok(RecordedTest {
            record: record.clone(),
            improvement_from_last_test,
            improvement_from_baseline,
            established_baseline,
            baseline,
            analysis,
            recommendations,
            percentile_rank: None,
        })
    }

    /// Population percentile of a result
    ///
    /// # Errors
    ///
    /// Always returns `NotImplemented`; no population data is available.
    pub fn percentile_rank(_record: &PerformanceRecord) -> AppResult<f64> {
        Err(AppError::not_implemented("population percentile rank"))
    }

    fn analyze(&self, improvement: Option<f64>, prior_values: &[f64]) -> TestAnalysis {
        let (category, insights) = match improvement {
            Some(i) if i > self.config.excellent_improvement => {
                (TestCategory::Excellent, vec![TestInsight::SignificantImprovement])
            }
            Some(i) if i > POSITIVE_IMPROVEMENT => {
                (TestCategory::Good, vec![TestInsight::PositiveImprovement])
            }
            Some(i) if i < self.config.concerning_improvement => {
                (TestCategory::Concerning, vec![TestInsight::PerformanceDecline])
            }
            _ => (TestCategory::Good, Vec::new()),
        };

        TestAnalysis {
            category,
            trend: self.recent_trend(prior_values),
            insights,
        }
    }

    fn recent_trend(&self, prior_values: &[f64]) -> TestTrend {
        let window = self.config.short_term_window;
        if prior_values.len() < window {
            return TestTrend::Stable;
        }
        let recent = &prior_values[prior_values.len() - window..];
        if recent.windows(2).all(|w| w[0] <= w[1]) {
            TestTrend::Improving
        } else if recent.windows(2).all(|w| w[0] >= w[1]) {
            TestTrend::Declining
        } else {
            TestTrend::Variable
        }
    }

    fn recommend(&self, profile: &AthleteProfile, improvement: Option<f64>) -> TestRecommendations {
        let improved = improvement.is_some_and(|i| i > POSITIVE_IMPROVEMENT);
        let (action, mut training_focus) = if improved {
            (
                ImmediateAction::ContinueCurrentApproach,
                vec![TrainingEmphasis::MaintainProgression],
            )
        } else {
            (
                ImmediateAction::ReviewTrainingProgram,
                vec![TrainingEmphasis::TechniqueRefinement],
            )
        };
        if profile.has_injuries {
            training_focus.push(TrainingEmphasis::InjuryPrevention);
        }

        let older = profile.is_older_than(self.config.recovery_age_above);
        TestRecommendations {
            immediate_actions: vec![action],
            training_focus,
            lifestyle_factors: if older {
                vec![LifestyleFactor::AdequateRecovery]
            } else {
                Vec::new()
            },
            next_test_window: if older {
                RetestWindow {
                    min_weeks: 2,
                    max_weeks: 3,
                }
            } else {
                RetestWindow {
                    min_weeks: 1,
                    max_weeks: 2,
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use peakform_core::errors::ErrorCode;
    use peakform_core::models::{FitnessLevel, Metric, TestType};

    fn profile(age: u32, has_injuries: bool) -> AthleteProfile {
        AthleteProfile {
            age: Some(age),
            height_cm: 178.0,
            weight_kg: 74.0,
            sport: None,
            fitness_level: Some(FitnessLevel::Intermediate),
            years_experience: 4,
            training_frequency: Some(4),
            has_injuries,
            injury_description: None,
        }
    }

    fn jump(value: f64, day: i64) -> PerformanceRecord {
        PerformanceRecord {
            test_type: TestType::VerticalJump,
            metric: Metric::Power,
            value,
            unit: "cm".into(),
            timestamp: Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap() + Duration::days(day),
        }
    }

    fn recorder() -> TestRecorder {
        TestRecorder::with_config(AnalyticsConfig::default())
    }

    #[test]
    fn test_first_record_establishes_baseline() {
        let athlete = Uuid::new_v4();
        let result = recorder()
            .record(
                &profile(26, false),
                athlete,
                &jump(40.0, 0),
                &PerformanceHistory::new(),
                None,
            )
            .unwrap();
        assert!(result.established_baseline);
        assert_eq!(result.improvement_from_last_test, None);
        assert!(result.improvement_from_baseline.abs() < f64::EPSILON);
        assert_eq!(result.baseline.current_best, None);
        assert_eq!(result.baseline.age_at_baseline, Some(26));
        assert_eq!(result.analysis.category, TestCategory::Good);
        assert_eq!(result.analysis.trend, TestTrend::Stable);
        assert_eq!(
            result.recommendations.immediate_actions,
            vec![ImmediateAction::ReviewTrainingProgram]
        );
        assert_eq!(result.percentile_rank, None);
    }

    #[test]
    fn test_following_record_updates_baseline() {
        let athlete = Uuid::new_v4();
        let history = PerformanceHistory::from_chronological(vec![
            jump(40.0, 0),
            jump(41.0, 7),
            jump(42.0, 14),
        ]);
        let baseline = Baseline::establish(athlete, &jump(40.0, 0), Some(38), None);
        let result = recorder()
            .record(&profile(38, true), athlete, &jump(46.2, 21), &history, Some(&baseline))
            .unwrap();

        assert_eq!(result.improvement_from_last_test, Some(10.0));
        assert!((result.improvement_from_baseline - 15.5).abs() < 1e-9);
        assert_eq!(result.baseline.current_best, Some(46.2));
        assert_eq!(result.baseline.tests_count, 1);
        assert_eq!(result.analysis.category, TestCategory::Excellent);
        assert_eq!(result.analysis.trend, TestTrend::Improving);
        assert_eq!(
            result.recommendations.training_focus,
            vec![TrainingEmphasis::MaintainProgression, TrainingEmphasis::InjuryPrevention]
        );
        assert_eq!(result.recommendations.next_test_window.max_weeks, 3);
        assert_eq!(
            result.recommendations.lifestyle_factors,
            vec![LifestyleFactor::AdequateRecovery]
        );
    }

    #[test]
    fn test_sharp_drop_is_concerning() {
        let athlete = Uuid::new_v4();
        let history = PerformanceHistory::from_chronological(vec![
            jump(45.0, 0),
            jump(43.0, 7),
            jump(50.0, 14),
        ]);
        let result = recorder()
            .record(&profile(30, false), athlete, &jump(44.0, 21), &history, None)
            .unwrap();
        assert_eq!(result.analysis.category, TestCategory::Concerning);
        assert_eq!(result.analysis.insights, vec![TestInsight::PerformanceDecline]);
        assert_eq!(result.analysis.trend, TestTrend::Variable);
    }

    #[test]
    fn test_trend_window_follows_config() {
        let athlete = Uuid::new_v4();
        let history = PerformanceHistory::from_chronological(vec![
            jump(45.0, 0),
            jump(43.0, 7),
            jump(50.0, 14),
        ]);
        let short = TestRecorder::with_config(AnalyticsConfig {
            short_term_window: 2,
            ..AnalyticsConfig::default()
        });
        let result = short
            .record(&profile(30, false), athlete, &jump(51.0, 21), &history, None)
            .unwrap();
        assert_eq!(result.analysis.trend, TestTrend::Improving);

        let long = TestRecorder::with_config(AnalyticsConfig {
            short_term_window: 4,
            ..AnalyticsConfig::default()
        });
        let result = long
            .record(&profile(30, false), athlete, &jump(51.0, 21), &history, None)
            .unwrap();
        assert_eq!(result.analysis.trend, TestTrend::Stable);
    }

    #[test]
    fn test_mismatched_baseline_is_rejected() {
        let athlete = Uuid::new_v4();
        let mut sprint = jump(3.1, 0);
        sprint.test_type = TestType::Sprint20m;
        let baseline = Baseline::establish(athlete, &sprint, None, None);
        let err = recorder()
            .record(
                &profile(30, false),
                athlete,
                &jump(44.0, 1),
                &PerformanceHistory::new(),
                Some(&baseline),
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_percentile_rank_is_not_implemented() {
        let err = TestRecorder::percentile_rank(&jump(40.0, 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotImplemented);
    }
}
