// ABOUTME: Exercise load optimization from base prescriptions and athlete-specific factors
// ABOUTME: Experience, age, and recent-trend scaling of sets, reps, intensity with progression advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use tracing::debug;

use peakform_core::models::{
    AthleteProfile, ExerciseType, IntensityLevel, LoadParameters, PerformanceHistory,
    ProgressionGuidance, RepScheme,
};

use crate::config::{BaseLoad, EngineConfig, LoadOptimizerConfig};
use crate::statistics::StatisticalAnalyzer;

/// Upper bound of the intensity percentage
const MAX_INTENSITY_PERCENT: f64 = 100.0;

/// Exercise load optimizer
pub struct LoadOptimizer {
    config: LoadOptimizerConfig,
}

impl Default for LoadOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadOptimizer {
    /// Optimizer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().load.clone())
    }

    /// Optimizer using explicit tables
    #[must_use]
    pub const fn with_config(config: LoadOptimizerConfig) -> Self {
        Self { config }
    }

    /// Load parameters for `exercise_type`
    ///
    /// Missing fitness level and age fall back to the configured profile
    /// defaults. `history` feeds the performance factor through the
    /// short-term trend of the series of its latest record.
    #[must_use]
    pub fn optimize(
        &self,
        exercise_type: ExerciseType,
        profile: &AthleteProfile,
        history: Option<&PerformanceHistory>,
    ) -> LoadParameters {
        let base = self.base_load(exercise_type, profile);
        let age = profile.age.unwrap_or(self.config.profile_defaults.age);

        let experience_factor =
            (f64::from(profile.years_experience) / self.config.full_experience_years).min(1.0);
        let age_factor = if age < self.config.age_factor_from {
            1.0
        } else {
            self.config.age_factor
        };
        let performance_factor = self.performance_factor(history);

        let sets = ((f64::from(base.sets) * experience_factor * age_factor).round() as u32).max(1);
        let reps = self.scale_reps(base.reps, performance_factor);
        let intensity_percent =
            (base.intensity_percent * performance_factor).clamp(0.0, MAX_INTENSITY_PERCENT);
        let progression = ProgressionGuidance::from_load_factor(performance_factor);

        debug!(
            exercise_type = %exercise_type,
            sets,
            reps = %reps,
            intensity_percent,
            load_factor = performance_factor,
            "Optimized exercise load"
        );

        LoadParameters {
            exercise_type,
            sets,
            reps,
            intensity_percent,
            intensity: IntensityLevel::from_percent(intensity_percent),
            rest_seconds: base.rest_seconds,
            load_factor: performance_factor,
            progression_notes: progression.to_string(),
            progression,
        }
    }

    fn base_load(&self, exercise_type: ExerciseType, profile: &AthleteProfile) -> BaseLoad {
        let level = profile.fitness_level.unwrap_or_else(|| {
            debug!(
                assumed = %self.config.profile_defaults.fitness_level,
                "Profile has no fitness level"
            );
            self.config.profile_defaults.fitness_level
        });
        self.config
            .base_loads
            .get(&exercise_type)
            .map_or_else(
                || {
                    debug!(exercise_type = %exercise_type, "Using default load prescription");
                    self.config.default_load
                },
                |bucket| *bucket.get(level),
            )
    }

    /// 1.0 without history, raised when improving and lowered on a steep decline
    fn performance_factor(&self, history: Option<&PerformanceHistory>) -> f64 {
        let Some(history) = history.filter(|h| h.len() >= 2) else {
            return 1.0;
        };
        let trend = StatisticalAnalyzer::recent_trend_percent(history, self.config.trend_window);
        if trend > 0.0 {
            self.config.improving_factor
        } else if trend < self.config.decline_threshold_percent {
            self.config.declining_factor
        } else {
            1.0
        }
    }

    fn scale_reps(&self, reps: RepScheme, factor: f64) -> RepScheme {
        let scale = |n: u32| ((f64::from(n) * factor) as u32).max(1);
        match reps {
            RepScheme::Fixed { reps } => RepScheme::Fixed { reps: scale(reps) },
            RepScheme::Range { min, max } => {
                let min = scale(min);
                RepScheme::Range {
                    min,
                    max: scale(max).max(min + self.config.min_rep_range_width),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use peakform_core::models::{FitnessLevel, Metric, PerformanceRecord, TestType};

    fn profile(level: Option<FitnessLevel>, age: u32, years: u32) -> AthleteProfile {
        AthleteProfile {
            age: Some(age),
            height_cm: 176.0,
            weight_kg: 72.0,
            sport: None,
            fitness_level: level,
            years_experience: years,
            training_frequency: None,
            has_injuries: false,
            injury_description: None,
        }
    }

    fn history(values: &[f64]) -> PerformanceHistory {
        let start = Utc.with_ymd_and_hms(2025, 3, 3, 8, 0, 0).unwrap();
        PerformanceHistory::from_chronological(
            values
                .iter()
                .enumerate()
                .map(|(i, &value)| PerformanceRecord {
                    test_type: TestType::Strength1rm,
                    metric: Metric::Strength,
                    value,
                    unit: "kg".into(),
                    timestamp: start + Duration::weeks(i as i64),
                })
                .collect(),
        )
    }

    fn optimizer() -> LoadOptimizer {
        LoadOptimizer::with_config(LoadOptimizerConfig::default())
    }

    #[test]
    fn test_intermediate_strength_without_history() {
        let load = optimizer().optimize(
            ExerciseType::Strength,
            &profile(Some(FitnessLevel::Intermediate), 25, 5),
            None,
        );
        assert_eq!(load.sets, 2);
        assert_eq!(load.reps, RepScheme::Range { min: 8, max: 12 });
        assert_eq!(load.intensity, IntensityLevel::High);
        assert_eq!(load.rest_seconds, 120);
        assert_eq!(load.progression, ProgressionGuidance::Maintain);
        assert_eq!(load.progression_notes, "Maintain current load and focus on form");
    }

    #[test]
    fn test_improving_elite_power() {
        let load = optimizer().optimize(
            ExerciseType::Power,
            &profile(Some(FitnessLevel::Elite), 32, 10),
            Some(&history(&[100.0, 104.0, 108.0])),
        );
        assert_eq!(load.sets, 5);
        assert_eq!(load.reps, RepScheme::Range { min: 3, max: 5 });
        assert!(load.intensity_percent <= 100.0);
        assert_eq!(load.intensity, IntensityLevel::Maximal);
        assert_eq!(load.progression, ProgressionGuidance::Increase { percent: 10.0 });
    }

    #[test]
    fn test_declining_beginner_strength() {
        let load = optimizer().optimize(
            ExerciseType::Strength,
            &profile(Some(FitnessLevel::Beginner), 24, 0),
            Some(&history(&[100.0, 95.0, 90.0])),
        );
        assert_eq!(load.sets, 1);
        assert_eq!(load.reps, RepScheme::Fixed { reps: 10 });
        assert_eq!(load.intensity, IntensityLevel::Low);
        assert_eq!(load.progression, ProgressionGuidance::Reduce { percent: 10.0 });
    }

    #[test]
    fn test_fallbacks_for_unknown_type_and_missing_level() {
        let load = optimizer().optimize(ExerciseType::Sprint, &profile(None, 25, 10), None);
        assert_eq!(load.sets, 3);
        assert_eq!(load.reps, RepScheme::Fixed { reps: 10 });
        assert_eq!(load.rest_seconds, 90);

        let endurance = optimizer().optimize(ExerciseType::Endurance, &profile(None, 25, 10), None);
        assert_eq!(endurance.reps, RepScheme::Fixed { reps: 20 });
    }

    #[test]
    fn test_trend_window_follows_config() {
        let athlete = profile(Some(FitnessLevel::Intermediate), 28, 10);
        let tests = history(&[120.0, 100.0, 104.0, 108.0]);

        let default_window = optimizer().optimize(ExerciseType::Power, &athlete, Some(&tests));
        assert!((default_window.load_factor - 1.1).abs() < f64::EPSILON);

        let wide = LoadOptimizer::with_config(LoadOptimizerConfig {
            trend_window: 4,
            ..LoadOptimizerConfig::default()
        });
        let wide_window = wide.optimize(ExerciseType::Power, &athlete, Some(&tests));
        assert!((wide_window.load_factor - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mixed_series_history_uses_latest_series_only() {
        let start = Utc.with_ymd_and_hms(2025, 3, 3, 8, 0, 0).unwrap();
        let record = |test_type, metric, value, week| PerformanceRecord {
            test_type,
            metric,
            value,
            unit: "u".into(),
            timestamp: start + Duration::weeks(week),
        };
        let tests = PerformanceHistory::from_chronological(vec![
            record(TestType::VerticalJump, Metric::Power, 50.0, 0),
            record(TestType::Sprint20m, Metric::Speed, 3.0, 1),
            record(TestType::Sprint20m, Metric::Speed, 2.9, 2),
            record(TestType::VerticalJump, Metric::Power, 45.0, 3),
        ]);
        // Latest series is the jump: 50cm -> 45cm is a 10% decline
        let load = optimizer().optimize(
            ExerciseType::Power,
            &profile(Some(FitnessLevel::Intermediate), 28, 10),
            Some(&tests),
        );
        assert!((load.load_factor - 0.9).abs() < f64::EPSILON);
        assert_eq!(load.progression, ProgressionGuidance::Reduce { percent: 10.0 });
    }

    #[test]
    fn test_small_decline_keeps_load() {
        let load = optimizer().optimize(
            ExerciseType::Power,
            &profile(Some(FitnessLevel::Intermediate), 28, 10),
            Some(&history(&[100.0, 99.0, 97.0])),
        );
        assert!((load.load_factor - 1.0).abs() < f64::EPSILON);
        assert_eq!(load.reps, RepScheme::Range { min: 6, max: 8 });
    }
}
