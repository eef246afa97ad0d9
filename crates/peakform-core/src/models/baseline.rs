// ABOUTME: Per-series performance baseline with targets and direction-aware current best
// ABOUTME: Baseline establishment, best tracking, improvement, and capped target progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FitnessLevel, Metric, PerformanceRecord, SeriesKey, TestType};
use crate::math::round_to;

/// Target horizon for a baseline goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TargetHorizon {
    /// Four to six weeks
    #[default]
    ShortTerm,
    /// Around three months
    MediumTerm,
    /// Six to twelve months
    LongTerm,
}

/// Numeric targets for one baseline
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineTargets {
    /// Short-term target value
    #[serde(default)]
    pub short_term: Option<f64>,
    /// Medium-term target value
    #[serde(default)]
    pub medium_term: Option<f64>,
    /// Long-term target value
    #[serde(default)]
    pub long_term: Option<f64>,
}

impl BaselineTargets {
    /// Target for a horizon
    #[must_use]
    pub const fn get(&self, horizon: TargetHorizon) -> Option<f64> {
        match horizon {
            TargetHorizon::ShortTerm => self.short_term,
            TargetHorizon::MediumTerm => self.medium_term,
            TargetHorizon::LongTerm => self.long_term,
        }
    }
}

/// Reference value for an athlete's (test type, metric) series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// Owning athlete
    pub athlete_id: Uuid,
    /// Test performed
    pub test_type: TestType,
    /// Metric recorded
    pub metric: Metric,
    /// First recorded value
    pub baseline_value: f64,
    /// Unit of the baseline value
    pub unit: String,
    /// When the baseline was recorded
    pub baseline_date: DateTime<Utc>,
    /// Athlete age when the baseline was recorded
    #[serde(default)]
    pub age_at_baseline: Option<u32>,
    /// Athlete fitness level when the baseline was recorded
    #[serde(default)]
    pub fitness_level_at_baseline: Option<FitnessLevel>,
    /// Goals relative to the baseline
    #[serde(default)]
    pub targets: BaselineTargets,
    /// Best value seen since the baseline, direction aware
    #[serde(default)]
    pub current_best: Option<f64>,
    /// When the current best was recorded
    #[serde(default)]
    pub current_best_date: Option<DateTime<Utc>>,
    /// Number of follow-up tests folded into this baseline
    #[serde(default)]
    pub tests_count: u32,
}

impl Baseline {
    /// Establish a new baseline from the first record of a series
    ///
    /// `current_best` starts unset rather than at the baseline value, so the
    /// first follow-up test becomes the best even when it is worse than the
    /// baseline.
    #[must_use]
    pub fn establish(
        athlete_id: Uuid,
        record: &PerformanceRecord,
        age: Option<u32>,
        fitness_level: Option<FitnessLevel>,
    ) -> Self {
        Self {
            athlete_id,
            test_type: record.test_type,
            metric: record.metric,
            baseline_value: record.value,
            unit: record.unit.clone(),
            baseline_date: record.timestamp,
            age_at_baseline: age,
            fitness_level_at_baseline: fitness_level,
            targets: BaselineTargets::default(),
            current_best: None,
            current_best_date: None,
            tests_count: 0,
        }
    }

    /// Series this baseline tracks
    #[must_use]
    pub const fn key(&self) -> SeriesKey {
        SeriesKey {
            test_type: self.test_type,
            metric: self.metric,
        }
    }

    /// Replace the targets
    #[must_use]
    pub const fn with_targets(mut self, targets: BaselineTargets) -> Self {
        self.targets = targets;
        self
    }

    /// Fold a new test value into the baseline
    ///
    /// The first value always becomes the current best. After that it only
    /// moves when the value is strictly better in the test's direction. The
    /// test count always increases.
    pub fn update_current_best(&mut self, value: f64, date: DateTime<Utc>) -> bool {
        let should_update = self
            .current_best
            .is_none_or(|best| self.test_type.is_better(value, best));
        if should_update {
            self.current_best = Some(value);
            self.current_best_date = Some(date);
        }
        self.tests_count += 1;
        should_update
    }

    /// Improvement of the current best over the baseline value, percent
    ///
    /// 0 when no best is recorded yet or the baseline value is 0.
    #[must_use]
    pub fn current_improvement(&self) -> f64 {
        match self.current_best {
            Some(best) if self.baseline_value != 0.0 => {
                let raw = if self.test_type.is_time_based() {
                    (self.baseline_value - best) / self.baseline_value
                } else {
                    (best - self.baseline_value) / self.baseline_value
                };
                round_to(raw * 100.0, 2)
            }
            _ => 0.0,
        }
    }

    /// Progress toward the target of `horizon`, percent in `[0, 100]`
    ///
    /// 0 without a target or a recorded best. 100 when the target equals the
    /// baseline value. Both distances are absolute differences from the
    /// baseline value, so a best on the wrong side of the baseline still
    /// reports progress.
    #[must_use]
    pub fn target_progress(&self, horizon: TargetHorizon) -> f64 {
        let (Some(target), Some(best)) = (self.targets.get(horizon), self.current_best) else {
            return 0.0;
        };
        let needed = (target - self.baseline_value).abs();
        if needed == 0.0 {
            return 100.0;
        }
        let achieved = (best - self.baseline_value).abs();
        round_to(achieved / needed * 100.0, 2).min(100.0)
    }

    /// Short-term progress, the horizon used for scoring
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.target_progress(TargetHorizon::ShortTerm)
    }
}
