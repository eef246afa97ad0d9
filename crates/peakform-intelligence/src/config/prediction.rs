// ABOUTME: Improvement predictor configuration: base weekly rates and scaling tables
// ABOUTME: Age tiers, level multipliers, training and sport factors, dampeners, and confidence bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use peakform_core::models::{Metric, SportType, TrainingType};

use super::tables::LevelTable;

/// Multiplier applied when a value exceeds a threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdFactor {
    /// Applies when the value is strictly above this
    pub above: u32,
    /// Multiplier applied
    pub factor: f64,
}

impl ThresholdFactor {
    /// `factor` when `value > above`, otherwise 1
    #[must_use]
    pub fn apply(&self, value: u32) -> f64 {
        if value > self.above {
            self.factor
        } else {
            1.0
        }
    }
}

/// Confidence score parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Starting confidence
    pub base: f64,
    /// Years of experience that earn the bonus
    pub experience_bonus_min_years: u32,
    /// Bonus for experienced athletes
    pub experience_bonus: f64,
    /// Ages above this lose confidence
    pub age_penalty_above: u32,
    /// Confidence removed for older athletes
    pub age_penalty: f64,
    /// Per-metric confidence multipliers
    pub metric_factors: BTreeMap<Metric, f64>,
    /// Factor used for metrics without an entry
    pub default_metric_factor: f64,
    /// Lower clamp
    pub min: f64,
    /// Upper clamp
    pub max: f64,
}

/// Improvement predictor tables and constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Weekly improvement percentage per metric before scaling
    pub base_weekly_rates: BTreeMap<Metric, f64>,
    /// Age tiers applied multiplicatively to base rates
    pub age_tiers: Vec<ThresholdFactor>,
    /// Base-rate multiplier per fitness level
    pub level_multipliers: LevelTable<f64>,
    /// Training type to metric multipliers
    pub training_multipliers: BTreeMap<TrainingType, BTreeMap<Metric, f64>>,
    /// Sport to metric factors
    pub sport_factors: BTreeMap<SportType, BTreeMap<Metric, f64>>,
    /// Dampener on total improvement for experienced athletes
    pub experience_dampener: ThresholdFactor,
    /// Dampener on total improvement for older athletes
    pub age_dampener: ThresholdFactor,
    /// Confidence score parameters
    pub confidence: ConfidenceConfig,
}

fn factors(entries: impl IntoIterator<Item = (Metric, f64)>) -> BTreeMap<Metric, f64> {
    entries.into_iter().collect()
}

impl Default for PredictionConfig {
    fn default() -> Self {
        use Metric::{Agility, Endurance, Flexibility, Power, Speed, Strength};

        Self {
            base_weekly_rates: factors([
                (Power, 2.0),
                (Speed, 1.5),
                (Agility, 1.8),
                (Endurance, 2.5),
                (Strength, 2.2),
                (Flexibility, 1.0),
            ]),
            age_tiers: vec![
                ThresholdFactor {
                    above: 30,
                    factor: 0.9,
                },
                ThresholdFactor {
                    above: 40,
                    factor: 0.8,
                },
            ],
            level_multipliers: LevelTable {
                beginner: 1.5,
                intermediate: 1.0,
                advanced: 0.7,
                elite: 0.5,
            },
            training_multipliers: BTreeMap::from([
                (
                    TrainingType::Strength,
                    factors([
                        (Power, 1.3),
                        (Strength, 1.5),
                        (Speed, 1.1),
                        (Agility, 0.9),
                        (Endurance, 0.8),
                    ]),
                ),
                (
                    TrainingType::Hiit,
                    factors([
                        (Power, 1.4),
                        (Speed, 1.3),
                        (Agility, 1.2),
                        (Endurance, 1.2),
                        (Strength, 1.0),
                    ]),
                ),
                (
                    TrainingType::Endurance,
                    factors([
                        (Endurance, 1.5),
                        (Speed, 1.1),
                        (Power, 0.8),
                        (Agility, 0.9),
                        (Strength, 0.9),
                    ]),
                ),
                (
                    TrainingType::Agility,
                    factors([
                        (Agility, 1.5),
                        (Speed, 1.2),
                        (Power, 1.1),
                        (Endurance, 0.9),
                        (Strength, 0.9),
                    ]),
                ),
            ]),
            sport_factors: BTreeMap::from([
                (
                    SportType::Football,
                    factors([(Power, 1.2), (Strength, 1.3), (Agility, 1.2), (Speed, 1.1)]),
                ),
                (
                    SportType::Basketball,
                    factors([(Agility, 1.3), (Power, 1.2), (Endurance, 1.1), (Speed, 1.1)]),
                ),
                (
                    SportType::Tennis,
                    factors([
                        (Agility, 1.4),
                        (Speed, 1.2),
                        (Endurance, 1.1),
                        (Flexibility, 1.2),
                    ]),
                ),
                (
                    SportType::Running,
                    factors([(Endurance, 1.4), (Speed, 1.2), (Power, 0.9)]),
                ),
                (
                    SportType::Cycling,
                    factors([(Endurance, 1.3), (Power, 1.1), (Strength, 1.1)]),
                ),
                (
                    SportType::Swimming,
                    factors([(Endurance, 1.3), (Flexibility, 1.2), (Strength, 1.1)]),
                ),
            ]),
            experience_dampener: ThresholdFactor {
                above: 5,
                factor: 0.8,
            },
            age_dampener: ThresholdFactor {
                above: 30,
                factor: 0.9,
            },
            confidence: ConfidenceConfig {
                base: 0.7,
                experience_bonus_min_years: 3,
                experience_bonus: 0.1,
                age_penalty_above: 35,
                age_penalty: 0.1,
                metric_factors: factors([
                    (Strength, 0.8),
                    (Endurance, 0.75),
                    (Power, 0.7),
                    (Agility, 0.65),
                    (Speed, 0.7),
                    (Flexibility, 0.6),
                ]),
                default_metric_factor: 0.7,
                min: 0.3,
                max: 0.95,
            },
        }
    }
}
