// ABOUTME: Exercise load optimizer configuration: base prescriptions and adjustment factors
// ABOUTME: Load table keyed by exercise type and fitness level with a generic fallback entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use peakform_core::models::{ExerciseType, FitnessLevel, RepScheme};

use super::tables::{LevelBucket, LevelTable};

/// Base load prescription before athlete-specific scaling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseLoad {
    /// Working sets
    pub sets: u32,
    /// Repetition prescription
    pub reps: RepScheme,
    /// Intensity, percent of maximal effort
    pub intensity_percent: f64,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
}

/// Fallback values used when the profile lacks a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadProfileDefaults {
    /// Fitness level assumed when absent
    pub fitness_level: FitnessLevel,
    /// Age assumed when absent
    pub age: u32,
}

/// Exercise load optimizer tables and constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptimizerConfig {
    /// Base prescriptions by exercise type
    pub base_loads: BTreeMap<ExerciseType, LevelBucket<BaseLoad>>,
    /// Prescription for exercise types without an entry
    pub default_load: BaseLoad,
    /// Years of experience that yield the full experience factor
    pub full_experience_years: f64,
    /// Athletes at or above this age get the age factor
    pub age_factor_from: u32,
    /// Sets multiplier for older athletes
    pub age_factor: f64,
    /// Most recent tests of the series feeding the trend
    pub trend_window: usize,
    /// Load factor when the recent trend is positive
    pub improving_factor: f64,
    /// Trend percentage below which load is reduced
    pub decline_threshold_percent: f64,
    /// Load factor when the recent trend is below the decline threshold
    pub declining_factor: f64,
    /// Minimum gap between the ends of a rep range
    pub min_rep_range_width: u32,
    /// Soft defaults for incomplete profiles
    pub profile_defaults: LoadProfileDefaults,
}

const fn fixed(sets: u32, reps: u32, intensity_percent: f64, rest_seconds: u32) -> BaseLoad {
    BaseLoad {
        sets,
        reps: RepScheme::Fixed { reps },
        intensity_percent,
        rest_seconds,
    }
}

const fn range(
    sets: u32,
    min: u32,
    max: u32,
    intensity_percent: f64,
    rest_seconds: u32,
) -> BaseLoad {
    BaseLoad {
        sets,
        reps: RepScheme::Range { min, max },
        intensity_percent,
        rest_seconds,
    }
}

impl Default for LoadOptimizerConfig {
    fn default() -> Self {
        Self {
            base_loads: BTreeMap::from([
                (
                    ExerciseType::Strength,
                    LevelBucket::ByLevel(LevelTable {
                        beginner: fixed(2, 12, 60.0, 90),
                        intermediate: range(3, 8, 12, 70.0, 120),
                        advanced: range(4, 6, 10, 80.0, 150),
                        elite: range(5, 4, 8, 85.0, 180),
                    }),
                ),
                (
                    ExerciseType::Power,
                    LevelBucket::ByLevel(LevelTable {
                        beginner: fixed(3, 8, 70.0, 120),
                        intermediate: range(4, 6, 8, 80.0, 150),
                        advanced: range(5, 4, 6, 85.0, 180),
                        elite: range(6, 3, 5, 90.0, 200),
                    }),
                ),
                (
                    ExerciseType::Endurance,
                    LevelBucket::All(fixed(3, 20, 60.0, 60)),
                ),
            ]),
            default_load: fixed(3, 10, 70.0, 90),
            full_experience_years: 10.0,
            age_factor_from: 30,
            age_factor: 0.9,
            trend_window: 3,
            improving_factor: 1.1,
            decline_threshold_percent: -5.0,
            declining_factor: 0.9,
            min_rep_range_width: 2,
            profile_defaults: LoadProfileDefaults {
                fitness_level: FitnessLevel::Intermediate,
                age: 25,
            },
        }
    }
}
