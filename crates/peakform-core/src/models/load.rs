// ABOUTME: Exercise load prescription types: sets, rep schemes, intensity, and progression guidance
// ABOUTME: ExerciseType, RepScheme, IntensityLevel, ProgressionGuidance, and LoadParameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::math::round_to;

/// Exercise category used to look up base load parameters
///
/// Names outside the known set deserialize to [`ExerciseType::Other`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Resistance training
    Strength,
    /// Power lifts and throws
    Power,
    /// Long-duration conditioning
    Endurance,
    /// Explosive movements
    Explosive,
    /// Short sprints
    Sprint,
    /// Jumps and bounds
    Plyometric,
    /// Aerobic base work
    Aerobic,
    /// Tempo work
    Tempo,
    /// Threshold work
    Threshold,
    /// Agility drills
    AgilityDrill,
    /// Skill-based sport drills
    SkillBased,
    /// Anything else
    #[serde(other)]
    Other,
}

impl ExerciseType {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Power => "power",
            Self::Endurance => "endurance",
            Self::Explosive => "explosive",
            Self::Sprint => "sprint",
            Self::Plyometric => "plyometric",
            Self::Aerobic => "aerobic",
            Self::Tempo => "tempo",
            Self::Threshold => "threshold",
            Self::AgilityDrill => "agility_drill",
            Self::SkillBased => "skill_based",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repetition prescription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RepScheme {
    /// Fixed repetition count
    Fixed {
        /// Repetitions per set
        reps: u32,
    },
    /// Repetition range
    Range {
        /// Lower bound
        min: u32,
        /// Upper bound, always greater than `min`
        max: u32,
    },
}

impl fmt::Display for RepScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { reps } => write!(f, "{reps}"),
            Self::Range { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

/// Intensity band derived from a percentage of maximal effort
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    /// Below 60%
    Low,
    /// 60% to below 70%
    Moderate,
    /// 70% to below 80%
    High,
    /// 80% to below 90%
    VeryHigh,
    /// 90% and above
    Maximal,
}

impl IntensityLevel {
    /// Band for an intensity percentage
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::Maximal
        } else if percent >= 80.0 {
            Self::VeryHigh
        } else if percent >= 70.0 {
            Self::High
        } else if percent >= 60.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Progression direction for the next block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ProgressionGuidance {
    /// Raise the load
    Increase {
        /// Percentage increase
        percent: f64,
    },
    /// Lower the load to recover
    Reduce {
        /// Percentage reduction
        percent: f64,
    },
    /// Keep the load and refine form
    Maintain,
}

impl ProgressionGuidance {
    /// Guidance for a load factor, with a ±5% dead band
    #[must_use]
    pub fn from_load_factor(load_factor: f64) -> Self {
        if load_factor > 1.05 {
            Self::Increase {
                percent: round_to((load_factor - 1.0) * 100.0, 1),
            }
        } else if load_factor < 0.95 {
            Self::Reduce {
                percent: round_to((1.0 - load_factor) * 100.0, 1),
            }
        } else {
            Self::Maintain
        }
    }
}

impl fmt::Display for ProgressionGuidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increase { percent } => write!(
                f,
                "Increase load by {percent}% based on recent improvements"
            ),
            Self::Reduce { percent } => {
                write!(f, "Reduce load by {percent}% to allow for recovery")
            }
            Self::Maintain => f.write_str("Maintain current load and focus on form"),
        }
    }
}

/// Optimized load prescription for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadParameters {
    /// Exercise category the prescription is for
    pub exercise_type: ExerciseType,
    /// Working sets, at least 1
    pub sets: u32,
    /// Repetitions per set
    pub reps: RepScheme,
    /// Intensity percentage in `[0, 100]`
    pub intensity_percent: f64,
    /// Intensity band
    pub intensity: IntensityLevel,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
    /// Performance-driven load adjustment factor
    pub load_factor: f64,
    /// Structured progression guidance
    pub progression: ProgressionGuidance,
    /// Progression guidance rendered as text
    pub progression_notes: String,
}
