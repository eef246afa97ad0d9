// ABOUTME: Plan generator configuration: periodization, exercise catalog, scaling, and adaptations
// ABOUTME: Default tables for focus cycling, sport adjustments, session labels, and overload caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use peakform_core::models::{
    AdaptationTarget, EnergySystemWeights, FocusPair, MitochondrialWeights, MuscleFiberWeights,
    NeuromuscularWeights, SessionFocus, SportType, TargetAdaptations, TrainingType,
};

use super::tables::{LevelBucket, LevelTable};

/// Duration and difficulty multipliers for one fitness level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelScaling {
    /// Multiplier on the base session duration
    pub duration: f64,
    /// Multiplier on the base difficulty
    pub difficulty: f64,
}

/// Frequency-dependent daily label sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLabelSets {
    /// Highest frequency that uses the compact set
    pub compact_max_frequency: u32,
    /// Labels for low-frequency weeks
    pub compact: Vec<SessionFocus>,
    /// Highest frequency that uses the standard set
    pub standard_max_frequency: u32,
    /// Labels for mid-frequency weeks
    pub standard: Vec<SessionFocus>,
    /// Labels for high-frequency weeks
    pub extended: Vec<SessionFocus>,
}

impl SessionLabelSets {
    /// Label set used for `frequency` sessions per week
    #[must_use]
    pub fn for_frequency(&self, frequency: u32) -> &[SessionFocus] {
        if frequency <= self.compact_max_frequency {
            &self.compact
        } else if frequency <= self.standard_max_frequency {
            &self.standard
        } else {
            &self.extended
        }
    }
}

/// Thresholds for the advisory profile analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileAnalysisConfig {
    /// Minimum years of experience for high capacity
    pub high_capacity_min_experience: u32,
    /// Minimum weekly sessions for high capacity
    pub high_capacity_min_frequency: u32,
    /// Experience at or below which capacity is low
    pub low_capacity_max_experience: u32,
    /// Weekly sessions at or below which capacity is low
    pub low_capacity_max_frequency: u32,
    /// Ages above this need extended recovery
    pub extended_recovery_above_age: u32,
    /// Ages below this recover quickly
    pub quick_recovery_below_age: u32,
    /// Age assumed when the profile has none
    pub default_age: u32,
    /// Most recent tests of the series feeding the trend annotation
    pub trend_window: usize,
}

/// A single adaptation weight forced by a training focus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptationOverride {
    /// Weight to overwrite
    pub target: AdaptationTarget,
    /// New weight in `[0, 1]`
    pub weight: f64,
}

/// Plan generator tables and constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanGeneratorConfig {
    /// Session length before level scaling, minutes
    pub base_duration_minutes: f64,
    /// Difficulty before level scaling and overload
    pub base_difficulty: f64,
    /// Per-level duration and difficulty multipliers
    pub level_scaling: LevelTable<LevelScaling>,
    /// Difficulty increase per elapsed week
    pub overload_step: f64,
    /// Upper bound of the overload multiplier
    pub overload_cap: f64,
    /// Lowest allowed difficulty
    pub min_difficulty: f64,
    /// Highest allowed difficulty
    pub max_difficulty: f64,
    /// Fixed warm-up minutes per session
    pub warm_up_minutes: u32,
    /// Fixed cool-down minutes per session
    pub cool_down_minutes: u32,
    /// Exercises taken from the primary focus
    pub primary_exercise_count: usize,
    /// Exercises taken from the sport list
    pub sport_exercise_count: usize,
    /// Hard cap on exercises per session
    pub max_exercises_per_session: usize,
    /// Repeating focus cycle, indexed by `(week - 1) mod len`
    pub periodization: Vec<FocusPair>,
    /// Sport to training-quality multipliers
    pub sport_adjustments: BTreeMap<SportType, BTreeMap<TrainingType, f64>>,
    /// Exercises by training type and fitness level
    pub exercise_catalog: BTreeMap<TrainingType, LevelBucket<Vec<String>>>,
    /// Sport-specific exercises
    pub sport_exercises: BTreeMap<SportType, Vec<String>>,
    /// Daily focus labels
    pub session_labels: SessionLabelSets,
    /// Profile analysis thresholds
    pub profile_analysis: ProfileAnalysisConfig,
    /// Adaptation weights before focus overrides
    pub baseline_adaptations: TargetAdaptations,
    /// Focus-specific adaptation overrides
    pub adaptation_overrides: BTreeMap<TrainingType, Vec<AdaptationOverride>>,
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|&s| s.to_owned()).collect()
}

fn factors<K: Ord>(entries: impl IntoIterator<Item = (K, f64)>) -> BTreeMap<K, f64> {
    entries.into_iter().collect()
}

const fn pair(primary: TrainingType, secondary: TrainingType) -> FocusPair {
    FocusPair { primary, secondary }
}

const fn forced(target: AdaptationTarget, weight: f64) -> AdaptationOverride {
    AdaptationOverride { target, weight }
}

fn default_catalog() -> BTreeMap<TrainingType, LevelBucket<Vec<String>>> {
    BTreeMap::from([
        (
            TrainingType::Strength,
            LevelBucket::ByLevel(LevelTable {
                beginner: names(&["bodyweight_squats", "push_ups", "planks", "lunges"]),
                intermediate: names(&["goblet_squats", "deadlifts", "bench_press", "rows"]),
                advanced: names(&["back_squats", "deadlifts", "bench_press", "clean_pulls"]),
                elite: names(&["back_squats", "deadlifts", "power_cleans", "snatches"]),
            }),
        ),
        (
            TrainingType::Hiit,
            LevelBucket::ByLevel(LevelTable {
                beginner: names(&["burpees", "mountain_climbers", "jumping_jacks", "high_knees"]),
                intermediate: names(&["box_jumps", "battle_ropes", "kettlebell_swings", "sprints"]),
                advanced: names(&["plyometric_jumps", "medicine_ball_slams", "sprint_intervals"]),
                elite: names(&["depth_jumps", "reactive_jumps", "olympic_lift_complexes"]),
            }),
        ),
        (
            TrainingType::Agility,
            LevelBucket::All(names(&[
                "ladder_drills",
                "t_test",
                "cone_drills",
                "5_10_5_drill",
                "reactive_drills",
            ])),
        ),
        (
            TrainingType::Endurance,
            LevelBucket::All(names(&[
                "tempo_runs",
                "bike_intervals",
                "swimming_sets",
                "rowing_intervals",
            ])),
        ),
    ])
}

fn default_sport_exercises() -> BTreeMap<SportType, Vec<String>> {
    BTreeMap::from([
        (
            SportType::Football,
            names(&["40_yard_dash", "position_drills", "tackling_drills"]),
        ),
        (
            SportType::Basketball,
            names(&["suicide_drills", "defensive_slides", "shooting_drills"]),
        ),
        (
            SportType::Tennis,
            names(&["court_sprints", "serve_practice", "volley_drills"]),
        ),
        (
            SportType::Running,
            names(&["interval_training", "hill_repeats", "tempo_runs"]),
        ),
        (
            SportType::Cycling,
            names(&["hill_climbs", "sprint_intervals", "time_trials"]),
        ),
        (
            SportType::Swimming,
            names(&["stroke_technique", "flip_turns", "breathing_drills"]),
        ),
    ])
}

fn default_sport_adjustments() -> BTreeMap<SportType, BTreeMap<TrainingType, f64>> {
    use TrainingType::{Agility, Endurance, Flexibility, Hiit, Power, Strength};
    BTreeMap::from([
        (
            SportType::Football,
            factors([(Strength, 1.2), (Agility, 1.3), (Power, 1.1)]),
        ),
        (
            SportType::Basketball,
            factors([(Agility, 1.3), (Hiit, 1.2), (Power, 1.1)]),
        ),
        (
            SportType::Tennis,
            factors([(Agility, 1.4), (Endurance, 1.1), (Flexibility, 1.2)]),
        ),
        (
            SportType::Running,
            factors([(Endurance, 1.4), (Hiit, 1.2), (Strength, 0.9)]),
        ),
        (
            SportType::Cycling,
            factors([(Endurance, 1.3), (Strength, 1.1), (Hiit, 1.1)]),
        ),
        (
            SportType::Swimming,
            factors([(Endurance, 1.3), (Flexibility, 1.2), (Strength, 1.1)]),
        ),
    ])
}

impl Default for PlanGeneratorConfig {
    fn default() -> Self {
        use SessionFocus::{
            ActiveRecovery, Agility, Endurance, FullBody, LowerBody, Power, Recovery,
            SportSpecific, Strength, UpperBody,
        };

        Self {
            base_duration_minutes: 45.0,
            base_difficulty: 5.0,
            level_scaling: LevelTable {
                beginner: LevelScaling {
                    duration: 0.8,
                    difficulty: 0.7,
                },
                intermediate: LevelScaling {
                    duration: 1.0,
                    difficulty: 1.0,
                },
                advanced: LevelScaling {
                    duration: 1.2,
                    difficulty: 1.2,
                },
                elite: LevelScaling {
                    duration: 1.4,
                    difficulty: 1.4,
                },
            },
            overload_step: 0.05,
            overload_cap: 1.5,
            min_difficulty: 1.0,
            max_difficulty: 10.0,
            warm_up_minutes: 10,
            cool_down_minutes: 10,
            primary_exercise_count: 3,
            sport_exercise_count: 2,
            max_exercises_per_session: 6,
            periodization: vec![
                pair(TrainingType::Strength, TrainingType::Power),
                pair(TrainingType::Hiit, TrainingType::Agility),
                pair(TrainingType::Endurance, TrainingType::SportSpecific),
                pair(TrainingType::Agility, TrainingType::Flexibility),
            ],
            sport_adjustments: default_sport_adjustments(),
            exercise_catalog: default_catalog(),
            sport_exercises: default_sport_exercises(),
            session_labels: SessionLabelSets {
                compact_max_frequency: 3,
                compact: vec![FullBody, UpperBody, LowerBody],
                standard_max_frequency: 5,
                standard: vec![Power, Strength, Endurance, Agility, Recovery],
                extended: vec![
                    Power,
                    Strength,
                    Endurance,
                    Agility,
                    SportSpecific,
                    Recovery,
                    ActiveRecovery,
                ],
            },
            profile_analysis: ProfileAnalysisConfig {
                high_capacity_min_experience: 5,
                high_capacity_min_frequency: 5,
                low_capacity_max_experience: 2,
                low_capacity_max_frequency: 2,
                extended_recovery_above_age: 35,
                quick_recovery_below_age: 25,
                default_age: 25,
                trend_window: 3,
            },
            baseline_adaptations: TargetAdaptations {
                muscle_fiber_types: MuscleFiberWeights {
                    type_2_activation: 0.7,
                    type_1_endurance: 0.3,
                },
                energy_systems: EnergySystemWeights {
                    phosphocreatine: 0.4,
                    glycolytic: 0.4,
                    oxidative: 0.2,
                },
                neuromuscular: NeuromuscularWeights {
                    power_output: 0.8,
                    coordination: 0.6,
                    reaction_time: 0.5,
                },
                mitochondrial: MitochondrialWeights {
                    density_increase: 0.3,
                    enzyme_activity: 0.4,
                },
            },
            adaptation_overrides: BTreeMap::from([
                (
                    TrainingType::Strength,
                    vec![
                        forced(AdaptationTarget::Type2Activation, 0.9),
                        forced(AdaptationTarget::PowerOutput, 0.9),
                    ],
                ),
                (
                    TrainingType::Endurance,
                    vec![
                        forced(AdaptationTarget::DensityIncrease, 0.8),
                        forced(AdaptationTarget::Oxidative, 0.6),
                    ],
                ),
                (
                    TrainingType::Hiit,
                    vec![
                        forced(AdaptationTarget::Glycolytic, 0.7),
                        forced(AdaptationTarget::Type2Activation, 0.8),
                    ],
                ),
            ]),
        }
    }
}
