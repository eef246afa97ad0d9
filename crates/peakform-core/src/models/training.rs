// ABOUTME: Generated training plan records: focus, sessions, adaptations, and profile annotations
// ABOUTME: TrainingType, SessionFocus, TargetAdaptations, ProfileAnalysis, Session, and TrainingPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Training focus category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    /// Maximal and hypertrophy strength work
    Strength,
    /// Explosive power work
    Power,
    /// Steady-state cardio
    Cardio,
    /// High-intensity interval training
    Hiit,
    /// Change of direction and footwork
    Agility,
    /// Aerobic endurance
    Endurance,
    /// Mobility and range of motion
    Flexibility,
    /// Drills specific to the athlete's sport
    SportSpecific,
}

impl TrainingType {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Power => "power",
            Self::Cardio => "cardio",
            Self::Hiit => "hiit",
            Self::Agility => "agility",
            Self::Endurance => "endurance",
            Self::Flexibility => "flexibility",
            Self::SportSpecific => "sport_specific",
        }
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary and secondary focus of one periodization week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusPair {
    /// Main training type of the week
    pub primary: TrainingType,
    /// Supporting training type
    pub secondary: TrainingType,
}

/// Weekly focus with sport adjustment metadata attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingFocus {
    /// Main training type of the week
    pub primary: TrainingType,
    /// Supporting training type
    pub secondary: TrainingType,
    /// Per-quality multipliers for the athlete's sport, for downstream load tuning
    pub sport_adjustments: BTreeMap<TrainingType, f64>,
}

/// Daily session label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionFocus {
    /// Whole-body session
    FullBody,
    /// Upper-body session
    UpperBody,
    /// Lower-body session
    LowerBody,
    /// Power day
    Power,
    /// Strength day
    Strength,
    /// Endurance day
    Endurance,
    /// Agility day
    Agility,
    /// Sport-specific day
    SportSpecific,
    /// Recovery day
    Recovery,
    /// Light active recovery day
    ActiveRecovery,
}

/// Muscle fiber recruitment weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleFiberWeights {
    /// Fast-twitch activation
    pub type_2_activation: f64,
    /// Slow-twitch endurance
    pub type_1_endurance: f64,
}

/// Energy system usage weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySystemWeights {
    /// ATP-PC system
    pub phosphocreatine: f64,
    /// Anaerobic glycolysis
    pub glycolytic: f64,
    /// Aerobic system
    pub oxidative: f64,
}

/// Neuromuscular adaptation weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeuromuscularWeights {
    /// Rate of force development
    pub power_output: f64,
    /// Intermuscular coordination
    pub coordination: f64,
    /// Reaction time
    pub reaction_time: f64,
}

/// Mitochondrial adaptation weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MitochondrialWeights {
    /// Mitochondrial density
    pub density_increase: f64,
    /// Oxidative enzyme activity
    pub enzyme_activity: f64,
}

/// Addressable weight inside [`TargetAdaptations`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationTarget {
    /// `muscle_fiber_types.type_2_activation`
    Type2Activation,
    /// `muscle_fiber_types.type_1_endurance`
    Type1Endurance,
    /// `energy_systems.phosphocreatine`
    Phosphocreatine,
    /// `energy_systems.glycolytic`
    Glycolytic,
    /// `energy_systems.oxidative`
    Oxidative,
    /// `neuromuscular.power_output`
    PowerOutput,
    /// `neuromuscular.coordination`
    Coordination,
    /// `neuromuscular.reaction_time`
    ReactionTime,
    /// `mitochondrial.density_increase`
    DensityIncrease,
    /// `mitochondrial.enzyme_activity`
    EnzymeActivity,
}

/// Physiological adaptation weights, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetAdaptations {
    /// Fiber-type activation
    pub muscle_fiber_types: MuscleFiberWeights,
    /// Energy-system usage
    pub energy_systems: EnergySystemWeights,
    /// Neuromuscular qualities
    pub neuromuscular: NeuromuscularWeights,
    /// Mitochondrial qualities
    pub mitochondrial: MitochondrialWeights,
}

impl TargetAdaptations {
    /// Read one weight
    #[must_use]
    pub const fn get(&self, target: AdaptationTarget) -> f64 {
        match target {
            AdaptationTarget::Type2Activation => self.muscle_fiber_types.type_2_activation,
            AdaptationTarget::Type1Endurance => self.muscle_fiber_types.type_1_endurance,
            AdaptationTarget::Phosphocreatine => self.energy_systems.phosphocreatine,
            AdaptationTarget::Glycolytic => self.energy_systems.glycolytic,
            AdaptationTarget::Oxidative => self.energy_systems.oxidative,
            AdaptationTarget::PowerOutput => self.neuromuscular.power_output,
            AdaptationTarget::Coordination => self.neuromuscular.coordination,
            AdaptationTarget::ReactionTime => self.neuromuscular.reaction_time,
            AdaptationTarget::DensityIncrease => self.mitochondrial.density_increase,
            AdaptationTarget::EnzymeActivity => self.mitochondrial.enzyme_activity,
        }
    }

    /// Overwrite one weight
    pub fn set(&mut self, target: AdaptationTarget, weight: f64) {
        let slot = match target {
            AdaptationTarget::Type2Activation => &mut self.muscle_fiber_types.type_2_activation,
            AdaptationTarget::Type1Endurance => &mut self.muscle_fiber_types.type_1_endurance,
            AdaptationTarget::Phosphocreatine => &mut self.energy_systems.phosphocreatine,
            AdaptationTarget::Glycolytic => &mut self.energy_systems.glycolytic,
            AdaptationTarget::Oxidative => &mut self.energy_systems.oxidative,
            AdaptationTarget::PowerOutput => &mut self.neuromuscular.power_output,
            AdaptationTarget::Coordination => &mut self.neuromuscular.coordination,
            AdaptationTarget::ReactionTime => &mut self.neuromuscular.reaction_time,
            AdaptationTarget::DensityIncrease => &mut self.mitochondrial.density_increase,
            AdaptationTarget::EnzymeActivity => &mut self.mitochondrial.enzyme_activity,
        };
        *slot = weight;
    }

    /// Every weight paired with its address
    #[must_use]
    pub const fn entries(&self) -> [(AdaptationTarget, f64); 10] {
        [
            (
                AdaptationTarget::Type2Activation,
                self.muscle_fiber_types.type_2_activation,
            ),
            (
                AdaptationTarget::Type1Endurance,
                self.muscle_fiber_types.type_1_endurance,
            ),
            (
                AdaptationTarget::Phosphocreatine,
                self.energy_systems.phosphocreatine,
            ),
            (AdaptationTarget::Glycolytic, self.energy_systems.glycolytic),
            (AdaptationTarget::Oxidative, self.energy_systems.oxidative),
            (AdaptationTarget::PowerOutput, self.neuromuscular.power_output),
            (AdaptationTarget::Coordination, self.neuromuscular.coordination),
            (AdaptationTarget::ReactionTime, self.neuromuscular.reaction_time),
            (
                AdaptationTarget::DensityIncrease,
                self.mitochondrial.density_increase,
            ),
            (
                AdaptationTarget::EnzymeActivity,
                self.mitochondrial.enzyme_activity,
            ),
        ]
    }
}

/// Coarse weekly training capacity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingCapacity {
    /// Short history or few weekly sessions
    Low,
    /// Neither low nor high
    Moderate,
    /// Long history and frequent sessions
    High,
}

/// Recovery needs tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryNeeds {
    /// Younger athletes
    Quick,
    /// Default tier
    Standard,
    /// Older athletes
    Extended,
}

/// Advisory annotations derived from the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    /// Weekly training capacity
    pub training_capacity: TrainingCapacity,
    /// Recovery tier
    pub recovery_needs: RecoveryNeeds,
    /// Whether injuries should be considered when training
    pub injury_considerations: bool,
    /// Short-term trend of the supplied history, percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_trend_percent: Option<f64>,
}

/// One scheduled training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Day index within the week, starting at 1
    pub day: u32,
    /// Daily focus label
    pub focus: SessionFocus,
    /// Warm-up minutes
    pub warm_up_minutes: u32,
    /// Main block minutes
    pub main_minutes: u32,
    /// Cool-down minutes
    pub cool_down_minutes: u32,
    /// Exercise identifiers, in execution order
    pub exercises: Vec<String>,
    /// Difficulty inherited from the plan
    pub difficulty_score: f64,
}

impl Session {
    /// Total session length in minutes
    #[must_use]
    pub const fn total_minutes(&self) -> u32 {
        self.warm_up_minutes + self.main_minutes + self.cool_down_minutes
    }
}

/// Generated weekly training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Training week, starting at 1
    pub week_number: u32,
    /// Primary training type of the week
    pub training_type: TrainingType,
    /// Focus pair with sport adjustment metadata
    pub focus: TrainingFocus,
    /// Advisory profile annotations
    pub profile_analysis: ProfileAnalysis,
    /// Selected exercises shared by every session
    pub exercises: Vec<String>,
    /// Physiological adaptation weights
    pub target_adaptations: TargetAdaptations,
    /// Expected session length in minutes
    pub expected_duration_minutes: u32,
    /// Difficulty on a 1 to 10 scale
    pub difficulty_score: f64,
    /// Sessions, one per weekly slot
    pub sessions: Vec<Session>,
}
