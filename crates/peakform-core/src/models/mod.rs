// ABOUTME: Domain models for athletes, performance tests, baselines, plans, and load prescriptions
// ABOUTME: Plain serializable records exchanged between the host and the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

//! Domain models
//!
//! Every type here is a plain structured record suitable for direct JSON
//! serialization. The engine never mutates caller-owned instances.

mod athlete;
mod baseline;
mod load;
mod performance;
mod session_log;
mod training;

pub use athlete::{AthleteProfile, FitnessLevel, PlanRequirements, SportType};
pub use baseline::{Baseline, BaselineTargets, TargetHorizon};
pub use load::{ExerciseType, IntensityLevel, LoadParameters, ProgressionGuidance, RepScheme};
pub use performance::{Metric, PerformanceHistory, PerformanceRecord, SeriesKey, TestType};
pub use session_log::{sessions_within, SessionLog};
pub use training::{
    AdaptationTarget, EnergySystemWeights, FocusPair, MitochondrialWeights, MuscleFiberWeights,
    NeuromuscularWeights, ProfileAnalysis, RecoveryNeeds, Session, SessionFocus,
    TargetAdaptations, TrainingCapacity, TrainingFocus, TrainingPlan, TrainingType,
};
