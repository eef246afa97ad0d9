// ABOUTME: Main library entry point for the PeakForm training intelligence engine
// ABOUTME: Re-exports the core models and engine components and provides host logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

#![deny(unsafe_code)]

//! # `PeakForm`
//!
//! Rule-based athletic training engine. Given an athlete profile and a history
//! of performance tests it generates periodized weekly plans, predicts
//! improvement per metric, prescribes exercise loads, and analyzes trends and
//! baselines.
//!
//! ## Architecture
//!
//! - **`peakform_core`**: domain models and the `AppError` taxonomy
//! - **`peakform_intelligence`**: the engine and its configuration tables
//! - **logging**: subscriber setup for hosts such as `peakform-cli`
//!
//! ## Example Usage
//!
//! ```rust
//! use peakform::models::{AthleteProfile, FitnessLevel, SportType};
//! use peakform::PlanGenerator;
//!
//! let profile = AthleteProfile {
//!     age: Some(24),
//!     height_cm: 181.0,
//!     weight_kg: 79.0,
//!     sport: Some(SportType::Football),
//!     fitness_level: Some(FitnessLevel::Beginner),
//!     years_experience: 1,
//!     training_frequency: Some(3),
//!     has_injuries: false,
//!     injury_description: None,
//! };
//! let plan = PlanGenerator::new().generate(&profile, 1, None)?;
//! assert_eq!(plan.sessions.len(), 3);
//! # Ok::<(), peakform::errors::AppError>(())
//! ```

/// Logging configuration and subscriber setup
pub mod logging;

pub use peakform_core::{errors, math, models};
pub use peakform_intelligence::{
    analytics, config, improvement_predictor, load_optimizer, plan_generator, statistics,
};
pub use peakform_intelligence::{
    EngineConfig, HistoryAnalyzer, ImprovementPredictor, LoadOptimizer, PeriodReporter,
    PlanGenerator, StatisticalAnalyzer, TestRecorder,
};
