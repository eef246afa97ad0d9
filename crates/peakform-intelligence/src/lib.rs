// ABOUTME: Training intelligence engine: plans, improvement predictions, loads, and analytics
// ABOUTME: Pure synchronous algorithms driven by configuration-as-data lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

#![deny(unsafe_code)]

//! # `PeakForm` Intelligence
//!
//! Rule-based engine turning an athlete profile and performance history into
//! training guidance. Every operation is a pure function of its inputs and the
//! configuration tables it was built with; nothing here performs I/O except
//! [`config::EngineConfig::load`].
//!
//! ## Modules
//!
//! - **`plan_generator`**: periodized weekly plans
//! - **`improvement_predictor`**: per-metric improvement forecasts
//! - **`load_optimizer`**: sets, reps, intensity and progression per exercise type
//! - **analytics**: trends, baselines, test recording, period reports, risk flags
//! - **statistics**: regression and descriptive helpers shared by the above
//! - **config**: lookup tables, file loading and environment overrides

/// Lookup tables and tunables
pub mod config;

/// Trend and baseline analytics
pub mod analytics;

/// Per-metric improvement prediction
pub mod improvement_predictor;

/// Exercise load optimization
pub mod load_optimizer;

/// Weekly training plan generation
pub mod plan_generator;

/// Regression, trend and consistency helpers
pub mod statistics;

pub use analytics::{
    performance_stats, HistoryAnalysis, HistoryAnalyzer, PeriodReport, PeriodReporter,
    PerformanceStats, RecordedTest, ReportPeriod, RiskAssessor, RiskFlag, TestRecorder,
    TrendAnalysis, TrendDirection,
};
pub use config::{ConfigError, EngineConfig};
pub use improvement_predictor::{ImprovementPrediction, ImprovementPredictor};
pub use load_optimizer::LoadOptimizer;
pub use plan_generator::PlanGenerator;
pub use statistics::StatisticalAnalyzer;
