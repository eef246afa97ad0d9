// ABOUTME: Core types for the PeakForm training intelligence engine
// ABOUTME: Foundation crate with domain models, error handling, and numeric helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

#![deny(unsafe_code)]

//! # `PeakForm` Core
//!
//! Foundation crate shared by the engine and its host adapters. It changes
//! rarely, which keeps incremental builds of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: athlete profile, performance records and history, baselines,
//!   training plans, load prescriptions, and session logs
//! - **math**: rounding and basic descriptive statistics

/// Unified error handling with typed error codes
pub mod errors;

/// Rounding and descriptive statistics helpers
pub mod math;

/// Domain models exchanged with the engine
pub mod models;
