// ABOUTME: Command implementations for peakform-cli
// ABOUTME: Training commands (plan, predict, load) and analytics commands (analyze, record, report, stats)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

pub mod analytics;
pub mod training;
