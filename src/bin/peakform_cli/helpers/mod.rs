// ABOUTME: Helper modules for peakform-cli
// ABOUTME: JSON input decoding and pretty JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

pub mod input;
pub mod output;
