// ABOUTME: Configuration error types for engine table loading and validation
// ABOUTME: Defines error variants for invalid ranges, empty tables, parse failures, and file access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

//! Configuration error types for engine table validation.

use std::{env, io};
use thiserror::Error;

use peakform_core::errors::AppError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range bounds inverted or inconsistent
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required table or entry is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
