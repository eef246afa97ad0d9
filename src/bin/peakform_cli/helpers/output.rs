// ABOUTME: Output helpers for peakform-cli
// ABOUTME: Prints engine results to stdout and failures to stderr as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use peakform::config::ConfigError;
use peakform::errors::{AppError, ErrorCode, ErrorResponse};

/// Write `value` to stdout as pretty JSON followed by a newline
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("failed to encode result")?;
    writeln!(stdout).context("failed to write result")?;
    Ok(())
}

/// Structured payload for a failed command
///
/// Engine and configuration errors keep their code. Anything else, such as an
/// unreadable input file, is reported as invalid input with its context chain.
pub fn error_response(error: &anyhow::Error) -> ErrorResponse {
    if let Some(app) = error.downcast_ref::<AppError>() {
        return ErrorResponse::from(app);
    }
    let fallback = if error.downcast_ref::<ConfigError>().is_some() {
        AppError::config(error.to_string())
    } else {
        AppError::new(ErrorCode::InvalidInput, format!("{error:#}"))
    };
    ErrorResponse::from(&fallback)
}

/// Write the error payload for `error` to stderr
pub fn print_error(error: &anyhow::Error) {
    let payload = serde_json::to_string_pretty(&error_response(error))
        .unwrap_or_else(|_| format!("{error:#}"));
    eprintln!("{payload}");
}
