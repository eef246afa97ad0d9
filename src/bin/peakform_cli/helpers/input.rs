// ABOUTME: Input helpers for peakform-cli
// ABOUTME: Reads profile, history, baseline, and session JSON files and parses enum arguments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use tracing::debug;

use peakform::models::{PerformanceHistory, PerformanceRecord};

/// Ordering of the records in a history file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HistoryOrder {
    /// Oldest record first
    Chronological,
    /// Most recent record first
    NewestFirst,
    /// Any order; records are sorted by timestamp
    #[default]
    Unordered,
}

/// Decode a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Decode an optional JSON file, defaulting when absent
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    path.map_or_else(|| Ok(T::default()), read_json)
}

/// Decode a history file, stating its ordering
pub fn read_history(path: &Path, order: HistoryOrder) -> Result<PerformanceHistory> {
    let records: Vec<PerformanceRecord> = read_json(path)?;
    debug!(records = records.len(), order = ?order, "Loaded history");
    Ok(match order {
        HistoryOrder::Chronological => PerformanceHistory::from_chronological(records),
        HistoryOrder::NewestFirst => PerformanceHistory::from_newest_first(records),
        HistoryOrder::Unordered => PerformanceHistory::from_unordered(records),
    })
}

/// Decode an optional history file
pub fn read_optional_history(
    path: Option<&Path>,
    order: HistoryOrder,
) -> Result<Option<PerformanceHistory>> {
    path.map(|p| read_history(p, order)).transpose()
}

/// Parse a snake_case enum argument through its serde representation
pub fn parse_enum<T: DeserializeOwned>(value: &str) -> std::result::Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_lowercase()))
        .map_err(|_| format!("unknown value '{value}'"))
}
