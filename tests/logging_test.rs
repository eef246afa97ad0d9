// ABOUTME: Integration tests for host logging configuration
// ABOUTME: Validates environment parsing, format selection, and filter validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use peakform::logging::{LogFormat, LoggingConfig, DEFAULT_SERVICE_NAME};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "SERVICE_NAME",
    "SERVICE_VERSION",
];

fn clear_env() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("SERVICE_NAME", "peakform-test");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(!config.include_thread);
    assert_eq!(config.service_name, "peakform-test");

    clear_env();
}

#[test]
#[serial]
fn test_unknown_format_falls_back_to_pretty() {
    clear_env();
    env::set_var("LOG_FORMAT", "xml");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.level, "info");

    clear_env();
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
    assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
    assert!(!config.include_location);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert!("yaml".parse::<LogFormat>().is_err());
}

#[test]
fn test_with_level_keeps_other_settings() {
    let config = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    }
    .with_level("peakform_intelligence=trace");

    assert_eq!(config.level, "peakform_intelligence=trace");
    assert_eq!(config.format, LogFormat::Compact);
}

#[test]
fn test_invalid_filter_is_rejected() {
    let config = LoggingConfig::default().with_level("peakform=[[[");
    assert!(config.init().is_err());
}
