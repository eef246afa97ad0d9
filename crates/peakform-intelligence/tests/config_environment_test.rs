// ABOUTME: Integration tests for engine configuration loading from files and environment
// ABOUTME: Validates file overlays, scalar env overrides, parse failures, and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;

use peakform_core::models::{AthleteProfile, FitnessLevel, SportType};
use peakform_intelligence::config::{ConfigError, EngineConfig, CONFIG_PATH_ENV};
use peakform_intelligence::PlanGenerator;

const OVERRIDE_VARS: [&str; 6] = [
    CONFIG_PATH_ENV,
    "PEAKFORM_PLAN_BASE_DURATION",
    "PEAKFORM_PLAN_BASE_DIFFICULTY",
    "PEAKFORM_PLAN_OVERLOAD_STEP",
    "PEAKFORM_PLAN_OVERLOAD_CAP",
    "PEAKFORM_ANALYTICS_SLOPE_THRESHOLD",
];

fn clear_env() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_load_without_environment_uses_defaults() {
    clear_env();
    assert_eq!(EngineConfig::load().unwrap(), EngineConfig::default());
}

#[test]
#[serial]
fn test_scalar_env_overrides() {
    clear_env();
    env::set_var("PEAKFORM_PLAN_BASE_DURATION", "60");
    env::set_var("PEAKFORM_PLAN_OVERLOAD_CAP", "1.2");
    env::set_var("PEAKFORM_ANALYTICS_SLOPE_THRESHOLD", "0.25");

    let config = EngineConfig::load().unwrap();
    clear_env();

    assert!((config.plan.base_duration_minutes - 60.0).abs() < f64::EPSILON);
    assert!((config.plan.overload_cap - 1.2).abs() < f64::EPSILON);
    assert!((config.analytics.slope_threshold - 0.25).abs() < f64::EPSILON);

    let profile = AthleteProfile {
        age: Some(30),
        height_cm: 170.0,
        weight_kg: 68.0,
        sport: Some(SportType::Cycling),
        fitness_level: Some(FitnessLevel::Intermediate),
        years_experience: 6,
        training_frequency: Some(4),
        has_injuries: false,
        injury_description: None,
    };
    let plan = PlanGenerator::with_config(config.plan)
        .generate(&profile, 30, None)
        .unwrap();
    assert_eq!(plan.expected_duration_minutes, 60);
    assert!((plan.difficulty_score - 6.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_env_value_is_rejected() {
    clear_env();
    env::set_var("PEAKFORM_PLAN_OVERLOAD_STEP", "steep");
    let result = EngineConfig::load();
    clear_env();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_config_file_overlays_defaults() {
    clear_env();
    let file = config_file(
        r#"{
            "plan": { "warm_up_minutes": 15, "cool_down_minutes": 5 },
            "analytics": { "high_exertion_rpe": 9 }
        }"#,
    );
    env::set_var(CONFIG_PATH_ENV, file.path());

    let config = EngineConfig::load().unwrap();
    clear_env();

    assert_eq!(config.plan.warm_up_minutes, 15);
    assert_eq!(config.plan.cool_down_minutes, 5);
    assert_eq!(config.analytics.high_exertion_rpe, 9);
    assert_eq!(config.load, EngineConfig::default().load);
}

#[test]
#[serial]
fn test_env_overrides_apply_after_file() {
    clear_env();
    let file = config_file(r#"{ "plan": { "base_duration_minutes": 50.0 } }"#);
    env::set_var(CONFIG_PATH_ENV, file.path());
    env::set_var("PEAKFORM_PLAN_BASE_DURATION", "40");

    let config = EngineConfig::load().unwrap();
    clear_env();

    assert!((config.plan.base_duration_minutes - 40.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_invalid_file_contents() {
    clear_env();
    let malformed = config_file("{ not json");
    env::set_var(CONFIG_PATH_ENV, malformed.path());
    assert!(matches!(EngineConfig::load(), Err(ConfigError::Parse(_))));

    let inconsistent = config_file(r#"{ "plan": { "periodization": [] } }"#);
    env::set_var(CONFIG_PATH_ENV, inconsistent.path());
    assert!(matches!(
        EngineConfig::load(),
        Err(ConfigError::MissingField("plan.periodization"))
    ));

    env::set_var(CONFIG_PATH_ENV, "/nonexistent/peakform.json");
    assert!(matches!(EngineConfig::load(), Err(ConfigError::Io { .. })));
    clear_env();
}

#[test]
#[serial]
fn test_recent_window_out_of_range_in_file() {
    clear_env();
    for days in ["0", "-30", "3651", "9223372036854775807"] {
        let file = config_file(&format!(r#"{{ "analytics": {{ "recent_window_days": {days} }} }}"#));
        env::set_var(CONFIG_PATH_ENV, file.path());
        assert!(
            matches!(EngineConfig::load(), Err(ConfigError::ValueOutOfRange(_))),
            "recent_window_days {days} accepted"
        );
    }
    clear_env();
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_env_value_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_env();
    env::set_var("PEAKFORM_PLAN_BASE_DIFFICULTY", OsStr::from_bytes(b"\xff5"));
    let result = EngineConfig::load();
    clear_env();
    assert!(matches!(result, Err(ConfigError::EnvVar(_))));
}
