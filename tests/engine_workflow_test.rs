// ABOUTME: End-to-end tests through the peakform facade crate
// ABOUTME: Plans from JSON profiles, records tests against baselines, and reports on the resulting history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use peakform::analytics::ReportPeriod;
use peakform::errors::ErrorCode;
use peakform::models::{
    AthleteProfile, Metric, PerformanceHistory, PerformanceRecord, TestType, TrainingType,
};
use peakform::{ImprovementPredictor, PeriodReporter, PlanGenerator, TestRecorder};
use std::io::Write;
use tempfile::NamedTempFile;
use uuid::Uuid;

const PROFILE_JSON: &str = r#"{
    "age": 19,
    "height_cm": 178.0,
    "weight_kg": 72.5,
    "sport": "basketball",
    "fitness_level": "advanced",
    "years_experience": 6,
    "training_frequency": 5,
    "has_injuries": false
}"#;

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, day, 8, 0, 0).unwrap()
}

fn jump(value: f64, day: u32) -> PerformanceRecord {
    PerformanceRecord {
        test_type: TestType::VerticalJump,
        metric: Metric::Power,
        value,
        unit: "cm".into(),
        timestamp: at(day),
    }
}

fn profile_from_file() -> AthleteProfile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PROFILE_JSON.as_bytes()).unwrap();
    let raw = std::fs::read_to_string(file.path()).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_plan_from_json_profile() {
    let profile = profile_from_file();
    let plan = PlanGenerator::new().generate(&profile, 3, None).unwrap();

    assert_eq!(plan.week_number, 3);
    assert_eq!(plan.sessions.len(), 5);
    assert!(plan
        .sessions
        .iter()
        .all(|s| (1.0..=10.0).contains(&s.difficulty_score)));

    let json = serde_json::to_value(&plan).unwrap();
    assert!(json["sessions"].is_array());
}

#[test]
fn test_prediction_requires_positive_horizon() {
    let profile = profile_from_file();
    let err = ImprovementPredictor::new()
        .predict(&profile, TrainingType::Power, 0)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_record_then_report() {
    let profile = profile_from_file();
    let athlete_id = Uuid::from_u128(42);
    let recorder = TestRecorder::new();

    let first = jump(40.0, 1);
    let established = recorder
        .record(&profile, athlete_id, &first, &PerformanceHistory::new(), None)
        .unwrap();
    assert!(established.established_baseline);
    assert_eq!(established.improvement_from_last_test, None);
    assert!(established.improvement_from_baseline.abs() < f64::EPSILON);
    assert_eq!(established.baseline.tests_count, 0);
    assert_eq!(established.percentile_rank, None);

    let second = jump(44.0, 10);
    let prior = PerformanceHistory::from_chronological(vec![first.clone()]);
    let updated = recorder
        .record(
            &profile,
            athlete_id,
            &second,
            &prior,
            Some(&established.baseline),
        )
        .unwrap();
    assert!(!updated.established_baseline);
    assert_eq!(updated.improvement_from_last_test, Some(10.0));
    assert!((updated.improvement_from_baseline - 10.0).abs() < 1e-9);
    assert_eq!(updated.baseline.current_best, Some(44.0));
    assert_eq!(updated.baseline.tests_count, 1);

    let history = PerformanceHistory::from_unordered(vec![second, first]);
    let report = PeriodReporter::new().generate(ReportPeriod::Monthly, at(15), &history, &[]);

    assert_eq!(report.overall_progress.tests_completed, 2);
    assert!((report.overall_progress.average_improvement - 5.0).abs() < 1e-9);
    assert_eq!(report.training_effectiveness, None);
    assert_eq!(report.metric_improvements.len(), 1);
    let power = &report.metric_improvements[0];
    assert_eq!(power.metric, Metric::Power);
    assert_eq!(power.test_count, 1);
    assert!((power.best_improvement - 10.0).abs() < 1e-9);
}

#[test]
fn test_foreign_baseline_is_rejected() {
    let profile = profile_from_file();
    let recorder = TestRecorder::new();
    let first = jump(40.0, 1);
    let baseline = recorder
        .record(&profile, Uuid::from_u128(1), &first, &PerformanceHistory::new(), None)
        .unwrap()
        .baseline;

    let err = recorder
        .record(
            &profile,
            Uuid::from_u128(2),
            &jump(41.0, 2),
            &PerformanceHistory::new(),
            Some(&baseline),
        )
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
