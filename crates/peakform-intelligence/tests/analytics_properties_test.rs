// ABOUTME: Integration tests for trend, improvement, and target progress analytics
// ABOUTME: Checks OLS classification, improvement antisymmetry, progress bounds, and history ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::cast_possible_wrap)] // Test helpers use small indices

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use peakform_core::models::{
    Baseline, BaselineTargets, Metric, PerformanceHistory, PerformanceRecord, TestType,
};
use peakform_intelligence::config::AnalyticsConfig;
use peakform_intelligence::{HistoryAnalyzer, StatisticalAnalyzer, TrendAnalysis, TrendDirection};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap()
}

fn series(test_type: TestType, metric: Metric, values: &[f64]) -> Vec<PerformanceRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| PerformanceRecord {
            test_type,
            metric,
            value,
            unit: "u".into(),
            timestamp: start() + Duration::weeks(i as i64),
        })
        .collect()
}

#[test]
fn test_monotone_series_classification() {
    let config = AnalyticsConfig::default();
    for len in 2..10 {
        let rising: Vec<f64> = (0..len).map(|i| 50.0 + f64::from(i) * 0.5).collect();
        let falling: Vec<f64> = rising.iter().rev().copied().collect();
        let flat = vec![42.0; len as usize];

        let up = TrendAnalysis::of_values(&rising, TestType::VerticalJump, &config);
        let down = TrendAnalysis::of_values(&falling, TestType::VerticalJump, &config);
        let level = TrendAnalysis::of_values(&flat, TestType::VerticalJump, &config);

        assert_eq!(up.direction, TrendDirection::Improving);
        assert_eq!(down.direction, TrendDirection::Declining);
        assert_eq!(level.direction, TrendDirection::Stable);
        assert!(level.slope.abs() < f64::EPSILON);
    }
}

#[test]
fn test_regression_recovers_exact_line() {
    let fit = StatisticalAnalyzer::linear_regression(&[3.0, 5.0, 7.0, 9.0]);
    assert!((fit.slope - 2.0).abs() < 1e-9);
    assert!((fit.intercept - 3.0).abs() < 1e-9);
    assert!((fit.r_squared - 1.0).abs() < 1e-9);
}

#[test]
fn test_improvement_antisymmetry() {
    let pairs = [(40.0, 40.0), (52.5, 48.0), (3.9, 4.2), (120.0, 100.0)];
    for test_type in TestType::ALL {
        for &(a, b) in &pairs {
            let forward = StatisticalAnalyzer::improvement_percent(a, b, test_type);
            let backward = StatisticalAnalyzer::improvement_percent(b, a, test_type);
            if (a - b).abs() < f64::EPSILON {
                assert!(forward.abs() < f64::EPSILON && backward.abs() < f64::EPSILON);
            } else {
                assert!((forward.signum() + backward.signum()).abs() < f64::EPSILON);
            }
        }
    }
    assert!(StatisticalAnalyzer::improvement_percent(3.8, 4.0, TestType::Sprint20m) > 0.0);
    assert!(StatisticalAnalyzer::improvement_percent(3.8, 4.0, TestType::VerticalJump) < 0.0);
    assert!(
        StatisticalAnalyzer::improvement_percent(5.0, 0.0, TestType::VerticalJump).abs()
            < f64::EPSILON
    );
}

#[test]
fn test_target_progress_is_monotone_and_capped() {
    let records = series(TestType::VerticalJump, Metric::Power, &[40.0]);
    let base = Baseline::establish(Uuid::new_v4(), &records[0], Some(24), None).with_targets(
        BaselineTargets {
            short_term: Some(44.0),
            ..BaselineTargets::default()
        },
    );
    assert!(base.progress().abs() < f64::EPSILON);

    let mut last = 0.0;
    for step in 1..=12 {
        let mut b = base.clone();
        b.update_current_best(40.0 + f64::from(step) * 0.5, start());
        let progress = b.progress();
        assert!(progress >= last);
        assert!(progress <= 100.0);
        last = progress;
    }
    assert!((last - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_newest_first_input_is_reordered() {
    let mut records = series(TestType::Sprint20m, Metric::Speed, &[3.8, 3.6, 3.4, 3.2]);
    records.reverse();
    let history = PerformanceHistory::from_newest_first(records);
    assert_eq!(history.values(), vec![3.8, 3.6, 3.4, 3.2]);

    let trends = HistoryAnalyzer::with_config(AnalyticsConfig::default()).series_trends(&history);
    assert_eq!(trends.len(), 1);
    assert_eq!(trends[0].analysis.direction, TrendDirection::Declining);
    assert_eq!(trends[0].analysis.performance_direction, TrendDirection::Improving);
}

#[test]
fn test_history_analysis_end_to_end() {
    let mut records = series(TestType::VerticalJump, Metric::Power, &[40.0, 41.0, 42.5, 44.0]);
    records.extend(series(TestType::Strength1rm, Metric::Strength, &[100.0, 99.0, 97.0]));
    let history = PerformanceHistory::from_unordered(records);

    let athlete = Uuid::new_v4();
    let mut jump = Baseline::establish(athlete, &history.records()[0], Some(24), None)
        .with_targets(BaselineTargets {
            short_term: Some(44.0),
            ..BaselineTargets::default()
        });
    jump.update_current_best(44.0, start());
    let strength_record = history
        .records()
        .iter()
        .find(|r| r.test_type == TestType::Strength1rm)
        .unwrap();
    let mut strength = Baseline::establish(athlete, strength_record, Some(24), None)
        .with_targets(BaselineTargets {
            short_term: Some(110.0),
            ..BaselineTargets::default()
        });
    strength.update_current_best(100.0, start());

    let analysis =
        HistoryAnalyzer::with_config(AnalyticsConfig::default()).analyze(&history, &[jump, strength]);

    assert_eq!(analysis.trends.len(), 2);
    assert_eq!(analysis.strengths.len(), 1);
    assert_eq!(analysis.strengths[0].metric, Metric::Power);
    assert_eq!(analysis.weaknesses.len(), 1);
    assert_eq!(analysis.weaknesses[0].metric, Metric::Strength);
    assert!((analysis.overall_score - 50.0).abs() < 1e-9);
    assert_eq!(analysis.test_summary.total_tests, 7);
    assert_eq!(analysis.test_summary.test_types, 2);
    assert_eq!(analysis.baselines_summary.targets_met, 1);
    assert!(analysis.recommendations.recovery.is_empty());
    assert!(!analysis.recommendations.training_adjustments.is_empty());
}
