// ABOUTME: Statistical primitives for performance series: OLS regression and percentage changes
// ABOUTME: Improvement percentages, short-term trend, long-term trend percent, and consistency scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use peakform_core::math::{mean, population_variance, round_to};
use peakform_core::models::{PerformanceHistory, SessionLog, TestType};

/// Ordinary least squares fit of a series against its index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionResult {
    /// Change per step
    pub slope: f64,
    /// Value at index 0
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
}

/// Statistical calculations over performance series
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Percentage improvement of `current` over `reference`
    ///
    /// Sign-flipped for time-based tests so that positive always means better.
    /// Returns 0 when `reference` is 0.
    #[must_use]
    pub fn improvement_percent(current: f64, reference: f64, test_type: TestType) -> f64 {
        if reference == 0.0 {
            return 0.0;
        }
        let change = if test_type.is_time_based() {
            reference - current
        } else {
            current - reference
        };
        round_to(change / reference * 100.0, 2)
    }

    /// OLS over `values` indexed `0..n`
    ///
    /// Series shorter than two points or with no spread in x fit a flat line.
    #[must_use]
    pub fn linear_regression(values: &[f64]) -> RegressionResult {
        let flat = RegressionResult {
            slope: 0.0,
            intercept: values.first().copied().unwrap_or(0.0),
            r_squared: 0.0,
        };
        if values.len() < 2 {
            return flat;
        }

        let n = values.len() as f64;
        let sum_x = values.iter().enumerate().map(|(i, _)| i as f64).sum::<f64>();
        let sum_y = values.iter().sum::<f64>();
        let sum_xx = (0..values.len()).map(|i| (i * i) as f64).sum::<f64>();
        let sum_xy = values
            .iter()
            .enumerate()
            .map(|(i, y)| i as f64 * y)
            .sum::<f64>();
        let sum_yy = values.iter().map(|y| y * y).sum::<f64>();

        let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
        if denominator.abs() < f64::EPSILON {
            return flat;
        }

        let numerator = n.mul_add(sum_xy, -(sum_x * sum_y));
        let slope = numerator / denominator;
        let intercept = slope.mul_add(-sum_x, sum_y) / n;

        let y_spread = n.mul_add(sum_yy, -(sum_y * sum_y));
        let r_squared = if y_spread.abs() < f64::EPSILON {
            0.0
        } else {
            (numerator * numerator) / (denominator * y_spread)
        };

        RegressionResult {
            slope,
            intercept,
            r_squared,
        }
    }

    /// Two-point percentage change across the last `window` values
    ///
    /// Compares the oldest and newest value of the window. Returns 0 for fewer
    /// than two values or a zero starting value.
    #[must_use]
    pub fn short_term_trend(values: &[f64], window: usize) -> f64 {
        let recent = &values[values.len().saturating_sub(window)..];
        match (recent.first(), recent.last()) {
            (Some(&first), Some(&last)) if recent.len() >= 2 && first != 0.0 => {
                round_to((last - first) / first * 100.0, 2)
            }
            _ => 0.0,
        }
    }

    /// Short-term trend of the latest record's series, oriented so positive is better
    ///
    /// Only records sharing the latest record's test type and metric are
    /// compared. Sign-flipped for time-based tests.
    #[must_use]
    pub fn recent_trend_percent(history: &PerformanceHistory, window: usize) -> f64 {
        let Some(latest) = history.latest() else {
            return 0.0;
        };
        let series = history.for_key(latest.key());
        let values: Vec<f64> = series.latest_n(window).iter().map(|r| r.value).collect();
        let trend = Self::short_term_trend(&values, window);
        if latest.test_type.is_time_based() {
            -trend
        } else {
            trend
        }
    }

    /// Regression slope relative to the series mean, percent
    ///
    /// `None` with fewer than `min_points` values or a zero mean.
    #[must_use]
    pub fn long_term_trend_percent(values: &[f64], min_points: usize) -> Option<f64> {
        if values.len() < min_points.max(2) {
            return None;
        }
        let avg = mean(values)?;
        if avg == 0.0 {
            return None;
        }
        let slope = Self::linear_regression(values).slope;
        Some(round_to(slope / avg * 100.0, 2))
    }

    /// Training consistency score in `[0, 100]`
    ///
    /// Completion rate scaled by rating stability: `max(0, 1 - variance / 10)`
    /// over ratings of completed sessions, or 1 when there are none.
    #[must_use]
    pub fn session_consistency(sessions: &[SessionLog]) -> f64 {
        if sessions.is_empty() {
            return 0.0;
        }
        let completed: Vec<&SessionLog> = sessions.iter().filter(|s| s.completed).collect();
        let completion_rate = completed.len() as f64 / sessions.len() as f64;

        let ratings: Vec<f64> = completed
            .iter()
            .filter_map(|s| s.rating)
            .map(f64::from)
            .collect();
        let stability = population_variance(&ratings).map_or(1.0, |v| (1.0 - v / 10.0).max(0.0));

        round_to(completion_rate * stability * 100.0, 2)
    }

    /// Consistency of a metric's improvements, `max(0, 100 - variance * 10)`
    ///
    /// Fewer than two values are perfectly consistent.
    #[must_use]
    pub fn metric_consistency(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 100.0;
        }
        population_variance(values)
            .map_or(100.0, |v| round_to(10.0f64.mul_add(-v, 100.0).max(0.0), 2))
    }
}
