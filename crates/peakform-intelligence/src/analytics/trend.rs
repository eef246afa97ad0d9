// ABOUTME: Trend classification for performance series using OLS slope thresholds
// ABOUTME: Raw direction of recorded values plus a direction oriented to the test's better-direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use serde::{Deserialize, Serialize};

use peakform_core::math::round_to;
use peakform_core::models::{Metric, TestType};

use crate::config::AnalyticsConfig;
use crate::statistics::StatisticalAnalyzer;

/// Direction of a series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Slope above the threshold
    Improving,
    /// Slope below the negative threshold
    Declining,
    /// Slope within the threshold band
    Stable,
    /// Fewer than two points
    InsufficientData,
}

impl TrendDirection {
    /// Classify a slope against a symmetric threshold
    #[must_use]
    pub fn from_slope(slope: f64, threshold: f64) -> Self {
        if slope > threshold {
            Self::Improving
        } else if slope < -threshold {
            Self::Declining
        } else {
            Self::Stable
        }
    }

    /// Swap improving and declining
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Improving => Self::Declining,
            Self::Declining => Self::Improving,
            Self::Stable | Self::InsufficientData => self,
        }
    }
}

/// Linear trend of one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Direction of the recorded values
    pub direction: TrendDirection,
    /// Direction in terms of performance; inverted for time-based tests
    pub performance_direction: TrendDirection,
    /// OLS slope per test, rounded to three decimals
    pub slope: f64,
    /// Points in the series
    pub data_points: usize,
    /// Whether lower recorded values are better
    pub lower_is_better: bool,
    /// Slope relative to the mean over the recent window, percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_term_percent: Option<f64>,
}

impl TrendAnalysis {
    /// Classify `values`, oldest first, for a test type
    #[must_use]
    pub fn of_values(values: &[f64], test_type: TestType, config: &AnalyticsConfig) -> Self {
        let lower_is_better = test_type.is_time_based();
        if values.len() < 2 {
            return Self {
                direction: TrendDirection::InsufficientData,
                performance_direction: TrendDirection::InsufficientData,
                slope: 0.0,
                data_points: values.len(),
                lower_is_better,
                long_term_percent: None,
            };
        }

        let slope = StatisticalAnalyzer::linear_regression(values).slope;
        let direction = TrendDirection::from_slope(slope, config.slope_threshold);
        let performance_direction = if lower_is_better {
            direction.inverted()
        } else {
            direction
        };
        let recent = &values[values.len().saturating_sub(config.long_term_window)..];

        Self {
            direction,
            performance_direction,
            slope: round_to(slope, 3),
            data_points: values.len(),
            lower_is_better,
            long_term_percent: StatisticalAnalyzer::long_term_trend_percent(
                recent,
                config.long_term_min_points,
            ),
        }
    }
}

/// Trend of one (test type, metric) series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesTrend {
    /// Test performed
    pub test_type: TestType,
    /// Metric recorded
    pub metric: Metric,
    /// Trend of the series
    #[serde(flatten)]
    pub analysis: TrendAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_based_orientation() {
        let config = AnalyticsConfig::default();
        let faster = TrendAnalysis::of_values(&[4.0, 3.5, 3.0], TestType::Sprint20m, &config);
        assert_eq!(faster.direction, TrendDirection::Declining);
        assert_eq!(faster.performance_direction, TrendDirection::Improving);
        assert!(faster.lower_is_better);
    }

    #[test]
    fn test_single_point_is_insufficient() {
        let config = AnalyticsConfig::default();
        let one = TrendAnalysis::of_values(&[4.0], TestType::VerticalJump, &config);
        assert_eq!(one.direction, TrendDirection::InsufficientData);
        assert!(one.slope.abs() < f64::EPSILON);
    }

    #[test]
    fn test_threshold_band_is_stable() {
        assert_eq!(TrendDirection::from_slope(0.1, 0.1), TrendDirection::Stable);
        assert_eq!(TrendDirection::from_slope(-0.1, 0.1), TrendDirection::Stable);
        assert_eq!(TrendDirection::from_slope(0.11, 0.1), TrendDirection::Improving);
    }
}
