// ABOUTME: Aggregate risk flags over a window of tests and training sessions
// ABOUTME: Performance decline and overtraining detection with fixed severities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use serde::{Deserialize, Serialize};

use peakform_core::models::SessionLog;

use crate::config::AnalyticsConfig;

/// Kind of risk detected
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    /// Most tests dropped sharply from the prior test
    PerformanceDecline,
    /// Most sessions were reported as very hard
    Overtraining,
}

/// How urgent a risk is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskSeverity {
    /// Worth watching
    Medium,
    /// Needs action
    High,
}

/// One raised risk flag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskFlag {
    /// What was detected
    pub kind: RiskKind,
    /// How urgent it is
    pub severity: RiskSeverity,
}

/// Detects aggregate risks in a reporting window
pub struct RiskAssessor<'a> {
    config: &'a AnalyticsConfig,
}

impl<'a> RiskAssessor<'a> {
    /// Assessor using the given thresholds
    #[must_use]
    pub const fn new(config: &'a AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Decline flag when more than `decline_ratio` of the window dropped past `decline_percent`
    ///
    /// `improvements` holds one entry per test in the window; tests without a
    /// prior test of the same series count toward the window but never as drops.
    #[must_use]
    pub fn performance_decline(&self, improvements: &[Option<f64>]) -> Option<RiskFlag> {
        if improvements.is_empty() {
            return None;
        }
        let drops = improvements
            .iter()
            .flatten()
            .filter(|&&i| i < self.config.decline_percent)
            .count();
        (drops as f64 > improvements.len() as f64 * self.config.decline_ratio).then_some(RiskFlag {
            kind: RiskKind::PerformanceDecline,
            severity: RiskSeverity::High,
        })
    }

    /// Overtraining flag when more than `overtraining_ratio` of sessions exceed the RPE threshold
    #[must_use]
    pub fn overtraining(&self, sessions: &[SessionLog]) -> Option<RiskFlag> {
        if sessions.is_empty() {
            return None;
        }
        let hard = sessions
            .iter()
            .filter(|s| {
                s.perceived_exertion
                    .is_some_and(|rpe| rpe > self.config.high_exertion_rpe)
            })
            .count();
        (hard as f64 > sessions.len() as f64 * self.config.overtraining_ratio).then_some(RiskFlag {
            kind: RiskKind::Overtraining,
            severity: RiskSeverity::Medium,
        })
    }

    /// All raised flags, decline first
    #[must_use]
    pub fn assess(&self, improvements: &[Option<f64>], sessions: &[SessionLog]) -> Vec<RiskFlag> {
        self.performance_decline(improvements)
            .into_iter()
            .chain(self.overtraining(sessions))
            .collect()
    }
}
