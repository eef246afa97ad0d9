// ABOUTME: Completed or missed training session log entries reported by the athlete
// ABOUTME: Inputs for consistency scoring, training effectiveness, and overtraining risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one scheduled training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLog {
    /// Whether the session was completed
    pub completed: bool,
    /// When the session ended
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    /// Perceived exertion, 1 to 10
    #[serde(default)]
    pub perceived_exertion: Option<u8>,
    /// Athlete rating of the session, 1 to 5
    #[serde(default)]
    pub rating: Option<u8>,
}

/// Session logs that ended inside `[start, end]`
#[must_use]
pub fn sessions_within(
    sessions: &[SessionLog],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<SessionLog> {
    sessions
        .iter()
        .filter(|s| s.ended_at.is_some_and(|t| t >= start && t <= end))
        .cloned()
        .collect()
}
