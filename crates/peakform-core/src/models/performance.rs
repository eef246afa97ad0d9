// ABOUTME: Performance test records and the chronologically ordered history container
// ABOUTME: TestType, Metric, PerformanceRecord, and PerformanceHistory with ordering enforced at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standardized performance tests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TestType {
    /// Explosive power, jump height
    VerticalJump,
    /// Speed, 20 meter sprint time
    #[serde(rename = "sprint_20m")]
    Sprint20m,
    /// Agility, timed T-test
    TTest,
    /// Cardiorespiratory recovery
    HeartRateRecovery,
    /// Maximal oxygen uptake
    Vo2Max,
    /// Range of motion
    Flexibility,
    /// One repetition maximum
    #[serde(rename = "strength_1rm")]
    Strength1rm,
    /// Endurance test
    Endurance,
    /// Sport-specific test
    SportSpecific,
}

impl TestType {
    /// All test types
    pub const ALL: [Self; 9] = [
        Self::VerticalJump,
        Self::Sprint20m,
        Self::TTest,
        Self::HeartRateRecovery,
        Self::Vo2Max,
        Self::Flexibility,
        Self::Strength1rm,
        Self::Endurance,
        Self::SportSpecific,
    ];

    /// Whether a lower recorded value indicates better performance
    #[must_use]
    pub const fn is_time_based(self) -> bool {
        match self {
            Self::Sprint20m | Self::TTest => true,
            Self::VerticalJump
            | Self::HeartRateRecovery
            | Self::Vo2Max
            | Self::Flexibility
            | Self::Strength1rm
            | Self::Endurance
            | Self::SportSpecific => false,
        }
    }

    /// Whether `candidate` beats `reference` given this test's better-direction
    #[must_use]
    pub fn is_better(self, candidate: f64, reference: f64) -> bool {
        if self.is_time_based() {
            candidate < reference
        } else {
            candidate > reference
        }
    }

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VerticalJump => "vertical_jump",
            Self::Sprint20m => "sprint_20m",
            Self::TTest => "t_test",
            Self::HeartRateRecovery => "heart_rate_recovery",
            Self::Vo2Max => "vo2_max",
            Self::Flexibility => "flexibility",
            Self::Strength1rm => "strength_1rm",
            Self::Endurance => "endurance",
            Self::SportSpecific => "sport_specific",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measured performance quality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Explosive power
    Power,
    /// Linear speed
    Speed,
    /// Change of direction
    Agility,
    /// Aerobic endurance
    Endurance,
    /// Maximal strength
    Strength,
    /// Range of motion
    Flexibility,
    /// Heart rate
    HeartRate,
    /// Heart rate recovery rate
    RecoveryRate,
    /// Maximal oxygen uptake
    Vo2Max,
    /// Lactate threshold
    LactateThreshold,
    /// Reaction time
    ReactionTime,
    /// Coordination
    Coordination,
    /// Balance
    Balance,
    /// Technique score
    TechniqueScore,
}

impl Metric {
    /// The physical qualities covered by improvement prediction
    pub const PHYSICAL: [Self; 6] = [
        Self::Power,
        Self::Speed,
        Self::Agility,
        Self::Endurance,
        Self::Strength,
        Self::Flexibility,
    ];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Speed => "speed",
            Self::Agility => "agility",
            Self::Endurance => "endurance",
            Self::Strength => "strength",
            Self::Flexibility => "flexibility",
            Self::HeartRate => "heart_rate",
            Self::RecoveryRate => "recovery_rate",
            Self::Vo2Max => "vo2_max",
            Self::LactateThreshold => "lactate_threshold",
            Self::ReactionTime => "reaction_time",
            Self::Coordination => "coordination",
            Self::Balance => "balance",
            Self::TechniqueScore => "technique_score",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a tracked series: one test measured by one metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesKey {
    /// Test performed
    pub test_type: TestType,
    /// Metric recorded
    pub metric: Metric,
}

/// One recorded performance test result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// Test performed
    pub test_type: TestType,
    /// Primary metric recorded
    pub metric: Metric,
    /// Recorded value
    pub value: f64,
    /// Unit of `value` (cm, seconds, bpm, ...)
    pub unit: String,
    /// When the test took place
    pub timestamp: DateTime<Utc>,
}

impl PerformanceRecord {
    /// Series this record belongs to
    #[must_use]
    pub const fn key(&self) -> SeriesKey {
        SeriesKey {
            test_type: self.test_type,
            metric: self.metric,
        }
    }
}

/// Performance records held oldest-first
///
/// Construction states the caller's ordering explicitly, so every consumer can
/// rely on chronological order without re-sorting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceHistory {
    records: Vec<PerformanceRecord>,
}

impl PerformanceHistory {
    /// Empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Records already ordered oldest-first
    #[must_use]
    pub fn from_chronological(records: Vec<PerformanceRecord>) -> Self {
        Self { records }
    }

    /// Records ordered most-recent-first
    #[must_use]
    pub fn from_newest_first(mut records: Vec<PerformanceRecord>) -> Self {
        records.reverse();
        Self { records }
    }

    /// Records in no particular order; stably sorted by timestamp
    #[must_use]
    pub fn from_unordered(mut records: Vec<PerformanceRecord>) -> Self {
        records.sort_by_key(|r| r.timestamp);
        Self { records }
    }

    /// All records, oldest first
    #[must_use]
    pub fn records(&self) -> &[PerformanceRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `n` most recent records, still oldest first
    #[must_use]
    pub fn latest_n(&self, n: usize) -> &[PerformanceRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    /// Most recent record
    #[must_use]
    pub fn latest(&self) -> Option<&PerformanceRecord> {
        self.records.last()
    }

    /// Recorded values, oldest first
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }

    /// Sub-history for a single series
    #[must_use]
    pub fn for_key(&self, key: SeriesKey) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|r| r.key() == key)
                .cloned()
                .collect(),
        }
    }

    /// Distinct test types present, in first-seen order
    #[must_use]
    pub fn test_types(&self) -> Vec<TestType> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.test_type) {
                seen.push(record.test_type);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn record(test_type: TestType, value: f64, day: i64) -> PerformanceRecord {
        PerformanceRecord {
            test_type,
            metric: Metric::Power,
            value,
            unit: "cm".into(),
            timestamp: Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap() + Duration::days(day),
        }
    }

    #[test]
    fn test_newest_first_is_reversed() {
        let history = PerformanceHistory::from_newest_first(vec![
            record(TestType::VerticalJump, 3.0, 2),
            record(TestType::VerticalJump, 2.0, 1),
            record(TestType::VerticalJump, 1.0, 0),
        ]);
        assert_eq!(history.values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_unordered_is_sorted_by_timestamp() {
        let history = PerformanceHistory::from_unordered(vec![
            record(TestType::VerticalJump, 2.0, 5),
            record(TestType::VerticalJump, 1.0, 1),
            record(TestType::VerticalJump, 3.0, 9),
        ]);
        assert_eq!(history.values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_latest_n_handles_short_history() {
        let history =
            PerformanceHistory::from_chronological(vec![record(TestType::VerticalJump, 1.0, 0)]);
        assert_eq!(history.latest_n(3).len(), 1);
        assert_eq!(PerformanceHistory::new().latest_n(3).len(), 0);
    }

    #[test]
    fn test_time_based_direction() {
        assert!(TestType::Sprint20m.is_better(2.9, 3.0));
        assert!(!TestType::VerticalJump.is_better(2.9, 3.0));
        assert!(!TestType::HeartRateRecovery.is_time_based());
    }

    #[test]
    fn test_numeric_test_type_names() {
        let json = serde_json::to_string(&TestType::Sprint20m).unwrap();
        assert_eq!(json, "\"sprint_20m\"");
        let parsed: TestType = serde_json::from_str("\"strength_1rm\"").unwrap();
        assert_eq!(parsed, TestType::Strength1rm);
    }
}
