// ABOUTME: Athlete profile model with sport and fitness level classifications
// ABOUTME: AthleteProfile, SportType, and FitnessLevel definitions plus derived body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AppError, AppResult};

/// Sports the engine has dedicated tables for
///
/// Unknown sport names deserialize to [`SportType::Other`], which falls back to
/// neutral factors at every lookup site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// American football
    Football,
    /// Basketball
    Basketball,
    /// Tennis
    Tennis,
    /// Running
    Running,
    /// Cycling
    Cycling,
    /// Swimming
    Swimming,
    /// Volleyball
    Volleyball,
    /// Badminton
    Badminton,
    /// Any other sport
    #[serde(other)]
    Other,
}

impl SportType {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Football => "football",
            Self::Basketball => "basketball",
            Self::Tennis => "tennis",
            Self::Running => "running",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::Volleyball => "volleyball",
            Self::Badminton => "badminton",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Athlete fitness classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to structured training
    Beginner,
    /// Regular training background
    Intermediate,
    /// Competitive athlete
    Advanced,
    /// Top-tier athlete
    Elite,
}

impl FitnessLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Elite,
    ];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Elite => "elite",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Athlete profile supplied by the host
///
/// Sport, fitness level, training frequency, and age are optional on the wire so
/// that each engine operation can decide whether their absence is a rejection
/// (plan generation) or a soft default (load optimization).
///
/// # Examples
///
/// ```rust
/// use peakform_core::models::{AthleteProfile, FitnessLevel, SportType};
///
/// let profile = AthleteProfile {
///     age: Some(28),
///     height_cm: 180.0,
///     weight_kg: 78.0,
///     sport: Some(SportType::Football),
///     fitness_level: Some(FitnessLevel::Intermediate),
///     years_experience: 4,
///     training_frequency: Some(4),
///     has_injuries: false,
///     injury_description: None,
/// };
/// assert_eq!(profile.bmi(), Some(24.07));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: f64,
    /// Body weight in kilograms
    #[serde(default)]
    pub weight_kg: f64,
    /// Primary sport
    #[serde(default)]
    pub sport: Option<SportType>,
    /// Self-reported fitness level
    #[serde(default)]
    pub fitness_level: Option<FitnessLevel>,
    /// Years of structured training
    #[serde(default)]
    pub years_experience: u32,
    /// Training sessions per week
    #[serde(default)]
    pub training_frequency: Option<u32>,
    /// Whether the athlete currently carries an injury
    #[serde(default)]
    pub has_injuries: bool,
    /// Free-text injury notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_description: Option<String>,
}

/// Profile fields that plan generation cannot do without
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanRequirements {
    /// Primary sport
    pub sport: SportType,
    /// Fitness level
    pub fitness_level: FitnessLevel,
    /// Sessions per week
    pub training_frequency: u32,
}

impl AthleteProfile {
    /// Body mass index rounded to two decimals
    ///
    /// Returns `None` when height is not positive.
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        if self.height_cm <= 0.0 {
            return None;
        }
        let height_m = self.height_cm / 100.0;
        Some(crate::math::round_to(
            self.weight_kg / (height_m * height_m),
            2,
        ))
    }

    /// Extract the fields required for plan generation
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first absent field, or
    /// `ValueOutOfRange` when the training frequency is zero.
    pub fn plan_requirements(&self) -> AppResult<PlanRequirements> {
        let sport = self.sport.ok_or_else(|| AppError::missing_field("sport"))?;
        let fitness_level = self
            .fitness_level
            .ok_or_else(|| AppError::missing_field("fitness_level"))?;
        let training_frequency = self
            .training_frequency
            .ok_or_else(|| AppError::missing_field("training_frequency"))?;
        if training_frequency == 0 {
            return Err(AppError::out_of_range(
                "training_frequency",
                "training frequency must be at least one session per week",
            ));
        }
        Ok(PlanRequirements {
            sport,
            fitness_level,
            training_frequency,
        })
    }

    /// Whether the athlete's age is known and strictly above `threshold`
    #[must_use]
    pub fn is_older_than(&self, threshold: u32) -> bool {
        self.age.is_some_and(|age| age > threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AthleteProfile {
        AthleteProfile {
            age: Some(24),
            height_cm: 175.0,
            weight_kg: 70.0,
            sport: Some(SportType::Tennis),
            fitness_level: Some(FitnessLevel::Advanced),
            years_experience: 6,
            training_frequency: Some(5),
            has_injuries: false,
            injury_description: None,
        }
    }

    #[test]
    fn test_bmi() {
        assert_eq!(profile().bmi(), Some(22.86));
        let mut p = profile();
        p.height_cm = 0.0;
        assert_eq!(p.bmi(), None);
    }

    #[test]
    fn test_plan_requirements_reports_first_missing_field() {
        let mut p = profile();
        p.fitness_level = None;
        p.training_frequency = None;
        let err = p.plan_requirements().unwrap_err();
        assert_eq!(err.context.field.as_deref(), Some("fitness_level"));
    }

    #[test]
    fn test_plan_requirements_rejects_zero_frequency() {
        let mut p = profile();
        p.training_frequency = Some(0);
        let err = p.plan_requirements().unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_unknown_sport_deserializes_to_other() {
        let sport: SportType = serde_json::from_str("\"curling\"").unwrap();
        assert_eq!(sport, SportType::Other);
    }
}
