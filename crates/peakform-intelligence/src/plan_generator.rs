// ABOUTME: Periodized weekly training plan generation from an athlete profile
// ABOUTME: Focus cycling, exercise selection, overload-scaled difficulty, sessions, and adaptations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

//! # Plan Generator
//!
//! Turns an [`AthleteProfile`] and a week number into a [`TrainingPlan`].
//! Generation is deterministic: the same profile, week and history always
//! produce the same plan.

use tracing::{debug, info};

use peakform_core::errors::{AppError, AppResult};
use peakform_core::math::round_to;
use peakform_core::models::{
    AthleteProfile, FitnessLevel, PerformanceHistory, ProfileAnalysis, RecoveryNeeds, Session,
    SportType, TargetAdaptations, TrainingCapacity, TrainingFocus, TrainingPlan, TrainingType,
};

use crate::config::{EngineConfig, PlanGeneratorConfig};
use crate::statistics::StatisticalAnalyzer;

/// Duration and difficulty for the week
#[derive(Debug, Clone, Copy, PartialEq)]
struct WeekParameters {
    total_minutes: u32,
    difficulty: f64,
}

/// Weekly training plan generator
pub struct PlanGenerator {
    config: PlanGeneratorConfig,
}

impl Default for PlanGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanGenerator {
    /// Generator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().plan.clone())
    }

    /// Generator using explicit tables
    #[must_use]
    pub const fn with_config(config: PlanGeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate the plan for `week` (1-based)
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the profile lacks sport, fitness level
    /// or training frequency, and `ValueOutOfRange` for week 0 or a training
    /// frequency of 0.
    pub fn generate(
        &self,
        profile: &AthleteProfile,
        week: u32,
        history: Option<&PerformanceHistory>,
    ) -> AppResult<TrainingPlan> {
        let required = profile
            .plan_requirements()
            .map_err(|e| e.with_operation("generate_plan"))?;
        if week == 0 {
            return Err(
                AppError::out_of_range("week_number", "week number must be at least 1")
                    .with_operation("generate_plan"),
            );
        }

        let profile_analysis = self.analyze_profile(profile, required.training_frequency, history);
        let focus = self.training_focus(required.sport, week)?;
        let exercises = self.select_exercises(required.sport, required.fitness_level, focus.primary);
        let params = self.week_parameters(required.fitness_level, week);
        let sessions = self.weekly_sessions(&exercises, params, required.training_frequency);
        let target_adaptations = self.target_adaptations(focus.primary);

        info!(
            week,
            training_type = %focus.primary,
            sessions = sessions.len(),
            difficulty = params.difficulty,
            "Generated training plan"
        );

        Ok(TrainingPlan {
            week_number: week,
            training_type: focus.primary,
            focus,
            profile_analysis,
            exercises,
            target_adaptations,
            expected_duration_minutes: params.total_minutes,
            difficulty_score: params.difficulty,
            sessions,
        })
    }

    /// Advisory capacity and recovery annotations
    fn analyze_profile(
        &self,
        profile: &AthleteProfile,
        frequency: u32,
        history: Option<&PerformanceHistory>,
    ) -> ProfileAnalysis {
        let thresholds = &self.config.profile_analysis;
        let experience = profile.years_experience;

        let training_capacity = if experience >= thresholds.high_capacity_min_experience
            && frequency >= thresholds.high_capacity_min_frequency
        {
            TrainingCapacity::High
        } else if experience <= thresholds.low_capacity_max_experience
            || frequency <= thresholds.low_capacity_max_frequency
        {
            TrainingCapacity::Low
        } else {
            TrainingCapacity::Moderate
        };

        let age = profile.age.unwrap_or(thresholds.default_age);
        let recovery_needs = if age > thresholds.extended_recovery_above_age {
            RecoveryNeeds::Extended
        } else if age < thresholds.quick_recovery_below_age {
            RecoveryNeeds::Quick
        } else {
            RecoveryNeeds::Standard
        };

        ProfileAnalysis {
            training_capacity,
            recovery_needs,
            injury_considerations: profile.has_injuries,
            recent_trend_percent: history
                .map(|h| StatisticalAnalyzer::recent_trend_percent(h, thresholds.trend_window)),
        }
    }

    /// Focus for the week from the periodization cycle
    fn training_focus(&self, sport: SportType, week: u32) -> AppResult<TrainingFocus> {
        let cycle = &self.config.periodization;
        let index = (week as usize - 1) % cycle.len().max(1);
        let pair = cycle
            .get(index)
            .ok_or_else(|| AppError::config("periodization cycle is empty"))?;

        let sport_adjustments = self
            .config
            .sport_adjustments
            .get(&sport)
            .cloned()
            .unwrap_or_else(|| {
                debug!(sport = %sport, "No sport adjustments configured");
                Default::default()
            });

        Ok(TrainingFocus {
            primary: pair.primary,
            secondary: pair.secondary,
            sport_adjustments,
        })
    }

    /// Primary-focus exercises first, then sport exercises, capped per session
    fn select_exercises(
        &self,
        sport: SportType,
        level: FitnessLevel,
        primary: TrainingType,
    ) -> Vec<String> {
        let mut selected: Vec<String> = self
            .config
            .exercise_catalog
            .get(&primary)
            .map(|bucket| {
                bucket
                    .get(level)
                    .iter()
                    .take(self.config.primary_exercise_count)
                    .cloned()
                    .collect()
            })
            .unwrap_or_else(|| {
                debug!(training_type = %primary, "No catalog entry for training type");
                Vec::new()
            });

        if let Some(sport_list) = self.config.sport_exercises.get(&sport) {
            selected.extend(
                sport_list
                    .iter()
                    .take(self.config.sport_exercise_count)
                    .cloned(),
            );
        }

        selected.truncate(self.config.max_exercises_per_session);
        selected
    }

    /// Level-scaled duration and overload-scaled difficulty
    fn week_parameters(&self, level: FitnessLevel, week: u32) -> WeekParameters {
        let scaling = self.config.level_scaling.get(level);
        let total_minutes = (self.config.base_duration_minutes * scaling.duration) as u32;

        let overload = self
            .config
            .overload_step
            .mul_add(f64::from(week - 1), 1.0)
            .min(self.config.overload_cap);
        let difficulty = (self.config.base_difficulty * scaling.difficulty * overload)
            .clamp(self.config.min_difficulty, self.config.max_difficulty);

        WeekParameters {
            total_minutes,
            difficulty: round_to(difficulty, 1),
        }
    }

    fn weekly_sessions(
        &self,
        exercises: &[String],
        params: WeekParameters,
        frequency: u32,
    ) -> Vec<Session> {
        let labels = self.config.session_labels.for_frequency(frequency);
        let fixed = self.config.warm_up_minutes + self.config.cool_down_minutes;
        let main_minutes = params.total_minutes.saturating_sub(fixed);

        (1..=frequency)
            .filter_map(|day| {
                let focus = *labels.get((day as usize - 1) % labels.len().max(1))?;
                Some(Session {
                    day,
                    focus,
                    warm_up_minutes: self.config.warm_up_minutes,
                    main_minutes,
                    cool_down_minutes: self.config.cool_down_minutes,
                    exercises: exercises.to_vec(),
                    difficulty_score: params.difficulty,
                })
            })
            .collect()
    }

    fn target_adaptations(&self, primary: TrainingType) -> TargetAdaptations {
        let mut adaptations = self.config.baseline_adaptations;
        if let Some(overrides) = self.config.adaptation_overrides.get(&primary) {
            for o in overrides {
                adaptations.set(o.target, o.weight);
            }
        }
        adaptations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peakform_core::errors::ErrorCode;
    use peakform_core::models::{AdaptationTarget, SessionFocus};

    fn profile(level: FitnessLevel, frequency: u32) -> AthleteProfile {
        AthleteProfile {
            age: Some(22),
            height_cm: 182.0,
            weight_kg: 80.0,
            sport: Some(SportType::Football),
            fitness_level: Some(level),
            years_experience: 3,
            training_frequency: Some(frequency),
            has_injuries: false,
            injury_description: None,
        }
    }

    fn generator() -> PlanGenerator {
        PlanGenerator::with_config(PlanGeneratorConfig::default())
    }

    #[test]
    fn test_periodization_cycle() {
        let g = generator();
        let p = profile(FitnessLevel::Intermediate, 3);
        let types: Vec<TrainingType> = (1..=5)
            .map(|week| g.generate(&p, week, None).unwrap().training_type)
            .collect();
        assert_eq!(
            types,
            vec![
                TrainingType::Strength,
                TrainingType::Hiit,
                TrainingType::Endurance,
                TrainingType::Agility,
                TrainingType::Strength,
            ]
        );
    }

    #[test]
    fn test_level_independent_bucket_and_sport_cap() {
        let plan = generator()
            .generate(&profile(FitnessLevel::Elite, 4), 4, None)
            .unwrap();
        assert_eq!(
            plan.exercises,
            vec!["ladder_drills", "t_test", "cone_drills", "40_yard_dash", "position_drills"]
        );
    }

    #[test]
    fn test_sessions_cycle_labels() {
        let plan = generator()
            .generate(&profile(FitnessLevel::Intermediate, 7), 1, None)
            .unwrap();
        assert_eq!(plan.sessions.len(), 7);
        assert_eq!(plan.sessions[4].focus, SessionFocus::SportSpecific);
        assert_eq!(plan.sessions[6].focus, SessionFocus::ActiveRecovery);
        assert!(plan.sessions.iter().all(|s| s.main_minutes == 25));
        assert!(plan.sessions.iter().all(|s| s.total_minutes() == 45));
    }

    #[test]
    fn test_elite_difficulty_is_clamped() {
        let plan = generator()
            .generate(&profile(FitnessLevel::Elite, 5), 21, None)
            .unwrap();
        assert!((plan.difficulty_score - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_beginner_scaling() {
        let plan = generator()
            .generate(&profile(FitnessLevel::Beginner, 2), 1, None)
            .unwrap();
        assert_eq!(plan.expected_duration_minutes, 36);
        assert!((plan.difficulty_score - 3.5).abs() < f64::EPSILON);
        assert_eq!(plan.profile_analysis.training_capacity, TrainingCapacity::Low);
        assert_eq!(plan.profile_analysis.recovery_needs, RecoveryNeeds::Quick);
        assert_eq!(plan.profile_analysis.recent_trend_percent, None);
    }

    #[test]
    fn test_strength_focus_overrides_adaptations() {
        let plan = generator()
            .generate(&profile(FitnessLevel::Advanced, 3), 1, None)
            .unwrap();
        let weights = plan.target_adaptations;
        assert!((weights.get(AdaptationTarget::Type2Activation) - 0.9).abs() < f64::EPSILON);
        assert!((weights.get(AdaptationTarget::Oxidative) - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_and_invalid_inputs() {
        let mut p = profile(FitnessLevel::Intermediate, 3);
        p.sport = None;
        let err = generator().generate(&p, 1, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(err.context.field.as_deref(), Some("sport"));

        let err = generator()
            .generate(&profile(FitnessLevel::Intermediate, 3), 0, None)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}
