// ABOUTME: Closed-form per-metric improvement prediction for a training type over a horizon
// ABOUTME: Age and level scaled weekly rates, training and sport multipliers, dampeners, confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use peakform_core::errors::{AppError, AppResult};
use peakform_core::math::round_to;
use peakform_core::models::{AthleteProfile, FitnessLevel, Metric, TrainingType};

use crate::config::{EngineConfig, PredictionConfig};

/// Predicted improvement for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementPrediction {
    /// Total improvement over the horizon, percent
    pub expected_improvement_percent: f64,
    /// Confidence in `[0.3, 0.95]` with the default configuration
    pub confidence: f64,
    /// Improvement per week before dampeners, percent
    pub weekly_rate: f64,
}

/// Predicts improvement per metric
pub struct ImprovementPredictor {
    config: PredictionConfig,
}

impl Default for ImprovementPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImprovementPredictor {
    /// Predictor using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().prediction.clone())
    }

    /// Predictor using explicit tables
    #[must_use]
    pub const fn with_config(config: PredictionConfig) -> Self {
        Self { config }
    }

    /// Predict improvement of every configured metric after `weeks_ahead` weeks of `training_type`
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the profile lacks age or fitness
    /// level, and `ValueOutOfRange` if `weeks_ahead` is 0.
    pub fn predict(
        &self,
        profile: &AthleteProfile,
        training_type: TrainingType,
        weeks_ahead: u32,
    ) -> AppResult<BTreeMap<Metric, ImprovementPrediction>> {
        let age = profile
            .age
            .ok_or_else(|| AppError::missing_field("age").with_operation("predict_improvement"))?;
        let level = profile.fitness_level.ok_or_else(|| {
            AppError::missing_field("fitness_level").with_operation("predict_improvement")
        })?;
        if weeks_ahead == 0 {
            return Err(AppError::out_of_range(
                "weeks_ahead",
                "prediction horizon must be at least one week",
            )
            .with_operation("predict_improvement"));
        }

        let rate_scale = self.rate_scale(age, level);
        let dampening = self.config.experience_dampener.apply(profile.years_experience)
            * self.config.age_dampener.apply(age);
        let training = self.config.training_multipliers.get(&training_type);
        if training.is_none() {
            debug!(training_type = %training_type, "No training multipliers configured");
        }
        let sport = profile
            .sport
            .and_then(|s| self.config.sport_factors.get(&s));

        let predictions: BTreeMap<Metric, ImprovementPrediction> = self
            .config
            .base_weekly_rates
            .iter()
            .map(|(&metric, &base)| {
                let multiplier = training.and_then(|t| t.get(&metric)).copied().unwrap_or(1.0);
                let sport_factor = sport.and_then(|s| s.get(&metric)).copied().unwrap_or(1.0);
                let weekly = base * rate_scale * multiplier * sport_factor;
                let total = weekly * f64::from(weeks_ahead) * dampening;
                (
                    metric,
                    ImprovementPrediction {
                        expected_improvement_percent: round_to(total, 2),
                        confidence: self.confidence(profile.years_experience, age, metric),
                        weekly_rate: round_to(weekly, 2),
                    },
                )
            })
            .collect();

        debug!(
            training_type = %training_type,
            weeks_ahead,
            metrics = predictions.len(),
            "Predicted improvement"
        );
        Ok(predictions)
    }

    /// Age tiers and level multiplier applied to every base rate
    fn rate_scale(&self, age: u32, level: FitnessLevel) -> f64 {
        let age_scale: f64 = self.config.age_tiers.iter().map(|t| t.apply(age)).product();
        age_scale * self.config.level_multipliers.get(level)
    }

    fn confidence(&self, years_experience: u32, age: u32, metric: Metric) -> f64 {
        let c = &self.config.confidence;
        let mut score = c.base;
        if years_experience >= c.experience_bonus_min_years {
            score += c.experience_bonus;
        }
        if age > c.age_penalty_above {
            score -= c.age_penalty;
        }
        let factor = c
            .metric_factors
            .get(&metric)
            .copied()
            .unwrap_or(c.default_metric_factor);
        round_to((score * factor).clamp(c.min, c.max), 2)
    }
}
