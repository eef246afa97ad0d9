// ABOUTME: Engine configuration container with global access, file loading, and env overrides
// ABOUTME: Holds every lookup table and tunable constant so algorithms never embed literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

//! Configuration-as-data for the engine.
//!
//! [`EngineConfig::global`] loads once per process: defaults, then an optional
//! JSON file named by `PEAKFORM_CONFIG_PATH`, then scalar environment overrides,
//! then validation. Components can also be built from an explicit config so that
//! hosts and tests substitute tables without touching algorithm code.

/// Trend and baseline analytics thresholds
pub mod analytics;
/// Configuration error types
pub mod error;
/// Exercise load optimizer tables
pub mod load;
/// Plan generator tables
pub mod plan;
/// Improvement predictor tables
pub mod prediction;
/// Generic per-level table shapes
pub mod tables;

pub use analytics::AnalyticsConfig;
pub use error::ConfigError;
pub use load::{BaseLoad, LoadOptimizerConfig, LoadProfileDefaults};
pub use plan::{
    AdaptationOverride, LevelScaling, PlanGeneratorConfig, ProfileAnalysisConfig,
    SessionLabelSets,
};
pub use prediction::{ConfidenceConfig, PredictionConfig, ThresholdFactor};
pub use tables::{LevelBucket, LevelTable};

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

use peakform_core::models::{RepScheme, TargetAdaptations};

/// Environment variable naming an optional JSON configuration file
pub const CONFIG_PATH_ENV: &str = "PEAKFORM_CONFIG_PATH";

/// Longest recent window accepted for performance stats, in days
pub const MAX_RECENT_WINDOW_DAYS: i64 = 3650;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plan generator tables
    pub plan: PlanGeneratorConfig,
    /// Improvement predictor tables
    pub prediction: PredictionConfig,
    /// Exercise load optimizer tables
    pub load: LoadOptimizerConfig,
    /// Analytics thresholds
    pub analytics: AnalyticsConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from an optional file and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, an environment
    /// variable holds an invalid value, or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        config.apply_env_overrides()?.validated()
    }

    /// Read a JSON configuration file; omitted sections keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "Loaded engine config file");
        Ok(config)
    }

    /// Validate and return the configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate_plan()?;
        self.validate_prediction()?;
        self.validate_load()?;
        self.validate_analytics()?;
        Ok(self)
    }

    /// Parse an environment variable into `target` if it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "PEAKFORM_PLAN_BASE_DURATION",
            &mut self.plan.base_duration_minutes,
        )?;
        Self::apply_env_var(
            "PEAKFORM_PLAN_BASE_DIFFICULTY",
            &mut self.plan.base_difficulty,
        )?;
        Self::apply_env_var("PEAKFORM_PLAN_OVERLOAD_STEP", &mut self.plan.overload_step)?;
        Self::apply_env_var("PEAKFORM_PLAN_OVERLOAD_CAP", &mut self.plan.overload_cap)?;
        Self::apply_env_var(
            "PEAKFORM_ANALYTICS_SLOPE_THRESHOLD",
            &mut self.analytics.slope_threshold,
        )?;
        Ok(self)
    }

    fn validate_plan(&self) -> Result<(), ConfigError> {
        let plan = &self.plan;
        if plan.base_duration_minutes <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "plan.base_duration_minutes must be positive",
            ));
        }
        if plan.min_difficulty < 0.0 || plan.min_difficulty >= plan.max_difficulty {
            return Err(ConfigError::InvalidRange(
                "plan.min_difficulty must be non-negative and below plan.max_difficulty",
            ));
        }
        if plan.base_difficulty < plan.min_difficulty || plan.base_difficulty > plan.max_difficulty
        {
            return Err(ConfigError::ValueOutOfRange(
                "plan.base_difficulty must lie within the difficulty bounds",
            ));
        }
        if plan.overload_step < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "plan.overload_step must be non-negative",
            ));
        }
        if plan.overload_cap < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "plan.overload_cap must be at least 1.0",
            ));
        }
        if plan.max_exercises_per_session == 0 || plan.max_exercises_per_session > 6 {
            return Err(ConfigError::ValueOutOfRange(
                "plan.max_exercises_per_session must be between 1 and 6",
            ));
        }
        if plan.profile_analysis.trend_window < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "plan.profile_analysis.trend_window needs at least two points",
            ));
        }
        if plan.periodization.is_empty() {
            return Err(ConfigError::MissingField("plan.periodization"));
        }
        let labels = &plan.session_labels;
        if labels.compact.is_empty() || labels.standard.is_empty() || labels.extended.is_empty() {
            return Err(ConfigError::MissingField("plan.session_labels"));
        }
        if labels.compact_max_frequency >= labels.standard_max_frequency {
            return Err(ConfigError::InvalidRange(
                "plan.session_labels frequency bands must be increasing",
            ));
        }
        let fixed_minutes = f64::from(plan.warm_up_minutes + plan.cool_down_minutes);
        for (_, scaling) in plan.level_scaling.iter() {
            if scaling.duration <= 0.0 || scaling.difficulty <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "plan.level_scaling multipliers must be positive",
                ));
            }
            if (plan.base_duration_minutes * scaling.duration).trunc() < fixed_minutes {
                return Err(ConfigError::InvalidRange(
                    "plan session duration must cover warm-up and cool-down",
                ));
            }
        }
        if !weights_in_unit_range(&plan.baseline_adaptations)
            || plan
                .adaptation_overrides
                .values()
                .flatten()
                .any(|o| !(0.0..=1.0).contains(&o.weight))
        {
            return Err(ConfigError::ValueOutOfRange(
                "plan adaptation weights must lie in [0, 1]",
            ));
        }
        Ok(())
    }

    fn validate_prediction(&self) -> Result<(), ConfigError> {
        let prediction = &self.prediction;
        if prediction.base_weekly_rates.is_empty() {
            return Err(ConfigError::MissingField("prediction.base_weekly_rates"));
        }
        if prediction.base_weekly_rates.values().any(|r| *r < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "prediction.base_weekly_rates must be non-negative",
            ));
        }
        if prediction.level_multipliers.iter().any(|(_, m)| *m <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "prediction.level_multipliers must be positive",
            ));
        }
        let confidence = &prediction.confidence;
        if confidence.min < 0.0 || confidence.max > 1.0 || confidence.min > confidence.max {
            return Err(ConfigError::InvalidRange(
                "prediction.confidence bounds must satisfy 0 <= min <= max <= 1",
            ));
        }
        Ok(())
    }

    fn validate_load(&self) -> Result<(), ConfigError> {
        let load = &self.load;
        let all_valid = load
            .base_loads
            .values()
            .flat_map(LevelBucket::entries)
            .chain(std::iter::once(&load.default_load))
            .all(base_load_is_valid);
        if !all_valid {
            return Err(ConfigError::ValueOutOfRange(
                "load entries need sets >= 1, valid reps, and intensity in [0, 100]",
            ));
        }
        if load.full_experience_years <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "load.full_experience_years must be positive",
            ));
        }
        if load.improving_factor <= 0.0 || load.declining_factor <= 0.0 || load.age_factor <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "load factors must be positive",
            ));
        }
        if load.trend_window < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "load.trend_window needs at least two points",
            ));
        }
        if load.min_rep_range_width == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "load.min_rep_range_width must be at least 1",
            ));
        }
        Ok(())
    }

    fn validate_analytics(&self) -> Result<(), ConfigError> {
        let analytics = &self.analytics;
        if analytics.slope_threshold < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "analytics.slope_threshold must be non-negative",
            ));
        }
        if analytics.short_term_window < 2 || analytics.long_term_min_points < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "analytics trend windows need at least two points",
            ));
        }
        if !(1..=MAX_RECENT_WINDOW_DAYS).contains(&analytics.recent_window_days) {
            return Err(ConfigError::ValueOutOfRange(
                "analytics.recent_window_days must be between 1 and 3650",
            ));
        }
        if analytics.long_term_window < analytics.long_term_min_points {
            return Err(ConfigError::InvalidRange(
                "analytics.long_term_window must cover long_term_min_points",
            ));
        }
        if analytics.weakness_progress > analytics.priority_progress
            || analytics.priority_progress > analytics.strength_progress
        {
            return Err(ConfigError::InvalidRange(
                "analytics progress bands must satisfy weakness <= priority <= strength",
            ));
        }
        if !(0.0..=1.0).contains(&analytics.decline_ratio)
            || !(0.0..=1.0).contains(&analytics.overtraining_ratio)
        {
            return Err(ConfigError::ValueOutOfRange(
                "analytics risk ratios must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

fn weights_in_unit_range(adaptations: &TargetAdaptations) -> bool {
    adaptations
        .entries()
        .iter()
        .all(|(_, w)| (0.0..=1.0).contains(w))
}

fn base_load_is_valid(load: &BaseLoad) -> bool {
    let reps_valid = match load.reps {
        RepScheme::Fixed { reps } => reps >= 1,
        RepScheme::Range { min, max } => min >= 1 && max > min,
    };
    load.sets >= 1 && reps_valid && (0.0..=100.0).contains(&load.intensity_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validated().is_ok());
    }

    #[test]
    fn test_empty_periodization_rejected() {
        let mut config = EngineConfig::default();
        config.plan.periodization.clear();
        assert!(matches!(
            config.validated(),
            Err(ConfigError::MissingField("plan.periodization"))
        ));
    }

    #[test]
    fn test_recent_window_bounds() {
        for days in [0, -7, MAX_RECENT_WINDOW_DAYS + 1, i64::MAX] {
            let mut config = EngineConfig::default();
            config.analytics.recent_window_days = days;
            assert!(
                matches!(config.validated(), Err(ConfigError::ValueOutOfRange(_))),
                "{days} days accepted"
            );
        }
        let mut config = EngineConfig::default();
        config.analytics.recent_window_days = MAX_RECENT_WINDOW_DAYS;
        assert!(config.validated().is_ok());
    }

    #[test]
    fn test_trend_windows_need_two_points() {
        let mut config = EngineConfig::default();
        config.load.trend_window = 1;
        assert!(config.validated().is_err());

        let mut config = EngineConfig::default();
        config.plan.profile_analysis.trend_window = 0;
        assert!(config.validated().is_err());
    }

    #[test]
    fn test_invalid_rep_range_rejected() {
        let mut config = EngineConfig::default();
        config.load.default_load.reps = RepScheme::Range { min: 8, max: 8 };
        assert!(config.validated().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"plan": {"base_duration_minutes": 60.0}}"#).unwrap();
        assert!((config.plan.base_duration_minutes - 60.0).abs() < f64::EPSILON);
        assert_eq!(config.plan.periodization.len(), 4);
        assert_eq!(config.prediction, PredictionConfig::default());
    }

    #[test]
    fn test_default_tables_survive_json_round_trip() {
        let json = serde_json::to_string(&EngineConfig::default()).unwrap();
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, EngineConfig::default());
    }
}
