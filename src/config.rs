use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::models::ScoringPoints;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Library configuration for the embedding service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    /// Score floor for match lists; defaults to the production policy
    pub min_score: Option<u8>,
    pub default_limit: Option<u8>,
    pub max_limit: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub points: PointsConfig,
}

/// Point-table overrides; any field left unset keeps the production value
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointsConfig {
    #[serde(default = "default_location_points")]
    pub location: u8,
    #[serde(default = "default_region_focus_points")]
    pub region_focus: u8,
    #[serde(default = "default_open_eligibility_points")]
    pub open_eligibility: u8,
    #[serde(default = "default_career_stage_points")]
    pub career_stage: u8,
    #[serde(default = "default_early_career_points")]
    pub early_career: u8,
    #[serde(default = "default_open_mediums_points")]
    pub open_mediums: u8,
    #[serde(default = "default_per_medium_points")]
    pub per_medium: u8,
    #[serde(default = "default_medium_cap_points")]
    pub medium_cap: u8,
    #[serde(default = "default_prize_funding_points")]
    pub prize_funding: u8,
    #[serde(default = "default_deadline_soon_points")]
    pub deadline_soon: u8,
    #[serde(default = "default_deadline_window_points")]
    pub deadline_window: u8,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            location: default_location_points(),
            region_focus: default_region_focus_points(),
            open_eligibility: default_open_eligibility_points(),
            career_stage: default_career_stage_points(),
            early_career: default_early_career_points(),
            open_mediums: default_open_mediums_points(),
            per_medium: default_per_medium_points(),
            medium_cap: default_medium_cap_points(),
            prize_funding: default_prize_funding_points(),
            deadline_soon: default_deadline_soon_points(),
            deadline_window: default_deadline_window_points(),
        }
    }
}

impl From<PointsConfig> for ScoringPoints {
    fn from(config: PointsConfig) -> Self {
        Self {
            location: config.location,
            region_focus: config.region_focus,
            open_eligibility: config.open_eligibility,
            career_stage: config.career_stage,
            early_career: config.early_career,
            open_mediums: config.open_mediums,
            per_medium: config.per_medium,
            medium_cap: config.medium_cap,
            prize_funding: config.prize_funding,
            deadline_soon: config.deadline_soon,
            deadline_window: config.deadline_window,
        }
    }
}

fn default_location_points() -> u8 { 30 }
fn default_region_focus_points() -> u8 { 25 }
fn default_open_eligibility_points() -> u8 { 20 }
fn default_career_stage_points() -> u8 { 25 }
fn default_early_career_points() -> u8 { 20 }
fn default_open_mediums_points() -> u8 { 20 }
fn default_per_medium_points() -> u8 { 8 }
fn default_medium_cap_points() -> u8 { 25 }
fn default_prize_funding_points() -> u8 { 10 }
fn default_deadline_soon_points() -> u8 { 5 }
fn default_deadline_window_points() -> u8 { 3 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with STUDIOMATE)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with STUDIOMATE)
            // e.g., STUDIOMATE__MATCHING__MIN_SCORE -> matching.min_score
            .add_source(
                Environment::with_prefix("STUDIOMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("STUDIOMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check cross-field constraints that serde cannot express
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(min_score) = self.matching.min_score {
            if min_score > 100 {
                return Err(SettingsError::Invalid(format!(
                    "matching.min_score must be at most 100, got {}",
                    min_score
                )));
            }
        }

        if let (Some(default_limit), Some(max_limit)) =
            (self.matching.default_limit, self.matching.max_limit)
        {
            if default_limit > max_limit {
                return Err(SettingsError::Invalid(format!(
                    "matching.default_limit ({}) exceeds matching.max_limit ({})",
                    default_limit, max_limit
                )));
            }
        }

        Ok(())
    }
}

/// Initialize the global tracing subscriber from logging settings
///
/// Call once at service startup.
pub fn init_logging(settings: &LoggingSettings) {
    let filter =
        EnvFilter::try_new(&settings.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}
