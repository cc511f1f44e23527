use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringThresholds;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_high_score")]
    pub high_score: u32,
    #[serde(default = "default_elevated_score")]
    pub elevated_score: u32,
    #[serde(default = "default_mmse_cutoff")]
    pub mmse_cutoff: u8,
    #[serde(default = "default_bmi_cutoff")]
    pub bmi_cutoff: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            high_score: default_high_score(),
            elevated_score: default_elevated_score(),
            mmse_cutoff: default_mmse_cutoff(),
            bmi_cutoff: default_bmi_cutoff(),
        }
    }
}

impl From<ThresholdsConfig> for ScoringThresholds {
    fn from(config: ThresholdsConfig) -> Self {
        Self {
            high_score: config.high_score,
            elevated_score: config.elevated_score,
            mmse_cutoff: config.mmse_cutoff,
            bmi_cutoff: config.bmi_cutoff,
        }
    }
}

fn default_high_score() -> u32 { 7 }
fn default_elevated_score() -> u32 { 4 }
fn default_mmse_cutoff() -> u8 { 20 }
fn default_bmi_cutoff() -> f64 { 30.0 }

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
    /// 3. Environment variables (prefixed with ALZDETECT__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ALZDETECT__)
            // e.g., ALZDETECT__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ALZDETECT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ALZDETECT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
