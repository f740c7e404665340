use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::SelectionParams;
use crate::services::LoadOptions;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    pub selection: SelectionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    /// Adds a development Content-Security-Policy header to every response
    pub development: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            workers: None,
            development: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub path: String,
    pub drop_incomplete: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: "data/dishes.csv".to_string(),
            drop_incomplete: true,
        }
    }
}

impl CatalogSettings {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            drop_incomplete: self.drop_incomplete,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectionSettings {
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
    #[serde(default = "default_recommendation_seed")]
    pub recommendation_seed: u64,
    #[serde(default = "default_recently_rated_limit")]
    pub recently_rated_limit: usize,
    #[serde(default = "default_recently_rated_seed")]
    pub recently_rated_seed: u64,
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
    #[serde(default = "default_featured_seed")]
    pub featured_seed: u64,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            recommendation_limit: default_recommendation_limit(),
            recommendation_seed: default_recommendation_seed(),
            recently_rated_limit: default_recently_rated_limit(),
            recently_rated_seed: default_recently_rated_seed(),
            featured_limit: default_featured_limit(),
            featured_seed: default_featured_seed(),
        }
    }
}

fn default_recommendation_limit() -> usize { 6 }
fn default_recommendation_seed() -> u64 { 42 }
fn default_recently_rated_limit() -> usize { 6 }
fn default_recently_rated_seed() -> u64 { 10 }
fn default_featured_limit() -> usize { 12 }
fn default_featured_seed() -> u64 { 42 }

impl SelectionSettings {
    pub fn params(&self) -> SelectionParams {
        SelectionParams {
            recommendation_limit: self.recommendation_limit,
            recommendation_seed: self.recommendation_seed,
            recently_rated_limit: self.recently_rated_limit,
            recently_rated_seed: self.recently_rated_seed,
            featured_limit: self.featured_limit,
            featured_seed: self.featured_seed,
        }
    }
}

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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DISHREC)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DISHREC__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("DISHREC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// [`Settings::load`] for process startup, before logging exists
    pub fn load_for_startup() -> std::io::Result<Self> {
        Self::load().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("configuration error: {}", e),
            )
        })
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DISHREC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// `DATASET_PATH` wins over any configured catalog path
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("DATASET_PATH") {
        Ok(path) => Config::builder()
            .add_source(settings)
            .set_override("catalog.path", path)?
            .build(),
        Err(_) => Ok(settings),
    }
}
