//! Configuration management for the roast curve analyzer
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with ROAST_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::analysis::EngineSettings;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Engine threshold configuration
    pub engine: EngineConfig,

    /// Timeline axis configuration
    pub timeline: TimelineConfig,

    /// CSV ingestion configuration
    pub ingest: IngestConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Bean temperature marking the end of the drying phase (°C)
    pub drying_end_temp_c: f64,

    /// Bean temperature approximating first crack (°C)
    pub first_crack_temp_c: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TimelineConfig {
    /// Fixed axis domain in seconds
    pub max_total_seconds: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IngestConfig {
    /// Logical name of the sample-time column
    pub time_column: String,

    /// Logical name of the bean-surface-temperature column
    pub temp_column: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("ROAST_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("engine.drying_end_temp_c", shared::analysis::DRYING_END_TEMP_C)?
            .set_default("engine.first_crack_temp_c", shared::analysis::FIRST_CRACK_TEMP_C)?
            .set_default(
                "timeline.max_total_seconds",
                i64::from(shared::analysis::DEFAULT_TIMELINE_SECONDS),
            )?
            .set_default("ingest.time_column", "time")?
            .set_default("ingest.temp_column", "bean_surface")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (ROAST_ prefix)
            .add_source(
                Environment::with_prefix("ROAST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Engine settings derived from the threshold configuration
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            drying_end_temp_c: self.engine.drying_end_temp_c,
            first_crack_temp_c: self.engine.first_crack_temp_c,
        }
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            time_column: "time".to_string(),
            temp_column: "bean_surface".to_string(),
        }
    }
}
