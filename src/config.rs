//! Configuration management for the `SmartMap` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::SmartMapError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `SmartMap` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartMapConfig {
    /// Remote text-generation API configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Destination catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default interactive settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Remote text-generation API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Gemini API key (required to reach interactive state)
    pub api_key: Option<String>,
    /// Base URL for the Gemini REST API
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    /// Model identifier requests are sent to
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_llm_timeout")]
    pub timeout_seconds: u32,
}

/// Destination catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the CSV catalog file
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the HTTP server listens on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default interactive settings surfaced to the frontend controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Lowest selectable daily budget, in dollars
    #[serde(default = "default_budget_floor")]
    pub budget_floor: u32,
    /// Highest selectable daily budget, in dollars
    #[serde(default = "default_budget_ceiling")]
    pub budget_ceiling: u32,
    /// Initial daily budget selection, in dollars
    #[serde(default = "default_budget_start")]
    pub budget_default: u32,
    /// Longest allowed trip, in days
    #[serde(default = "default_max_trip_days")]
    pub max_trip_days: u32,
    /// Initial trip duration selection, in days
    #[serde(default = "default_trip_days")]
    pub default_trip_days: u32,
    /// Initial interests text
    #[serde(default = "default_interests")]
    pub default_interests: String,
}

// Default value functions
fn default_llm_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_llm_model() -> String {
    "gemini-pro".to_string()
}

fn default_llm_timeout() -> u32 {
    30
}

fn default_catalog_path() -> String {
    "data/destinations.csv".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_budget_floor() -> u32 {
    20
}

fn default_budget_ceiling() -> u32 {
    300
}

fn default_budget_start() -> u32 {
    50
}

fn default_max_trip_days() -> u32 {
    7
}

fn default_trip_days() -> u32 {
    3
}

fn default_interests() -> String {
    "Street Food, Culture, Photography".to_string()
}

impl Default for SmartMapConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            catalog: CatalogConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            timeout_seconds: default_llm_timeout(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            budget_floor: default_budget_floor(),
            budget_ceiling: default_budget_ceiling(),
            budget_default: default_budget_start(),
            max_trip_days: default_max_trip_days(),
            default_trip_days: default_trip_days(),
            default_interests: default_interests(),
        }
    }
}

impl SmartMapConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided, else the user config dir,
        // else the repository-local default
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config/default.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with SMARTMAP_ prefix,
        // e.g. SMARTMAP_LLM__API_KEY maps to llm.api_key
        builder = builder.add_source(
            Environment::with_prefix("SMARTMAP")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: SmartMapConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("smartmap").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.llm.base_url.is_empty() {
            self.llm.base_url = default_llm_base_url();
        }
        if self.llm.model.is_empty() {
            self.llm.model = default_llm_model();
        }
        if self.llm.timeout_seconds == 0 {
            self.llm.timeout_seconds = default_llm_timeout();
        }
        if self.catalog.path.is_empty() {
            self.catalog.path = default_catalog_path();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.max_trip_days == 0 {
            self.defaults.max_trip_days = default_max_trip_days();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the remote API credential
    ///
    /// A missing or invalid key is fatal at startup; the session must not
    /// proceed to interactive state without one.
    pub fn validate_api_key(&self) -> Result<()> {
        let Some(api_key) = &self.llm.api_key else {
            return Err(SmartMapError::config(
                "Gemini API key is required. Set llm.api_key in the config file or the SMARTMAP_LLM__API_KEY environment variable."
            ).into());
        };

        if api_key.is_empty() {
            return Err(SmartMapError::config(
                "Gemini API key cannot be empty. Please provide a valid key.",
            )
            .into());
        }

        if api_key.len() < 8 {
            return Err(SmartMapError::config(
                "Gemini API key appears to be invalid (too short). Please check your API key.",
            )
            .into());
        }

        if api_key.len() > 200 {
            return Err(SmartMapError::config(
                "Gemini API key appears to be invalid (too long). Please check your API key.",
            )
            .into());
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.llm.timeout_seconds > 300 {
            return Err(SmartMapError::config("Request timeout cannot exceed 300 seconds").into());
        }

        if self.defaults.budget_floor >= self.defaults.budget_ceiling {
            return Err(SmartMapError::config(
                "Budget floor must be below the budget ceiling",
            )
            .into());
        }

        if self.defaults.budget_default < self.defaults.budget_floor
            || self.defaults.budget_default > self.defaults.budget_ceiling
        {
            return Err(SmartMapError::config(
                "Default budget must lie between the budget floor and ceiling",
            )
            .into());
        }

        if self.defaults.max_trip_days == 0 || self.defaults.max_trip_days > 30 {
            return Err(
                SmartMapError::config("Maximum trip length must be between 1 and 30 days").into(),
            );
        }

        if self.defaults.default_trip_days == 0
            || self.defaults.default_trip_days > self.defaults.max_trip_days
        {
            return Err(SmartMapError::config(
                "Default trip length must lie between 1 day and the maximum trip length",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SmartMapError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SmartMapError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.llm.base_url.starts_with("http://") && !self.llm.base_url.starts_with("https://") {
            return Err(
                SmartMapError::config("Gemini base URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        if self.llm.model.is_empty() {
            return Err(SmartMapError::config("Model identifier cannot be empty").into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> SmartMapConfig {
        let mut config = SmartMapConfig::default();
        config.llm.api_key = Some("valid_api_key_123".to_string());
        config
    }

    #[test]
    fn test_default_config() {
        let config = SmartMapConfig::default();
        assert_eq!(
            config.llm.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.llm.model, "gemini-pro");
        assert_eq!(config.llm.timeout_seconds, 30);
        assert_eq!(config.catalog.path, "data/destinations.csv");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.budget_floor, 20);
        assert_eq!(config.defaults.budget_ceiling, 300);
        assert_eq!(config.defaults.budget_default, 50);
        assert_eq!(config.defaults.max_trip_days, 7);
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn test_config_validation_missing_api_key() {
        let config = SmartMapConfig::default();
        let result = config.validate_api_key();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("API key is required")
        );
    }

    #[test]
    fn test_config_validation_valid_api_key() {
        let config = config_with_key();
        assert!(config.validate_api_key().is_ok());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_short_api_key() {
        let mut config = SmartMapConfig::default();
        config.llm.api_key = Some("short".to_string());
        let result = config.validate_api_key();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too short"));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = config_with_key();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = config_with_key();
        config.llm.timeout_seconds = 500; // Invalid - too high
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_config_validation_budget_bounds() {
        let mut config = config_with_key();
        config.defaults.budget_floor = 300;
        config.defaults.budget_ceiling = 20;
        assert!(config.validate().is_err());

        let mut config = config_with_key();
        config.defaults.budget_default = 500;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_trip_day_bounds() {
        let mut config = config_with_key();
        config.defaults.default_trip_days = 10; // Above max_trip_days = 7
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = SmartMapConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("smartmap"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
