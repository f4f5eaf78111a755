//! Configuration management for the trip planner application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripPlannerError;
use crate::models::Currency;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the trip planner application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlannerConfig {
    /// Web server configuration
    pub server: ServerConfig,
    /// Mock weather source configuration
    pub weather: WeatherConfig,
    /// Advisory (LLM) backend configuration
    pub advisory: AdvisoryConfig,
    /// Reverse geocoding configuration
    pub geocoding: GeocodingConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Default session settings
    pub defaults: DefaultsConfig,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory served as the static frontend
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Mock weather source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Simulated upstream latency in milliseconds
    #[serde(default = "default_weather_delay")]
    pub simulated_delay_ms: u64,
}

/// Advisory backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    /// LLM API key; without one the offline heuristic provider is used
    pub api_key: Option<String>,
    /// Model identifier for the LLM backend
    #[serde(default = "default_advisory_model")]
    pub model: String,
    /// Per-operation timeout in seconds; expiry counts as a failure
    #[serde(default = "default_advisory_timeout")]
    pub timeout_seconds: u32,
}

/// Reverse geocoding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the Nominatim-compatible service
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout")]
    pub timeout_seconds: u32,
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

/// Default session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Currency preselected for new sessions
    #[serde(default = "default_currency")]
    pub currency: String,
}

// Default value functions
fn default_server_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "frontend/dist".to_string()
}

fn default_weather_delay() -> u64 {
    1500
}

fn default_advisory_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_advisory_timeout() -> u32 {
    20
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_geocoding_timeout() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Default for TripPlannerConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: default_server_port(),
                static_dir: default_static_dir(),
            },
            weather: WeatherConfig {
                simulated_delay_ms: default_weather_delay(),
            },
            advisory: AdvisoryConfig {
                api_key: None,
                model: default_advisory_model(),
                timeout_seconds: default_advisory_timeout(),
            },
            geocoding: GeocodingConfig {
                base_url: default_geocoding_base_url(),
                timeout_seconds: default_geocoding_timeout(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            defaults: DefaultsConfig {
                currency: default_currency(),
            },
        }
    }
}

impl TripPlannerConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRIPPLANNER_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPPLANNER")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TripPlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trip-planner").join("config.toml"))
    }

    /// Default currency as its typed form
    pub fn default_currency(&self) -> Result<Currency> {
        self.defaults
            .currency
            .parse()
            .with_context(|| format!("Invalid default currency '{}'", self.defaults.currency))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        // API key is optional; without one the offline provider serves advisories
        if let Some(api_key) = &self.advisory.api_key {
            if api_key.is_empty() {
                return Err(TripPlannerError::config(
                    "Advisory API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() < 8 {
                return Err(TripPlannerError::config(
                    "Advisory API key appears to be invalid (too short). Please check your API key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.advisory.timeout_seconds == 0 || self.advisory.timeout_seconds > 300 {
            return Err(TripPlannerError::config(
                "Advisory timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.geocoding.timeout_seconds == 0 || self.geocoding.timeout_seconds > 300 {
            return Err(TripPlannerError::config(
                "Geocoding timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.weather.simulated_delay_ms > 60_000 {
            return Err(TripPlannerError::config(
                "Simulated weather delay cannot exceed 60000 ms",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripPlannerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripPlannerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.geocoding.base_url.starts_with("http://")
            && !self.geocoding.base_url.starts_with("https://")
        {
            return Err(TripPlannerError::config(
                "Geocoding base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if self.defaults.currency.parse::<Currency>().is_err() {
            return Err(TripPlannerError::config(format!(
                "Invalid default currency '{}'. Must be one of: INR, USD, EUR, JPY",
                self.defaults.currency
            ))
            .into());
        }

        if self.advisory.model.trim().is_empty() {
            return Err(TripPlannerError::config("Advisory model cannot be empty").into());
        }

        Ok(())
    }
}
