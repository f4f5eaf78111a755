//! Error types and handling for the trip planner application

use thiserror::Error;

/// Main error type for the trip planner application
#[derive(Error, Debug)]
pub enum TripPlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The weather source failed for the current query
    #[error("Weather unavailable: {message}")]
    WeatherUnavailable { message: String },

    /// An advisory operation's backing service failed or returned
    /// content that does not match its output schema
    #[error("Advisory operation '{operation}' failed: {message}")]
    AdvisoryUpstream { operation: String, message: String },

    /// Reverse geocoding of device coordinates failed
    #[error("Geolocation error: {message}")]
    Geolocation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TripPlannerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new weather-unavailable error
    pub fn weather_unavailable<S: Into<String>>(message: S) -> Self {
        Self::WeatherUnavailable {
            message: message.into(),
        }
    }

    /// Create a new advisory upstream error
    pub fn advisory_upstream<S: Into<String>, M: Into<String>>(operation: S, message: M) -> Self {
        Self::AdvisoryUpstream {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a new geolocation error
    pub fn geolocation<S: Into<String>>(message: S) -> Self {
        Self::Geolocation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripPlannerError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            TripPlannerError::Validation { message } => message.clone(),
            TripPlannerError::WeatherUnavailable { .. } => {
                "Failed to fetch weather data. Please try again later.".to_string()
            }
            TripPlannerError::AdvisoryUpstream { .. } => {
                "Could not load travel suggestions at the moment, but here is your weather!"
                    .to_string()
            }
            TripPlannerError::Geolocation { .. } => {
                "Could not determine your city from your location. Please enter it manually."
                    .to_string()
            }
            TripPlannerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripPlannerError::config("missing API key");
        assert!(matches!(config_err, TripPlannerError::Config { .. }));

        let weather_err = TripPlannerError::weather_unavailable("upstream down");
        assert!(matches!(
            weather_err,
            TripPlannerError::WeatherUnavailable { .. }
        ));

        let validation_err = TripPlannerError::validation("Please enter a location.");
        assert!(matches!(
            validation_err,
            TripPlannerError::Validation { .. }
        ));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TripPlannerError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let weather_err = TripPlannerError::weather_unavailable("test");
        assert!(weather_err.user_message().contains("weather data"));

        let validation_err = TripPlannerError::validation("Please enter a location.");
        assert_eq!(validation_err.user_message(), "Please enter a location.");

        let geo_err = TripPlannerError::geolocation("denied");
        assert!(geo_err.user_message().contains("enter it manually"));
    }

    #[test]
    fn test_advisory_error_names_operation() {
        let err = TripPlannerError::advisory_upstream("suggest_hotels", "timeout");
        assert!(err.to_string().contains("suggest_hotels"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let trip_err: TripPlannerError = io_err.into();
        assert!(matches!(trip_err, TripPlannerError::Io { .. }));
    }
}
