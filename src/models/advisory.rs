//! Input and output schemas for the five advisory operations.
//!
//! Each operation is a stateless request/response contract. Outputs carry a
//! documented fallback literal the orchestrator substitutes when the backing
//! service fails or returns content that does not validate.

use serde::{Deserialize, Serialize};

use crate::models::{Currency, WeatherDescription, WeatherSnapshot};

/// Maximum number of entries the list-producing operations may return
pub const MAX_SUGGESTIONS: usize = 3;

/// Travel safety assessment levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyLevel {
    Safe,
    Caution,
    Dangerous,
}

/// Input for the personalized advice operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceInput {
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_kph: f64,
    pub description: String,
}

impl AdviceInput {
    /// Project the advice input from a weather snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Self {
        Self {
            temperature_c: snapshot.current.temperature_c,
            humidity_pct: snapshot.current.humidity_pct,
            wind_kph: snapshot.current.wind_kph,
            description: snapshot.current.description.to_string(),
        }
    }
}

/// Output of the personalized advice operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceOutput {
    /// One sentence of weather-appropriate advice
    pub advice: String,
}

impl AdviceOutput {
    /// Fallback used when the operation fails
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            advice: "Could not load advice at the moment, but here is your weather!".to_string(),
        }
    }
}

/// Input for the travel safety operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelSafetyInput {
    pub temperature_c: f64,
    pub wind_kph: f64,
    pub description: String,
}

impl TravelSafetyInput {
    /// Project the travel safety input from a weather snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Self {
        Self {
            temperature_c: snapshot.current.temperature_c,
            wind_kph: snapshot.current.wind_kph,
            description: snapshot.current.description.to_string(),
        }
    }
}

/// Output of the travel safety operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelSafetyOutput {
    /// Short suggestion on whether it is safe to travel
    pub suggestion: String,
    pub safety_level: SafetyLevel,
}

impl TravelSafetyOutput {
    /// Fallback used when the operation fails
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            suggestion: "Could not load travel suggestion.".to_string(),
            safety_level: SafetyLevel::Caution,
        }
    }
}

/// Input for the places-to-visit operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesInput {
    pub city: String,
    pub description: String,
}

/// One suggested place to visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    /// One-sentence description
    pub description: String,
    /// Ideal condition to visit under, when the model provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_weather: Option<WeatherDescription>,
}

/// Output of the places-to-visit operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesOutput {
    pub places: Vec<Place>,
}

impl PlacesOutput {
    /// Fallback used when the operation fails
    #[must_use]
    pub fn fallback() -> Self {
        Self { places: Vec::new() }
    }
}

/// Input for the hotel suggestion operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelsInput {
    pub city: String,
    pub currency: String,
}

impl HotelsInput {
    #[must_use]
    pub fn new(city: &str, currency: Currency) -> Self {
        Self {
            city: city.to_string(),
            currency: currency.code().to_string(),
        }
    }
}

/// One suggested hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    /// Estimated price per night in the requested currency
    pub price: f64,
    /// One-sentence description
    pub description: String,
}

/// Output of the hotel suggestion operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelsOutput {
    pub hotels: Vec<Hotel>,
}

impl HotelsOutput {
    /// Fallback used when the operation fails
    #[must_use]
    pub fn fallback() -> Self {
        Self { hotels: Vec::new() }
    }
}

/// Input for the ticket fare estimation operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaresInput {
    pub city: String,
    pub currency: String,
}

impl FaresInput {
    #[must_use]
    pub fn new(city: &str, currency: Currency) -> Self {
        Self {
            city: city.to_string(),
            currency: currency.code().to_string(),
        }
    }
}

/// Output of the ticket fare estimation operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaresOutput {
    /// Estimated one-way flight fare, non-zero on success
    pub flight_fare: f64,
    /// Estimated one-way train fare, 0 where train travel is impractical
    pub train_fare: f64,
    /// Up to three suggested airlines
    #[serde(default)]
    pub flight_companies: Vec<String>,
}

impl FaresOutput {
    /// Fallback used when the operation fails
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            flight_fare: 0.0,
            train_fare: 0.0,
            flight_companies: Vec::new(),
        }
    }
}

/// Per-operation result as seen by the presentation layer.
///
/// Every field resets to `Pending` when a new weather snapshot replaces the
/// old one. `Failed` carries the operation's fixed fallback so the UI stays
/// usable in a degraded state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum AdvisoryResult<T> {
    Pending,
    Succeeded(T),
    Failed(T),
}

impl<T> AdvisoryResult<T> {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, AdvisoryResult::Pending)
    }

    /// The settled value, fallback included; `None` while pending
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            AdvisoryResult::Pending => None,
            AdvisoryResult::Succeeded(value) | AdvisoryResult::Failed(value) => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_literals() {
        assert!(PlacesOutput::fallback().places.is_empty());
        assert!(HotelsOutput::fallback().hotels.is_empty());

        let fares = FaresOutput::fallback();
        assert_eq!(fares.flight_fare, 0.0);
        assert_eq!(fares.train_fare, 0.0);

        let safety = TravelSafetyOutput::fallback();
        assert_eq!(safety.safety_level, SafetyLevel::Caution);
    }

    #[test]
    fn test_advisory_result_value() {
        let pending: AdvisoryResult<AdviceOutput> = AdvisoryResult::Pending;
        assert!(pending.is_pending());
        assert!(pending.value().is_none());

        let failed = AdvisoryResult::Failed(AdviceOutput::fallback());
        assert_eq!(failed.value(), Some(&AdviceOutput::fallback()));
    }

    #[test]
    fn test_advisory_result_serialization() {
        let pending: AdvisoryResult<AdviceOutput> = AdvisoryResult::Pending;
        let json = serde_json::to_value(&pending).unwrap();
        assert_eq!(json["status"], "pending");

        let succeeded = AdvisoryResult::Succeeded(AdviceOutput {
            advice: "Bring an umbrella.".to_string(),
        });
        let json = serde_json::to_value(&succeeded).unwrap();
        assert_eq!(json["status"], "succeeded");
        assert_eq!(json["value"]["advice"], "Bring an umbrella.");
    }

    #[test]
    fn test_fares_output_tolerates_missing_companies() {
        let parsed: FaresOutput =
            serde_json::from_str(r#"{"flight_fare": 420.0, "train_fare": 0}"#).unwrap();
        assert_eq!(parsed.flight_fare, 420.0);
        assert!(parsed.flight_companies.is_empty());
    }
}
