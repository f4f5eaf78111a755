//! Reverse geocoding collaborator.
//!
//! Turns device coordinates into a best-effort place name so a geolocation
//! fix can seed the first query. Failures degrade to manual location entry,
//! they never block the session.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use crate::{Result, TripPlannerError};

/// Resolves coordinates to a place name
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Resolve `(latitude, longitude)` to a city-level place name.
    ///
    /// # Errors
    /// Returns [`TripPlannerError::Geolocation`] when no usable place name
    /// can be determined.
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<String>;
}

/// Nominatim-backed reverse geocoder
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

/// Relevant subset of a Nominatim reverse response
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Address,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
}

impl ReverseResponse {
    /// Best city-level name: city, then town, then village
    fn place_name(self) -> Option<String> {
        self.address
            .city
            .or(self.address.town)
            .or(self.address.village)
    }
}

impl NominatimClient {
    /// Create a client against the given Nominatim base URL.
    ///
    /// # Errors
    /// Fails when the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            // Nominatim's usage policy requires an identifying user agent
            .user_agent(concat!("trip-planner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                TripPlannerError::config(format!("Failed to create geocoding client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    #[instrument(skip(self))]
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<String> {
        let url = format!(
            "{}/reverse?format=json&lat={latitude}&lon={longitude}",
            self.base_url
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| TripPlannerError::geolocation(format!("Reverse geocoding failed: {e}")))?;

        let parsed: ReverseResponse = response.json().await.map_err(|e| {
            TripPlannerError::geolocation(format!("Invalid reverse geocoding response: {e}"))
        })?;

        parsed.place_name().ok_or_else(|| {
            TripPlannerError::geolocation(format!(
                "No city-level name for coordinates {latitude:.4}, {longitude:.4}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_name_prefers_city() {
        let parsed: ReverseResponse = serde_json::from_str(
            r#"{"address": {"city": "Tokyo", "town": "Shibuya", "village": null}}"#,
        )
        .unwrap();
        assert_eq!(parsed.place_name().unwrap(), "Tokyo");
    }

    #[test]
    fn test_place_name_falls_back_to_town_then_village() {
        let parsed: ReverseResponse =
            serde_json::from_str(r#"{"address": {"town": "Gornau"}}"#).unwrap();
        assert_eq!(parsed.place_name().unwrap(), "Gornau");

        let parsed: ReverseResponse =
            serde_json::from_str(r#"{"address": {"village": "Wengen"}}"#).unwrap();
        assert_eq!(parsed.place_name().unwrap(), "Wengen");
    }

    #[test]
    fn test_place_name_missing_yields_none() {
        let parsed: ReverseResponse = serde_json::from_str(r#"{"address": {}}"#).unwrap();
        assert!(parsed.place_name().is_none());

        let parsed: ReverseResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(parsed.place_name().is_none());
    }
}
