//! Weather source collaborator.
//!
//! The orchestrator only depends on the [`WeatherSource`] trait; the bundled
//! implementation is a mock generator producing plausible randomized
//! snapshots with a simulated network delay. No caching and no retry live at
//! this layer.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Days, Local};
use rand::RngExt;
use tracing::instrument;

use crate::Result;
use crate::models::{
    CurrentConditions, DayForecast, FORECAST_DAYS, WeatherDescription, WeatherSnapshot,
};

/// Supplies a current-conditions snapshot plus a 7-day forecast for a
/// named location
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch a snapshot for `location`.
    ///
    /// # Errors
    /// Returns [`crate::TripPlannerError::WeatherUnavailable`] when no
    /// snapshot can be produced; the orchestrator treats that as terminal
    /// for the current query.
    async fn fetch_weather(&self, location: &str) -> Result<WeatherSnapshot>;
}

/// Randomized mock weather generator
pub struct MockWeatherSource {
    /// Simulated upstream latency
    latency: Duration,
}

impl MockWeatherSource {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    fn random_description(rng: &mut impl RngExt) -> WeatherDescription {
        WeatherDescription::ALL[rng.random_range(0..WeatherDescription::ALL.len())]
    }

    fn generate(city: &str) -> WeatherSnapshot {
        let mut rng = rand::rng();
        let today = Local::now().date_naive();

        let forecast = (0..FORECAST_DAYS)
            .map(|i| {
                let high = f64::from(rng.random_range(10..=30));
                let low = high - f64::from(rng.random_range(5..=10));
                let day_label = if i == 0 {
                    "Today".to_string()
                } else {
                    let date = today + Days::new(i as u64);
                    date.format("%a").to_string()
                };
                DayForecast {
                    day_label,
                    high_c: high,
                    low_c: low,
                    description: Self::random_description(&mut rng),
                }
            })
            .collect();

        WeatherSnapshot {
            city: city.to_string(),
            current: CurrentConditions {
                temperature_c: f64::from(rng.random_range(5..=25)),
                humidity_pct: rng.random_range(40..=90),
                wind_kph: f64::from(rng.random_range(5..=25)),
                description: Self::random_description(&mut rng),
            },
            forecast,
        }
    }
}

#[async_trait]
impl WeatherSource for MockWeatherSource {
    #[instrument(skip(self))]
    async fn fetch_weather(&self, location: &str) -> Result<WeatherSnapshot> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let snapshot = Self::generate(location);
        tracing::debug!(
            city = %snapshot.city,
            description = %snapshot.current.description,
            "generated mock weather snapshot"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_has_exactly_seven_forecast_days() {
        let source = MockWeatherSource::new(Duration::ZERO);
        let snapshot = source.fetch_weather("Tokyo").await.unwrap();
        assert_eq!(snapshot.city, "Tokyo");
        assert_eq!(snapshot.forecast.len(), FORECAST_DAYS);
        assert_eq!(snapshot.forecast[0].day_label, "Today");
    }

    #[tokio::test]
    async fn test_generated_values_stay_in_range() {
        let source = MockWeatherSource::new(Duration::ZERO);
        let snapshot = source.fetch_weather("Oslo").await.unwrap();

        let current = &snapshot.current;
        assert!((5.0..=25.0).contains(&current.temperature_c));
        assert!((40..=90).contains(&current.humidity_pct));
        assert!((5.0..=25.0).contains(&current.wind_kph));

        for day in &snapshot.forecast {
            assert!((10.0..=30.0).contains(&day.high_c));
            assert!(day.low_c < day.high_c);
        }
    }

    #[tokio::test]
    async fn test_snapshots_are_independent_per_query() {
        let source = MockWeatherSource::new(Duration::ZERO);
        let first = source.fetch_weather("Lima").await.unwrap();
        let second = source.fetch_weather("Lima").await.unwrap();
        // Same city, but a fresh snapshot object each time
        assert_eq!(first.city, second.city);
        assert_eq!(second.forecast.len(), FORECAST_DAYS);
    }
}
