//! Offline advisory provider.
//!
//! Deterministic, weather-derived responses used when no LLM API key is
//! configured. Keeps the service fully functional without an upstream model
//! dependency; the outputs honor the same schemas as the LLM provider.

use async_trait::async_trait;

use crate::advisory::{AdvisoryError, AdvisoryProvider};
use crate::models::{
    AdviceInput, AdviceOutput, FaresInput, FaresOutput, Hotel, HotelsInput, HotelsOutput, Place,
    PlacesInput, PlacesOutput, SafetyLevel, TravelSafetyInput, TravelSafetyOutput,
    WeatherDescription,
};

/// Rule-based stand-in for the LLM-backed provider
#[derive(Debug, Default)]
pub struct HeuristicAdvisoryProvider;

impl HeuristicAdvisoryProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Rough currency scale relative to USD, for plausible price figures
    fn currency_scale(currency: &str) -> f64 {
        match currency {
            "INR" => 85.0,
            "EUR" => 0.9,
            "JPY" => 150.0,
            _ => 1.0,
        }
    }
}

#[async_trait]
impl AdvisoryProvider for HeuristicAdvisoryProvider {
    async fn personalized_advice(
        &self,
        input: &AdviceInput,
    ) -> Result<AdviceOutput, AdvisoryError> {
        let advice = match input.description.as_str() {
            "Rain" | "Thunderstorm" => "Bring an umbrella and waterproof shoes.",
            "Snow" => "Dress in warm layers and watch for icy paths.",
            _ if input.temperature_c < 10.0 => "It's chilly out, wear a jacket.",
            _ if input.wind_kph > 20.0 => "It's windy, secure loose items and dress accordingly.",
            _ if input.humidity_pct > 80 => "It's humid, keep water handy and dress light.",
            _ => "Pleasant conditions, enjoy your day outside.",
        };
        Ok(AdviceOutput {
            advice: advice.to_string(),
        })
    }

    async fn travel_safety(
        &self,
        input: &TravelSafetyInput,
    ) -> Result<TravelSafetyOutput, AdvisoryError> {
        let (suggestion, safety_level) = match input.description.as_str() {
            "Thunderstorm" | "Snow" => (
                "It's best to stay indoors until conditions improve.",
                SafetyLevel::Dangerous,
            ),
            "Rain" => (
                "Roads might be slippery. Drive with caution.",
                SafetyLevel::Caution,
            ),
            _ if input.wind_kph > 20.0 || !(0.0..=35.0).contains(&input.temperature_c) => (
                "Conditions are rough, plan with care.",
                SafetyLevel::Caution,
            ),
            _ => ("Looks like a great day for a trip!", SafetyLevel::Safe),
        };
        Ok(TravelSafetyOutput {
            suggestion: suggestion.to_string(),
            safety_level,
        })
    }

    async fn suggest_places(&self, input: &PlacesInput) -> Result<PlacesOutput, AdvisoryError> {
        let indoor = matches!(input.description.as_str(), "Rain" | "Thunderstorm" | "Snow");
        let places = if indoor {
            vec![
                Place {
                    name: format!("{} City Museum", input.city),
                    description: "A sheltered walk through local history and art.".to_string(),
                    ideal_weather: Some(WeatherDescription::Rain),
                },
                Place {
                    name: format!("{} Central Market Hall", input.city),
                    description: "Covered stalls with regional food and crafts.".to_string(),
                    ideal_weather: Some(WeatherDescription::Cloudy),
                },
                Place {
                    name: format!("{} Aquarium", input.city),
                    description: "An indoor afternoon among the tanks and exhibits.".to_string(),
                    ideal_weather: Some(WeatherDescription::Rain),
                },
            ]
        } else {
            vec![
                Place {
                    name: format!("{} Old Town", input.city),
                    description: "A stroll through the historic center's landmarks.".to_string(),
                    ideal_weather: Some(WeatherDescription::Sunny),
                },
                Place {
                    name: format!("{} Riverside Park", input.city),
                    description: "Open green space ideal for a picnic or a walk.".to_string(),
                    ideal_weather: Some(WeatherDescription::Sunny),
                },
                Place {
                    name: format!("{} Lookout Point", input.city),
                    description: "A viewpoint with a wide panorama over the city.".to_string(),
                    ideal_weather: Some(WeatherDescription::PartlyCloudy),
                },
            ]
        };
        Ok(PlacesOutput { places })
    }

    async fn suggest_hotels(&self, input: &HotelsInput) -> Result<HotelsOutput, AdvisoryError> {
        let scale = Self::currency_scale(&input.currency);
        let hotels = vec![
            Hotel {
                name: format!("Grand {} Hotel", input.city),
                price: (180.0 * scale).round(),
                description: "Upscale rooms a short walk from the main sights.".to_string(),
            },
            Hotel {
                name: format!("{} Central Inn", input.city),
                price: (95.0 * scale).round(),
                description: "Comfortable mid-range stay near the station.".to_string(),
            },
            Hotel {
                name: format!("{} Garden Lodge", input.city),
                price: (55.0 * scale).round(),
                description: "Simple, quiet rooms with a courtyard garden.".to_string(),
            },
        ];
        Ok(HotelsOutput { hotels })
    }

    async fn estimate_fares(&self, input: &FaresInput) -> Result<FaresOutput, AdvisoryError> {
        let scale = Self::currency_scale(&input.currency);
        Ok(FaresOutput {
            flight_fare: (240.0 * scale).round(),
            train_fare: (60.0 * scale).round(),
            flight_companies: vec![
                "Atlas Air Lines".to_string(),
                "Meridian Airways".to_string(),
                "Pacific Wings".to_string(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Thunderstorm", SafetyLevel::Dangerous)]
    #[case("Snow", SafetyLevel::Dangerous)]
    #[case("Rain", SafetyLevel::Caution)]
    #[case("Sunny", SafetyLevel::Safe)]
    #[tokio::test]
    async fn test_safety_level_tracks_conditions(
        #[case] description: &str,
        #[case] expected: SafetyLevel,
    ) {
        let provider = HeuristicAdvisoryProvider::new();
        let output = provider
            .travel_safety(&TravelSafetyInput {
                temperature_c: 18.0,
                wind_kph: 10.0,
                description: description.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(output.safety_level, expected);
    }

    #[tokio::test]
    async fn test_rain_suggests_indoor_places() {
        let provider = HeuristicAdvisoryProvider::new();
        let output = provider
            .suggest_places(&PlacesInput {
                city: "Bergen".to_string(),
                description: "Rain".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(output.places.len(), 3);
        assert!(output.places[0].name.contains("Bergen"));
        assert!(output.places[0].name.contains("Museum"));
    }

    #[tokio::test]
    async fn test_fares_scale_with_currency() {
        let provider = HeuristicAdvisoryProvider::new();
        let usd = provider
            .estimate_fares(&FaresInput {
                city: "Tokyo".to_string(),
                currency: "USD".to_string(),
            })
            .await
            .unwrap();
        let jpy = provider
            .estimate_fares(&FaresInput {
                city: "Tokyo".to_string(),
                currency: "JPY".to_string(),
            })
            .await
            .unwrap();
        assert!(jpy.flight_fare > usd.flight_fare);
        assert!(usd.flight_fare > 0.0);
        assert_eq!(usd.flight_companies.len(), 3);
    }

    #[tokio::test]
    async fn test_cold_weather_advice_mentions_jacket() {
        let provider = HeuristicAdvisoryProvider::new();
        let output = provider
            .personalized_advice(&AdviceInput {
                temperature_c: 4.0,
                humidity_pct: 50,
                wind_kph: 8.0,
                description: "Cloudy".to_string(),
            })
            .await
            .unwrap();
        assert!(output.advice.contains("jacket"));
    }
}
