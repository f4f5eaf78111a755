//! Weather snapshot model shared by the orchestrator and the advisory layer

use serde::{Deserialize, Serialize};

/// Number of entries a forecast must carry, today included
pub const FORECAST_DAYS: usize = 7;

/// Weather condition categories used both as a display hint and as an
/// advisory-operation input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherDescription {
    Sunny,
    Cloudy,
    #[serde(rename = "Partly cloudy")]
    PartlyCloudy,
    Rain,
    Thunderstorm,
    Snow,
}

impl WeatherDescription {
    /// All known conditions, in the order the mock generator samples them
    pub const ALL: [WeatherDescription; 6] = [
        WeatherDescription::Sunny,
        WeatherDescription::Cloudy,
        WeatherDescription::Rain,
        WeatherDescription::PartlyCloudy,
        WeatherDescription::Thunderstorm,
        WeatherDescription::Snow,
    ];

    /// Human-readable label, matching the serialized form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherDescription::Sunny => "Sunny",
            WeatherDescription::Cloudy => "Cloudy",
            WeatherDescription::PartlyCloudy => "Partly cloudy",
            WeatherDescription::Rain => "Rain",
            WeatherDescription::Thunderstorm => "Thunderstorm",
            WeatherDescription::Snow => "Snow",
        }
    }
}

impl std::fmt::Display for WeatherDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current conditions at the queried location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Relative humidity as a percentage
    pub humidity_pct: u8,
    /// Wind speed in km/h
    pub wind_kph: f64,
    /// Weather condition category
    pub description: WeatherDescription,
}

/// One day of the forward forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// Day label, "Today" for the first entry then weekday abbreviations
    pub day_label: String,
    /// Daily high in Celsius
    pub high_c: f64,
    /// Daily low in Celsius
    pub low_c: f64,
    /// Weather condition category
    pub description: WeatherDescription,
}

/// A full weather snapshot for one location query.
///
/// Produced once per query and replaced wholesale by the next one, never
/// mutated in place. The forecast always holds exactly [`FORECAST_DAYS`]
/// entries ordered from today forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Resolved city name this snapshot was generated for
    pub city: String,
    /// Current conditions
    pub current: CurrentConditions,
    /// Multi-day forecast, today first
    pub forecast: Vec<DayForecast>,
}
