//! Data models for the trip planner application
//!
//! This module contains the core domain models organized by concern:
//! - Weather: snapshot, current conditions and forecast entries
//! - Currency: the fixed currency set offered to the user
//! - Advisory: input/output schemas and fallbacks for the five operations

pub mod advisory;
pub mod currency;
pub mod weather;

// Re-export all public types for convenient access
pub use advisory::{
    AdviceInput, AdviceOutput, AdvisoryResult, FaresInput, FaresOutput, Hotel, HotelsInput,
    HotelsOutput, Place, PlacesInput, PlacesOutput, SafetyLevel, TravelSafetyInput,
    TravelSafetyOutput,
};
pub use currency::Currency;
pub use weather::{CurrentConditions, DayForecast, FORECAST_DAYS, WeatherDescription, WeatherSnapshot};
