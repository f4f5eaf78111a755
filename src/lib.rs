//! Trip Planner - AI-assisted weather and travel planning
//!
//! This library provides the orchestration core for combining a weather
//! snapshot with five independent LLM-backed advisory operations into a
//! single session view model.

pub mod advisory;
pub mod api;
pub mod config;
pub mod error;
pub mod geocode;
pub mod models;
pub mod orchestrator;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use advisory::{AdvisoryError, AdvisoryProvider, GeminiAdvisoryProvider, HeuristicAdvisoryProvider};
pub use config::TripPlannerConfig;
pub use error::TripPlannerError;
pub use geocode::{NominatimClient, ReverseGeocoder};
pub use models::{AdvisoryResult, Currency, WeatherDescription, WeatherSnapshot};
pub use orchestrator::{Orchestrator, SessionViewModel};
pub use weather::{MockWeatherSource, WeatherSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripPlannerError>;
