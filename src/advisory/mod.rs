//! Advisory operation collaborators.
//!
//! Five independent request/response operations produce travel-related
//! content from weather and location input. The orchestrator only sees the
//! [`AdvisoryProvider`] trait; the prompt text and transport behind each
//! operation are implementation details of the provider.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    AdviceInput, AdviceOutput, FaresInput, FaresOutput, HotelsInput, HotelsOutput, PlacesInput,
    PlacesOutput, TravelSafetyInput, TravelSafetyOutput,
};

pub mod gemini;
pub mod heuristic;
pub mod prompts;

pub use gemini::GeminiAdvisoryProvider;
pub use heuristic::HeuristicAdvisoryProvider;

/// Failure of a single advisory operation.
///
/// Transport failure and schema-invalid content are the same class to the
/// orchestrator; both resolve to the operation's fallback.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    /// The backing service could not be reached or answered with an error
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but the content does not validate against the
    /// operation's output schema
    #[error("response did not match the output schema: {0}")]
    InvalidResponse(String),
}

/// The five advisory operations, each stateless between calls
#[async_trait]
pub trait AdvisoryProvider: Send + Sync {
    /// One sentence of weather-appropriate advice
    async fn personalized_advice(&self, input: &AdviceInput)
    -> Result<AdviceOutput, AdvisoryError>;

    /// Travel safety suggestion with a Safe/Caution/Dangerous assessment
    async fn travel_safety(
        &self,
        input: &TravelSafetyInput,
    ) -> Result<TravelSafetyOutput, AdvisoryError>;

    /// Up to three weather-appropriate places to visit
    async fn suggest_places(&self, input: &PlacesInput) -> Result<PlacesOutput, AdvisoryError>;

    /// Up to three hotel suggestions priced in the requested currency
    async fn suggest_hotels(&self, input: &HotelsInput) -> Result<HotelsOutput, AdvisoryError>;

    /// Flight and train fare estimates in the requested currency
    async fn estimate_fares(&self, input: &FaresInput) -> Result<FaresOutput, AdvisoryError>;
}
