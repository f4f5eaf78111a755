//! LLM-backed advisory provider using the Gemini `generateContent` API.
//!
//! Each operation renders its prompt template, requests a JSON-mode
//! completion and validates the completion text against the operation's
//! typed output schema. Anything that does not validate is an
//! [`AdvisoryError::InvalidResponse`], which the orchestrator treats the
//! same as a transport failure.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::instrument;

use crate::advisory::{AdvisoryError, AdvisoryProvider, prompts};
use crate::models::advisory::MAX_SUGGESTIONS;
use crate::models::{
    AdviceInput, AdviceOutput, FaresInput, FaresOutput, HotelsInput, HotelsOutput, PlacesInput,
    PlacesOutput, TravelSafetyInput, TravelSafetyOutput,
};
use crate::{Result, TripPlannerError};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Advisory provider backed by the Gemini API
pub struct GeminiAdvisoryProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Completion text of the first candidate, if any
    fn completion_text(mut self) -> Option<String> {
        if self.candidates.is_empty() {
            return None;
        }
        let candidate = self.candidates.swap_remove(0);
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

impl GeminiAdvisoryProvider {
    /// Create a provider for the given model and API key.
    ///
    /// # Errors
    /// Fails when the underlying HTTP client cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TripPlannerError::config(format!("Failed to create LLM client: {e}")))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Override the API base URL, mainly for tests
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Request a JSON-mode completion for `prompt` and validate it against `T`
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate<T: DeserializeOwned>(&self, prompt: &str) -> std::result::Result<T, AdvisoryError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(&self.api_key)
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" },
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed
            .completion_text()
            .ok_or_else(|| AdvisoryError::InvalidResponse("empty completion".to_string()))?;

        serde_json::from_str(strip_code_fences(&text))
            .map_err(|e| AdvisoryError::InvalidResponse(e.to_string()))
    }
}

/// Models occasionally wrap JSON-mode output in a Markdown code fence
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(trimmed, str::trim)
}

#[async_trait]
impl AdvisoryProvider for GeminiAdvisoryProvider {
    async fn personalized_advice(
        &self,
        input: &AdviceInput,
    ) -> std::result::Result<AdviceOutput, AdvisoryError> {
        let output: AdviceOutput = self.generate(&prompts::personalized_advice(input)).await?;
        if output.advice.trim().is_empty() {
            return Err(AdvisoryError::InvalidResponse("empty advice".to_string()));
        }
        Ok(output)
    }

    async fn travel_safety(
        &self,
        input: &TravelSafetyInput,
    ) -> std::result::Result<TravelSafetyOutput, AdvisoryError> {
        self.generate(&prompts::travel_safety(input)).await
    }

    async fn suggest_places(
        &self,
        input: &PlacesInput,
    ) -> std::result::Result<PlacesOutput, AdvisoryError> {
        let mut output: PlacesOutput = self.generate(&prompts::suggest_places(input)).await?;
        output.places.truncate(MAX_SUGGESTIONS);
        Ok(output)
    }

    async fn suggest_hotels(
        &self,
        input: &HotelsInput,
    ) -> std::result::Result<HotelsOutput, AdvisoryError> {
        let mut output: HotelsOutput = self.generate(&prompts::suggest_hotels(input)).await?;
        output.hotels.truncate(MAX_SUGGESTIONS);
        Ok(output)
    }

    async fn estimate_fares(
        &self,
        input: &FaresInput,
    ) -> std::result::Result<FaresOutput, AdvisoryError> {
        let mut output: FaresOutput = self.generate(&prompts::estimate_fares(input)).await?;
        if output.flight_fare <= 0.0 {
            return Err(AdvisoryError::InvalidResponse(
                "flight fare must be a non-zero estimate".to_string(),
            ));
        }
        output.flight_companies.truncate(MAX_SUGGESTIONS);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "{\"advice\":"}, {"text": " \"Wear a jacket.\"}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.completion_text().unwrap(),
            "{\"advice\": \"Wear a jacket.\"}"
        );
    }

    #[test]
    fn test_completion_text_empty_candidates() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.completion_text().is_none());

        let response: GenerateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.completion_text().is_none());
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }
}
