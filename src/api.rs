//! HTTP API surface.
//!
//! Thin intent-dispatch layer over the orchestrator: handlers forward the
//! user's intent and answer with the updated session view model, so the
//! frontend always renders from one consistent state object.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Deserialize;

use crate::TripPlannerError;
use crate::models::Currency;
use crate::orchestrator::{Orchestrator, SessionViewModel};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub location: String,
    pub currency: Currency,
}

#[derive(Debug, Deserialize)]
pub struct CurrencyRequest {
    pub currency: Currency,
}

#[derive(Debug, Deserialize)]
pub struct LocateRequest {
    pub latitude: f64,
    pub longitude: f64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/session", get(get_session))
        .route("/query", post(submit_query))
        .route("/currency", post(change_currency))
        .route("/locate", post(resolve_location))
        .with_state(state)
}

/// Status code for an orchestrator error; the session body carries the
/// user-facing message either way
fn status_for(err: &TripPlannerError) -> StatusCode {
    match err {
        TripPlannerError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        TripPlannerError::WeatherUnavailable { .. } => StatusCode::BAD_GATEWAY,
        // Geolocation failure is informational, manual entry still works
        TripPlannerError::Geolocation { .. } => StatusCode::OK,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn get_session(State(state): State<AppState>) -> Json<SessionViewModel> {
    Json(state.orchestrator.session().await)
}

async fn submit_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> (StatusCode, Json<SessionViewModel>) {
    let status = match state
        .orchestrator
        .submit_query(&request.location, request.currency)
        .await
    {
        Ok(()) => StatusCode::OK,
        Err(err) => status_for(&err),
    };
    (status, Json(state.orchestrator.session().await))
}

async fn change_currency(
    State(state): State<AppState>,
    Json(request): Json<CurrencyRequest>,
) -> (StatusCode, Json<SessionViewModel>) {
    let status = match state.orchestrator.change_currency(request.currency).await {
        Ok(()) => StatusCode::OK,
        Err(err) => status_for(&err),
    };
    (status, Json(state.orchestrator.session().await))
}

async fn resolve_location(
    State(state): State<AppState>,
    Json(request): Json<LocateRequest>,
) -> (StatusCode, Json<SessionViewModel>) {
    let status = match state
        .orchestrator
        .resolve_location(request.latitude, request.longitude)
        .await
    {
        Ok(()) => StatusCode::OK,
        Err(err) => status_for(&err),
    };
    (status, Json(state.orchestrator.session().await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&TripPlannerError::validation("empty")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&TripPlannerError::weather_unavailable("down")),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&TripPlannerError::geolocation("denied")),
            StatusCode::OK
        );
    }

    #[test]
    fn test_query_request_deserializes() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"location": "Tokyo", "currency": "JPY"}"#).unwrap();
        assert_eq!(request.location, "Tokyo");
        assert_eq!(request.currency, Currency::Jpy);
    }
}
