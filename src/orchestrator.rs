//! Query orchestration.
//!
//! The orchestrator owns the session view model and coordinates the weather
//! lookup plus the fan-out to the five advisory operations. Advisory results
//! are independent: each one is published into the view model as it settles,
//! a failing operation is replaced by its fixed fallback and never blocks or
//! invalidates the others. The weather snapshot alone is the minimum viable
//! response.
//!
//! Every query takes an id from a monotonically increasing counter; weather
//! or advisory results whose id no longer matches the current query belong
//! to a superseded session and are discarded, not merged.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::advisory::{AdvisoryError, AdvisoryProvider};
use crate::geocode::ReverseGeocoder;
use crate::models::{
    AdviceInput, AdviceOutput, AdvisoryResult, Currency, FaresInput, FaresOutput, HotelsInput,
    HotelsOutput, PlacesInput, PlacesOutput, TravelSafetyInput, TravelSafetyOutput,
    WeatherSnapshot,
};
use crate::weather::WeatherSource;
use crate::{Result, TripPlannerError};

/// Aggregate state exposed to the presentation layer.
///
/// Owned exclusively by the [`Orchestrator`]; the presentation layer reads
/// it and dispatches intents, it never mutates it directly.
#[derive(Debug, Clone, Serialize)]
pub struct SessionViewModel {
    /// Last submitted location, if any
    pub location: Option<String>,
    /// Currently selected currency
    pub currency: Currency,
    /// Weather snapshot for the current query
    pub weather: Option<WeatherSnapshot>,
    pub advice: AdvisoryResult<AdviceOutput>,
    pub travel_safety: AdvisoryResult<TravelSafetyOutput>,
    pub places: AdvisoryResult<PlacesOutput>,
    pub hotels: AdvisoryResult<HotelsOutput>,
    pub fares: AdvisoryResult<FaresOutput>,
    /// True while the weather snapshot is being fetched
    pub loading_weather: bool,
    /// True from advisory fan-out start until all five have settled
    pub loading_advisories: bool,
    /// User-visible error, set for validation, weather and geolocation
    /// failures; advisory failures never set it
    pub error_message: Option<String>,
}

impl SessionViewModel {
    fn new(currency: Currency) -> Self {
        Self {
            location: None,
            currency,
            weather: None,
            advice: AdvisoryResult::Pending,
            travel_safety: AdvisoryResult::Pending,
            places: AdvisoryResult::Pending,
            hotels: AdvisoryResult::Pending,
            fares: AdvisoryResult::Pending,
            loading_weather: false,
            loading_advisories: false,
            error_message: None,
        }
    }

    fn reset_advisories(&mut self) {
        self.advice = AdvisoryResult::Pending;
        self.travel_safety = AdvisoryResult::Pending;
        self.places = AdvisoryResult::Pending;
        self.hotels = AdvisoryResult::Pending;
        self.fares = AdvisoryResult::Pending;
    }
}

/// Coordinates weather retrieval and advisory fan-out into one consistent
/// view model
pub struct Orchestrator {
    weather: Arc<dyn WeatherSource>,
    advisories: Arc<dyn AdvisoryProvider>,
    geocoder: Arc<dyn ReverseGeocoder>,
    /// Per-operation budget; expiry is treated as an operation failure
    advisory_timeout: Duration,
    state: RwLock<SessionViewModel>,
    query_seq: AtomicU64,
    /// Fare results carry their own generation, bumped by every fan-out and
    /// every currency change; a stale in-flight fare request must not
    /// overwrite a newer result
    fare_seq: AtomicU64,
}

impl Orchestrator {
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherSource>,
        advisories: Arc<dyn AdvisoryProvider>,
        geocoder: Arc<dyn ReverseGeocoder>,
        advisory_timeout: Duration,
        default_currency: Currency,
    ) -> Self {
        Self {
            weather,
            advisories,
            geocoder,
            advisory_timeout,
            state: RwLock::new(SessionViewModel::new(default_currency)),
            query_seq: AtomicU64::new(0),
            fare_seq: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current session state
    pub async fn session(&self) -> SessionViewModel {
        self.state.read().await.clone()
    }

    fn current_query(&self) -> u64 {
        self.query_seq.load(Ordering::SeqCst)
    }

    /// Apply a mutation only if `query_id` is still the current query
    async fn publish<F>(&self, query_id: u64, apply: F)
    where
        F: FnOnce(&mut SessionViewModel),
    {
        let mut state = self.state.write().await;
        if self.current_query() == query_id {
            apply(&mut state);
        }
    }

    /// Store a fare result only if it belongs to both the current query and
    /// the latest fare generation
    async fn publish_fares(&self, query_id: u64, fare_gen: u64, fares: AdvisoryResult<FaresOutput>) {
        let mut state = self.state.write().await;
        if self.current_query() == query_id && self.fare_seq.load(Ordering::SeqCst) == fare_gen {
            state.fares = fares;
        }
    }

    /// Resolve device coordinates to a city and submit a query for it.
    ///
    /// On geocoding failure the session gets a recoverable informational
    /// message and stays in the input-required state; manual entry still
    /// works. No retry.
    #[instrument(skip(self))]
    pub async fn resolve_location(&self, latitude: f64, longitude: f64) -> Result<()> {
        let query_id = self.current_query();
        match self.geocoder.reverse(latitude, longitude).await {
            Ok(city) => {
                info!(%city, "resolved device coordinates");
                let currency = self.state.read().await.currency;
                self.submit_query(&city, currency).await
            }
            Err(err) => {
                warn!(error = %err, "reverse geocoding failed");
                // A slow-settling lookup must not stomp a query submitted
                // in the meantime
                self.publish(query_id, |state| {
                    state.error_message = Some(err.user_message());
                })
                .await;
                Err(err)
            }
        }
    }

    /// Fetch weather for `location` and fan out to the advisory operations.
    ///
    /// # Errors
    /// - [`TripPlannerError::Validation`] for an empty location; nothing is
    ///   fetched and the existing snapshot is untouched.
    /// - [`TripPlannerError::WeatherUnavailable`] when the weather source
    ///   fails; the snapshot is cleared and no advisory is invoked.
    #[instrument(skip(self))]
    pub async fn submit_query(&self, location: &str, currency: Currency) -> Result<()> {
        let location = location.trim();
        if location.is_empty() {
            let err = TripPlannerError::validation("Please enter a location.");
            self.state.write().await.error_message = Some(err.user_message());
            return Err(err);
        }

        // Taking a fresh id supersedes every in-flight query. The bump and
        // the seed write form one critical section so a concurrent submit
        // cannot land its seed write after a newer query's and leave stale
        // location or loading flags behind.
        let query_id = {
            let mut state = self.state.write().await;
            let query_id = self.query_seq.fetch_add(1, Ordering::SeqCst) + 1;
            state.location = Some(location.to_string());
            state.currency = currency;
            state.error_message = None;
            state.loading_weather = true;
            state.loading_advisories = false;
            query_id
        };

        match self.weather.fetch_weather(location).await {
            Ok(snapshot) => {
                self.publish(query_id, |state| {
                    state.weather = Some(snapshot.clone());
                    state.loading_weather = false;
                })
                .await;
                if self.current_query() == query_id {
                    self.run_advisories(&snapshot, currency, query_id).await;
                }
                Ok(())
            }
            Err(err) => {
                warn!(%location, error = %err, "weather lookup failed");
                let err = TripPlannerError::weather_unavailable(err.to_string());
                self.publish(query_id, |state| {
                    state.weather = None;
                    state.reset_advisories();
                    state.loading_weather = false;
                    // A superseded fan-out's own clear is discarded by the
                    // id guard, so the flag must be cleared here as well
                    state.loading_advisories = false;
                    state.error_message = Some(err.user_message());
                })
                .await;
                Err(err)
            }
        }
    }

    /// Switch the session currency.
    ///
    /// With a snapshot present this re-resolves the fare estimation only;
    /// the snapshot and the currency-insensitive advisory results stay
    /// untouched.
    #[instrument(skip(self))]
    pub async fn change_currency(&self, currency: Currency) -> Result<()> {
        let snapshot = {
            let mut state = self.state.write().await;
            state.currency = currency;
            state.weather.clone()
        };

        let Some(snapshot) = snapshot else {
            return Ok(());
        };

        let query_id = self.current_query();
        // Superseding the fare generation discards the fan-out's original
        // fare request if it is still in flight with the old currency
        let fare_gen = self.fare_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.publish_fares(query_id, fare_gen, AdvisoryResult::Pending)
            .await;

        let input = FaresInput::new(&snapshot.city, currency);
        let fares = self
            .settle(
                "estimate_fares",
                self.advisories.estimate_fares(&input),
                FaresOutput::fallback,
            )
            .await;
        self.publish_fares(query_id, fare_gen, fares).await;
        Ok(())
    }

    /// Issue all five advisory operations concurrently for `snapshot`.
    ///
    /// Each result is published independently as it settles; the aggregate
    /// loading flag only clears once all five have settled.
    async fn run_advisories(&self, snapshot: &WeatherSnapshot, currency: Currency, query_id: u64) {
        {
            let mut state = self.state.write().await;
            if self.current_query() != query_id {
                return;
            }
            state.reset_advisories();
            state.loading_advisories = true;
        }

        let advice_input = AdviceInput::from_snapshot(snapshot);
        let safety_input = TravelSafetyInput::from_snapshot(snapshot);
        let places_input = PlacesInput {
            city: snapshot.city.clone(),
            description: snapshot.current.description.to_string(),
        };
        let hotels_input = HotelsInput::new(&snapshot.city, currency);
        let fares_input = FaresInput::new(&snapshot.city, currency);
        let fare_gen = self.fare_seq.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::join!(
            async {
                let result = self
                    .settle(
                        "personalized_advice",
                        self.advisories.personalized_advice(&advice_input),
                        AdviceOutput::fallback,
                    )
                    .await;
                self.publish(query_id, |state| state.advice = result).await;
            },
            async {
                let result = self
                    .settle(
                        "travel_safety",
                        self.advisories.travel_safety(&safety_input),
                        TravelSafetyOutput::fallback,
                    )
                    .await;
                self.publish(query_id, |state| state.travel_safety = result)
                    .await;
            },
            async {
                let result = self
                    .settle(
                        "suggest_places",
                        self.advisories.suggest_places(&places_input),
                        PlacesOutput::fallback,
                    )
                    .await;
                self.publish(query_id, |state| state.places = result).await;
            },
            async {
                let result = self
                    .settle(
                        "suggest_hotels",
                        self.advisories.suggest_hotels(&hotels_input),
                        HotelsOutput::fallback,
                    )
                    .await;
                self.publish(query_id, |state| state.hotels = result).await;
            },
            async {
                let result = self
                    .settle(
                        "estimate_fares",
                        self.advisories.estimate_fares(&fares_input),
                        FaresOutput::fallback,
                    )
                    .await;
                self.publish_fares(query_id, fare_gen, result).await;
            },
        );

        self.publish(query_id, |state| state.loading_advisories = false)
            .await;
    }

    /// Await one advisory operation within the per-operation budget.
    ///
    /// Failures and timeouts are absorbed here: logged, then mapped to the
    /// operation's fallback. They never surface as a user-visible error.
    async fn settle<T, F>(&self, operation: &'static str, fut: F, fallback: fn() -> T) -> AdvisoryResult<T>
    where
        F: Future<Output = std::result::Result<T, AdvisoryError>>,
    {
        match tokio::time::timeout(self.advisory_timeout, fut).await {
            Ok(Ok(value)) => AdvisoryResult::Succeeded(value),
            Ok(Err(err)) => {
                let err = TripPlannerError::advisory_upstream(operation, err.to_string());
                warn!(error = %err, "advisory operation failed, using fallback");
                AdvisoryResult::Failed(fallback())
            }
            Err(_) => {
                let err = TripPlannerError::advisory_upstream(
                    operation,
                    format!("timed out after {}s", self.advisory_timeout.as_secs()),
                );
                warn!(error = %err, "advisory operation timed out, using fallback");
                AdvisoryResult::Failed(fallback())
            }
        }
    }
}
