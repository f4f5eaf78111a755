use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_planner::advisory::AdvisoryProvider;
use trip_planner::api::AppState;
use trip_planner::weather::WeatherSource;
use trip_planner::{
    GeminiAdvisoryProvider, HeuristicAdvisoryProvider, MockWeatherSource, NominatimClient,
    Orchestrator, TripPlannerConfig, web,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripPlannerConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let weather: Arc<dyn WeatherSource> = Arc::new(MockWeatherSource::new(Duration::from_millis(
        config.weather.simulated_delay_ms,
    )));

    let advisories: Arc<dyn AdvisoryProvider> = match &config.advisory.api_key {
        Some(api_key) => {
            info!(model = %config.advisory.model, "using LLM advisory provider");
            Arc::new(GeminiAdvisoryProvider::new(
                api_key,
                &config.advisory.model,
                Duration::from_secs(config.advisory.timeout_seconds.into()),
            )?)
        }
        None => {
            info!("no advisory API key configured, using offline heuristic provider");
            Arc::new(HeuristicAdvisoryProvider::new())
        }
    };

    let geocoder = Arc::new(NominatimClient::new(
        &config.geocoding.base_url,
        Duration::from_secs(config.geocoding.timeout_seconds.into()),
    )?);

    let orchestrator = Arc::new(Orchestrator::new(
        weather,
        advisories,
        geocoder,
        Duration::from_secs(config.advisory.timeout_seconds.into()),
        config.default_currency()?,
    ));

    web::run(
        config.server.port,
        &config.server.static_dir,
        AppState { orchestrator },
    )
    .await
}
