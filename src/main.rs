// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::airport_service::AirportService;
use crate::application::flight_service::FlightService;
use crate::application::saved_flight_service::SavedFlightService;
use crate::application::traffic_service::TrafficService;
use crate::infrastructure::airportdb_client::AirportDbClient;
use crate::infrastructure::aviationstack_client::AviationStackClient;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_client::build_http_client;
use crate::infrastructure::opensky_client::OpenSkyClient;
use crate::infrastructure::sqlite_repository::SqliteSavedFlightRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration; a first positional argument overrides the port
    let mut config = load_app_config()?;
    if let Some(port) = std::env::args().nth(1) {
        config.server.port = port
            .parse()
            .with_context(|| format!("Invalid port argument: {}", port))?;
    }

    if config.airport_api.token.is_empty() {
        tracing::warn!("Airport API token is not set; airport lookups will fail");
    }
    if config.aviation_api.access_key.is_empty() {
        tracing::warn!("Aviation API access key is not set; flight lookups will fail");
    }

    // Upstream clients (infrastructure layer)
    let http = build_http_client(config.upstream.timeout())?;
    let airports = Arc::new(AirportDbClient::new(
        http.clone(),
        &config.airport_api.base_url,
        config.airport_api.token.clone(),
    ));
    let opensky = Arc::new(OpenSkyClient::new(http.clone(), &config.opensky.base_url));
    let flights = Arc::new(AviationStackClient::new(
        http,
        &config.aviation_api.base_url,
        config.aviation_api.access_key.clone(),
    ));
    let repository = Arc::new(SqliteSavedFlightRepository::open(&config.storage.database_url)?);
    tracing::info!("Saved flights stored in {}", config.storage.database_url);

    // Create services (application layer)
    let traffic_service = TrafficService::new(opensky);
    let flight_service = FlightService::new(flights);
    let airport_service = AirportService::new(airports, traffic_service.clone());
    let saved_flight_service = SavedFlightService::new(repository, flight_service.clone());

    let state = Arc::new(AppState {
        airport_service,
        traffic_service,
        flight_service,
        saved_flight_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Starting flight-tracker on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
