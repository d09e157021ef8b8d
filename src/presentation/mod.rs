// Presentation layer - HTTP routes, handlers and HTML pages
pub mod app_state;
pub mod errors;
pub mod handlers;
pub mod pages;
pub mod saved_flights;

#[cfg(test)]
pub mod testing;

use crate::presentation::app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/airportQuery", get(handlers::airport_query_form))
        .route("/styles.css", get(handlers::styles))
        .route("/healthz", get(handlers::health_check))
        .route("/airport", get(handlers::airport_details))
        .route("/opensky/airport", get(handlers::airport_traffic))
        .route("/opensky/location", get(handlers::location_traffic))
        .route("/flight/details", get(handlers::flight_details))
        .route("/saved", get(saved_flights::list_saved))
        .route(
            "/saved/add",
            get(saved_flights::add_form).post(saved_flights::add_saved),
        )
        .route("/saved/quick-add", post(saved_flights::quick_add))
        .route("/saved/delete/:id", post(saved_flights::delete_saved))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
