// Router test helpers
use crate::application::airport_service::AirportService;
use crate::application::flight_service::FlightService;
use crate::application::saved_flight_repository::SavedFlightRepository;
use crate::application::saved_flight_service::SavedFlightService;
use crate::application::testing::{FakeAirports, FakeFlights, FakeTraffic};
use crate::application::traffic_service::TrafficService;
use crate::infrastructure::sqlite_repository::SqliteSavedFlightRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::build_router;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestDeps {
    pub airports: FakeAirports,
    pub traffic: FakeTraffic,
    pub flights: Arc<FakeFlights>,
    pub repository: Arc<dyn SavedFlightRepository>,
}

impl Default for TestDeps {
    fn default() -> Self {
        Self {
            airports: FakeAirports::default(),
            traffic: FakeTraffic::with(json!({"time": 0, "states": null})),
            flights: Arc::new(FakeFlights::default()),
            repository: Arc::new(SqliteSavedFlightRepository::open_in_memory().unwrap()),
        }
    }
}

pub fn test_router(deps: TestDeps) -> Router {
    let traffic_service = TrafficService::new(Arc::new(deps.traffic));
    let flight_service = FlightService::new(deps.flights);
    let state = AppState {
        airport_service: AirportService::new(Arc::new(deps.airports), traffic_service.clone()),
        traffic_service,
        flight_service: flight_service.clone(),
        saved_flight_service: SavedFlightService::new(deps.repository, flight_service),
    };
    build_router(Arc::new(state))
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
