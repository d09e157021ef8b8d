// HTTP request handlers for lookups and live traffic
use crate::application::airport_service::DEFAULT_AIRPORT_RADIUS_KM;
use crate::application::traffic_service::DEFAULT_LOCATION_RADIUS_KM;
use crate::domain::flight::FlightIdentifier;
use crate::domain::geo::GeoPoint;
use crate::presentation::app_state::AppState;
use crate::presentation::errors::ApiError;
use crate::presentation::pages::{self, STYLES_CSS};
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use std::sync::Arc;

const ICAO_REQUIRED: &str = "icao required (ex: KJFK)";
const AIRPORT_NOT_FOUND: &str = "Airport not found";
const LAT_LON_REQUIRED: &str = "lat and lon required";
const INVALID_RADIUS: &str = "radius must be a positive number";
const FLIGHT_ID_REQUIRED: &str = "Provide callsign (DAL230) or flight_iata (DL230)";

#[derive(Debug, Deserialize)]
pub struct AirportQuery {
    pub icao: Option<String>,
    pub radius: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub radius: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FlightDetailsQuery {
    pub callsign: Option<String>,
    pub flight_iata: Option<String>,
    pub saved: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn required_icao(icao: Option<&str>) -> Result<&str, ApiError> {
    non_blank(icao).ok_or(ApiError::BadRequest(ICAO_REQUIRED))
}

fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    non_blank(raw)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Blank or missing radius falls back to `default`.
fn parse_radius(raw: Option<&str>, default: f64) -> Result<f64, ApiError> {
    match non_blank(raw) {
        None => Ok(default),
        Some(v) => v
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite() && *r > 0.0)
            .ok_or(ApiError::BadRequest(INVALID_RADIUS)),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn home() -> Html<String> {
    pages::home()
}

pub async fn airport_query_form() -> Html<String> {
    pages::airport_query_form()
}

pub async fn styles() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLES_CSS)
}

/// Airport detail page
pub async fn airport_details(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AirportQuery>,
) -> Result<Html<String>, ApiError> {
    let icao = required_icao(query.icao.as_deref())?;

    match state.airport_service.lookup(icao).await {
        Ok(Some(airport)) => Ok(pages::airport_details(&airport)),
        Ok(None) => Err(ApiError::NotFound(AIRPORT_NOT_FOUND)),
        Err(e) => {
            tracing::error!("Error fetching airport {}: {:#}", icao, e);
            Err(ApiError::Upstream("Failed to fetch airport data"))
        }
    }
}

/// Live aircraft around an airport, sorted by callsign
pub async fn airport_traffic(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AirportQuery>,
) -> Result<Html<String>, ApiError> {
    let icao = required_icao(query.icao.as_deref())?;
    let radius_km = parse_radius(query.radius.as_deref(), DEFAULT_AIRPORT_RADIUS_KM)?;

    match state.airport_service.airport_traffic(icao, radius_km).await {
        Ok(Some(traffic)) => Ok(pages::airport_flights(&traffic)),
        Ok(None) => Err(ApiError::NotFound(AIRPORT_NOT_FOUND)),
        Err(e) => {
            tracing::error!("Error fetching live traffic near {}: {:#}", icao, e);
            Err(ApiError::Upstream("Failed to fetch live airport planes"))
        }
    }
}

/// Live aircraft around a coordinate, grouped by ground state
pub async fn location_traffic(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocationQuery>,
) -> Result<Html<String>, ApiError> {
    let (Some(lat), Some(lon)) = (
        parse_coordinate(query.lat.as_deref()),
        parse_coordinate(query.lon.as_deref()),
    ) else {
        return Err(ApiError::BadRequest(LAT_LON_REQUIRED));
    };
    let radius_km = parse_radius(query.radius.as_deref(), DEFAULT_LOCATION_RADIUS_KM)?;

    match state
        .traffic_service
        .location_traffic(GeoPoint::new(lat, lon), radius_km)
        .await
    {
        Ok(traffic) => Ok(pages::location_radius(&traffic)),
        Err(e) => {
            tracing::error!("Error fetching live traffic near {},{}: {:#}", lat, lon, e);
            Err(ApiError::Upstream("Failed to fetch OpenSky data"))
        }
    }
}

/// Flight detail page. Callsign takes precedence over flight_iata.
pub async fn flight_details(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FlightDetailsQuery>,
) -> Result<Html<String>, ApiError> {
    let id = FlightIdentifier::from_params(query.callsign.as_deref(), query.flight_iata.as_deref())
        .ok_or(ApiError::BadRequest(FLIGHT_ID_REQUIRED))?;
    let saved = query.saved.as_deref() == Some("true");

    match state.flight_service.details(&id).await {
        Ok(details) => Ok(pages::flight_details(&details, saved, id.value())),
        Err(e) => {
            tracing::error!("Error fetching flight {}: {:#}", id.value(), e);
            Err(ApiError::Upstream("Failed to fetch flight details"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{jfk, FakeAirports, FakeFlights, FakeTraffic};
    use crate::presentation::testing::{body_json, body_text, get, test_router, TestDeps};
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_parse_radius() {
        assert_eq!(parse_radius(None, 80.0), Ok(80.0));
        assert_eq!(parse_radius(Some("  "), 50.0), Ok(50.0));
        assert_eq!(parse_radius(Some("25.5"), 50.0), Ok(25.5));
        assert!(parse_radius(Some("0"), 50.0).is_err());
        assert!(parse_radius(Some("-3"), 50.0).is_err());
        assert!(parse_radius(Some("far"), 50.0).is_err());
        assert!(parse_radius(Some("NaN"), 50.0).is_err());
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate(Some(" 40.64 ")), Some(40.64));
        assert_eq!(parse_coordinate(Some("")), None);
        assert_eq!(parse_coordinate(Some("inf")), None);
        assert_eq!(parse_coordinate(None), None);
    }

    #[tokio::test]
    async fn test_unknown_airport_is_404() {
        let response = get(test_router(TestDeps::default()), "/airport?icao=ZZZZ").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Airport not found"}));
    }

    #[tokio::test]
    async fn test_airport_requires_icao() {
        let response = get(test_router(TestDeps::default()), "/airport").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "icao required (ex: KJFK)"}));
    }

    #[tokio::test]
    async fn test_airport_details_page() {
        let deps = TestDeps {
            airports: FakeAirports::with(vec![jfk()]),
            ..Default::default()
        };
        let response = get(test_router(deps), "/airport?icao=kjfk").await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("John F Kennedy International Airport"));
        assert!(html.contains("<td>JFK</td>"));
    }

    #[tokio::test]
    async fn test_airport_directory_failure_is_500() {
        let deps = TestDeps {
            airports: FakeAirports::failing(),
            ..Default::default()
        };
        let response = get(test_router(deps), "/airport?icao=KJFK").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "Failed to fetch airport data"}));
    }

    #[tokio::test]
    async fn test_airport_traffic_page_sorted_by_callsign() {
        let deps = TestDeps {
            airports: FakeAirports::with(vec![jfk()]),
            traffic: FakeTraffic::sample(),
            ..Default::default()
        };
        let response = get(test_router(deps), "/opensky/airport?icao=KJFK").await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        let aal = html.find(">AAL9<").unwrap();
        let ual = html.find(">UAL10<").unwrap();
        let unknown = html.find("(unknown)").unwrap();
        assert!(aal < ual && ual < unknown);
        assert!(html.contains("radius 80 km"));
    }

    #[tokio::test]
    async fn test_airport_traffic_unknown_airport() {
        let response = get(test_router(TestDeps::default()), "/opensky/airport?icao=ZZZZ&radius=10").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_airport_traffic_upstream_failure() {
        let deps = TestDeps {
            airports: FakeAirports::with(vec![jfk()]),
            traffic: FakeTraffic::failing(),
            ..Default::default()
        };
        let response = get(test_router(deps), "/opensky/airport?icao=KJFK").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "Failed to fetch live airport planes"}));
    }

    #[tokio::test]
    async fn test_location_requires_lat_and_lon() {
        let response = get(test_router(TestDeps::default()), "/opensky/location?lat=40.6").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "lat and lon required"}));
    }

    #[tokio::test]
    async fn test_location_rejects_bad_radius() {
        let response = get(test_router(TestDeps::default()), "/opensky/location?lat=40.6&lon=-73.7&radius=-5").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "radius must be a positive number"}));
    }

    #[tokio::test]
    async fn test_location_groups_airborne_and_landed() {
        let deps = TestDeps {
            traffic: FakeTraffic::sample(),
            ..Default::default()
        };
        let response = get(test_router(deps), "/opensky/location?lat=40.64&lon=-73.78").await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Airborne (2)"));
        assert!(html.contains("Landed (1)"));
        assert!(html.contains("Radius 50 km"));

        let landed_at = html.find("Landed (1)").unwrap();
        assert!(html.find(">UAL10<").unwrap() < landed_at);
        assert!(html.find(">AAL9<").unwrap() > landed_at);
    }

    #[tokio::test]
    async fn test_location_upstream_failure() {
        let deps = TestDeps {
            traffic: FakeTraffic::failing(),
            ..Default::default()
        };
        let response = get(test_router(deps), "/opensky/location?lat=1&lon=2").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "Failed to fetch OpenSky data"}));
    }

    #[tokio::test]
    async fn test_flight_details_requires_identifier() {
        let response = get(test_router(TestDeps::default()), "/flight/details").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Provide callsign (DAL230) or flight_iata (DL230)"})
        );
    }

    #[tokio::test]
    async fn test_flight_details_prefers_callsign() {
        let flights = std::sync::Arc::new(FakeFlights::delta_230());
        let deps = TestDeps {
            flights: flights.clone(),
            ..Default::default()
        };
        let response = get(test_router(deps), "/flight/details?callsign=dal230&flight_iata=XX1&saved=true").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(flights.queried(), vec![FlightIdentifier::Icao("DAL230".into())]);

        let html = body_text(response).await;
        assert!(html.contains("Flight saved to your list."));
        assert!(html.contains("Delta"));
        assert!(html.contains("name=\"callsign\" value=\"DAL230\""));
    }

    #[tokio::test]
    async fn test_flight_details_without_match() {
        let deps = TestDeps {
            flights: std::sync::Arc::new(FakeFlights::with(json!({"data": []}))),
            ..Default::default()
        };
        let response = get(test_router(deps), "/flight/details?flight_iata=zz999").await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Flight ZZ999"));
        assert!(html.contains("No matching flight found."));
    }

    #[tokio::test]
    async fn test_flight_lookup_failure_is_500() {
        let deps = TestDeps {
            flights: std::sync::Arc::new(FakeFlights::failing()),
            ..Default::default()
        };
        let response = get(test_router(deps), "/flight/details?callsign=DAL230").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "Failed to fetch flight details"}));
    }

    #[tokio::test]
    async fn test_static_pages() {
        let response = get(test_router(TestDeps::default()), "/healthz").await;
        assert_eq!(body_text(response).await, "ok");

        let response = get(test_router(TestDeps::default()), "/styles.css").await;
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css; charset=utf-8");

        let response = get(test_router(TestDeps::default()), "/").await;
        assert!(body_text(response).await.contains("action=\"/opensky/location\""));

        let response = get(test_router(TestDeps::default()), "/airportQuery").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
