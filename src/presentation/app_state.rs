// Application state for HTTP handlers
use crate::application::airport_service::AirportService;
use crate::application::flight_service::FlightService;
use crate::application::saved_flight_service::SavedFlightService;
use crate::application::traffic_service::TrafficService;

#[derive(Clone)]
pub struct AppState {
    pub airport_service: AirportService,
    pub traffic_service: TrafficService,
    pub flight_service: FlightService,
    pub saved_flight_service: SavedFlightService,
}
