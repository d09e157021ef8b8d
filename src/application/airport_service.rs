// Airport service - Use cases keyed by airport code
use crate::application::airport_directory::AirportDirectory;
use crate::application::traffic_service::TrafficService;
use crate::domain::airport::{normalize_icao, Airport};
use crate::domain::state_vector::StateVector;
use std::sync::Arc;

pub const DEFAULT_AIRPORT_RADIUS_KM: f64 = 80.0;

#[derive(Debug, Clone)]
pub struct AirportTraffic {
    pub airport: Airport,
    pub radius_km: f64,
    pub aircraft: Vec<StateVector>,
}

#[derive(Clone)]
pub struct AirportService {
    directory: Arc<dyn AirportDirectory>,
    traffic: TrafficService,
}

impl AirportService {
    pub fn new(directory: Arc<dyn AirportDirectory>, traffic: TrafficService) -> Self {
        Self { directory, traffic }
    }

    pub async fn lookup(&self, icao: &str) -> anyhow::Result<Option<Airport>> {
        self.directory.find_airport(&normalize_icao(icao)).await
    }

    /// Aircraft around an airport, sorted by callsign. `None` for unknown airports.
    pub async fn airport_traffic(
        &self,
        icao: &str,
        radius_km: f64,
    ) -> anyhow::Result<Option<AirportTraffic>> {
        let Some(airport) = self.lookup(icao).await? else {
            return Ok(None);
        };

        let (_, aircraft) = self
            .traffic
            .aircraft_around(airport.location(), radius_km)
            .await?;

        Ok(Some(AirportTraffic {
            airport,
            radius_km,
            aircraft,
        }))
    }
}
