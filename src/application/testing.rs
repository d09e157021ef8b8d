// Test doubles for the collaborator ports
use crate::application::airport_directory::AirportDirectory;
use crate::application::flight_lookup::FlightLookup;
use crate::application::saved_flight_repository::SavedFlightRepository;
use crate::application::traffic_source::LiveTrafficSource;
use crate::domain::airport::Airport;
use crate::domain::flight::{FlightIdentifier, FlightSearchResult};
use crate::domain::geo::BoundingBox;
use crate::domain::saved_flight::{NewSavedFlight, SavedFlight};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

pub fn jfk() -> Airport {
    Airport {
        name: "John F Kennedy International Airport".to_string(),
        icao_code: "KJFK".to_string(),
        iata_code: Some("JFK".to_string()),
        latitude_deg: 40.639447,
        longitude_deg: -73.779317,
        elevation_ft: Some(13.0),
    }
}

#[derive(Default)]
pub struct FakeAirports {
    pub airports: Vec<Airport>,
    pub fail: bool,
    pub requested: Mutex<Vec<String>>,
}

impl FakeAirports {
    pub fn with(airports: Vec<Airport>) -> Self {
        Self {
            airports,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl AirportDirectory for FakeAirports {
    async fn find_airport(&self, icao: &str) -> anyhow::Result<Option<Airport>> {
        self.requested.lock().unwrap().push(icao.to_string());
        if self.fail {
            anyhow::bail!("airport directory unreachable");
        }
        Ok(self.airports.iter().find(|a| a.icao_code == icao).cloned())
    }
}

pub struct FakeTraffic {
    pub payload: Value,
    pub fail: bool,
    pub boxes: Mutex<Vec<BoundingBox>>,
}

impl FakeTraffic {
    pub fn with(payload: Value) -> Self {
        Self {
            payload,
            fail: false,
            boxes: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with(Value::Null)
        }
    }

    /// Three aircraft: one airborne, one on the ground, one with a blank callsign.
    pub fn sample() -> Self {
        Self::with(json!({
            "time": 1760860800,
            "states": [
                ["a1b2c3", "UAL10  ", "United States", 1760860790, 1760860799,
                 -73.70, 40.70, 3200.0, false, 180.2, 45.0, 5.1, null, 3300.0, "1200", false, 0],
                ["c0ffee", "AAL9   ", "United States", 1760860790, 1760860799,
                 -73.78, 40.64, null, true, 0.0, 90.0, null, null, null, null, false, 0],
                ["bead01", "        ", "Canada", 1760860790, 1760860799,
                 -73.60, 40.80, 9000.0, false, 230.0, 270.0, 0.0, null, 9100.0, null, false, 0]
            ]
        }))
    }
}

#[async_trait]
impl LiveTrafficSource for FakeTraffic {
    async fn states_within(&self, bbox: BoundingBox) -> anyhow::Result<Value> {
        self.boxes.lock().unwrap().push(bbox);
        if self.fail {
            anyhow::bail!("live traffic unreachable");
        }
        Ok(self.payload.clone())
    }
}

#[derive(Default)]
pub struct FakeFlights {
    pub result: FlightSearchResult,
    pub fail: bool,
    pub queries: Mutex<Vec<FlightIdentifier>>,
}

impl FakeFlights {
    pub fn with(payload: Value) -> Self {
        Self {
            result: serde_json::from_value(payload).unwrap(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn delta_230() -> Self {
        Self::with(json!({
            "pagination": {"limit": 1, "offset": 0, "count": 1, "total": 1},
            "data": [{
                "flight_date": "2026-10-19",
                "flight_status": "scheduled",
                "departure": {"airport": "Hartsfield-Jackson Atlanta International", "iata": "ATL", "icao": "KATL"},
                "arrival": {"airport": "Los Angeles International", "iata": "LAX", "icao": "KLAX"},
                "airline": {"name": "Delta", "iata": "DL", "icao": "DAL"},
                "flight": {"number": "230", "iata": "DL230", "icao": "DAL230"}
            }]
        }))
    }

    pub fn queried(&self) -> Vec<FlightIdentifier> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl FlightLookup for FakeFlights {
    async fn search(&self, id: &FlightIdentifier) -> anyhow::Result<FlightSearchResult> {
        self.queries.lock().unwrap().push(id.clone());
        if self.fail {
            anyhow::bail!("flight lookup unreachable");
        }
        Ok(self.result.clone())
    }
}

/// Repository whose every operation fails.
pub struct BrokenRepository;

#[async_trait]
impl SavedFlightRepository for BrokenRepository {
    async fn insert(&self, _flight: NewSavedFlight) -> anyhow::Result<SavedFlight> {
        anyhow::bail!("storage offline")
    }

    async fn list_newest_first(&self) -> anyhow::Result<Vec<SavedFlight>> {
        anyhow::bail!("storage offline")
    }

    async fn delete(&self, _id: &str) -> anyhow::Result<bool> {
        anyhow::bail!("storage offline")
    }
}
