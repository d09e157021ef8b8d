// Flight lookup domain models and projections
use serde::Deserialize;

/// Identifier used to search the flight-lookup API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightIdentifier {
    /// ICAO-style callsign, e.g. DAL230
    Icao(String),
    /// IATA-style flight number, e.g. DL230
    Iata(String),
}

impl FlightIdentifier {
    /// Callsign wins when both are given. Blank values count as absent.
    pub fn from_params(callsign: Option<&str>, flight_iata: Option<&str>) -> Option<Self> {
        let clean = |value: Option<&str>| {
            value
                .map(|v| v.trim().to_uppercase())
                .filter(|v| !v.is_empty())
        };

        clean(callsign)
            .map(FlightIdentifier::Icao)
            .or_else(|| clean(flight_iata).map(FlightIdentifier::Iata))
    }

    /// Name of the upstream query parameter carrying this identifier.
    pub fn query_key(&self) -> &'static str {
        match self {
            FlightIdentifier::Icao(_) => "flight_icao",
            FlightIdentifier::Iata(_) => "flight_iata",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            FlightIdentifier::Icao(v) | FlightIdentifier::Iata(v) => v,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FlightSearchResult {
    #[serde(default)]
    pub data: Vec<FlightInfo>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl FlightSearchResult {
    pub fn best_match(&self) -> Option<&FlightInfo> {
        self.data.first()
    }

    pub fn into_best_match(self) -> Option<FlightInfo> {
        self.data.into_iter().next()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pagination {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub count: Option<u64>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlightInfo {
    pub flight_date: Option<String>,
    pub flight_status: Option<String>,
    pub departure: Option<FlightEndpoint>,
    pub arrival: Option<FlightEndpoint>,
    pub airline: Option<AirlineInfo>,
    pub flight: Option<FlightNumber>,
    pub live: Option<LivePosition>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlightEndpoint {
    pub airport: Option<String>,
    pub timezone: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub terminal: Option<String>,
    pub gate: Option<String>,
    pub delay: Option<f64>,
    pub scheduled: Option<String>,
    pub estimated: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AirlineInfo {
    pub name: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlightNumber {
    pub number: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LivePosition {
    pub updated: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub direction: Option<f64>,
    pub speed_horizontal: Option<f64>,
    pub speed_vertical: Option<f64>,
    pub is_ground: Option<bool>,
}

/// Fields copied from a flight lookup into a saved-flight draft.
/// Missing upstream values become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightEnrichment {
    pub flight_iata: String,
    pub airline: String,
    pub departure_airport: String,
    pub departure_iata: String,
    pub arrival_airport: String,
    pub arrival_iata: String,
    pub status: String,
}

impl FlightEnrichment {
    pub fn from_flight(flight: &FlightInfo) -> Self {
        fn text(value: Option<&String>) -> String {
            value.cloned().unwrap_or_default()
        }

        let departure = flight.departure.as_ref();
        let arrival = flight.arrival.as_ref();

        Self {
            flight_iata: text(flight.flight.as_ref().and_then(|f| f.iata.as_ref())),
            airline: text(flight.airline.as_ref().and_then(|a| a.name.as_ref())),
            departure_airport: text(departure.and_then(|d| d.airport.as_ref())),
            departure_iata: text(departure.and_then(|d| d.iata.as_ref())),
            arrival_airport: text(arrival.and_then(|a| a.airport.as_ref())),
            arrival_iata: text(arrival.and_then(|a| a.iata.as_ref())),
            status: text(flight.flight_status.as_ref()),
        }
    }
}
