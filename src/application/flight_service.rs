// Flight service - Use cases backed by the flight lookup
use crate::application::flight_lookup::FlightLookup;
use crate::domain::flight::{FlightEnrichment, FlightIdentifier, FlightInfo, Pagination};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FlightDetails {
    pub flight: Option<FlightInfo>,
    pub pagination: Option<Pagination>,
}

#[derive(Clone)]
pub struct FlightService {
    lookup: Arc<dyn FlightLookup>,
}

impl FlightService {
    pub fn new(lookup: Arc<dyn FlightLookup>) -> Self {
        Self { lookup }
    }

    /// Best matching flight plus the upstream pagination metadata.
    pub async fn details(&self, id: &FlightIdentifier) -> anyhow::Result<FlightDetails> {
        let result = self.lookup.search(id).await?;
        let pagination = result.pagination.clone();

        Ok(FlightDetails {
            flight: result.into_best_match(),
            pagination,
        })
    }

    /// Fields used to pre-fill a saved flight, if the callsign matches anything.
    pub async fn enrichment_for(&self, callsign: &str) -> anyhow::Result<Option<FlightEnrichment>> {
        let Some(id) = FlightIdentifier::from_params(Some(callsign), None) else {
            return Ok(None);
        };

        let result = self.lookup.search(&id).await?;
        Ok(result.best_match().map(FlightEnrichment::from_flight))
    }
}
