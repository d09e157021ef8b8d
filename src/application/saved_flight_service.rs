// Saved flight service - Create, list and delete saved flights
use crate::application::flight_service::FlightService;
use crate::application::saved_flight_repository::SavedFlightRepository;
use crate::domain::saved_flight::{NewSavedFlight, SavedFlight, SavedFlightDraft};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct SavedFlightService {
    repository: Arc<dyn SavedFlightRepository>,
    flights: FlightService,
}

impl SavedFlightService {
    pub fn new(repository: Arc<dyn SavedFlightRepository>, flights: FlightService) -> Self {
        Self {
            repository,
            flights,
        }
    }

    pub async fn list(&self) -> anyhow::Result<Vec<SavedFlight>> {
        self.repository.list_newest_first().await
    }

    /// Validate and store a manually entered flight.
    pub async fn add(&self, draft: SavedFlightDraft) -> anyhow::Result<SavedFlight> {
        let flight = NewSavedFlight::from_draft(draft)?;
        self.repository.insert(flight).await
    }

    /// Store a flight from a callsign, filling route and airline from the lookup.
    /// A callsign the lookup does not know is saved without enrichment.
    pub async fn quick_add(
        &self,
        callsign: Option<String>,
        notes: Option<String>,
        priority: Option<String>,
    ) -> anyhow::Result<SavedFlight> {
        let mut draft = SavedFlightDraft {
            callsign,
            notes,
            priority,
            ..Default::default()
        };

        if let Some(callsign) = draft.callsign.as_deref() {
            let enrichment = self
                .flights
                .enrichment_for(callsign)
                .await
                .context("flight lookup failed during quick add")?;

            match enrichment {
                Some(enrichment) => draft.enrich(enrichment),
                None => tracing::info!("no flight found for callsign {}, saving as entered", callsign),
            }
        }

        self.add(draft).await
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        self.repository.delete(id).await
    }
}
