// Port for searching flight schedule/status data
use crate::domain::flight::{FlightIdentifier, FlightSearchResult};
use async_trait::async_trait;

#[async_trait]
pub trait FlightLookup: Send + Sync {
    /// Search flights by identifier, limited to a single result.
    async fn search(&self, id: &FlightIdentifier) -> anyhow::Result<FlightSearchResult>;
}
