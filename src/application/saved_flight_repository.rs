// Repository trait for saved flight persistence
use crate::domain::saved_flight::{NewSavedFlight, SavedFlight};
use async_trait::async_trait;

#[async_trait]
pub trait SavedFlightRepository: Send + Sync {
    /// Store a flight, assigning its id and timestamp
    async fn insert(&self, flight: NewSavedFlight) -> anyhow::Result<SavedFlight>;

    /// All saved flights, most recently saved first
    async fn list_newest_first(&self) -> anyhow::Result<Vec<SavedFlight>>;

    /// Delete by id. Returns false when nothing matched.
    async fn delete(&self, id: &str) -> anyhow::Result<bool>;
}
