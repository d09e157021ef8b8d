// Port for querying live aircraft states
use crate::domain::geo::BoundingBox;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait LiveTrafficSource: Send + Sync {
    /// Raw live-state payload for every aircraft inside `bbox`.
    /// The payload is expected to carry a `states` array of positional tuples.
    async fn states_within(&self, bbox: BoundingBox) -> anyhow::Result<Value>;
}
