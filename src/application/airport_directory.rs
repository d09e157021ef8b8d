// Port for resolving airports by code
use crate::domain::airport::Airport;
use async_trait::async_trait;

#[async_trait]
pub trait AirportDirectory: Send + Sync {
    /// Look up an airport by ICAO code. `None` when the directory does not know it.
    async fn find_airport(&self, icao: &str) -> anyhow::Result<Option<Airport>>;
}
