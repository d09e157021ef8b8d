// airportdb.io adapter for the airport directory
use crate::application::airport_directory::AirportDirectory;
use crate::domain::airport::Airport;
use crate::infrastructure::http_client::trim_base_url;
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct AirportDbClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl AirportDbClient {
    pub fn new(client: reqwest::Client, base_url: &str, token: String) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
            token,
        }
    }

    fn airport_url(&self, icao: &str) -> String {
        format!("{}/api/v1/airport/{}", self.base_url, urlencoding::encode(icao))
    }
}

#[async_trait]
impl AirportDirectory for AirportDbClient {
    async fn find_airport(&self, icao: &str) -> Result<Option<Airport>> {
        let response = self
            .client
            .get(self.airport_url(icao))
            .query(&[("apiToken", self.token.as_str())])
            .send()
            .await
            .context("Failed to send request to airportdb")?;

        // airportdb answers unknown codes with a non-success status
        if !response.status().is_success() {
            tracing::info!("airportdb returned {} for {}", response.status(), icao);
            return Ok(None);
        }

        let airport = response
            .json::<Airport>()
            .await
            .context("Failed to parse airportdb response")?;

        Ok(Some(airport))
    }
}
