// aviationstack adapter for flight lookups
use crate::application::flight_lookup::FlightLookup;
use crate::domain::flight::{FlightIdentifier, FlightSearchResult};
use crate::infrastructure::http_client::trim_base_url;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct AviationStackClient {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl AviationStackClient {
    pub fn new(client: reqwest::Client, base_url: &str, access_key: String) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
            access_key,
        }
    }

    fn search_request(&self, id: &FlightIdentifier) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/v1/flights", self.base_url))
            .query(&[
                ("access_key", self.access_key.as_str()),
                (id.query_key(), id.value()),
                ("limit", "1"),
            ])
    }
}

/// aviationstack reports API errors in a 200 body under `error`.
fn parse_search_body(body: Value) -> Result<FlightSearchResult> {
    if let Some(error) = body.get("error") {
        anyhow::bail!("aviationstack error: {}", error);
    }
    serde_json::from_value(body).context("Failed to parse aviationstack response")
}

#[async_trait]
impl FlightLookup for AviationStackClient {
    async fn search(&self, id: &FlightIdentifier) -> Result<FlightSearchResult> {
        let response = self
            .search_request(id)
            .send()
            .await
            .context("Failed to send request to aviationstack")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("aviationstack request failed with status {}: {}", status, body);
        }

        let body = response
            .json::<Value>()
            .await
            .context("Failed to read aviationstack response")?;

        parse_search_body(body)
    }
}
