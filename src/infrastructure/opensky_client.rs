// OpenSky Network adapter for live state vectors
use crate::application::traffic_source::LiveTrafficSource;
use crate::domain::geo::BoundingBox;
use crate::infrastructure::http_client::trim_base_url;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct OpenSkyClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenSkyClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
        }
    }

    fn states_url(&self) -> String {
        format!("{}/api/states/all", self.base_url)
    }
}

#[async_trait]
impl LiveTrafficSource for OpenSkyClient {
    async fn states_within(&self, bbox: BoundingBox) -> Result<Value> {
        let response = self
            .client
            .get(self.states_url())
            .query(&bbox.query_params())
            .send()
            .await
            .context("Failed to send request to OpenSky")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenSky request failed with status {}: {}", status, body);
        }

        response
            .json::<Value>()
            .await
            .context("Failed to parse OpenSky response")
    }
}
