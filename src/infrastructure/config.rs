use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::time::Duration;

pub const ENV_PREFIX: &str = "FLIGHT_TRACKER";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub airport_api: AirportApiSettings,
    pub opensky: OpenSkySettings,
    pub aviation_api: AviationApiSettings,
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    /// SQLite database path, or `:memory:`
    pub database_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AirportApiSettings {
    pub base_url: String,
    pub token: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenSkySettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AviationApiSettings {
    pub base_url: String,
    pub access_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    pub timeout_secs: u64,
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 4000)?
        .set_default("storage.database_url", "saved_flights.db")?
        .set_default("airport_api.base_url", "https://airportdb.io")?
        .set_default("airport_api.token", "")?
        .set_default("opensky.base_url", "https://opensky-network.org")?
        .set_default("aviation_api.base_url", "http://api.aviationstack.com")?
        .set_default("aviation_api.access_key", "")?
        .set_default("upstream.timeout_secs", 10)
}

/// Defaults, then `config/app.*` if present, then `FLIGHT_TRACKER__*` env vars.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = with_defaults(config::Config::builder())?
        .add_source(config::File::with_name("config/app").required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
