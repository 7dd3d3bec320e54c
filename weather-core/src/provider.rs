use crate::{
    Config,
    model::{CurrentConditions, Location},
    provider::openmeteo::OpenMeteoClient,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

/// Name → coordinates lookup.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// All matches for `name`, best first. An empty list is not an error.
    async fn search(&self, name: &str) -> anyhow::Result<Vec<Location>>;
}

/// Coordinates → current conditions.
#[async_trait]
pub trait ConditionsSource: Send + Sync + Debug {
    async fn current(&self, latitude: f64, longitude: f64) -> anyhow::Result<CurrentConditions>;
}

/// Construct the Open-Meteo client from config endpoints and timeout.
pub fn client_from_config(config: &Config) -> anyhow::Result<OpenMeteoClient> {
    OpenMeteoClient::with_endpoints(config.geocoding_url(), config.forecast_url(), config.timeout())
}
