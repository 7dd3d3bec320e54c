use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    config::{DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL, DEFAULT_TIMEOUT_SECS},
    model::{CurrentConditions, Location},
};

use super::{ConditionsSource, Geocoder};

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Client for the keyless Open-Meteo geocoding and forecast APIs.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    geocoding_url: String,
    forecast_url: String,
    http: Client,
}

impl OpenMeteoClient {
    pub fn new() -> Result<Self> {
        Self::with_endpoints(
            DEFAULT_GEOCODING_URL,
            DEFAULT_FORECAST_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn with_endpoints(
        geocoding_url: impl Into<String>,
        forecast_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("weather-now/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { geocoding_url: geocoding_url.into(), forecast_url: forecast_url.into(), http })
    }

    pub fn geocoding_url(&self) -> &str {
        &self.geocoding_url
    }

    pub fn forecast_url(&self) -> &str {
        &self.forecast_url
    }

    async fn get_body(&self, url: &str, query: &[(&str, &str)], what: &str) -> Result<String> {
        tracing::debug!(url, ?query, "Open-Meteo {what} request");

        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to send request to Open-Meteo ({what})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read Open-Meteo {what} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo {what} request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OmGeoResult {
    name: String,
    #[serde(default)]
    country: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct OmGeoResponse {
    // Absent entirely when nothing matched.
    results: Option<Vec<OmGeoResult>>,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: Option<OmCurrentWeather>,
}

#[async_trait]
impl Geocoder for OpenMeteoClient {
    async fn search(&self, name: &str) -> Result<Vec<Location>> {
        let body = self.get_body(&self.geocoding_url, &[("name", name)], "geocoding").await?;

        let parsed: OmGeoResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo geocoding JSON")?;

        Ok(parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|r| Location {
                name: r.name,
                country: r.country,
                latitude: r.latitude,
                longitude: r.longitude,
            })
            .collect())
    }
}

#[async_trait]
impl ConditionsSource for OpenMeteoClient {
    async fn current(&self, latitude: f64, longitude: f64) -> Result<CurrentConditions> {
        let latitude = latitude.to_string();
        let longitude = longitude.to_string();

        let body = self
            .get_body(
                &self.forecast_url,
                &[
                    ("latitude", latitude.as_str()),
                    ("longitude", longitude.as_str()),
                    ("current_weather", "true"),
                ],
                "forecast",
            )
            .await?;

        let parsed: OmForecastResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo forecast JSON")?;

        let current = parsed
            .current_weather
            .ok_or_else(|| anyhow!("Open-Meteo forecast response contained no current_weather"))?;

        Ok(CurrentConditions {
            temperature_c: current.temperature,
            wind_speed_kph: current.windspeed,
            weather_code: current.weathercode,
            observed_at: current.time.as_deref().and_then(parse_time),
        })
    }
}

fn parse_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIME_FORMAT).ok()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
