//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Geocoding and current-conditions lookups against Open-Meteo
//! - The resolve-then-fetch workflow and its error taxonomy
//! - Weather code classification and unit conversion
//! - The view state a front end renders, and its on-disk configuration
//!
//! It is used by `weathernow-cli`, but can also be reused by other front ends.

pub mod app;
pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod units;
pub mod workflow;

pub use app::{Phase, SearchTicket, WeatherApp};
pub use classify::{Background, Classification, Icon, classify};
pub use config::Config;
pub use error::WeatherError;
pub use model::{CurrentConditions, Location, WeatherViewState};
pub use provider::{ConditionsSource, Geocoder, client_from_config, openmeteo::OpenMeteoClient};
pub use units::Unit;
