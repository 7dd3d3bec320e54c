use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{classify, units::Unit};

/// First geocoding match for a city query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions as reported upstream; temperature is always Celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub wind_speed_kph: f64,
    pub weather_code: i32,
    /// Location-local observation time, when the service reports one.
    pub observed_at: Option<NaiveDateTime>,
}

/// What the presentation layer displays after a successful search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherViewState {
    pub city: String,
    pub country: String,
    /// Expressed in the unit held next to this state, never on its own.
    pub temperature: f64,
    pub wind_speed: f64,
    pub weather_code: i32,
    pub description: String,
    pub observed_at: Option<NaiveDateTime>,
}

impl WeatherViewState {
    /// Build the view state, expressing the temperature in `unit`.
    pub fn from_parts(location: Location, conditions: CurrentConditions, unit: Unit) -> Self {
        Self {
            city: location.name,
            country: location.country,
            temperature: unit.express_celsius(conditions.temperature_c),
            wind_speed: conditions.wind_speed_kph,
            weather_code: conditions.weather_code,
            description: classify::describe(conditions.weather_code).to_string(),
            observed_at: conditions.observed_at,
        }
    }

    pub fn classification(&self) -> classify::Classification {
        classify::classify(self.weather_code)
    }
}
