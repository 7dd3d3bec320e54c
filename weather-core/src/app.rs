//! In-memory view state and the transitions that are allowed to touch it.

use crate::{
    classify::Background,
    error::WeatherError,
    model::{CurrentConditions, Location, WeatherViewState},
    provider::{ConditionsSource, Geocoder},
    units::Unit,
    workflow,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Handle for one in-flight search. Only the most recently issued ticket
/// may complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    city: String,
}

impl SearchTicket {
    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Presentation state: one city, its weather, and the loading/error flags.
#[derive(Debug, Clone, Default)]
pub struct WeatherApp {
    city: String,
    weather: Option<WeatherViewState>,
    loading: bool,
    error: String,
    unit: Unit,
    generation: u64,
}

impl WeatherApp {
    pub fn new(unit: Unit) -> Self {
        Self { unit, ..Self::default() }
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn weather(&self) -> Option<&WeatherViewState> {
        self.weather.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current user-facing error message, empty when there is none.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn background(&self) -> Background {
        Background::for_optional_code(self.weather.as_ref().map(|w| w.weather_code))
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if !self.error.is_empty() {
            Phase::Error
        } else if self.weather.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    /// Enter `Loading` for the current city input. Any earlier ticket is
    /// invalidated.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.generation += 1;
        self.loading = true;
        self.error.clear();

        SearchTicket { generation: self.generation, city: self.city.clone() }
    }

    /// Apply the outcome of `ticket`'s search. Returns `false` and leaves the
    /// state untouched when a newer search has started since.
    pub fn finish_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<(Location, CurrentConditions), WeatherError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::warn!(city = ticket.city.as_str(), "discarding stale search result");
            return false;
        }

        match outcome {
            Ok((location, conditions)) => {
                let view = WeatherViewState::from_parts(location, conditions, self.unit);
                tracing::info!(
                    city = %view.city,
                    code = view.weather_code,
                    description = %view.description,
                    "search completed"
                );
                self.weather = Some(view);
                self.error.clear();
            }
            Err(err) => {
                tracing::warn!(city = ticket.city.as_str(), error = %err, "search failed");
                self.weather = None;
                self.error = err.user_message().to_string();
            }
        }
        self.loading = false;

        true
    }

    /// Run the whole resolve-then-fetch chain for the current city input.
    pub async fn search<G, S>(&mut self, geocoder: &G, source: &S)
    where
        G: Geocoder + ?Sized,
        S: ConditionsSource + ?Sized,
    {
        let ticket = self.begin_search();
        let outcome = workflow::lookup(geocoder, source, ticket.city()).await;
        self.finish_search(&ticket, outcome);
    }

    /// Flip the unit and convert the displayed temperature with it. Without
    /// weather on screen nothing changes.
    pub fn toggle_unit(&mut self) {
        let Some(weather) = self.weather.as_mut() else {
            return;
        };

        let next = self.unit.toggled();
        weather.temperature = self.unit.convert(weather.temperature, next);
        self.unit = next;
    }
}
