use thiserror::Error;

/// User-facing message for [`WeatherError::EmptyInput`].
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a city name";
/// User-facing message for [`WeatherError::NotFound`].
pub const NOT_FOUND_MESSAGE: &str = "City not found";
/// User-facing message for [`WeatherError::NetworkFailure`].
pub const NETWORK_FAILURE_MESSAGE: &str = "Something went wrong, try again later";

/// Failures of the resolve-then-fetch workflow.
///
/// Transport errors, non-success statuses and malformed payloads all collapse
/// into `NetworkFailure`; the carried string is the formatted cause chain and
/// only ends up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("empty city name")]
    EmptyInput,

    #[error("no geocoding result for '{0}'")]
    NotFound(String),

    #[error("network failure: {0}")]
    NetworkFailure(String),
}

impl WeatherError {
    /// Wrap any provider error, keeping its whole context chain.
    pub fn network(err: anyhow::Error) -> Self {
        WeatherError::NetworkFailure(format!("{err:#}"))
    }

    /// The fixed message shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::EmptyInput => EMPTY_INPUT_MESSAGE,
            WeatherError::NotFound(_) => NOT_FOUND_MESSAGE,
            WeatherError::NetworkFailure(_) => NETWORK_FAILURE_MESSAGE,
        }
    }
}
