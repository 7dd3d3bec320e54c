//! The resolve-then-fetch chain, mapping provider failures onto [`WeatherError`].

use crate::{
    error::WeatherError,
    model::{CurrentConditions, Location},
    provider::{ConditionsSource, Geocoder},
};

/// Resolve free-text city input to its first geocoding match.
///
/// Blank input fails with `EmptyInput` before the geocoder is called. The
/// untrimmed input is what gets sent upstream.
pub async fn resolve_city<G>(geocoder: &G, city: &str) -> Result<Location, WeatherError>
where
    G: Geocoder + ?Sized,
{
    if city.trim().is_empty() {
        return Err(WeatherError::EmptyInput);
    }

    let matches = geocoder.search(city).await.map_err(|err| {
        tracing::warn!(city, error = %format!("{err:#}"), "geocoding failed");
        WeatherError::network(err)
    })?;

    let location = matches
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::NotFound(city.to_string()))?;

    tracing::info!(
        city,
        name = %location.name,
        country = %location.country,
        latitude = location.latitude,
        longitude = location.longitude,
        "resolved location"
    );
    Ok(location)
}

pub async fn fetch_conditions<S>(
    source: &S,
    latitude: f64,
    longitude: f64,
) -> Result<CurrentConditions, WeatherError>
where
    S: ConditionsSource + ?Sized,
{
    source.current(latitude, longitude).await.map_err(|err| {
        tracing::warn!(latitude, longitude, error = %format!("{err:#}"), "forecast failed");
        WeatherError::network(err)
    })
}

/// Resolve `city`, then fetch conditions for the match. The fetch never
/// starts unless resolution produced coordinates.
pub async fn lookup<G, S>(
    geocoder: &G,
    source: &S,
    city: &str,
) -> Result<(Location, CurrentConditions), WeatherError>
where
    G: Geocoder + ?Sized,
    S: ConditionsSource + ?Sized,
{
    let location = resolve_city(geocoder, city).await?;
    let conditions = fetch_conditions(source, location.latitude, location.longitude).await?;
    Ok((location, conditions))
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[tokio::test]
    async fn blank_input_never_reaches_geocoder() {
        let geocoder = FakeGeocoder::returning(vec![paris()]);

        for input in ["", "   ", "\t\n"] {
            let err = resolve_city(&geocoder, input).await.unwrap_err();
            assert_eq!(err, WeatherError::EmptyInput);
        }
        assert_eq!(geocoder.calls(), 0);
    }

    #[tokio::test]
    async fn raw_input_is_sent_untrimmed() {
        let geocoder = FakeGeocoder::returning(vec![paris()]);

        resolve_city(&geocoder, " Paris ").await.expect("resolves");
        assert_eq!(geocoder.queries.lock().unwrap().as_slice(), [" Paris ".to_string()]);
    }

    #[tokio::test]
    async fn first_match_wins() {
        let mut texas = paris();
        texas.country = "United States".into();
        let geocoder = FakeGeocoder::returning(vec![paris(), texas]);

        let location = resolve_city(&geocoder, "Paris").await.expect("resolves");
        assert_eq!(location.country, "France");
    }

    #[tokio::test]
    async fn empty_results_is_not_found() {
        let geocoder = FakeGeocoder::returning(vec![]);

        let err = resolve_city(&geocoder, "Atlantis").await.unwrap_err();
        assert_eq!(err, WeatherError::NotFound("Atlantis".into()));
    }

    #[tokio::test]
    async fn geocoder_error_is_network_failure() {
        let err = resolve_city(&FakeGeocoder::failing(), "Paris").await.unwrap_err();
        assert!(matches!(err, WeatherError::NetworkFailure(ref msg) if msg.contains("connection reset")));
    }

    #[tokio::test]
    async fn fetch_skipped_when_resolution_fails() {
        let geocoder = FakeGeocoder::returning(vec![]);
        let source = FakeSource::returning(conditions(18.2, 10.4, 1));

        let err = lookup(&geocoder, &source, "Nowhere").await.unwrap_err();
        assert!(matches!(err, WeatherError::NotFound(_)));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn fetch_failure_is_network_failure() {
        let geocoder = FakeGeocoder::returning(vec![paris()]);
        let source = FakeSource::failing();

        let err = lookup(&geocoder, &source, "Paris").await.unwrap_err();
        assert!(matches!(err, WeatherError::NetworkFailure(_)));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn lookup_returns_both_parts() {
        let geocoder = FakeGeocoder::returning(vec![paris()]);
        let source = FakeSource::returning(conditions(18.2, 10.4, 1));

        let (location, current) = lookup(&geocoder, &source, "Paris").await.expect("lookup");
        assert_eq!(location, paris());
        assert_eq!(current.weather_code, 1);
    }
}
