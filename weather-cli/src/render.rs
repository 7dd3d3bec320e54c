use std::fmt::Write;

use weathernow_core::{Unit, WeatherApp, WeatherViewState};

/// Render the weather card shown after a successful search.
pub fn card(weather: &WeatherViewState, unit: Unit) -> String {
    let class = weather.classification();
    let (from, to) = class.background.gradient();

    let mut out = String::new();
    let _ = writeln!(out, "{}  {}, {}", class.icon.glyph(), weather.city, weather.country);
    let _ = writeln!(out, "   Temperature: {:.1}{}", weather.temperature, unit.symbol());
    let _ = writeln!(out, "   Wind Speed:  {} km/h", weather.wind_speed);
    let _ = writeln!(out, "   Condition:   {}", weather.description);
    if let Some(observed) = weather.observed_at {
        let _ = writeln!(out, "   Observed:    {}", observed.format("%Y-%m-%d %H:%M"));
    }
    let _ = write!(out, "   Background:  {from} → {to}");
    out
}

/// Render everything the app currently shows: error, loading line, card.
pub fn screen(app: &WeatherApp) -> String {
    let mut parts = Vec::new();

    if !app.error().is_empty() {
        parts.push(app.error().to_string());
    }
    if app.is_loading() {
        parts.push("Loading...".to_string());
    }
    if let Some(weather) = app.weather() {
        parts.push(card(weather, app.unit()));
        parts.push(format!("(:u to switch to {})", app.unit().toggled().symbol()));
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris(temperature: f64, code: i32) -> WeatherViewState {
        WeatherViewState {
            city: "Paris".into(),
            country: "France".into(),
            temperature,
            wind_speed: 10.4,
            weather_code: code,
            description: weathernow_core::classify::describe(code).to_string(),
            observed_at: None,
        }
    }

    #[test]
    fn card_formats_one_decimal_and_unit() {
        let out = card(&paris(64.76, 1), Unit::Fahrenheit);

        assert!(out.contains("Paris, France"));
        assert!(out.contains("Temperature: 64.8°F"));
        assert!(out.contains("Wind Speed:  10.4 km/h"));
        assert!(out.contains("Condition:   Mainly clear"));
        assert!(out.contains("yellow-200 → blue-300"));
        assert!(!out.contains("Observed"));
    }

    #[test]
    fn fog_card_uses_default_background() {
        let out = card(&paris(4.0, 45), Unit::Celsius);

        assert!(out.contains("Condition:   Fog"));
        assert!(out.contains("indigo-300 → slate-400"));
    }

    #[test]
    fn idle_screen_is_empty() {
        assert_eq!(screen(&WeatherApp::default()), "");
    }

    #[test]
    fn loading_screen() {
        let mut app = WeatherApp::default();
        app.set_city("Paris");
        let _ticket = app.begin_search();

        assert_eq!(screen(&app), "Loading...");
    }
}
