use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::units::Unit;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_unit = "fahrenheit"
/// geocoding_url = "https://geocoding-api.open-meteo.com/v1/search"
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Unit a new session starts in.
    pub default_unit: Unit,

    /// Override for the geocoding search endpoint.
    pub geocoding_url: Option<String>,

    /// Override for the forecast endpoint.
    pub forecast_url: Option<String>,

    /// HTTP timeout in seconds for each request.
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn geocoding_url(&self) -> &str {
        self.geocoding_url.as_deref().unwrap_or(DEFAULT_GEOCODING_URL)
    }

    pub fn forecast_url(&self) -> &str {
        self.forecast_url.as_deref().unwrap_or(DEFAULT_FORECAST_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Store an endpoint override; the default URL or a blank string clears it.
    pub fn set_geocoding_url(&mut self, url: &str) {
        self.geocoding_url = normalize_override(url, DEFAULT_GEOCODING_URL);
    }

    pub fn set_forecast_url(&mut self, url: &str) {
        self.forecast_url = normalize_override(url, DEFAULT_FORECAST_URL);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-now", "weather-now")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn normalize_override(url: &str, default: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() || url == default { None } else { Some(url.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_open_meteo() {
        let cfg = Config::default();

        assert_eq!(cfg.default_unit, Unit::Celsius);
        assert_eq!(cfg.geocoding_url(), DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.forecast_url(), DEFAULT_FORECAST_URL);
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn overrides_and_clearing() {
        let mut cfg = Config::default();

        cfg.set_geocoding_url(" http://localhost:8080/search ");
        assert_eq!(cfg.geocoding_url(), "http://localhost:8080/search");

        cfg.set_geocoding_url("");
        assert_eq!(cfg.geocoding_url, None);

        cfg.set_forecast_url(DEFAULT_FORECAST_URL);
        assert_eq!(cfg.forecast_url, None);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("default_unit = \"fahrenheit\"\n").expect("valid toml");

        assert_eq!(cfg.default_unit, Unit::Fahrenheit);
        assert_eq!(cfg.timeout_secs, None);
        assert_eq!(cfg.forecast_url(), DEFAULT_FORECAST_URL);
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("absent.toml")).expect("load");

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config {
            default_unit: Unit::Fahrenheit,
            timeout_secs: Some(3),
            ..Config::default()
        };
        cfg.set_forecast_url("http://127.0.0.1:9000/v1/forecast");
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_unit = \"kelvin\"").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
