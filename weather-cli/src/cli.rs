use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Select, Text};
use weathernow_core::{Config, OpenMeteoClient, Unit, WeatherApp, client_from_config, workflow};

use crate::render;

const TOGGLE_COMMAND: &str = ":u";
const QUIT_COMMAND: &str = ":q";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Edit default unit, endpoints and timeout.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Paris".
        city: String,

        /// Temperature unit: c or f. Defaults to the configured unit.
        #[arg(long, short)]
        unit: Option<String>,
    },

    /// Search repeatedly; `:u` toggles the unit, `:q` quits.
    Interactive {
        /// Temperature unit: c or f. Defaults to the configured unit.
        #[arg(long, short)]
        unit: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, unit } => {
                let config = Config::load()?;
                let unit = resolve_unit(unit.as_deref(), &config)?;
                show(&config, city, unit).await
            }
            Command::Interactive { unit } => {
                let config = Config::load()?;
                let unit = resolve_unit(unit.as_deref(), &config)?;
                interactive(&config, unit).await
            }
        }
    }
}

fn resolve_unit(flag: Option<&str>, config: &Config) -> anyhow::Result<Unit> {
    flag.map_or(Ok(config.default_unit), str::parse::<Unit>)
}

async fn show(config: &Config, city: String, unit: Unit) -> anyhow::Result<()> {
    let client = client_from_config(config)?;

    let mut app = WeatherApp::new(unit);
    app.set_city(city);
    app.search(&client, &client).await;

    if !app.error().is_empty() {
        anyhow::bail!("{}", app.error());
    }
    if let Some(weather) = app.weather() {
        println!("{}", render::card(weather, app.unit()));
    }

    Ok(())
}

async fn interactive(config: &Config, unit: Unit) -> anyhow::Result<()> {
    let client = client_from_config(config)?;
    let mut app = WeatherApp::new(unit);

    println!("Type a city and press Enter. {TOGGLE_COMMAND} switches °C/°F, {QUIT_COMMAND} quits.");

    loop {
        let input = match Text::new("City:").with_placeholder("Enter city...").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city input"),
        };

        match input.trim() {
            QUIT_COMMAND => break,
            TOGGLE_COMMAND => app.toggle_unit(),
            _ => {
                app.set_city(input.clone());
                submit(&mut app, &client).await;
            }
        }

        let screen = render::screen(&app);
        if !screen.is_empty() {
            println!("{screen}");
        }
    }

    Ok(())
}

async fn submit(app: &mut WeatherApp, client: &OpenMeteoClient) {
    let ticket = app.begin_search();
    println!("{}", render::screen(app));

    let outcome = workflow::lookup(client, client, ticket.city()).await;
    app.finish_search(&ticket, outcome);
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let units = Unit::all().to_vec();
    let cursor = units.iter().position(|u| *u == config.default_unit).unwrap_or(0);
    config.default_unit = Select::new("Default unit:", units).with_starting_cursor(cursor).prompt()?;

    let geocoding = Text::new("Geocoding endpoint:").with_default(config.geocoding_url()).prompt()?;
    config.set_geocoding_url(&geocoding);

    let forecast = Text::new("Forecast endpoint:").with_default(config.forecast_url()).prompt()?;
    config.set_forecast_url(&forecast);

    let timeout = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout().as_secs())
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;
    config.timeout_secs = Some(timeout);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
