use anyhow::{Context, ensure};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use tracing::debug;
use weather_core::{Config, QueryState, SearchRequest, WeatherQuery, service_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Madrid".
        city: String,

        /// Country code, e.g. "ES".
        country: String,
    },

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, country } => show(SearchRequest::new(city, country)).await,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    cfg.set_api_key(normalize_api_key(&api_key)?);
    cfg.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn normalize_api_key(input: &str) -> anyhow::Result<String> {
    let api_key = input.trim();
    ensure!(!api_key.is_empty(), "API key must not be empty");
    Ok(api_key.to_string())
}

async fn show(request: SearchRequest) -> anyhow::Result<()> {
    let cfg = Config::load()?.with_env_overrides();
    debug!(
        geocoding_url = %cfg.geocoding_url,
        weather_url = %cfg.weather_url,
        "loaded configuration"
    );

    let query = WeatherQuery::new(service_from_config(&cfg)?);

    query.fetch_weather(request.clone()).await;

    println!("{}", render(&request, &query.state()));
    Ok(())
}

fn render(request: &SearchRequest, state: &QueryState) -> String {
    if state.not_found {
        return format!("No results for {}, {}", request.city, request.country);
    }
    if !state.has_data() {
        return "No weather data available".to_string();
    }

    let main = &state.result.main;
    format!(
        "Weather in {}\n  temperature: {:.1} °C\n  min: {:.1} °C\n  max: {:.1} °C",
        state.result.name,
        kelvin_to_celsius(main.temp),
        kelvin_to_celsius(main.temp_min),
        kelvin_to_celsius(main.temp_max),
    )
}

fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}
