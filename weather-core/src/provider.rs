use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config,
    error::FetchError,
    model::{Coordinates, SearchRequest},
};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// The two remote calls a lookup needs.
///
/// `current_weather` hands back the raw JSON body; deciding whether it has the
/// right shape is left to [`crate::schema`].
#[async_trait]
pub trait WeatherService: Send + Sync + Debug {
    async fn geocode(&self, request: &SearchRequest) -> Result<Vec<Coordinates>, FetchError>;

    async fn current_weather(&self, at: Coordinates) -> Result<serde_json::Value, FetchError>;
}

/// Construct the OpenWeather client from config. Fails when no API key is set.
pub fn service_from_config(config: &Config) -> anyhow::Result<OpenWeatherClient> {
    let api_key = config.require_api_key()?;

    Ok(OpenWeatherClient::new(
        api_key.to_owned(),
        config.geocoding_url.clone(),
        config.weather_url.clone(),
    ))
}
