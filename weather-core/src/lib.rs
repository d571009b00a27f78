//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration (API key and endpoint URLs)
//! - The OpenWeather geocoding + current weather client
//! - Shape validation of the weather payload
//! - [`WeatherQuery`], the stateful lookup a UI layer binds to
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod query;
pub mod schema;

pub use config::Config;
pub use error::{FetchError, SchemaError, Violation};
pub use model::{Coordinates, MainReadings, QueryState, SearchRequest, WeatherResult};
pub use provider::{OpenWeatherClient, WeatherService, service_from_config};
pub use query::WeatherQuery;
pub use schema::validate_weather;
