use serde::{Deserialize, Serialize};

/// City/country pair typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub city: String,
    pub country: String,
}

impl SearchRequest {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }

    /// Geocoding query string, e.g. `Madrid,ES`.
    pub fn query(&self) -> String {
        format!("{},{}", self.city, self.country)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One entry of the geocoding response. Only the position is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoEntry {
    pub lat: f64,
    pub lon: f64,
}

impl From<GeoEntry> for Coordinates {
    fn from(entry: GeoEntry) -> Self {
        Self {
            latitude: entry.lat,
            longitude: entry.lon,
        }
    }
}

/// Temperatures as returned by the weather endpoint (Kelvin).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub temp_max: f64,
    pub temp_min: f64,
}

/// Last validated weather reading. The default value is the empty reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub name: String,
    pub main: MainReadings,
}

impl WeatherResult {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Observable state of a [`crate::WeatherQuery`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub result: WeatherResult,
    pub loading: bool,
    pub not_found: bool,
}

impl QueryState {
    pub fn has_data(&self) -> bool {
        !self.result.is_empty()
    }
}
