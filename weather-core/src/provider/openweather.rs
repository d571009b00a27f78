use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{
    error::FetchError,
    model::{Coordinates, GeoEntry, SearchRequest},
};

use super::WeatherService;

const GEOCODING: &str = "geocoding";
const WEATHER: &str = "weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    geocoding_url: String,
    weather_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, geocoding_url: String, weather_url: String) -> Self {
        Self {
            api_key,
            geocoding_url,
            weather_url,
            http: Client::new(),
        }
    }

    async fn get_body(
        &self,
        endpoint: &'static str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<String, FetchError> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn geocode(&self, request: &SearchRequest) -> Result<Vec<Coordinates>, FetchError> {
        let q = request.query();
        let body = self
            .get_body(
                GEOCODING,
                &self.geocoding_url,
                &[("q", q.as_str()), ("appid", self.api_key.as_str())],
            )
            .await?;

        let entries: Vec<GeoEntry> =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                endpoint: GEOCODING,
                source,
            })?;

        debug!(query = %q, matches = entries.len(), "geocoding response");

        Ok(entries.into_iter().map(Coordinates::from).collect())
    }

    async fn current_weather(&self, at: Coordinates) -> Result<Value, FetchError> {
        let lat = at.latitude.to_string();
        let lon = at.longitude.to_string();

        let body = self
            .get_body(
                WEATHER,
                &self.weather_url,
                &[
                    ("lat", lat.as_str()),
                    ("lon", lon.as_str()),
                    ("appid", self.api_key.as_str()),
                ],
            )
            .await?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            endpoint: WEATHER,
            source,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept() {
        assert_eq!(truncate_body("Unauthorized"), "Unauthorized");
    }

    #[test]
    fn long_body_is_cut_at_limit() {
        let body = "x".repeat(500);
        let out = truncate_body(&body);
        assert_eq!(out.len(), 203);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = format!("{}{}", "a".repeat(199), "é".repeat(10));
        let out = truncate_body(&body);
        assert_eq!(out, format!("{}...", "a".repeat(199)));
    }
}
