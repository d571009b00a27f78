//! Two-step weather lookup with observable state.
//!
//! [`WeatherQuery`] resolves a city/country to coordinates, fetches the current
//! weather there and publishes the outcome through a `watch` channel. A UI
//! binds to it with [`WeatherQuery::subscribe`] and re-renders on every change.
//!
//! `fetch_weather` never fails. A lookup ends in one of these published states:
//! - data: `result` holds the validated reading,
//! - not found: `not_found` is set and `result` stays empty,
//! - anything else (bad payload, HTTP or transport failure): `result` stays
//!   empty and the cause only goes to the log.
//!
//! Overlapping calls are not serialized; each field ends up with whichever
//! call wrote it last.

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::{
    error::FetchError,
    model::{QueryState, SearchRequest, WeatherResult},
    provider::WeatherService,
    schema::validate_weather,
};

#[derive(Debug)]
pub struct WeatherQuery<S> {
    service: S,
    state: watch::Sender<QueryState>,
}

impl<S: WeatherService> WeatherQuery<S> {
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(QueryState::default());
        Self { service, state }
    }

    /// Run one lookup for `request`, publishing state changes as it goes.
    ///
    /// `loading` is set on entry and cleared on every exit path.
    pub async fn fetch_weather(&self, request: SearchRequest) {
        info!(city = %request.city, country = %request.country, "fetching weather");

        self.state.send_modify(|s| {
            s.loading = true;
            s.not_found = false;
            s.result = WeatherResult::default();
        });

        if let Err(err) = self.lookup(&request).await {
            error!(
                error = %err,
                city = %request.city,
                country = %request.country,
                "weather lookup failed"
            );
        }

        self.state.send_modify(|s| s.loading = false);
    }

    async fn lookup(&self, request: &SearchRequest) -> Result<(), FetchError> {
        let matches = self.service.geocode(request).await?;

        let Some(&at) = matches.first() else {
            warn!(query = %request.query(), "no geocoding match");
            self.state.send_modify(|s| s.not_found = true);
            return Ok(());
        };

        debug!(lat = at.latitude, lon = at.longitude, "resolved coordinates");

        let payload = self.service.current_weather(at).await?;

        match validate_weather(&payload) {
            Ok(result) => {
                debug!(
                    name = %result.name,
                    temp = result.main.temp,
                    "weather reading accepted"
                );
                self.state.send_modify(|s| s.result = result);
            }
            Err(err) => {
                warn!(error = %err, "discarding weather payload");
                debug!(%payload, "rejected payload");
            }
        }

        Ok(())
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> QueryState {
        self.state.borrow().clone()
    }

    pub fn weather(&self) -> WeatherResult {
        self.state.borrow().result.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn not_found(&self) -> bool {
        self.state.borrow().not_found
    }

    pub fn has_weather_data(&self) -> bool {
        self.state.borrow().has_data()
    }
}
