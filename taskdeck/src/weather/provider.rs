//! Weather data collaborator.
//!
//! [`OpenWeatherProvider`] issues a single HTTP GET against the
//! OpenWeatherMap current-weather endpoint and normalizes the payload
//! into a [`WeatherSnapshot`]. One attempt per fetch; no retry, no
//! caching.

use serde::Deserialize;
use taskdeck_model::WeatherSnapshot;

use super::WeatherError;

/// Default OpenWeatherMap current-weather endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Async collaborator contract for fetching weather by coordinates.
pub trait WeatherProvider: Send + Sync {
    /// Fetches the current weather for the given position.
    fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> impl std::future::Future<Output = Result<WeatherSnapshot, WeatherError>> + Send;
}

/// OpenWeatherMap-backed provider.
pub struct OpenWeatherProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    units: String,
}

impl OpenWeatherProvider {
    /// Creates a provider against the default endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>, units: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key, units)
    }

    /// Creates a provider against a custom endpoint (used by tests and
    /// proxies).
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        units: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            units: units.into(),
        }
    }
}

impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot, WeatherError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("units", self.units.clone()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(WeatherError::Unavailable);
        }

        let payload: OwmResponse = resp
            .json()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;
        payload.into_snapshot()
    }
}

// ---------------------------------------------------------------------------
// OpenWeatherMap wire payload
// ---------------------------------------------------------------------------

/// The subset of the OpenWeatherMap current-weather response we read.
#[derive(Debug, Deserialize)]
struct OwmResponse {
    name: String,
    main: OwmMain,
    weather: Vec<OwmCondition>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    id: u16,
    description: String,
}

impl OwmResponse {
    fn into_snapshot(self) -> Result<WeatherSnapshot, WeatherError> {
        // The API always reports at least one condition; an empty list
        // means the payload is unusable.
        let condition = self.weather.first().ok_or(WeatherError::Unavailable)?;
        Ok(WeatherSnapshot {
            location: self.name,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            condition_code: condition.id,
            description: condition.description.clone(),
        })
    }
}
