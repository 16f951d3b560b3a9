//! The weather store: single snapshot slot plus fetch lifecycle.

use std::time::Duration;

use taskdeck_model::WeatherSnapshot;

use super::location::Geolocator;
use super::provider::WeatherProvider;
use super::WeatherError;

/// Default bounded wait for position acquisition.
pub const DEFAULT_GEO_TIMEOUT: Duration = Duration::from_secs(10);

/// Owns the latest weather snapshot and its fetch state.
///
/// On rejection the previous snapshot is retained — `data` is only
/// ever touched by a successful fetch. Overlapping fetches race;
/// last-settled-wins, as with the auth store.
pub struct WeatherStore<G: Geolocator, P: WeatherProvider> {
    data: Option<WeatherSnapshot>,
    loading: bool,
    error: Option<String>,
    locator: G,
    provider: P,
    geo_timeout: Duration,
}

impl<G: Geolocator, P: WeatherProvider> WeatherStore<G, P> {
    /// Creates an idle store with the default geolocation timeout.
    pub fn new(locator: G, provider: P) -> Self {
        Self::with_geo_timeout(locator, provider, DEFAULT_GEO_TIMEOUT)
    }

    /// Creates an idle store with a custom geolocation timeout.
    pub const fn with_geo_timeout(locator: G, provider: P, geo_timeout: Duration) -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            locator,
            provider,
            geo_timeout,
        }
    }

    /// The latest snapshot, possibly stale after a failed fetch.
    #[must_use]
    pub const fn data(&self) -> Option<&WeatherSnapshot> {
        self.data.as_ref()
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// The last rejection's message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetches the current weather: one position acquisition (bounded
    /// by the configured timeout) followed by one provider request.
    ///
    /// On success the snapshot is replaced wholesale. On rejection the
    /// error message is recorded and the previous snapshot is left in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError`] describing the failed phase.
    pub async fn fetch(&mut self) -> Result<(), WeatherError> {
        self.loading = true;
        self.error = None;

        let outcome = self.fetch_inner().await;
        self.loading = false;
        match outcome {
            Ok(snapshot) => {
                self.data = Some(snapshot);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch_inner(&self) -> Result<WeatherSnapshot, WeatherError> {
        let position =
            match tokio::time::timeout(self.geo_timeout, self.locator.current_position()).await {
                Ok(Ok(position)) => position,
                Ok(Err(e)) => return Err(WeatherError::Geolocation(e.to_string())),
                Err(_) => return Err(WeatherError::GeolocationTimeout),
            };

        self.provider
            .fetch(position.latitude, position.longitude)
            .await
    }
}
