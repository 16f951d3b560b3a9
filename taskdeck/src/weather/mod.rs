//! Local weather readout: single-slot snapshot with an async fetch
//! lifecycle.
//!
//! The snapshot is best-effort and ephemeral — never persisted, always
//! re-fetched. Position acquisition and the weather request are
//! consumed through the [`Geolocator`] and [`WeatherProvider`]
//! collaborator traits.

pub mod location;
pub mod provider;
pub mod store;

pub use location::{GeoError, GeoPosition, Geolocator, StaticLocator};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use store::WeatherStore;

/// Errors surfaced by the weather fetch operation.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum WeatherError {
    /// The geolocation collaborator failed.
    #[error("geolocation failed: {0}")]
    Geolocation(String),

    /// Position acquisition did not complete within the bounded wait.
    #[error("geolocation timed out")]
    GeolocationTimeout,

    /// The provider answered with a non-success status.
    #[error("Weather data not available")]
    Unavailable,

    /// The weather request failed before a response arrived.
    #[error("weather request failed: {0}")]
    Request(String),
}
