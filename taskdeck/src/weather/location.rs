//! Geolocation collaborator.

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Latitude, positive north.
    pub latitude: f64,
    /// Longitude, positive east.
    pub longitude: f64,
}

/// Errors from the geolocation collaborator.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// The user or platform denied the position request.
    #[error("position request denied")]
    Denied,

    /// No position could be determined.
    #[error("position unavailable: {0}")]
    Unavailable(String),
}

/// Single-shot position acquisition.
///
/// The weather store bounds each call with its configured timeout;
/// implementations do not need their own.
pub trait Geolocator: Send + Sync {
    /// Acquires the current position.
    fn current_position(
        &self,
    ) -> impl std::future::Future<Output = Result<GeoPosition, GeoError>> + Send;
}

/// Geolocator that always reports a fixed position from configuration.
///
/// A headless client has no platform location service to ask, so the
/// coordinates come from the `[weather]` config section.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocator {
    position: GeoPosition,
}

impl StaticLocator {
    /// Creates a locator pinned to the given coordinates.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            position: GeoPosition {
                latitude,
                longitude,
            },
        }
    }
}

impl Geolocator for StaticLocator {
    async fn current_position(&self) -> Result<GeoPosition, GeoError> {
        Ok(self.position)
    }
}
