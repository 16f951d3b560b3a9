//! Normalized weather snapshot.

use serde::{Deserialize, Serialize};

/// A single point-in-time weather readout for the user's location.
///
/// Single-slot value: replaced wholesale on every successful fetch and
/// never persisted. Condition codes follow the provider's numbering
/// (OpenWeatherMap: 2xx thunderstorm, 5xx rain, 8xx clouds, 800 clear).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Resolved location name.
    pub location: String,
    /// Current temperature in the configured units (default °C).
    pub temperature: f64,
    /// Perceived temperature.
    pub feels_like: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Provider-defined condition code.
    pub condition_code: u16,
    /// Human-readable condition description.
    pub description: String,
}
