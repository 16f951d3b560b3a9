//! Configuration system for the `TaskDeck` client.
//!
//! Supports layered configuration with the following priority (highest
//! first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/taskdeck/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;
use std::time::Duration;

use crate::weather::provider::DEFAULT_ENDPOINT;
use crate::weather::{OpenWeatherProvider, StaticLocator};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    storage: StorageFileConfig,
    weather: WeatherFileConfig,
}

/// `[storage]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct StorageFileConfig {
    dir: Option<PathBuf>,
}

/// `[weather]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct WeatherFileConfig {
    api_key: Option<String>,
    units: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    geolocation_timeout_secs: Option<u64>,
    endpoint: Option<String>,
}

// ---------------------------------------------------------------------------
// Resolved configuration (concrete types, all fields populated)
// ---------------------------------------------------------------------------

/// Fully resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // -- Storage --
    /// Directory the file-backed storage adapter writes into.
    pub storage_dir: PathBuf,

    // -- Weather --
    /// OpenWeatherMap API key.
    pub weather_api_key: Option<String>,
    /// Measurement units passed to the provider.
    pub weather_units: String,
    /// Static latitude used by the geolocator.
    pub latitude: Option<f64>,
    /// Static longitude used by the geolocator.
    pub longitude: Option<f64>,
    /// Bounded wait for position acquisition.
    pub geolocation_timeout: Duration,
    /// Weather endpoint (overridable for tests and proxies).
    pub weather_endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let storage_dir = dirs::data_dir()
            .map_or_else(|| PathBuf::from(".taskdeck"), |d| d.join("taskdeck"));
        Self {
            storage_dir,
            weather_api_key: None,
            weather_units: "metric".to_string(),
            latitude: None,
            longitude: None,
            geolocation_timeout: Duration::from_secs(10),
            weather_endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML
    /// file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicit config file cannot be
    /// read, or if the file cannot be parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &file))
    }

    /// Resolve a `ClientConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default. Separated from `load()` to
    /// enable unit testing without CLI parsing.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            storage_dir: cli
                .storage_dir
                .clone()
                .or_else(|| file.storage.dir.clone())
                .unwrap_or(defaults.storage_dir),
            weather_api_key: cli
                .api_key
                .clone()
                .or_else(|| file.weather.api_key.clone()),
            weather_units: file
                .weather
                .units
                .clone()
                .unwrap_or(defaults.weather_units),
            latitude: cli.latitude.or(file.weather.latitude),
            longitude: cli.longitude.or(file.weather.longitude),
            geolocation_timeout: file
                .weather
                .geolocation_timeout_secs
                .map_or(defaults.geolocation_timeout, Duration::from_secs),
            weather_endpoint: file
                .weather
                .endpoint
                .clone()
                .unwrap_or(defaults.weather_endpoint),
        }
    }

    /// Build the weather collaborators from this configuration, if all
    /// required fields are present.
    ///
    /// Returns `None` if the API key or coordinates are missing
    /// (weather readout disabled).
    #[must_use]
    pub fn to_weather_setup(&self) -> Option<(StaticLocator, OpenWeatherProvider)> {
        let api_key = self.weather_api_key.clone()?;
        let latitude = self.latitude?;
        let longitude = self.longitude?;

        Some((
            StaticLocator::new(latitude, longitude),
            OpenWeatherProvider::with_endpoint(
                self.weather_endpoint.clone(),
                api_key,
                self.weather_units.clone(),
            ),
        ))
    }
}

/// CLI arguments parsed by clap, shared by every subcommand.
#[derive(clap::Parser, Debug, Default)]
pub struct CliArgs {
    /// Path to config file (default: `~/.config/taskdeck/config.toml`).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for persisted state.
    #[arg(long, global = true, env = "TASKDECK_DATA_DIR")]
    pub storage_dir: Option<PathBuf>,

    /// OpenWeatherMap API key.
    #[arg(long, global = true, env = "OPENWEATHER_API_KEY")]
    pub api_key: Option<String>,

    /// Static latitude for the weather readout.
    #[arg(long, global = true, env = "TASKDECK_LAT")]
    pub latitude: Option<f64>,

    /// Static longitude for the weather readout.
    #[arg(long, global = true, env = "TASKDECK_LON")]
    pub longitude: Option<f64>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn", env = "TASKDECK_LOG")]
    pub log_level: String,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and a
/// missing file is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            // No config dir available — use defaults.
            return Ok(ConfigFile::default());
        };
        config_dir.join("taskdeck").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
