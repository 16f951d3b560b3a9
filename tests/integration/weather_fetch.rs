//! Integration tests for the weather fetch lifecycle.
//!
//! Drives the weather store with stub collaborators to cover the
//! success path, both rejection phases (geolocation, provider), the
//! bounded geolocation wait, and stale-snapshot retention.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use taskdeck::weather::{
    GeoError, GeoPosition, Geolocator, StaticLocator, WeatherError, WeatherProvider, WeatherStore,
};
use taskdeck_model::WeatherSnapshot;

fn snapshot(location: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        location: location.to_string(),
        temperature: 21.0,
        feels_like: 20.2,
        humidity: 60,
        condition_code: 800,
        description: "clear sky".to_string(),
    }
}

/// Provider that counts calls and answers from a fixed script.
struct ScriptedProvider {
    results: Vec<Result<WeatherSnapshot, WeatherError>>,
    calls: Arc<AtomicU32>,
}

impl ScriptedProvider {
    fn new(results: Vec<Result<WeatherSnapshot, WeatherError>>) -> Self {
        Self {
            results,
            calls: Arc::new(AtomicU32::new(0)),
        }
    }
}

impl WeatherProvider for ScriptedProvider {
    async fn fetch(&self, _lat: f64, _lon: f64) -> Result<WeatherSnapshot, WeatherError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) as usize;
        self.results
            .get(call)
            .cloned()
            .unwrap_or(Err(WeatherError::Unavailable))
    }
}

struct DeniedLocator;

impl Geolocator for DeniedLocator {
    async fn current_position(&self) -> Result<GeoPosition, GeoError> {
        Err(GeoError::Denied)
    }
}

struct NeverLocator;

impl Geolocator for NeverLocator {
    async fn current_position(&self) -> Result<GeoPosition, GeoError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn fetch_success_fills_the_slot() {
    let provider = ScriptedProvider::new(vec![Ok(snapshot("Lisbon"))]);
    let mut store = WeatherStore::new(StaticLocator::new(38.72, -9.14), provider);

    store.fetch().await.unwrap();
    assert_eq!(store.data().map(|s| s.location.as_str()), Some("Lisbon"));
    assert!(store.error().is_none());
    assert!(!store.loading());
}

#[tokio::test]
async fn each_fetch_replaces_the_snapshot_wholesale() {
    let provider = ScriptedProvider::new(vec![Ok(snapshot("Lisbon")), Ok(snapshot("Porto"))]);
    let mut store = WeatherStore::new(StaticLocator::new(0.0, 0.0), provider);

    store.fetch().await.unwrap();
    store.fetch().await.unwrap();
    assert_eq!(store.data().map(|s| s.location.as_str()), Some("Porto"));
}

#[tokio::test]
async fn provider_rejection_keeps_the_stale_snapshot() {
    let provider =
        ScriptedProvider::new(vec![Ok(snapshot("Lisbon")), Err(WeatherError::Unavailable)]);
    let mut store = WeatherStore::new(StaticLocator::new(0.0, 0.0), provider);

    store.fetch().await.unwrap();
    let err = store.fetch().await.unwrap_err();
    assert_eq!(err, WeatherError::Unavailable);
    assert_eq!(store.error(), Some("Weather data not available"));
    // Previous readout still on display.
    assert_eq!(store.data().map(|s| s.location.as_str()), Some("Lisbon"));
}

#[tokio::test]
async fn geolocation_denial_never_reaches_the_provider() {
    let provider = ScriptedProvider::new(vec![Ok(snapshot("Lisbon"))]);
    let calls = Arc::clone(&provider.calls);
    let mut store = WeatherStore::new(DeniedLocator, provider);

    let err = store.fetch().await.unwrap_err();
    assert!(matches!(err, WeatherError::Geolocation(_)));
    assert!(store.data().is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn geolocation_wait_is_bounded() {
    let provider = ScriptedProvider::new(vec![Ok(snapshot("Lisbon"))]);
    let mut store =
        WeatherStore::with_geo_timeout(NeverLocator, provider, Duration::from_secs(10));

    // Paused time auto-advances past the timeout instead of hanging.
    let err = store.fetch().await.unwrap_err();
    assert_eq!(err, WeatherError::GeolocationTimeout);
}

#[tokio::test]
async fn recovery_after_failure_clears_the_error() {
    let provider =
        ScriptedProvider::new(vec![Err(WeatherError::Unavailable), Ok(snapshot("Lisbon"))]);
    let mut store = WeatherStore::new(StaticLocator::new(0.0, 0.0), provider);

    assert!(store.fetch().await.is_err());
    assert!(store.error().is_some());

    store.fetch().await.unwrap();
    assert!(store.error().is_none());
    assert!(store.data().is_some());
}
