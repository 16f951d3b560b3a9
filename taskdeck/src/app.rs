//! Root coordinator: composes the three stores into one state tree.
//!
//! Composition only — all behavior lives in the member stores. The one
//! piece of policy here is [`App::restore`]: stores are constructed
//! empty/anonymous and the persisted state is loaded by an explicit
//! call from the process entry point, never implicitly at construction.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{AuthStore, CredentialDirectory};
use crate::storage::StorageAdapter;
use crate::tasks::TaskStore;
use crate::weather::{Geolocator, WeatherProvider, WeatherStore};

/// The application state tree.
pub struct App<S, D, G, P>
where
    S: StorageAdapter,
    D: CredentialDirectory,
    G: Geolocator,
    P: WeatherProvider,
{
    /// Session state.
    pub auth: AuthStore<D, S>,
    /// The task collection.
    pub tasks: TaskStore<S>,
    /// The weather snapshot.
    pub weather: WeatherStore<G, P>,
}

impl<S, D, G, P> App<S, D, G, P>
where
    S: StorageAdapter,
    D: CredentialDirectory,
    G: Geolocator,
    P: WeatherProvider,
{
    /// Wires the stores to their collaborators. The task and auth
    /// stores share the storage adapter.
    pub fn new(storage: Arc<S>, directory: D, locator: G, provider: P) -> Self {
        Self {
            auth: AuthStore::new(directory, Arc::clone(&storage)),
            tasks: TaskStore::new(storage),
            weather: WeatherStore::new(locator, provider),
        }
    }

    /// As [`new`](Self::new), with a custom geolocation timeout.
    pub fn with_geo_timeout(
        storage: Arc<S>,
        directory: D,
        locator: G,
        provider: P,
        geo_timeout: Duration,
    ) -> Self {
        Self {
            auth: AuthStore::new(directory, Arc::clone(&storage)),
            tasks: TaskStore::new(storage),
            weather: WeatherStore::with_geo_timeout(locator, provider, geo_timeout),
        }
    }

    /// Loads persisted state: the task collection and, if present, the
    /// saved session. Called once at process start. The weather store
    /// is not persisted and starts idle.
    pub fn restore(&mut self) {
        self.tasks.restore();
        self.auth.check_auth();
    }
}
