//! `TaskDeck` — single-user task-tracking client library.
//!
//! The core is a set of mutually independent state stores (tasks, auth,
//! weather) composed by [`app::App`], plus the pure derived-view
//! pipeline in [`view`]. External dependencies — durable storage, the
//! credential backend, geolocation, and the weather provider — are
//! consumed through narrow collaborator traits.

pub mod app;
pub mod auth;
pub mod config;
pub mod storage;
pub mod tasks;
pub mod view;
pub mod weather;
