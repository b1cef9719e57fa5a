//! Persisted state.
//!
//! The bootstrapper remembers the last path each capability resolved to, so
//! later runs can skip discovery entirely.

pub mod config;
pub mod store;

pub use config::PersistentConfig;
pub use store::{PathStore, SETTINGS_ENV};
