//! Error types for fxboot operations.
//!
//! This module defines [`BootError`], the primary error type used throughout
//! the bootstrapper, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Discovery failures (`MarkerNotFound`, `NativeLoadFailed`)
//!   are caught where they happen and turned into "try the next strategy"
//! - `PersistFailed` is logged and never blocks a launch
//! - `Cancelled` is the only failure that ends a bootstrap early
//! - Use `anyhow::Error` (via `BootError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fxboot operations.
#[derive(Debug, Error)]
pub enum BootError {
    /// A capability's marker could not be resolved by the runtime.
    #[error("Marker '{marker}' is not available")]
    MarkerNotFound { marker: String },

    /// The settings file could not be written.
    #[error("Failed to persist settings to {path}: {message}")]
    PersistFailed { path: PathBuf, message: String },

    /// A native library could not be loaded, even after retrying.
    #[error("Failed to load native library '{library}': {message}")]
    NativeLoadFailed { library: String, message: String },

    /// The user dismissed the path dialog.
    #[error("Bootstrap cancelled by user")]
    Cancelled,

    /// The downstream application could not be started.
    #[error("Failed to launch application: {message}")]
    LaunchFailed { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for fxboot operations.
pub type Result<T> = std::result::Result<T, BootError>;

/// Generic exception sink: log the failure with its source chain and continue.
pub fn report_failure(context: &str, err: &(dyn std::error::Error + 'static)) {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    tracing::error!("{}: {}", context, chain);
}
