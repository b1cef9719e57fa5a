//! fxboot - Pre-launch bootstrapper for JavaFX tooling.
//!
//! fxboot makes sure two optional components are usable before an
//! application starts: JDK attach support (`tools.jar` plus the native
//! `attach` library) and the JavaFX runtime (`jfxrt.jar`). Each one is
//! probed, then taken from the remembered settings, found on disk, or asked
//! for, and the application is launched once with the result.
//!
//! # Modules
//!
//! - [`boot`] - The bootstrap state machine and the read-only status report
//! - [`capability`] - Capability kinds, markers, probing and resolution state
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`inject`] - Class path and native library injection
//! - [`launch`] - Starting the downstream application
//! - [`locator`] - Filesystem discovery of component artifacts
//! - [`platform`] - Host OS detection
//! - [`runtime`] - The runtime the application is launched into
//! - [`state`] - Remembered component paths
//! - [`ui`] - Asking the user for paths
//!
//! # Example
//!
//! ```
//! use fxboot::capability::{probe, CapabilityKind};
//! use fxboot::platform::HostOs;
//! use fxboot::runtime::{JvmRuntime, RuntimeInfo};
//!
//! // A modular runtime that ships the attach module but not JavaFX
//! let info = RuntimeInfo {
//!     modules: vec!["java.base".into(), "jdk.attach".into()],
//!     ..Default::default()
//! };
//! let runtime = JvmRuntime::new(info, HostOs::Linux);
//!
//! assert!(probe(&runtime, CapabilityKind::AttachSupport));
//! assert!(!probe(&runtime, CapabilityKind::UiRuntime));
//! ```

pub mod boot;
pub mod capability;
pub mod cli;
pub mod error;
pub mod inject;
pub mod launch;
pub mod locator;
pub mod platform;
pub mod runtime;
pub mod state;
pub mod ui;

pub use error::{BootError, Result};
