//! The runtime that will host the launched application.
//!
//! Probing, injection and native-library activation all go through the
//! [`Runtime`] trait. Keeping the search-path cache behind
//! [`Runtime::invalidate_search_path_cache`] means a different target runtime
//! can swap in its own cache handling without touching orchestration.

pub mod classpath;
pub mod info;
pub mod jvm;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::capability::Marker;
use crate::error::Result;

pub use info::RuntimeInfo;
pub use jvm::JvmRuntime;

/// Abstraction over the runtime's symbol and library resolution.
pub trait Runtime: Send {
    /// Installation root, version and modules the runtime reports.
    fn info(&self) -> &RuntimeInfo;

    /// Resolve a marker. `Ok(())` means the capability is usable as-is.
    ///
    /// Lookups may open archives on disk; the probe treats any error as
    /// "not available".
    fn resolve_marker(&self, marker: &Marker) -> Result<()>;

    /// Current class search path.
    fn class_path(&self) -> &[PathBuf];

    /// Append an entry to the class search path.
    ///
    /// Returns `false` if the entry was already present.
    fn add_class_path(&mut self, path: &Path) -> bool;

    /// Remove an entry from the class search path.
    ///
    /// Returns `false` if the entry was not present.
    fn remove_class_path(&mut self, path: &Path) -> bool;

    /// Configured native library search path.
    fn library_path(&self) -> &[PathBuf];

    /// Replace the native library search path.
    ///
    /// Runtimes may cache the resolved search path; callers that need the new
    /// value honored must also call [`Runtime::invalidate_search_path_cache`].
    fn set_library_path(&mut self, paths: Vec<PathBuf>);

    /// Drop any cached copy of the native search path so the next load re-reads it.
    fn invalidate_search_path_cache(&mut self);

    /// Load a native library by its short name (`attach`).
    fn load_library(&mut self, name: &str) -> Result<PathBuf>;

    /// Set a system property for the launched application.
    fn set_property(&mut self, key: &str, value: &str);

    /// Snapshot of everything the launcher needs.
    fn launch_context(&self) -> LaunchContext;
}

/// What the downstream application is started with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaunchContext {
    pub java_home: Option<PathBuf>,
    pub class_path: Vec<PathBuf>,
    pub library_path: Vec<PathBuf>,
    pub loaded_libraries: Vec<PathBuf>,
    pub properties: BTreeMap<String, String>,
}
