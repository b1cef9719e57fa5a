//! Making resolved paths visible to the runtime.
//!
//! Class-path injection is a plain idempotent append. Native libraries are
//! harder: runtimes read their library path once and cache it, so after
//! extending the path the [`Injector`] has to invalidate that cache before
//! retrying the load.

use std::path::{Path, PathBuf};

use crate::error::report_failure;
use crate::locator::OsStrategy;
use crate::runtime::Runtime;

/// Outcome of activating a native dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeLoad {
    /// Loaded from the existing library path.
    Loaded(PathBuf),
    /// Loaded after extending the library path.
    Retried(PathBuf),
    /// Still missing after the retry; the feature is unavailable this run.
    Unavailable,
}

/// Applies resolved paths to a [`Runtime`].
#[derive(Debug, Clone)]
pub struct Injector {
    native_subdirs: Vec<PathBuf>,
}

impl Injector {
    /// Injector using the strategy's native library layout.
    pub fn new(strategy: &OsStrategy) -> Self {
        Self {
            native_subdirs: strategy.native_subdirs.clone(),
        }
    }

    /// Append `path` to the runtime's class search path.
    ///
    /// Adding a path that is already present has no effect.
    pub fn add_to_search_path(&self, runtime: &mut dyn Runtime, path: &Path) {
        if runtime.add_class_path(path) {
            tracing::debug!("Adding to classpath: {}", path.display());
        } else {
            tracing::debug!("Already on classpath: {}", path.display());
        }
    }

    /// Put `path` on the class search path in place of `previous`.
    ///
    /// Lookups stop at the first entry holding a class, so an earlier artifact
    /// for the same capability would shadow `path` if it stayed.
    pub fn replace_in_search_path(
        &self,
        runtime: &mut dyn Runtime,
        previous: Option<&Path>,
        path: &Path,
    ) {
        if let Some(previous) = previous.filter(|p| *p != path) {
            if runtime.remove_class_path(previous) {
                tracing::debug!("Removed from classpath: {}", previous.display());
            }
        }
        self.add_to_search_path(runtime, path);
    }

    /// Library directories to try under a JDK install root, in order.
    pub fn native_dirs(&self, install_root: &Path) -> Vec<PathBuf> {
        self.native_subdirs
            .iter()
            .map(|sub| install_root.join(sub))
            .collect()
    }

    /// Load a native library, retrying once with `install_root`'s library
    /// directories prepended to the runtime's library path.
    pub fn load_native_dependency(
        &self,
        runtime: &mut dyn Runtime,
        name: &str,
        install_root: &Path,
    ) -> NativeLoad {
        match runtime.load_library(name) {
            Ok(path) => {
                tracing::debug!("Loaded native library {} from {}", name, path.display());
                return NativeLoad::Loaded(path);
            }
            Err(e) => tracing::debug!("First load of {} failed: {}", name, e),
        }

        let mut augmented = self.native_dirs(install_root);
        for existing in runtime.library_path() {
            if !augmented.contains(existing) {
                augmented.push(existing.clone());
            }
        }
        tracing::debug!("Retrying {} with library path {:?}", name, augmented);
        runtime.set_library_path(augmented);
        runtime.invalidate_search_path_cache();

        match runtime.load_library(name) {
            Ok(path) => {
                tracing::debug!("Loaded native library {} from {}", name, path.display());
                NativeLoad::Retried(path)
            }
            Err(e) => {
                report_failure(&format!("Error while trying to put {} in path", name), &e);
                NativeLoad::Unavailable
            }
        }
    }
}
