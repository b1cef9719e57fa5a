//! JVM launch runtime.
//!
//! [`JvmRuntime`] models the JVM the application will run in: its class path,
//! its `java.library.path`, and the system properties it will be started
//! with. Native library resolution reads the library path once and caches
//! the resulting directory list, the same way the JVM does; changing the
//! library path afterwards has no effect until the cache is invalidated.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::capability::Marker;
use crate::error::{BootError, Result};
use crate::platform::HostOs;

use super::classpath::{entry_contains, extension_jars};
use super::{LaunchContext, Runtime, RuntimeInfo};

/// Launch runtime backed by a JDK installation.
#[derive(Debug, Clone)]
pub struct JvmRuntime {
    info: RuntimeInfo,
    host: HostOs,
    class_path: Vec<PathBuf>,
    library_path: Vec<PathBuf>,
    /// Directories resolved from `library_path` on first load.
    library_dirs: Option<Vec<PathBuf>>,
    loaded: Vec<PathBuf>,
    properties: BTreeMap<String, String>,
}

impl JvmRuntime {
    /// Create a runtime with empty search paths.
    pub fn new(info: RuntimeInfo, host: HostOs) -> Self {
        Self {
            info,
            host,
            class_path: Vec::new(),
            library_path: Vec::new(),
            library_dirs: None,
            loaded: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Create a runtime seeded from `JAVA_HOME`, `CLASSPATH` and the OS
    /// library path variable.
    pub fn from_env() -> Self {
        let host = HostOs::current();
        let mut runtime = Self::new(RuntimeInfo::detect(), host);

        if let Some(cp) = std::env::var_os("CLASSPATH") {
            for entry in std::env::split_paths(&cp) {
                if !entry.as_os_str().is_empty() {
                    runtime.add_class_path(&entry);
                }
            }
        }
        if let Some(lp) = std::env::var_os(host.library_path_var()) {
            runtime.library_path = std::env::split_paths(&lp)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
        }

        tracing::debug!(
            "Runtime seeded with {} class path and {} library path entries",
            runtime.class_path.len(),
            runtime.library_path.len()
        );
        runtime
    }

    /// Entries searched when resolving a marker class.
    fn lookup_entries(&self) -> Vec<PathBuf> {
        let mut entries = self.class_path.clone();
        if let Some(home) = &self.info.home {
            entries.extend(extension_jars(home));
        }
        entries
    }
}

impl Runtime for JvmRuntime {
    fn info(&self) -> &RuntimeInfo {
        &self.info
    }

    fn resolve_marker(&self, marker: &Marker) -> Result<()> {
        if let Some(module) = marker.module {
            if self.info.has_module(module) {
                tracing::debug!("{} provided by module {}", marker, module);
                return Ok(());
            }
        }

        let class_entry = marker.class_entry();
        for entry in self.lookup_entries() {
            if entry_contains(&entry, &class_entry)? {
                tracing::debug!("{} found in {}", marker, entry.display());
                return Ok(());
            }
        }

        Err(BootError::MarkerNotFound {
            marker: marker.class.to_string(),
        })
    }

    fn class_path(&self) -> &[PathBuf] {
        &self.class_path
    }

    fn add_class_path(&mut self, path: &Path) -> bool {
        if self.class_path.iter().any(|p| p == path) {
            return false;
        }
        self.class_path.push(path.to_path_buf());
        true
    }

    fn remove_class_path(&mut self, path: &Path) -> bool {
        let before = self.class_path.len();
        self.class_path.retain(|p| p != path);
        self.class_path.len() != before
    }

    fn library_path(&self) -> &[PathBuf] {
        &self.library_path
    }

    fn set_library_path(&mut self, paths: Vec<PathBuf>) {
        self.library_path = paths;
    }

    fn invalidate_search_path_cache(&mut self) {
        self.library_dirs = None;
    }

    fn load_library(&mut self, name: &str) -> Result<PathBuf> {
        let file_name = self.host.library_filename(name);
        let library_path = &self.library_path;
        let dirs = self.library_dirs.get_or_insert_with(|| {
            library_path
                .iter()
                .filter(|p| p.is_dir())
                .cloned()
                .collect()
        });

        let Some(found) = dirs.iter().map(|d| d.join(&file_name)).find(|p| p.is_file()) else {
            return Err(BootError::NativeLoadFailed {
                library: name.to_string(),
                message: format!("{} not found in {} directories", file_name, dirs.len()),
            });
        };

        if !self.loaded.contains(&found) {
            self.loaded.push(found.clone());
        }
        Ok(found)
    }

    fn set_property(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
    }

    fn launch_context(&self) -> LaunchContext {
        LaunchContext {
            java_home: self.info.home.clone(),
            class_path: self.class_path.clone(),
            library_path: self.library_path.clone(),
            loaded_libraries: self.loaded.clone(),
            properties: self.properties.clone(),
        }
    }
}
