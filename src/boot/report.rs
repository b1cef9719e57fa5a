//! Read-only view of what a bootstrap would find.

use std::path::PathBuf;

use serde::Serialize;

use crate::capability::{probe, CapabilityKind, Provenance, ResolvedPath};
use crate::locator::Locate;
use crate::runtime::{Runtime, RuntimeInfo};
use crate::state::PathStore;

/// Per-capability findings.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityStatus {
    pub capability: CapabilityKind,
    /// Resolvable without any help.
    pub available: bool,
    /// Path remembered in the settings file.
    pub cached: Option<String>,
    /// Whether the remembered path still exists.
    pub cached_valid: bool,
    /// Path automatic discovery would use.
    pub located: Option<PathBuf>,
}

impl CapabilityStatus {
    /// Whether `run` could proceed without asking.
    pub fn is_resolvable(&self) -> bool {
        self.available || self.cached_valid || self.located.is_some()
    }
}

/// Findings for all capabilities.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub runtime: RuntimeInfo,
    pub settings_file: PathBuf,
    pub capabilities: Vec<CapabilityStatus>,
}

impl StatusReport {
    pub fn needs_user_input(&self) -> bool {
        !self.capabilities.iter().all(CapabilityStatus::is_resolvable)
    }
}

/// Probe, read the store and run discovery without injecting, prompting or
/// writing anything.
pub fn inspect(runtime: &dyn Runtime, locator: &dyn Locate, store: &PathStore) -> StatusReport {
    let config = store.load();

    let capabilities = CapabilityKind::ALL
        .into_iter()
        .map(|kind| {
            let cached = config.get(kind.store_key()).map(str::to_string);
            let cached_valid = cached
                .as_deref()
                .and_then(|p| ResolvedPath::verified(p, Provenance::FromCache))
                .is_some();
            CapabilityStatus {
                capability: kind,
                available: probe(runtime, kind),
                cached,
                cached_valid,
                located: locator.locate(kind, runtime.info()),
            }
        })
        .collect();

    StatusReport {
        runtime: runtime.info().clone(),
        settings_file: store.file().to_path_buf(),
        capabilities,
    }
}
