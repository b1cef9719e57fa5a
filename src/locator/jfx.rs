//! UI-runtime candidate discovery.
//!
//! Candidates are produced lazily: cheap fixed locations first, directory
//! scans last, and a scan only runs if everything before it missed.

use std::path::PathBuf;

use crate::runtime::RuntimeInfo;

use super::strategy::{OsStrategy, VersionBucket};

/// Explicit UI-runtime artifact override.
pub const JFX_RUNTIME_ENV: &str = "FXBOOT_JFX_RUNTIME";

/// Pluggable source of candidate UI-runtime artifacts, in preference order.
pub trait CandidateFinder: Send + Sync {
    fn candidates<'a>(&'a self, info: &'a RuntimeInfo) -> Box<dyn Iterator<Item = PathBuf> + 'a>;
}

/// Default finder for `jfxrt.jar`.
#[derive(Debug, Clone)]
pub struct JfxrtFinder {
    strategy: OsStrategy,
    overrides: Vec<PathBuf>,
}

impl JfxrtFinder {
    /// Finder using `FXBOOT_JFX_RUNTIME` and `JAVAFX_HOME` as overrides.
    pub fn new(strategy: OsStrategy) -> Self {
        let mut overrides = Vec::new();
        if let Some(path) = std::env::var_os(JFX_RUNTIME_ENV).filter(|p| !p.is_empty()) {
            overrides.push(PathBuf::from(path));
        }
        if let Some(home) = std::env::var_os("JAVAFX_HOME").filter(|p| !p.is_empty()) {
            let home = PathBuf::from(home);
            overrides.push(home.join("lib").join("jfxrt.jar"));
            overrides.push(home.join("rt").join("lib").join("jfxrt.jar"));
        }
        Self::with_overrides(strategy, overrides)
    }

    /// Finder with explicit overrides and no environment lookups.
    pub fn with_overrides(strategy: OsStrategy, overrides: Vec<PathBuf>) -> Self {
        Self {
            strategy,
            overrides,
        }
    }

    fn home_candidates(info: &RuntimeInfo) -> Vec<PathBuf> {
        let Some(home) = &info.home else {
            return Vec::new();
        };
        let mut candidates = vec![
            home.join("lib").join("jfxrt.jar"),
            home.join("lib").join("ext").join("jfxrt.jar"),
        ];
        if let Some(parent) = home.parent() {
            let jre_lib = parent.join("jre").join("lib");
            candidates.push(jre_lib.join("jfxrt.jar"));
            candidates.push(jre_lib.join("ext").join("jfxrt.jar"));
        }
        candidates
    }
}

impl CandidateFinder for JfxrtFinder {
    fn candidates<'a>(&'a self, info: &'a RuntimeInfo) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        let scans = self.strategy.jfx_roots.iter().flat_map(|root| {
            root.matching_dirs()
                .into_iter()
                .map(move |dir| root.artifact_in(&dir, VersionBucket::Modern))
        });

        Box::new(
            self.overrides
                .iter()
                .cloned()
                .chain(Self::home_candidates(info))
                .chain(self.strategy.jfx_candidates.iter().cloned())
                .chain(scans),
        )
    }
}
