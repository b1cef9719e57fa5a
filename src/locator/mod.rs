//! Filesystem discovery of capability artifacts.
//!
//! When a capability isn't already available and the cached path is stale,
//! the locator searches well-known install locations:
//!
//! - [`attach`] derives attach support from the runtime's install root and,
//!   on bundle layouts, scans installed JDK bundles for the running version
//! - [`jfx`] walks an ordered, lazily produced list of UI-runtime candidates
//! - [`strategy`] holds the per-OS table both of them read from
//!
//! Discovery never fails: unreadable directories mean "no candidates" and a
//! miss is just `None`.

pub mod attach;
pub mod jfx;
pub mod strategy;

use std::path::PathBuf;

use crate::capability::CapabilityKind;
use crate::runtime::RuntimeInfo;

pub use attach::locate_attach_support;
pub use jfx::{CandidateFinder, JfxrtFinder};
pub use strategy::{ArtifactRule, OsStrategy, SearchRoot, VersionBucket};

/// Finds an artifact for a capability on the local filesystem.
pub trait Locate: Send {
    fn locate(&self, kind: CapabilityKind, info: &RuntimeInfo) -> Option<PathBuf>;
}

/// Locator driven by an [`OsStrategy`].
pub struct PlatformLocator {
    strategy: OsStrategy,
    finder: Box<dyn CandidateFinder>,
}

impl PlatformLocator {
    /// Locator with the default `jfxrt.jar` finder.
    pub fn new(strategy: OsStrategy) -> Self {
        let finder = Box::new(JfxrtFinder::new(strategy.clone()));
        Self { strategy, finder }
    }

    /// Locator for the OS this binary runs on.
    pub fn for_host() -> Self {
        Self::new(OsStrategy::for_host())
    }

    /// Locator with a custom UI-runtime finder.
    pub fn with_finder(strategy: OsStrategy, finder: Box<dyn CandidateFinder>) -> Self {
        Self { strategy, finder }
    }
}

impl Locate for PlatformLocator {
    fn locate(&self, kind: CapabilityKind, info: &RuntimeInfo) -> Option<PathBuf> {
        let found = match kind {
            CapabilityKind::AttachSupport => locate_attach_support(info, &self.strategy),
            CapabilityKind::UiRuntime => self.finder.candidates(info).find(|p| {
                let exists = p.exists();
                tracing::debug!("Checking {}: {}", p.display(), exists);
                exists
            }),
        };

        match &found {
            Some(path) => tracing::debug!("Located {} at {}", kind, path.display()),
            None => tracing::debug!("Could not locate {}", kind),
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HostOs;
    use std::fs;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Finder that records how many candidates were pulled.
    struct CountingFinder {
        candidates: Vec<PathBuf>,
        pulled: Arc<AtomicUsize>,
    }

    impl CandidateFinder for CountingFinder {
        fn candidates<'a>(
            &'a self,
            _info: &'a RuntimeInfo,
        ) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
            let pulled = Arc::clone(&self.pulled);
            Box::new(self.candidates.iter().cloned().inspect(move |_| {
                pulled.fetch_add(1, Ordering::SeqCst);
            }))
        }
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn ui_runtime_returns_first_existing_candidate() {
        let temp = TempDir::new().unwrap();
        let second = temp.path().join("b/jfxrt.jar");
        let third = temp.path().join("c/jfxrt.jar");
        touch(&second);
        touch(&third);

        let pulled = Arc::new(AtomicUsize::new(0));
        let finder = CountingFinder {
            candidates: vec![temp.path().join("a/jfxrt.jar"), second.clone(), third],
            pulled: Arc::clone(&pulled),
        };
        let locator =
            PlatformLocator::with_finder(OsStrategy::for_os(HostOs::Linux), Box::new(finder));

        let found = locator.locate(CapabilityKind::UiRuntime, &RuntimeInfo::default());
        assert_eq!(found, Some(second));
        // The third candidate is never produced.
        assert_eq!(pulled.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn ui_runtime_none_when_nothing_exists() {
        let finder = CountingFinder {
            candidates: vec![PathBuf::from("/nonexistent/jfxrt.jar")],
            pulled: Arc::new(AtomicUsize::new(0)),
        };
        let locator =
            PlatformLocator::with_finder(OsStrategy::for_os(HostOs::Linux), Box::new(finder));
        assert!(locator
            .locate(CapabilityKind::UiRuntime, &RuntimeInfo::default())
            .is_none());
    }

    #[test]
    fn attach_support_uses_runtime_home() {
        let temp = TempDir::new().unwrap();
        let jdk = temp.path().join("jdk1.8.0_202");
        fs::create_dir_all(jdk.join("jre")).unwrap();
        touch(&jdk.join("lib/tools.jar"));

        let locator = PlatformLocator::new(OsStrategy::for_os(HostOs::Linux));
        let info = RuntimeInfo {
            home: Some(jdk.join("jre")),
            version: "1.8.0_202".into(),
            modules: Vec::new(),
        };
        assert_eq!(
            locator.locate(CapabilityKind::AttachSupport, &info),
            Some(jdk.join("lib/tools.jar"))
        );
    }
}
