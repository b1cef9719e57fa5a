//! Attach-support discovery.
//!
//! The runtime's reported home usually points one level inside the JDK
//! (`.../jdk1.7.0_80/jre`), so the primary candidate is `../lib/tools.jar`.
//! On bundle layouts the JDKs that aren't running can still provide the
//! artifact, so their roots are scanned for a bundle matching our version.

use std::path::PathBuf;

use crate::runtime::RuntimeInfo;

use super::strategy::{name_matches_version, OsStrategy, VersionBucket};

/// Locate the attach-support artifact. Never fails; `None` means "ask the user".
pub fn locate_attach_support(info: &RuntimeInfo, strategy: &OsStrategy) -> Option<PathBuf> {
    let Some(home) = info.home.as_ref() else {
        tracing::info!("Runtime home is unknown; cannot derive attach support");
        return None;
    };
    if !home.to_string_lossy().contains("jdk") {
        tracing::info!("No JDK found at {}", home.display());
        return None;
    }
    tracing::debug!("JDK found at: {}", home.display());

    let primary = home
        .parent()
        .map(|jdk| jdk.join("lib").join("tools.jar"))
        .into_iter()
        .chain(std::iter::once(home.join("lib").join("tools.jar")));
    for candidate in primary {
        if candidate.is_file() {
            return Some(candidate);
        }
        tracing::debug!("No tools.jar at {}", candidate.display());
    }

    if strategy.candidate_roots().is_empty() {
        tracing::info!("Cannot find tools.jar on system");
        return None;
    }
    scan_bundles(info, strategy)
}

/// Scan bundle roots for a JDK matching the running version.
pub fn scan_bundles(info: &RuntimeInfo, strategy: &OsStrategy) -> Option<PathBuf> {
    let Some(marker) = info.version_marker() else {
        tracing::debug!("Unrecognized runtime version {:?}", info.version);
        return None;
    };
    let bucket = VersionBucket::for_marker(marker);

    for root in strategy.candidate_roots() {
        tracing::debug!("Testing bundles in {}", root.root.display());
        let bundles = root.matching_dirs();
        for bundle in &bundles {
            tracing::debug!("Valid JDK bundle: {}", bundle.display());
        }

        let found = bundles
            .iter()
            .filter(|b| {
                b.file_name()
                    .is_some_and(|n| name_matches_version(&n.to_string_lossy(), marker))
            })
            .map(|b| root.artifact_in(b, bucket))
            .find(|artifact| artifact.is_file());

        if let Some(artifact) = found {
            tracing::debug!("Attach support found in bundle: {}", artifact.display());
            return Some(artifact);
        }
    }
    None
}
