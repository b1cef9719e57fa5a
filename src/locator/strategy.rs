//! OS strategy table.
//!
//! Every OS-specific decision the locator and injector make comes from an
//! [`OsStrategy`] built from [`STRATEGY_DEFS`]. Supporting a new OS means
//! adding a table entry.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::platform::{jre_arch_dir, HostOs};

/// Coarse version grouping that decides artifact file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBucket {
    /// 1.6 and older: attach classes ship in `classes.jar`.
    Legacy,
    /// 1.7 and newer: attach classes ship in `tools.jar`.
    Modern,
}

impl VersionBucket {
    /// Bucket for a version marker (`1.6` -> Legacy, `1.7`/`11` -> Modern).
    pub fn for_marker(marker: &str) -> Self {
        let minor = marker
            .strip_prefix("1.")
            .and_then(|rest| rest.parse::<u32>().ok());
        match minor {
            Some(m) if m <= 6 => VersionBucket::Legacy,
            _ => VersionBucket::Modern,
        }
    }
}

/// How to find the artifact inside a matched directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactRule {
    Fixed(PathBuf),
    ByBucket { legacy: PathBuf, modern: PathBuf },
}

impl ArtifactRule {
    pub fn resolve(&self, bucket: VersionBucket) -> &Path {
        match (self, bucket) {
            (ArtifactRule::Fixed(p), _) => p,
            (ArtifactRule::ByBucket { legacy, .. }, VersionBucket::Legacy) => legacy,
            (ArtifactRule::ByBucket { modern, .. }, VersionBucket::Modern) => modern,
        }
    }
}

/// A directory whose children are candidate installs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoot {
    pub root: PathBuf,
    /// Child directory names must contain this text.
    pub name_contains: String,
    pub artifact: ArtifactRule,
}

impl SearchRoot {
    /// Child directories whose name matches, sorted by name.
    ///
    /// A root that can't be listed has no candidates.
    pub fn matching_dirs(&self) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Skipping {}: {}", self.root.display(), e);
                return Vec::new();
            }
        };

        let mut dirs: Vec<PathBuf> = entries
            .flatten()
            .filter(|e| {
                e.file_name()
                    .to_string_lossy()
                    .contains(self.name_contains.as_str())
            })
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .collect();
        dirs.sort();
        dirs
    }

    /// Artifact path inside a matched directory.
    pub fn artifact_in(&self, dir: &Path, bucket: VersionBucket) -> PathBuf {
        dir.join(self.artifact.resolve(bucket))
    }
}

/// Whether an install directory name belongs to the given version marker.
///
/// `jdk1.7.0_80.jdk` matches `1.7`; `jdk1.8.0_211.jdk` does not match `11`.
pub fn name_matches_version(name: &str, marker: &str) -> bool {
    let pattern = format!(r"(^|[^0-9.]){}([^0-9]|$)", regex::escape(marker));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(name),
        Err(_) => name.contains(marker),
    }
}

/// Static description of one OS layout.
struct StrategyDef {
    os: HostOs,
    /// Roots holding `.jdk` bundles; empty where JDKs aren't bundled.
    bundle_roots: &'static [&'static str],
    bundle_marker: &'static str,
    legacy_artifact: &'static str,
    modern_artifact: &'static str,
    /// Native library directories under a JDK root. `{arch}` is substituted.
    native_subdirs: &'static [&'static str],
    /// Fixed UI-runtime locations.
    jfx_candidates: &'static [&'static str],
    /// (root, name filter, artifact) for UI-runtime directory scans.
    jfx_roots: &'static [(&'static str, &'static str, &'static str)],
}

const STRATEGY_DEFS: &[StrategyDef] = &[
    StrategyDef {
        os: HostOs::MacOs,
        bundle_roots: &[
            "/Library/Java/JavaVirtualMachines",
            "/System/Library/Java/JavaVirtualMachines",
        ],
        bundle_marker: ".jdk",
        legacy_artifact: "Contents/Classes/classes.jar",
        modern_artifact: "Contents/Home/lib/tools.jar",
        native_subdirs: &["jre/lib", "lib"],
        jfx_candidates: &[
            "/Library/Frameworks/JavaFX.framework/Versions/Current/lib/jfxrt.jar",
        ],
        jfx_roots: &[(
            "/Library/Java/JavaVirtualMachines",
            ".jdk",
            "Contents/Home/jre/lib/ext/jfxrt.jar",
        )],
    },
    StrategyDef {
        os: HostOs::Windows,
        bundle_roots: &[],
        bundle_marker: "",
        legacy_artifact: "lib\\tools.jar",
        modern_artifact: "lib\\tools.jar",
        native_subdirs: &["jre\\bin", "bin"],
        jfx_candidates: &[],
        jfx_roots: &[
            ("C:\\Program Files\\Oracle", "JavaFX", "lib\\jfxrt.jar"),
            ("C:\\Program Files (x86)\\Oracle", "JavaFX", "lib\\jfxrt.jar"),
            ("C:\\Program Files\\Java", "jdk", "jre\\lib\\ext\\jfxrt.jar"),
        ],
    },
    StrategyDef {
        os: HostOs::Linux,
        bundle_roots: &[],
        bundle_marker: "",
        legacy_artifact: "lib/tools.jar",
        modern_artifact: "lib/tools.jar",
        native_subdirs: &["jre/lib/{arch}", "lib/{arch}", "lib"],
        jfx_candidates: &["/usr/share/java/openjfx/jre/lib/ext/jfxrt.jar"],
        jfx_roots: &[
            ("/usr/lib/jvm", "", "jre/lib/ext/jfxrt.jar"),
            ("/opt", "jfx", "lib/jfxrt.jar"),
        ],
    },
    StrategyDef {
        os: HostOs::Other,
        bundle_roots: &[],
        bundle_marker: "",
        legacy_artifact: "lib/tools.jar",
        modern_artifact: "lib/tools.jar",
        native_subdirs: &["jre/lib/{arch}", "lib"],
        jfx_candidates: &[],
        jfx_roots: &[],
    },
];

/// OS-specific search behavior, owned so tests can point it at temp dirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsStrategy {
    pub os: HostOs,
    pub bundle_roots: Vec<SearchRoot>,
    pub native_subdirs: Vec<PathBuf>,
    pub jfx_candidates: Vec<PathBuf>,
    pub jfx_roots: Vec<SearchRoot>,
    bundle_artifact: ArtifactRule,
}

impl OsStrategy {
    /// Strategy for `os` from the static table.
    pub fn for_os(os: HostOs) -> Self {
        let def = STRATEGY_DEFS
            .iter()
            .find(|d| d.os == os)
            .unwrap_or(&STRATEGY_DEFS[STRATEGY_DEFS.len() - 1]);

        let bundle_artifact = ArtifactRule::ByBucket {
            legacy: PathBuf::from(def.legacy_artifact),
            modern: PathBuf::from(def.modern_artifact),
        };

        Self {
            os,
            bundle_roots: def
                .bundle_roots
                .iter()
                .map(|root| SearchRoot {
                    root: PathBuf::from(root),
                    name_contains: def.bundle_marker.to_string(),
                    artifact: bundle_artifact.clone(),
                })
                .collect(),
            native_subdirs: def
                .native_subdirs
                .iter()
                .map(|s| PathBuf::from(s.replace("{arch}", jre_arch_dir())))
                .collect(),
            jfx_candidates: def.jfx_candidates.iter().map(PathBuf::from).collect(),
            jfx_roots: def
                .jfx_roots
                .iter()
                .map(|(root, contains, artifact)| SearchRoot {
                    root: PathBuf::from(root),
                    name_contains: contains.to_string(),
                    artifact: ArtifactRule::Fixed(PathBuf::from(artifact)),
                })
                .collect(),
            bundle_artifact,
        }
    }

    /// Strategy for the OS this binary runs on.
    pub fn for_host() -> Self {
        Self::for_os(HostOs::current())
    }

    /// Roots scanned for JDK bundles when the primary location misses.
    pub fn candidate_roots(&self) -> &[SearchRoot] {
        &self.bundle_roots
    }

    /// Attach-support artifact inside a bundle for a version bucket.
    pub fn artifact_for(&self, bucket: VersionBucket) -> &Path {
        self.bundle_artifact.resolve(bucket)
    }

    /// Replace the bundle roots, keeping this OS's bundle layout.
    pub fn with_bundle_roots(mut self, roots: Vec<PathBuf>, name_contains: &str) -> Self {
        self.bundle_roots = roots
            .into_iter()
            .map(|root| SearchRoot {
                root,
                name_contains: name_contains.to_string(),
                artifact: self.bundle_artifact.clone(),
            })
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bucket_for_legacy_markers() {
        assert_eq!(VersionBucket::for_marker("1.6"), VersionBucket::Legacy);
        assert_eq!(VersionBucket::for_marker("1.5"), VersionBucket::Legacy);
    }

    #[test]
    fn bucket_for_modern_markers() {
        assert_eq!(VersionBucket::for_marker("1.7"), VersionBucket::Modern);
        assert_eq!(VersionBucket::for_marker("1.8"), VersionBucket::Modern);
        assert_eq!(VersionBucket::for_marker("11"), VersionBucket::Modern);
    }

    #[test]
    fn macos_artifacts_depend_on_bucket() {
        let strategy = OsStrategy::for_os(HostOs::MacOs);
        assert_eq!(
            strategy.artifact_for(VersionBucket::Legacy),
            Path::new("Contents/Classes/classes.jar")
        );
        assert_eq!(
            strategy.artifact_for(VersionBucket::Modern),
            Path::new("Contents/Home/lib/tools.jar")
        );
        assert_eq!(strategy.candidate_roots().len(), 2);
    }

    #[test]
    fn only_macos_has_bundle_roots() {
        assert!(OsStrategy::for_os(HostOs::Linux).candidate_roots().is_empty());
        assert!(OsStrategy::for_os(HostOs::Windows).candidate_roots().is_empty());
    }

    #[test]
    fn linux_native_subdirs_substitute_arch() {
        let strategy = OsStrategy::for_os(HostOs::Linux);
        assert!(strategy
            .native_subdirs
            .iter()
            .all(|p| !p.to_string_lossy().contains("{arch}")));
        assert_eq!(strategy.native_subdirs.last(), Some(&PathBuf::from("lib")));
    }

    #[test]
    fn version_names_match_on_boundaries() {
        assert!(name_matches_version("jdk1.7.0_80.jdk", "1.7"));
        assert!(name_matches_version("1.6.0.jdk", "1.6"));
        assert!(name_matches_version("jdk-11.0.2.jdk", "11"));
        assert!(!name_matches_version("jdk1.8.0_211.jdk", "11"));
        assert!(!name_matches_version("jdk-11.7.1.jdk", "1.7"));
        assert!(!name_matches_version("jdk1.6.0_65.jdk", "1.7"));
    }

    #[test]
    fn matching_dirs_filters_by_name() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("jdk1.7.0_80.jdk")).unwrap();
        fs::create_dir_all(temp.path().join("jdk1.6.0_65.jdk")).unwrap();
        fs::create_dir_all(temp.path().join("Temp")).unwrap();
        fs::write(temp.path().join("notes.jdk"), b"").unwrap();

        let root = SearchRoot {
            root: temp.path().to_path_buf(),
            name_contains: ".jdk".into(),
            artifact: ArtifactRule::Fixed(PathBuf::from("lib/tools.jar")),
        };
        assert_eq!(
            root.matching_dirs(),
            vec![
                temp.path().join("jdk1.6.0_65.jdk"),
                temp.path().join("jdk1.7.0_80.jdk"),
            ]
        );
    }

    #[test]
    fn unlistable_root_has_no_candidates() {
        let root = SearchRoot {
            root: PathBuf::from("/nonexistent/JavaVirtualMachines"),
            name_contains: ".jdk".into(),
            artifact: ArtifactRule::Fixed(PathBuf::from("lib/tools.jar")),
        };
        assert!(root.matching_dirs().is_empty());
    }
}
