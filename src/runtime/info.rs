//! Reported installation details of the launch runtime.
//!
//! Mirrors what a JVM reports as `java.home` and `java.version`: for a JDK 8
//! install `java.home` is the embedded `jre` directory, for modular JDKs it is
//! the JDK root. Version and module list come from the `release` file every
//! JDK ships at its root.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Installation root, version and module list of a runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeInfo {
    /// Reported installation root (`java.home`).
    pub home: Option<PathBuf>,
    /// Reported version string (`1.7.0_80`, `11.0.2`).
    pub version: String,
    /// Modules listed in the `release` file.
    pub modules: Vec<String>,
}

// --- Compiled regexes (one-time via LazyLock) ---

static RE_RELEASE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*([A-Z_]+)\s*=\s*"?([^"]*)"?\s*$"#).unwrap());

static RE_VERSION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(1\.\d+|\d+)").unwrap());

impl RuntimeInfo {
    /// Detect from `JAVA_HOME`. Returns an empty info when it is unset.
    pub fn detect() -> Self {
        match std::env::var_os("JAVA_HOME") {
            Some(home) if !home.is_empty() => Self::from_java_home(Path::new(&home)),
            _ => {
                tracing::debug!("JAVA_HOME is not set; runtime root unknown");
                Self::default()
            }
        }
    }

    /// Build from an install directory.
    pub fn from_java_home(java_home: &Path) -> Self {
        let jre = java_home.join("jre");
        let home = if jre.is_dir() {
            jre
        } else {
            java_home.to_path_buf()
        };

        let mut info = Self {
            home: Some(home.clone()),
            ..Self::default()
        };

        let candidates = [Some(java_home.to_path_buf()), home.parent().map(Path::to_path_buf)];
        for dir in candidates.into_iter().flatten() {
            if let Ok(content) = fs::read_to_string(dir.join("release")) {
                info.apply_release(&content);
                break;
            }
        }

        tracing::debug!(
            "Runtime home: {}, version: {:?}",
            home.display(),
            info.version
        );
        info
    }

    /// Apply the `KEY="value"` lines of a JDK `release` file.
    pub fn apply_release(&mut self, content: &str) {
        for line in content.lines() {
            let Some(caps) = RE_RELEASE_LINE.captures(line) else {
                continue;
            };
            match &caps[1] {
                "JAVA_VERSION" => self.version = caps[2].to_string(),
                "MODULES" => {
                    self.modules = caps[2].split_whitespace().map(String::from).collect();
                }
                _ => {}
            }
        }
    }

    /// Whether the runtime ships `module`.
    pub fn has_module(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m == module)
    }

    /// Short version marker that appears in install directory names:
    /// `1.7.0_80` -> `1.7`, `11.0.2` -> `11`.
    pub fn version_marker(&self) -> Option<&str> {
        RE_VERSION_MARKER
            .find(self.version.trim())
            .map(|m| m.as_str())
    }
}
