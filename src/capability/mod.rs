//! Capabilities the launched application depends on.
//!
//! A [`Capability`] is an optional runtime component (attach support, the UI
//! runtime). Each one carries a [`Marker`] used to probe availability and a
//! [`ResolutionState`] that tracks how far resolution got during this run.
//! Only the resolved path is ever persisted, never the capability itself.

pub mod probe;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub use probe::probe;

/// Settings key for the attach-support artifact.
pub const ATTACH_PATH_KEY: &str = "attachPath";

/// Settings key for the UI-runtime artifact.
pub const JFX_PATH_KEY: &str = "jfxPath";

/// The capabilities fxboot knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityKind {
    /// JDK attach API (`tools.jar` / `classes.jar` plus the native `attach` library).
    AttachSupport,
    /// JavaFX runtime (`jfxrt.jar`).
    UiRuntime,
}

impl CapabilityKind {
    /// All kinds, in resolution order.
    pub const ALL: [CapabilityKind; 2] = [CapabilityKind::AttachSupport, CapabilityKind::UiRuntime];

    /// Stable identifier used in logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            CapabilityKind::AttachSupport => "attach-support",
            CapabilityKind::UiRuntime => "ui-runtime",
        }
    }

    /// Key under which the resolved path is persisted.
    pub fn store_key(self) -> &'static str {
        match self {
            CapabilityKind::AttachSupport => ATTACH_PATH_KEY,
            CapabilityKind::UiRuntime => JFX_PATH_KEY,
        }
    }

    /// Symbol whose presence proves the capability is satisfied.
    pub fn marker(self) -> Marker {
        match self {
            CapabilityKind::AttachSupport => Marker {
                class: "com.sun.tools.attach.AttachNotSupportedException",
                module: Some("jdk.attach"),
            },
            CapabilityKind::UiRuntime => Marker {
                class: "javafx.beans.property.SimpleBooleanProperty",
                module: Some("javafx.base"),
            },
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A class (and optionally a module) that can only be resolved when a
/// capability is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Fully-qualified class name.
    pub class: &'static str,
    /// Module that provides the class on modular runtimes.
    pub module: Option<&'static str>,
}

impl Marker {
    /// Relative path of the class file inside a directory or jar.
    pub fn class_entry(&self) -> String {
        format!("{}.class", self.class.replace('.', "/"))
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class)
    }
}

/// Where a resolved path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    FromCache,
    FromSearch,
    FromUserInput,
}

/// A filesystem path that passed an existence check.
///
/// The only constructor is [`ResolvedPath::verified`], so holding one means
/// the path existed when it was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    path: PathBuf,
    provenance: Provenance,
}

impl ResolvedPath {
    /// Verify that `path` exists and wrap it. Empty paths never verify.
    pub fn verified(path: impl Into<PathBuf>, provenance: Provenance) -> Option<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() || !path.exists() {
            return None;
        }
        Some(Self { path, provenance })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }
}

/// How far resolution of a capability got.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResolutionState {
    #[default]
    Unknown,
    Probed {
        available: bool,
    },
    Located(ResolvedPath),
    Injected(ResolvedPath),
    Failed,
}

/// One capability during one run.
#[derive(Debug, Clone)]
pub struct Capability {
    kind: CapabilityKind,
    state: ResolutionState,
}

impl Capability {
    pub fn new(kind: CapabilityKind) -> Self {
        Self {
            kind,
            state: ResolutionState::Unknown,
        }
    }

    pub fn kind(&self) -> CapabilityKind {
        self.kind
    }

    pub fn state(&self) -> &ResolutionState {
        &self.state
    }

    /// Move to a new state.
    pub fn advance(&mut self, state: ResolutionState) {
        tracing::debug!("{}: {:?} -> {:?}", self.kind, self.state, state);
        self.state = state;
    }

    /// Available without any help from fxboot.
    pub fn is_available(&self) -> bool {
        matches!(self.state, ResolutionState::Probed { available: true })
    }

    /// Available, located, or injected.
    pub fn is_satisfied(&self) -> bool {
        self.is_available() || self.resolved_path().is_some()
    }

    /// The path this capability was resolved to, if any.
    pub fn resolved_path(&self) -> Option<&ResolvedPath> {
        match &self.state {
            ResolutionState::Located(p) | ResolutionState::Injected(p) => Some(p),
            _ => None,
        }
    }
}
