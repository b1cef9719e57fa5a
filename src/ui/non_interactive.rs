//! Non-interactive dialog for CI/headless environments.

use std::path::PathBuf;

use super::{DialogRequest, PathDialog, Responder, UserPaths};

/// Environment variable supplying the attach-support path.
pub const ATTACH_PATH_ENV: &str = "FXBOOT_ATTACH_PATH";

/// Environment variable supplying the UI-runtime path.
pub const JFX_PATH_ENV: &str = "FXBOOT_JFX_PATH";

/// Dialog that answers from environment overrides without prompting.
///
/// An override missing from the environment falls back to the request's
/// best-effort default. If a side still has no path the dialog cancels,
/// since nobody is there to ask.
#[derive(Debug, Clone, Default)]
pub struct NonInteractiveDialog {
    attach: Option<PathBuf>,
    jfx: Option<PathBuf>,
}

impl NonInteractiveDialog {
    /// Read `FXBOOT_ATTACH_PATH` and `FXBOOT_JFX_PATH`.
    pub fn new() -> Self {
        let read = |key: &str| {
            std::env::var_os(key)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self::with_overrides(read(ATTACH_PATH_ENV), read(JFX_PATH_ENV))
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(attach: Option<PathBuf>, jfx: Option<PathBuf>) -> Self {
        Self { attach, jfx }
    }
}

impl PathDialog for NonInteractiveDialog {
    fn init(&mut self) {}

    fn show(&mut self, request: DialogRequest, responder: Responder) {
        let attach = self.attach.clone().or(request.attach_path);
        let jfx = self.jfx.clone().or(request.jfx_path);

        match (attach, jfx) {
            (Some(attach), Some(jfx)) => {
                tracing::info!(
                    "Using {} and {} without prompting",
                    attach.display(),
                    jfx.display()
                );
                responder.submit(UserPaths { attach, jfx });
            }
            _ => {
                tracing::warn!(
                    "Required components are missing and no one can be prompted; set {} and {}",
                    ATTACH_PATH_ENV,
                    JFX_PATH_ENV
                );
                responder.cancel();
            }
        }
    }

    fn hide(&mut self) {}
}
