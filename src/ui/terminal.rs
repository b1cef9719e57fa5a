//! Interactive terminal dialog.

use std::io::Write;
use std::thread::JoinHandle;

use console::{style, Term};

use super::prompts::prompt_path;
use super::{DialogRequest, PathDialog, Responder, UserPaths};

/// Asks for the two paths on the terminal, on a dedicated UI thread.
#[derive(Debug, Default)]
pub struct TerminalDialog {
    initialized: bool,
    worker: Option<JoinHandle<()>>,
}

impl TerminalDialog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn ask(request: &DialogRequest, term: &Term) -> crate::error::Result<Option<UserPaths>> {
    let Some(attach) = prompt_path(
        "Path to tools.jar (empty to cancel)",
        request.attach_path.as_deref(),
        term,
    )?
    else {
        return Ok(None);
    };
    let Some(jfx) = prompt_path(
        "Path to jfxrt.jar (empty to cancel)",
        request.jfx_path.as_deref(),
        term,
    )?
    else {
        return Ok(None);
    };
    Ok(Some(UserPaths { attach, jfx }))
}

impl PathDialog for TerminalDialog {
    fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        tracing::debug!("Terminal dialog initialized");
    }

    fn show(&mut self, request: DialogRequest, responder: Responder) {
        if !self.initialized {
            self.init();
        }

        self.worker = Some(std::thread::spawn(move || {
            let mut term = Term::stderr();
            writeln!(
                term,
                "{}",
                style("Some required components could not be found automatically.").bold()
            )
            .ok();
            writeln!(
                term,
                "Point to the JDK attach library and the JavaFX runtime to continue."
            )
            .ok();

            match ask(&request, &term) {
                Ok(Some(paths)) => responder.submit(paths),
                Ok(None) => responder.cancel(),
                Err(e) => {
                    tracing::debug!("Path prompt failed: {}", e);
                    responder.cancel();
                }
            }
        }));
    }

    fn hide(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("Dialog thread panicked");
            }
        }
    }
}
