//! Interactive path collection.
//!
//! This module provides:
//! - [`PathDialog`] trait for the collaborator that asks the user for paths
//! - [`TerminalDialog`] for interactive terminal usage
//! - [`NonInteractiveDialog`] for CI/headless environments
//! - [`MockDialog`] for tests
//!
//! The dialog answers through a single-shot [`Responder`]. The orchestrator
//! blocks on the matching [`PendingResponse`] instead of nesting callbacks.
//!
//! # Example
//!
//! ```
//! use fxboot::ui::{response_channel, DialogOutcome};
//!
//! let (responder, pending) = response_channel();
//! std::thread::spawn(move || responder.cancel());
//! assert_eq!(pending.wait(), DialogOutcome::Cancelled);
//! ```

pub mod mock;
pub mod non_interactive;
pub mod prompts;
pub mod terminal;

use std::path::PathBuf;
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

pub use mock::{MockDialog, MockDialogHandle};
pub use non_interactive::NonInteractiveDialog;
pub use terminal::TerminalDialog;

/// Trait for the collaborator that collects paths from the user.
pub trait PathDialog: Send {
    /// One-time setup. Called before the first [`PathDialog::show`].
    fn init(&mut self);

    /// Present the dialog. The user's answer goes through `responder`,
    /// possibly from another thread, exactly once.
    fn show(&mut self, request: DialogRequest, responder: Responder);

    /// Dismiss the dialog after the answer was received.
    fn hide(&mut self);
}

/// Best-effort known paths presented as defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogRequest {
    pub attach_path: Option<PathBuf>,
    pub jfx_path: Option<PathBuf>,
    /// Whether the caller blocks until the dialog is answered.
    pub modal: bool,
}

/// Paths the user supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPaths {
    pub attach: PathBuf,
    pub jfx: PathBuf,
}

/// The user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Submitted(UserPaths),
    Cancelled,
}

/// Sending half of the single-shot answer channel.
///
/// Consumed by [`Responder::submit`] or [`Responder::cancel`], so a dialog
/// can answer at most once. Dropping it unanswered counts as cancel.
#[derive(Debug)]
pub struct Responder {
    tx: SyncSender<DialogOutcome>,
}

impl Responder {
    pub fn submit(self, paths: UserPaths) {
        self.tx.send(DialogOutcome::Submitted(paths)).ok();
    }

    pub fn cancel(self) {
        self.tx.send(DialogOutcome::Cancelled).ok();
    }
}

/// Receiving half of the single-shot answer channel.
#[derive(Debug)]
pub struct PendingResponse {
    rx: Receiver<DialogOutcome>,
}

impl PendingResponse {
    /// Block until the dialog answers.
    pub fn wait(self) -> DialogOutcome {
        self.rx.recv().unwrap_or_else(|_| {
            tracing::debug!("Dialog dropped its responder without answering");
            DialogOutcome::Cancelled
        })
    }
}

/// Create a connected [`Responder`] / [`PendingResponse`] pair.
pub fn response_channel() -> (Responder, PendingResponse) {
    let (tx, rx) = sync_channel(1);
    (Responder { tx }, PendingResponse { rx })
}

/// Pick the dialog for the current environment.
pub fn create_dialog(interactive: bool) -> Box<dyn PathDialog> {
    if interactive {
        Box::new(TerminalDialog::new())
    } else {
        Box::new(NonInteractiveDialog::new())
    }
}
