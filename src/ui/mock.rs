//! Mock dialog implementation for testing.
//!
//! `MockDialog` implements the `PathDialog` trait, answers with a scripted
//! outcome from a separate thread (as a real UI would), and records every
//! interaction for later assertion through a [`MockDialogHandle`].
//!
//! # Example
//!
//! ```
//! use fxboot::ui::{response_channel, DialogOutcome, DialogRequest, MockDialog, PathDialog};
//!
//! let mut dialog = MockDialog::cancelling();
//! let handle = dialog.handle();
//!
//! let (responder, pending) = response_channel();
//! dialog.init();
//! dialog.show(DialogRequest::default(), responder);
//! assert_eq!(pending.wait(), DialogOutcome::Cancelled);
//!
//! assert_eq!(handle.init_count(), 1);
//! assert_eq!(handle.requests().len(), 1);
//! ```

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use super::{DialogRequest, PathDialog, Responder, UserPaths};

/// What the mock answers with.
#[derive(Debug, Clone)]
enum Script {
    Submit(UserPaths),
    Cancel,
    /// Drop the responder without answering.
    Abandon,
}

#[derive(Debug, Default)]
struct Log {
    init_count: usize,
    hide_count: usize,
    requests: Vec<DialogRequest>,
}

/// Read access to what a [`MockDialog`] saw, usable after the dialog moved.
#[derive(Debug, Clone, Default)]
pub struct MockDialogHandle {
    log: Arc<Mutex<Log>>,
}

impl MockDialogHandle {
    pub fn init_count(&self) -> usize {
        self.log.lock().map(|l| l.init_count).unwrap_or_default()
    }

    pub fn hide_count(&self) -> usize {
        self.log.lock().map(|l| l.hide_count).unwrap_or_default()
    }

    /// Every request passed to `show`, in order.
    pub fn requests(&self) -> Vec<DialogRequest> {
        self.log
            .lock()
            .map(|l| l.requests.clone())
            .unwrap_or_default()
    }

    /// Whether the dialog was ever shown.
    pub fn was_shown(&self) -> bool {
        !self.requests().is_empty()
    }
}

/// Mock dialog for testing.
#[derive(Debug)]
pub struct MockDialog {
    script: Script,
    handle: MockDialogHandle,
    worker: Option<JoinHandle<()>>,
}

impl MockDialog {
    fn scripted(script: Script) -> Self {
        Self {
            script,
            handle: MockDialogHandle::default(),
            worker: None,
        }
    }

    /// Answer every `show` with these paths.
    pub fn submitting(paths: UserPaths) -> Self {
        Self::scripted(Script::Submit(paths))
    }

    /// Answer every `show` with a cancellation.
    pub fn cancelling() -> Self {
        Self::scripted(Script::Cancel)
    }

    /// Never answer; the responder is dropped.
    pub fn abandoning() -> Self {
        Self::scripted(Script::Abandon)
    }

    pub fn handle(&self) -> MockDialogHandle {
        self.handle.clone()
    }
}

impl PathDialog for MockDialog {
    fn init(&mut self) {
        if let Ok(mut log) = self.handle.log.lock() {
            log.init_count += 1;
        }
    }

    fn show(&mut self, request: DialogRequest, responder: Responder) {
        if let Ok(mut log) = self.handle.log.lock() {
            log.requests.push(request);
        }

        let script = self.script.clone();
        self.worker = Some(std::thread::spawn(move || match script {
            Script::Submit(paths) => responder.submit(paths),
            Script::Cancel => responder.cancel(),
            Script::Abandon => drop(responder),
        }));
    }

    fn hide(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.join().ok();
        }
        if let Ok(mut log) = self.handle.log.lock() {
            log.hide_count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{response_channel, DialogOutcome};
    use std::path::PathBuf;

    #[test]
    fn submitting_mock_answers_with_paths() {
        let paths = UserPaths {
            attach: PathBuf::from("/a/tools.jar"),
            jfx: PathBuf::from("/b/jfxrt.jar"),
        };
        let mut dialog = MockDialog::submitting(paths.clone());
        let (responder, pending) = response_channel();
        dialog.show(DialogRequest::default(), responder);
        assert_eq!(pending.wait(), DialogOutcome::Submitted(paths));
    }

    #[test]
    fn abandoning_mock_reads_as_cancel() {
        let mut dialog = MockDialog::abandoning();
        let (responder, pending) = response_channel();
        dialog.show(DialogRequest::default(), responder);
        assert_eq!(pending.wait(), DialogOutcome::Cancelled);
    }

    #[test]
    fn handle_records_requests_and_hides() {
        let mut dialog = MockDialog::cancelling();
        let handle = dialog.handle();
        let request = DialogRequest {
            attach_path: Some(PathBuf::from("/a/tools.jar")),
            jfx_path: None,
            modal: true,
        };

        let (responder, pending) = response_channel();
        dialog.show(request.clone(), responder);
        pending.wait();
        dialog.hide();

        assert_eq!(handle.requests(), vec![request]);
        assert_eq!(handle.hide_count(), 1);
        assert!(handle.was_shown());
    }
}
