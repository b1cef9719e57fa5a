//! Reset command implementation.
//!
//! The `fxboot reset` command forgets remembered component paths so the next
//! run searches (and, if needed, asks) again.

use std::io::Write;

use crate::capability::CapabilityKind;
use crate::error::Result;
use crate::state::PathStore;

use super::dispatcher::{Command, CommandResult};

/// The reset command implementation.
pub struct ResetCommand {
    store: PathStore,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(store: PathStore) -> Self {
        Self { store }
    }
}

impl Command for ResetCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let mut config = self.store.load();

        let removed = CapabilityKind::ALL
            .into_iter()
            .filter(|kind| config.remove(kind.store_key()).is_some())
            .count();

        if removed == 0 {
            writeln!(out, "No remembered paths in {}", self.store.file().display())?;
            return Ok(CommandResult::success());
        }

        self.store.save(&config)?;
        writeln!(
            out,
            "Forgot {} remembered path(s) in {}",
            removed,
            self.store.file().display()
        )?;
        Ok(CommandResult::success())
    }
}
