//! Run command implementation.
//!
//! The `fxboot run` command resolves missing components and launches the
//! application.

use std::io::Write;

use crate::boot::Orchestrator;
use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::launch::JavaLauncher;
use crate::locator::PlatformLocator;
use crate::platform::{is_ci, HostOs};
use crate::runtime::{JvmRuntime, Runtime};
use crate::state::PathStore;
use crate::ui::create_dialog;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    store: PathStore,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(store: PathStore, args: RunArgs) -> Self {
        Self { store, args }
    }

    /// Whether the user can be prompted.
    pub fn is_interactive(&self) -> bool {
        !self.args.non_interactive && !is_ci() && console::user_attended_stderr()
    }

    fn launcher(&self) -> JavaLauncher {
        let launcher = JavaLauncher::new(&self.args.main_class, self.args.app_args.clone());
        match &self.args.java {
            Some(java) => launcher.with_java(java),
            None => launcher,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, _out: &mut dyn Write) -> Result<CommandResult> {
        let mut runtime = JvmRuntime::from_env();
        for entry in &self.args.classpath {
            runtime.add_class_path(entry);
        }

        let mut orchestrator = Orchestrator::new(
            Box::new(runtime),
            Box::new(PlatformLocator::for_host()),
            create_dialog(self.is_interactive()),
            Box::new(self.launcher()),
            self.store.clone(),
            HostOs::current(),
        );

        let outcome = orchestrator.run()?;
        Ok(CommandResult::from_exit_code(outcome.exit_code()))
    }
}
