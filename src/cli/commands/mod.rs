//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`fxboot run`, `fxboot status`)
//! - One settings location shared by every command

pub mod completions;
pub mod dispatcher;
pub mod reset;
pub mod run;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
