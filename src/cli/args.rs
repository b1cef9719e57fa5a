//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::state::SETTINGS_ENV;

/// fxboot - Resolve JDK attach support and the JavaFX runtime, then launch.
#[derive(Debug, Parser)]
#[command(name = "fxboot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file remembering resolved paths
    #[arg(long, global = true, env = SETTINGS_ENV, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Log every resolution decision
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve missing components and launch the application
    Run(RunArgs),

    /// Show what a run would find, without changing anything
    Status(StatusArgs),

    /// Forget remembered component paths
    Reset,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Main class of the application
    pub main_class: String,

    /// Arguments passed through to the application
    #[arg(last = true, value_name = "ARGS")]
    pub app_args: Vec<String>,

    /// Java executable (defaults to the one under JAVA_HOME)
    #[arg(long, value_name = "PATH")]
    pub java: Option<PathBuf>,

    /// Additional class path entries for the application
    #[arg(short = 'c', long = "classpath", value_name = "PATH")]
    pub classpath: Vec<PathBuf>,

    /// Never prompt; take paths from FXBOOT_ATTACH_PATH and FXBOOT_JFX_PATH
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
