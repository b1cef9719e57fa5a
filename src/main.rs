//! fxboot CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use console::style;
use fxboot::cli::{Cli, CommandDispatcher};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout belongs to the launched application.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("fxboot=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fxboot=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Map a command exit code to the process exit status.
///
/// `ExitCode` only carries `0..=255`. Windows exit codes can be wider, so
/// those leave through `process::exit` instead.
fn exit_with(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => std::process::exit(code),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("fxboot starting with args: {:?}", cli);

    let dispatcher = CommandDispatcher::from_cli(&cli);
    let mut stdout = std::io::stdout();

    match dispatcher.dispatch(&cli, &mut stdout) {
        Ok(result) => exit_with(result.exit_code),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::from(1)
        }
    }
}
