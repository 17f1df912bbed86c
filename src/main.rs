//! getignore CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use getignore::cli::{Cli, CommandDispatcher};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only the templates.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("getignore=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("getignore=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("getignore starting with args: {:?}", cli);

    let dispatcher = CommandDispatcher::new();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let result = dispatcher.dispatch(&cli, &mut out, &mut err);
    ExitCode::from(result.exit_code)
}
