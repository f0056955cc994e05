//! Tessera CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};
use tessera::cli::commands::subcommand_help;
use tessera::cli::{self, Cli, BUILTIN_RUNNERS};
use tessera::error::EXIT_SUCCESS;
use tessera::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("tessera=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tessera=info"))
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

/// Parse arguments, with the registered subcommands listed in `--help`.
fn parse_cli() -> Cli {
    let matches = Cli::command()
        .after_help(subcommand_help(BUILTIN_RUNNERS))
        .get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_tracing(cli.debug);

    tracing::debug!("Tessera starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mut ui = create_ui(cli.output_mode());

    match cli::run(&cli, ui.as_mut()) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS as u8),
        Err(e) => {
            ui.error(&format!("{:#}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
