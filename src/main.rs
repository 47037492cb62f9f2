//! Waygraph - weighted graph search from the command line
//!
//! Loads a JSON graph file, runs traversals, frontier queries and
//! shortest-path searches over it, and steps along the resulting routes.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use waygraph_core::error::{ExitCode as WaygraphExitCode, GraphError};
use waygraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is global, but clap may fail before `Cli.format` is
            // available. Honor a JSON request with a structured envelope.
            if argv_format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => GraphError::invalid_value("arguments", err.to_string().trim()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let config = commands::dispatch::load_config(&cli);

    let (log_level, log_json) = match &config {
        Ok(config) => (
            cli.log_level.clone().or_else(|| config.logging.level.clone()),
            cli.log_json || config.logging.json,
        ),
        Err(_) => (cli.log_level.clone(), cli.log_json),
    };
    if let Err(e) = logging::init_tracing(cli.verbose, log_level.as_deref(), log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = config.and_then(|config| commands::dispatch::run(&cli, config, start));

    match result {
        Ok(()) => ExitCode::from(WaygraphExitCode::Success as u8),
        Err(e) => report(&cli, &e),
    }
}

fn report(cli: &Cli, error: &GraphError) -> ExitCode {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
