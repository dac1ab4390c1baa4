//! jwt-crack: an offline auditor for weak HS256 JWT signing secrets.
//!
//! Entry point for the application. Parses CLI arguments and delegates
//! to the appropriate command handler.
//!
//! Exit codes: 0 when a secret matched (or `info` succeeded), 1 when no
//! secret matched or the scan was cancelled, 2 on any error.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod display;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// Exit code for failures that are not a plain "no match".
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Dispatch to the appropriate command handler.
///
/// Returns `ExitCode` so the caller can exit without `process::exit`,
/// allowing all destructors (including `Zeroizing`) to run.
fn run(cli: &Cli) -> Result<ExitCode> {
    let matched = match &cli.command {
        Commands::Info(args) => {
            commands::info::execute(args)?;
            true
        }
        Commands::Guess(args) => commands::guess::execute(args)?,
        Commands::Wordlist(args) => commands::wordlist::execute(args, cli.verbose)?,
    };

    Ok(if matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Log to stderr, honouring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "warn,jwt_crack=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
