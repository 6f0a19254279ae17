//! gitid - reconcile git identities with the GPG keyring and SSH hosts
//!
//! This is the library entry point behind the `gitid` binary.

pub mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod git;
pub mod gpg;
pub mod logging;
pub mod models;
pub mod output;
pub mod reconcile;
pub mod ssh;
pub mod utils;

use std::process::ExitCode;

use cli::{Cli, Commands};
use error::Result;
use reconcile::Severity;

/// Exit code when an entry reported an error
pub const EXIT_ERROR_ENTRY: u8 = 1;
/// Exit code when the run aborted
pub const EXIT_FATAL: u8 = 2;

pub fn run(cli: Cli) -> ExitCode {
    logging::init(cli.verbose);
    output::set_color(!cli.no_color);
    tracing::debug!(?cli, "Starting gitid");

    match dispatch(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::debug!(error = ?err, "Run aborted");
            output::print_error(&err.to_string());
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn dispatch(cli: &Cli) -> Result<u8> {
    match &cli.command {
        Commands::Check(args) => {
            let severity = commands::check::run(args)?;
            Ok(exit_code_for(severity))
        }
        Commands::Write(args) => {
            commands::write::run(args)?;
            Ok(0)
        }
    }
}

/// Only an error entry fails the run; warnings still exit cleanly
pub fn exit_code_for(severity: Severity) -> u8 {
    match severity {
        Severity::Error => EXIT_ERROR_ENTRY,
        _ => 0,
    }
}
