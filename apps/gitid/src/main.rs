use std::process::ExitCode;

use clap::Parser;

use gitid_lib::cli::Cli;

fn main() -> ExitCode {
    gitid_lib::run(Cli::parse())
}
