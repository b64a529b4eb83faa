//! # Lexical CI
//!
//! This is the binary entry point for the `lexical-ci` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Translating failures into the process exit status: a failing build or
//!   test command's own exit code is propagated unchanged.
//!
//! The orchestration logic lives in the `lexical_ci` library crate; the
//! binary is a thin wrapper around it.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<lexical_ci::error::Error>()
                .map_or(1, lexical_ci::error::Error::exit_code);
            ExitCode::from(code)
        }
    }
}
