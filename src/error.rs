//! # Error Handling
//!
//! This module defines the centralized error type for `lexical-ci`. It uses
//! `thiserror` to describe the few ways a CI run can fail.
//!
//! Configuration resolution is infallible: every environment signal has a
//! default. What remains are subprocess failures, which end the whole run on
//! the first occurrence:
//!
//! - A command ran and exited unsuccessfully (`CommandFailed`).
//! - A command could not be launched at all (`Launch`).
//!
//! [`Error::exit_code`] maps each variant to the status the `lexical-ci`
//! process itself exits with, so a failing `cargo test` surfaces to the CI
//! provider with its own exit code.

use thiserror::Error;

/// Main error type for lexical-ci operations
#[derive(Error, Debug)]
pub enum Error {
    /// A subprocess ran to completion but reported failure.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error("Command failed ({}): {command}", code.map(|c| format!("exit code {}", c)).unwrap_or_else(|| "terminated by signal".to_string()))]
    CommandFailed { command: String, code: Option<i32> },

    /// A subprocess could not be spawned (missing program, missing working
    /// directory, permissions).
    #[error("Failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The process exit status that reports this error.
    ///
    /// A failed command propagates its own exit code unchanged; everything
    /// else, including codes that do not fit a process status, becomes `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::CommandFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
