//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `lexical-ci` command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `lexical_ci` library.
//!
//! Commands that take a `--format` flag share [`OutputFormat`].

use clap::ValueEnum;

pub mod completions;
pub mod matrix;
pub mod plan;
pub mod run;

/// Rendering of `plan` and `matrix` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// Pretty-printed JSON
    Json,
}
