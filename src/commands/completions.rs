//! # Completions Command Implementation
//!
//! Writes a shell completion script for `lexical-ci` to stdout, generated by
//! `clap_complete` from the CLI definition.
//!
//! ```bash
//! lexical-ci completions bash > ~/.local/share/bash-completion/completions/lexical-ci
//! lexical-ci completions zsh > ~/.zfunc/_lexical-ci
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
