//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::{Env, WriteStyle};

use crate::commands;
use lexical_ci::output::Style;

/// Lexical CI - Run the lexical feature-matrix test suite
#[derive(Parser, Debug)]
#[command(name = "lexical-ci")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the CI matrix for the current environment
    Run(commands::run::RunArgs),

    /// Print the invocations `run` would issue, without running them
    Plan(commands::plan::PlanArgs),

    /// Print the resolved configuration and feature matrix
    Matrix(commands::matrix::MatrixArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let style = Style::from_flag(&self.color);
        init_logging(&self.log_level, style);

        match self.command {
            Commands::Run(args) => commands::run::execute(args, style),
            Commands::Plan(args) => commands::plan::execute(args, style),
            Commands::Matrix(args) => commands::matrix::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Initialise `env_logger`; `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str, style: Style) {
    let write_style = if style.use_color {
        WriteStyle::Always
    } else {
        WriteStyle::Never
    };
    // A logger may already be installed when embedded; keep it.
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .write_style(write_style)
        .format_timestamp(None)
        .try_init();
}
