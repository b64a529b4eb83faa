//! # Run Command Implementation
//!
//! The `run` subcommand is what CI invokes. It captures the environment
//! signals, then hands control to the orchestrator with a runner that spawns
//! real subprocesses:
//!
//! 1. Deployment-tag gate
//! 2. Core library build (debug, release)
//! 3. Core library tests, per-feature tests and special rounding tests
//! 4. Foreign-binding tests (`ENABLE_FFI_TESTS`)
//! 5. Code-generation tests (`ENABLE_DERIVE_TESTS`)
//!
//! The first failing command ends the run; `main` turns its exit code into
//! the process exit status.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use lexical_ci::output::Style;
use lexical_ci::phases::executor::Toolchain;
use lexical_ci::phases::orchestrator::{self, Outcome, RunSettings};
use lexical_ci::phases::sequencer::SequencerOptions;
use lexical_ci::runner::SystemRunner;
use lexical_ci::signals::Signals;

/// Arguments shared by `run` and `plan`
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Repository root containing lexical-core, lexical-capi and lexical-derive
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Program used as the native build tool
    #[arg(long, value_name = "PROGRAM", default_value = lexical_ci::defaults::NATIVE_TOOL)]
    pub native_tool: String,

    /// Program used as the cross-compiling build tool under CI
    #[arg(long, value_name = "PROGRAM", default_value = lexical_ci::defaults::CROSS_TOOL)]
    pub cross_tool: String,

    /// Also compile the core benchmarks (skipped by default)
    #[arg(long)]
    pub include_benches: bool,
}

impl SettingsArgs {
    pub fn into_settings(self) -> RunSettings {
        RunSettings {
            root: self.root.unwrap_or_else(lexical_ci::defaults::default_root),
            toolchain: Toolchain {
                native: self.native_tool,
                cross: self.cross_tool,
            },
            options: SequencerOptions {
                include_benches: self.include_benches,
            },
        }
    }
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Execute the run command
pub fn execute(args: RunArgs, style: Style) -> Result<()> {
    let start_time = Instant::now();
    let signals = Signals::from_env();
    let settings = args.settings.into_settings();
    let mut runner = SystemRunner::new();

    match orchestrator::execute(&signals, &settings, &mut runner) {
        Ok(Outcome::Skipped { tag }) => {
            println!(
                "{}",
                style.skipped(&format!("Deployment tag {} set, nothing to verify", tag))
            );
            Ok(())
        }
        Ok(Outcome::Completed { .. }) => {
            println!(
                "{}",
                style.success(&format!(
                    "CI matrix passed: {} commands in {:.1}s",
                    runner.completed(),
                    start_time.elapsed().as_secs_f64()
                ))
            );
            Ok(())
        }
        Err(err) => {
            eprintln!(
                "{}",
                style.failure(&format!(
                    "CI matrix failed after {} successful commands",
                    runner.completed()
                ))
            );
            Err(err.into())
        }
    }
}
