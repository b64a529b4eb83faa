//! # Plan Command Implementation
//!
//! The `plan` subcommand resolves the same configuration `run` would and
//! prints every invocation in order, without executing anything. It is the
//! quickest way to check what a given set of CI variables will do.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use lexical_ci::output::Style;
use lexical_ci::phases::orchestrator::{self, Outcome};
use lexical_ci::phases::Invocation;
use lexical_ci::runner::PlanRecorder;
use lexical_ci::signals::Signals;

use super::run::SettingsArgs;
use super::OutputFormat;

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// JSON form of a plan.
#[derive(Serialize)]
struct PlanReport<'a> {
    outcome: &'a Outcome,
    invocations: &'a [Invocation],
}

/// Execute the plan command
pub fn execute(args: PlanArgs, style: Style) -> Result<()> {
    let signals = Signals::from_env();
    let settings = args.settings.into_settings();
    let mut recorder = PlanRecorder::new();

    let outcome = orchestrator::execute(&signals, &settings, &mut recorder)?;

    match args.format {
        OutputFormat::Json => {
            let report = PlanReport {
                outcome: &outcome,
                invocations: recorder.invocations(),
            };
            let rendered =
                serde_json::to_string_pretty(&report).context("Failed to render plan as JSON")?;
            println!("{}", rendered);
        }
        OutputFormat::Text => match outcome {
            Outcome::Skipped { tag } => {
                println!(
                    "{}",
                    style.skipped(&format!("Deployment tag {} set, nothing to run", tag))
                );
            }
            Outcome::Completed { .. } => {
                println!(
                    "{}",
                    style.heading(&format!("{} invocations", recorder.invocations().len()))
                );
                for (index, invocation) in recorder.invocations().iter().enumerate() {
                    println!("{:>3}. [{}] {}", index + 1, invocation.phase, invocation);
                }
            }
        },
    }

    Ok(())
}
