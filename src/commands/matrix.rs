//! # Matrix Command Implementation
//!
//! The `matrix` subcommand prints the `ExecutionConfig` resolved from the
//! current environment together with the feature combinations the core
//! library would be tested under. The deployment gate is not consulted.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use lexical_ci::config::ExecutionConfig;
use lexical_ci::matrix::FeatureMatrix;
use lexical_ci::signals::Signals;

use super::OutputFormat;

/// Arguments for the matrix command
#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// JSON form of the resolved configuration.
#[derive(Serialize)]
struct MatrixReport<'a> {
    config: &'a ExecutionConfig,
    matrix: &'a FeatureMatrix,
}

/// Execute the matrix command
pub fn execute(args: MatrixArgs) -> Result<()> {
    let config = ExecutionConfig::resolve(&Signals::from_env());
    let matrix = FeatureMatrix::build(&config);

    match args.format {
        OutputFormat::Json => {
            let report = MatrixReport {
                config: &config,
                matrix: &matrix,
            };
            let rendered = serde_json::to_string_pretty(&report)
                .context("Failed to render matrix as JSON")?;
            println!("{}", rendered);
        }
        OutputFormat::Text => {
            println!("CI:                {}", config.is_ci);
            println!(
                "Build tool:        {:?}{}",
                config.build_tool,
                config
                    .target_triple
                    .as_deref()
                    .map(|t| format!(" ({})", t))
                    .unwrap_or_default()
            );
            println!("Interpreter:       {}", config.interpreter);
            println!("Freestanding:      {}", config.freestanding);
            println!("Doc tests:         {}", !config.doc_tests_disabled);
            println!("Required features: {}", config.required_features);
            println!("Tests:             {}", !config.tests_disabled);
            println!("Benches:           {}", !config.benches_disabled);
            println!("FFI tests:         {}", config.ffi_tests_enabled);
            println!("Derive tests:      {}", config.derive_tests_enabled);
            println!();
            println!("Core feature matrix ({} entries):", matrix.core.len());
            for entry in &matrix.core {
                println!("  {}", entry);
            }
        }
    }

    Ok(())
}
