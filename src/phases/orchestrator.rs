//! Orchestrator for a complete CI run
//!
//! This module wires the components together in their fixed order:
//! 1. Deployment-tag gate
//! 2. Configuration resolution
//! 3. Feature matrix expansion
//! 4. Subproject sequencing

use std::path::PathBuf;

use serde::Serialize;

use super::executor::Toolchain;
use super::sequencer::{self, SequencerOptions};
use crate::config::ExecutionConfig;
use crate::error::Result;
use crate::gate;
use crate::matrix::FeatureMatrix;
use crate::runner::CommandRunner;
use crate::signals::Signals;

/// Settings that come from the command line rather than the environment.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Repository root containing the subproject directories.
    pub root: PathBuf,
    pub toolchain: Toolchain,
    pub options: SequencerOptions,
}

impl RunSettings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            toolchain: Toolchain::default(),
            options: SequencerOptions::default(),
        }
    }
}

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    /// The deployment gate skipped the run.
    Skipped { tag: String },
    /// Every phase ran and succeeded.
    Completed {
        config: ExecutionConfig,
        matrix: FeatureMatrix,
    },
}

/// Execute a complete run against `runner`.
///
/// The gate is evaluated before the configuration is resolved; a tagged
/// build issues no invocations at all.
pub fn execute(
    signals: &Signals,
    settings: &RunSettings,
    runner: &mut dyn CommandRunner,
) -> Result<Outcome> {
    if let Some(tag) = gate::deployment_tag(signals) {
        return Ok(Outcome::Skipped {
            tag: tag.to_string(),
        });
    }

    let config = ExecutionConfig::resolve(signals);
    let matrix = FeatureMatrix::build(&config);

    sequencer::run(
        &config,
        &matrix,
        &settings.toolchain,
        &settings.root,
        &settings.options,
        runner,
    )?;

    Ok(Outcome::Completed { config, matrix })
}
