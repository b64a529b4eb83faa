//! Subproject sequencing.
//!
//! Visits `lexical-core`, `lexical-capi` and `lexical-derive` in that order.
//! The active directory only ever moves forward and is passed explicitly to
//! every invocation; the process's own working directory is never changed.

use std::path::{Path, PathBuf};

use log::debug;

use super::executor::{PhaseExecutor, Toolchain};
use super::{Invocation, Phase, Subproject};
use crate::config::ExecutionConfig;
use crate::defaults;
use crate::error::Result;
use crate::matrix::FeatureMatrix;
use crate::runner::CommandRunner;

/// Knobs that change which phases the sequencer issues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequencerOptions {
    /// Reinstate the benchmark compile pass for the core library. Off unless
    /// explicitly requested.
    pub include_benches: bool,
}

/// The directory the next invocations run in.
#[derive(Debug, Clone)]
pub struct WorkingContext {
    root: PathBuf,
    current: PathBuf,
}

impl WorkingContext {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            current: root.to_path_buf(),
        }
    }

    /// Move into `subproject` and return its directory.
    pub fn enter(&mut self, subproject: Subproject) -> &Path {
        self.current = self.root.join(subproject.dir());
        debug!("Entering {}", self.current.display());
        &self.current
    }
}

/// Run every subproject's phases in order, stopping at the first failure.
pub fn run(
    config: &ExecutionConfig,
    matrix: &FeatureMatrix,
    toolchain: &Toolchain,
    root: &Path,
    options: &SequencerOptions,
    runner: &mut dyn CommandRunner,
) -> Result<()> {
    let mut context = WorkingContext::new(root);

    for subproject in Subproject::ORDER {
        let dir = context.enter(subproject).to_path_buf();
        let executor = PhaseExecutor::new(config, toolchain, &dir);

        for &phase in subproject.phases() {
            match phase {
                Phase::Build => executor.run_build(runner)?,
                Phase::Test => executor.run_test(runner, &matrix.core)?,
                Phase::Bench if options.include_benches => {
                    executor.run_bench(runner, &matrix.core)?
                }
                Phase::FfiTest if config.ffi_tests_enabled => {
                    runner.run(&ffi_invocation(config, &dir))?
                }
                Phase::DeriveTest if config.derive_tests_enabled => {
                    runner.run(&derive_invocation(toolchain, &dir))?
                }
                _ => debug!("Skipping {} in {}", phase, subproject),
            }
        }
    }

    Ok(())
}

/// The scripted foreign-binding harness, run by the resolved interpreter.
fn ffi_invocation(config: &ExecutionConfig, working_dir: &Path) -> Invocation {
    Invocation::new(
        Subproject::Bindings,
        Phase::FfiTest,
        &config.interpreter,
        working_dir,
    )
    .arg(defaults::FFI_TEST_SCRIPT)
}

/// The code-generation tests always use the native tool: they resolve paths
/// relative to the subproject, which a cross container does not mount.
fn derive_invocation(toolchain: &Toolchain, working_dir: &Path) -> Invocation {
    Invocation::new(
        Subproject::Codegen,
        Phase::DeriveTest,
        &toolchain.native,
        working_dir,
    )
    .arg("test")
}
