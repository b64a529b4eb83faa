//! Build, test and benchmark phases for the core library.
//!
//! All three operations share one argument layout:
//!
//! ```text
//! <tool> <subcommand> [--target T] [--no-default-features] [--tests] [--features F] [--release]
//! ```
//!
//! and stop at the first failing invocation.

use std::path::{Path, PathBuf};

use log::debug;

use super::{Invocation, Phase, Subproject};
use crate::config::{BuildTool, ExecutionConfig};
use crate::defaults;
use crate::error::Result;
use crate::matrix::FeatureSet;
use crate::runner::CommandRunner;

/// Program names for the two build-tool families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub native: String,
    pub cross: String,
}

impl Toolchain {
    /// The program matching the resolved build tool.
    pub fn program(&self, build_tool: BuildTool) -> &str {
        match build_tool {
            BuildTool::Native => &self.native,
            BuildTool::Cross => &self.cross,
        }
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            native: defaults::NATIVE_TOOL.to_string(),
            cross: defaults::CROSS_TOOL.to_string(),
        }
    }
}

/// Issues the core-library phases against one working directory.
pub struct PhaseExecutor<'a> {
    config: &'a ExecutionConfig,
    toolchain: &'a Toolchain,
    working_dir: PathBuf,
}

impl<'a> PhaseExecutor<'a> {
    pub fn new(config: &'a ExecutionConfig, toolchain: &'a Toolchain, working_dir: &Path) -> Self {
        Self {
            config,
            toolchain,
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// Build in debug, then release.
    pub fn run_build(&self, runner: &mut dyn CommandRunner) -> Result<()> {
        let debug = self.invocation(Phase::Build, "build", self.config.default_features_disabled);
        runner.run(&self.with_features(debug, &self.config.required_features))?;

        let release = self.invocation(Phase::Build, "build", self.config.default_features_disabled);
        runner.run(&self.with_features(release, &self.config.required_features).release())
    }

    /// Test in debug and release, once per matrix entry, then the special
    /// rounding scenarios on hosted builds.
    pub fn run_test(&self, runner: &mut dyn CommandRunner, features: &[FeatureSet]) -> Result<()> {
        if self.config.tests_disabled {
            debug!("Tests disabled, skipping test phase");
            return Ok(());
        }

        for release in [false, true] {
            let invocation = self.test_invocation(self.config.default_features_disabled);
            let invocation = self.with_features(invocation, &self.config.required_features);
            runner.run(&if release {
                invocation.release()
            } else {
                invocation
            })?;
        }

        for entry in features {
            let invocation = self.test_invocation(true);
            let invocation = self
                .with_features(invocation, &self.config.required_features.chain(entry))
                .with_feature_set(entry.clone());
            runner.run(&invocation)?;
        }

        if !self.config.freestanding {
            let invocation = self.test_invocation(self.config.default_features_disabled);
            let invocation = self
                .with_features(invocation, &self.config.required_features)
                .release()
                .args([
                    "--",
                    "--ignored",
                    "--test-threads=1",
                    defaults::SPECIAL_ROUNDING_FILTER,
                ]);
            runner.run(&invocation)?;
        }

        Ok(())
    }

    /// Compile the benchmarks without running them.
    pub fn run_bench(&self, runner: &mut dyn CommandRunner, _features: &[FeatureSet]) -> Result<()> {
        if self.config.tests_disabled || self.config.benches_disabled {
            debug!("Benchmarks disabled, skipping bench phase");
            return Ok(());
        }

        let invocation = self.invocation(Phase::Bench, "bench", self.config.default_features_disabled);
        runner.run(&self.with_features(invocation, &self.config.required_features).arg("--no-run"))
    }

    fn invocation(&self, phase: Phase, subcommand: &str, no_default_features: bool) -> Invocation {
        let program = self.toolchain.program(self.config.build_tool);
        let mut invocation =
            Invocation::new(Subproject::Core, phase, program, &self.working_dir).arg(subcommand);
        if let Some(target) = &self.config.target_triple {
            invocation = invocation.args(["--target", target.as_str()]);
        }
        if no_default_features {
            invocation = invocation.arg("--no-default-features");
        }
        invocation
    }

    fn test_invocation(&self, no_default_features: bool) -> Invocation {
        let invocation = self.invocation(Phase::Test, "test", no_default_features);
        if self.config.doc_tests_disabled {
            invocation.arg("--tests")
        } else {
            invocation
        }
    }

    fn with_features(&self, invocation: Invocation, features: &FeatureSet) -> Invocation {
        if features.is_empty() {
            invocation
        } else {
            invocation.args(["--features".to_string(), features.join()])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::matrix::FeatureMatrix;
    use crate::runner::PlanRecorder;
    use crate::signals::*;

    fn config(pairs: &[(&str, &str)]) -> ExecutionConfig {
        ExecutionConfig::resolve(&pairs.iter().copied().collect())
    }

    fn lines(recorder: &PlanRecorder) -> Vec<String> {
        recorder.invocations().iter().map(|i| i.command_line()).collect()
    }

    /// Fails the `fail_at`-th invocation (zero-based).
    struct FailingRunner {
        fail_at: usize,
        seen: usize,
    }

    impl CommandRunner for FailingRunner {
        fn run(&mut self, invocation: &Invocation) -> Result<()> {
            let index = self.seen;
            self.seen += 1;
            if index == self.fail_at {
                return Err(Error::CommandFailed {
                    command: invocation.command_line(),
                    code: Some(101),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_build_debug_then_release() {
        let config = config(&[]);
        let toolchain = Toolchain::default();
        let executor = PhaseExecutor::new(&config, &toolchain, Path::new("lexical-core"));
        let mut recorder = PlanRecorder::new();

        executor.run_build(&mut recorder).unwrap();

        assert_eq!(
            lines(&recorder),
            vec![
                "cargo build --features std,property_tests",
                "cargo build --features std,property_tests --release",
            ]
        );
        assert!(!recorder.invocations()[0].release);
        assert!(recorder.invocations()[1].release);
    }

    #[test]
    fn test_build_cross_freestanding() {
        let config = config(&[(CI, "1"), (TARGET, "thumbv7em-none-eabi"), (NO_STD, "1")]);
        let toolchain = Toolchain::default();
        let executor = PhaseExecutor::new(&config, &toolchain, Path::new("lexical-core"));
        let mut recorder = PlanRecorder::new();

        executor.run_build(&mut recorder).unwrap();

        assert_eq!(
            lines(&recorder)[0],
            "cross build --target thumbv7em-none-eabi --no-default-features --features property_tests"
        );
    }

    #[test]
    fn test_build_omits_empty_features() {
        let config = config(&[(NO_STD, "1"), (DISABLE_PROPERTY_TESTS, "1")]);
        let toolchain = Toolchain::default();
        let executor = PhaseExecutor::new(&config, &toolchain, Path::new("lexical-core"));
        let mut recorder = PlanRecorder::new();

        executor.run_build(&mut recorder).unwrap();

        assert_eq!(
            lines(&recorder),
            vec![
                "cargo build --no-default-features",
                "cargo build --no-default-features --release",
            ]
        );
    }

    #[test]
    fn test_build_stops_after_debug_failure() {
        let config = config(&[]);
        let toolchain = Toolchain::default();
        let executor = PhaseExecutor::new(&config, &toolchain, Path::new("lexical-core"));
        let mut runner = FailingRunner { fail_at: 0, seen: 0 };

        assert!(executor.run_build(&mut runner).is_err());
        assert_eq!(runner.seen, 1);
    }

    #[test]
    fn test_test_phase_hosted_sequence() {
        let config = config(&[]);
        let matrix = FeatureMatrix::build(&config);
        let toolchain = Toolchain::default();
        let executor = PhaseExecutor::new(&config, &toolchain, Path::new("lexical-core"));
        let mut recorder = PlanRecorder::new();

        executor.run_test(&mut recorder, &matrix.core).unwrap();

        let lines = lines(&recorder);
        assert_eq!(lines.len(), 2 + 21 + 1);
        assert_eq!(lines[0], "cargo test --features std,property_tests");
        assert_eq!(lines[1], "cargo test --features std,property_tests --release");
        assert_eq!(
            lines[2],
            "cargo test --no-default-features --features std,property_tests,rounding"
        );
        assert_eq!(
            lines[3],
            "cargo test --no-default-features --features std,property_tests,rounding,radix"
        );
        assert_eq!(
            lines[23],
            "cargo test --features std,property_tests --release -- --ignored --test-threads=1 special_rounding"
        );

        let entry = recorder.invocations()[4].feature_set.as_ref().unwrap();
        assert_eq!(entry.join(), "rounding,unchecked_index");
    }

    #[test]
    fn test_test_phase_freestanding_has_no_special_run() {
        let config = config(&[(NO_STD, "1")]);
        let matrix = FeatureMatrix::build(&config);
        let toolchain = Toolchain::default();
        let executor = PhaseExecutor::new(&config, &toolchain, Path::new("lexical-core"));
        let mut recorder = PlanRecorder::new();

        executor.run_test(&mut recorder, &matrix.core).unwrap();

        let lines = lines(&recorder);
        assert_eq!(lines.len(), 2 + 3);
        assert_eq!(
            lines[0],
            "cargo test --no-default-features --tests --features property_tests"
        );
        assert_eq!(
            lines[4],
            "cargo test --no-default-features --tests --features property_tests,table,unchecked_index"
        );
        assert!(lines.iter().all(|l| !l.contains("--ignored")));
    }

    #[test]
    fn test_test_phase_without_doc_tests_keeps_default_features() {
        let config = config(&[(DISABLE_DOCTESTS, "1")]);
        let matrix = FeatureMatrix::build(&config);
        let toolchain = Toolchain::default();
        let executor = PhaseExecutor::new(&config, &toolchain, Path::new("lexical-core"));
        let mut recorder = PlanRecorder::new();

        executor.run_test(&mut recorder, &matrix.core).unwrap();

        let lines = lines(&recorder);
        assert_eq!(lines.len(), 2 + 21 + 1);
        assert_eq!(lines[0], "cargo test --tests --features std,property_tests");
        assert_eq!(
            lines[1],
            "cargo test --tests --features std,property_tests --release"
        );
        assert!(lines[..2].iter().all(|l| !l.contains("--no-default-features")));
        assert_eq!(
            lines[23],
            "cargo test --tests --features std,property_tests --release -- --ignored --test-threads=1 special_rounding"
        );
    }

    #[test]
    fn test_test_phase_disabled_issues_nothing() {
        let config = config(&[(DISABLE_TESTS, "1")]);
        let matrix = FeatureMatrix::build(&config);
        let toolchain = Toolchain::default();
        let executor = PhaseExecutor::new(&config, &toolchain, Path::new("lexical-core"));
        let mut recorder = PlanRecorder::new();

        executor.run_test(&mut recorder, &matrix.core).unwrap();
        executor.run_bench(&mut recorder, &matrix.core).unwrap();

        assert!(recorder.invocations().is_empty());
    }

    #[test]
    fn test_test_phase_stops_on_matrix_failure() {
        let config = config(&[]);
        let matrix = FeatureMatrix::build(&config);
        let toolchain = Toolchain::default();
        let executor = PhaseExecutor::new(&config, &toolchain, Path::new("lexical-core"));
        let mut runner = FailingRunner { fail_at: 5, seen: 0 };

        let err = executor.run_test(&mut runner, &matrix.core).unwrap_err();
        assert_eq!(err.exit_code(), 101);
        assert_eq!(runner.seen, 6);
    }

    #[test]
    fn test_bench_compiles_without_running() {
        let config = config(&[]);
        let toolchain = Toolchain::default();
        let executor = PhaseExecutor::new(&config, &toolchain, Path::new("lexical-core"));
        let mut recorder = PlanRecorder::new();

        executor.run_bench(&mut recorder, &[]).unwrap();

        assert_eq!(
            lines(&recorder),
            vec!["cargo bench --features std,property_tests --no-run"]
        );
        assert_eq!(recorder.invocations()[0].phase, Phase::Bench);
    }

    #[test]
    fn test_bench_disabled() {
        let config = config(&[(DISABLE_BENCHES, "1")]);
        let toolchain = Toolchain::default();
        let executor = PhaseExecutor::new(&config, &toolchain, Path::new("lexical-core"));
        let mut recorder = PlanRecorder::new();

        executor.run_bench(&mut recorder, &[]).unwrap();
        assert!(recorder.invocations().is_empty());
    }

    #[test]
    fn test_toolchain_override() {
        let config = config(&[]);
        let toolchain = Toolchain {
            native: "/opt/cargo-nightly".to_string(),
            cross: "cross".to_string(),
        };
        let executor = PhaseExecutor::new(&config, &toolchain, Path::new("lexical-core"));
        let mut recorder = PlanRecorder::new();

        executor.run_build(&mut recorder).unwrap();
        assert!(recorder
            .invocations()
            .iter()
            .all(|i| i.program == "/opt/cargo-nightly"));
    }
}
