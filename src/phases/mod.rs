//! Phases of a lexical CI run.
//!
//! ## Overview
//!
//! A run walks three subprojects in a fixed order:
//! 1. `lexical-core` - build, test and (when reinstated) benchmark compile
//! 2. `lexical-capi` - foreign-binding tests, opt-in
//! 3. `lexical-derive` - code-generation tests, opt-in
//!
//! Each step is expressed as an [`Invocation`]: a fully resolved subprocess
//! command together with the subproject, phase and feature set it validates.
//! Invocations are built on demand and handed straight to a
//! [`CommandRunner`](crate::runner::CommandRunner).

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::defaults;
use crate::matrix::FeatureSet;

pub mod executor;
pub mod orchestrator;
pub mod sequencer;

/// One independently buildable module of the lexical repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subproject {
    Core,
    Bindings,
    Codegen,
}

impl Subproject {
    /// Subprojects in the order a run visits them.
    pub const ORDER: [Subproject; 3] = [Subproject::Core, Subproject::Bindings, Subproject::Codegen];

    /// Directory relative to the repository root.
    pub fn dir(self) -> &'static str {
        match self {
            Subproject::Core => defaults::CORE_DIR,
            Subproject::Bindings => defaults::BINDINGS_DIR,
            Subproject::Codegen => defaults::CODEGEN_DIR,
        }
    }

    /// Phases that apply to this subproject.
    pub fn phases(self) -> &'static [Phase] {
        match self {
            Subproject::Core => &[Phase::Build, Phase::Test, Phase::Bench],
            Subproject::Bindings => &[Phase::FfiTest],
            Subproject::Codegen => &[Phase::DeriveTest],
        }
    }
}

impl fmt::Display for Subproject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

/// Category of verification action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Build,
    Test,
    Bench,
    FfiTest,
    DeriveTest,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Build => "build",
            Phase::Test => "test",
            Phase::Bench => "bench",
            Phase::FfiTest => "ffi-test",
            Phase::DeriveTest => "derive-test",
        };
        f.write_str(name)
    }
}

/// A single subprocess invocation, ready to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub subproject: Subproject,
    pub phase: Phase,
    /// Matrix entry under test, for per-feature test runs.
    pub feature_set: Option<FeatureSet>,
    pub release: bool,
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl Invocation {
    pub fn new(subproject: Subproject, phase: Phase, program: &str, working_dir: &Path) -> Self {
        Self {
            subproject,
            phase,
            feature_set: None,
            release: false,
            program: program.to_string(),
            args: Vec::new(),
            working_dir: working_dir.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Mark the invocation as a release-profile run and append `--release`.
    pub fn release(mut self) -> Self {
        self.release = true;
        self.arg("--release")
    }

    pub fn with_feature_set(mut self, feature_set: FeatureSet) -> Self {
        self.feature_set = Some(feature_set);
        self
    }

    /// The command line without the working directory.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(cd {}) {}", self.working_dir.display(), self.command_line())
    }
}
