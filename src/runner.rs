//! # Command Runners
//!
//! Every subprocess the orchestrator issues goes through the
//! [`CommandRunner`] trait. This separates deciding *what* runs from actually
//! spawning processes:
//!
//! - **`SystemRunner`** spawns the command with inherited stdio in the
//!   invocation's working directory and blocks until it exits. A non-zero
//!   status becomes [`Error::CommandFailed`], which ends the run.
//! - **`PlanRecorder`** records invocations without running them; it backs
//!   the `plan` command and most tests.

use std::process::Command;

use log::info;

use crate::error::{Error, Result};
use crate::phases::Invocation;

/// Trait for issuing invocations - allows recording and mocking in tests
pub trait CommandRunner {
    /// Run one invocation to completion.
    ///
    /// Returns an error if the command cannot be launched or exits
    /// unsuccessfully.
    fn run(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Runs invocations as real subprocesses.
#[derive(Debug, Default)]
pub struct SystemRunner {
    completed: usize,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of invocations that exited successfully.
    pub fn completed(&self) -> usize {
        self.completed
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        info!("+ {}", invocation);

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .status()
            .map_err(|source| Error::Launch {
                command: invocation.command_line(),
                source,
            })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command: invocation.command_line(),
                code: status.code(),
            });
        }

        self.completed += 1;
        Ok(())
    }
}

/// Records invocations instead of running them.
#[derive(Debug, Default)]
pub struct PlanRecorder {
    invocations: Vec<Invocation>,
}

impl PlanRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    pub fn into_invocations(self) -> Vec<Invocation> {
        self.invocations
    }
}

impl CommandRunner for PlanRecorder {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        self.invocations.push(invocation.clone());
        Ok(())
    }
}
