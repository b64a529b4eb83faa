//! # Lexical CI Library
//!
//! This library drives the continuous-integration test matrix of the
//! `lexical` numeric-conversion crates. It decides which `cargo` (or `cross`)
//! invocations run, in what order and under which feature flags; the build
//! tool itself does the actual work.
//!
//! ## Quick Example
//!
//! ```
//! use lexical_ci::phases::orchestrator::{self, Outcome, RunSettings};
//! use lexical_ci::runner::PlanRecorder;
//! use lexical_ci::signals::{Signals, NO_STD};
//!
//! // A freestanding build on a developer machine
//! let signals = Signals::new().with(NO_STD, "1");
//!
//! // Record the plan instead of running it
//! let mut recorder = PlanRecorder::new();
//! let outcome = orchestrator::execute(&signals, &RunSettings::new("."), &mut recorder).unwrap();
//!
//! assert!(matches!(outcome, Outcome::Completed { .. }));
//! // build x2, test x2, then one test per `table` matrix entry
//! assert_eq!(recorder.invocations().len(), 7);
//! ```
//!
//! ## Core Concepts
//!
//! - **Signals (`signals`)**: Snapshot of the environment variables set by
//!   the CI provider. Only presence matters for most of them.
//! - **Configuration (`config`)**: The immutable `ExecutionConfig` resolved
//!   from the signals.
//! - **Feature matrix (`matrix`)**: Feature combinations tested in isolation
//!   against the core library.
//! - **Runners (`runner`)**: The seam between planning and spawning
//!   processes.
//! - **Phases (`phases`)**: Build, test and benchmark invocations plus the
//!   subproject sequencing that ties them together.
//!
//! ## Execution Flow
//!
//! The main entry point is `phases::orchestrator::execute`:
//!
//! 1.  **Gate**: A deployment tag skips the whole run.
//! 2.  **Resolve**: Build the `ExecutionConfig`.
//! 3.  **Expand**: Build the feature matrix.
//! 4.  **Sequence**: Core build and tests, then the optional binding and
//!     code-generation tests, stopping at the first failure.

pub mod config;
pub mod defaults;
pub mod error;
pub mod gate;
pub mod matrix;
pub mod output;
pub mod phases;
pub mod runner;
pub mod signals;

#[cfg(test)]
mod config_proptest;
