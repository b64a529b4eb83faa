//! Default values for lexical-ci.
//!
//! This module provides the fixed names the orchestrator relies on: tool
//! programs, interpreter names, subproject directories and test filters.

use std::path::PathBuf;

/// Build tool used on developer machines and when cross-compiling is disabled.
pub const NATIVE_TOOL: &str = "cargo";

/// Cross-compiling wrapper used under CI.
pub const CROSS_TOOL: &str = "cross";

/// Interpreter for the foreign-binding tests on developer machines.
pub const LOCAL_INTERPRETER: &str = "python";

/// Pinned interpreter for the foreign-binding tests under CI.
pub const CI_INTERPRETER: &str = "python3.6";

/// Entry point of the foreign-binding test harness, relative to the bindings
/// subproject.
pub const FFI_TEST_SCRIPT: &str = "test.py";

/// Test-name filter selecting the rounding-at-precision-boundaries scenarios.
pub const SPECIAL_ROUNDING_FILTER: &str = "special_rounding";

/// Directory of the core library, relative to the repository root.
pub const CORE_DIR: &str = "lexical-core";

/// Directory of the C binding layer, relative to the repository root.
pub const BINDINGS_DIR: &str = "lexical-capi";

/// Directory of the derive/code-generation layer, relative to the repository
/// root.
pub const CODEGEN_DIR: &str = "lexical-derive";

/// Returns the default repository root.
///
/// This is the current working directory, falling back to `.` when it cannot
/// be determined. Can be overridden with `--root`.
pub fn default_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
