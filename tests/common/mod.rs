//! Shared test utilities for E2E tests.
//!
//! The CLI reads its configuration from CI environment variables, and the
//! test process may itself be running under CI. Every command built here
//! starts from a clean slate: all recognised signals are removed, then the
//! test sets exactly the ones it needs.
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = RepoFixture::new();
//! fixture.command().arg("plan").assert().success();
//! ```

use assert_cmd::Command;
use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::clean_command;
    pub use super::RepoFixture;
}

/// The `lexical-ci` binary with every CI signal cleared.
pub fn clean_command() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lexical-ci");
    for name in lexical_ci::signals::ALL {
        cmd.env_remove(name);
    }
    cmd.env_remove("RUST_LOG");
    cmd.arg("--color=never");
    cmd
}

/// A temporary lexical checkout with the three subproject directories.
pub struct RepoFixture {
    temp_dir: assert_fs::TempDir,
}

impl RepoFixture {
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        for dir in ["lexical-core", "lexical-capi", "lexical-derive"] {
            temp_dir
                .child(dir)
                .create_dir_all()
                .expect("Failed to create subproject directory");
        }
        Self { temp_dir }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A clean command rooted at the fixture.
    pub fn command(&self) -> Command {
        let mut cmd = clean_command();
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for RepoFixture {
    fn default() -> Self {
        Self::new()
    }
}
