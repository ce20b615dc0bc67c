//! Test helpers for behavioral specifications.
//!
//! Provides high-level helpers for testing cgrep CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the cgrep binary
pub fn cgrep_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cgrep"));
    cmd.env_remove("CGREP_CONFIG").env_remove("CGREP_LOG").env("NO_COLOR", "1");
    cmd
}

/// Temporary project directory with a `.git` marker so config discovery
/// never escapes it.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Write a file relative to the project root, creating parent directories.
    pub fn file(self, path: &str, content: &str) -> Self {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
        self
    }

    /// Write `cgrep.toml` at the project root.
    pub fn config(self, content: &str) -> Self {
        self.file("cgrep.toml", content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// cgrep command running inside the project.
    pub fn cmd(&self) -> Command {
        let mut cmd = cgrep_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
