//! Environment precondition - a sentinel path gating the whole run
//!
//! Typically something that is only present when a network mount or a key
//! directory is available, e.g. `~/.ssh`.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentPrecondition {
    /// The path as written in configuration
    must_exist: String,
    /// The path actually checked, after expansion
    resolved: PathBuf,
}

impl EnvironmentPrecondition {
    pub fn new(must_exist: impl Into<String>, resolved: impl Into<PathBuf>) -> Self {
        Self {
            must_exist: must_exist.into(),
            resolved: resolved.into(),
        }
    }

    /// A precondition on an already-concrete path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let resolved = path.into();
        Self {
            must_exist: resolved.to_string_lossy().into_owned(),
            resolved,
        }
    }

    pub fn must_exist(&self) -> &str {
        &self.must_exist
    }

    pub fn resolved(&self) -> &Path {
        &self.resolved
    }
}
