//! Error types for fpsync
//!
//! Uses `thiserror` for library errors. Resolution problems that point at a
//! task live in [`ResolveError`]; this module covers loading and I/O, plus
//! the aggregate returned when a resolution fails.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::SyncTaskSpec;
use crate::domain::value_objects::{ConfigWarning, ResolveError};

/// Result type alias for fpsync operations
pub type FpsyncResult<T> = Result<T, FpsyncError>;

/// Main error type for loading configuration
#[derive(Error, Debug)]
pub enum FpsyncError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or does not match the schema
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// No config file in any of the searched locations
    #[error("no config file found (searched: {})", display_paths(searched))]
    ConfigNotFound { searched: Vec<PathBuf> },

    /// Resolution produced errors
    #[error(transparent)]
    Resolve(#[from] ResolveFailure),
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing; home directory unknown".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A resolution that did not produce a complete task list.
///
/// `usable` holds the tasks that passed validation; it is only populated in
/// permissive mode and is always empty after a precondition failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", summarize(errors))]
pub struct ResolveFailure {
    pub errors: Vec<ResolveError>,
    pub usable: Vec<SyncTaskSpec>,
    pub warnings: Vec<ConfigWarning>,
}

impl ResolveFailure {
    pub fn new(errors: Vec<ResolveError>) -> Self {
        Self {
            errors,
            usable: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// The first error, which is the only one for a precondition failure
    pub fn first(&self) -> Option<&ResolveError> {
        self.errors.first()
    }
}

fn summarize(errors: &[ResolveError]) -> String {
    match errors {
        [] => "configuration failed to resolve".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}
