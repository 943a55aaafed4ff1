//! Resolution errors
//!
//! Every error names the task and the field it was found in, so a caller can
//! point the user at the exact line of configuration to fix.

use thiserror::Error;

use crate::domain::entities::TaskRef;

/// Broad category of a [`ResolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Precondition,
    Config,
    NestedItem,
    TrailingSeparator,
    MissingExcludeFile,
}

/// Why a task fragment is malformed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigErrorReason {
    #[error("item list is empty")]
    EmptyItems,

    #[error("item at position {position} is blank")]
    BlankItem { position: usize },

    #[error("item '{item}' refers to the root itself or its parent")]
    ReservedItem { item: String },
}

/// An error found while resolving or validating the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The must-exist sentinel path is absent; nothing else is checked
    #[error("required path '{path}' does not exist (checked '{checked}')")]
    Precondition { path: String, checked: String },

    /// A fragment cannot produce a meaningful task
    #[error("{task}: {reason}")]
    Config {
        task: TaskRef,
        reason: ConfigErrorReason,
    },

    #[error("{task}: item '{item}' is a nested path; items must be a single top-level name")]
    NestedItem { task: TaskRef, item: String },

    #[error("{task}: item '{item}' ends with a path separator, which syncs only its contents")]
    TrailingSeparator { task: TaskRef, item: String },

    #[error("{task}: exclude file '{path}' does not exist")]
    MissingExcludeFile { task: TaskRef, path: String },
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::Precondition { .. } => ErrorKind::Precondition,
            ResolveError::Config { .. } => ErrorKind::Config,
            ResolveError::NestedItem { .. } => ErrorKind::NestedItem,
            ResolveError::TrailingSeparator { .. } => ErrorKind::TrailingSeparator,
            ResolveError::MissingExcludeFile { .. } => ErrorKind::MissingExcludeFile,
        }
    }

    /// Name of the configuration field holding the offending value
    pub fn field(&self) -> &'static str {
        match self {
            ResolveError::Precondition { .. } => "must_exist",
            ResolveError::Config { .. }
            | ResolveError::NestedItem { .. }
            | ResolveError::TrailingSeparator { .. } => "items",
            ResolveError::MissingExcludeFile { .. } => "exclude_from",
        }
    }

    /// The task the error belongs to; `None` for the precondition
    pub fn task(&self) -> Option<&TaskRef> {
        match self {
            ResolveError::Precondition { .. } => None,
            ResolveError::Config { task, .. }
            | ResolveError::NestedItem { task, .. }
            | ResolveError::TrailingSeparator { task, .. }
            | ResolveError::MissingExcludeFile { task, .. } => Some(task),
        }
    }
}
