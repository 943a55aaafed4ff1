//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::TaskRef;

/// Non-fatal problem surfaced alongside a resolved configuration.
///
/// Warnings never stop a resolution; the caller decides whether to show
/// them, log them, or treat them as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key in the configuration file that nothing reads
    UnknownKey {
        key: String,
        file: PathBuf,
        /// 1-indexed, if the key could be located
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// Exclusion file absent in permissive mode
    MissingExcludeFile { task: TaskRef, path: String },
    /// Exclusion file present but could not be read or parsed
    UnreadableExcludeFile {
        task: TaskRef,
        path: String,
        message: String,
    },
    /// The task's own exclusion patterns would drop this item
    ItemExcluded {
        task: TaskRef,
        item: String,
        exclude_file: String,
    },
    DuplicateItem { task: TaskRef, item: String },
    /// A platform extra names a task that the plan does not define
    UnmatchedPlatformExtra { task_name: String, item: String },
}

impl ConfigWarning {
    pub fn task(&self) -> Option<&TaskRef> {
        match self {
            ConfigWarning::MissingExcludeFile { task, .. }
            | ConfigWarning::UnreadableExcludeFile { task, .. }
            | ConfigWarning::ItemExcluded { task, .. }
            | ConfigWarning::DuplicateItem { task, .. } => Some(task),
            ConfigWarning::UnknownKey { .. } | ConfigWarning::UnmatchedPlatformExtra { .. } => None,
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::MissingExcludeFile { task, path } => {
                write!(f, "{}: exclude file '{}' does not exist", task, path)
            }
            ConfigWarning::UnreadableExcludeFile {
                task,
                path,
                message,
            } => write!(f, "{}: cannot use exclude file '{}': {}", task, path, message),
            ConfigWarning::ItemExcluded {
                task,
                item,
                exclude_file,
            } => write!(
                f,
                "{}: item '{}' is excluded by patterns in '{}' and will never sync",
                task, item, exclude_file
            ),
            ConfigWarning::DuplicateItem { task, item } => {
                write!(f, "{}: item '{}' is listed more than once", task, item)
            }
            ConfigWarning::UnmatchedPlatformExtra { task_name, item } => write!(
                f,
                "platform item '{}' targets task '{}', which is not defined",
                item, task_name
            ),
        }
    }
}
