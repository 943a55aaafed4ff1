//! Exclusion patterns value object
//!
//! Parses the rsync-style exclusion file a task points at, so items that the
//! transfer tool would silently skip can be reported up front.
//!
//! Matching uses gitignore semantics via the `ignore` crate. rsync's filter
//! rules are first-match-wins while gitignore is last-match-wins, so results
//! are advisory only and never fail a resolution.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, FsError};

/// Maximum exclusion file size (64KB)
pub const MAX_FILE_SIZE: u64 = 65536;

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Patterns loaded from an exclusion file.
#[derive(Debug)]
pub struct ExcludePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl ExcludePatterns {
    /// Read and parse the exclusion file at `path`.
    pub fn load<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<Self, ExcludeError> {
        let content = fs
            .read_limited(path, MAX_FILE_SIZE)
            .map_err(ExcludeError::Read)?;
        let root = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_content(root, path, &content)
    }

    /// Parse rsync filter lines.
    ///
    /// Blank lines and lines starting with `#` or `;` are skipped. A `- `
    /// prefix marks an exclude, `+ ` an include. A lone `!` (rsync's
    /// "clear list") is ignored.
    pub fn from_content(
        root: &Path,
        source_path: &Path,
        content: &str,
    ) -> Result<Self, ExcludeError> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim_end();
            if trimmed.trim_start().is_empty()
                || trimmed.starts_with('#')
                || trimmed.starts_with(';')
                || trimmed == "!"
            {
                continue;
            }

            let rule = if let Some(pattern) = trimmed.strip_prefix("- ") {
                pattern.to_string()
            } else if let Some(pattern) = trimmed.strip_prefix("+ ") {
                format!("!{}", pattern)
            } else {
                trimmed.to_string()
            };

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(ExcludeError::TooManyPatterns {
                    path: source_path.to_path_buf(),
                    count: pattern_count,
                    limit: MAX_PATTERNS,
                });
            }

            if let Err(e) = builder.add_line(Some(source_path.to_path_buf()), &rule) {
                return Err(ExcludeError::InvalidPattern {
                    path: source_path.to_path_buf(),
                    line: line_num + 1,
                    pattern: line.to_string(),
                    message: e.to_string(),
                });
            }
        }

        let matcher = builder
            .build()
            .map_err(|e| ExcludeError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Whether a top-level item would be excluded, as a file or as a directory.
    pub fn excludes_item(&self, item: &str) -> bool {
        let path = Path::new(item);
        self.matcher.matched(path, false).is_ignore() || self.matcher.matched(path, true).is_ignore()
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Errors that can occur when loading exclusion patterns.
#[derive(Debug)]
pub enum ExcludeError {
    /// The file could not be read (missing, unreadable, too large)
    Read(FsError),
    TooManyPatterns {
        path: PathBuf,
        count: usize,
        limit: usize,
    },
    InvalidPattern {
        path: PathBuf,
        line: usize,
        pattern: String,
        message: String,
    },
    BuildFailed(String),
}

impl fmt::Display for ExcludeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "{}", e),
            Self::TooManyPatterns { path, count, limit } => write!(
                f,
                "{} has {} patterns, exceeds {} limit",
                path.display(),
                count,
                limit
            ),
            Self::InvalidPattern {
                path,
                line,
                pattern,
                message,
            } => write!(
                f,
                "invalid pattern at {}:{}: '{}' - {}",
                path.display(),
                line,
                pattern,
                message
            ),
            Self::BuildFailed(msg) => write!(f, "failed to build exclusion matcher: {}", msg),
        }
    }
}

impl std::error::Error for ExcludeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            _ => None,
        }
    }
}
