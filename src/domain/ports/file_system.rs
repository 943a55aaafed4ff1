//! FileSystem port - the only I/O the validator needs
//!
//! Resolution checks that paths exist and reads small exclusion files.
//! Keeping this behind a trait lets the validator run against an in-memory
//! tree in tests.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// File exceeds the size the caller is willing to read
    TooLarge { path: PathBuf, size: u64, limit: u64 },
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Attach the path an `io::Error` was raised for
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(err, Path::new(""))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::TooLarge { path, size, limit } => write!(
                f,
                "{} is {} bytes, over the {} byte limit",
                path.display(),
                size,
                limit
            ),
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - `MemoryFs` - in-memory tree for tests
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read a text file, refusing files larger than `limit` bytes
    fn read_limited(&self, path: &Path, limit: u64) -> FsResult<String>;
}
