//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Read;
use std::path::Path;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_limited(&self, path: &Path, limit: u64) -> FsResult<String> {
        let metadata = std::fs::metadata(path).map_err(|e| FsError::from_io(e, path))?;
        if metadata.len() > limit {
            return Err(FsError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }

        // The file may grow between the metadata call and the read.
        let file = std::fs::File::open(path).map_err(|e| FsError::from_io(e, path))?;
        let mut content = String::new();
        file.take(limit + 1)
            .read_to_string(&mut content)
            .map_err(|e| FsError::from_io(e, path))?;
        if content.len() as u64 > limit {
            return Err(FsError::TooLarge {
                path: path.to_path_buf(),
                size: content.len() as u64,
                limit,
            });
        }
        Ok(content)
    }
}
