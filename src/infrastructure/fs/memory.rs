//! In-memory file system for tests and dry resolution.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// A fixed tree of directories and text files.
///
/// Adding a path also makes all of its ancestors exist.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_ancestors(path.as_ref());
        self.dirs.insert(path.as_ref().to_path_buf());
        self
    }

    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.add_ancestors(path.as_ref());
        self.files
            .insert(path.as_ref().to_path_buf(), content.to_string());
        self
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.contains(path) || self.files.contains_key(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_limited(&self, path: &Path, limit: u64) -> FsResult<String> {
        let content = self
            .files
            .get(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
        let size = content.len() as u64;
        if size > limit {
            return Err(FsError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
        Ok(content.clone())
    }
}
