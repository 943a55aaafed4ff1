//! Process environment adapter

use std::path::PathBuf;

use crate::domain::ports::Environment;
use crate::infrastructure::fs::fpsync_home_dir;

/// Reads variables from the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        fpsync_home_dir()
    }
}
