//! Environment port - variable and home directory lookup for path expansion

use std::collections::HashMap;
use std::path::PathBuf;

/// Source of environment variables and the user's home directory.
pub trait Environment {
    /// Value of an environment variable, if set and valid Unicode
    fn var(&self, name: &str) -> Option<String>;

    /// The home directory `~` expands to
    fn home_dir(&self) -> Option<PathBuf>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }
}

/// Fixed environment, for tests and for hosts that sandbox resolution.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
    home: Option<PathBuf>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl Environment for StaticEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}
