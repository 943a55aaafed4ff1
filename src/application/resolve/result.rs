//! Resolve Result

use crate::domain::entities::ResolvedConfig;
use crate::domain::value_objects::{ConfigWarning, PlatformFamily, ValidationMode};

/// A complete, validated task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub tasks: ResolvedConfig,
    pub warnings: Vec<ConfigWarning>,
    /// The mode validation ran in
    pub mode: ValidationMode,
    /// The platform extras were applied for
    pub platform: PlatformFamily,
}

impl Resolution {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_tasks(self) -> ResolvedConfig {
        self.tasks
    }
}
