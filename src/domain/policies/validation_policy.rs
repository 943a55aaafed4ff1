//! Validation Policy
//!
//! Decides how severe each class of problem is under a given
//! [`ValidationMode`]. Pure; no I/O.

use crate::domain::value_objects::ValidationMode;

/// Severity rules for one resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationPolicy {
    mode: ValidationMode,
}

impl ValidationPolicy {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Stop at the first task that has errors
    pub fn fail_fast(&self) -> bool {
        self.mode.is_strict()
    }

    /// A missing exclusion file is an error rather than a warning
    pub fn missing_exclude_is_fatal(&self) -> bool {
        self.mode.is_strict()
    }

    /// Hand back tasks that passed even though others failed
    pub fn keeps_partial_results(&self) -> bool {
        !self.mode.is_strict()
    }
}

impl From<ValidationMode> for ValidationPolicy {
    fn from(mode: ValidationMode) -> Self {
        Self::new(mode)
    }
}
