//! Resolve Options
//!
//! Per-call settings that take precedence over the environment and the
//! configuration itself.

use crate::domain::value_objects::{PlatformFamily, ValidationMode};

/// Options for the resolve use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Validation mode; falls back to `FPSYNC_VALIDATION_MODE`, then the
    /// plan's own mode, then permissive
    pub mode: Option<ValidationMode>,
    /// Replaces the plan's must-exist path
    pub must_exist: Option<String>,
    /// Pins the platform instead of probing the host
    pub platform: Option<PlatformFamily>,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn strict(self) -> Self {
        self.with_mode(ValidationMode::Strict)
    }

    pub fn with_must_exist(mut self, path: impl Into<String>) -> Self {
        self.must_exist = Some(path.into());
        self
    }

    pub fn with_platform(mut self, platform: PlatformFamily) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Pick the effective mode from the explicit option, the environment
    /// override and the plan, in that order.
    pub fn effective_mode(
        &self,
        env_mode: Option<ValidationMode>,
        plan_mode: Option<ValidationMode>,
    ) -> ValidationMode {
        self.mode.or(env_mode).or(plan_mode).unwrap_or_default()
    }
}
