//! Configuration module for fpsync
//!
//! Configuration hierarchy:
//! 1. Resolver options (highest priority)
//! 2. Environment variables (FPSYNC_*)
//! 3. Config file (`$FPSYNC_CONFIG`, `~/.fpsyncrc.toml`, `~/usr/etc/fpsyncrc.toml`)
//! 4. Injected defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{levenshtein, EnvVarValidator, VALIDATION_MODE_VAR};
pub use loader::{
    discover, load_discovered, load_with_warnings, parse_with_warnings, with_env_overrides,
    with_env_overrides_from, CONFIG_ENV_VAR, HOME_CONFIG_PATHS,
};
pub use types::{
    BaseConfig, ConfigFile, DefaultsConfig, ItemList, PlatformExtraConfig, TaskConfig,
};
