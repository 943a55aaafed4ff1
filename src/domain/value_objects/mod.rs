//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod direction;
mod exclude_patterns;
mod platform;
mod resolve_error;
mod validation_mode;

pub use config_warning::ConfigWarning;
pub use direction::SyncDirection;
pub use exclude_patterns::{ExcludeError, ExcludePatterns, MAX_FILE_SIZE};
pub use platform::PlatformFamily;
pub use resolve_error::{ConfigErrorReason, ErrorKind, ResolveError};
pub use validation_mode::ValidationMode;
