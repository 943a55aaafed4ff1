//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_source;
pub mod environment;
pub mod file_system;
pub mod platform_probe;

pub use config_source::ConfigSource;
pub use environment::{Environment, StaticEnv};
pub use file_system::{FileSystem, FsError, FsResult};
pub use platform_probe::{FixedPlatform, PlatformProbe};
