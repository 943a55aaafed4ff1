//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory) and home lookup
//! - `env` - Process environment
//! - `platform` - Host platform probe

pub mod env;
pub mod fs;
pub mod platform;

pub use env::ProcessEnv;
pub use fs::{LocalFs, MemoryFs};
pub use platform::HostPlatform;
