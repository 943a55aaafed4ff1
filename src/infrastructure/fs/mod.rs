//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;
mod memory;

pub use home::{fpsync_home_dir, FPSYNC_TEST_HOME_VAR};
pub use local::LocalFs;
pub use memory::MemoryFs;
