//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the Windows system API (`SHGetKnownFolderPath`)
//! rather than environment variables, so setting `HOME` or `USERPROFILE` in
//! tests has no effect there.
//!
//! `fpsync_home_dir()`:
//! 1. Checks `FPSYNC_TEST_HOME` first (for test isolation)
//! 2. Falls back to `dirs::home_dir()`
//!
//! Config discovery and `~` expansion both go through it.

use std::path::PathBuf;

/// Environment variable for test isolation of home directory.
pub const FPSYNC_TEST_HOME_VAR: &str = "FPSYNC_TEST_HOME";

/// Get the home directory `~` refers to.
///
/// # Example
///
/// ```
/// use fpsync::infrastructure::fs::fpsync_home_dir;
///
/// if let Some(home) = fpsync_home_dir() {
///     let config = home.join(".fpsyncrc.toml");
/// }
/// ```
pub fn fpsync_home_dir() -> Option<PathBuf> {
    std::env::var(FPSYNC_TEST_HOME_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}
