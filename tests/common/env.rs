//! Test environment builder for isolated fpsync testing.
//!
//! Every `TestEnv` owns a temporary home directory. Resolution runs against
//! the real disk through `LocalFs`, but `~` and environment variables come
//! from a `StaticEnv`, so tests never touch the process environment.
//!
//! Tests that must go through the process environment hold a
//! `ProcessEnvGuard` instead.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tempfile::TempDir;

use fpsync::config::{parse_with_warnings, with_env_overrides_from, ConfigFile};
use fpsync::domain::ports::{FixedPlatform, StaticEnv};
use fpsync::infrastructure::LocalFs;
use fpsync::{
    ConfigResolver, ConfigWarning, PlatformFamily, Resolution, ResolveFailure, ResolverOptions,
    SyncDefaults,
};

/// Isolated home directory with a config file and a pinned platform.
pub struct TestEnv {
    pub home_dir: TempDir,
    pub config: ConfigFile,
    pub config_warnings: Vec<ConfigWarning>,
    env: StaticEnv,
    platform: PlatformFamily,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to the home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// The home directory as a string, as it appears in resolved tasks
    pub fn home(&self) -> String {
        self.home_dir.path().to_string_lossy().into_owned()
    }

    /// Defaults the way a laptop sync script would inject them
    pub fn defaults(&self) -> SyncDefaults {
        SyncDefaults::new("server", "/home/me").with_excludes("~/.rsync-excludes")
    }

    pub fn resolve(&self) -> Result<Resolution, ResolveFailure> {
        self.resolve_with(&ResolverOptions::new())
    }

    pub fn resolve_with(&self, options: &ResolverOptions) -> Result<Resolution, ResolveFailure> {
        let config = with_env_overrides_from(self.config.clone(), &self.env);
        ConfigResolver::new(LocalFs, self.env.clone(), FixedPlatform(self.platform)).resolve(
            &self.defaults(),
            &config,
            options,
        )
    }
}

/// Builder for `TestEnv`
pub struct TestEnvBuilder {
    dirs: Vec<String>,
    files: Vec<(String, String)>,
    config: String,
    vars: Vec<(String, String)>,
    platform: PlatformFamily,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            dirs: Vec::new(),
            files: Vec::new(),
            config: String::new(),
            vars: Vec::new(),
            platform: PlatformFamily::Linux,
        }
    }

    /// Create a directory under home
    pub fn with_home_dir(mut self, relative: &str) -> Self {
        self.dirs.push(relative.to_string());
        self
    }

    /// Create a file under home
    pub fn with_home_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = toml.to_string();
        self
    }

    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.vars.push((name.to_string(), value.to_string()));
        self
    }

    pub fn on_platform(mut self, platform: PlatformFamily) -> Self {
        self.platform = platform;
        self
    }

    pub fn build(self) -> TestEnv {
        let home_dir = tempfile::tempdir().expect("create temp home");

        for dir in &self.dirs {
            fs::create_dir_all(home_dir.path().join(dir)).expect("create home dir");
        }
        for (relative, content) in &self.files {
            let path = home_dir.path().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create parent dir");
            }
            fs::write(&path, content).expect("write home file");
        }

        let config_path = home_dir.path().join(".fpsyncrc.toml");
        fs::write(&config_path, &self.config).expect("write config");
        let (config, config_warnings) =
            parse_with_warnings(&self.config, Path::new(&config_path)).expect("parse config");

        let env = self
            .vars
            .iter()
            .fold(StaticEnv::new().with_home(home_dir.path()), |env, (k, v)| {
                env.with_var(k.clone(), v.clone())
            });

        TestEnv {
            home_dir,
            config,
            config_warnings,
            env,
            platform: self.platform,
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Variables fpsync reads from the process environment
pub const FPSYNC_VARS: &[&str] = &[
    "FPSYNC_TEST_HOME",
    "FPSYNC_CONFIG",
    "FPSYNC_HOST",
    "FPSYNC_START_DIR",
    "FPSYNC_EXCLUDES",
    "FPSYNC_VALIDATION_MODE",
];

static PROCESS_ENV_LOCK: Mutex<()> = Mutex::new(());

/// Exclusive access to the process environment.
///
/// Clears every `FPSYNC_*` variable on acquire and restores the original
/// values on drop. Guards are serialised, so tests holding one never see
/// each other's variables.
pub struct ProcessEnvGuard {
    env_backup: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ProcessEnvGuard {
    pub fn acquire() -> Self {
        let lock = PROCESS_ENV_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let env_backup = FPSYNC_VARS
            .iter()
            .map(|&key| (key, std::env::var_os(key)))
            .collect();
        for key in FPSYNC_VARS {
            std::env::remove_var(key);
        }
        Self {
            env_backup,
            _lock: lock,
        }
    }

    pub fn set(&self, key: &str, value: impl AsRef<std::ffi::OsStr>) {
        std::env::set_var(key, value);
    }
}

impl Drop for ProcessEnvGuard {
    fn drop(&mut self) {
        // Restore original environment variables
        for (key, original) in &self.env_backup {
            match original {
                Some(val) => std::env::set_var(key, val),
                None => std::env::remove_var(key),
            }
        }
    }
}
