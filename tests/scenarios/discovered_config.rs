//! Scenario: Config Found on Disk
//!
//! Journey: A sync script calls fpsync without building a config itself.
//!
//! Steps:
//! 1. The user's home holds `.fpsyncrc.toml`, with one misspelled key
//! 2. `FPSYNC_HOST` points the sync at a different server
//! 3. The script calls `resolve_discovered` on this host
//!
//! Success Criteria:
//! - The home config is found through the process environment
//! - Environment overrides reach the resolved tasks
//! - File warnings come before resolution warnings
//! - A mistyped `FPSYNC_CONFIG` is reported, not silently replaced

use std::fs;

use crate::common::*;

use fpsync::{resolve_discovered, ConfigWarning, FpsyncError, ResolverOptions, SyncDefaults};

const HOME_CONFIG: &str = r#"
verbose = true

[[task]]
name = "home"
items = [".vimrc", "bin"]
"#;

fn defaults() -> SyncDefaults {
    SyncDefaults::new("server", "/home/me").with_excludes("~/.rsync-excludes")
}

/// SCENARIO: home config is discovered, overridden and resolved
#[test]
fn scenario_home_config_resolves_with_overrides() {
    let guard = ProcessEnvGuard::acquire();
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".fpsyncrc.toml"), HOME_CONFIG).unwrap();
    guard.set("FPSYNC_TEST_HOME", home.path());
    guard.set("FPSYNC_HOST", "backup");

    let resolution = resolve_discovered(&defaults(), &ResolverOptions::new()).unwrap();

    let tasks = resolution.tasks.tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].items, vec![".vimrc", "bin"]);
    assert_eq!(tasks[0].source_root, home.path().to_string_lossy());
    assert_eq!(tasks[0].target_root, "backup:/home/me");

    match resolution.warnings.as_slice() {
        [ConfigWarning::UnknownKey { key, .. }, ConfigWarning::MissingExcludeFile { path, .. }] => {
            assert_eq!(key, "verbose");
            assert_eq!(
                path,
                &home.path().join(".rsync-excludes").to_string_lossy()
            );
        }
        other => panic!("expected unknown key then missing exclude file, got {:?}", other),
    }
}

/// SCENARIO: an explicit config path wins over the home config
#[test]
fn scenario_explicit_config_path_is_used() {
    let guard = ProcessEnvGuard::acquire();
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".fpsyncrc.toml"), HOME_CONFIG).unwrap();
    fs::write(home.path().join(".rsync-excludes"), "").unwrap();
    let explicit = home.path().join("work.toml");
    fs::write(&explicit, "[[task]]\neach = [\"dev\"]\n").unwrap();
    guard.set("FPSYNC_TEST_HOME", home.path());
    guard.set("FPSYNC_CONFIG", &explicit);

    let resolution = resolve_discovered(&defaults(), &ResolverOptions::new()).unwrap();

    assert_eq!(resolution.tasks.tasks()[0].name.as_deref(), Some("dev"));
    assert!(!resolution.has_warnings());
}

/// SCENARIO: a mistyped FPSYNC_CONFIG fails instead of using the home config
#[test]
fn scenario_mistyped_config_path_is_an_error() {
    let guard = ProcessEnvGuard::acquire();
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".fpsyncrc.toml"), HOME_CONFIG).unwrap();
    let missing = home.path().join("wrok.toml");
    guard.set("FPSYNC_TEST_HOME", home.path());
    guard.set("FPSYNC_CONFIG", &missing);

    match resolve_discovered(&defaults(), &ResolverOptions::new()).unwrap_err() {
        FpsyncError::ConfigNotFound { searched } => assert_eq!(searched, vec![missing]),
        other => panic!("expected ConfigNotFound, got {:?}", other),
    }
}
