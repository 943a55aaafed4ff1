//! Configuration loading and discovery

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::{Environment, FileSystem};
use crate::domain::value_objects::ConfigWarning;
use crate::error::{FpsyncError, FpsyncResult};
use crate::infrastructure::{LocalFs, ProcessEnv};

use super::env_validator::levenshtein;
use super::types::ConfigFile;

/// Explicit config file path
pub const CONFIG_ENV_VAR: &str = "FPSYNC_CONFIG";

/// Candidate locations under the home directory, in lookup order
pub const HOME_CONFIG_PATHS: &[&str] = &[".fpsyncrc.toml", "usr/etc/fpsyncrc.toml"];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FpsyncResult<(ConfigFile, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse configuration text; `path` is only used in messages.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> FpsyncResult<(ConfigFile, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: ConfigFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FpsyncError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    check_tasks(&config, path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the config file: `FPSYNC_CONFIG` if set, the home candidates
/// otherwise.
///
/// An explicit `FPSYNC_CONFIG` that names no file is an error; the home
/// candidates are not tried.
pub fn discover<F, E>(fs: &F, env: &E) -> FpsyncResult<PathBuf>
where
    F: FileSystem + ?Sized,
    E: Environment,
{
    if let Some(explicit) = env.var(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        let path = PathBuf::from(explicit);
        if fs.is_file(&path) {
            return Ok(path);
        }
        return Err(FpsyncError::ConfigNotFound {
            searched: vec![path],
        });
    }

    let mut searched = Vec::new();
    if let Some(home) = env.home_dir() {
        for candidate in HOME_CONFIG_PATHS {
            let path = home.join(candidate);
            if fs.is_file(&path) {
                debug!(path = %path.display(), "found config file");
                return Ok(path);
            }
            searched.push(path);
        }
    }

    Err(FpsyncError::ConfigNotFound { searched })
}

/// Discover and load the config file, with environment overrides applied.
pub fn load_discovered() -> FpsyncResult<(ConfigFile, Vec<ConfigWarning>)> {
    let path = discover(&LocalFs, &ProcessEnv)?;
    let (config, warnings) = load_with_warnings(&path)?;
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (FPSYNC_* prefix)
pub fn with_env_overrides(config: ConfigFile) -> ConfigFile {
    with_env_overrides_from(config, &ProcessEnv)
}

/// Apply overrides read from `env`
pub fn with_env_overrides_from<E: Environment>(mut config: ConfigFile, env: &E) -> ConfigFile {
    // FPSYNC_HOST
    if let Some(host) = env.var("FPSYNC_HOST").filter(|v| !v.is_empty()) {
        config.defaults.host = Some(host);
    }

    // FPSYNC_START_DIR
    if let Some(start_dir) = env.var("FPSYNC_START_DIR").filter(|v| !v.is_empty()) {
        config.defaults.start_dir = Some(start_dir);
    }

    // FPSYNC_EXCLUDES (empty disables the default exclusion file)
    if let Some(excludes) = env.var("FPSYNC_EXCLUDES") {
        config.defaults.excludes = Some(excludes);
    }

    config
}

fn check_tasks(config: &ConfigFile, path: &Path) -> FpsyncResult<()> {
    for (i, task) in config.tasks.iter().enumerate() {
        if task.items.is_some() && task.each.is_some() {
            return Err(FpsyncError::ConfigParse {
                file: path.to_path_buf(),
                message: format!("task #{} sets both 'items' and 'each'", i + 1),
            });
        }
    }
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "must_exist",
        "mode",
        "defaults",
        "host",
        "start_dir",
        "excludes",
        "base",
        "source_root",
        "target_root",
        "exclude_from",
        "task",
        "name",
        "items",
        "each",
        "subdir",
        "platform_extra",
        "platform",
        "item",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
