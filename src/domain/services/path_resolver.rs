//! Path resolver
//!
//! Expands `~` and environment references in configured paths and joins
//! segments. Nothing here touches the filesystem; the only lookups go
//! through the [`Environment`] port.
//!
//! Trailing separators are significant to the transfer tool (`dir` syncs the
//! directory, `dir/` syncs only its contents), so neither expansion nor
//! joining ever adds or removes one at the end of a path.

use std::path::{is_separator, Path, MAIN_SEPARATOR};

use crate::domain::entities::SyncTaskSpec;
use crate::domain::ports::Environment;

/// Split a `host:path` remote descriptor into its parts.
///
/// Returns `None` for local paths, including Windows drive letters (`C:\x`)
/// and relative paths whose first segment happens to contain a colon.
pub fn remote_parts(location: &str) -> Option<(&str, &str)> {
    let (host, path) = location.split_once(':')?;
    if host.is_empty() || host.chars().any(is_path_separator) {
        return None;
    }
    if host.len() == 1 && host.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((host, path))
}

/// Whether `location` names a path on another host
pub fn is_remote(location: &str) -> bool {
    remote_parts(location).is_some()
}

/// `/` everywhere, plus the platform's own separator(s)
pub(crate) fn is_path_separator(c: char) -> bool {
    c == '/' || is_separator(c)
}

pub(crate) fn ends_with_separator(s: &str) -> bool {
    s.chars().last().is_some_and(is_path_separator)
}

/// Join `segment` onto `base`.
///
/// - An empty segment returns `base` unchanged.
/// - An absolute segment replaces the path (for remotes, the path after `:`).
/// - A separator is inserted only if `base` does not already end with one;
///   remote descriptors always use `/`.
/// - Whatever trailing separator `segment` has (or lacks) is preserved.
pub fn join(base: &str, segment: &str) -> String {
    if segment.is_empty() {
        return base.to_string();
    }
    if base.is_empty() {
        return segment.to_string();
    }

    if let Some((host, path)) = remote_parts(base) {
        if segment.starts_with('/') {
            return format!("{}:{}", host, segment);
        }
        if path.is_empty() || ends_with_separator(path) {
            return format!("{}{}", base, segment);
        }
        return format!("{}/{}", base, segment);
    }

    if Path::new(segment).is_absolute() {
        return segment.to_string();
    }
    if ends_with_separator(base) {
        format!("{}{}", base, segment)
    } else {
        format!("{}{}{}", base, MAIN_SEPARATOR, segment)
    }
}

/// Expands home and environment references using an [`Environment`].
#[derive(Debug, Clone)]
pub struct PathResolver<E> {
    env: E,
}

impl<E: Environment> PathResolver<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Expand a path string.
    ///
    /// Remote descriptors are returned unchanged: a `~` after `host:` is the
    /// remote user's home, not ours.
    pub fn expand(&self, input: &str) -> String {
        if is_remote(input) {
            return input.to_string();
        }
        let homed = self.expand_home(input);
        self.expand_vars(&homed)
    }

    /// Replace a leading `~` or `~/` with the home directory.
    ///
    /// `~user` forms and an unknown home are left as written.
    pub fn expand_home(&self, input: &str) -> String {
        let Some(rest) = input.strip_prefix('~') else {
            return input.to_string();
        };
        if !(rest.is_empty() || rest.starts_with(is_path_separator)) {
            return input.to_string();
        }
        let Some(home) = self.env.home_dir() else {
            return input.to_string();
        };
        let home = home.to_string_lossy();
        if rest.is_empty() {
            return home.into_owned();
        }
        let trimmed = home.trim_end_matches(is_path_separator);
        format!("{}{}", trimmed, rest)
    }

    /// Replace `$NAME` and `${NAME}` with variable values.
    ///
    /// Undefined variables and malformed references are kept verbatim.
    pub fn expand_vars(&self, input: &str) -> String {
        if !input.contains('$') {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
                match braced.find('}') {
                    Some(end) if is_var_name(&braced[..end]) => (&braced[..end], end + 2),
                    _ => ("", 0),
                }
            } else {
                let len = var_name_len(after);
                (&after[..len], len)
            };

            if consumed == 0 {
                out.push('$');
                rest = after;
                continue;
            }

            match self.env.var(name) {
                Some(value) => out.push_str(&value),
                None => out.push_str(&rest[pos..pos + 1 + consumed]),
            }
            rest = &after[consumed..];
        }

        out.push_str(rest);
        out
    }

    /// Expand the local paths of a task; items and remote roots are untouched.
    pub fn resolve_task(&self, task: &SyncTaskSpec) -> SyncTaskSpec {
        SyncTaskSpec {
            name: task.name.clone(),
            source_root: self.expand(&task.source_root),
            target_root: self.expand(&task.target_root),
            items: task.items.clone(),
            exclude_from: task.exclude_from.as_deref().map(|p| self.expand(p)),
        }
    }
}

fn var_name_len(s: &str) -> usize {
    let mut len = 0;
    for (i, c) in s.char_indices() {
        let ok = if i == 0 {
            c == '_' || c.is_ascii_alphabetic()
        } else {
            c == '_' || c.is_ascii_alphanumeric()
        };
        if !ok {
            break;
        }
        len = i + c.len_utf8();
    }
    len
}

fn is_var_name(s: &str) -> bool {
    !s.is_empty() && var_name_len(s) == s.len()
}
