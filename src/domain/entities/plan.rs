//! Sync plan entities
//!
//! A `SyncPlan` is what user configuration produces from the injected
//! `SyncDefaults`: ordered task fragments against a base, bulk expansions,
//! and platform-conditional extras. The merger turns a plan into tasks.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{PlatformFamily, ValidationMode};

/// The injected namespace every configuration sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncDefaults {
    /// Remote host (anything the transfer tool accepts before `:`)
    pub host: String,
    /// Root directory on the remote host
    pub start_dir: String,
    /// Default exclusion-pattern file, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excludes: Option<String>,
}

impl SyncDefaults {
    pub fn new(host: impl Into<String>, start_dir: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            start_dir: start_dir.into(),
            excludes: None,
        }
    }

    pub fn with_excludes(mut self, excludes: impl Into<String>) -> Self {
        self.excludes = Some(excludes.into());
        self
    }

    /// `host:start_dir`, the remote counterpart of the local home
    pub fn server_home(&self) -> String {
        format!("{}:{}", self.host, self.start_dir)
    }

    /// Substitute `{host}`, `{start_dir}`, `{excludes}` and `{server_home}`.
    ///
    /// Unknown placeholders are left as written. `{excludes}` becomes empty
    /// when no exclusion file is configured.
    pub fn interpolate(&self, template: &str) -> String {
        if !template.contains('{') {
            return template.to_string();
        }
        template
            .replace("{server_home}", &self.server_home())
            .replace("{host}", &self.host)
            .replace("{start_dir}", &self.start_dir)
            .replace("{excludes}", self.excludes.as_deref().unwrap_or(""))
    }
}

/// Fields every task inherits unless a fragment overrides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBase {
    pub source_root: String,
    pub target_root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_from: Option<String>,
}

impl TaskBase {
    pub fn new(source_root: impl Into<String>, target_root: impl Into<String>) -> Self {
        Self {
            source_root: source_root.into(),
            target_root: target_root.into(),
            exclude_from: None,
        }
    }

    /// Home directory mirrored to `host:start_dir`, using the default excludes.
    pub fn from_defaults(defaults: &SyncDefaults) -> Self {
        Self {
            source_root: "~".to_string(),
            target_root: defaults.server_home(),
            exclude_from: defaults.excludes.clone(),
        }
    }

    pub fn with_exclude_from(mut self, path: impl Into<String>) -> Self {
        self.exclude_from = Some(path.into());
        self
    }
}

/// How a fragment treats the inherited `exclude_from`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExcludeOverride {
    #[default]
    Inherit,
    Set(String),
    /// Sync this task without any exclusion file
    Clear,
}

/// One override: the items of a task plus any fields it replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFragment {
    pub name: Option<String>,
    pub items: Vec<String>,
    pub source_root: Option<String>,
    pub target_root: Option<String>,
    /// Joined onto both roots after overrides are applied
    pub subdir: Option<String>,
    pub exclude_from: ExcludeOverride,
}

impl TaskFragment {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Items from a whitespace-separated list, e.g. a multi-line string
    pub fn from_words(words: &str) -> Self {
        Self::new(words.split_whitespace())
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn source_root(mut self, root: impl Into<String>) -> Self {
        self.source_root = Some(root.into());
        self
    }

    pub fn target_root(mut self, root: impl Into<String>) -> Self {
        self.target_root = Some(root.into());
        self
    }

    pub fn subdir(mut self, subdir: impl Into<String>) -> Self {
        self.subdir = Some(subdir.into());
        self
    }

    pub fn exclude_from(mut self, path: impl Into<String>) -> Self {
        self.exclude_from = ExcludeOverride::Set(path.into());
        self
    }

    pub fn without_excludes(mut self) -> Self {
        self.exclude_from = ExcludeOverride::Clear;
        self
    }
}

/// Appends `item` to the task named `task` when running on `platform`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformExtra {
    pub platform: PlatformFamily,
    pub task: String,
    pub item: String,
}

/// One ordered entry of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    /// A single task built from one fragment
    Task { base: TaskBase, fragment: TaskFragment },
    /// One single-item task per name, all sharing `base`
    Bulk { base: TaskBase, names: Vec<String> },
}

/// Output of user configuration logic, consumed by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Sentinel path that must exist before anything syncs
    pub must_exist: Option<String>,
    /// Validation mode requested by the configuration itself
    pub mode: Option<ValidationMode>,
    pub entries: Vec<PlanEntry>,
    pub platform_extras: Vec<PlatformExtra>,
}

impl SyncPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn must_exist(mut self, path: impl Into<String>) -> Self {
        self.must_exist = Some(path.into());
        self
    }

    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn task(mut self, base: &TaskBase, fragment: TaskFragment) -> Self {
        self.entries.push(PlanEntry::Task {
            base: base.clone(),
            fragment,
        });
        self
    }

    pub fn bulk<I, S>(mut self, base: &TaskBase, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push(PlanEntry::Bulk {
            base: base.clone(),
            names: names.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn platform_extra(
        mut self,
        platform: PlatformFamily,
        task: impl Into<String>,
        item: impl Into<String>,
    ) -> Self {
        self.platform_extras.push(PlatformExtra {
            platform,
            task: task.into(),
            item: item.into(),
        });
        self
    }
}
