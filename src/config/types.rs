//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{SyncDefaults, SyncPlan, TaskBase, TaskFragment};
use crate::domain::ports::ConfigSource;
use crate::domain::services::join;
use crate::domain::value_objects::{ConfigWarning, PlatformFamily, ValidationMode};
use crate::error::FpsyncResult;

use super::loader;

/// Redefinitions of the injected defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excludes: Option<String>,
}

impl DefaultsConfig {
    /// The injected defaults with every redefined field replaced
    pub fn apply(&self, injected: &SyncDefaults) -> SyncDefaults {
        SyncDefaults {
            host: self.host.clone().unwrap_or_else(|| injected.host.clone()),
            start_dir: self
                .start_dir
                .clone()
                .unwrap_or_else(|| injected.start_dir.clone()),
            excludes: match &self.excludes {
                Some(e) if e.is_empty() => None,
                Some(e) => Some(e.clone()),
                None => injected.excludes.clone(),
            },
        }
    }
}

/// The `[base]` table. Unset fields come from [`TaskBase::from_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_from: Option<String>,
}

/// Item names, as an array or as one whitespace-separated string.
///
/// Supports both forms:
///   items = ["mc", "flake8"]
///   items = """
///     mc flake8
///   """
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemList(pub Vec<String>);

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ItemListDe {
    List(Vec<String>),
    Words(String),
}

impl<'de> Deserialize<'de> for ItemList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match ItemListDe::deserialize(deserializer)? {
            ItemListDe::List(items) => Ok(Self(items)),
            ItemListDe::Words(words) => Ok(Self(
                words.split_whitespace().map(str::to_string).collect(),
            )),
        }
    }
}

impl ItemList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One `[[task]]` table: a single task (`items`) or a bulk expansion (`each`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub each: Option<ItemList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_root: Option<String>,
    /// An empty string syncs the task without any exclusion file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_from: Option<String>,
}

impl TaskConfig {
    pub fn is_bulk(&self) -> bool {
        self.each.is_some()
    }

    fn fragment(&self, defaults: &SyncDefaults) -> TaskFragment {
        let items = self.items.clone().unwrap_or_default().0;
        let mut fragment = TaskFragment::new(items);
        if let Some(name) = &self.name {
            fragment = fragment.named(name.clone());
        }
        if let Some(root) = &self.source_root {
            fragment = fragment.source_root(defaults.interpolate(root));
        }
        if let Some(root) = &self.target_root {
            fragment = fragment.target_root(defaults.interpolate(root));
        }
        if let Some(subdir) = &self.subdir {
            fragment = fragment.subdir(defaults.interpolate(subdir));
        }
        match self.exclude_from.as_deref() {
            Some("") => fragment.without_excludes(),
            Some(path) => fragment.exclude_from(defaults.interpolate(path)),
            None => fragment,
        }
    }

    /// Base for a bulk entry: the shared base with this table's overrides.
    fn bulk_base(&self, base: &TaskBase, defaults: &SyncDefaults) -> TaskBase {
        let mut source_root = self
            .source_root
            .as_deref()
            .map(|r| defaults.interpolate(r))
            .unwrap_or_else(|| base.source_root.clone());
        let mut target_root = self
            .target_root
            .as_deref()
            .map(|r| defaults.interpolate(r))
            .unwrap_or_else(|| base.target_root.clone());
        if let Some(subdir) = &self.subdir {
            let subdir = defaults.interpolate(subdir);
            source_root = join(&source_root, &subdir);
            target_root = join(&target_root, &subdir);
        }
        let exclude_from = match self.exclude_from.as_deref() {
            Some("") => None,
            Some(path) => Some(defaults.interpolate(path)),
            None => base.exclude_from.clone(),
        };
        TaskBase {
            source_root,
            target_root,
            exclude_from,
        }
    }
}

/// Main configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must_exist: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ValidationMode>,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default, rename = "task")]
    pub tasks: Vec<TaskConfig>,

    #[serde(default, rename = "platform_extra")]
    pub platform_extras: Vec<PlatformExtraConfig>,
}

/// One `[[platform_extra]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformExtraConfig {
    pub platform: PlatformFamily,
    pub task: String,
    pub item: String,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FpsyncResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FpsyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (FPSYNC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// The base every `[[task]]` inherits from
    pub fn task_base(&self, defaults: &SyncDefaults) -> TaskBase {
        let derived = TaskBase::from_defaults(defaults);
        TaskBase {
            source_root: self
                .base
                .source_root
                .as_deref()
                .map(|r| defaults.interpolate(r))
                .unwrap_or(derived.source_root),
            target_root: self
                .base
                .target_root
                .as_deref()
                .map(|r| defaults.interpolate(r))
                .unwrap_or(derived.target_root),
            exclude_from: match self.base.exclude_from.as_deref() {
                Some("") => None,
                Some(path) => Some(defaults.interpolate(path)),
                None => derived.exclude_from,
            },
        }
    }

    /// Build the plan this file describes from the injected defaults.
    pub fn plan(&self, injected: &SyncDefaults) -> SyncPlan {
        let defaults = self.defaults.apply(injected);
        let base = self.task_base(&defaults);

        let mut plan = SyncPlan::new();
        if let Some(path) = &self.must_exist {
            plan = plan.must_exist(defaults.interpolate(path));
        }
        if let Some(mode) = self.mode {
            plan = plan.mode(mode);
        }

        for task in &self.tasks {
            plan = match &task.each {
                Some(names) => plan.bulk(&task.bulk_base(&base, &defaults), names.0.clone()),
                None => plan.task(&base, task.fragment(&defaults)),
            };
        }

        for extra in &self.platform_extras {
            plan = plan.platform_extra(extra.platform, extra.task.clone(), extra.item.clone());
        }

        plan
    }
}

impl ConfigSource for ConfigFile {
    fn build(&self, defaults: &SyncDefaults) -> SyncPlan {
        self.plan(defaults)
    }
}
