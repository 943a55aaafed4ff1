//! SyncTaskSpec entity - one synchronization unit handed to the executor
//!
//! A task pairs two roots with the top-level items kept aligned between them.
//! Tasks are built by the merger, validated once, and never mutated after.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SyncDirection;

/// One synchronization unit: two roots and the items shared between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncTaskSpec {
    /// Optional label, used in diagnostics and by platform extras
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The "local" side
    pub source_root: String,
    /// The "other" side: a path or a `host:path` remote descriptor
    pub target_root: String,
    /// Leaf names that live directly under both roots
    pub items: Vec<String>,
    /// Optional file of exclusion patterns passed to the transfer tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_from: Option<String>,
}

impl SyncTaskSpec {
    /// `(from, to)` roots for the given direction
    pub fn endpoints(&self, direction: SyncDirection) -> (&str, &str) {
        match direction {
            SyncDirection::Up => (&self.source_root, &self.target_root),
            SyncDirection::Down => (&self.target_root, &self.source_root),
        }
    }

    /// Whether `item` is already tracked by this task
    pub fn contains_item(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    /// Returns a copy with `item` appended, unless already present.
    pub fn with_item(&self, item: &str) -> Self {
        let mut next = self.clone();
        if !next.contains_item(item) {
            next.items.push(item.to_string());
        }
        next
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

/// Identifies a task in diagnostics: its position in the resolved order
/// and its name when it has one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TaskRef {
    /// Zero-based position in resolution order
    pub index: usize,
    pub name: Option<String>,
}

impl TaskRef {
    pub fn new(index: usize, name: Option<String>) -> Self {
        Self { index, name }
    }

    pub fn of(index: usize, task: &SyncTaskSpec) -> Self {
        Self::new(index, task.name.clone())
    }
}

impl fmt::Display for TaskRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "task #{} '{}'", self.index + 1, name),
            None => write!(f, "task #{}", self.index + 1),
        }
    }
}

/// Ordered list of validated tasks, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedConfig(Vec<SyncTaskSpec>);

impl ResolvedConfig {
    pub fn new(tasks: Vec<SyncTaskSpec>) -> Self {
        Self(tasks)
    }

    pub fn tasks(&self) -> &[SyncTaskSpec] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyncTaskSpec> {
        self.0.iter()
    }

    pub fn into_tasks(self) -> Vec<SyncTaskSpec> {
        self.0
    }

    /// Serialize for an executor running in another process
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl IntoIterator for ResolvedConfig {
    type Item = SyncTaskSpec;
    type IntoIter = std::vec::IntoIter<SyncTaskSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResolvedConfig {
    type Item = &'a SyncTaskSpec;
    type IntoIter = std::slice::Iter<'a, SyncTaskSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
