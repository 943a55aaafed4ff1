//! Config merger
//!
//! Turns a [`SyncPlan`] into tasks:
//! - a fragment copies every field it does not set from its base
//! - a bulk entry becomes one single-item task per name
//! - platform extras append an item to the named task(s) when the platform
//!   matches, never twice
//!
//! Every function here is pure; the inputs are never modified.

use std::collections::HashSet;

use crate::domain::entities::{
    ExcludeOverride, PlanEntry, PlatformExtra, SyncPlan, SyncTaskSpec, TaskBase, TaskFragment,
    TaskRef,
};
use crate::domain::services::path_resolver::{is_path_separator, join};
use crate::domain::value_objects::{ConfigErrorReason, ConfigWarning, PlatformFamily, ResolveError};

/// A merged task together with its position in configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTask {
    pub task_ref: TaskRef,
    pub spec: SyncTaskSpec,
}

/// Result of merging a whole plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub tasks: Vec<MergedTask>,
    pub errors: Vec<ResolveError>,
    pub warnings: Vec<ConfigWarning>,
}

/// Build one task from `base` and `fragment`.
///
/// Roots are taken from the fragment when it sets them, from the base
/// otherwise; `subdir` is then joined onto both.
pub fn merge_fragment(
    base: &TaskBase,
    fragment: &TaskFragment,
    task_ref: &TaskRef,
) -> Result<SyncTaskSpec, ResolveError> {
    check_items(&fragment.items, task_ref)?;

    let mut source_root = fragment
        .source_root
        .clone()
        .unwrap_or_else(|| base.source_root.clone());
    let mut target_root = fragment
        .target_root
        .clone()
        .unwrap_or_else(|| base.target_root.clone());

    if let Some(subdir) = fragment.subdir.as_deref() {
        source_root = join(&source_root, subdir);
        target_root = join(&target_root, subdir);
    }

    let exclude_from = match &fragment.exclude_from {
        ExcludeOverride::Inherit => base.exclude_from.clone(),
        ExcludeOverride::Set(path) => Some(path.clone()),
        ExcludeOverride::Clear => None,
    };

    Ok(SyncTaskSpec {
        name: fragment.name.clone(),
        source_root,
        target_root,
        items: fragment.items.clone(),
        exclude_from,
    })
}

/// One single-item fragment per name, each named after its item.
pub fn expand_bulk<S: AsRef<str>>(names: &[S]) -> Vec<TaskFragment> {
    names
        .iter()
        .map(|name| TaskFragment::new([name.as_ref()]).named(name.as_ref()))
        .collect()
}

/// Append platform extras to the tasks they name, returning a new list.
///
/// Extras for other platforms are skipped. An item already present is not
/// appended again, so applying the same extras twice changes nothing.
pub fn augment_for_platform(
    tasks: &[SyncTaskSpec],
    platform: PlatformFamily,
    extras: &[PlatformExtra],
) -> Vec<SyncTaskSpec> {
    let active: Vec<&PlatformExtra> = extras.iter().filter(|e| e.platform == platform).collect();

    tasks
        .iter()
        .map(|task| {
            active
                .iter()
                .filter(|extra| task.is_named(&extra.task))
                .fold(task.clone(), |acc, extra| acc.with_item(&extra.item))
        })
        .collect()
}

/// Merge every entry of `plan`, in order.
///
/// With `fail_fast`, merging stops at the first malformed fragment;
/// otherwise all malformed fragments are reported and the rest are kept.
pub fn merge_plan(plan: &SyncPlan, platform: PlatformFamily, fail_fast: bool) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    let mut index = 0usize;

    'entries: for entry in &plan.entries {
        let (base, fragments) = match entry {
            PlanEntry::Task { base, fragment } => (base, vec![fragment.clone()]),
            PlanEntry::Bulk { base, names } => {
                if names.is_empty() {
                    outcome.errors.push(ResolveError::Config {
                        task: TaskRef::new(index, None),
                        reason: ConfigErrorReason::EmptyItems,
                    });
                    index += 1;
                    if fail_fast {
                        break 'entries;
                    }
                    continue;
                }
                (base, expand_bulk(names.as_slice()))
            }
        };

        for fragment in &fragments {
            let task_ref = TaskRef::new(index, fragment.name.clone());
            index += 1;
            match merge_fragment(base, fragment, &task_ref) {
                Ok(spec) => outcome.tasks.push(MergedTask { task_ref, spec }),
                Err(err) => {
                    outcome.errors.push(err);
                    if fail_fast {
                        break 'entries;
                    }
                }
            }
        }
    }

    let mut known_names: HashSet<&str> = HashSet::new();
    for entry in &plan.entries {
        match entry {
            PlanEntry::Task { fragment, .. } => known_names.extend(fragment.name.as_deref()),
            PlanEntry::Bulk { names, .. } => known_names.extend(names.iter().map(String::as_str)),
        }
    }
    for extra in &plan.platform_extras {
        if !known_names.contains(extra.task.as_str()) {
            outcome.warnings.push(ConfigWarning::UnmatchedPlatformExtra {
                task_name: extra.task.clone(),
                item: extra.item.clone(),
            });
        }
    }

    let specs: Vec<SyncTaskSpec> = outcome.tasks.iter().map(|t| t.spec.clone()).collect();
    let augmented = augment_for_platform(&specs, platform, &plan.platform_extras);
    for (merged, spec) in outcome.tasks.iter_mut().zip(augmented) {
        merged.spec = spec;
    }

    outcome
}

fn check_items(items: &[String], task_ref: &TaskRef) -> Result<(), ResolveError> {
    let fail = |reason| ResolveError::Config {
        task: task_ref.clone(),
        reason,
    };

    if items.is_empty() {
        return Err(fail(ConfigErrorReason::EmptyItems));
    }
    for (i, item) in items.iter().enumerate() {
        if let Some(reason) = item_name_problem(item, i + 1) {
            return Err(fail(reason));
        }
    }
    Ok(())
}

/// Why `item` (1-based `position`) cannot name an entry, if it cannot.
pub(crate) fn item_name_problem(item: &str, position: usize) -> Option<ConfigErrorReason> {
    if item.trim().is_empty() {
        return Some(ConfigErrorReason::BlankItem { position });
    }
    let bare = item.trim_end_matches(is_path_separator);
    if bare == "." || bare == ".." {
        return Some(ConfigErrorReason::ReservedItem {
            item: item.to_string(),
        });
    }
    None
}
