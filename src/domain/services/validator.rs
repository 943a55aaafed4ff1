//! Config validator
//!
//! Checks, in order:
//! 1. the must-exist precondition (fatal; nothing else runs without it)
//! 2. no item is blank, `.` or `..` (platform extras land after merging)
//! 3. no item is a nested path
//! 4. no item ends with a path separator
//! 5. the exclusion file exists (fatal only in strict mode)
//!
//! Each task is checked exhaustively. Across tasks, strict mode stops at the
//! first broken task while permissive mode reports every task.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::domain::entities::{EnvironmentPrecondition, SyncTaskSpec, TaskRef};
use crate::domain::policies::ValidationPolicy;
use crate::domain::ports::FileSystem;
use crate::domain::services::merger::{item_name_problem, MergedTask};
use crate::domain::services::path_resolver::{ends_with_separator, is_path_separator};
use crate::domain::value_objects::{ConfigWarning, ExcludePatterns, ResolveError};

/// Errors and warnings for a single task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskReport {
    pub errors: Vec<ResolveError>,
    pub warnings: Vec<ConfigWarning>,
}

impl TaskReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome of validating a list of tasks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ResolveError>,
    pub warnings: Vec<ConfigWarning>,
    /// Positions (in the validated slice) of tasks without errors
    pub passed: Vec<usize>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn precondition_failed(error: ResolveError) -> Self {
        Self {
            errors: vec![error],
            warnings: Vec::new(),
            passed: Vec::new(),
        }
    }
}

/// Validates tasks against a [`ValidationPolicy`], using `fs` for the
/// existence checks and to read exclusion files.
pub struct ConfigValidator<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    policy: ValidationPolicy,
}

impl<'a, F: FileSystem + ?Sized> ConfigValidator<'a, F> {
    pub fn new(fs: &'a F, policy: ValidationPolicy) -> Self {
        Self { fs, policy }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn check_precondition(
        &self,
        precondition: &EnvironmentPrecondition,
    ) -> Result<(), ResolveError> {
        if self.fs.exists(precondition.resolved()) {
            Ok(())
        } else {
            Err(ResolveError::Precondition {
                path: precondition.must_exist().to_string(),
                checked: precondition.resolved().to_string_lossy().into_owned(),
            })
        }
    }

    /// Validate `tasks` in order, after checking the optional precondition.
    ///
    /// Tasks are identified by their position in `tasks`.
    pub fn validate(
        &self,
        tasks: &[SyncTaskSpec],
        precondition: Option<&EnvironmentPrecondition>,
    ) -> ValidationReport {
        if let Some(precondition) = precondition {
            if let Err(err) = self.check_precondition(precondition) {
                return ValidationReport::precondition_failed(err);
            }
        }
        self.validate_all(
            tasks
                .iter()
                .enumerate()
                .map(|(i, task)| (TaskRef::of(i, task), task)),
        )
    }

    /// Validate merged tasks, keeping the references assigned during merging.
    pub fn validate_merged(&self, tasks: &[MergedTask]) -> ValidationReport {
        self.validate_all(tasks.iter().map(|t| (t.task_ref.clone(), &t.spec)))
    }

    fn validate_all<'t>(
        &self,
        tasks: impl Iterator<Item = (TaskRef, &'t SyncTaskSpec)>,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (position, (task_ref, task)) in tasks.enumerate() {
            let task_report = self.validate_task(&task_ref, task);
            let valid = task_report.is_valid();

            report.errors.extend(task_report.errors);
            report.warnings.extend(task_report.warnings);

            if valid {
                report.passed.push(position);
            } else if self.policy.fail_fast() {
                debug!(task = %task_ref, "stopping validation at first invalid task");
                break;
            }
        }

        report
    }

    /// Check every item and the exclusion file of one task.
    pub fn validate_task(&self, task_ref: &TaskRef, task: &SyncTaskSpec) -> TaskReport {
        let mut report = TaskReport::default();

        let mut named = Vec::with_capacity(task.items.len());
        for (i, item) in task.items.iter().enumerate() {
            match item_name_problem(item, i + 1) {
                Some(reason) => report.errors.push(ResolveError::Config {
                    task: task_ref.clone(),
                    reason,
                }),
                None => named.push(item),
            }
        }

        for &item in &named {
            let bare = item.trim_end_matches(is_path_separator);
            if bare.contains(is_path_separator) {
                report.errors.push(ResolveError::NestedItem {
                    task: task_ref.clone(),
                    item: item.clone(),
                });
            }
        }

        for &item in &named {
            if ends_with_separator(item) {
                report.errors.push(ResolveError::TrailingSeparator {
                    task: task_ref.clone(),
                    item: item.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for item in &task.items {
            if !seen.insert(item.as_str()) {
                report.warnings.push(ConfigWarning::DuplicateItem {
                    task: task_ref.clone(),
                    item: item.clone(),
                });
            }
        }

        if let Some(exclude_from) = task.exclude_from.as_deref() {
            self.check_exclude_file(task_ref, task, exclude_from, &mut report);
        }

        report
    }

    fn check_exclude_file(
        &self,
        task_ref: &TaskRef,
        task: &SyncTaskSpec,
        exclude_from: &str,
        report: &mut TaskReport,
    ) {
        let path = Path::new(exclude_from);

        if !self.fs.exists(path) {
            if self.policy.missing_exclude_is_fatal() {
                report.errors.push(ResolveError::MissingExcludeFile {
                    task: task_ref.clone(),
                    path: exclude_from.to_string(),
                });
            } else {
                report.warnings.push(ConfigWarning::MissingExcludeFile {
                    task: task_ref.clone(),
                    path: exclude_from.to_string(),
                });
            }
            return;
        }

        match ExcludePatterns::load(self.fs, path) {
            Ok(patterns) => {
                for item in &task.items {
                    if patterns.excludes_item(item.trim_end_matches(is_path_separator)) {
                        report.warnings.push(ConfigWarning::ItemExcluded {
                            task: task_ref.clone(),
                            item: item.clone(),
                            exclude_file: exclude_from.to_string(),
                        });
                    }
                }
            }
            Err(err) => report.warnings.push(ConfigWarning::UnreadableExcludeFile {
                task: task_ref.clone(),
                path: exclude_from.to_string(),
                message: err.to_string(),
            }),
        }
    }
}
