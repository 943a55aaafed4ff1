//! Resolve Use Case
//!
//! Orchestrates one resolution pass:
//! 1. Build the plan from the injected defaults
//! 2. Check the must-exist precondition (aborts with a single error)
//! 3. Merge fragments and bulk entries, apply platform extras
//! 4. Expand local paths
//! 5. Validate items and exclusion files
//! 6. In strict mode, report only the earliest broken task
//!
//! All rules live in domain services; this type only sequences them.

use tracing::{debug, info, warn};

use crate::config::{self, EnvVarValidator, VALIDATION_MODE_VAR};
use crate::domain::entities::{EnvironmentPrecondition, ResolvedConfig, SyncDefaults, SyncTaskSpec};
use crate::domain::policies::ValidationPolicy;
use crate::domain::ports::{ConfigSource, Environment, FileSystem, PlatformProbe};
use crate::domain::services::{merge_plan, ConfigValidator, MergedTask, PathResolver};
use crate::domain::value_objects::ValidationMode;
use crate::error::{FpsyncResult, ResolveFailure};
use crate::infrastructure::{HostPlatform, LocalFs, ProcessEnv};

use super::options::ResolverOptions;
use super::result::Resolution;

/// Resolver wired to the real disk, process environment and host platform
pub type HostResolver = ConfigResolver<LocalFs, ProcessEnv, HostPlatform>;

/// Resolve use case, parameterized by its ports
pub struct ConfigResolver<FS, E, P>
where
    FS: FileSystem,
    E: Environment,
    P: PlatformProbe,
{
    file_system: FS,
    env: E,
    probe: P,
}

impl HostResolver {
    pub fn host() -> Self {
        Self::new(LocalFs, ProcessEnv, HostPlatform)
    }
}

impl<FS, E, P> ConfigResolver<FS, E, P>
where
    FS: FileSystem,
    E: Environment,
    P: PlatformProbe,
{
    pub fn new(file_system: FS, env: E, probe: P) -> Self {
        Self {
            file_system,
            env,
            probe,
        }
    }

    /// Resolve `source` against `defaults`.
    ///
    /// Returns every task or none: on failure, `ResolveFailure::usable`
    /// carries the tasks that passed, in permissive mode only.
    pub fn resolve<S>(
        &self,
        defaults: &SyncDefaults,
        source: &S,
        options: &ResolverOptions,
    ) -> Result<Resolution, ResolveFailure>
    where
        S: ConfigSource + ?Sized,
    {
        let plan = source.build(defaults);
        let mode = options.effective_mode(self.env_mode(), plan.mode);
        let policy = ValidationPolicy::new(mode);
        let platform = options.platform.unwrap_or_else(|| self.probe.family());
        let paths = PathResolver::new(&self.env);
        let validator = ConfigValidator::new(&self.file_system, policy);

        info!(
            host = %defaults.host,
            entries = plan.entries.len(),
            %mode,
            %platform,
            "resolving sync configuration"
        );

        let must_exist = options.must_exist.as_ref().or(plan.must_exist.as_ref());
        if let Some(raw) = must_exist {
            let precondition = EnvironmentPrecondition::new(raw.clone(), paths.expand(raw));
            if let Err(err) = validator.check_precondition(&precondition) {
                warn!(path = %raw, "precondition failed");
                return Err(ResolveFailure::new(vec![err]));
            }
            debug!(path = %precondition.resolved().display(), "precondition satisfied");
        }

        // Never fail fast here: strict mode picks the earliest broken task
        // once validation has run too.
        let merged = merge_plan(&plan, platform, false);
        let mut errors = merged.errors;
        let mut warnings = merged.warnings;

        let expanded: Vec<MergedTask> = merged
            .tasks
            .into_iter()
            .map(|task| MergedTask {
                spec: paths.resolve_task(&task.spec),
                task_ref: task.task_ref,
            })
            .collect();

        let report = validator.validate_merged(&expanded);
        errors.extend(report.errors);
        warnings.extend(report.warnings);

        for warning in &warnings {
            warn!(%warning, "configuration warning");
        }

        if errors.is_empty() {
            let tasks: Vec<SyncTaskSpec> = expanded.into_iter().map(|t| t.spec).collect();
            info!(tasks = tasks.len(), "configuration resolved");
            return Ok(Resolution {
                tasks: ResolvedConfig::new(tasks),
                warnings,
                mode,
                platform,
            });
        }

        // Stable: errors of one task keep their check order.
        errors.sort_by_key(|e| e.task().map(|t| t.index));

        if policy.fail_fast() {
            let first = errors[0].task().map(|t| t.index);
            errors.retain(|e| e.task().map(|t| t.index) == first);
            warnings.retain(|w| match (w.task(), first) {
                (Some(task), Some(first)) => task.index <= first,
                _ => true,
            });
            debug!(task = ?first, "strict mode keeps the first broken task only");
        }

        let usable: Vec<SyncTaskSpec> = if policy.keeps_partial_results() {
            report
                .passed
                .iter()
                .map(|&i| expanded[i].spec.clone())
                .collect()
        } else {
            Vec::new()
        };

        warn!(
            errors = errors.len(),
            usable = usable.len(),
            "configuration failed validation"
        );
        Err(ResolveFailure {
            errors,
            usable,
            warnings,
        })
    }

    fn env_mode(&self) -> Option<ValidationMode> {
        let value = self.env.var(VALIDATION_MODE_VAR)?;
        if value.trim().is_empty() {
            return None;
        }
        EnvVarValidator::validation_mode().parse(&value)
    }
}

/// Discover the config file, apply environment overrides and resolve it on
/// this host. Unknown-key warnings are prepended to the resolution's own.
pub fn resolve_discovered(
    defaults: &SyncDefaults,
    options: &ResolverOptions,
) -> FpsyncResult<Resolution> {
    let (file, file_warnings) = config::load_discovered()?;
    let mut resolution = HostResolver::host().resolve(defaults, &file, options)?;
    if !file_warnings.is_empty() {
        let mut warnings = file_warnings;
        warnings.append(&mut resolution.warnings);
        resolution.warnings = warnings;
    }
    Ok(resolution)
}
