//! Domain Entities
//!
//! - `SyncTaskSpec` - One fully resolved transfer unit
//! - `SyncPlan` - The declarative description a config produces
//! - `EnvironmentPrecondition` - The sentinel path gating a run

mod plan;
mod precondition;
mod sync_task;

pub use plan::{
    ExcludeOverride, PlanEntry, PlatformExtra, SyncDefaults, SyncPlan, TaskBase, TaskFragment,
};
pub use precondition::EnvironmentPrecondition;
pub use sync_task::{ResolvedConfig, SyncTaskSpec, TaskRef};
