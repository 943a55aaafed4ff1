//! ConfigSource port - the user-authored configuration logic
//!
//! A source receives the injected defaults and returns a [`SyncPlan`]. It may
//! redefine any default before using it. Closures work directly:
//!
//! ```
//! use fpsync::domain::entities::{SyncDefaults, SyncPlan, TaskBase, TaskFragment};
//! use fpsync::domain::ports::ConfigSource;
//!
//! let source = |d: &SyncDefaults| {
//!     let base = TaskBase::from_defaults(d);
//!     SyncPlan::new().task(&base, TaskFragment::new(["notes"]))
//! };
//! let plan = source.build(&SyncDefaults::new("server", "/home/me"));
//! assert_eq!(plan.entries.len(), 1);
//! ```

use crate::domain::entities::{SyncDefaults, SyncPlan};

pub trait ConfigSource {
    fn build(&self, defaults: &SyncDefaults) -> SyncPlan;
}

impl<F> ConfigSource for F
where
    F: Fn(&SyncDefaults) -> SyncPlan,
{
    fn build(&self, defaults: &SyncDefaults) -> SyncPlan {
        self(defaults)
    }
}
