//! Domain Services
//!
//! Pure business logic services. Filesystem and environment access goes
//! through ports, so everything here can be tested in memory.

pub mod merger;
pub mod path_resolver;
mod validator;

pub use merger::{
    augment_for_platform, expand_bulk, merge_fragment, merge_plan, MergeOutcome, MergedTask,
};
pub use path_resolver::{is_remote, join, remote_parts, PathResolver};
pub use validator::{ConfigValidator, TaskReport, ValidationReport};
