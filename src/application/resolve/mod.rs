//! Resolve Use Case Module
//!
//! Turns injected defaults and a configuration source into a validated,
//! ordered task list for the sync executor.

mod options;
mod result;
mod use_case;

pub use options::ResolverOptions;
pub use result::Resolution;
pub use use_case::{resolve_discovered, ConfigResolver, HostResolver};
