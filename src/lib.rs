//! fpsync - configuration resolution for bidirectional directory sync
//!
//! fpsync takes injected defaults (remote host, remote root, exclusion file),
//! runs a configuration source against them, and produces an ordered list of
//! validated sync tasks for an external transfer tool such as rsync.
//!
//! ```
//! use fpsync::{ConfigResolver, ResolverOptions, SyncDefaults, SyncPlan, TaskBase, TaskFragment};
//! use fpsync::domain::ports::{FixedPlatform, StaticEnv};
//! use fpsync::domain::value_objects::PlatformFamily;
//! use fpsync::infrastructure::MemoryFs;
//!
//! let resolver = ConfigResolver::new(
//!     MemoryFs::new(),
//!     StaticEnv::new().with_home("/home/me"),
//!     FixedPlatform(PlatformFamily::Linux),
//! );
//! let source = |d: &SyncDefaults| {
//!     let base = TaskBase::from_defaults(d);
//!     SyncPlan::new().task(&base, TaskFragment::from_words("code notes").named("home"))
//! };
//!
//! let resolution = resolver
//!     .resolve(&SyncDefaults::new("server", "/home/me"), &source, &ResolverOptions::new())
//!     .unwrap();
//! assert_eq!(resolution.tasks.tasks()[0].source_root, "/home/me");
//! assert_eq!(resolution.tasks.tasks()[0].target_root, "server:/home/me");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{resolve_discovered, ConfigResolver, HostResolver, Resolution, ResolverOptions};
pub use config::ConfigFile;
pub use domain::entities::{
    EnvironmentPrecondition, ResolvedConfig, SyncDefaults, SyncPlan, SyncTaskSpec, TaskBase,
    TaskFragment,
};
pub use domain::ports::ConfigSource;
pub use domain::value_objects::{
    ConfigWarning, PlatformFamily, ResolveError, SyncDirection, ValidationMode,
};
pub use error::{FpsyncError, FpsyncResult, ResolveFailure};
