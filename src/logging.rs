//! Tracing subscriber setup for hosts embedding the resolver.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "FPSYNC_LOG";

/// Filter used when `FPSYNC_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Install a compact stderr subscriber filtered by `FPSYNC_LOG`.
///
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_env(LOG_ENV_VAR).or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
