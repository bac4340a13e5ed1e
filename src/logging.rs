// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter is resolved in this order:
//! 1. Explicit filter passed by the caller (`--log` on the command line)
//! 2. `INFO_BUBBLE_LOG` environment variable
//! 3. [`DEFAULT_FILTER`]

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a `tracing` filter directive.
pub const ENV_LOG_FILTER: &str = "INFO_BUBBLE_LOG";

/// Filter used when nothing else is configured.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter without installing anything.
#[must_use]
pub fn resolve_filter(explicit: Option<&str>) -> EnvFilter {
    if let Some(directive) = explicit {
        if let Ok(filter) = EnvFilter::try_new(directive) {
            return filter;
        }
    }

    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global fmt subscriber.
///
/// Calling this twice is harmless: the second install is rejected by
/// `tracing` and ignored here.
pub fn init(explicit: Option<&str>) {
    let _ = fmt()
        .with_env_filter(resolve_filter(explicit))
        .with_target(false)
        .try_init();
}
