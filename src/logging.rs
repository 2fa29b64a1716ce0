// Tracing subscriber setup.
// Compact fmt output filtered by RUST_LOG, defaulting to info for this crate.

use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "ghorg=info";

/// Install a global fmt subscriber.
///
/// Respects `RUST_LOG` when set. Returns `false` if a global subscriber was
/// already installed, in which case nothing changes.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
