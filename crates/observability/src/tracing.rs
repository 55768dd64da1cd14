//! Log subscriber for the stocklist binaries.

use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable: our crates at `info`,
/// everything else (hyper, tokio) only at `warn`.
pub const DEFAULT_FILTER: &str = "warn,stocklist_api=info,stocklist_inventory=info";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        // Targets are kept so lines from the api and inventory crates stay distinguishable.
        .with_target(true)
        .with_current_span(false)
        .try_init();
}
