//! Logging setup for the stocklist binaries.

pub mod tracing;

pub use self::tracing::{env_filter, DEFAULT_FILTER};

/// Install process-wide logging. Safe to call more than once.
pub fn init() {
    self::tracing::init();
}
