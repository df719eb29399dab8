//! Logging setup and convenience wrappers around tracing.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber. Reads the filter from the
/// RUST_LOG environment variable, defaulting to info. Safe to call more
/// than once; only the first call installs the subscriber.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init();
    });
}

pub fn info(msg: &str) {
    tracing::info!("{}", msg);
}

pub fn warn(msg: &str) {
    tracing::warn!("{}", msg);
}

pub fn error(msg: &str) {
    tracing::error!("{}", msg);
}
