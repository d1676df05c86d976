//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServiceConfig;

/// Initialize the global tracing subscriber.
///
/// RUST_LOG wins over the configured level when set. Calling this twice
/// is harmless; the second install is ignored.
pub fn init_tracing(config: &ServiceConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(service = %config.service_name, "Tracing initialized");
    }
}
