use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Install the global fmt subscriber. `RUST_LOG` takes precedence over the
/// environment's default filter.
pub fn init(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
