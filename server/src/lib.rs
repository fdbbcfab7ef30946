//! Wellness portal server: HTML pages plus a YouTube search proxy that falls back to
//! sample videos when no API key is configured or the upstream call fails.

pub mod app;
pub mod config;
pub mod logging;

pub use app::{build_router, serve};
pub use config::{AppConfig, ConfigError, Environment};

/// Reply of the `ping` liveness command
pub fn ping() -> &'static str {
    "pong"
}
