use std::fmt;
use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use youtube_client::{DEFAULT_TIMEOUT, YOUTUBE_SEARCH_URL};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_SECRET_KEY: &str = "change-me";

/// Deployment environment, selected by `APP_ENV` or `--env`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Resolve an environment name; unknown names fall back to development
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" => Environment::Production,
            "testing" => Environment::Testing,
            _ => Environment::Development,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Testing => "testing",
        }
    }

    pub fn debug(self) -> bool {
        self == Environment::Development
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(self) -> &'static str {
        if self.debug() {
            "info,server=debug,video_service=debug,youtube_client=debug"
        } else {
            "info"
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("invalid YOUTUBE_TIMEOUT_SECS '{value}': expected a positive number of seconds")]
    InvalidTimeout { value: String },
}

/// Application settings, built once at startup and handed to each component
#[derive(Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub secret_key: String,
    pub youtube_api_key: Option<String>,
    pub youtube_search_url: String,
    pub youtube_timeout: Duration,
    pub bind_addr: SocketAddr,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("environment", &self.environment)
            .field("secret_key", &"<redacted>")
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("youtube_search_url", &self.youtube_search_url)
            .field("youtube_timeout", &self.youtube_timeout)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl AppConfig {
    /// Defaults for an environment, without consulting process variables
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            youtube_api_key: None,
            youtube_search_url: YOUTUBE_SEARCH_URL.to_string(),
            youtube_timeout: DEFAULT_TIMEOUT,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }

    /// Load settings from process environment variables.
    ///
    /// `environment` overrides `APP_ENV` when given.
    ///
    /// # Errors
    /// - `ConfigError::InvalidBindAddr` - `BIND_ADDR` is not a socket address
    /// - `ConfigError::InvalidTimeout` - `YOUTUBE_TIMEOUT_SECS` is not a positive number
    pub fn from_env(environment: Option<Environment>) -> Result<Self, ConfigError> {
        Self::from_lookup(environment, |key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// # Errors
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(environment: Option<Environment>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = environment
            .or_else(|| lookup("APP_ENV").map(|name| Environment::from_name(&name)))
            .unwrap_or_default();
        let mut config = Self::for_environment(environment);

        if let Some(secret_key) = lookup("SECRET_KEY") {
            config.secret_key = secret_key;
        }

        // Test runs stay offline regardless of the developer's shell.
        if environment != Environment::Testing {
            config.youtube_api_key = lookup("YOUTUBE_API_KEY").filter(|key| !key.trim().is_empty());
        }

        if let Some(url) = lookup("YOUTUBE_SEARCH_URL").filter(|url| !url.trim().is_empty()) {
            config.youtube_search_url = url;
        }

        if let Some(value) = lookup("YOUTUBE_TIMEOUT_SECS") {
            config.youtube_timeout = parse_timeout(&value)?;
        }

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        config.bind_addr = bind_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        Ok(config)
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| ConfigError::InvalidTimeout {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(
        environment: Option<Environment>,
        vars: &[(&str, &str)],
    ) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(environment, |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = load(None, &[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.secret_key, "change-me");
        assert_eq!(config.youtube_api_key, None);
        assert_eq!(config.youtube_search_url, YOUTUBE_SEARCH_URL);
        assert_eq!(config.youtube_timeout, Duration::from_secs(5));
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn environment_names_resolve() {
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name(" Testing "), Environment::Testing);
        assert_eq!(Environment::from_name("staging"), Environment::Development);
        assert!(Environment::Development.debug());
        assert!(!Environment::Production.debug());
    }

    #[test]
    fn variables_override_defaults() {
        let config = load(
            None,
            &[
                ("APP_ENV", "production"),
                ("SECRET_KEY", "s3cret"),
                ("YOUTUBE_API_KEY", "key-123"),
                ("YOUTUBE_SEARCH_URL", "http://localhost:8080/youtube/v3/search"),
                ("YOUTUBE_TIMEOUT_SECS", "2.5"),
                ("BIND_ADDR", "0.0.0.0:8000"),
            ],
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.secret_key, "s3cret");
        assert_eq!(config.youtube_api_key.as_deref(), Some("key-123"));
        assert_eq!(
            config.youtube_search_url,
            "http://localhost:8080/youtube/v3/search"
        );
        assert_eq!(config.youtube_timeout, Duration::from_millis(2500));
        assert_eq!(config.bind_addr.port(), 8000);
    }

    #[test]
    fn explicit_environment_wins_over_variable() {
        let config = load(Some(Environment::Production), &[("APP_ENV", "testing")]).unwrap();
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn blank_api_key_is_absent() {
        let config = load(None, &[("YOUTUBE_API_KEY", "   ")]).unwrap();
        assert_eq!(config.youtube_api_key, None);
    }

    #[test]
    fn testing_ignores_api_key_variable() {
        let config = load(Some(Environment::Testing), &[("YOUTUBE_API_KEY", "real")]).unwrap();
        assert_eq!(config.youtube_api_key, None);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = load(None, &[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));

        for bad in ["0", "-1", "soon", "NaN", "1e300"] {
            let err = load(None, &[("YOUTUBE_TIMEOUT_SECS", bad)]).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout { .. }), "{bad}");
        }
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let mut config = AppConfig::for_environment(Environment::Development);
        config.youtube_api_key = Some("key-123".to_string());
        config.secret_key = "s3cret".to_string();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("key-123"));
        assert!(!rendered.contains("s3cret"));
    }
}
