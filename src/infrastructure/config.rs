//! Environment-driven configuration

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration read from the process environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface or hostname to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
    /// Raises the default log filter to debug
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

impl Config {
    /// Load configuration from `HOST`, `PORT` and `DEBUG`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let debug = lookup("DEBUG")
            .map(|d| d.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self { host, port, debug })
    }

    /// Listening address in `host:port` form
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            // Bare IPv6 literal
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Default tracing filter when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "devops_info_service=debug,tower_http=debug"
        } else {
            "devops_info_service=info,tower_http=info"
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}
