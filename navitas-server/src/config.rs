//! Server configuration.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const BIND_VAR: &str = "NAVITAS_BIND";

/// Environment variable holding the maximum accepted input size in bytes.
pub const MAX_INPUT_BYTES_VAR: &str = "NAVITAS_MAX_INPUT_BYTES";

/// Error returned when an environment variable holds a malformed value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: &'static str,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Largest paste accepted, in bytes.
    /// Reservation pastes are tens of lines; anything far larger is a mistake.
    pub max_input_bytes: usize,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(bind_addr: SocketAddr, max_input_bytes: usize) -> Self {
        Self {
            bind_addr,
            max_input_bytes,
        }
    }

    /// Load configuration from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_VAR) {
            config.bind_addr = value.trim().parse().map_err(|_| ConfigError {
                var: BIND_VAR,
                value: value.clone(),
                reason: "expected host:port",
            })?;
        }

        if let Some(value) = lookup(MAX_INPUT_BYTES_VAR) {
            config.max_input_bytes = match value.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError {
                        var: MAX_INPUT_BYTES_VAR,
                        value,
                        reason: "must be greater than zero",
                    });
                }
                Ok(n) => n,
                Err(_) => {
                    return Err(ConfigError {
                        var: MAX_INPUT_BYTES_VAR,
                        value,
                        reason: "expected a byte count",
                    });
                }
            };
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_input_bytes: 64 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.max_input_bytes, 65536);
    }

    #[test]
    fn unset_vars_keep_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.max_input_bytes, 65536);
    }

    #[test]
    fn vars_override_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            (BIND_VAR, "0.0.0.0:8080"),
            (MAX_INPUT_BYTES_VAR, " 1024 "),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.max_input_bytes, 1024);
    }

    #[test]
    fn malformed_vars_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[(BIND_VAR, "localhost")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value \"localhost\" for NAVITAS_BIND: expected host:port"
        );

        let err =
            ServerConfig::from_lookup(lookup(&[(MAX_INPUT_BYTES_VAR, "lots")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value \"lots\" for NAVITAS_MAX_INPUT_BYTES: expected a byte count"
        );

        assert!(ServerConfig::from_lookup(lookup(&[(MAX_INPUT_BYTES_VAR, "0")])).is_err());
    }

    #[test]
    fn custom_config() {
        let config = ServerConfig::new(SocketAddr::from(([10, 0, 0, 1], 9000)), 10);
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.max_input_bytes, 10);
    }
}
