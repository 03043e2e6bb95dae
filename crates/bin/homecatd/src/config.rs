//! Daemon settings for `homecatd`.
//!
//! The catalog keeps everything in memory, so the only knobs are where the
//! HTTP listener binds and how chatty the logs are. Both come from an
//! optional `homecat.toml`, then `HOMECAT_*` / `RUST_LOG` variables win.

use serde::Deserialize;

/// Settings read at startup; nothing is reloaded while serving.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Where the catalog API listens. Defaults to `0.0.0.0:3000`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface address; overridden by `HOMECAT_HOST` or `HOMECAT_BIND`.
    pub host: String,
    /// Must be non-zero; overridden by `HOMECAT_PORT` or `HOMECAT_BIND`.
    pub port: u16,
}

/// `tracing` filter for the daemon and the request trace layer.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` beats `HOMECAT_LOG`.
    pub filter: String,
}

impl Config {
    /// Read `homecat.toml` from the working directory, layer the
    /// environment on top and reject a zero port.
    ///
    /// # Errors
    ///
    /// Fails on an unreadable or malformed file, or a zero port.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homecat.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("HOMECAT_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("HOMECAT_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("HOMECAT_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = lookup("HOMECAT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Address handed to the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homecatd=info,homecat=info,tower_http=debug".to_string(),
        }
    }
}

/// Why `homecatd` refused to start.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}
