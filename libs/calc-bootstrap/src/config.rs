//! Layered application configuration.
//!
//! Sources are merged in this order, later ones winning:
//! 1. built-in defaults
//! 2. YAML file passed with `--config`
//! 3. environment variables prefixed with `CALC__` (`__` separates nesting,
//!    e.g. `CALC__SERVER__BIND_ADDR=0.0.0.0:9000`)
//! 4. CLI overrides (`--port`, `-v`)
//!
//! Module sections live under `modules.<name>.config` and are decoded lazily
//! by the module that owns them.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CALC__";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8087";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {path}")]
    FileNotFound { path: String },
    #[error("failed to load configuration (yaml/env): {0}")]
    Load(#[from] Box<figment::Error>),
    #[error("invalid config for module '{module}': {source}")]
    InvalidModuleConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid bind address '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Parse `bind_addr` into a socket address.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidBindAddr` when the address does not parse.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                addr: self.bind_addr.clone(),
                source,
            })
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `calculator=debug,info`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// CLI values that take precedence over every other config source.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Raw per-module sections: `modules.<name> = { config: ... }`.
    pub modules: BTreeMap<String, serde_json::Value>,
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then `CALC__*` env vars.
    ///
    /// # Errors
    /// Returns `ConfigError::FileNotFound` when `path` is given but is not a
    /// file, and `ConfigError::Load` when any source fails to parse.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn load_with_env(path: Option<&Path>, env: Env) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment.merge(env).extract().map_err(Box::new)?;
        tracing::debug!(
            bind_addr = %config.server.bind_addr,
            modules = config.modules.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Apply `--port` and `-v` on top of the loaded configuration.
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(port) = cli.port {
            let host = self
                .server
                .bind_addr
                .rsplit_once(':')
                .map_or(self.server.bind_addr.as_str(), |(host, _)| host);
            self.server.bind_addr = format!("{host}:{port}");
        }

        match cli.verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
    }

    /// Typed module config, falling back to `T::default()` when the module
    /// or its `config` section is absent.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidModuleConfig` if the section exists but
    /// does not deserialize into `T`.
    pub fn module_config_or_default<T: DeserializeOwned + Default>(
        &self,
        module: &str,
    ) -> Result<T, ConfigError> {
        let Some(section) = self
            .modules
            .get(module)
            .and_then(serde_json::Value::as_object)
            .and_then(|obj| obj.get("config"))
        else {
            return Ok(T::default());
        };

        serde_json::from_value(section.clone()).map_err(|source| {
            ConfigError::InvalidModuleConfig {
                module: module.to_owned(),
                source,
            }
        })
    }

    /// Pretty JSON rendering used by `--print-config` and `check`.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
