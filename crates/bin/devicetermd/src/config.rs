//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `deviceterm.toml` in the working directory, where the file is
//! optional and every field has a sensible default. A file named by
//! `DEVICETERM_CONFIG` must exist. Environment variables take precedence over
//! file values.

use serde::Deserialize;

use deviceterm_adapter_storage_sqlite_sqlx::DEFAULT_MAX_CONNECTIONS;
use deviceterm_domain::plugin::{PLUGIN, normalize_base_path};
use deviceterm_domain::terminal::TerminalSettings;

const DEFAULT_CONFIG_PATH: &str = "deviceterm.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Inventory database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Where the plugin pages are mounted.
    pub plugin: PluginConfig,
    /// Web terminal service settings.
    pub terminal: TerminalSettings,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Plugin mount configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Path segment(s) the terminal pages live under.
    pub base_path: String,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("DEVICETERM_CONFIG") {
            Ok(path) => Self::from_file(&path, true)?,
            Err(_) => Self::from_file(DEFAULT_CONFIG_PATH, false)?,
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read `path`. A missing file yields the defaults unless `required`.
    fn from_file(path: &str, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("DEVICETERM_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("DEVICETERM_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("DEVICETERM_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("DEVICETERM_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("DEVICETERM_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("DEVICETERM_BASE_PATH") {
            self.plugin.base_path = val;
        }
        if let Some(val) = var("DEVICETERM_TERMINAL_SCHEME") {
            self.terminal.terminal_scheme = val;
        }
        if let Some(val) = var("DEVICETERM_TERMINAL_HOST") {
            self.terminal.terminal_host = val;
        }
        if let Some(val) = var("DEVICETERM_TERMINAL_PORT") {
            self.terminal.terminal_port = val;
        }
        if let Some(val) = var("DEVICETERM_SSH_PORT") {
            self.terminal.ssh_port = val;
        }
    }

    fn validate(&mut self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.plugin.base_path = normalize_base_path(&self.plugin.base_path).ok_or_else(|| {
            ConfigError::Validation("plugin base_path must not be empty".to_string())
        })?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:deviceterm.db?mode=rwc".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "devicetermd=info,deviceterm=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            base_path: PLUGIN.base_path.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.url, "sqlite:deviceterm.db?mode=rwc");
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.plugin.base_path, "deviceterm");
        assert_eq!(config.terminal, TerminalSettings::default());
    }

    #[test]
    fn should_default_terminal_settings_when_section_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.terminal.terminal_scheme, "http");
        assert_eq!(config.terminal.terminal_host, "host.docker.internal");
        assert_eq!(config.terminal.terminal_port, "3000");
        assert_eq!(config.terminal.ssh_port, "22");
    }

    #[test]
    fn should_default_each_missing_terminal_key() {
        let config: Config = toml::from_str("[terminal]\nssh_port = '2222'").unwrap();
        assert_eq!(config.terminal.ssh_port, "2222");
        assert_eq!(config.terminal.terminal_scheme, "http");
        assert_eq!(config.terminal.terminal_host, "host.docker.internal");
        assert_eq!(config.terminal.terminal_port, "3000");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:netbox.db'
            max_connections = 8

            [logging]
            filter = 'debug'

            [plugin]
            base_path = '/tools/term/'

            [terminal]
            terminal_scheme = 'https'
            terminal_host = 'term.example.com'
            terminal_port = 4000
            ssh_port = '2222'
        ";
        let mut config: Config = toml::from_str(toml).unwrap();
        config.validate().unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.database_url(), "sqlite:netbox.db");
        assert_eq!(config.database.max_connections, 8);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.plugin.base_path, "tools/term");
        assert_eq!(config.terminal.terminal_scheme, "https");
        assert_eq!(config.terminal.terminal_host, "term.example.com");
        assert_eq!(config.terminal.terminal_port, "4000");
        assert_eq!(config.terminal.ssh_port, "2222");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml", false).unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_fail_when_required_file_not_found() {
        let result = Config::from_file("/etc/deviceterm/typo.toml", true);
        assert!(matches!(result, Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn should_read_required_file_when_present() {
        let path = std::env::temp_dir().join(format!("deviceterm-{}.toml", std::process::id()));
        std::fs::write(&path, "[terminal]\nterminal_host = 'term.lan'\n").unwrap();
        let config = Config::from_file(path.to_str().unwrap(), true).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.terminal.terminal_host, "term.lan");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_base_path() {
        let mut config = Config::default();
        config.plugin.base_path = "/".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("DEVICETERM_BIND", "127.0.0.1:8443"),
            ("DEVICETERM_DATABASE_URL", "sqlite::memory:"),
            ("DEVICETERM_BASE_PATH", "term"),
            ("DEVICETERM_TERMINAL_SCHEME", "https"),
            ("DEVICETERM_TERMINAL_HOST", "velociterm.lan"),
            ("DEVICETERM_TERMINAL_PORT", "8080"),
            ("DEVICETERM_SSH_PORT", "2200"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:8443");
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.plugin.base_path, "term");
        assert_eq!(config.terminal.terminal_scheme, "https");
        assert_eq!(config.terminal.terminal_host, "velociterm.lan");
        assert_eq!(config.terminal.terminal_port, "8080");
        assert_eq!(config.terminal.ssh_port, "2200");
    }

    #[test]
    fn should_prefer_rust_log_over_deviceterm_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("DEVICETERM_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_unparseable_port_override() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("DEVICETERM_PORT", "eighty")]));
        assert_eq!(config.server.port, 8000);
    }
}
