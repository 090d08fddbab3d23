//! # Server Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TALLY_BIND_ADDR=127.0.0.1                                          │
//! │     TALLY_PORT=8080                                                    │
//! │     TALLY_DATA_DIR=/srv/tally                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $TALLY_CONFIG, else                                                │
//! │     ~/.config/server/server.toml (Linux, via ProjectDirs)              │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:5555, ./data                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [server]
//! bind_addr = "0.0.0.0"
//! port = 5555
//!
//! [data]
//! dir = "data"
//! sales_file = "vendas.json"
//! inventory_file = "estoque.json"
//! movements_file = "movimentacoes.json"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tally_store::store::{DEFAULT_INVENTORY_FILE, DEFAULT_MOVEMENTS_FILE, DEFAULT_SALES_FILE};
use tally_store::StoreConfig;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const CONFIG_PATH_ENV: &str = "TALLY_CONFIG";

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// Listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5555
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

/// Data file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_sales_file")]
    pub sales_file: String,

    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,

    #[serde(default = "default_movements_file")]
    pub movements_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_sales_file() -> String {
    DEFAULT_SALES_FILE.to_string()
}

fn default_inventory_file() -> String {
    DEFAULT_INVENTORY_FILE.to_string()
}

fn default_movements_file() -> String {
    DEFAULT_MOVEMENTS_FILE.to_string()
}

impl Default for DataSettings {
    fn default() -> Self {
        DataSettings {
            dir: default_data_dir(),
            sales_file: default_sales_file(),
            inventory_file: default_inventory_file(),
            movements_file: default_movements_file(),
        }
    }
}

// =============================================================================
// Server Config
// =============================================================================

/// Complete server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub data: DataSettings,
}

impl ServerConfig {
    /// Loads configuration: defaults, then file, then environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading server config from file");
                config = Self::from_toml(&std::fs::read_to_string(&path)?)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue(
                "server.port must be greater than 0".into(),
            ));
        }

        let files = [
            ("data.sales_file", &self.data.sales_file),
            ("data.inventory_file", &self.data.inventory_file),
            ("data.movements_file", &self.data.movements_file),
        ];
        for (key, value) in files {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue(format!("{} must not be empty", key)));
            }
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production, a map in tests).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(addr) = lookup("TALLY_BIND_ADDR") {
            debug!(bind_addr = %addr, "Overriding bind address from environment");
            self.server.bind_addr = addr;
        }

        if let Some(port) = lookup("TALLY_PORT") {
            match port.parse::<u16>() {
                Ok(p) => self.server.port = p,
                Err(_) => warn!(value = %port, "Ignoring invalid TALLY_PORT"),
            }
        }

        if let Some(dir) = lookup("TALLY_DATA_DIR") {
            debug!(dir = %dir, "Overriding data directory from environment");
            self.data.dir = PathBuf::from(dir);
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tally", "server")
            .map(|dirs| dirs.config_dir().join("server.toml"))
    }

    /// `addr:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.bind_addr, self.server.port)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data.dir)
            .sales_file(&self.data.sales_file)
            .inventory_file(&self.data.inventory_file)
            .movements_file(&self.data.movements_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:5555");
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert!(config.validate().is_ok());
        assert!(config
            .store_config()
            .movements_path()
            .ends_with("movimentacoes.json"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ServerConfig::from_toml("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind_addr, "0.0.0.0");
        assert_eq!(config.data.inventory_file, "estoque.json");
    }

    #[test]
    fn test_full_file() {
        let config = ServerConfig::from_toml(
            r#"
            [server]
            bind_addr = "127.0.0.1"
            port = 9000

            [data]
            dir = "/srv/tally"
            sales_file = "sales.json"
            inventory_file = "stock.json"
            movements_file = "moves.json"
            "#,
        )
        .unwrap();

        let store = config.store_config();
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(store.sales_path(), PathBuf::from("/srv/tally/sales.json"));
        assert_eq!(store.inventory_path(), PathBuf::from("/srv/tally/stock.json"));
    }

    #[test]
    fn test_malformed_file() {
        assert!(matches!(
            ServerConfig::from_toml("[server]\nport = \"high\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("TALLY_BIND_ADDR", "127.0.0.1"),
            ("TALLY_PORT", "7000"),
            ("TALLY_DATA_DIR", "/tmp/tally"),
        ]
        .into_iter()
        .collect();

        let mut config = ServerConfig::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.bind_address(), "127.0.0.1:7000");
        assert_eq!(config.data.dir, PathBuf::from("/tmp/tally"));
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = ServerConfig::default();
        config.apply_overrides(|k| (k == "TALLY_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 5555);
    }

    #[test]
    fn test_validation() {
        let mut config = ServerConfig::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));

        let mut config = ServerConfig::default();
        config.data.movements_file = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(&path, "[data]\ndir = \"/var/lib/tally\"\n").unwrap();

        let config = ServerConfig::load(Some(path)).unwrap();
        // Environment may still override in CI, so only check the file value
        // when no override is set.
        if std::env::var("TALLY_DATA_DIR").is_err() {
            assert_eq!(config.data.dir, PathBuf::from("/var/lib/tally"));
        }
    }
}
