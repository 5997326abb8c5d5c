//! Configuration file loading
//!
//! Settings come from, lowest to highest precedence: built-in defaults,
//! a TOML file (`--config`, else `./practiceit.toml` when present),
//! environment variables, then command-line flags.
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:9003"
//! cors_permissive = false
//! input_policy = "lenient"   # or "strict"
//! atomic_orders = false
//!
//! [database]
//! path = "./practiceit.db"
//! max_connections = 5
//! foreign_keys = true
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use practiceit_server::{DbConfig, InputPolicy, RequestPolicy, ServerConfig};
use serde::Deserialize;

/// File looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "practiceit.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
    pub input_policy: Option<InputPolicy>,
    pub atomic_orders: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSection {
    pub path: Option<PathBuf>,
    pub max_connections: Option<u32>,
    pub foreign_keys: Option<bool>,
}

/// Command-line values that override the file
#[derive(Debug, Clone, Default)]
pub struct ServerOverrides {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: bool,
    pub strict: bool,
    pub atomic_orders: bool,
}

impl FileConfig {
    /// Load the explicit file (must exist) or the default file (optional).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_path(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))?;

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn db_config(&self, path_override: Option<PathBuf>) -> DbConfig {
        let defaults = DbConfig::default();
        DbConfig {
            path: path_override
                .or_else(|| self.database.path.clone())
                .unwrap_or(defaults.path),
            max_connections: self
                .database
                .max_connections
                .unwrap_or(defaults.max_connections),
            foreign_keys: self.database.foreign_keys.unwrap_or(defaults.foreign_keys),
        }
    }

    pub fn server_config(&self, overrides: &ServerOverrides) -> ServerConfig {
        let defaults = ServerConfig::default();
        let input = if overrides.strict {
            InputPolicy::Strict
        } else {
            self.server.input_policy.unwrap_or_default()
        };

        ServerConfig {
            bind_addr: overrides
                .bind
                .or(self.server.bind)
                .unwrap_or(defaults.bind_addr),
            cors_permissive: overrides.cors_permissive
                || self.server.cors_permissive.unwrap_or(defaults.cors_permissive),
            policy: RequestPolicy {
                input,
                atomic_orders: overrides.atomic_orders
                    || self.server.atomic_orders.unwrap_or(false),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.db_config(None), DbConfig::default());

        let server = config.server_config(&ServerOverrides::default());
        assert_eq!(server.bind_addr.port(), 9003);
        assert_eq!(server.policy, RequestPolicy::default());
    }

    #[test]
    fn file_values_apply() {
        let config: FileConfig = toml::from_str(
            r#"
            [server]
            bind = "0.0.0.0:8080"
            input_policy = "strict"
            atomic_orders = true

            [database]
            path = "/tmp/shop.db"
            max_connections = 2
            foreign_keys = false
            "#,
        )
        .unwrap();

        let server = config.server_config(&ServerOverrides::default());
        assert_eq!(server.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(server.policy.input, InputPolicy::Strict);
        assert!(server.policy.atomic_orders);

        let db = config.db_config(None);
        assert_eq!(db.path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(db.max_connections, 2);
        assert!(!db.foreign_keys);
    }

    #[test]
    fn overrides_win_over_file() {
        let config: FileConfig = toml::from_str(
            r#"
            [server]
            bind = "0.0.0.0:8080"

            [database]
            path = "/tmp/shop.db"
            "#,
        )
        .unwrap();

        let overrides = ServerOverrides {
            bind: Some("127.0.0.1:1234".parse().unwrap()),
            strict: true,
            ..ServerOverrides::default()
        };
        let server = config.server_config(&overrides);
        assert_eq!(server.bind_addr.port(), 1234);
        assert_eq!(server.policy.input, InputPolicy::Strict);

        let db = config.db_config(Some(PathBuf::from("other.db")));
        assert_eq!(db.path, PathBuf::from("other.db"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("[server]\nport = 1\n").is_err());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(FileConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\npath = \":memory:\"").unwrap();

        let config = FileConfig::load(Some(file.path())).unwrap();
        assert!(config.db_config(None).is_memory());
    }
}
