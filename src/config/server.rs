use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::store::DEFAULT_ADMIN_MAIL;

pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 8;

/// Upper bound on the session lifetime: ten years.
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365 * 10;

/// Settings for `worktrack serve`. Every field can come from a TOML file;
/// command-line flags take precedence.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    /// Drop every table and reseed before serving.
    pub fresh: bool,
    pub token_ttl_hours: i64,
    /// Mail of the administrator seeded into a fresh database.
    pub admin_mail: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> std::result::Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("worktrack.db")
    }

    #[must_use]
    pub fn token_ttl(&self) -> Duration {
        Duration::hours(self.token_ttl_hours)
    }

    /// Loads a config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&self.token_ttl_hours) {
            return Err(Error::Config(format!(
                "token_ttl_hours must be between 1 and {MAX_TOKEN_TTL_HOURS}, got {}",
                self.token_ttl_hours
            )));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_dir: PathBuf::from("./data"),
            fresh: false,
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            admin_mail: DEFAULT_ADMIN_MAIL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.db_path(), PathBuf::from("./data/worktrack.db"));
        assert_eq!(config.token_ttl(), Duration::hours(8));
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
        assert!(!config.fresh);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("worktrack.toml");
        std::fs::write(&path, "port = 9000\ndata_dir = \"/var/lib/worktrack\"\n").unwrap();

        let config = ServerConfig::from_file(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.db_path(), PathBuf::from("/var/lib/worktrack/worktrack.db"));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.admin_mail, DEFAULT_ADMIN_MAIL);
    }

    #[test]
    fn test_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("worktrack.toml");
        std::fs::write(&path, "port = \"eighty\"").unwrap();

        assert!(matches!(
            ServerConfig::from_file(&path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_non_positive_ttl_is_rejected() {
        let config = ServerConfig {
            token_ttl_hours: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ttl_upper_bound() {
        let at_bound = ServerConfig {
            token_ttl_hours: MAX_TOKEN_TTL_HOURS,
            ..ServerConfig::default()
        };
        assert!(at_bound.validate().is_ok());
        assert_eq!(at_bound.token_ttl(), Duration::hours(MAX_TOKEN_TTL_HOURS));

        for hours in [MAX_TOKEN_TTL_HOURS + 1, 3_000_000_000, i64::MAX] {
            let config = ServerConfig {
                token_ttl_hours: hours,
                ..ServerConfig::default()
            };
            assert!(matches!(config.validate(), Err(Error::Config(_))));
        }
    }
}
