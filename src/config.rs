//! Configuration management for the filesystem gateway
//!
//! All values are read once at startup; nothing here is mutated afterwards.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable naming the root directory
pub const ROOT_PATH_ENV: &str = "ROOT_PATH";

/// Base directory that `EditDirectory` joins the new name against
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenameBase {
    /// The renamed directory always lands directly under the root
    #[default]
    Root,
    /// The renamed directory stays next to where it was
    Parent,
}

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    // ═══ NETWORK (Environment Override Supported) ═══
    /// IP address the HTTP listener binds to
    pub bind_address: String,

    /// Port for the HTTP listener
    pub port: u16,

    // ═══ FILESYSTEM ═══
    /// Directory every client path is resolved against.
    /// Environment: ROOT_PATH
    pub root_path: String,

    /// Reject client paths whose `..` segments climb above the root
    pub enforce_containment: bool,

    /// Where renamed directories end up
    pub rename_base: RenameBase,
}

impl ServerConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("bind_address", "127.0.0.1")?
            .set_default("port", 8000)?
            .set_default("enforce_containment", true)?
            .set_default("rename_base", "root")?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("FS_GATEWAY").try_parsing(true))
            .set_override_option("root_path", std::env::var(ROOT_PATH_ENV).ok())?
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration with defaults for everything but the root
    pub fn with_root(root_path: impl Into<String>) -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
            root_path: root_path.into(),
            enforce_containment: true,
            rename_base: RenameBase::Root,
        }
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        if self.root_path.trim().is_empty() {
            return Err(config::ConfigError::Message(format!(
                "root_path cannot be empty (set {ROOT_PATH_ENV})"
            )));
        }

        Ok(())
    }

    /// Get bind address and port as a socket address string
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Get the root directory as PathBuf
    pub fn root_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.root_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_root_uses_defaults() {
        let config = ServerConfig::with_root("/srv/data");
        assert_eq!(config.listen_addr(), "127.0.0.1:8000");
        assert_eq!(config.root_path_buf(), PathBuf::from("/srv/data"));
        assert!(config.enforce_containment);
        assert_eq!(config.rename_base, RenameBase::Root);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_root() {
        let config = ServerConfig::with_root("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_port_zero() {
        let mut config = ServerConfig::with_root("/srv/data");
        config.port = 0;
        assert!(config.validate().is_err());
    }

    // Environment is process-wide; every env-dependent case lives here.
    #[test]
    fn load_applies_environment_overrides() {
        unsafe {
            std::env::set_var(ROOT_PATH_ENV, "/srv/override");
            std::env::set_var("FS_GATEWAY_PORT", "9100");
            std::env::set_var("FS_GATEWAY_RENAME_BASE", "parent");
        }

        let config = ServerConfig::load().unwrap();
        assert_eq!(config.root_path, "/srv/override");
        assert_eq!(config.port, 9100);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert!(config.enforce_containment);
        assert_eq!(config.rename_base, RenameBase::Parent);

        unsafe {
            std::env::set_var(ROOT_PATH_ENV, "");
        }
        assert!(ServerConfig::load().is_err());

        unsafe {
            std::env::remove_var(ROOT_PATH_ENV);
            std::env::remove_var("FS_GATEWAY_PORT");
            std::env::remove_var("FS_GATEWAY_RENAME_BASE");
        }
    }

    #[test]
    fn rename_base_parses_lowercase() {
        let parsed: RenameBase = serde_json::from_str("\"parent\"").unwrap();
        assert_eq!(parsed, RenameBase::Parent);
    }
}
