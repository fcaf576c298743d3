//! # evl-config
//!
//! Layered configuration loading for Eventline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EVENTLINE_*` prefix, `__` as separator)
//! 2. Project-level `.eventline/config.toml`
//! 3. User-level `~/.config/eventline/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `EVENTLINE_DATABASE__PATH` -> `database.path`,
//! `EVENTLINE_AUDIT__MAX_LIMIT` -> `audit.max_limit`, and so on.
//!
//! # Usage
//!
//! ```no_run
//! use evl_config::EvlConfig;
//!
//! let config = EvlConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod audit;
mod auth;
mod database;
mod error;

pub use audit::AuditConfig;
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EvlConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl EvlConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration after reading a `.env` file from the workspace root.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.audit.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers can layer extra providers (e.g. CLI overrides) on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".eventline/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("EVENTLINE_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("eventline").join("config.toml"))
    }

    /// Walks up from `CARGO_MANIFEST_DIR` (or the current dir) for a `.env`.
    /// Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_loads() {
        let config = EvlConfig::default();
        assert_eq!(config.database.path, ".eventline/eventline.db");
        assert_eq!(config.audit.default_limit, 50);
        assert!(!config.auth.is_configured());
    }

    #[test]
    fn project_file_and_env_layer_in_order() {
        Jail::expect_with(|jail| {
            jail.create_dir(".eventline")?;
            jail.create_file(
                ".eventline/config.toml",
                r#"
                [database]
                path = "from-file.db"

                [audit]
                default_limit = 25
                "#,
            )?;
            jail.set_env("EVENTLINE_DATABASE__PATH", ":memory:");
            jail.set_env("EVENTLINE_AUTH__USER_ID", "user-7");

            let config = EvlConfig::load().expect("config should load");
            assert_eq!(config.database.path, ":memory:");
            assert!(config.database.is_ephemeral());
            assert_eq!(config.audit.default_limit, 25);
            assert_eq!(config.audit.max_limit, 500);
            assert_eq!(config.auth.user_id(), Some("user-7"));
            Ok(())
        });
    }

    #[test]
    fn invalid_limits_are_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("EVENTLINE_AUDIT__MAX_LIMIT", "0");
            let err = EvlConfig::load().expect_err("max_limit 0 must fail");
            assert!(err.to_string().contains("audit.max_limit"));
            Ok(())
        });
    }
}
