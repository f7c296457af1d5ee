//! # snag-config
//!
//! Layered configuration loading for Snag using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SNAG_*` prefix, `__` as separator)
//! 2. Project-level `.snag/config.toml`
//! 3. User-level `~/.config/snag/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SNAG_SERVER__BIND` -> `server.bind`,
//! `SNAG_CLERK__SECRET_KEY` -> `clerk.secret_key`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use snag_config::SnagConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = SnagConfig::load_with_dotenv().expect("config");
//!
//! if config.clerk.is_configured() {
//!     println!("listening on {}", config.server.bind);
//! }
//! ```

mod clerk;
mod error;
mod server;
mod store;

pub use clerk::ClerkConfig;
pub use error::ConfigError;
pub use server::ServerConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SnagConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub clerk: ClerkConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl SnagConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`SnagConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if figment extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads the nearest `.env` file before building the figment. This is
    /// the typical entry point for the server binary and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if figment extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".snag/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("SNAG_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("snag").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
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

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SnagConfig::default();
        assert!(!config.clerk.is_configured());
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.store.path, "snag.db");
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = SnagConfig::figment();
        let config: SnagConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.server.api_prefix, "/api");
        assert!(!config.clerk.is_configured());
    }
}
