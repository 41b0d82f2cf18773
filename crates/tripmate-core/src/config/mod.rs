//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate, with `TRIPMATE_*` environment variables layered on top.
//! Each sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::auth::AuthConfig;
use self::database::DatabaseConfig;
use self::logging::LoggingConfig;

use crate::result::AppResult;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// (base file + optional environment overlay + env vars).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Token verification settings.
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a base TOML file plus an optional overlay.
    ///
    /// Environment variables with the `TRIPMATE` prefix override file
    /// values (`TRIPMATE__DATABASE__URL`, etc.).
    pub fn load(base: &str, overlay: Option<&str>) -> AppResult<Self> {
        let mut builder = Config::builder().add_source(File::with_name(base));
        if let Some(path) = overlay {
            builder = builder.add_source(File::with_name(path).required(false));
        }
        let merged = builder
            .add_source(Environment::with_prefix("TRIPMATE").separator("__"))
            .build()?;
        Ok(merged.try_deserialize()?)
    }
}
