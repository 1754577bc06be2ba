//! Application configuration module
//!
//! Configuration is read from environment variables with the `RESO` prefix;
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use reso::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod server;
mod storage;
mod wizard;

pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};
pub use wizard::WizardConfig;

use serde::Deserialize;

/// Root application configuration. Every section has defaults, so an empty
/// environment yields a runnable in-memory server.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub wizard: WizardConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `RESO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// - `RESO__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `RESO__STORAGE__BACKEND=file` -> `storage.backend = File`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("RESO").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}
