//! # probe-config
//!
//! Layered configuration loading for docprobe using figment, plus the
//! service-account credential loader.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DOCPROBE_*` prefix, `__` as separator)
//! 2. Project-level `./docprobe.toml`
//! 3. User-level `~/.config/docprobe/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DOCPROBE_FIRESTORE__PROJECT_ID` -> `firestore.project_id`,
//! `DOCPROBE_ENV_FILE` -> `env_file`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use probe_config::ProbeConfig;
//!
//! let config = ProbeConfig::load_with_dotenv().expect("config");
//! let credential = config.load_credential().expect("credential");
//! println!("project: {}", config.firestore.project_id);
//! # drop(credential);
//! ```

pub mod credential;
mod error;
mod firestore;

pub use credential::{DEFAULT_CREDENTIAL_KEY, ServiceAccountCredential};
pub use error::{ConfigError, CredentialError};
pub use firestore::{FirestoreConfig, MAX_PAGE_SIZE};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_env_file() -> PathBuf {
    PathBuf::from(".env.local")
}

fn default_credential_key() -> String {
    DEFAULT_CREDENTIAL_KEY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// `KEY=VALUE` file holding the service-account credential.
    #[serde(default = "default_env_file")]
    pub env_file: PathBuf,

    /// Key in `env_file` whose value is the credential JSON.
    #[serde(default = "default_credential_key")]
    pub credential_key: String,

    #[serde(default)]
    pub firestore: FirestoreConfig,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            env_file: default_env_file(),
            credential_key: default_credential_key(),
            firestore: FirestoreConfig::default(),
        }
    }
}

impl ProbeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`. Use [`ProbeConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after applying `./.env` to the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv()
            && !error.not_found()
        {
            tracing::warn!(%error, "ignoring unreadable .env file");
        }
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.firestore.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from("docprobe.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("DOCPROBE_").split("__"))
    }

    /// Read the credential named by `credential_key` from `env_file`.
    ///
    /// # Errors
    ///
    /// See [`credential::load_credential`].
    pub fn load_credential(&self) -> Result<ServiceAccountCredential, CredentialError> {
        credential::load_credential(Path::new(&self.env_file), &self.credential_key)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("docprobe").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ProbeConfig::default();
        assert_eq!(config.env_file, PathBuf::from(".env.local"));
        assert_eq!(config.credential_key, "FIREBASE_SERVICE_ACCOUNT_KEY");
        assert_eq!(config.firestore.project_id, "exam-affiliate-ads");
    }

    #[test]
    fn figment_defaults_extract() {
        figment::Jail::expect_with(|_jail| {
            let config = ProbeConfig::load().expect("defaults should extract");
            assert_eq!(config.firestore.page_size, 100);
            assert_eq!(config.firestore.database, "(default)");
            Ok(())
        });
    }
}
