//! Project configuration model (`componentry.toml`).

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Parsed `componentry.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub write: WriteConfig,
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.storage.validate()?;
        self.write.validate()?;
        Ok(())
    }
}

/// Where new definitions are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Storage root; relative paths resolve against the config file's directory.
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,
    /// Provider namespace under which the storage root is listed.
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { root: default_storage_root(), provider: default_provider() }
    }
}

impl StorageConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.root.as_os_str().is_empty() {
            return Err(AppError::config_error("storage.root must not be empty"));
        }
        if self.provider.trim().is_empty() {
            return Err(AppError::config_error("storage.provider must not be empty"));
        }
        Ok(())
    }
}

/// Extra roots scanned for existing definitions.
///
/// Each immediate child directory of a root is one provider namespace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscoveryConfig {
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WriteConfig {
    /// Deadline for one definition write, in milliseconds.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl WriteConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.timeout_ms == Some(0) {
            return Err(AppError::config_error("write.timeout_ms must be greater than 0"));
        }
        Ok(())
    }
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("components")
}

fn default_provider() -> String {
    "custom".to_string()
}
