//! Project configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::parse::parse_config_content;
use crate::domain::{AppError, ProjectConfig};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "componentry.toml";

/// A parsed configuration together with the directory its paths are relative to.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ProjectConfig,
    pub base_dir: PathBuf,
}

impl LoadedConfig {
    pub fn storage_root(&self) -> PathBuf {
        self.base_dir.join(&self.config.storage.root)
    }

    pub fn discovery_roots(&self) -> Vec<PathBuf> {
        self.config.discovery.paths.iter().map(|p| self.base_dir.join(p)).collect()
    }
}

/// Load `componentry.toml`.
///
/// With an explicit path the file must exist. Without one, `componentry.toml`
/// in `cwd` is used if present, and defaults otherwise.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, AppError> {
    let (path, required) = match explicit {
        Some(path) => (cwd.join(path), true),
        None => (cwd.join(CONFIG_FILE), false),
    };

    if !path.exists() {
        if required {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(LoadedConfig { config: ProjectConfig::default(), base_dir: cwd.to_path_buf() });
    }

    let content = fs::read_to_string(&path)?;
    let config = parse_config_content(&content)?;
    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf());
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(LoadedConfig { config, base_dir })
}
