pub mod parse;
pub mod project_config;

pub use project_config::{DiscoveryConfig, ProjectConfig, StorageConfig, WriteConfig};
