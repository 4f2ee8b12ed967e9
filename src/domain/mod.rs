pub mod component;
pub mod config;
pub mod error;
pub mod form;
pub mod identities;
pub mod library_index;

pub use component::{
    AssetKind, AssetRef, Assets, Catalog, ComponentDefinition, ComponentType, DEFINITION_SUFFIX,
    DiscoveredComponent, definition_file_name, parse_asset_lines, render_definition,
};
pub use config::{DiscoveryConfig, ProjectConfig, StorageConfig, WriteConfig};
pub use error::{AppError, WriteError};
pub use identities::{MACHINE_NAME_MAX_LENGTH, MachineName};
pub use library_index::LibraryIndex;
