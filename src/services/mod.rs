mod asset_builder_filesystem;
mod component_catalog_filesystem;
mod definition_writer_filesystem;

pub use asset_builder_filesystem::FilesystemAssetBuilder;
pub use component_catalog_filesystem::FilesystemComponentCatalog;
pub use definition_writer_filesystem::{FilesystemDefinitionWriter, WriteMode};
