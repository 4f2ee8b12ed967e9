mod asset_builder;
mod component_catalog;
mod definition_writer;

pub use asset_builder::{AssetBuilder, BuiltAsset};
pub use component_catalog::ComponentCatalog;
pub use definition_writer::DefinitionWriter;
