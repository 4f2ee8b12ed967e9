pub mod asset_text;
pub mod definition;
pub mod discovered;
pub mod document;

pub use asset_text::parse_asset_lines;
pub use definition::{AssetKind, AssetRef, Assets, ComponentDefinition, ComponentType};
pub use discovered::{Catalog, DiscoveredComponent};
pub use document::{DEFINITION_SUFFIX, definition_file_name, render_definition};
