//! Asset build port definition.

use std::path::{Path, PathBuf};

use serde_yaml::Mapping;
use url::Url;

/// An asset entry resolved for loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltAsset {
    External(Url),
    /// Protocol-relative URL (`//host/path`), kept verbatim.
    ProtocolRelative(String),
    Local(PathBuf),
}

/// Resolves a component's raw asset declarations into loadable assets.
pub trait AssetBuilder {
    /// Build the asset list for one asset kind of a component.
    ///
    /// `raw` maps asset keys to attribute mappings; local keys resolve
    /// against `base_path`. Entries that cannot be resolved are left out.
    fn build_asset_list(&self, raw: &Mapping, base_path: &Path) -> Vec<BuiltAsset>;
}
