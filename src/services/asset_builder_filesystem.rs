use std::path::Path;

use serde_yaml::{Mapping, Value};
use url::Url;

use crate::ports::{AssetBuilder, BuiltAsset};

/// Resolves asset declarations: external URLs as-is, local files against
/// the component directory (kept only if present).
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemAssetBuilder;

impl AssetBuilder for FilesystemAssetBuilder {
    fn build_asset_list(&self, raw: &Mapping, base_path: &Path) -> Vec<BuiltAsset> {
        raw.iter()
            .filter_map(|(key, attributes)| {
                let key = key.as_str()?.trim();
                if key.is_empty() {
                    return None;
                }
                resolve(key, attributes, base_path)
            })
            .collect()
    }
}

fn resolve(key: &str, attributes: &Value, base_path: &Path) -> Option<BuiltAsset> {
    if key.starts_with("//") {
        return Some(BuiltAsset::ProtocolRelative(key.to_string()));
    }
    if let Ok(url) = Url::parse(key)
        && matches!(url.scheme(), "http" | "https")
    {
        return Some(BuiltAsset::External(url));
    }
    if is_declared_external(attributes) {
        tracing::debug!(asset = key, "external asset is not an absolute http(s) URL");
        return None;
    }

    let local = base_path.join(key);
    if local.is_file() {
        Some(BuiltAsset::Local(local))
    } else {
        tracing::debug!(asset = %local.display(), "local asset not found");
        None
    }
}

fn is_declared_external(attributes: &Value) -> bool {
    attributes.get("type").and_then(Value::as_str) == Some("external")
}
