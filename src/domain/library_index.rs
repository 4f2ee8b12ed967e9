//! Library asset index: which library components provide JS or CSS.

use std::collections::BTreeMap;

use crate::domain::{AssetKind, Catalog};
use crate::ports::AssetBuilder;

/// Library components with a non-empty built asset list, per asset kind.
///
/// Each side maps component id to display name. A library may appear on one
/// side, both, or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryIndex {
    pub js: BTreeMap<String, String>,
    pub css: BTreeMap<String, String>,
}

impl LibraryIndex {
    /// Index every library component in the catalog.
    pub fn build<A: AssetBuilder + ?Sized>(catalog: &Catalog, builder: &A) -> Self {
        let mut index = Self::default();

        for component in catalog.values().flat_map(BTreeMap::values) {
            if !component.is_library() {
                continue;
            }
            for kind in AssetKind::ALL {
                let built = builder.build_asset_list(component.raw_assets(kind), &component.subpath);
                if !built.is_empty() {
                    index.side_mut(kind).insert(component.id.clone(), component.name.clone());
                }
            }
        }

        tracing::debug!(js = index.js.len(), css = index.css.len(), "library index built");
        index
    }

    /// Libraries offered as existing dependencies for one asset kind.
    pub fn options(&self, kind: AssetKind) -> &BTreeMap<String, String> {
        match kind {
            AssetKind::Js => &self.js,
            AssetKind::Css => &self.css,
        }
    }

    fn side_mut(&mut self, kind: AssetKind) -> &mut BTreeMap<String, String> {
        match kind {
            AssetKind::Js => &mut self.js,
            AssetKind::Css => &mut self.css,
        }
    }

    pub fn contains(&self, kind: AssetKind, id: &str) -> bool {
        self.options(kind).contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.js.is_empty() && self.css.is_empty()
    }
}
