use std::path::{Path, PathBuf};

use crate::ports::{AssetBuilder, ComponentCatalog, DefinitionWriter};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: ComponentCatalog, A: AssetBuilder, W: DefinitionWriter> {
    catalog: C,
    assets: A,
    writer: W,
    storage_root: PathBuf,
}

impl<C: ComponentCatalog, A: AssetBuilder, W: DefinitionWriter> AppContext<C, A, W> {
    /// Create a new application context.
    pub fn new(catalog: C, assets: A, writer: W, storage_root: PathBuf) -> Self {
        Self { catalog, assets, writer, storage_root }
    }

    /// Get a reference to the component catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Get a reference to the asset builder.
    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// Get a reference to the definition writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Directory new definitions are written under.
    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }
}
