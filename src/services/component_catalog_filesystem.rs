//! Component catalog service - discovers `.component.yml` files on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Catalog, DEFINITION_SUFFIX, DiscoveredComponent};
use crate::ports::ComponentCatalog;

/// Filesystem-based component catalog.
///
/// Every call re-reads the tree; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct FilesystemComponentCatalog {
    discovery_roots: Vec<PathBuf>,
    storage_root: PathBuf,
    storage_provider: String,
}

impl FilesystemComponentCatalog {
    /// Create a catalog over the storage root and extra discovery roots.
    pub fn new(
        storage_root: PathBuf,
        storage_provider: impl Into<String>,
        discovery_roots: Vec<PathBuf>,
    ) -> Self {
        Self { discovery_roots, storage_root, storage_provider: storage_provider.into() }
    }

    fn discover_root(&self, root: &Path, catalog: &mut Catalog) -> Result<(), AppError> {
        for provider_dir in sorted_entries(root)? {
            if !provider_dir.is_dir() {
                continue;
            }
            let Some(provider) = provider_dir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let components = catalog.entry(provider.to_string()).or_default();
            collect_definitions(&provider_dir, provider, components)?;
        }
        Ok(())
    }
}

impl ComponentCatalog for FilesystemComponentCatalog {
    fn list_components(&self) -> Result<Catalog, AppError> {
        let mut catalog = Catalog::new();

        for root in &self.discovery_roots {
            self.discover_root(root, &mut catalog)?;
        }

        // The storage root does not exist until the first definition is written.
        if self.storage_root.exists() {
            let components = catalog.entry(self.storage_provider.clone()).or_default();
            collect_definitions(&self.storage_root, &self.storage_provider, components)?;
        }

        catalog.retain(|_, components| !components.is_empty());
        tracing::debug!(
            providers = catalog.len(),
            components = catalog.values().map(BTreeMap::len).sum::<usize>(),
            "component catalog read"
        );
        Ok(catalog)
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let unavailable = |e: std::io::Error| AppError::DiscoveryUnavailable {
        path: dir.to_path_buf(),
        details: e.to_string(),
    };
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(unavailable)? {
        entries.push(entry.map_err(unavailable)?.path());
    }
    entries.sort();
    Ok(entries)
}

fn collect_definitions(
    dir: &Path,
    provider: &str,
    components: &mut BTreeMap<String, DiscoveredComponent>,
) -> Result<(), AppError> {
    for path in sorted_entries(dir)? {
        if path.is_dir() {
            collect_definitions(&path, provider, components)?;
            continue;
        }
        let is_definition = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(DEFINITION_SUFFIX));
        if !is_definition {
            continue;
        }

        let content = fs::read_to_string(&path).map_err(|e| AppError::DiscoveryUnavailable {
            path: path.clone(),
            details: e.to_string(),
        })?;
        match DiscoveredComponent::parse(provider, &path, &content) {
            Ok(component) => {
                if let Some(previous) = components.insert(component.id.clone(), component) {
                    tracing::warn!(
                        id = %previous.id,
                        provider,
                        shadowed = %previous.path.display(),
                        "duplicate component id within provider"
                    );
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping malformed component definition");
            }
        }
    }
    Ok(())
}
