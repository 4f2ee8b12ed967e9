//! In-memory catalog double.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Catalog, DiscoveredComponent};
use crate::ports::ComponentCatalog;

/// Catalog backed by a shared in-memory map.
///
/// Clones share state, so a test can keep a handle and add components while
/// the form under test holds another.
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    pub components: Arc<Mutex<Catalog>>,
    pub unavailable: Arc<Mutex<bool>>,
    pub reads: Arc<Mutex<usize>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a component definition document under `provider`.
    pub fn with_component(self, provider: &str, id: &str, yaml: &str) -> Self {
        self.add_component(provider, id, yaml);
        self
    }

    pub fn add_component(&self, provider: &str, id: &str, yaml: &str) {
        let path = PathBuf::from(format!("{provider}/{id}/{id}.component.yml"));
        let component = DiscoveredComponent::parse(provider, &path, yaml)
            .expect("seeded component should parse");
        self.components
            .lock()
            .unwrap()
            .entry(provider.to_string())
            .or_default()
            .insert(id.to_string(), component);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap() = unavailable;
    }

    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl ComponentCatalog for MemoryCatalog {
    fn list_components(&self) -> Result<Catalog, AppError> {
        *self.reads.lock().unwrap() += 1;
        if *self.unavailable.lock().unwrap() {
            return Err(AppError::DiscoveryUnavailable {
                path: PathBuf::from("memory"),
                details: "catalog offline".to_string(),
            });
        }
        Ok(self.components.lock().unwrap().clone())
    }
}

/// Build a catalog from `(provider, id, name, yaml)` tuples.
pub fn catalog_with(entries: &[(&str, &str, &str, &str)]) -> Catalog {
    let memory = MemoryCatalog::new();
    for (provider, id, name, yaml) in entries {
        memory.add_component(provider, id, &format!("name: {name}\n{yaml}"));
    }
    memory.list_components().expect("memory catalog is available")
}
