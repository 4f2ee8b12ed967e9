//! Component catalog port definition.

use crate::domain::{AppError, Catalog, DiscoveredComponent};

/// Read access to every known component definition.
///
/// Implementations must reflect the current state on each call; callers
/// rely on this for uniqueness checks.
pub trait ComponentCatalog {
    /// List all components grouped by provider namespace, then id.
    fn list_components(&self) -> Result<Catalog, AppError>;

    /// Whether any provider already defines `id`.
    fn component_exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.list_components()?.values().any(|components| components.contains_key(id)))
    }

    /// Find a component by id in any provider.
    fn find(&self, id: &str) -> Result<Option<DiscoveredComponent>, AppError> {
        Ok(self.list_components()?.into_values().find_map(|mut components| components.remove(id)))
    }
}
