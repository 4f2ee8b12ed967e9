//! List command: the component listing.

use serde::Serialize;

use crate::domain::AppError;
use crate::ports::ComponentCatalog;

/// Summary line of one known component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSummary {
    pub provider: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub description: String,
}

/// List every component, ordered by provider then id.
pub fn execute<C: ComponentCatalog>(catalog: &C) -> Result<Vec<ComponentSummary>, AppError> {
    let components = catalog.list_components()?;

    Ok(components
        .into_values()
        .flat_map(|by_id| by_id.into_values())
        .map(|c| ComponentSummary {
            provider: c.provider,
            id: c.id,
            name: c.name,
            component_type: c.component_type,
            description: c.description,
        })
        .collect())
}
