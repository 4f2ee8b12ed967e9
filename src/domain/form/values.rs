use std::collections::BTreeSet;

use crate::domain::{
    AppError, Assets, ComponentDefinition, ComponentType, MachineName, parse_asset_lines,
};

/// Raw input of one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    /// Blank means "derive from name".
    pub id: String,
    pub description: String,
    /// Blank means unset.
    pub component_type: String,
    /// Newline-delimited external JS URLs.
    pub assets_js: String,
    /// Newline-delimited external CSS URLs.
    pub assets_css: String,
    pub existing_js: Vec<String>,
    pub existing_css: Vec<String>,
}

impl FormValues {
    /// The machine name this submission will be stored under.
    pub fn resolved_id(&self) -> String {
        let id = self.id.trim();
        if id.is_empty() { MachineName::suggest(self.name.trim()) } else { id.to_string() }
    }

    /// Component type, `None` when left blank.
    pub fn parsed_type(&self) -> Result<Option<ComponentType>, AppError> {
        let raw = self.component_type.trim();
        if raw.is_empty() { Ok(None) } else { raw.parse().map(Some) }
    }

    /// Existing library ids from both selects.
    pub fn selected_dependencies(&self) -> BTreeSet<String> {
        self.existing_js
            .iter()
            .chain(&self.existing_css)
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Build the definition this submission describes.
    ///
    /// Asset sources only apply to typed components; with no type the
    /// definition carries none.
    pub fn to_definition(&self) -> Result<ComponentDefinition, AppError> {
        let id = MachineName::new(&self.resolved_id())?;
        let component_type = self.parsed_type()?;

        let (assets, dependencies) = if component_type.is_some() {
            (
                Assets {
                    js: parse_asset_lines(&self.assets_js),
                    css: parse_asset_lines(&self.assets_css),
                },
                self.selected_dependencies(),
            )
        } else {
            (Assets::default(), BTreeSet::new())
        };

        Ok(ComponentDefinition {
            name: self.name.trim().to_string(),
            id,
            description: self.description.trim().to_string(),
            component_type,
            assets,
            dependencies,
        })
    }
}
