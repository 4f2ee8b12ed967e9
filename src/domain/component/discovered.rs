//! Components read back from existing `.component.yml` files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::Mapping;

use crate::domain::{AppError, AssetKind, ComponentType, DEFINITION_SUFFIX};

/// All known components: provider namespace -> component id -> component.
pub type Catalog = BTreeMap<String, BTreeMap<String, DiscoveredComponent>>;

/// A component definition found during discovery.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredComponent {
    pub id: String,
    pub provider: String,
    pub name: String,
    pub description: String,
    /// Raw type string; discovered files may carry types this tool does not author.
    pub component_type: String,
    pub js: Mapping,
    pub css: Mapping,
    pub dependencies: Vec<String>,
    /// Definition file.
    pub path: PathBuf,
    /// Directory containing the definition; local assets resolve against it.
    pub subpath: PathBuf,
}

#[derive(Deserialize)]
struct DefinitionFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "type")]
    component_type: Option<String>,
    #[serde(default)]
    js: Option<Mapping>,
    #[serde(default)]
    css: Option<Mapping>,
    #[serde(default)]
    dependencies: Option<serde_yaml::Value>,
}

impl DiscoveredComponent {
    /// Component id derived from a definition file name.
    pub fn id_from_path(path: &Path) -> Option<String> {
        let file_name = path.file_name()?.to_str()?;
        let id = file_name.strip_suffix(DEFINITION_SUFFIX)?;
        (!id.is_empty()).then(|| id.to_string())
    }

    /// Parse a definition document found at `path`.
    pub fn parse(provider: &str, path: &Path, content: &str) -> Result<Self, AppError> {
        let id = Self::id_from_path(path).ok_or_else(|| AppError::ParseError {
            what: path.display().to_string(),
            details: format!("file name must end with {DEFINITION_SUFFIX}"),
        })?;
        let file: DefinitionFile = serde_yaml::from_str(content).map_err(|e| {
            AppError::ParseError { what: path.display().to_string(), details: e.to_string() }
        })?;

        Ok(Self {
            name: file.name.unwrap_or_else(|| id.clone()),
            id,
            provider: provider.to_string(),
            description: file.description.unwrap_or_default(),
            component_type: file.component_type.unwrap_or_default(),
            js: file.js.unwrap_or_default(),
            css: file.css.unwrap_or_default(),
            dependencies: file.dependencies.map(flatten_strings).unwrap_or_default(),
            path: path.to_path_buf(),
            subpath: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        })
    }

    pub fn is_library(&self) -> bool {
        self.component_type == ComponentType::Library.as_str()
    }

    pub fn raw_assets(&self, kind: AssetKind) -> &Mapping {
        match kind {
            AssetKind::Js => &self.js,
            AssetKind::Css => &self.css,
        }
    }
}

/// Dependencies may be a flat list or the nested `[[a, b]]` form older
/// definitions were written with.
fn flatten_strings(value: serde_yaml::Value) -> Vec<String> {
    match value {
        serde_yaml::Value::String(s) => vec![s],
        serde_yaml::Value::Sequence(items) => items.into_iter().flat_map(flatten_strings).collect(),
        _ => Vec::new(),
    }
}
