//! YAML document layout of a `.component.yml` file.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::domain::{AssetRef, ComponentDefinition};

/// File suffix of component definition documents.
pub const DEFINITION_SUFFIX: &str = ".component.yml";

/// File name of the definition document for a component id.
pub fn definition_file_name(id: &str) -> String {
    format!("{id}{DEFINITION_SUFFIX}")
}

#[derive(Serialize)]
struct ComponentDocument<'a> {
    name: &'a str,
    description: &'a str,
    #[serde(rename = "type")]
    component_type: &'a str,
    #[serde(skip_serializing_if = "AssetMap::is_empty")]
    js: AssetMap<'a>,
    #[serde(skip_serializing_if = "AssetMap::is_empty")]
    css: AssetMap<'a>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<&'a str>,
}

#[derive(Serialize)]
struct AssetAttributes {
    #[serde(rename = "type")]
    asset_type: &'static str,
    minified: bool,
    crossorigin: &'static str,
}

const EXTERNAL_ASSET: AssetAttributes =
    AssetAttributes { asset_type: "external", minified: true, crossorigin: "anonymous" };

/// Ordered `url -> attributes` mapping.
struct AssetMap<'a>(&'a [AssetRef]);

impl AssetMap<'_> {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for AssetMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for asset in self.0 {
            map.serialize_entry(&asset.url, &EXTERNAL_ASSET)?;
        }
        map.end()
    }
}

/// Render a definition as YAML.
///
/// Key order is `name, description, type, js, css, dependencies`; the last
/// three are omitted when empty and an unset type renders as an empty string.
pub fn render_definition(definition: &ComponentDefinition) -> Result<String, serde_yaml::Error> {
    let document = ComponentDocument {
        name: &definition.name,
        description: &definition.description,
        component_type: definition.component_type.map(|t| t.as_str()).unwrap_or(""),
        js: AssetMap(&definition.assets.js),
        css: AssetMap(&definition.assets.css),
        dependencies: definition.dependencies.iter().map(String::as_str).collect(),
    };
    serde_yaml::to_string(&document)
}
