//! Authored component definition model.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::{AppError, MachineName};

/// The kinds of component this tool authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentType {
    Block,
    Library,
    Plugin,
}

impl ComponentType {
    pub const ALL: [ComponentType; 3] =
        [ComponentType::Block, ComponentType::Library, ComponentType::Plugin];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Block => "block",
            ComponentType::Library => "library",
            ComponentType::Plugin => "plugin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComponentType::Block => "Block",
            ComponentType::Library => "Library",
            ComponentType::Plugin => "Plugin",
        }
    }
}

impl FromStr for ComponentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AppError::InvalidComponentType(s.to_string()))
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asset kind a library can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetKind {
    Js,
    Css,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::Js, AssetKind::Css];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Js => "js",
            AssetKind::Css => "css",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Js => "JS",
            AssetKind::Css => "CSS",
        }
    }
}

impl FromStr for AssetKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "js" => Ok(AssetKind::Js),
            "css" => Ok(AssetKind::Css),
            other => Err(AppError::InvalidAssetKind(other.to_string())),
        }
    }
}

/// An external asset reference.
///
/// Every authored asset is external, minified and loaded with
/// `crossorigin: anonymous`; only the URL varies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub url: String,
}

impl AssetRef {
    pub fn external(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// JS and CSS assets in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assets {
    pub js: Vec<AssetRef>,
    pub css: Vec<AssetRef>,
}

impl Assets {
    pub fn is_empty(&self) -> bool {
        self.js.is_empty() && self.css.is_empty()
    }
}

/// A component definition ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDefinition {
    pub name: String,
    pub id: MachineName,
    pub description: String,
    pub component_type: Option<ComponentType>,
    pub assets: Assets,
    pub dependencies: BTreeSet<String>,
}
