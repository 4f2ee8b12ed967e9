use std::fmt;

/// Fields of the component definition form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Id,
    Description,
    Type,
    AssetsJs,
    AssetsCss,
    ExistingJs,
    ExistingCss,
}

impl FieldName {
    /// Submission key of the field.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Id => "id",
            FieldName::Description => "description",
            FieldName::Type => "type",
            FieldName::AssetsJs => "assets_js",
            FieldName::AssetsCss => "assets_css",
            FieldName::ExistingJs => "existing_js",
            FieldName::ExistingCss => "existing_css",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
