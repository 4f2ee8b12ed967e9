//! Typed field descriptors for the component definition form.

use crate::domain::form::FieldName;
use crate::domain::{AssetKind, ComponentType, LibraryIndex, MACHINE_NAME_MAX_LENGTH};

/// A single-line text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub field: FieldName,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub required: bool,
    pub max_length: Option<usize>,
    /// Field whose value seeds a machine-name suggestion for this one.
    pub suggest_from: Option<FieldName>,
}

/// A multi-line free-text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAreaField {
    pub field: FieldName,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub rows: u8,
    /// Only shown once a component type has been chosen.
    pub requires_type: bool,
}

/// A single-choice select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectField {
    pub field: FieldName,
    pub title: &'static str,
    pub required: bool,
    /// `(value, label)` pairs in display order.
    pub options: Vec<(String, String)>,
}

/// A multiple-choice select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectField {
    pub field: FieldName,
    pub title: String,
    pub description: Option<&'static str>,
    /// `(value, label)` pairs in display order.
    pub options: Vec<(String, String)>,
    pub requires_type: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDescriptor {
    Text(TextField),
    TextArea(TextAreaField),
    Select(SelectField),
    MultiSelect(MultiSelectField),
}

impl FieldDescriptor {
    pub fn field(&self) -> FieldName {
        match self {
            FieldDescriptor::Text(f) => f.field,
            FieldDescriptor::TextArea(f) => f.field,
            FieldDescriptor::Select(f) => f.field,
            FieldDescriptor::MultiSelect(f) => f.field,
        }
    }

    pub fn requires_type(&self) -> bool {
        match self {
            FieldDescriptor::TextArea(f) => f.requires_type,
            FieldDescriptor::MultiSelect(f) => f.requires_type,
            FieldDescriptor::Text(_) | FieldDescriptor::Select(_) => false,
        }
    }
}

/// Ordered field set presented for one component definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub fields: Vec<FieldDescriptor>,
    pub submit_label: &'static str,
}

impl FormLayout {
    /// Lay out the form. Existing-library selects appear only for asset kinds
    /// the index has libraries for.
    pub fn build(index: &LibraryIndex) -> Self {
        let mut fields = vec![
            FieldDescriptor::Text(TextField {
                field: FieldName::Name,
                title: "Name",
                description: None,
                required: true,
                max_length: None,
                suggest_from: None,
            }),
            FieldDescriptor::Text(TextField {
                field: FieldName::Id,
                title: "Machine name",
                description: Some(
                    "A unique name for this item. It must only contain lowercase letters, numbers, and underscores.",
                ),
                required: true,
                max_length: Some(MACHINE_NAME_MAX_LENGTH),
                suggest_from: Some(FieldName::Name),
            }),
            FieldDescriptor::TextArea(TextAreaField {
                field: FieldName::Description,
                title: "Description",
                description: None,
                rows: 3,
                requires_type: false,
            }),
            FieldDescriptor::Select(SelectField {
                field: FieldName::Type,
                title: "Type",
                required: false,
                options: ComponentType::ALL
                    .into_iter()
                    .map(|t| (t.as_str().to_string(), t.label().to_string()))
                    .collect(),
            }),
            new_assets_field(AssetKind::Js),
            new_assets_field(AssetKind::Css),
        ];
        fields.extend(AssetKind::ALL.into_iter().filter_map(|kind| existing_libraries_field(index, kind)));

        Self { fields, submit_label: "Create component" }
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|d| d.field() == field)
    }
}

fn new_assets_field(kind: AssetKind) -> FieldDescriptor {
    let (field, description) = match kind {
        AssetKind::Js => (
            FieldName::AssetsJs,
            "External js libraries, in case of multiple, enter one value per line.",
        ),
        AssetKind::Css => (
            FieldName::AssetsCss,
            "External css libraries, in case of multiple, enter one value per line.",
        ),
    };
    FieldDescriptor::TextArea(TextAreaField {
        field,
        title: kind.label(),
        description: Some(description),
        rows: 2,
        requires_type: true,
    })
}

/// Multi-select of existing libraries providing `kind` assets, if any exist.
pub fn existing_libraries_field(index: &LibraryIndex, kind: AssetKind) -> Option<FieldDescriptor> {
    let options = index.options(kind);
    if options.is_empty() {
        return None;
    }
    let field = match kind {
        AssetKind::Js => FieldName::ExistingJs,
        AssetKind::Css => FieldName::ExistingCss,
    };
    Some(FieldDescriptor::MultiSelect(MultiSelectField {
        field,
        title: format!("Existing {} libraries", kind.label()),
        description: Some("In case of multiple, select multiple."),
        options: options.iter().map(|(id, name)| (id.clone(), name.clone())).collect(),
        requires_type: true,
    }))
}
