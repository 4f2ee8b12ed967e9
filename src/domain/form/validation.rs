//! Submission validation. Every check runs; errors are collected per field.

use std::fmt;

use crate::domain::form::{FieldName, FormValues};
use crate::domain::{AssetKind, LibraryIndex, MACHINE_NAME_MAX_LENGTH, MachineName, parse_asset_lines};

/// A validation failure attributed to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

/// All validation failures of one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn add(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.push(FieldError { field, message: message.into() });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: FieldName) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn for_field(&self, field: FieldName) -> Vec<&str> {
        self.0.iter().filter(|e| e.field == field).map(|e| e.message.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(|e| format!("{}: {}", e.field, e.message)).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Validate a submission against the live catalog.
///
/// `component_exists` answers whether an id is already taken; `index` holds
/// the libraries the existing-library selects were offered from.
pub fn validate_submission<F>(
    values: &FormValues,
    component_exists: F,
    index: &LibraryIndex,
) -> ValidationErrors
where
    F: Fn(&str) -> bool,
{
    let mut errors = ValidationErrors::default();

    let id = values.resolved_id();
    if id.is_empty() {
        errors.add(FieldName::Id, "Machine-readable name field is required.");
    } else if id.chars().count() > MACHINE_NAME_MAX_LENGTH {
        errors.add(
            FieldName::Id,
            format!("Machine-readable name cannot be longer than {MACHINE_NAME_MAX_LENGTH} characters."),
        );
    } else if !MachineName::is_valid(&id) {
        errors.add(
            FieldName::Id,
            "The machine-readable name must contain only lowercase letters, numbers, and underscores.",
        );
    } else if component_exists(&id) {
        errors.add(
            FieldName::Id,
            format!("The machine-readable name '{id}' is already in use. It must be unique."),
        );
    }

    if values.name.trim().is_empty() {
        errors.add(FieldName::Name, "Name field is required.");
    }

    let component_type = match values.parsed_type() {
        Ok(component_type) => component_type,
        Err(_) => {
            errors.add(FieldName::Type, "The submitted value in the Type element is not allowed.");
            None
        }
    };

    let typed = component_type.is_some() || !values.component_type.trim().is_empty();
    if typed {
        let dependencies = values.selected_dependencies();
        if parse_asset_lines(&values.assets_css).is_empty()
            && parse_asset_lines(&values.assets_js).is_empty()
            && dependencies.is_empty()
        {
            errors.add(FieldName::AssetsCss, "Missing css library.");
            errors.add(FieldName::AssetsJs, "Missing js library.");
        }

        for (kind, field, selected) in [
            (AssetKind::Js, FieldName::ExistingJs, &values.existing_js),
            (AssetKind::Css, FieldName::ExistingCss, &values.existing_css),
        ] {
            for id in selected.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
                if !index.contains(kind, id) {
                    errors.add(
                        field,
                        format!("'{id}' is not an available {} library.", kind.as_str()),
                    );
                }
            }
        }
    }

    errors
}
