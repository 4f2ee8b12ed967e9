//! componentry: author component definitions and write them as `.component.yml` files.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ComponentSummary, LibrarySummary, create, create_at, form_layout, libraries, libraries_at,
    list, list_at, suggest_machine_name,
};
pub use domain::form::{
    CreatedComponent, FieldDescriptor, FieldName, FormLayout, FormState, FormValues,
    SubmitOutcome, ValidationErrors,
};
pub use domain::{AppError, AssetKind, ComponentType, WriteError};
