pub mod field;
pub mod layout;
pub mod state;
pub mod validation;
pub mod values;

pub use field::FieldName;
pub use layout::{
    FieldDescriptor, FormLayout, MultiSelectField, SelectField, TextAreaField, TextField,
    existing_libraries_field,
};
pub use state::{CreatedComponent, FormState, Route, SubmitOutcome};
pub use validation::{FieldError, ValidationErrors, validate_submission};
pub use values::FormValues;
