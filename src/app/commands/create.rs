//! Create command: the component definition form.

use std::cell::Cell;

use crate::app::AppContext;
use crate::domain::form::{
    CreatedComponent, FieldName, FormLayout, FormState, FormValues, Route, SubmitOutcome,
    ValidationErrors, validate_submission,
};
use crate::domain::{AppError, LibraryIndex, WriteError};
use crate::ports::{AssetBuilder, ComponentCatalog, DefinitionWriter};

/// One authoring session of a component definition.
///
/// The catalog is re-read on `build` and on every `submit`; nothing is
/// cached between them.
pub struct ComponentForm<'a, C, A, W>
where
    C: ComponentCatalog,
    A: AssetBuilder,
    W: DefinitionWriter,
{
    ctx: &'a AppContext<C, A, W>,
    state: Cell<FormState>,
}

impl<'a, C, A, W> ComponentForm<'a, C, A, W>
where
    C: ComponentCatalog,
    A: AssetBuilder,
    W: DefinitionWriter,
{
    pub fn new(ctx: &'a AppContext<C, A, W>) -> Self {
        Self { ctx, state: Cell::new(FormState::Initial) }
    }

    pub fn state(&self) -> FormState {
        self.state.get()
    }

    /// Lay out the form fields and move to `AwaitingInput`.
    pub fn build(&self) -> Result<FormLayout, AppError> {
        self.ensure_not_complete()?;
        let index = self.library_index()?;
        self.await_input();
        Ok(FormLayout::build(&index))
    }

    /// Validate and, if valid, persist one submission.
    ///
    /// Discovery failures are returned as errors and leave the form awaiting
    /// input. Validation and write failures are reported through the outcome.
    pub fn submit(&self, values: &FormValues) -> Result<SubmitOutcome, AppError> {
        self.ensure_not_complete()?;
        self.await_input();
        self.transition(FormState::Validating);

        let catalog = match self.ctx.catalog().list_components() {
            Ok(catalog) => catalog,
            Err(err) => {
                self.transition(FormState::AwaitingInput);
                return Err(err);
            }
        };
        let index = LibraryIndex::build(&catalog, self.ctx.assets());
        let errors = validate_submission(
            values,
            |id| catalog.values().any(|components| components.contains_key(id)),
            &index,
        );
        if !errors.is_empty() {
            return Ok(self.reject(errors));
        }

        let definition = match values.to_definition() {
            Ok(definition) => definition,
            Err(err) => {
                let mut errors = ValidationErrors::default();
                errors.add(FieldName::Id, err.to_string());
                return Ok(self.reject(errors));
            }
        };

        self.transition(FormState::Persisting);
        match self.ctx.writer().write(&definition, self.ctx.storage_root()) {
            Ok(path) => {
                self.transition(FormState::Complete);
                Ok(SubmitOutcome::Complete(CreatedComponent {
                    id: definition.id.to_string(),
                    message: format!("Component [{}] created", definition.name),
                    name: definition.name,
                    path,
                    redirect: Route::ComponentListing,
                }))
            }
            // Another submission won the race for this id after validation.
            Err(WriteError::AlreadyExists { .. }) => {
                let mut errors = ValidationErrors::default();
                errors.add(
                    FieldName::Id,
                    format!(
                        "The machine-readable name '{}' is already in use. It must be unique.",
                        definition.id
                    ),
                );
                Ok(self.reject(errors))
            }
            Err(err) => {
                tracing::warn!(id = %definition.id, error = %err, "component definition not written");
                self.transition(FormState::Failed);
                Ok(SubmitOutcome::Failed(err))
            }
        }
    }

    fn library_index(&self) -> Result<LibraryIndex, AppError> {
        let catalog = self.ctx.catalog().list_components()?;
        Ok(LibraryIndex::build(&catalog, self.ctx.assets()))
    }

    fn reject(&self, errors: ValidationErrors) -> SubmitOutcome {
        self.transition(FormState::Rejected);
        SubmitOutcome::Rejected(errors)
    }

    fn await_input(&self) {
        if self.state.get() != FormState::AwaitingInput {
            self.transition(FormState::AwaitingInput);
        }
    }

    fn ensure_not_complete(&self) -> Result<(), AppError> {
        if self.state.get().is_terminal() {
            return Err(AppError::config_error("Component form has already been submitted"));
        }
        Ok(())
    }

    fn transition(&self, next: FormState) {
        let current = self.state.get();
        debug_assert!(current.can_transition_to(next), "illegal form transition {current:?} -> {next:?}");
        tracing::debug!(from = ?current, to = ?next, "component form transition");
        self.state.set(next);
    }
}
