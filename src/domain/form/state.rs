use std::path::PathBuf;

use crate::domain::WriteError;
use crate::domain::form::ValidationErrors;

/// Phase of the component definition form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Initial,
    AwaitingInput,
    Validating,
    Rejected,
    Persisting,
    Failed,
    Complete,
}

impl FormState {
    pub fn is_terminal(self) -> bool {
        matches!(self, FormState::Complete)
    }

    /// Whether the form may move from `self` to `next`.
    ///
    /// `Rejected` and `Failed` both lead back to input with the submitted
    /// values kept. A create-exclusive write that finds the id taken rejects
    /// from `Persisting`; a catalog that cannot be read returns `Validating`
    /// to input.
    pub fn can_transition_to(self, next: FormState) -> bool {
        use FormState::*;
        matches!(
            (self, next),
            (Initial, AwaitingInput)
                | (AwaitingInput, Validating)
                | (Validating, Rejected | Persisting | AwaitingInput)
                | (Persisting, Rejected | Failed | Complete)
                | (Rejected | Failed, AwaitingInput)
        )
    }
}

/// Where the presentation layer should go after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ComponentListing,
}

/// A component that was written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedComponent {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
    /// User-facing confirmation.
    pub message: String,
    pub redirect: Route,
}

/// Result of submitting the form once.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; every field error is included.
    Rejected(ValidationErrors),
    /// The definition could not be written.
    Failed(WriteError),
    Complete(CreatedComponent),
}

impl SubmitOutcome {
    pub fn state(&self) -> FormState {
        match self {
            SubmitOutcome::Rejected(_) => FormState::Rejected,
            SubmitOutcome::Failed(_) => FormState::Failed,
            SubmitOutcome::Complete(_) => FormState::Complete,
        }
    }
}
