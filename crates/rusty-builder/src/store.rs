// File: src/store.rs
// Purpose: Owned form state handle (state + dispatch) passed to whoever needs it

use rusty_builder_types::FieldValue;

use crate::config::BuilderConfig;
use crate::error::FormError;
use crate::render::{self, RenderedField};
use crate::schema::FormSchema;
use crate::state::{FormAction, FormState};
use crate::submit::{SubmitHandler, Submission};
use crate::validate::{self, ValidationMode, ValidationResult};

/// The single owner of a form's state.
///
/// Input widgets write through [`FormStore::handle_change`]; renderers read
/// [`FormStore::state`] or [`FormStore::render`]. Every dispatch swaps in a
/// new snapshot, so a snapshot borrowed earlier is never mutated under a
/// reader.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    state: FormState,
    mode: ValidationMode,
}

impl FormStore {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            state: FormState::new(),
            mode,
        }
    }

    pub fn from_config(config: &BuilderConfig) -> Self {
        Self::new(config.validation.mode)
    }

    /// Seed a store with a checked schema
    pub fn from_schema(schema: FormSchema, mode: ValidationMode) -> Result<Self, FormError> {
        schema.check()?;
        Ok(Self {
            state: FormState {
                fields: schema.fields,
                ..FormState::default()
            },
            mode,
        })
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Replace the current snapshot with the reducer's result
    pub fn dispatch(&mut self, action: FormAction) {
        self.state = self.state.reduce(action);
    }

    /// Record a new value from an input widget.
    ///
    /// In per-field mode the field is validated right away and its error is
    /// set or cleared.
    pub fn handle_change(&mut self, id: &str, value: impl Into<FieldValue>) {
        self.dispatch(FormAction::update(id, value));
        self.revalidate(id);
    }

    /// Unset a field's value (e.g. a file input was cleared)
    pub fn clear_value(&mut self, id: &str) {
        self.dispatch(FormAction::unset(id));
        self.revalidate(id);
    }

    fn revalidate(&mut self, id: &str) {
        if !self.mode.validates_on_change() {
            return;
        }

        let Some(field) = self.state.field(id) else {
            tracing::debug!(id = %id, "value set for unknown field, not validated");
            return;
        };

        let error = validate::validate_field(field, self.state.value(id), self.mode)
            .err()
            .unwrap_or_default();
        self.dispatch(FormAction::set_error(id, error));
    }

    /// Validate every visible field and write the outcome into `errors`
    pub fn validate_all(&mut self) -> ValidationResult {
        let result = validate::validate_form(&self.state, self.mode);
        for id in &result.checked {
            let error = result.get_error(id).unwrap_or_default().to_string();
            self.dispatch(FormAction::set_error(id.clone(), error));
        }
        result
    }

    /// Validate the whole form and, if it passes, hand the visible values to
    /// `handler`. A failing form is not submitted; its errors are returned
    /// and also stored for display.
    pub fn submit<H>(&mut self, handler: &mut H) -> Result<Submission, FormError>
    where
        H: SubmitHandler + ?Sized,
    {
        let result = self.validate_all();
        if !result.is_valid() {
            tracing::warn!(invalid = result.errors.len(), "submission blocked by validation");
            return Err(FormError::ValidationFailed {
                errors: result.errors,
            });
        }

        let submission = Submission::collect(&self.state);
        tracing::info!(fields = submission.values().len(), "form submitted");
        handler.on_submit(&submission);
        Ok(submission)
    }

    /// View model of the currently visible fields
    pub fn render(&self) -> Vec<RenderedField> {
        render::project(&self.state)
    }
}
