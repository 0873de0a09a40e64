// File: src/state.rs
// Purpose: Form state snapshot and the reducer that produces new snapshots

use serde::Serialize;
use std::collections::BTreeMap;

use rusty_builder_types::{FieldDefinition, FieldValue};

/// Everything that determines what the form shows.
///
/// `values` and `errors` are keyed by field id. A snapshot is never changed
/// in place by the reducer; every action produces a fresh `FormState`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    /// Field definitions in insertion order
    pub fields: Vec<FieldDefinition>,
    /// Current value per field id
    pub values: BTreeMap<String, FieldValue>,
    /// Current error message per field id
    pub errors: BTreeMap<String, String>,
}

/// State transitions accepted by [`FormState::reduce`]
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    AddField(FieldDefinition),
    /// `value: None` unsets the value (e.g. a file input was cleared)
    UpdateValue {
        id: String,
        value: Option<FieldValue>,
    },
    /// An empty message clears the error
    SetError { id: String, error: String },
    RemoveField { id: String },
}

impl FormAction {
    pub fn update(id: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        FormAction::UpdateValue {
            id: id.into(),
            value: Some(value.into()),
        }
    }

    pub fn unset(id: impl Into<String>) -> Self {
        FormAction::UpdateValue {
            id: id.into(),
            value: None,
        }
    }

    pub fn set_error(id: impl Into<String>, error: impl Into<String>) -> Self {
        FormAction::SetError {
            id: id.into(),
            error: error.into(),
        }
    }

    pub fn clear_error(id: impl Into<String>) -> Self {
        Self::set_error(id, "")
    }

    pub fn remove(id: impl Into<String>) -> Self {
        FormAction::RemoveField { id: id.into() }
    }

    fn name(&self) -> &'static str {
        match self {
            FormAction::AddField(_) => "add_field",
            FormAction::UpdateValue { .. } => "update_value",
            FormAction::SetError { .. } => "set_error",
            FormAction::RemoveField { .. } => "remove_field",
        }
    }
}

impl FormState {
    /// Create empty form state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action, returning the next snapshot
    pub fn reduce(&self, action: FormAction) -> FormState {
        tracing::trace!(action = action.name(), "reducing form state");

        let mut next = self.clone();
        match action {
            FormAction::AddField(field) => {
                tracing::debug!(id = %field.id, field_type = %field.field_type, "field added");
                next.fields.push(field);
            }
            FormAction::UpdateValue { id, value } => match value {
                Some(value) => {
                    next.values.insert(id, value);
                }
                None => {
                    next.values.remove(&id);
                }
            },
            FormAction::SetError { id, error } => {
                if error.is_empty() {
                    next.errors.remove(&id);
                } else {
                    next.errors.insert(id, error);
                }
            }
            FormAction::RemoveField { id } => {
                // Values and errors of nested fields go with a removed section;
                // an id with no definition leaves all three collections alone
                let removed_ids: Vec<String> = match detach(&mut next.fields, &id) {
                    Some(field) => field.ids().into_iter().map(str::to_string).collect(),
                    None => Vec::new(),
                };
                for removed in &removed_ids {
                    next.values.remove(removed);
                    next.errors.remove(removed);
                }
                tracing::debug!(id = %id, removed = removed_ids.len(), "field removed");
            }
        }
        next
    }

    /// Find a field definition anywhere in the tree
    pub fn field(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find_map(|f| f.find(id))
    }

    /// Get current value for a field
    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    /// Get error message for a field
    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(|s| s.as_str())
    }

    /// Check if field has an error
    pub fn has_error(&self, id: &str) -> bool {
        self.errors.contains_key(id)
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Every field id in the tree, depth first
    pub fn field_ids(&self) -> Vec<&str> {
        self.fields.iter().flat_map(|f| f.ids()).collect()
    }
}

/// Remove the first field with `id` from the tree and return it
fn detach(fields: &mut Vec<FieldDefinition>, id: &str) -> Option<FieldDefinition> {
    if let Some(pos) = fields.iter().position(|f| f.id == id) {
        return Some(fields.remove(pos));
    }
    fields.iter_mut().find_map(|f| detach(&mut f.fields, id))
}

/// Append a field definition. Ids are not checked for uniqueness here.
pub fn add_field(state: &FormState, field: FieldDefinition) -> FormState {
    state.reduce(FormAction::AddField(field))
}

pub fn update_value(state: &FormState, id: &str, value: Option<FieldValue>) -> FormState {
    state.reduce(FormAction::UpdateValue {
        id: id.to_string(),
        value,
    })
}

pub fn set_error(state: &FormState, id: &str, error: &str) -> FormState {
    state.reduce(FormAction::set_error(id, error))
}

/// Remove a field together with its value and error
pub fn remove_field(state: &FormState, id: &str) -> FormState {
    state.reduce(FormAction::remove(id))
}
