// File: src/submit.rs
// Purpose: Collected submissions and the handler they are passed to

use serde::Serialize;
use std::collections::BTreeMap;

use rusty_builder_types::{FieldDefinition, FieldValue};

use crate::state::FormState;
use crate::visibility;

/// Values handed to a [`SubmitHandler`] once the form validates.
///
/// Only visible fields with a value are included. `values` is keyed by
/// field id, `payload` by field label (the echoed, human-facing form).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Submission {
    values: BTreeMap<String, FieldValue>,
    payload: BTreeMap<String, FieldValue>,
}

impl Submission {
    /// Gather the visible values from a state snapshot
    pub fn collect(state: &FormState) -> Self {
        let mut submission = Submission::default();
        submission.collect_fields(&state.fields, state);
        submission
    }

    fn collect_fields(&mut self, fields: &[FieldDefinition], state: &FormState) {
        for field in visibility::visible_fields(fields, &state.values) {
            if field.is_section() {
                self.collect_fields(&field.fields, state);
                continue;
            }
            let Some(value) = state.value(&field.id) else {
                continue;
            };

            let key = self.free_key(field);
            self.payload.insert(key, value.clone());
            self.values.insert(field.id.clone(), value.clone());
        }
    }

    /// Payload key for a field: its label, or `"{label} ({id})"` when that is
    /// taken, numbered further until the key is unused
    fn free_key(&self, field: &FieldDefinition) -> String {
        if !self.payload.contains_key(&field.label) {
            return field.label.clone();
        }
        let suffixed = format!("{} ({})", field.label, field.id);
        let mut key = suffixed.clone();
        let mut n = 2;
        while self.payload.contains_key(&key) {
            key = format!("{suffixed} #{n}");
            n += 1;
        }
        key
    }

    /// Values keyed by field id
    pub fn values(&self) -> &BTreeMap<String, FieldValue> {
        &self.values
    }

    /// Values keyed by field label
    pub fn payload(&self) -> &BTreeMap<String, FieldValue> {
        &self.payload
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Payload as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.payload)
    }
}

/// Receives a submission that passed validation
pub trait SubmitHandler {
    fn on_submit(&mut self, submission: &Submission);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&Submission),
{
    fn on_submit(&mut self, submission: &Submission) {
        self(submission)
    }
}

/// Reports success and echoes the payload to the log
#[derive(Debug, Default)]
pub struct EchoHandler {
    last: Option<Submission>,
}

impl EchoHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent accepted submission
    pub fn last(&self) -> Option<&Submission> {
        self.last.as_ref()
    }
}

impl SubmitHandler for EchoHandler {
    fn on_submit(&mut self, submission: &Submission) {
        match serde_json::to_string(submission.payload()) {
            Ok(payload) => tracing::info!(%payload, "Form submitted successfully"),
            Err(e) => tracing::error!("Failed to encode submitted payload: {}", e),
        }
        self.last = Some(submission.clone());
    }
}
