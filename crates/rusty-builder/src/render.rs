// File: src/render.rs
// Purpose: View model of the visible form, for whatever front end draws it

use serde::Serialize;

use rusty_builder_types::{FieldDefinition, FieldType, FieldValue};
use rusty_builder_validation::COUNTRIES;

use crate::registry::{self, Icon, Widget};
use crate::state::FormState;
use crate::visibility;

/// One selectable entry of a select or radio group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOption {
    pub value: String,
    pub label: String,
}

/// Everything needed to draw one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedField {
    pub id: String,
    pub label: String,
    /// Show the required marker next to the label
    pub required: bool,
    pub widget: Widget,
    pub icon: Icon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<RenderOption>,
    pub value: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedField>,
}

/// Project the visible fields of a snapshot, in order, sections nested
pub fn project(state: &FormState) -> Vec<RenderedField> {
    project_fields(&state.fields, state)
}

fn project_fields(fields: &[FieldDefinition], state: &FormState) -> Vec<RenderedField> {
    visibility::visible_fields(fields, &state.values)
        .into_iter()
        .map(|field| project_field(field, state))
        .collect()
}

fn project_field(field: &FieldDefinition, state: &FormState) -> RenderedField {
    let behavior = registry::behavior(field.field_type);

    RenderedField {
        id: field.id.clone(),
        label: field.label.clone(),
        required: field.required,
        widget: behavior.widget,
        icon: behavior.icon,
        placeholder: behavior.placeholder(),
        options: options_for(field),
        value: state.value(&field.id).cloned(),
        error: state.error(&field.id).map(str::to_string),
        children: project_fields(&field.fields, state),
    }
}

fn options_for(field: &FieldDefinition) -> Vec<RenderOption> {
    match field.field_type {
        FieldType::Country => COUNTRIES
            .iter()
            .map(|(code, name)| RenderOption {
                value: code.to_string(),
                label: name.to_string(),
            })
            .collect(),
        _ => field
            .options()
            .iter()
            .map(|o| RenderOption {
                value: o.clone(),
                label: o.clone(),
            })
            .collect(),
    }
}

/// Value map as indented JSON, for an on-screen debug panel
pub fn debug_values(state: &FormState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&state.values)
}
