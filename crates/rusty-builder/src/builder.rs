// File: src/builder.rs
// Purpose: Builder panel logic: drafting a new field and appending it to a form

use chrono::Utc;

use rusty_builder_types::{Condition, FieldDefinition, FieldLabel, FieldType, ValidationRule};

use crate::config::PanelConfig;
use crate::error::FormError;
use crate::state::FormAction;
use crate::store::FormStore;

/// The "Add Field" form of the builder panel
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDraft {
    pub field_type: FieldType,
    pub label: String,
    pub required: bool,
    /// Optional custom pattern and its failure message
    pub pattern: Option<String>,
    pub message: Option<String>,
    pub condition: Option<Condition>,
}

impl Default for FieldDraft {
    fn default() -> Self {
        Self {
            field_type: FieldType::Text,
            label: String::new(),
            required: false,
            pattern: None,
            message: None,
            condition: None,
        }
    }
}

impl FieldDraft {
    pub fn new(field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            field_type,
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>, message: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self.message = Some(message.into());
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// Generates `"{prefix}-{millis}"` ids from the wall clock.
///
/// Ids are strictly increasing: two fields created in the same millisecond
/// (or after the clock stepped back) still get distinct ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    last: i64,
}

impl IdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        format!("{}-{}", self.prefix, self.last)
    }
}

/// Builder panel state: whether the add-field form is open and its draft
#[derive(Debug, Clone)]
pub struct FormBuilder {
    ids: IdGenerator,
    default_options: Vec<String>,
    draft: FieldDraft,
    open: bool,
}

impl FormBuilder {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            ids: IdGenerator::new(config.id_prefix.clone()),
            default_options: config.default_options.clone(),
            draft: FieldDraft::default(),
            open: false,
        }
    }

    /// Field types offered by the palette, in display order
    pub fn palette() -> &'static [FieldType] {
        &FieldType::ALL
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the add-field form
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the add-field form, keeping the draft as typed
    pub fn cancel(&mut self) {
        self.open = false;
    }

    pub fn draft(&self) -> &FieldDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FieldDraft {
        &mut self.draft
    }

    /// Turn a draft into a definition with a fresh id
    pub fn build_field(&mut self, draft: &FieldDraft) -> Result<FieldDefinition, FormError> {
        let label =
            FieldLabel::try_new(draft.label.clone()).map_err(|_| FormError::EmptyLabel)?;

        let mut field = FieldDefinition::new(self.ids.next_id(), draft.field_type, label.into_inner());
        field.required = draft.required;
        field.condition = draft.condition.clone();

        if draft.field_type.has_options() {
            field.options = Some(self.default_options.clone());
        }

        if let Some(pattern) = &draft.pattern {
            let rule = ValidationRule::new(pattern).map_err(|source| FormError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            field.validation = Some(match &draft.message {
                Some(message) => rule.with_message(message.clone()),
                None => rule,
            });
        }

        Ok(field)
    }

    /// Add the current draft to the form.
    ///
    /// On success the draft is reset, the panel closes and the new id is
    /// returned. On failure nothing changes.
    pub fn add_field(&mut self, store: &mut FormStore) -> Result<String, FormError> {
        let draft = self.draft.clone();
        let id = self.add(store, &draft)?;
        self.draft = FieldDraft::default();
        self.open = false;
        Ok(id)
    }

    /// Add a field from an explicit draft, leaving the panel's own draft alone
    pub fn add(&mut self, store: &mut FormStore, draft: &FieldDraft) -> Result<String, FormError> {
        let field = self.build_field(draft)?;
        let id = field.id.clone();
        store.dispatch(FormAction::AddField(field));
        Ok(id)
    }
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new(&PanelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ids_strictly_increase() {
        let mut ids = IdGenerator::new("field");
        let stamps: Vec<i64> = (0..50)
            .map(|_| {
                let id = ids.next_id();
                id.trim_start_matches("field-").parse().unwrap()
            })
            .collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_choice_fields_get_default_options() {
        let mut builder = FormBuilder::default();
        let field = builder.build_field(&FieldDraft::new(FieldType::Radio, "Size")).unwrap();
        assert_eq!(field.options(), ["Option 1", "Option 2"]);

        let text = builder.build_field(&FieldDraft::new(FieldType::Text, "Name")).unwrap();
        assert!(text.options.is_none());
    }

    #[test]
    fn test_blank_label_rejected() {
        let mut builder = FormBuilder::default();
        let mut store = FormStore::new(ValidationMode::PerField);
        builder.open();
        builder.draft_mut().label = "   ".to_string();

        assert!(matches!(builder.add_field(&mut store), Err(FormError::EmptyLabel)));
        assert!(store.state().fields.is_empty());
        assert!(builder.is_open());
    }

    #[test]
    fn test_add_field_resets_draft() {
        let mut builder = FormBuilder::default();
        let mut store = FormStore::new(ValidationMode::PerField);
        builder.open();
        *builder.draft_mut() = FieldDraft::new(FieldType::Phone, " Mobile ").required();

        let id = builder.add_field(&mut store).unwrap();
        let field = store.state().field(&id).unwrap();
        assert_eq!(field.label, "Mobile");
        assert!(field.required);
        assert_eq!(builder.draft(), &FieldDraft::default());
        assert!(!builder.is_open());
    }

    #[test]
    fn test_bad_pattern_reported() {
        let mut builder = FormBuilder::default();
        let draft = FieldDraft::new(FieldType::Text, "Code").with_pattern("(", "bad");
        assert!(matches!(
            builder.build_field(&draft),
            Err(FormError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_custom_prefix() {
        let config = PanelConfig {
            id_prefix: "q".to_string(),
            ..PanelConfig::default()
        };
        let mut builder = FormBuilder::new(&config);
        let field = builder.build_field(&FieldDraft::new(FieldType::Date, "When")).unwrap();
        assert!(field.id.starts_with("q-"));
    }
}
