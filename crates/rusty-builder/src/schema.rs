// File: src/schema.rs
// Purpose: Loading and checking a whole set of field definitions

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use rusty_builder_types::FieldDefinition;

use crate::error::FormError;

/// An ordered field collection as exchanged between builder and renderer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    /// Parse JSON and check the structural invariants
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let schema: FormSchema = serde_json::from_str(json)?;
        schema.check()?;
        Ok(schema)
    }

    pub fn to_json_pretty(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the reducer itself does not enforce:
    /// ids unique across the whole tree, conditions pointing at existing
    /// fields, and choice fields having options.
    pub fn check(&self) -> Result<(), FormError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            for id in field.ids() {
                if !seen.insert(id) {
                    return Err(FormError::DuplicateFieldId(id.to_string()));
                }
            }
        }

        let mut failure = None;
        for field in &self.fields {
            field.walk(&mut |f| {
                if failure.is_some() {
                    return;
                }
                if let Some(condition) = &f.condition {
                    if !seen.contains(condition.field_id.as_str()) || condition.field_id == f.id {
                        failure = Some(FormError::UnknownConditionField {
                            field: f.id.clone(),
                            target: condition.field_id.clone(),
                        });
                        return;
                    }
                }
                if f.field_type.has_options() && f.options().is_empty() {
                    failure = Some(FormError::MissingOptions {
                        field: f.id.clone(),
                        field_type: f.field_type,
                    });
                }
            });
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_builder_types::{Condition, FieldType, Operator};

    #[test]
    fn test_loads_nested_schema() {
        let json = r#"{
            "fields": [
                {"id": "kind", "type": "radio", "label": "Kind", "options": ["a", "b"]},
                {"id": "more", "type": "section", "label": "More", "fields": [
                    {"id": "when", "type": "date", "label": "When",
                     "condition": {"fieldId": "kind", "operator": "==", "value": "b"}}
                ]}
            ]
        }"#;
        let schema = FormSchema::from_json(json).unwrap();
        assert_eq!(schema.fields.len(), 2);
        assert_eq!(schema.fields[1].fields[0].id, "when");
    }

    #[test]
    fn test_duplicate_nested_id_rejected() {
        let schema = FormSchema::new(vec![
            FieldDefinition::new("a", FieldType::Text, "A"),
            FieldDefinition::section("s", "S", vec![FieldDefinition::new("a", FieldType::Date, "A2")]),
        ]);
        assert!(matches!(schema.check(), Err(FormError::DuplicateFieldId(id)) if id == "a"));
    }

    #[test]
    fn test_dangling_condition_rejected() {
        let schema = FormSchema::new(vec![FieldDefinition::new("b", FieldType::Text, "B")
            .with_condition(Condition::new("ghost", Operator::Equals, "x"))]);
        assert!(matches!(
            schema.check(),
            Err(FormError::UnknownConditionField { target, .. }) if target == "ghost"
        ));
    }

    #[test]
    fn test_self_condition_rejected() {
        let schema = FormSchema::new(vec![FieldDefinition::new("b", FieldType::Text, "B")
            .with_condition(Condition::new("b", Operator::Equals, "x"))]);
        assert!(schema.check().is_err());
    }

    #[test]
    fn test_choice_without_options_rejected() {
        let schema = FormSchema::new(vec![FieldDefinition::new("r", FieldType::Radio, "R")]);
        assert!(matches!(schema.check(), Err(FormError::MissingOptions { .. })));
    }

    #[test]
    fn test_bad_pattern_is_a_json_error() {
        let json = r#"{"fields": [{"id": "a", "type": "text", "label": "A",
                      "validation": {"pattern": "[unclosed"}}]}"#;
        assert!(matches!(FormSchema::from_json(json), Err(FormError::Json(_))));
    }
}
