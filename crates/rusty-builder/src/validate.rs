// File: src/validate.rs
// Purpose: Field and whole-form validation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use rusty_builder_types::{FieldDefinition, FieldValue, ValidationRule};
use rusty_builder_validation::{required_message, validate_pattern, DEFAULT_PATTERN_MESSAGE};

use crate::registry;
use crate::state::FormState;
use crate::visibility;

/// When validation runs and how a custom rule combines with the type check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Validate the edited field on every change; a custom rule replaces the
    /// type-default check. Errors are shown inline without blocking input.
    #[default]
    PerField,
    /// Validate the whole form on submit; a custom rule is checked after the
    /// type-default check.
    OnSubmit,
}

impl ValidationMode {
    pub fn validates_on_change(&self) -> bool {
        matches!(self, ValidationMode::PerField)
    }
}

/// Result of validating a whole form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Ids of the fields that were checked (visible, non-section)
    pub checked: Vec<String>,
    /// Field id to error message
    pub errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error for a specific field
    pub fn get_error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(|s| s.as_str())
    }
}

/// Validate one field's value.
///
/// An absent or blank value fails with `"{label} is required"` on required
/// fields and passes otherwise; the type and pattern checks only run on
/// values that were actually entered.
pub fn validate_field(
    field: &FieldDefinition,
    value: Option<&FieldValue>,
    mode: ValidationMode,
) -> Result<(), String> {
    if field.is_section() {
        return Ok(());
    }

    let value = match value {
        Some(value) if !value.is_empty() => value,
        _ if field.required => return Err(required_message(&field.label)),
        _ => return Ok(()),
    };

    let type_check = registry::behavior(field.field_type).validate;
    match (&field.validation, mode) {
        (Some(rule), ValidationMode::PerField) => check_rule(rule, value),
        (Some(rule), ValidationMode::OnSubmit) => {
            type_check(field, value)?;
            check_rule(rule, value)
        }
        (None, _) => type_check(field, value),
    }
}

fn check_rule(rule: &ValidationRule, value: &FieldValue) -> Result<(), String> {
    let message = rule.message().unwrap_or(DEFAULT_PATTERN_MESSAGE);
    validate_pattern(&value.as_text(), rule.pattern(), message)
}

/// Validate every visible field, recursing into visible sections.
///
/// Hidden fields are skipped; their stored values are left alone.
pub fn validate_form(state: &FormState, mode: ValidationMode) -> ValidationResult {
    let mut result = ValidationResult::default();
    validate_fields(&state.fields, state, mode, &mut result);
    result
}

fn validate_fields(
    fields: &[FieldDefinition],
    state: &FormState,
    mode: ValidationMode,
    result: &mut ValidationResult,
) {
    for field in visibility::visible_fields(fields, &state.values) {
        if field.is_section() {
            validate_fields(&field.fields, state, mode, result);
            continue;
        }

        result.checked.push(field.id.clone());
        if let Err(message) = validate_field(field, state.value(&field.id), mode) {
            result.errors.insert(field.id.clone(), message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use rusty_builder_types::{Condition, FieldType, FileHandle, Operator};

    fn phone() -> FieldDefinition {
        FieldDefinition::new("p", FieldType::Phone, "Phone")
    }

    #[rstest]
    #[case("+14155551234", true)]
    #[case("14155551234", true)]
    #[case("012345", false)]
    #[case("+0", false)]
    #[case("415-555-1234", false)]
    fn test_phone_values(#[case] input: &str, #[case] ok: bool) {
        let result = validate_field(&phone(), Some(&input.into()), ValidationMode::OnSubmit);
        assert_eq!(result.is_ok(), ok, "{input}");
    }

    #[test]
    fn test_required_message_uses_label() {
        let name = FieldDefinition::new("n", FieldType::Text, "Name").required();
        assert_eq!(
            validate_field(&name, None, ValidationMode::PerField),
            Err("Name is required".to_string())
        );
        assert_eq!(
            validate_field(&name, Some(&"  ".into()), ValidationMode::PerField),
            Err("Name is required".to_string())
        );
        assert!(validate_field(&name, Some(&"Alice".into()), ValidationMode::PerField).is_ok());
    }

    #[test]
    fn test_rule_matches_large_whole_number() {
        let rule = ValidationRule::new("^100000000000000000000$").unwrap();
        let field = FieldDefinition::new("n", FieldType::Text, "Big").with_validation(rule);
        let value = FieldValue::Number(1e20);
        assert!(validate_field(&field, Some(&value), ValidationMode::PerField).is_ok());
    }

    #[test]
    fn test_optional_empty_skips_type_check() {
        assert!(validate_field(&phone(), None, ValidationMode::OnSubmit).is_ok());
        assert!(validate_field(&phone(), Some(&"".into()), ValidationMode::OnSubmit).is_ok());
    }

    #[test]
    fn test_required_checkbox_accepts_false() {
        let terms = FieldDefinition::new("t", FieldType::Checkbox, "Terms").required();
        assert!(validate_field(&terms, Some(&false.into()), ValidationMode::OnSubmit).is_ok());
        assert_eq!(
            validate_field(&terms, None, ValidationMode::OnSubmit),
            Err("Terms is required".to_string())
        );
    }

    #[test]
    fn test_required_file() {
        let cv = FieldDefinition::new("cv", FieldType::File, "CV").required();
        assert!(validate_field(&cv, None, ValidationMode::OnSubmit).is_err());
        let handle = FieldValue::File(FileHandle::new("cv.pdf", 2048));
        assert!(validate_field(&cv, Some(&handle), ValidationMode::OnSubmit).is_ok());
    }

    #[test]
    fn test_custom_rule_replaces_type_check_per_field() {
        // Pattern admits local numbers the phone check would refuse
        let rule = ValidationRule::new(r"^0[0-9]{9}$").unwrap().with_message("Use 10 digits");
        let field = phone().with_validation(rule);
        let local = FieldValue::from("0412345678");

        assert!(validate_field(&field, Some(&local), ValidationMode::PerField).is_ok());
        assert_eq!(
            validate_field(&field, Some(&local), ValidationMode::OnSubmit),
            Err("Invalid phone number format".to_string())
        );
        assert_eq!(
            validate_field(&field, Some(&"123".into()), ValidationMode::PerField),
            Err("Use 10 digits".to_string())
        );
    }

    #[test]
    fn test_custom_rule_added_on_submit() {
        let rule = ValidationRule::new(r"^\+44").unwrap();
        let field = phone().with_validation(rule);

        assert_eq!(
            validate_field(&field, Some(&"+14155551234".into()), ValidationMode::OnSubmit),
            Err("Invalid input".to_string())
        );
        assert!(
            validate_field(&field, Some(&"+442071234567".into()), ValidationMode::OnSubmit).is_ok()
        );
    }

    #[test]
    fn test_form_recurses_sections_and_skips_hidden() {
        let state = FormState {
            fields: vec![
                FieldDefinition::new("kind", FieldType::Radio, "Kind")
                    .with_options(["person", "company"]),
                FieldDefinition::section(
                    "company",
                    "Company",
                    vec![FieldDefinition::new("vat", FieldType::Text, "VAT").required()],
                )
                .with_condition(Condition::new("kind", Operator::Equals, "company")),
                FieldDefinition::section(
                    "contact",
                    "Contact",
                    vec![FieldDefinition::new("country", FieldType::Country, "Country")],
                ),
            ],
            values: [
                ("kind".to_string(), FieldValue::from("person")),
                ("country".to_string(), FieldValue::from("FR")),
            ]
            .into_iter()
            .collect(),
            errors: BTreeMap::new(),
        };

        let result = validate_form(&state, ValidationMode::OnSubmit);
        assert_eq!(result.checked, vec!["kind".to_string(), "country".to_string()]);
        assert_eq!(result.get_error("country"), Some("Please select a valid country"));
        assert_eq!(result.get_error("vat"), None);
        assert!(!result.is_valid());
    }
}
