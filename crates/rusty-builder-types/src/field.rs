// File: src/field.rs
// Purpose: Field types and field definitions (recursive through sections)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::condition::Condition;
use crate::rule::ValidationRule;

/// The closed set of field types offered by the builder palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Dropdown,
    Radio,
    File,
    Checkbox,
    Country,
    Date,
    Phone,
    Section,
}

impl FieldType {
    /// Palette order
    pub const ALL: [FieldType; 9] = [
        FieldType::Text,
        FieldType::Dropdown,
        FieldType::Radio,
        FieldType::File,
        FieldType::Checkbox,
        FieldType::Country,
        FieldType::Date,
        FieldType::Phone,
        FieldType::Section,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Dropdown => "dropdown",
            FieldType::Radio => "radio",
            FieldType::File => "file",
            FieldType::Checkbox => "checkbox",
            FieldType::Country => "country",
            FieldType::Date => "date",
            FieldType::Phone => "phone",
            FieldType::Section => "section",
        }
    }

    /// Capitalised name shown in the palette ("Dropdown", "Phone", ...)
    pub fn display_name(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Types whose value must be one of the field's own options
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Dropdown | FieldType::Radio)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Nested fields, only meaningful for sections
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,
}

impl FieldDefinition {
    pub fn new(id: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field_type,
            label: label.into(),
            required: false,
            options: None,
            fields: Vec::new(),
            condition: None,
            validation: None,
        }
    }

    /// Section holding the given nested fields
    pub fn section(
        id: impl Into<String>,
        label: impl Into<String>,
        fields: Vec<FieldDefinition>,
    ) -> Self {
        Self {
            fields,
            ..Self::new(id, FieldType::Section, label)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_validation(mut self, rule: ValidationRule) -> Self {
        self.validation = Some(rule);
        self
    }

    pub fn is_section(&self) -> bool {
        self.field_type == FieldType::Section
    }

    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Visit this field and every nested field, depth first
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a FieldDefinition)) {
        visit(self);
        for child in &self.fields {
            child.walk(visit);
        }
    }

    /// Ids of this field and all nested fields
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.walk(&mut |f| ids.push(f.id.as_str()));
        ids
    }

    /// Find a field by id in this subtree
    pub fn find(&self, id: &str) -> Option<&FieldDefinition> {
        if self.id == id {
            return Some(self);
        }
        self.fields.iter().find_map(|child| child.find(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Operator;
    use pretty_assertions::assert_eq;

    fn contact_section() -> FieldDefinition {
        FieldDefinition::section(
            "contact",
            "Contact",
            vec![
                FieldDefinition::new("phone", FieldType::Phone, "Phone"),
                FieldDefinition::section(
                    "address",
                    "Address",
                    vec![FieldDefinition::new("country", FieldType::Country, "Country")],
                ),
            ],
        )
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = FieldType::ALL.iter().map(|t| t.display_name()).collect();
        assert_eq!(
            names,
            vec![
                "Text", "Dropdown", "Radio", "File", "Checkbox", "Country", "Date", "Phone",
                "Section"
            ]
        );
    }

    #[test]
    fn test_walk_is_depth_first() {
        assert_eq!(contact_section().ids(), vec!["contact", "phone", "address", "country"]);
    }

    #[test]
    fn test_find_nested() {
        let section = contact_section();
        assert_eq!(section.find("country").map(|f| f.label.as_str()), Some("Country"));
        assert!(section.find("missing").is_none());
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "id": "field-1",
            "type": "dropdown",
            "label": "Plan",
            "required": true,
            "options": ["Free", "Pro"],
            "condition": {"fieldId": "field-0", "operator": "!=", "value": ""}
        }"#;
        let field: FieldDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(
            field,
            FieldDefinition::new("field-1", FieldType::Dropdown, "Plan")
                .required()
                .with_options(["Free", "Pro"])
                .with_condition(Condition::new("field-0", Operator::NotEquals, ""))
        );
    }

    #[test]
    fn test_defaults_when_omitted() {
        let field: FieldDefinition =
            serde_json::from_str(r#"{"id": "a", "type": "text", "label": "A"}"#).unwrap();
        assert!(!field.required);
        assert!(field.options().is_empty());
        assert!(field.fields.is_empty());
    }
}
