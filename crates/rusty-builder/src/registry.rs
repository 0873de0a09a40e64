// File: src/registry.rs
// Purpose: Per field-type behaviour (value check, widget, icon)

use serde::Serialize;

use rusty_builder_types::{FieldDefinition, FieldType, FieldValue};
use rusty_builder_validation as rules;

/// Shown when a value has the wrong shape for its field (e.g. text in a checkbox)
pub const INVALID_VALUE_MESSAGE: &str = "Please enter a valid value";

/// Type-default check for a non-empty value
pub type ValidateFn = fn(&FieldDefinition, &FieldValue) -> Result<(), String>;

/// Input control a renderer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Widget {
    TextInput,
    Select,
    RadioGroup,
    Checkbox,
    FileInput,
    DateInput,
    PhoneInput,
    CountrySelect,
    Group,
}

/// Icon shown beside the field label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Phone,
    Globe,
    Calendar,
    FileText,
    Check,
    List,
}

#[derive(Debug)]
pub struct FieldBehavior {
    pub validate: ValidateFn,
    pub widget: Widget,
    pub icon: Icon,
}

impl FieldBehavior {
    /// Placeholder entry for select-style widgets
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.widget {
            Widget::Select => Some("Select..."),
            Widget::CountrySelect => Some("Select country..."),
            _ => None,
        }
    }
}

static TEXT: FieldBehavior = FieldBehavior {
    validate: check_text,
    widget: Widget::TextInput,
    icon: Icon::List,
};

static DROPDOWN: FieldBehavior = FieldBehavior {
    validate: check_option,
    widget: Widget::Select,
    icon: Icon::List,
};

static RADIO: FieldBehavior = FieldBehavior {
    validate: check_option,
    widget: Widget::RadioGroup,
    icon: Icon::List,
};

static FILE: FieldBehavior = FieldBehavior {
    validate: check_file,
    widget: Widget::FileInput,
    icon: Icon::FileText,
};

static CHECKBOX: FieldBehavior = FieldBehavior {
    validate: check_bool,
    widget: Widget::Checkbox,
    icon: Icon::Check,
};

static COUNTRY: FieldBehavior = FieldBehavior {
    validate: check_country,
    widget: Widget::CountrySelect,
    icon: Icon::Globe,
};

static DATE: FieldBehavior = FieldBehavior {
    validate: check_date,
    widget: Widget::DateInput,
    icon: Icon::Calendar,
};

static PHONE: FieldBehavior = FieldBehavior {
    validate: check_phone,
    widget: Widget::PhoneInput,
    icon: Icon::Phone,
};

static SECTION: FieldBehavior = FieldBehavior {
    validate: check_section,
    widget: Widget::Group,
    icon: Icon::List,
};

/// Behaviour for a field type
pub fn behavior(field_type: FieldType) -> &'static FieldBehavior {
    match field_type {
        FieldType::Text => &TEXT,
        FieldType::Dropdown => &DROPDOWN,
        FieldType::Radio => &RADIO,
        FieldType::File => &FILE,
        FieldType::Checkbox => &CHECKBOX,
        FieldType::Country => &COUNTRY,
        FieldType::Date => &DATE,
        FieldType::Phone => &PHONE,
        FieldType::Section => &SECTION,
    }
}

fn text_or<'a>(value: &'a FieldValue, message: &str) -> Result<&'a str, String> {
    value.as_str().ok_or_else(|| message.to_string())
}

fn check_text(_: &FieldDefinition, value: &FieldValue) -> Result<(), String> {
    text_or(value, INVALID_VALUE_MESSAGE).map(|_| ())
}

fn check_option(field: &FieldDefinition, value: &FieldValue) -> Result<(), String> {
    let value = text_or(value, rules::OPTION_MESSAGE)?;
    rules::validate_one_of(value, field.options())
}

fn check_file(_: &FieldDefinition, value: &FieldValue) -> Result<(), String> {
    match value {
        FieldValue::File(_) => Ok(()),
        _ => Err(INVALID_VALUE_MESSAGE.to_string()),
    }
}

fn check_bool(_: &FieldDefinition, value: &FieldValue) -> Result<(), String> {
    value
        .as_bool()
        .map(|_| ())
        .ok_or_else(|| INVALID_VALUE_MESSAGE.to_string())
}

fn check_country(_: &FieldDefinition, value: &FieldValue) -> Result<(), String> {
    rules::validate_country(text_or(value, rules::COUNTRY_MESSAGE)?)
}

fn check_date(_: &FieldDefinition, value: &FieldValue) -> Result<(), String> {
    rules::validate_date(text_or(value, rules::DATE_MESSAGE)?)
}

fn check_phone(_: &FieldDefinition, value: &FieldValue) -> Result<(), String> {
    rules::validate_phone(text_or(value, rules::PHONE_MESSAGE)?)
}

// Sections hold no value of their own; their children are checked instead.
fn check_section(_: &FieldDefinition, _: &FieldValue) -> Result<(), String> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_builder_types::FileHandle;

    fn check(field: &FieldDefinition, value: impl Into<FieldValue>) -> Result<(), String> {
        (behavior(field.field_type).validate)(field, &value.into())
    }

    #[test]
    fn test_every_type_has_behavior() {
        for field_type in FieldType::ALL {
            let b = behavior(field_type);
            assert_eq!(b.widget == Widget::Group, field_type == FieldType::Section);
        }
    }

    #[test]
    fn test_icons_follow_type() {
        assert_eq!(behavior(FieldType::Phone).icon, Icon::Phone);
        assert_eq!(behavior(FieldType::Country).icon, Icon::Globe);
        assert_eq!(behavior(FieldType::Date).icon, Icon::Calendar);
        assert_eq!(behavior(FieldType::File).icon, Icon::FileText);
        assert_eq!(behavior(FieldType::Checkbox).icon, Icon::Check);
        assert_eq!(behavior(FieldType::Text).icon, Icon::List);
    }

    #[test]
    fn test_dropdown_membership() {
        let field =
            FieldDefinition::new("d", FieldType::Dropdown, "D").with_options(["A", "B"]);
        assert!(check(&field, "A").is_ok());
        assert_eq!(check(&field, "C"), Err(rules::OPTION_MESSAGE.to_string()));
        assert_eq!(check(&field, 1), Err(rules::OPTION_MESSAGE.to_string()));
    }

    #[test]
    fn test_shape_checks() {
        let checkbox = FieldDefinition::new("c", FieldType::Checkbox, "C");
        assert!(check(&checkbox, false).is_ok());
        assert!(check(&checkbox, "yes").is_err());

        let file = FieldDefinition::new("f", FieldType::File, "F");
        assert!(check(&file, FileHandle::new("cv.pdf", 10)).is_ok());
        assert!(check(&file, "cv.pdf").is_err());
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(behavior(FieldType::Dropdown).placeholder(), Some("Select..."));
        assert_eq!(
            behavior(FieldType::Country).placeholder(),
            Some("Select country...")
        );
        assert_eq!(behavior(FieldType::Radio).placeholder(), None);
    }
}
