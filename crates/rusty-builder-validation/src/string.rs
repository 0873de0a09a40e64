//! String validation functions

use regex::Regex;

/// Returns true when a text value counts as "not filled in"
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Builds the message for a required field left empty
pub fn required_message(label: &str) -> String {
    format!("{} is required", label)
}

/// Validates that a required text value was supplied
pub fn validate_required(value: &str, label: &str) -> Result<(), String> {
    if is_blank(value) {
        Err(required_message(label))
    } else {
        Ok(())
    }
}

/// Validates a value against a compiled pattern, using `message` on failure
pub fn validate_pattern(value: &str, pattern: &Regex, message: &str) -> Result<(), String> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}
