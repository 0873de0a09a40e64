// File: src/rule.rs
// Purpose: Custom pattern/message validation rule attached to a field

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A pattern the field value must match, with the message shown on failure.
///
/// The pattern is compiled once when the rule is built or deserialised, so a
/// malformed pattern is reported up front instead of on every keystroke.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawRule", into = "RawRule")]
pub struct ValidationRule {
    pattern: Regex,
    message: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct RawRule {
    pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ValidationRule {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: None,
        })
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

impl PartialEq for ValidationRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.as_str() == other.pattern.as_str() && self.message == other.message
    }
}

impl TryFrom<RawRule> for ValidationRule {
    type Error = regex::Error;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        Ok(Self {
            pattern: Regex::new(&raw.pattern)?,
            message: raw.message,
        })
    }
}

impl From<ValidationRule> for RawRule {
    fn from(rule: ValidationRule) -> Self {
        RawRule {
            pattern: rule.pattern.as_str().to_string(),
            message: rule.message,
        }
    }
}
