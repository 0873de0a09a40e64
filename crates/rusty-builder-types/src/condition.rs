// File: src/condition.rs
// Purpose: Visibility conditions between fields

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value::FieldValue;

/// Comparison used by a visibility condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "equals", alias = "==")]
    Equals,
    #[serde(rename = "not-equals", alias = "!=")]
    NotEquals,
    #[serde(rename = "greater-than", alias = ">")]
    GreaterThan,
    #[serde(rename = "less-than", alias = "<")]
    LessThan,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
        }
    }

    /// Whether the operator needs an ordering rather than equality
    pub fn is_ordering(&self) -> bool {
        matches!(self, Operator::GreaterThan | Operator::LessThan)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Show a field only while another field's value satisfies a comparison.
///
/// `value: None` stands for "unset": `equals` with no value holds exactly
/// while the referenced field has never been given a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub field_id: String,
    pub operator: Operator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
}

impl Condition {
    pub fn new(field_id: impl Into<String>, operator: Operator, value: impl Into<FieldValue>) -> Self {
        Self {
            field_id: field_id.into(),
            operator,
            value: Some(value.into()),
        }
    }

    /// Condition compared against an unset value
    pub fn unset(field_id: impl Into<String>, operator: Operator) -> Self {
        Self {
            field_id: field_id.into(),
            operator,
            value: None,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{} {} {:?}", self.field_id, self.operator, v.as_text()),
            None => write!(f, "{} {} <unset>", self.field_id, self.operator),
        }
    }
}
