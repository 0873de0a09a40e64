//! Conditional field visibility
//!
//! Visibility is derived from the current value map every time it is asked
//! for; nothing is cached. Hiding a field never touches its value or error.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use rusty_builder_types::{Condition, FieldDefinition, FieldValue, Operator};

/// Whether a field should be rendered given the current values.
///
/// Fields without a condition are always visible.
pub fn is_visible(field: &FieldDefinition, values: &BTreeMap<String, FieldValue>) -> bool {
    match &field.condition {
        None => true,
        Some(condition) => evaluate(condition, values.get(&condition.field_id)),
    }
}

/// Evaluate a condition against the referenced field's current value.
///
/// `equals`/`not-equals` compare strictly: values of different kinds are
/// never equal and an unset value only equals an unset operand.
/// `greater-than`/`less-than` only order number/number and text/text pairs;
/// any other pairing (including unset operands) does not hold.
pub fn evaluate(condition: &Condition, current: Option<&FieldValue>) -> bool {
    let expected = condition.value.as_ref();

    match condition.operator {
        Operator::Equals => current == expected,
        Operator::NotEquals => current != expected,
        Operator::GreaterThan | Operator::LessThan => {
            let ordering = match (current, expected) {
                (Some(current), Some(expected)) => current.compare(expected),
                _ => None,
            };

            match ordering {
                Some(ordering) => {
                    let wanted = if condition.operator == Operator::GreaterThan {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    };
                    ordering == wanted
                }
                None => {
                    tracing::debug!(
                        condition = %condition,
                        current = current.map(FieldValue::kind).unwrap_or("unset"),
                        expected = expected.map(FieldValue::kind).unwrap_or("unset"),
                        "incomparable operands, condition does not hold"
                    );
                    false
                }
            }
        }
    }
}

/// Top-level fields that are currently visible, in order
pub fn visible_fields<'a>(
    fields: &'a [FieldDefinition],
    values: &BTreeMap<String, FieldValue>,
) -> Vec<&'a FieldDefinition> {
    fields.iter().filter(|f| is_visible(f, values)).collect()
}

/// Ids of every visible field in the tree.
///
/// A hidden section hides all of its nested fields.
pub fn visible_ids<'a>(
    fields: &'a [FieldDefinition],
    values: &BTreeMap<String, FieldValue>,
) -> BTreeSet<&'a str> {
    let mut ids = BTreeSet::new();
    collect_visible(fields, values, &mut ids);
    ids
}

fn collect_visible<'a>(
    fields: &'a [FieldDefinition],
    values: &BTreeMap<String, FieldValue>,
    ids: &mut BTreeSet<&'a str>,
) {
    for field in visible_fields(fields, values) {
        ids.insert(field.id.as_str());
        collect_visible(&field.fields, values, ids);
    }
}
