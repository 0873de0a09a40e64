//! Validated field label

use nutype::nutype;

/// A field label as typed into the builder panel.
///
/// Surrounding whitespace is trimmed and an empty label is rejected, so a
/// field can never be added without something to show next to its input.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct FieldLabel(String);
