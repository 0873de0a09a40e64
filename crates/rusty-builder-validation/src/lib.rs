//! rusty-builder validation primitives
//!
//! Plain functions over strings and option lists. They know nothing about
//! field definitions or form state; the form engine in `rusty-builder` picks
//! which of them to run for each field type.
//!
//! Every validator returns `Result<(), String>` where the error is the
//! human-readable message shown next to the field.

pub mod choice;
pub mod date;
pub mod phone;
pub mod string;

pub use choice::*;
pub use date::*;
pub use phone::*;
pub use string::*;

/// Message used when a custom pattern fails and no message was supplied
pub const DEFAULT_PATTERN_MESSAGE: &str = "Invalid input";
