//! Field definition model for rusty-builder forms
//!
//! A form is an ordered list of [`FieldDefinition`]s. Each definition names
//! one of nine [`FieldType`]s, carries display metadata, and may declare a
//! visibility [`Condition`] and a custom [`ValidationRule`]. A `section`
//! definition holds nested definitions, so the whole collection is a tree.
//!
//! Everything here is serde (de)serialisable; JSON field definitions are the
//! format the builder panel and any renderer exchange.
//!
//! ```rust,ignore
//! use rusty_builder_types::{FieldDefinition, FieldType, Condition, Operator};
//!
//! let plan = FieldDefinition::new("plan", FieldType::Dropdown, "Plan")
//!     .with_options(["Free", "Pro"]);
//! let seats = FieldDefinition::new("seats", FieldType::Text, "Seats")
//!     .with_condition(Condition::new("plan", Operator::Equals, "Pro"));
//! ```

pub mod condition;
pub mod field;
pub mod label;
pub mod rule;
pub mod value;

pub use condition::{Condition, Operator};
pub use field::{FieldDefinition, FieldType};
pub use label::{FieldLabel, FieldLabelError};
pub use rule::ValidationRule;
pub use value::{FieldValue, FileHandle};
