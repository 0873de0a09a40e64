//! # rusty-builder
//!
//! Dynamic form builder core: compose a form from a palette of field types,
//! hold values and errors, decide which fields are visible and validate
//! what the user entered. Drawing the form is left to the caller, who gets a
//! ready-made view model from [`render::project`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rusty_builder::{EchoHandler, FieldDraft, FieldType, FormBuilder, FormStore, ValidationMode};
//!
//! let mut store = FormStore::new(ValidationMode::OnSubmit);
//! let mut builder = FormBuilder::default();
//!
//! let name = builder.add(&mut store, &FieldDraft::new(FieldType::Text, "Name").required())?;
//! store.handle_change(&name, "Alice");
//!
//! let mut handler = EchoHandler::new();
//! let submission = store.submit(&mut handler)?;
//! ```
//!
//! ## Architecture
//!
//! - [`state`] - `FormState` snapshot and the pure reducer over `FormAction`
//! - [`store`] - `FormStore`, the explicitly owned state + dispatch handle
//! - [`visibility`] - condition evaluation
//! - [`registry`] - per field-type validation, widget and icon
//! - [`validate`] - field and whole-form validation
//! - [`builder`] - the builder panel (drafts, id generation)
//! - [`render`] - view model of the visible form
//! - [`submit`] - collected submissions and handlers
//! - [`schema`] - loading and checking JSON field collections
//! - [`config`] - `form-builder.toml`

pub mod builder;
pub mod config;
pub mod error;
pub mod registry;
pub mod render;
pub mod schema;
pub mod state;
pub mod store;
pub mod submit;
pub mod validate;
pub mod visibility;

pub use builder::{FieldDraft, FormBuilder, IdGenerator};
pub use config::{BuilderConfig, PanelConfig, ValidationConfig};
pub use error::FormError;
pub use registry::{FieldBehavior, Icon, Widget};
pub use render::{RenderOption, RenderedField};
pub use schema::FormSchema;
pub use state::{FormAction, FormState};
pub use store::FormStore;
pub use submit::{EchoHandler, SubmitHandler, Submission};
pub use validate::{validate_field, validate_form, ValidationMode, ValidationResult};
pub use visibility::is_visible;

// Re-export the data model so most users need only this crate
pub use rusty_builder_types::{
    Condition, FieldDefinition, FieldType, FieldValue, FileHandle, Operator, ValidationRule,
};
