//! Form data structures and schema loading.
//!
//! This module holds both sides of the transformation:
//!
//! - [`schema`] - the JSON-Schema-like input representation and its loading
//!   entry points
//! - [`field`] - the normalized field descriptors handed to renderers

/// Form field descriptor types produced by the parser.
pub mod field;

/// JSON Schema node representation and loading.
pub mod schema;

pub use field::{Attrs, Field, FieldItems, FieldType, OptionItem};
pub use schema::{Required, Schema, SchemaError, SchemaType};
