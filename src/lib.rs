//! # formgen
//!
//! Renderer-agnostic form field descriptors generated from JSON Schema
//! definitions.
//!
//! formgen walks a JSON-Schema-like document and produces a flat, ordered
//! list of [`Field`] descriptors: each one names its resolved UI kind
//! (checkbox, radio, select, fieldset, text, number, email, url), its
//! constraints, its default value, and - for composite kinds - its child
//! items. Rendering those descriptors (TUI widgets, HTML inputs, anything
//! else) is left entirely to the consumer.
//!
//! ## Features
//!
//! - Recursive walk over object schemas, preserving property declaration
//!   order
//! - Enumeration resolution across the four array keywords (`anyOf`,
//!   `oneOf`, `enum`, `items`) with a fixed, explicit priority
//! - Scalar shortcut: a string/number/integer schema carrying an array
//!   keyword is reinterpreted as an enumeration
//! - Default value computation from checked/selected option flags
//! - Stable synthetic names for options lacking an explicit name
//! - Permissive by design: malformed input degrades to a best-effort
//!   descriptor, the walk itself never fails
//!
//! ## Quick Start
//!
//! ```rust
//! use formgen::{load_fields, Schema};
//!
//! let schema: Schema = r#"{
//!     "type": "object",
//!     "required": ["username"],
//!     "properties": {
//!         "username": { "type": "string", "title": "User name" },
//!         "newsletter": { "type": "boolean", "title": "Subscribe" }
//!     }
//! }"#
//! .parse()
//! .unwrap();
//!
//! let mut fields = Vec::new();
//! load_fields(&schema, &mut fields, None);
//!
//! assert_eq!(fields.len(), 2);
//! assert!(fields[0].attrs.required);
//! assert_eq!(fields[1].label, "Subscribe");
//! ```
//!
//! ## Modules
//!
//! - [`data`] - schema representation, loading, and field descriptor types
//! - [`parser`] - the recursive walk and type-specific converters

/// Form data structures and schema loading.
pub mod data;

/// Schema-to-field transformation.
pub mod parser;

pub use data::field::{Attrs, Field, FieldItems, FieldType, OptionItem};
pub use data::schema::{
    ARRAY_KEYWORDS, ArrayKeyword, ItemsKeyword, Required, Schema, SchemaError, SchemaType,
};
pub use parser::{load_fields, parse_array, parse_boolean, parse_string, set_common_fields};
pub use serde_json::Value;
