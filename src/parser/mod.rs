//! Schema-to-field transformation.
//!
//! The entry point is [`load_fields`], which walks a [`Schema`] tree and
//! appends one [`Field`] per leaf or array node, in declaration order. Leaf
//! conversion is delegated to the type-specific parsers:
//!
//! - [`boolean`] - boolean nodes
//! - [`string`] - string and numeric nodes
//! - [`array`] - array nodes and scalar nodes reinterpreted as enumerations
//! - [`options`] - option normalization, naming, and value resolution
//!
//! The walk is deliberately permissive: malformed or partial input degrades
//! to a best-effort descriptor (traced at debug level) and never fails.

/// Array and enumeration schema conversion.
pub mod array;

/// Boolean schema conversion.
pub mod boolean;

/// Option normalization, naming, and default value resolution.
pub mod options;

/// String and numeric schema conversion.
pub mod string;

pub use array::parse_array;
pub use boolean::parse_boolean;
pub use options::{array_values, name_item, parse_items, single_value};
pub use string::parse_string;

use log::debug;
use serde_json::Value;

use crate::data::field::Field;
use crate::data::schema::{Schema, SchemaType};

/// Recursively convert `schema` into field descriptors appended to `fields`.
///
/// Object nodes recurse into their properties depth-first, passing each
/// property's name down; every other supported type appends exactly one
/// field. Nodes with `visible == false` or an unrecognized type produce
/// nothing. The walk never fails.
pub fn load_fields(schema: &Schema, fields: &mut Vec<Field>, name: Option<&str>) {
    walk(schema, fields, name, schema.required.as_flag());
}

pub(crate) fn walk(schema: &Schema, fields: &mut Vec<Field>, name: Option<&str>, required: bool) {
    if schema.visible == Some(false) {
        return;
    }

    match schema.schema_type {
        SchemaType::Object => {
            // Required propagation is fresh on each object: only immediate
            // properties are marked, never deeper descendants.
            for (key, property) in &schema.properties {
                let required = schema.required.contains(key) || property.required.as_flag();
                walk(property, fields, Some(key), required);
            }
        }

        SchemaType::Boolean => fields.push(parse_boolean(schema, name, required)),

        SchemaType::Array => fields.push(parse_array(schema, name, required)),

        SchemaType::Integer | SchemaType::Number | SchemaType::String => {
            match schema.first_array_keyword() {
                Some(keyword) => {
                    // A scalar carrying an array keyword is an enumeration
                    // in disguise; its scalar constraints are dropped.
                    let node = schema.reinterpret_as_enum(keyword);
                    fields.push(parse_array(&node, name, required));
                }
                None => fields.push(parse_string(schema, name, required)),
            }
        }

        SchemaType::Unknown => {
            debug!("skipping schema node {name:?}: unsupported type");
        }
    }
}

/// Apply the attributes shared by every field kind.
///
/// A pre-seeded `attrs.value` is kept; otherwise the schema default is used,
/// falling back to an empty string. Applied after kind-specific seeding, so
/// it never clobbers a type the caller already decided.
pub fn set_common_fields(schema: &Schema, field: &mut Field, required: bool) {
    if field.attrs.value.is_none() {
        field.attrs.value = Some(
            schema
                .default
                .clone()
                .unwrap_or_else(|| Value::String(String::new())),
        );
    }

    field.schema_type = schema.schema_type;
    field.label = schema.title.clone().unwrap_or_default();
    field.description = schema.description.clone().unwrap_or_default();
    field.attrs.required = required;
    field.attrs.disabled = schema.disabled.unwrap_or(false);
}
