//! String and numeric schema conversion.

use crate::data::field::{Field, FieldType};
use crate::data::schema::{Schema, SchemaType};
use crate::parser::set_common_fields;

/// Convert a string-, number-, or integer-typed schema node into an input
/// field.
pub fn parse_string(schema: &Schema, name: Option<&str>, required: bool) -> Field {
    let mut field = Field {
        attrs: schema.attrs.clone().unwrap_or_default(),
        ..Field::default()
    };

    if let Some(pattern) = &schema.pattern {
        field.attrs.pattern = Some(pattern.clone());
    }

    if field.attrs.field_type.is_none() {
        field.attrs.field_type = Some(resolve_type(schema));
    }

    set_common_fields(schema, &mut field, required);

    if let Some(name) = name {
        field.attrs.name = Some(name.to_string());
    }

    if let Some(len) = schema.min_length.filter(|&len| len > 0) {
        field.attrs.minlength = Some(len);
    }
    if let Some(len) = schema.max_length.filter(|&len| len > 0) {
        field.attrs.maxlength = Some(len);
    }

    field
}

fn resolve_type(schema: &Schema) -> FieldType {
    match schema.format.as_deref() {
        Some("email") => FieldType::Email,
        Some("uri") => FieldType::Url,
        _ => match schema.schema_type {
            SchemaType::Number | SchemaType::Integer => FieldType::Number,
            _ => FieldType::Text,
        },
    }
}
