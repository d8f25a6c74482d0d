//! Boolean schema conversion.

use crate::data::field::{Field, FieldType};
use crate::data::schema::Schema;
use crate::parser::set_common_fields;

/// Convert a boolean-typed schema node into a checkbox field.
pub fn parse_boolean(schema: &Schema, name: Option<&str>, required: bool) -> Field {
    let mut field = Field {
        attrs: schema.attrs.clone().unwrap_or_default(),
        ..Field::default()
    };

    set_common_fields(schema, &mut field, required);

    if field.attrs.field_type.is_none() {
        field.attrs.field_type = Some(FieldType::Checkbox);
    }

    field.attrs.checked = Some(schema.checked.unwrap_or(false));

    if let Some(name) = name {
        field.attrs.name = Some(name.to_string());
    }

    field
}
