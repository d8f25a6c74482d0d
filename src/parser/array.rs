//! Array and enumeration schema conversion.
//!
//! This is the most involved parser: an array-typed node (or a scalar node
//! reinterpreted as an enumeration) resolves exactly one of the four array
//! keywords, in the fixed priority of
//! [`ARRAY_KEYWORDS`](crate::data::schema::ARRAY_KEYWORDS), into a checkbox
//! group, radio group, select, or nested fieldset.

use log::debug;
use serde_json::Value;

use crate::data::field::{Field, FieldItems, FieldType};
use crate::data::schema::{ArrayKeyword, ItemsKeyword, Schema};
use crate::parser::options::{array_values, name_item, parse_items, single_value};
use crate::parser::{set_common_fields, walk};

const DEFAULT_MIN_ITEMS: u64 = 1;
const DEFAULT_MAX_ITEMS: u64 = 1000;

/// Convert an array-typed schema node into a composite field.
pub fn parse_array(schema: &Schema, name: Option<&str>, required: bool) -> Field {
    let mut field = Field {
        attrs: schema.attrs.clone().unwrap_or_default(),
        ..Field::default()
    };

    set_common_fields(schema, &mut field, required);

    if let Some(name) = name {
        field.attrs.name = Some(name.to_string());
    }

    field.items = Some(FieldItems::Options(Vec::new()));
    field.min_items = Some(item_count(schema.min_items.as_ref(), DEFAULT_MIN_ITEMS));
    field.max_items = Some(item_count(schema.max_items.as_ref(), DEFAULT_MAX_ITEMS));

    if let Some(keyword) = schema.first_array_keyword() {
        apply_keyword(schema, &mut field, name, keyword);
    }

    if field.attrs.field_type.is_none() {
        // Reachable only when the node carried no array keyword at all.
        debug!("array node {name:?} has no array keyword, falling back to text");
        field.attrs.field_type = Some(FieldType::Text);
        field.items = None;
    } else if field.attrs.field_type == Some(FieldType::Select) {
        let multiple = field.min_items.unwrap_or(DEFAULT_MIN_ITEMS) > 1;
        field.attrs.multiple = Some(multiple);

        if field.attrs.value_is_empty() {
            let options = field
                .items
                .as_ref()
                .and_then(FieldItems::as_options)
                .unwrap_or_default();
            field.attrs.value = Some(if multiple {
                array_values(options)
            } else {
                single_value(options)
            });
        }
    }

    field
}

fn apply_keyword(schema: &Schema, field: &mut Field, name: Option<&str>, keyword: ArrayKeyword) {
    match keyword {
        ArrayKeyword::AnyOf => {
            field.attrs.field_type = Some(FieldType::Checkbox);

            let mut options = parse_items(schema.any_of.as_deref().unwrap_or_default());
            options.iter_mut().for_each(name_item(name));

            if field.attrs.value_is_empty() {
                field.attrs.value = Some(array_values(&options));
            }
            field.items = Some(FieldItems::Options(options));
        }

        ArrayKeyword::OneOf => {
            field.attrs.field_type = Some(FieldType::Radio);

            let mut options = parse_items(schema.one_of.as_deref().unwrap_or_default());
            options.iter_mut().for_each(name_item(name));

            if field.attrs.value_is_empty() {
                field.attrs.value = Some(single_value(&options));
            }
            field.items = Some(FieldItems::Options(options));
        }

        ArrayKeyword::Enum => {
            if field.attrs.field_type.is_none() {
                field.attrs.field_type = Some(FieldType::Select);
            }
            field.items = Some(FieldItems::Options(parse_items(
                schema.enum_values.as_deref().unwrap_or_default(),
            )));
        }

        ArrayKeyword::Items => {
            let mut children = Vec::new();
            match &schema.items {
                Some(ItemsKeyword::Schema(sub)) => {
                    walk(sub, &mut children, name, sub.required.as_flag());
                }
                _ => {
                    debug!("array node {name:?} has no items sub-schema, emitting empty fieldset");
                }
            }
            field.items = Some(FieldItems::Fields(children));

            field.attrs.field_type = Some(FieldType::Fieldset);
            if field.attrs.value_is_empty() {
                field.attrs.value = Some(Value::Array(Vec::new()));
            }
        }
    }
}

/// Permissively read an item count: absent, zero, or non-numeric values
/// degrade to the given default instead of failing.
fn item_count(value: Option<&Value>, default: u64) -> u64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_u64().or_else(|| n.as_f64().map(|f| f.trunc() as u64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };

    match parsed {
        Some(count) if count > 0 => count,
        _ => {
            if value.is_some() {
                debug!("unusable item count {value:?}, using default {default}");
            }
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(doc: &str) -> Field {
        let schema: Schema = doc.parse().unwrap();
        parse_array(&schema, Some("field"), false)
    }

    #[test]
    fn test_any_of_builds_checkbox_group() {
        let field = parse(
            r#"{
                "type": "array",
                "anyOf": [
                    { "value": "x", "label": "X", "checked": true },
                    { "value": "y", "label": "Y" }
                ]
            }"#,
        );

        assert_eq!(field.attrs.field_type, Some(FieldType::Checkbox));
        assert_eq!(field.attrs.value, Some(json!(["x", null])));

        let options = field.items.as_ref().unwrap().as_options().unwrap();
        assert_eq!(options[0].name.as_deref(), Some("field-X"));
        assert_eq!(options[1].name.as_deref(), Some("field-Y"));
    }

    #[test]
    fn test_one_of_builds_radio_group() {
        let field = parse(
            r#"{
                "type": "array",
                "oneOf": [
                    { "value": "x", "label": "X" },
                    { "value": "y", "label": "Y" }
                ]
            }"#,
        );

        assert_eq!(field.attrs.field_type, Some(FieldType::Radio));
        assert_eq!(field.attrs.value, Some(json!("")));
    }

    #[test]
    fn test_one_of_last_flagged_item_wins() {
        let field = parse(
            r#"{
                "type": "array",
                "oneOf": [
                    { "value": "x", "label": "X", "checked": true },
                    { "value": "y", "label": "Y", "selected": true },
                    { "value": "z", "label": "Z" }
                ]
            }"#,
        );

        assert_eq!(field.attrs.value, Some(json!("y")));
        // resolving the default must not reorder the options
        let options = field.items.as_ref().unwrap().as_options().unwrap();
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["X", "Y", "Z"]);
    }

    #[test]
    fn test_enum_builds_select() {
        let field = parse(r#"{ "type": "array", "enum": ["a", "b"] }"#);

        assert_eq!(field.attrs.field_type, Some(FieldType::Select));
        assert_eq!(field.attrs.multiple, Some(false));
        assert_eq!(field.min_items, Some(1));
        assert_eq!(field.max_items, Some(1000));

        let options = field.items.as_ref().unwrap().as_options().unwrap();
        // no naming pass on plain enumerations
        assert!(options.iter().all(|o| o.name.is_none()));
    }

    #[test]
    fn test_min_items_above_one_makes_select_multiple() {
        let field = parse(r#"{ "type": "array", "enum": ["a", "b"], "minItems": 2 }"#);
        assert_eq!(field.attrs.field_type, Some(FieldType::Select));
        assert_eq!(field.attrs.multiple, Some(true));
        assert_eq!(field.attrs.value, Some(json!([null, null])));
    }

    #[test]
    fn test_keyword_priority_any_of_first() {
        let field = parse(r#"{ "type": "array", "anyOf": ["a"], "oneOf": ["b"], "enum": ["c"] }"#);
        assert_eq!(field.attrs.field_type, Some(FieldType::Checkbox));
    }

    #[test]
    fn test_items_sub_schema_builds_fieldset() {
        let field = parse(
            r#"{
                "type": "array",
                "title": "Address",
                "items": {
                    "type": "object",
                    "properties": {
                        "street": { "type": "string" },
                        "city": { "type": "string" }
                    }
                }
            }"#,
        );

        assert_eq!(field.attrs.field_type, Some(FieldType::Fieldset));
        assert_eq!(field.attrs.value, Some(json!([])));
        assert_eq!(field.label, "Address");

        match field.items.as_ref().unwrap() {
            FieldItems::Fields(children) => {
                let names: Vec<_> = children
                    .iter()
                    .map(|f| f.attrs.name.as_deref().unwrap())
                    .collect();
                assert_eq!(names, ["street", "city"]);
            }
            other => panic!("expected nested fields, got {other:?}"),
        }
    }

    #[test]
    fn test_no_keyword_falls_back_to_text() {
        let field = parse(r#"{ "type": "array" }"#);
        assert_eq!(field.attrs.field_type, Some(FieldType::Text));
        assert!(field.items.is_none());
    }

    #[test]
    fn test_item_count_degrades_permissively() {
        assert_eq!(item_count(Some(&json!(3)), 1), 3);
        assert_eq!(item_count(Some(&json!("4")), 1), 4);
        assert_eq!(item_count(Some(&json!("many")), 1), 1);
        assert_eq!(item_count(Some(&json!(0)), 1), 1);
        assert_eq!(item_count(Some(&json!(-2)), 1), 1);
        assert_eq!(item_count(None, 1000), 1000);
    }

    #[test]
    fn test_preseeded_value_survives() {
        let field = parse(
            r#"{
                "type": "array",
                "enum": ["a", "b"],
                "attrs": { "value": "b" }
            }"#,
        );
        assert_eq!(field.attrs.value, Some(json!("b")));
    }
}
