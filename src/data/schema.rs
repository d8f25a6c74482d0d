//! JSON Schema node representation and loading.
//!
//! The [`Schema`] struct mirrors the subset of JSON Schema the parser
//! understands. Every key is optional and unknown keys are ignored, so any
//! schema document can be loaded even when it carries constraints this crate
//! does not act on.

use std::str::FromStr;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::data::field::Attrs;

/// Errors raised while loading a schema document.
///
/// Only the loading boundary can fail; once a [`Schema`] exists, walking it
/// never produces an error.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document is not valid JSON or does not match the expected shape.
    #[error("invalid schema document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Declared type of a schema node.
///
/// Anything other than the six supported type names maps to [`Unknown`],
/// which the walker silently skips.
///
/// [`Unknown`]: SchemaType::Unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// Composite node with named properties.
    Object,
    /// True/false value.
    Boolean,
    /// List of child values or options.
    Array,
    /// Whole number.
    Integer,
    /// Floating-point number.
    Number,
    /// Text value.
    String,
    /// Absent or unrecognized type; produces no field.
    #[default]
    Unknown,
}

impl From<&str> for SchemaType {
    fn from(s: &str) -> Self {
        match s {
            "object" => SchemaType::Object,
            "boolean" => SchemaType::Boolean,
            "array" => SchemaType::Array,
            "integer" => SchemaType::Integer,
            "number" => SchemaType::Number,
            "string" => SchemaType::String,
            _ => SchemaType::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for SchemaType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Non-string type declarations (e.g. `"type": ["string", "null"]`)
        // degrade to Unknown instead of failing the whole document.
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some(s) => SchemaType::from(s),
            None => SchemaType::Unknown,
        })
    }
}

/// The `required` keyword, which JSON Schema overloads: a set of property
/// names on object nodes, a plain flag on leaf nodes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Required {
    /// Leaf form: the node itself is required.
    Flag(bool),
    /// Object form: the listed properties are required.
    Names(Vec<String>),
}

impl Default for Required {
    fn default() -> Self {
        Required::Flag(false)
    }
}

impl Required {
    /// Interpret the keyword as a flag on a leaf node.
    pub fn as_flag(&self) -> bool {
        match self {
            Required::Flag(flag) => *flag,
            Required::Names(names) => !names.is_empty(),
        }
    }

    /// Whether the object form lists `name` as required.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            Required::Flag(_) => false,
            Required::Names(names) => names.iter().any(|n| n == name),
        }
    }
}

/// The `items` keyword: a nested schema for array nodes, or a raw value list
/// when a scalar node uses `items` as an enumeration shorthand.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ItemsKeyword {
    /// Sub-schema describing the array's child fields.
    Schema(Box<Schema>),
    /// Raw option values.
    Values(Vec<Value>),
}

/// The four keywords a schema node can use to express a set of possible or
/// child values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKeyword {
    /// Multiple selection, rendered as checkboxes.
    AnyOf,
    /// Single selection, rendered as radios.
    OneOf,
    /// Plain enumeration, rendered as a select.
    Enum,
    /// Nested item schema, rendered as a fieldset.
    Items,
}

/// Keyword resolution order. The first keyword present on a node wins and
/// the rest are ignored.
pub const ARRAY_KEYWORDS: [ArrayKeyword; 4] = [
    ArrayKeyword::AnyOf,
    ArrayKeyword::OneOf,
    ArrayKeyword::Enum,
    ArrayKeyword::Items,
];

/// One node of a JSON-Schema-like document describing a form value.
///
/// Property declaration order is preserved as written in the source
/// document, so walking an object node yields fields in schema order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schema {
    /// Declared node type.
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Named child schemas (object nodes only).
    pub properties: IndexMap<String, Schema>,
    /// Required property names, or a required flag on leaf nodes.
    pub required: Required,
    /// Human-readable label.
    pub title: Option<String>,
    /// Longer help text.
    pub description: Option<String>,
    /// Default value used when no value was pre-seeded.
    pub default: Option<Value>,
    /// `Some(false)` suppresses the node entirely.
    pub visible: Option<bool>,
    /// Whether the resulting control is disabled.
    pub disabled: Option<bool>,
    /// Initial checked state (boolean nodes only).
    pub checked: Option<bool>,
    /// Validation pattern (string nodes only).
    pub pattern: Option<String>,
    /// String format hint (`email`, `uri`).
    pub format: Option<String>,
    /// Minimum string length.
    pub min_length: Option<u64>,
    /// Maximum string length.
    pub max_length: Option<u64>,
    /// Minimum item count; permissively parsed, defaults to 1.
    pub min_items: Option<Value>,
    /// Maximum item count; permissively parsed, defaults to 1000.
    pub max_items: Option<Value>,
    /// Multiple-selection options.
    pub any_of: Option<Vec<Value>>,
    /// Single-selection options.
    pub one_of: Option<Vec<Value>>,
    /// Plain enumeration options.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,
    /// Nested item schema or enumeration shorthand.
    pub items: Option<ItemsKeyword>,
    /// Pre-seeded output attributes; anything set here wins over derived
    /// attributes.
    pub attrs: Option<Attrs>,
}

impl Schema {
    /// Load a schema from an in-memory JSON value.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// The highest-priority array keyword present on this node, if any.
    pub fn first_array_keyword(&self) -> Option<ArrayKeyword> {
        ARRAY_KEYWORDS
            .into_iter()
            .find(|keyword| self.has_keyword(*keyword))
    }

    fn has_keyword(&self, keyword: ArrayKeyword) -> bool {
        match keyword {
            ArrayKeyword::AnyOf => self.any_of.is_some(),
            ArrayKeyword::OneOf => self.one_of.is_some(),
            ArrayKeyword::Enum => self.enum_values.is_some(),
            ArrayKeyword::Items => self.items.is_some(),
        }
    }

    /// The raw option list carried by `keyword`, when it is a value list.
    pub(crate) fn option_values(&self, keyword: ArrayKeyword) -> Option<&[Value]> {
        match keyword {
            ArrayKeyword::AnyOf => self.any_of.as_deref(),
            ArrayKeyword::OneOf => self.one_of.as_deref(),
            ArrayKeyword::Enum => self.enum_values.as_deref(),
            ArrayKeyword::Items => match &self.items {
                Some(ItemsKeyword::Values(values)) => Some(values),
                _ => None,
            },
        }
    }

    /// Rewrite a scalar node carrying an array keyword into an array node
    /// whose `items` sub-schema is an enumeration of the keyword's values.
    ///
    /// This implements the scalar shortcut: a string/number/integer schema
    /// with `anyOf`/`oneOf`/`enum`/`items` is treated entirely as an
    /// enumeration and its scalar constraints are dropped.
    pub(crate) fn reinterpret_as_enum(&self, keyword: ArrayKeyword) -> Schema {
        let values = match self.option_values(keyword) {
            Some(values) => values.to_vec(),
            None => {
                debug!("scalar shortcut on {keyword:?} without a value list");
                Vec::new()
            }
        };

        let mut node = self.clone();
        node.items = Some(ItemsKeyword::Schema(Box::new(Schema {
            schema_type: self.schema_type,
            enum_values: Some(values),
            ..Schema::default()
        })));
        node
    }
}

impl TryFrom<&Value> for Schema {
    type Error = SchemaError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Schema::from_value(value)
    }
}

impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_degrades() {
        let schema: Schema = r#"{ "type": "null" }"#.parse().unwrap();
        assert_eq!(schema.schema_type, SchemaType::Unknown);

        let schema: Schema = r#"{ "type": ["string", "null"] }"#.parse().unwrap();
        assert_eq!(schema.schema_type, SchemaType::Unknown);
    }

    #[test]
    fn test_required_both_forms() {
        let object: Schema = r#"{ "type": "object", "required": ["a"] }"#.parse().unwrap();
        assert!(object.required.contains("a"));
        assert!(!object.required.contains("b"));

        let leaf: Schema = r#"{ "type": "string", "required": true }"#.parse().unwrap();
        assert!(leaf.required.as_flag());
    }

    #[test]
    fn test_property_order_preserved() {
        let schema: Schema = r#"{
            "type": "object",
            "properties": {
                "zebra": { "type": "string" },
                "apple": { "type": "string" },
                "mango": { "type": "string" }
            }
        }"#
        .parse()
        .unwrap();

        let keys: Vec<_> = schema.properties.keys().cloned().collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_keyword_priority() {
        let schema: Schema = r#"{
            "type": "array",
            "oneOf": [1],
            "enum": [2],
            "items": { "type": "string" }
        }"#
        .parse()
        .unwrap();
        assert_eq!(schema.first_array_keyword(), Some(ArrayKeyword::OneOf));

        let schema: Schema = r#"{ "type": "array", "anyOf": [1], "oneOf": [2] }"#.parse().unwrap();
        assert_eq!(schema.first_array_keyword(), Some(ArrayKeyword::AnyOf));
    }

    #[test]
    fn test_items_keyword_forms() {
        let schema: Schema = r#"{ "type": "array", "items": { "type": "string" } }"#
            .parse()
            .unwrap();
        assert!(matches!(schema.items, Some(ItemsKeyword::Schema(_))));

        let schema: Schema = r#"{ "type": "string", "items": ["a", "b"] }"#.parse().unwrap();
        assert!(matches!(schema.items, Some(ItemsKeyword::Values(_))));
    }

    #[test]
    fn test_reinterpret_scalar_as_enum() {
        let schema: Schema = r#"{ "type": "string", "enum": ["a", "b"] }"#.parse().unwrap();
        let node = schema.reinterpret_as_enum(ArrayKeyword::Enum);

        match node.items {
            Some(ItemsKeyword::Schema(sub)) => {
                assert_eq!(sub.schema_type, SchemaType::String);
                assert_eq!(sub.enum_values.as_deref().map(<[Value]>::len), Some(2));
            }
            other => panic!("expected items sub-schema, got {other:?}"),
        }
    }
}
