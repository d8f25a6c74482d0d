//! Form field descriptor types.
//!
//! A [`Field`] is the normalized output of the parser: one renderable form
//! control with its resolved UI kind, attributes, and (for composite kinds)
//! child items. Renderers dispatch on [`Attrs::field_type`] and never need
//! to look at the original schema.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::data::schema::SchemaType;

/// Resolved UI kind of a form field, the dispatch key for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single checkbox (boolean) or checkbox group (anyOf).
    Checkbox,
    /// Radio group (oneOf).
    Radio,
    /// Select element (enum).
    Select,
    /// Nested group of child fields (items).
    Fieldset,
    /// Plain text input.
    Text,
    /// Numeric input.
    Number,
    /// Email input.
    Email,
    /// URL input.
    Url,
}

impl FieldType {
    /// The lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::Fieldset => "fieldset",
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Email => "email",
            FieldType::Url => "url",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute bag for one field.
///
/// `None` means an attribute has not been decided yet. Parsers only fill
/// attributes that are still undecided, so values pre-seeded through the
/// schema's `attrs` key always win over derived ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attrs {
    /// Resolved UI kind; always set once a parser returns.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    /// Control name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current or default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Whether the control must be filled in.
    pub required: bool,
    /// Whether the control is disabled.
    pub disabled: bool,
    /// Checked state (checkbox kind only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Validation pattern (text kinds only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Minimum text length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minlength: Option<u64>,
    /// Maximum text length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxlength: Option<u64>,
    /// Multiple selection (select kind only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    /// Author-supplied attributes outside the known set, passed through
    /// untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Attrs {
    /// Whether the current value counts as empty for default recomputation:
    /// unset, empty string, or empty list.
    pub(crate) fn value_is_empty(&self) -> bool {
        match &self.value {
            None => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(Value::Array(values)) => values.is_empty(),
            Some(_) => false,
        }
    }
}

/// One selectable value within an enumeration-shaped field.
///
/// Items synthesized from a raw scalar carry the scalar as both value and
/// label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionItem {
    /// Value submitted when the item is selected.
    pub value: Value,
    /// Display label.
    pub label: String,
    /// Control name; filled in by the naming pass when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Initial checked state.
    pub checked: bool,
    /// Initial selected state.
    pub selected: bool,
}

/// Child entries of a composite field: flat options for
/// select/radio/checkbox, nested field descriptors for fieldset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldItems {
    /// Flat option list.
    Options(Vec<OptionItem>),
    /// Nested fields, each rendered recursively.
    Fields(Vec<Field>),
}

impl FieldItems {
    /// Number of child entries.
    pub fn len(&self) -> usize {
        match self {
            FieldItems::Options(options) => options.len(),
            FieldItems::Fields(fields) => fields.len(),
        }
    }

    /// Whether there are no child entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The flat option list, if this is an option-shaped field.
    pub fn as_options(&self) -> Option<&[OptionItem]> {
        match self {
            FieldItems::Options(options) => Some(options),
            FieldItems::Fields(_) => None,
        }
    }
}

/// Normalized descriptor of one renderable form control.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Resolved attributes.
    pub attrs: Attrs,
    /// Original schema type the field was derived from.
    pub schema_type: SchemaType,
    /// Display label, from the schema title.
    pub label: String,
    /// Help text, from the schema description.
    pub description: String,
    /// Child items; present only on select/radio/checkbox/fieldset kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<FieldItems>,
    /// Minimum item count (array-derived kinds only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    /// Maximum item count (array-derived kinds only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
}
