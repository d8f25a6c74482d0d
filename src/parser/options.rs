//! Option normalization, naming, and default value resolution.

use serde_json::Value;

use crate::data::field::OptionItem;

/// Normalize raw option values into items.
///
/// Option objects are read key by key; missing or mistyped keys degrade to
/// defaults. Raw scalars become items whose label is the scalar itself.
pub fn parse_items(values: &[Value]) -> Vec<OptionItem> {
    values
        .iter()
        .map(|value| match value {
            Value::Object(entry) => OptionItem {
                value: entry.get("value").cloned().unwrap_or(Value::Null),
                label: entry.get("label").map(scalar_label).unwrap_or_default(),
                name: entry
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                checked: entry.get("checked").and_then(Value::as_bool).unwrap_or(false),
                selected: entry
                    .get("selected")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            },
            scalar => OptionItem {
                value: scalar.clone(),
                label: scalar_label(scalar),
                ..OptionItem::default()
            },
        })
        .collect()
}

fn scalar_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build a naming transform seeded with the owning field's name.
///
/// The transform only fills absent or empty names, so re-applying it is a
/// no-op. Synthetic names are `{prefix}-` (an empty prefix contributes
/// nothing) followed by the item label with every whitespace run collapsed
/// to a single hyphen.
pub fn name_item(prefix: Option<&str>) -> impl Fn(&mut OptionItem) + '_ {
    move |item| {
        if item.name.as_deref().is_none_or(str::is_empty) {
            let mut name = match prefix {
                Some(prefix) if !prefix.is_empty() => format!("{prefix}-"),
                _ => String::new(),
            };
            name.push_str(&hyphenate(&item.label));
            item.name = Some(name);
        }
    }
}

fn hyphenate(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_whitespace = false;
    for c in label.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Collect the checked values of an option list.
///
/// Unchecked positions are kept as holes (`null`), so the result lines up
/// position-for-position with the option list instead of being compacted.
pub fn array_values(items: &[OptionItem]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|item| {
                if item.checked {
                    item.value.clone()
                } else {
                    Value::Null
                }
            })
            .collect(),
    )
}

/// Resolve a single default value from an option list.
///
/// Among all items flagged checked or selected, the last declared one wins.
/// Returns an empty string when none qualifies. The scan runs back to front
/// over indices and leaves the option order untouched.
pub fn single_value(items: &[OptionItem]) -> Value {
    items
        .iter()
        .rev()
        .find(|item| item.checked || item.selected)
        .map(|item| item.value.clone())
        .unwrap_or_else(|| Value::String(String::new()))
}
