//! Type formatting and the shape predicates the resolver branches on.

use serde_json::Value;

use crate::types::{Items, SchemaNode, TypeSpec};

/// Display name for a node without `type`.
pub const ANY_TYPE: &str = "any";

/// Format a `type` keyword and optional `format` for display.
///
/// Type lists keep author order: `["string", "null"]` -> `"string | null"`.
pub fn format_type(schema_type: Option<&TypeSpec>, format: Option<&str>) -> String {
    let joined = match schema_type {
        None => ANY_TYPE.to_string(),
        Some(spec) => spec.names().join(" | "),
    };
    match format {
        Some(format) => format!("{} ({})", joined, format),
        None => joined,
    }
}

/// Format a node's own type and format.
pub fn format_node_type(node: &SchemaNode) -> String {
    format_type(node.schema_type.as_ref(), node.format.as_deref())
}

/// Format an array whose element schema is simple as `"<item>[]"`.
///
/// When the array's `type` is a list, only the `"array"` entry is replaced:
/// `["array", "null"]` with string items -> `"string[] | null"`.
pub fn format_array_type(node: &SchemaNode, item: &SchemaNode) -> String {
    let item_type = format_node_type(item);
    let notation = match node.schema_type.as_ref() {
        Some(TypeSpec::Multiple(names)) if names.len() > 1 => names
            .iter()
            .map(|name| {
                if name == "array" {
                    format!("{}[]", item_type)
                } else {
                    name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" | "),
        _ => format!("{}[]", item_type),
    };
    match node.format.as_deref() {
        Some(format) => format!("{} ({})", notation, format),
        None => notation,
    }
}

/// Whether array items can be flattened into `"<item>[]"`.
///
/// Items are complex when they carry a union, non-empty `properties`,
/// or a type of `array` or `object`.
pub fn is_simple_item(item: &SchemaNode) -> bool {
    !(item.has_union()
        || item.non_empty_properties().is_some()
        || item.has_type("array")
        || item.has_type("object"))
}

/// [`is_simple_item`] lifted to the `items` keyword.
///
/// Boolean items are simple; tuple items are never flattened.
pub fn is_simple_items(items: &Items) -> bool {
    match items {
        Items::Schema(item) => is_simple_item(item),
        Items::Bool(_) => true,
        Items::Tuple(_) => false,
    }
}

/// A node with nothing to show: no type, properties, union, const, enum,
/// items or `$ref`.
pub fn is_empty_schema(node: &SchemaNode) -> bool {
    node.schema_type.is_none()
        && node.non_empty_properties().is_none()
        && !node.has_union()
        && node.const_value.is_none()
        && node.enum_values.is_none()
        && node.items.is_none()
        && node.reference.is_none()
}

/// Render a literal for a label: strings bare, everything else as compact JSON.
pub fn display_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Truncate to `max` characters, appending `...` when anything was cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: Value) -> SchemaNode {
        SchemaNode::from_value(&value).unwrap()
    }

    #[test]
    fn format_type_missing_is_any() {
        assert_eq!(format_type(None, None), "any");
    }

    #[test]
    fn format_type_keeps_author_order() {
        let spec = TypeSpec::Multiple(vec!["null".into(), "string".into()]);
        assert_eq!(format_type(Some(&spec), None), "null | string");
    }

    #[test]
    fn format_type_appends_format() {
        let spec = TypeSpec::Single("string".into());
        assert_eq!(format_type(Some(&spec), Some("date-time")), "string (date-time)");
    }

    #[test]
    fn array_type_uses_item_type() {
        let array = node(json!({ "type": "array", "items": { "type": "integer" } }));
        let item = node(json!({ "type": "integer" }));
        assert_eq!(format_array_type(&array, &item), "integer[]");

        let item = node(json!({ "type": "string", "format": "uri" }));
        assert_eq!(format_array_type(&array, &item), "string (uri)[]");

        let item = node(json!({}));
        assert_eq!(format_array_type(&array, &item), "any[]");
    }

    #[test]
    fn nullable_array_type() {
        let array = node(json!({ "type": ["array", "null"] }));
        let item = node(json!({ "type": "string" }));
        assert_eq!(format_array_type(&array, &item), "string[] | null");
    }

    #[test]
    fn simple_items() {
        assert!(is_simple_item(&node(json!({ "type": "string" }))));
        assert!(is_simple_item(&node(json!({ "enum": ["a", "b"] }))));
        assert!(is_simple_item(&node(json!({}))));
        assert!(is_simple_item(&node(json!({ "type": "string", "properties": {} }))));
    }

    #[test]
    fn complex_items() {
        assert!(!is_simple_item(&node(json!({ "type": "object" }))));
        assert!(!is_simple_item(&node(json!({ "type": "array" }))));
        assert!(!is_simple_item(&node(json!({ "type": ["object", "null"] }))));
        assert!(!is_simple_item(&node(json!({ "properties": { "a": {} } }))));
        assert!(!is_simple_item(&node(json!({ "anyOf": [{ "type": "string" }] }))));
    }

    #[test]
    fn items_keyword_simplicity() {
        assert!(is_simple_items(&Items::Bool(true)));
        assert!(!is_simple_items(&Items::Tuple(vec![SchemaNode::default()])));
    }

    #[test]
    fn empty_schema_detection() {
        assert!(is_empty_schema(&node(json!({}))));
        assert!(is_empty_schema(&node(json!({ "description": "only text" }))));
        assert!(is_empty_schema(&node(json!({ "minimum": 1, "properties": {} }))));

        assert!(!is_empty_schema(&node(json!({ "type": "string" }))));
        assert!(!is_empty_schema(&node(json!({ "const": null }))));
        assert!(!is_empty_schema(&node(json!({ "enum": [] }))));
        assert!(!is_empty_schema(&node(json!({ "items": {} }))));
        assert!(!is_empty_schema(&node(json!({ "allOf": [] }))));
        assert!(!is_empty_schema(&node(json!({ "$ref": "#/$defs/Card" }))));
    }

    #[test]
    fn literals() {
        assert_eq!(display_literal(&json!("card")), "card");
        assert_eq!(display_literal(&json!(42)), "42");
        assert_eq!(display_literal(&json!(true)), "true");
        assert_eq!(display_literal(&json!({ "a": 1 })), r#"{"a":1}"#);
    }

    #[test]
    fn truncate_long_text() {
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ééé", 2), "éé...");
        assert_eq!(truncate("exact", 5), "exact");
    }
}
