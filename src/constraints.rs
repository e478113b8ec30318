//! Constraint and literal aggregation.

use serde_json::Value;

use crate::format::display_literal;
use crate::types::{Constraint, ConstraintKey, LiteralPolicy, SchemaNode};

/// Collect the constraints present on `node` in display order.
///
/// Order is fixed regardless of key order in the source document:
/// `minimum, maximum, minLength, maxLength, pattern, enum, const`.
pub fn collect_constraints(node: &SchemaNode) -> Vec<Constraint> {
    let candidates = [
        (ConstraintKey::Minimum, node.minimum.as_ref().map(|n| n.to_string())),
        (ConstraintKey::Maximum, node.maximum.as_ref().map(|n| n.to_string())),
        (ConstraintKey::MinLength, node.min_length.as_ref().map(|n| n.to_string())),
        (ConstraintKey::MaxLength, node.max_length.as_ref().map(|n| n.to_string())),
        (ConstraintKey::Pattern, node.pattern.clone()),
        (ConstraintKey::Enum, node.enum_values.as_deref().map(enum_list)),
        (ConstraintKey::Const, node.const_value.as_ref().map(Value::to_string)),
    ];

    candidates
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| Constraint { key, value }))
        .collect()
}

/// Apply the literal policy to a `default` or `example` value.
pub fn visible_literal(value: Option<&Value>, policy: LiteralPolicy) -> Option<Value> {
    let value = value?;
    match policy {
        LiteralPolicy::Present => Some(value.clone()),
        LiteralPolicy::Truthy => is_truthy(value).then(|| value.clone()),
    }
}

fn enum_list(values: &[Value]) -> String {
    values
        .iter()
        .map(display_literal)
        .collect::<Vec<_>>()
        .join(", ")
}

// JavaScript truthiness: empty arrays and objects are truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
