//! Schema resolution - turns a schema into a display-ready field tree.
//!
//! Resolution is a single top-down pass. Every call builds a fresh tree from
//! its input and touches no shared state.

use serde_json::Value;
use tracing::{debug, warn};

use crate::constraints::{collect_constraints, visible_literal};
use crate::error::DescribeError;
use crate::format::{format_array_type, format_node_type, is_empty_schema, is_simple_items};
use crate::title::option_title;
use crate::types::{
    json_type_name, DescribeOptions, FieldKind, Items, ResolveContext, ResolvedField,
    SchemaDescription, SchemaNode, TypeSpec, UnionGroup, UnionKind,
};

/// Describe the properties of a root object schema.
///
/// Each top-level field is marked required against the root's own
/// `required` list. A root without properties yields
/// [`SchemaDescription::NoParameters`].
pub fn describe(schema: &SchemaNode, options: &DescribeOptions) -> SchemaDescription {
    if schema.non_empty_properties().is_none() {
        debug!("root schema has no properties");
        return SchemaDescription::NoParameters;
    }
    SchemaDescription::Fields(resolve_properties(
        schema,
        ResolveContext::default(),
        options,
    ))
}

/// Describe a root schema given as raw JSON.
///
/// # Errors
///
/// Returns `DescribeError::InvalidSchema` if the value is not a schema
/// object or a known keyword has the wrong shape.
pub fn describe_value(
    schema: &Value,
    options: &DescribeOptions,
) -> Result<SchemaDescription, DescribeError> {
    if !(schema.is_object() || schema.is_boolean()) {
        return Err(DescribeError::InvalidSchema {
            message: format!("expected an object schema, got {}", json_type_name(schema)),
        });
    }
    let node = SchemaNode::from_value(schema).map_err(|e| DescribeError::InvalidSchema {
        message: e.to_string(),
    })?;
    Ok(describe(&node, options))
}

/// Resolve a single named schema node.
///
/// `required` is decided by the caller against the enclosing object's
/// `required` list; it is never derived from `node` itself.
pub fn resolve_field(
    name: &str,
    node: &SchemaNode,
    required: bool,
    context: ResolveContext,
    options: &DescribeOptions,
) -> ResolvedField {
    let mut field = ResolvedField {
        name: name.to_string(),
        required,
        display_type: format_node_type(node),
        description: node.description.clone(),
        default: visible_literal(node.default.as_ref(), options.literal_policy),
        example: visible_literal(node.example.as_ref(), options.literal_policy),
        constraints: collect_constraints(node),
        level: context.level,
        hide_header: context.hide_header,
        note: None,
        kind: FieldKind::Leaf,
    };

    if context.level > options.max_depth {
        warn!(
            field = name,
            level = context.level,
            "nesting limit reached, field not expanded"
        );
        field.note = Some(format!(
            "nested deeper than {} levels, not expanded",
            options.max_depth
        ));
        return field;
    }

    if let Some(reference) = &node.reference {
        debug!(field = name, reference = %reference, "$ref left unresolved");
        field.note = Some(format!("unresolved reference {}", reference));
    }

    if node.has_union() {
        resolve_union(&mut field, node, context, options);
    } else if let Some(items) = array_items(node) {
        resolve_array(&mut field, node, items, context, options);
    } else if node.non_empty_properties().is_some() {
        field.kind = FieldKind::ExpandableObject {
            children: resolve_properties(node, context, options),
        };
    }

    field
}

// --- Internal implementation ---

/// Resolve each property of `node` one level below `context`.
fn resolve_properties(
    node: &SchemaNode,
    context: ResolveContext,
    options: &DescribeOptions,
) -> Vec<ResolvedField> {
    let Some(properties) = node.non_empty_properties() else {
        return Vec::new();
    };
    let nested = context.nested();
    properties
        .iter()
        .map(|(name, child)| resolve_field(name, child, node.requires(name), nested, options))
        .collect()
}

/// `items` of a node that reads as an array: typed `array`, or untyped with `items`.
fn array_items(node: &SchemaNode) -> Option<&Items> {
    let items = node.items.as_ref()?;
    (node.schema_type.is_none() || node.has_type("array")).then_some(items)
}

fn resolve_array(
    field: &mut ResolvedField,
    node: &SchemaNode,
    items: &Items,
    context: ResolveContext,
    options: &DescribeOptions,
) {
    match items {
        Items::Tuple(_) => {
            debug!(field = %field.name, "tuple-form items left unexpanded");
            field.display_type = format_array_type(node, &SchemaNode::default());
            field.note = Some("tuple-form items are not expanded".to_string());
        }
        Items::Schema(item) if !is_simple_items(items) => {
            field.display_type = complex_array_type(node);
            field.kind = FieldKind::ExpandableArray {
                item: Box::new(resolve_field(
                    &field.name,
                    item,
                    false,
                    context.array_item(),
                    options,
                )),
            };
        }
        Items::Schema(item) => {
            field.display_type = format_array_type(node, item);
        }
        Items::Bool(_) => {
            field.display_type = format_array_type(node, &SchemaNode::default());
        }
    }
}

// "array", or the author's full type list when it names more than one type.
fn complex_array_type(node: &SchemaNode) -> String {
    match &node.schema_type {
        Some(TypeSpec::Multiple(names)) if names.len() > 1 => names.join(" | "),
        _ => "array".to_string(),
    }
}

fn resolve_union(
    field: &mut ResolvedField,
    node: &SchemaNode,
    context: ResolveContext,
    options: &DescribeOptions,
) {
    let unions = node.unions();
    field.display_type = unions
        .iter()
        .map(|(kind, _)| kind.keyword())
        .collect::<Vec<_>>()
        .join(" & ");

    let groups = unions
        .into_iter()
        .map(|(union_kind, alternatives)| UnionGroup {
            union_kind,
            options: resolve_union_options(&field.name, union_kind, alternatives, context, options),
        })
        .collect();

    field.kind = FieldKind::Union {
        properties: resolve_properties(node, context, options),
        groups,
    };
}

fn resolve_union_options(
    parent: &str,
    union_kind: UnionKind,
    alternatives: &[SchemaNode],
    context: ResolveContext,
    options: &DescribeOptions,
) -> Vec<ResolvedField> {
    let nested = context.nested();
    alternatives
        .iter()
        .enumerate()
        .filter_map(|(index, alternative)| {
            if is_empty_schema(alternative) {
                debug!(field = parent, %union_kind, index, "skipping empty union option");
                return None;
            }
            let title = option_title(alternative, index);
            Some(resolve_field(&title, alternative, false, nested, options))
        })
        .collect()
}
