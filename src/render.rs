//! Plain-text rendering of a resolved field tree.
//!
//! One row per field (`name*: type`), details indented beneath it.
//! Complex array items render their contents in place of a header.

use std::fmt::Write;

use crate::types::{FieldKind, ResolvedField, SchemaDescription};

/// Text shown for a schema without properties.
pub const NO_PARAMETERS: &str = "No parameters defined.";

const INDENT: &str = "  ";

/// Render a description as indented text.
pub fn render_text(description: &SchemaDescription) -> String {
    let mut out = String::new();
    match description {
        SchemaDescription::NoParameters => {
            out.push_str(NO_PARAMETERS);
            out.push('\n');
        }
        SchemaDescription::Fields(fields) => {
            for field in fields {
                render_field(&mut out, field, 0);
            }
        }
    }
    out
}

fn render_field(out: &mut String, field: &ResolvedField, depth: usize) {
    let detail_depth = if field.hide_header {
        depth
    } else {
        let marker = if field.required { "*" } else { "" };
        line(out, depth, format_args!("{}{}: {}", field.name, marker, field.display_type));
        depth + 1
    };

    if let Some(description) = &field.description {
        line(out, detail_depth, format_args!("{}", description));
    }
    if let Some(default) = &field.default {
        line(out, detail_depth, format_args!("default: {}", default));
    }
    if let Some(example) = &field.example {
        line(out, detail_depth, format_args!("example: {}", example));
    }
    for constraint in &field.constraints {
        line(
            out,
            detail_depth,
            format_args!("{}: {}", constraint.key.keyword(), constraint.value),
        );
    }
    if let Some(note) = &field.note {
        line(out, detail_depth, format_args!("({})", note));
    }

    match &field.kind {
        FieldKind::Leaf => {}
        FieldKind::ExpandableObject { children } => {
            for child in children {
                render_field(out, child, detail_depth);
            }
        }
        FieldKind::ExpandableArray { item } => render_field(out, item, detail_depth),
        FieldKind::Union { properties, groups } => {
            for property in properties {
                render_field(out, property, detail_depth);
            }
            for group in groups {
                line(out, detail_depth, format_args!("{}:", group.union_kind));
                for option in &group.options {
                    render_field(out, option, detail_depth + 1);
                }
            }
        }
    }
}

fn line(out: &mut String, depth: usize, text: std::fmt::Arguments<'_>) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}{}", INDENT.repeat(depth), text);
}
