//! Schema Describe
//!
//! Turns JSON Schema documents into display-ready field trees.
//!
//! Every property becomes a [`ResolvedField`] carrying its name, whether its
//! parent requires it, a single formatted type string, its constraints and
//! presentation metadata, and (for objects, complex arrays and unions) its
//! nested fields. A renderer can draw the tree without looking at the
//! original schema again.
//!
//! # Example
//!
//! ```
//! use schema_describe::{describe_value, DescribeOptions, FieldKind};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "required": ["query"],
//!     "properties": {
//!         "query": { "type": "string", "minLength": 1 },
//!         "tags": { "type": "array", "items": { "type": "string" } }
//!     }
//! });
//!
//! let description = describe_value(&schema, &DescribeOptions::new()).unwrap();
//! let fields = description.fields();
//!
//! assert!(fields[0].required);
//! assert_eq!(fields[1].display_type, "string[]");
//! assert_eq!(fields[1].kind, FieldKind::Leaf);
//! ```
//!
//! # Field Kinds
//!
//! | Schema shape | Kind | `displayType` |
//! |--------------|------|---------------|
//! | scalar, or array of simple items | `leaf` | `"string"`, `"string[]"` |
//! | non-empty `properties` | `expandable-object` | `"object"` |
//! | array of objects, arrays or unions | `expandable-array` | `"array"` |
//! | `oneOf` / `anyOf` / `allOf` | `union` | `"oneOf & anyOf"` |
//!
//! `$ref` is not followed; referenced nodes resolve to a leaf typed `any`
//! with a note.

mod constraints;
mod error;
mod format;
mod loader;
mod render;
mod resolver;
mod title;
mod types;

pub use constraints::collect_constraints;
pub use error::DescribeError;
pub use format::{
    format_array_type, format_type, is_empty_schema, is_simple_item, is_simple_items,
};
pub use loader::{is_url, load_schema, load_schema_auto, load_schema_str, navigate_fragment};
pub use render::{render_text, NO_PARAMETERS};
pub use resolver::{describe, describe_value, resolve_field};
pub use title::option_title;
pub use types::{
    AdditionalProperties, Constraint, ConstraintKey, DescribeOptions, FieldKind, Items,
    LiteralPolicy, ResolveContext, ResolvedField, SchemaDescription, SchemaNode, TypeSpec,
    UnionGroup, UnionKind, DEFAULT_MAX_DEPTH,
};

#[cfg(feature = "remote")]
pub use loader::load_schema_url;
