//! Labels for anonymous union options.
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. `const` value
//! 2. `properties.type.const` (discriminated unions keyed on a `type` field)
//! 3. single-element `enum`
//! 4. `title`
//! 5. `description`, truncated to [`DESCRIPTION_TITLE_LEN`] characters
//! 6. `"Any value"` when the option has no type, properties or union
//! 7. `"Schema {n}"` with the option's 1-based position

use crate::format::{display_literal, truncate};
use crate::types::SchemaNode;

/// Maximum description length used as a title.
pub const DESCRIPTION_TITLE_LEN: usize = 50;

/// Title for an option without structure.
pub const ANY_VALUE_TITLE: &str = "Any value";

/// Synthesize a title for the union option at `index` (0-based, in the
/// original option list).
pub fn option_title(option: &SchemaNode, index: usize) -> String {
    const_title(option)
        .or_else(|| discriminator_title(option))
        .or_else(|| single_enum_title(option))
        .or_else(|| option.title.clone())
        .or_else(|| description_title(option))
        .or_else(|| any_value_title(option))
        .unwrap_or_else(|| format!("Schema {}", index + 1))
}

fn const_title(option: &SchemaNode) -> Option<String> {
    option.const_value.as_ref().map(display_literal)
}

fn discriminator_title(option: &SchemaNode) -> Option<String> {
    option
        .properties
        .as_ref()?
        .get("type")?
        .const_value
        .as_ref()
        .map(display_literal)
}

fn single_enum_title(option: &SchemaNode) -> Option<String> {
    match option.enum_values.as_deref() {
        Some([only]) => Some(display_literal(only)),
        _ => None,
    }
}

fn description_title(option: &SchemaNode) -> Option<String> {
    option
        .description
        .as_deref()
        .map(|d| truncate(d, DESCRIPTION_TITLE_LEN))
}

fn any_value_title(option: &SchemaNode) -> Option<String> {
    let structured =
        option.schema_type.is_some() || option.properties.is_some() || option.has_union();
    (!structured).then(|| ANY_VALUE_TITLE.to_string())
}
