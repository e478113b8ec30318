//! Core types: the input schema model and the resolved field tree.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default nesting limit for [`DescribeOptions`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// === Input model ===

/// One JSON Schema node, restricted to the keywords the resolver reads.
///
/// Unknown keys are ignored. Boolean sub-schemas (`true` / `false`) are
/// accepted wherever a sub-schema is expected and read as a node with no
/// content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    #[serde(default, rename = "type")]
    pub schema_type: Option<TypeSpec>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "enum")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(default, rename = "const", deserialize_with = "de::present")]
    pub const_value: Option<Value>,
    #[serde(default, deserialize_with = "de::present")]
    pub default: Option<Value>,
    #[serde(default, deserialize_with = "de::present")]
    pub example: Option<Value>,

    #[serde(default)]
    pub minimum: Option<serde_json::Number>,
    #[serde(default)]
    pub maximum: Option<serde_json::Number>,
    #[serde(default)]
    pub min_length: Option<serde_json::Number>,
    #[serde(default)]
    pub max_length: Option<serde_json::Number>,
    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default, deserialize_with = "de::schema_map")]
    pub properties: Option<IndexMap<String, SchemaNode>>,
    #[serde(default, deserialize_with = "de::lenient_required")]
    pub required: Vec<String>,
    #[serde(default, deserialize_with = "de::items")]
    pub items: Option<Items>,
    #[serde(default, deserialize_with = "de::additional")]
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(default, deserialize_with = "de::schema_list")]
    pub one_of: Option<Vec<SchemaNode>>,
    #[serde(default, deserialize_with = "de::schema_list")]
    pub any_of: Option<Vec<SchemaNode>>,
    #[serde(default, deserialize_with = "de::schema_list")]
    pub all_of: Option<Vec<SchemaNode>>,

    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,
}

impl SchemaNode {
    /// Build a node from an arbitrary JSON value.
    ///
    /// # Errors
    ///
    /// Fails when a known keyword has the wrong JSON shape, e.g. a numeric `type`.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        de::node_from_value(value.clone())
    }

    /// Returns the properties map when it has at least one entry.
    pub fn non_empty_properties(&self) -> Option<&IndexMap<String, SchemaNode>> {
        self.properties.as_ref().filter(|props| !props.is_empty())
    }

    /// Returns the union lists present on this node in `oneOf, anyOf, allOf` order.
    pub fn unions(&self) -> Vec<(UnionKind, &[SchemaNode])> {
        [
            (UnionKind::OneOf, &self.one_of),
            (UnionKind::AnyOf, &self.any_of),
            (UnionKind::AllOf, &self.all_of),
        ]
        .into_iter()
        .filter_map(|(kind, list)| list.as_deref().map(|options| (kind, options)))
        .collect()
    }

    /// True if any of `oneOf` / `anyOf` / `allOf` is present.
    pub fn has_union(&self) -> bool {
        self.one_of.is_some() || self.any_of.is_some() || self.all_of.is_some()
    }

    /// True if `type` is, or includes, the given type name.
    pub fn has_type(&self, name: &str) -> bool {
        self.schema_type.as_ref().is_some_and(|t| t.contains(name))
    }

    /// Whether `name` is listed in this node's own `required` list.
    pub fn requires(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// The `type` keyword: a single name or an ordered list of names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeSpec {
    /// Type names in author order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            TypeSpec::Single(name) => vec![name.as_str()],
            TypeSpec::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().contains(&name)
    }
}

/// The `items` keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum Items {
    /// A single element schema.
    Schema(Box<SchemaNode>),
    /// Tuple form; not expanded by the resolver.
    Tuple(Vec<SchemaNode>),
    /// `items: true` or `items: false`.
    Bool(bool),
}

/// The `additionalProperties` keyword. Informational only.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<SchemaNode>),
}

// === Output model ===

/// Union composition keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UnionKind {
    OneOf,
    AnyOf,
    AllOf,
}

impl UnionKind {
    /// The JSON Schema keyword for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            UnionKind::OneOf => "oneOf",
            UnionKind::AnyOf => "anyOf",
            UnionKind::AllOf => "allOf",
        }
    }
}

impl fmt::Display for UnionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Constraint keywords, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintKey {
    Minimum,
    Maximum,
    MinLength,
    MaxLength,
    Pattern,
    Enum,
    Const,
}

impl ConstraintKey {
    pub fn keyword(&self) -> &'static str {
        match self {
            ConstraintKey::Minimum => "minimum",
            ConstraintKey::Maximum => "maximum",
            ConstraintKey::MinLength => "minLength",
            ConstraintKey::MaxLength => "maxLength",
            ConstraintKey::Pattern => "pattern",
            ConstraintKey::Enum => "enum",
            ConstraintKey::Const => "const",
        }
    }
}

/// A single rendered constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constraint {
    pub key: ConstraintKey,
    pub value: String,
}

/// One labelled group of union options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionGroup {
    pub union_kind: UnionKind,
    pub options: Vec<ResolvedField>,
}

/// Shape of a resolved field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldKind {
    Leaf,
    ExpandableObject {
        children: Vec<ResolvedField>,
    },
    /// Complex array; `item` repeats the array's name with its header hidden.
    ExpandableArray {
        item: Box<ResolvedField>,
    },
    Union {
        /// Properties declared next to the union keywords.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        properties: Vec<ResolvedField>,
        groups: Vec<UnionGroup>,
    },
}

/// Display-ready description of one property or union option.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedField {
    pub name: String,
    pub required: bool,
    pub display_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
    pub level: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hide_header: bool,
    /// Why the node was not expanded (unresolved `$ref`, tuple items, depth limit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl ResolvedField {
    /// Nested fields in display order: object properties, the array item,
    /// or shared union properties followed by every union option.
    pub fn children(&self) -> Vec<&ResolvedField> {
        match &self.kind {
            FieldKind::Leaf => Vec::new(),
            FieldKind::ExpandableObject { children } => children.iter().collect(),
            FieldKind::ExpandableArray { item } => vec![item.as_ref()],
            FieldKind::Union { properties, groups } => properties
                .iter()
                .chain(groups.iter().flat_map(|g| g.options.iter()))
                .collect(),
        }
    }

    /// The first union group's kind, if this is a union field.
    pub fn union_kind(&self) -> Option<UnionKind> {
        match &self.kind {
            FieldKind::Union { groups, .. } => groups.first().map(|g| g.union_kind),
            _ => None,
        }
    }

    pub fn is_expandable(&self) -> bool {
        !matches!(self.kind, FieldKind::Leaf)
    }

    /// Look up a constraint by key.
    pub fn constraint(&self, key: ConstraintKey) -> Option<&str> {
        self.constraints
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.value.as_str())
    }
}

/// Result of describing a root schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "fields", rename_all = "kebab-case")]
pub enum SchemaDescription {
    /// The root has no properties.
    NoParameters,
    Fields(Vec<ResolvedField>),
}

impl SchemaDescription {
    pub fn is_empty(&self) -> bool {
        matches!(self, SchemaDescription::NoParameters)
    }

    /// Top-level fields; empty for [`SchemaDescription::NoParameters`].
    pub fn fields(&self) -> &[ResolvedField] {
        match self {
            SchemaDescription::NoParameters => &[],
            SchemaDescription::Fields(fields) => fields,
        }
    }
}

// === Options ===

/// Recursion context threaded through the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveContext {
    pub level: usize,
    pub hide_header: bool,
}

impl ResolveContext {
    /// Context for the direct children of a node at this level.
    pub fn nested(&self) -> Self {
        Self {
            level: self.level + 1,
            hide_header: false,
        }
    }

    /// Context for the element of a complex array.
    pub fn array_item(&self) -> Self {
        Self {
            level: self.level + 1,
            hide_header: true,
        }
    }
}

/// Which `default` / `example` values are surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralPolicy {
    /// Any present value, including `0`, `false`, `""` and `null`.
    #[default]
    Present,
    /// Only JavaScript-truthy values; `0`, `false`, `""` and `null` are hidden.
    Truthy,
}

/// Options for describing a schema.
#[derive(Debug, Clone)]
pub struct DescribeOptions {
    /// Nodes nested deeper than this resolve to a leaf with a note.
    pub max_depth: usize,
    pub literal_policy: LiteralPolicy,
}

impl DescribeOptions {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            literal_policy: LiteralPolicy::default(),
        }
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn literal_policy(mut self, policy: LiteralPolicy) -> Self {
        self.literal_policy = policy;
        self
    }
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserialization helpers for sub-schema positions.
mod de {
    use indexmap::IndexMap;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::{AdditionalProperties, Items, SchemaNode};

    pub(super) fn node_from_value(value: Value) -> Result<SchemaNode, serde_json::Error> {
        match value {
            Value::Bool(_) => Ok(SchemaNode::default()),
            other => serde_json::from_value(other),
        }
    }

    /// Keeps an explicit `null` as `Some(Value::Null)`.
    pub(super) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Some)
    }

    pub(super) fn schema_map<'de, D>(
        deserializer: D,
    ) -> Result<Option<IndexMap<String, SchemaNode>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(name, value)| node_from_value(value).map(|node| (name, node)))
            .collect::<Result<IndexMap<_, _>, _>>()
            .map(Some)
            .map_err(D::Error::custom)
    }

    pub(super) fn schema_list<'de, D>(deserializer: D) -> Result<Option<Vec<SchemaNode>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<Value>::deserialize(deserializer)?;
        raw.into_iter()
            .map(node_from_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
            .map_err(D::Error::custom)
    }

    pub(super) fn items<'de, D>(deserializer: D) -> Result<Option<Items>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = match Value::deserialize(deserializer)? {
            Value::Bool(b) => Items::Bool(b),
            Value::Array(tuple) => Items::Tuple(
                tuple
                    .into_iter()
                    .map(node_from_value)
                    .collect::<Result<_, _>>()
                    .map_err(D::Error::custom)?,
            ),
            other => Items::Schema(Box::new(
                serde_json::from_value(other).map_err(D::Error::custom)?,
            )),
        };
        Ok(Some(items))
    }

    pub(super) fn additional<'de, D>(
        deserializer: D,
    ) -> Result<Option<AdditionalProperties>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let additional = match Value::deserialize(deserializer)? {
            Value::Bool(b) => AdditionalProperties::Bool(b),
            other => AdditionalProperties::Schema(Box::new(
                serde_json::from_value(other).map_err(D::Error::custom)?,
            )),
        };
        Ok(Some(additional))
    }

    /// Non-list `required` values (Draft-03 booleans) read as an empty list.
    pub(super) fn lenient_required<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(names) => names
                .into_iter()
                .filter_map(|name| match name {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }
}
