//! The tagged locale tree.
//!
//! A locale document is either a scalar leaf or a mapping of keys to child
//! nodes. JSON arrays are mappings flagged as lists and keyed by element
//! index, so the merge engine addresses them exactly like objects.

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Number, Value};

use crate::error::TypeResult;

/// An opaque scalar translation value.
#[derive(Clone, Debug, PartialEq)]
pub enum LocaleLeaf {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl LocaleLeaf {
    /// Returns `true` for the JSON `null` leaf.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Convert back into a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
        }
    }
}

/// Strings render verbatim, everything else in its JSON form.
impl fmt::Display for LocaleLeaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// A node of a locale tree: a scalar leaf or a mapping of children.
///
/// Old and new trees may disagree on the shape at a given path. Consumers
/// match on the variant instead of coercing one shape into the other.
#[derive(Clone, Debug, PartialEq)]
pub enum LocaleNode {
    Leaf(LocaleLeaf),
    Node(Mapping),
}

impl LocaleNode {
    /// The `null` leaf.
    pub fn null() -> Self {
        Self::Leaf(LocaleLeaf::Null)
    }

    /// A string leaf.
    pub fn string(value: impl Into<String>) -> Self {
        Self::Leaf(LocaleLeaf::String(value.into()))
    }

    /// Returns `true` if this node is the `null` leaf.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Leaf(LocaleLeaf::Null))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Node(mapping) => Some(mapping),
            Self::Leaf(_) => None,
        }
    }

    /// Look up a direct child. Leaves have no children.
    pub fn get(&self, key: &str) -> Option<&LocaleNode> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// Parse a JSON document. Surrounding whitespace is ignored.
    pub fn from_json_str(text: &str) -> TypeResult<Self> {
        let value: Value = serde_json::from_str(text.trim())?;
        Ok(Self::from(value))
    }

    /// Convert back into a JSON value, preserving entry order.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Leaf(leaf) => leaf.to_json(),
            Self::Node(mapping) => mapping.to_json(),
        }
    }
}

/// Returns `true` when a value is absent or the `null` leaf.
pub fn is_nullish(value: Option<&LocaleNode>) -> bool {
    value.map_or(true, LocaleNode::is_null)
}

impl From<Value> for LocaleNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::null(),
            Value::Bool(b) => Self::Leaf(LocaleLeaf::Bool(b)),
            Value::Number(n) => Self::Leaf(LocaleLeaf::Number(n)),
            Value::String(s) => Self::Leaf(LocaleLeaf::String(s)),
            Value::Array(items) => {
                Self::Node(Mapping::from_list(items.into_iter().map(LocaleNode::from)))
            }
            Value::Object(map) => Self::Node(Mapping {
                entries: map
                    .into_iter()
                    .map(|(key, child)| (key, LocaleNode::from(child)))
                    .collect(),
                list: false,
            }),
        }
    }
}

impl From<&str> for LocaleNode {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for LocaleNode {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<bool> for LocaleNode {
    fn from(value: bool) -> Self {
        Self::Leaf(LocaleLeaf::Bool(value))
    }
}

impl From<i64> for LocaleNode {
    fn from(value: i64) -> Self {
        Self::Leaf(LocaleLeaf::Number(value.into()))
    }
}

impl From<Mapping> for LocaleNode {
    fn from(value: Mapping) -> Self {
        Self::Node(value)
    }
}

/// Leaves render like [`LocaleLeaf`]; mappings render as compact JSON.
impl fmt::Display for LocaleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            Self::Node(mapping) => write!(f, "{}", mapping.to_json()),
        }
    }
}

impl Serialize for LocaleNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(LocaleLeaf::Null) => serializer.serialize_unit(),
            Self::Leaf(LocaleLeaf::Bool(b)) => serializer.serialize_bool(*b),
            Self::Leaf(LocaleLeaf::Number(n)) => n.serialize(serializer),
            Self::Leaf(LocaleLeaf::String(s)) => serializer.serialize_str(s),
            Self::Node(mapping) => mapping.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LocaleNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(LocaleNode::from)
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Insertion-ordered children of a [`LocaleNode::Node`].
///
/// Keys are unique. A mapping built from a JSON array is flagged as a list;
/// its keys are the original element indices and it serializes back to an
/// array in entry order.
#[derive(Clone, Debug, Default)]
pub struct Mapping {
    entries: Vec<(String, LocaleNode)>,
    list: bool,
}

impl Mapping {
    /// Create an empty object mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping with the same object/list flavour as `other`.
    pub fn empty_like(other: &Mapping) -> Self {
        Self {
            entries: Vec::new(),
            list: other.list,
        }
    }

    /// Build a list mapping keyed by element index.
    pub fn from_list(items: impl IntoIterator<Item = LocaleNode>) -> Self {
        Self {
            entries: items
                .into_iter()
                .enumerate()
                .map(|(i, node)| (i.to_string(), node))
                .collect(),
            list: true,
        }
    }

    /// Returns `true` if this mapping came from a JSON array.
    pub fn is_list(&self) -> bool {
        self.list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&LocaleNode> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleNode)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    /// Append a child. The key must not already be present.
    pub fn push(&mut self, key: impl Into<String>, node: LocaleNode) {
        let key = key.into();
        debug_assert!(!self.contains_key(&key), "duplicate key {key:?}");
        self.entries.push((key, node));
    }

    /// Sort entries by key, comparing keys byte-wise.
    pub fn sort_by_key(&mut self) {
        self.entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    /// Convert back into a JSON object or array.
    pub fn to_json(&self) -> Value {
        if self.list {
            Value::Array(self.entries.iter().map(|(_, node)| node.to_json()).collect())
        } else {
            Value::Object(
                self.entries
                    .iter()
                    .map(|(key, node)| (key.clone(), node.to_json()))
                    .collect(),
            )
        }
    }
}

/// Objects compare as key sets regardless of order; lists compare element-wise.
impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        if self.list != other.list || self.len() != other.len() {
            return false;
        }
        if self.list {
            return self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((_, a), (_, b))| a == b);
        }
        self.entries
            .iter()
            .all(|(key, node)| other.get(key) == Some(node))
    }
}

impl IntoIterator for Mapping {
    type Item = (String, LocaleNode);
    type IntoIter = std::vec::IntoIter<(String, LocaleNode)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.list {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for (_, node) in &self.entries {
                seq.serialize_element(node)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, node) in &self.entries {
                map.serialize_entry(key, node)?;
            }
            map.end()
        }
    }
}
