use serde_json::{Map, Value};

use crate::error::{IssueCode, PathSegment, SchemaError};
use crate::modifiers::ZOptional;
use crate::node::{IntoNode, Node, NodeKind, SchemaNode};

/// How to handle keys not declared in the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Silently drop unknown keys from the output (default).
    Strip,
    /// Reject unknown keys with a validation error.
    Strict,
    /// Keep unknown keys as-is in the output.
    Passthrough,
}

/// Object schema: an ordered shape of named field schemas.
///
/// Field order is declaration order; it is the order defaults are collected in.
///
/// # Example
/// ```
/// use fieldscope_schema::prelude::*;
///
/// let schema = fieldscope_schema::object()
///     .field("name", fieldscope_schema::string().min(1))
///     .field("bio", fieldscope_schema::string().optional());
///
/// let parsed = schema.parse(r#"{"name": "Ada"}"#).unwrap();
/// assert!(parsed.get("bio").is_none());
/// ```
#[derive(Clone)]
pub struct ZObject {
    fields: Vec<(String, Node)>,
    unknown_keys: UnknownKeys,
}

impl ZObject {
    pub fn new() -> Self {
        Self {
            fields: vec![],
            unknown_keys: UnknownKeys::Strip,
        }
    }

    /// Add a field. A later field with the same name replaces the earlier one.
    pub fn field(mut self, name: impl Into<String>, schema: impl IntoNode) -> Self {
        let name = name.into();
        let node = schema.into_node();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = node,
            None => self.fields.push((name, node)),
        }
        self
    }

    /// Look up a field by exact name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    /// Iterate `(name, schema)` pairs in declaration order.
    pub fn shape(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.fields.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Field names in declaration order.
    pub fn keyof(&self) -> Vec<String> {
        self.fields.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn unknown_keys(&self) -> UnknownKeys {
        self.unknown_keys
    }

    /// Reject unknown keys.
    pub fn strict(mut self) -> Self {
        self.unknown_keys = UnknownKeys::Strict;
        self
    }

    /// Drop unknown keys (default).
    pub fn strip(mut self) -> Self {
        self.unknown_keys = UnknownKeys::Strip;
        self
    }

    /// Keep unknown keys without validation.
    pub fn passthrough(mut self) -> Self {
        self.unknown_keys = UnknownKeys::Passthrough;
        self
    }

    /// Remove a field by name.
    pub fn omit(mut self, name: &str) -> Self {
        self.fields.retain(|(n, _)| n != name);
        self
    }

    /// Keep only the listed fields.
    pub fn pick(mut self, names: &[&str]) -> Self {
        self.fields.retain(|(n, _)| names.contains(&n.as_str()));
        self
    }

    /// Merge another object's fields into this one; `other` wins on conflicts.
    pub fn extend(mut self, other: ZObject) -> Self {
        for (name, node) in other.fields {
            self = self.field(name, node);
        }
        self
    }

    /// Wrap every field in `optional()`.
    pub fn partial(mut self) -> Self {
        self.fields = self
            .fields
            .into_iter()
            .map(|(n, s)| (n, ZOptional::new(s).into_node()))
            .collect();
        self
    }
}

impl Default for ZObject {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaNode for ZObject {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Object(self)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        let value = input.ok_or_else(SchemaError::required)?;
        let obj = value
            .as_object()
            .ok_or_else(|| SchemaError::invalid_type("object", value))?;

        let mut result = Map::new();
        let mut errors = SchemaError::new();

        for (name, schema) in &self.fields {
            match schema.parse_input(obj.get(name)) {
                Ok(Some(v)) => {
                    result.insert(name.clone(), v);
                }
                Ok(None) => {}
                Err(e) => errors = errors.merge(e.with_prefix(PathSegment::Field(name.clone()))),
            }
        }

        let unknown = obj
            .iter()
            .filter(|(k, _)| self.get(k).is_none());
        match self.unknown_keys {
            UnknownKeys::Strip => {}
            UnknownKeys::Strict => {
                for (key, _) in unknown {
                    errors = errors.merge(
                        SchemaError::single(
                            IssueCode::UnrecognizedField,
                            format!("Unrecognized field: \"{}\"", key),
                        )
                        .with_prefix(PathSegment::Field(key.clone())),
                    );
                }
            }
            UnknownKeys::Passthrough => {
                for (key, v) in unknown {
                    result.insert(key.clone(), v.clone());
                }
            }
        }

        if errors.is_empty() {
            Ok(Some(Value::Object(result)))
        } else {
            Err(errors)
        }
    }
}
