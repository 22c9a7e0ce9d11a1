use serde_json::Value;

use crate::error::{IssueCode, SchemaError};
use crate::node::{IntoNode, Node, NodeKind, SchemaNode};

/// Discriminated union: chooses a member by the value of a discriminator field.
///
/// Each member is an object schema whose shape declares the discriminator as a
/// literal. Members are kept in declaration order.
///
/// Created via [`fieldscope_schema::discriminated_union()`](crate::discriminated_union).
///
/// # Example
/// ```
/// use fieldscope_schema::prelude::*;
/// use fieldscope_schema as z;
///
/// let schema = z::discriminated_union("type")
///     .variant(z::object().field("type", z::literal("dog")).field("bark", z::boolean()))
///     .variant(z::object().field("type", z::literal("cat")).field("lives", z::number().int()));
///
/// assert!(schema.parse(r#"{"type":"dog","bark":true}"#).is_ok());
/// assert!(schema.parse(r#"{"type":"fish"}"#).is_err());
/// ```
pub struct ZDiscriminatedUnion {
    discriminator: String,
    members: Vec<Node>,
}

impl ZDiscriminatedUnion {
    pub fn new(discriminator: impl Into<String>) -> Self {
        Self {
            discriminator: discriminator.into(),
            members: vec![],
        }
    }

    /// Add a member object schema.
    pub fn variant(mut self, member: impl IntoNode) -> Self {
        self.members.push(member.into_node());
        self
    }

    /// Name of the discriminator field.
    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[Node] {
        &self.members
    }

    /// The member whose discriminator literal equals `value`.
    pub fn member_for(&self, value: &Value) -> Option<&Node> {
        self.members
            .iter()
            .find(|m| discriminator_literal(m, &self.discriminator) == Some(value))
    }
}

/// The literal a member object declares for `key`, if any.
pub fn discriminator_literal<'a>(member: &'a Node, key: &str) -> Option<&'a Value> {
    let NodeKind::Object(obj) = member.kind() else {
        return None;
    };
    match obj.get(key)?.kind() {
        NodeKind::Literal(v) => Some(v),
        _ => None,
    }
}

impl SchemaNode for ZDiscriminatedUnion {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::DiscriminatedUnion(self)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        let value = input.ok_or_else(SchemaError::required)?;
        let obj = value
            .as_object()
            .ok_or_else(|| SchemaError::invalid_type("object", value))?;

        let disc_value = obj.get(&self.discriminator).ok_or_else(|| {
            SchemaError::single(
                IssueCode::InvalidDiscriminator,
                format!("Missing discriminator field \"{}\"", self.discriminator),
            )
        })?;

        if let Some(member) = self.member_for(disc_value) {
            return member.parse_input(input);
        }

        let known: Vec<String> = self
            .members
            .iter()
            .filter_map(|m| discriminator_literal(m, &self.discriminator))
            .map(|v| v.to_string())
            .collect();

        Err(SchemaError::single_with_value(
            IssueCode::InvalidDiscriminator,
            format!(
                "Invalid discriminator value {}. Expected one of: {}",
                disc_value,
                known.join(", ")
            ),
            disc_value,
        ))
    }
}
