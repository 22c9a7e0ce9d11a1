use serde_json::Value;

use crate::error::{IssueCode, SchemaError};
use crate::node::{IntoNode, Node, NodeKind, SchemaNode};

/// Union of schemas. Members are tried in order; the first success wins.
///
/// Created via [`fieldscope_schema::union()`](crate::union()).
pub struct ZUnion {
    members: Vec<Node>,
}

impl ZUnion {
    pub fn new(members: Vec<Node>) -> Self {
        Self { members }
    }

    /// Add another alternative.
    pub fn or(mut self, other: impl IntoNode) -> Self {
        self.members.push(other.into_node());
        self
    }

    pub fn members(&self) -> &[Node] {
        &self.members
    }
}

impl SchemaNode for ZUnion {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Union(&self.members)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        let mut collected = SchemaError::new();
        for member in &self.members {
            match member.parse_input(input) {
                Ok(v) => return Ok(v),
                Err(e) => collected = collected.merge(e),
            }
        }

        let mut err = match input {
            Some(v) => SchemaError::single_with_value(
                IssueCode::InvalidUnion,
                "Input did not match any union member",
                v,
            ),
            None => SchemaError::single(IssueCode::InvalidUnion, "Input did not match any union member"),
        };
        err = err.merge(collected);
        Err(err)
    }
}
