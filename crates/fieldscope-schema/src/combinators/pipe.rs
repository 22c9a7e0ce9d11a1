use serde_json::Value;

use crate::error::SchemaError;
use crate::node::{Node, NodeKind, SchemaNode};

/// Chains two schemas: the output of `input` is parsed by `output`.
///
/// Created via [`SchemaExt::pipe()`](crate::SchemaExt::pipe).
///
/// # Example
/// ```
/// use fieldscope_schema::prelude::*;
/// use fieldscope_schema as z;
///
/// let trimmed = z::string()
///     .transform(|v| serde_json::json!(v.as_str().unwrap_or_default().trim()))
///     .pipe(z::string().min(1));
/// assert!(trimmed.parse(r#""  x ""#).is_ok());
/// assert!(trimmed.parse(r#""   ""#).is_err());
/// ```
pub struct ZPipe {
    input: Node,
    output: Node,
}

impl ZPipe {
    pub fn new(input: Node, output: Node) -> Self {
        Self { input, output }
    }

    pub fn input_schema(&self) -> &Node {
        &self.input
    }

    pub fn output_schema(&self) -> &Node {
        &self.output
    }
}

impl SchemaNode for ZPipe {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Pipe {
            input: &self.input,
            output: &self.output,
        }
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        let intermediate = self.input.parse_input(input)?;
        self.output.parse_input(intermediate.as_ref())
    }
}
