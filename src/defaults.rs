use log::trace;
use serde_json::{Map, Value};

use fieldscope_schema::{Node, NodeKind};

use crate::path::{extract_discriminated_schema, Discriminator};
use crate::walker::{collect_object_defaults, unwrap_to_primitive, UnwrapOptions};

/// Initial values for a whole form.
///
/// An object root yields [`collect_object_defaults`]. A discriminated-union
/// root yields the defaults of the member picked by `discriminator`, or an
/// empty map when there is no selection or no matching member. Any other
/// root yields an empty map.
pub fn get_schema_defaults(schema: &Node, discriminator: Option<&Discriminator>) -> Map<String, Value> {
    let root = unwrap_to_primitive(schema, UnwrapOptions::default());
    match root.kind() {
        NodeKind::Object(object) => collect_object_defaults(object),
        NodeKind::DiscriminatedUnion(_) => {
            let Some(discriminator) = discriminator else {
                trace!("defaults requested for a discriminated union without a selection");
                return Map::new();
            };
            extract_discriminated_schema(&root, discriminator)
                .map(|member| unwrap_to_primitive(&member, UnwrapOptions::default()))
                .and_then(|member| match member.kind() {
                    NodeKind::Object(object) => Some(collect_object_defaults(object)),
                    _ => None,
                })
                .unwrap_or_default()
        }
        _ => Map::new(),
    }
}
