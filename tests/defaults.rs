use fieldscope::schema::{self as z, prelude::*};
use fieldscope::{get_schema_defaults, Discriminator};
use serde_json::{json, Value};

fn defaults(schema: &Node, discriminator: Option<&Discriminator>) -> Value {
    Value::Object(get_schema_defaults(schema, discriminator))
}

#[test]
fn object_without_defaults_is_empty() {
    let schema = z::object()
        .field("name", z::string().min(1))
        .field("bio", z::string().optional())
        .into_node();
    assert_eq!(defaults(&schema, None), json!({}));
}

#[test]
fn object_defaults_including_producers() {
    let schema = z::object()
        .field("count", z::number().with_default(10))
        .field("tags", z::array(z::string()).default_with(|| json!([])))
        .field("nested", z::object().field("on", z::boolean().with_default(true)))
        .into_node();
    assert_eq!(
        defaults(&schema, None),
        json!({"count": 10, "tags": [], "nested": {"on": true}})
    );
}

#[test]
fn discriminated_union_defaults_follow_selection() {
    let schema = z::discriminated_union("mode")
        .variant(
            z::object()
                .field("mode", z::literal("create"))
                .field("name", z::string().min(1)),
        )
        .variant(
            z::object()
                .field("mode", z::literal("edit"))
                .field("id", z::number().with_default(1)),
        )
        .into_node();

    let edit = Discriminator::new("mode", "edit");
    assert_eq!(defaults(&schema, Some(&edit)), json!({"id": 1}));

    let create = Discriminator::new("mode", "create");
    assert_eq!(defaults(&schema, Some(&create)), json!({}));

    assert_eq!(defaults(&schema, None), json!({}));
    let unknown = Discriminator::new("mode", "delete");
    assert_eq!(defaults(&schema, Some(&unknown)), json!({}));
}

#[test]
fn non_object_roots_have_no_defaults() {
    let schema = z::string().with_default("x").into_node();
    assert_eq!(defaults(&schema, None), json!({}));
}

#[test]
fn wrapped_object_root() {
    let schema = z::object()
        .field("page", z::number().with_default(1))
        .optional()
        .into_node();
    assert_eq!(defaults(&schema, None), json!({"page": 1}));
}
