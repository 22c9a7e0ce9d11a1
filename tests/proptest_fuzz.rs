//! Property-based tests: introspection is total and unwrapping is idempotent.

use fieldscope::schema::{self as z, prelude::*};
use fieldscope::{
    extract_field_from_schema, field_checks, get_schema_defaults, is_required_field,
    requires_valid_input, unwrap_to_primitive, Discriminator, FieldSelector, UnwrapOptions,
};
use proptest::prelude::*;
use serde_json::json;

// -----------------------------------------------------------------------
// Helpers: arbitrary schemas and paths
// -----------------------------------------------------------------------

fn arb_leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        (0usize..5).prop_map(|n| z::string().min(n).into_node()),
        Just(z::string().email().into_node()),
        Just(z::number().int().positive().into_node()),
        Just(z::boolean().into_node()),
        Just(z::enumeration(&["a", "b"]).into_node()),
        Just(z::any().into_node()),
    ]
}

fn wrap(node: Node, layer: u8) -> Node {
    match layer {
        0 => node.optional().into_node(),
        1 => node.nullable().into_node(),
        2 => node.with_default(json!(null)).into_node(),
        3 => node.transform(|v| v).into_node(),
        4 => node.describe("field").into_node(),
        _ => z::array(node).into_node(),
    }
}

fn arb_field() -> impl Strategy<Value = Node> {
    (arb_leaf(), prop::collection::vec(0u8..6, 0..5))
        .prop_map(|(leaf, layers)| layers.into_iter().fold(leaf, wrap))
}

fn arb_schema() -> impl Strategy<Value = Node> {
    arb_field().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(("[a-c]", inner.clone()), 1..4).prop_map(|fields| {
                fields
                    .into_iter()
                    .fold(z::object(), |object, (name, field)| object.field(name, field))
                    .into_node()
            }),
            prop::collection::vec(inner, 1..3).prop_map(|members| {
                members
                    .into_iter()
                    .enumerate()
                    .fold(z::discriminated_union("t"), |union, (i, field)| {
                        union.variant(
                            z::object()
                                .field("t", z::literal(i as u64))
                                .field("v", field),
                        )
                    })
                    .into_node()
            }),
        ]
    })
}

fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof!["[a-c]", "[tv]", "[0-9]{1,2}", Just(String::new())], 0..5)
        .prop_map(|segments| segments.join("."))
}

proptest! {
    #[test]
    fn unwrap_is_idempotent(field in arb_field(), through in any::<bool>()) {
        let options = UnwrapOptions { unwrap_arrays: through };
        let once = unwrap_to_primitive(&field, options);
        let twice = unwrap_to_primitive(&once, options);
        prop_assert!(Node::ptr_eq(&once, &twice));
    }

    #[test]
    fn introspection_never_panics(
        schema in arb_schema(),
        path in arb_path(),
        selected in prop::option::of(0u64..3),
    ) {
        let discriminator = selected.map(|v| Discriminator::new("t", v));
        let selector = FieldSelector::new(&schema, &path).with_discriminator(discriminator.as_ref());

        let resolved = extract_field_from_schema(&selector);
        let required = is_required_field(&selector);
        let checks = field_checks(&selector);
        let _ = get_schema_defaults(&schema, discriminator.as_ref());

        if resolved.is_none() {
            prop_assert!(!required);
            prop_assert!(checks.is_empty());
        }
    }

    #[test]
    fn optional_fields_are_never_required(field in arb_field()) {
        prop_assert!(!requires_valid_input(&field.clone().optional().into_node()));
        prop_assert!(!requires_valid_input(&field.nullable().into_node()));
    }

    #[test]
    fn empty_path_never_resolves(schema in arb_schema()) {
        prop_assert!(extract_field_from_schema(&FieldSelector::new(&schema, "")).is_none());
    }
}
