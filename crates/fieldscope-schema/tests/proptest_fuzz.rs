//! Property-based tests: schemas never panic on arbitrary JSON and wrappers
//! keep their absent/null contract.

use fieldscope_schema::prelude::*;
use proptest::prelude::*;
use serde_json::Value;

fn arb_json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(|f| serde_json::json!(f)),
        any::<i64>().prop_map(|i| serde_json::json!(i)),
        ".*".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec(("[a-z_]{1,8}", inner), 0..6)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

fn kitchen_sink() -> Node {
    fieldscope_schema::object()
        .field("s", fieldscope_schema::string().min(1).max(5).email())
        .field("n", fieldscope_schema::number().int().positive().multiple_of(3.0))
        .field("a", fieldscope_schema::array(fieldscope_schema::boolean()).max_len(3))
        .field("e", fieldscope_schema::enumeration(&["x", "y"]).nullish())
        .field("d", fieldscope_schema::string().with_default("z"))
        .into_node()
}

proptest! {
    #[test]
    fn object_never_panics(v in arb_json_value()) {
        let _ = kitchen_sink().parse_input(Some(&v));
    }

    #[test]
    fn string_checks_never_panic(s in ".*") {
        let schema = fieldscope_schema::string().url().uuid().ipv4().iso_date().hostname();
        let _ = schema.parse_input(Some(&Value::String(s)));
    }

    #[test]
    fn optional_always_accepts_absent(v in arb_json_value()) {
        let schema = fieldscope_schema::literal(v).optional();
        prop_assert!(schema.accepts(None));
    }

    #[test]
    fn nullable_always_accepts_null(v in arb_json_value()) {
        let schema = fieldscope_schema::literal(v).nullable();
        prop_assert!(schema.accepts(Some(&Value::Null)));
    }
}
