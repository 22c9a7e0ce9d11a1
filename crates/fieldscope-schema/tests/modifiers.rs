use fieldscope_schema::prelude::*;
use serde_json::json;

#[test]
fn optional_accepts_absent_but_not_null() {
    let s = fieldscope_schema::string().optional();
    assert_eq!(s.parse_input(None).unwrap(), None);
    assert!(s.parse_input(Some(&json!(null))).is_err());
    assert_eq!(
        s.parse_input(Some(&json!("hello"))).unwrap(),
        Some(json!("hello"))
    );
}

#[test]
fn nullable_accepts_null_but_not_absent() {
    let s = fieldscope_schema::string().nullable();
    assert_eq!(s.parse_input(Some(&json!(null))).unwrap(), Some(json!(null)));
    assert!(s.parse_input(None).is_err());
}

#[test]
fn nullish_accepts_both() {
    let s = fieldscope_schema::string().nullish();
    assert!(s.accepts(None));
    assert!(s.accepts(Some(&json!(null))));
    assert!(!s.accepts(Some(&json!(1))));
    let NodeKind::Optional(inner) = s.kind() else {
        panic!("nullish should be optional on the outside");
    };
    assert_eq!(inner.kind().name(), "nullable");
}

#[test]
fn default_only_replaces_absent() {
    let s = fieldscope_schema::string().with_default("world");
    assert_eq!(s.parse_input(None).unwrap(), Some(json!("world")));
    assert_eq!(s.parse_input(Some(&json!("hi"))).unwrap(), Some(json!("hi")));
    assert!(s.parse_input(Some(&json!(null))).is_err());
    assert!(s.parse_input(Some(&json!(42))).is_err());
}

#[test]
fn default_producer_runs_each_time() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let s = fieldscope_schema::number().default_with(move || {
        json!(counter.fetch_add(1, Ordering::SeqCst))
    });
    assert_eq!(s.parse_input(None).unwrap(), Some(json!(0)));
    assert_eq!(s.parse_input(None).unwrap(), Some(json!(1)));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn transform_skips_absent() {
    let s = fieldscope_schema::string()
        .optional()
        .transform(|v| json!(v.as_str().unwrap_or_default().to_uppercase()));
    assert_eq!(s.parse_input(None).unwrap(), None);
    assert_eq!(s.parse_input(Some(&json!("ab"))).unwrap(), Some(json!("AB")));
    assert_eq!(s.kind().name(), "effects");
}

#[test]
fn refine_reports_custom_issue() {
    let s = fieldscope_schema::string().refine(|v| v != "admin", "Reserved name");
    let err = s.parse_input(Some(&json!("admin"))).unwrap_err();
    assert_eq!(err.issues[0].message, "Reserved name");
    assert_eq!(err.issues[0].code.key(), "custom");
}

#[test]
fn describe_is_transparent() {
    let s = fieldscope_schema::number().min(1.0).describe("How many seats");
    assert_eq!(s.kind().name(), "number");
    assert_eq!(s.description(), Some("How many seats"));
    assert!(s.parse("0").is_err());
    assert!(s.parse("2").is_ok());
}

#[test]
fn pipe_reports_input_side_as_wrapped() {
    let s = fieldscope_schema::string().pipe(fieldscope_schema::string().email());
    let kind = s.kind();
    assert_eq!(kind.name(), "pipe");
    assert_eq!(kind.wrapped().map(|n| n.kind().name()), Some("string"));
    assert!(s.parse(r#""a@b.co""#).is_ok());
    assert!(s.parse(r#""nope""#).is_err());
}

#[test]
fn node_identity_survives_clone() {
    let a = fieldscope_schema::string().into_node();
    let b = a.clone();
    let c = fieldscope_schema::string().into_node();
    assert!(Node::ptr_eq(&a, &b));
    assert_eq!(a.identity(), b.identity());
    assert!(!Node::ptr_eq(&a, &c));
}
