use fieldscope_schema::combinators::discriminator_literal;
use fieldscope_schema::prelude::*;
use serde_json::json;

fn shape() -> ZDiscriminatedUnion {
    fieldscope_schema::discriminated_union("type")
        .variant(
            fieldscope_schema::object()
                .field("type", fieldscope_schema::literal("circle"))
                .field("radius", fieldscope_schema::number().positive()),
        )
        .variant(
            fieldscope_schema::object()
                .field("type", fieldscope_schema::literal("rect"))
                .field("width", fieldscope_schema::number())
                .field("height", fieldscope_schema::number()),
        )
}

#[test]
fn routes_by_discriminator() {
    let s = shape();
    assert!(s.parse(r#"{"type": "circle", "radius": 2}"#).is_ok());
    assert!(s.parse(r#"{"type": "rect", "width": 1, "height": 2}"#).is_ok());
    assert!(s.parse(r#"{"type": "circle", "width": 1}"#).is_err());
}

#[test]
fn unknown_or_missing_discriminator() {
    let s = shape();
    let err = s.parse(r#"{"type": "hex"}"#).unwrap_err();
    assert_eq!(err.issues[0].code, IssueCode::InvalidDiscriminator);
    assert!(err.issues[0].message.contains("\"circle\""));

    let err = s.parse(r#"{"radius": 1}"#).unwrap_err();
    assert_eq!(err.issues[0].code, IssueCode::InvalidDiscriminator);
}

#[test]
fn member_lookup() {
    let s = shape();
    assert_eq!(s.discriminator(), "type");
    assert_eq!(s.members().len(), 2);
    let rect = s.member_for(&json!("rect")).unwrap();
    assert_eq!(discriminator_literal(rect, "type"), Some(&json!("rect")));
    assert!(s.member_for(&json!("hex")).is_none());
}

#[test]
fn union_tries_members_in_order() {
    let s = fieldscope_schema::union(fieldscope_schema::string(), fieldscope_schema::number());
    assert!(s.parse(r#""a""#).is_ok());
    assert!(s.parse("1").is_ok());
    let err = s.parse("true").unwrap_err();
    assert_eq!(err.issues[0].code, IssueCode::InvalidUnion);
}
