use fieldscope::schema::{self as z, prelude::*};
use fieldscope::{
    extract_field_from_schema, is_required_field, paths, FieldPath, FieldPaths, PathGroup,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, FieldPaths)]
#[serde(rename_all = "camelCase")]
struct Line {
    product_id: String,
    quantity: u32,
    #[serde(rename = "note")]
    remark: Option<String>,
    #[serde(skip)]
    #[allow(dead_code)]
    cached_total: f64,
}

#[derive(Serialize, Deserialize, FieldPaths)]
struct Token {
    r#type: String,
}

#[derive(Serialize, Deserialize, FieldPaths)]
struct Circle {
    radius: f64,
}

#[derive(Serialize, Deserialize, FieldPaths)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Shape {
    Circle(Circle),
    Square { side: f64 },
    Empty,
}

#[derive(Serialize, Deserialize, FieldPaths)]
#[serde(rename_all = "lowercase")]
enum Priority {
    Low,
    High,
}

#[derive(Serialize, Deserialize, FieldPaths)]
struct Order {
    lines: Vec<Line>,
    priority: Priority,
    shape: Option<Shape>,
    tokens: Vec<Token>,
}

fn order_schema() -> Node {
    z::object()
        .field(
            "lines",
            z::array(
                z::object()
                    .field("productId", z::string().min(1))
                    .field("quantity", z::number().int().positive())
                    .field("note", z::string().optional()),
            ),
        )
        .field("priority", z::enumeration(&["low", "high"]))
        .field(
            "shape",
            z::discriminated_union("kind")
                .variant(
                    z::object()
                        .field("kind", z::literal("circle"))
                        .field("radius", z::number().positive()),
                )
                .variant(
                    z::object()
                        .field("kind", z::literal("square"))
                        .field("side", z::number().optional()),
                )
                .variant(z::object().field("kind", z::literal("empty")))
                .optional(),
        )
        .field("tokens", z::array(z::object().field("type", z::string())))
        .into_node()
}

#[test]
fn struct_paths_use_serde_keys() {
    let line = paths::<Order>().lines().at(0);
    assert_eq!(line.product_id().as_str(), "lines.0.productId");
    assert_eq!(line.quantity().as_str(), "lines.0.quantity");
    assert_eq!(line.remark().as_str(), "lines.0.note");
    assert_eq!(paths::<Order>().tokens().at(1).r#type().as_str(), "tokens.1.type");
}

#[test]
fn leaf_types_are_carried() {
    let _: FieldPath<Order, String> = paths::<Order>().lines().at(0).product_id();
    let _: FieldPath<Order, u32> = paths::<Order>().lines().at(0).quantity();
    let _: FieldPath<Order, String> = paths::<Order>().lines().at(0).remark();
    let _: FieldPath<Order, Priority> = paths::<Order>().priority();
}

#[test]
fn groups_are_addressable_as_a_whole() {
    assert_eq!(paths::<Order>().lines().path().as_str(), "lines");
    assert_eq!(paths::<Order>().lines().as_field().as_str(), "lines");
    assert_eq!(paths::<Order>().lines().at(4).as_field().as_str(), "lines.4");
    assert_eq!(paths::<Order>().shape().as_field().as_str(), "shape");
}

#[test]
fn variant_paths_carry_the_selection() {
    let radius = paths::<Order>().shape().circle().radius();
    assert_eq!(radius.as_str(), "shape.radius");
    let selection = radius.discriminator().unwrap();
    assert_eq!(selection.key, "kind");
    assert_eq!(selection.value, "circle");

    let side = paths::<Order>().shape().square().side();
    assert_eq!(side.discriminator().unwrap().value, "square");

    let tag = paths::<Order>().shape().kind();
    assert_eq!(tag.as_str(), "shape.kind");
    assert!(tag.discriminator().is_none());

    let empty_tag = paths::<Order>().shape().empty().kind();
    assert_eq!(empty_tag.discriminator().unwrap().value, "empty");
}

#[test]
fn typed_paths_resolve_against_the_schema() {
    let schema = order_schema();

    let quantity = paths::<Order>().lines().at(3).quantity();
    assert!(extract_field_from_schema(&quantity.selector(&schema)).is_some());
    assert!(is_required_field(&quantity.selector(&schema)));

    let note = paths::<Order>().lines().at(0).remark();
    assert!(!is_required_field(&note.selector(&schema)));

    let radius = paths::<Order>().shape().circle().radius();
    assert!(is_required_field(&radius.selector(&schema)));

    let side = paths::<Order>().shape().square().side();
    assert!(extract_field_from_schema(&side.selector(&schema)).is_some());
    assert!(!is_required_field(&side.selector(&schema)));

    // the tag resolves once a member is selected, and not before
    let kind = paths::<Order>().shape().kind();
    assert!(extract_field_from_schema(&kind.selector(&schema)).is_none());
    let kind = paths::<Order>().shape().circle().kind();
    assert!(extract_field_from_schema(&kind.selector(&schema)).is_some());
}

#[test]
fn root_level_union() {
    assert_eq!(paths::<Shape>().kind().as_str(), "kind");
    assert_eq!(paths::<Shape>().square().side().as_str(), "side");
    assert_eq!(paths::<Shape>().circle().radius().as_str(), "radius");
}

#[derive(Serialize, Deserialize, FieldPaths)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Inner {
    A { x: String },
    B { y: u32 },
}

#[derive(Serialize, Deserialize, FieldPaths)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Outer {
    P { inner: Inner },
    Q { z: bool },
}

fn outer_schema() -> Node {
    z::discriminated_union("kind")
        .variant(
            z::object().field("kind", z::literal("p")).field(
                "inner",
                z::discriminated_union("type")
                    .variant(
                        z::object()
                            .field("type", z::literal("a"))
                            .field("x", z::string().min(1)),
                    )
                    .variant(
                        z::object()
                            .field("type", z::literal("b"))
                            .field("y", z::number()),
                    ),
            ),
        )
        .variant(
            z::object()
                .field("kind", z::literal("q"))
                .field("z", z::boolean()),
        )
        .into_node()
}

#[test]
fn nested_union_routes_keep_every_selection() {
    let schema = outer_schema();

    let x = paths::<Outer>().p().inner().a().x();
    assert_eq!(x.as_str(), "inner.x");
    assert_eq!(x.route().len(), 2);
    assert_eq!(x.route()[0].at, "");
    assert_eq!(x.route()[0].discriminator.value, "p");
    assert_eq!(x.route()[1].at, "inner");
    assert_eq!(x.discriminator().unwrap().value, "a");
    assert!(extract_field_from_schema(&x.selector(&schema)).is_some());
    assert!(is_required_field(&x.selector(&schema)));

    let y = paths::<Outer>().p().inner().b().y();
    assert!(is_required_field(&y.selector(&schema)));
    let tag = paths::<Outer>().p().inner().b().r#type();
    assert!(extract_field_from_schema(&tag.selector(&schema)).is_some());

    // the outer selection alone does not pick an inner member
    let inner_tag = paths::<Outer>().p().inner().r#type();
    assert!(extract_field_from_schema(&inner_tag.selector(&schema)).is_none());
}

#[derive(Serialize, Deserialize, FieldPaths)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Leaf {
    Text { body: String },
    Count { n: u32 },
}

#[derive(Serialize, Deserialize, FieldPaths)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Branch {
    Node { child: Leaf },
    Stub { note: String },
}

#[test]
fn nested_unions_on_the_same_key_select_by_position() {
    let leaf = z::discriminated_union("kind")
        .variant(
            z::object()
                .field("kind", z::literal("text"))
                .field("body", z::string()),
        )
        .variant(
            z::object()
                .field("kind", z::literal("count"))
                .field("n", z::number()),
        );
    let schema = z::discriminated_union("kind")
        .variant(
            z::object()
                .field("kind", z::literal("node"))
                .field("child", leaf),
        )
        .variant(
            z::object()
                .field("kind", z::literal("stub"))
                .field("note", z::string()),
        )
        .into_node();

    let body = paths::<Branch>().node().child().text().body();
    assert_eq!(body.as_str(), "child.body");
    assert!(extract_field_from_schema(&body.selector(&schema)).is_some());
    let n = paths::<Branch>().node().child().count().n();
    assert!(extract_field_from_schema(&n.selector(&schema)).is_some());
    let note = paths::<Branch>().stub().note();
    assert!(extract_field_from_schema(&note.selector(&schema)).is_some());
}
