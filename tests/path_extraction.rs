use fieldscope::schema::{self as z, prelude::*};
use fieldscope::{
    extract_discriminated_schema, extract_field_from_schema, is_required_field, split_path,
    Discriminator, FieldSelector, RouteSelection, Segment,
};
use serde_json::json;

fn shape_schema() -> Node {
    z::discriminated_union("kind")
        .variant(
            z::object()
                .field("kind", z::literal("circle"))
                .field("radius", z::number().positive().describe("Radius in cm")),
        )
        .variant(
            z::object()
                .field("kind", z::literal("rect"))
                .field("width", z::number())
                .field("height", z::number()),
        )
        .into_node()
}

fn kind_of(selector: FieldSelector<'_>) -> Option<&'static str> {
    extract_field_from_schema(&selector).map(|n| n.kind().name())
}

#[test]
fn splits_numeric_segments_as_indices() {
    assert_eq!(
        split_path("a.10.b"),
        vec![Segment::Field("a"), Segment::Index(10), Segment::Field("b")]
    );
    assert_eq!(split_path("a1"), vec![Segment::Field("a1")]);
    assert_eq!(split_path("-1"), vec![Segment::Field("-1")]);
}

#[test]
fn navigates_objects_and_arrays() {
    let schema = z::object()
        .field(
            "order",
            z::object().field(
                "lines",
                z::array(
                    z::object()
                        .field("sku", z::string().len(8))
                        .field("qty", z::number().int().optional()),
                )
                .optional(),
            ),
        )
        .into_node();

    assert_eq!(kind_of(FieldSelector::new(&schema, "order.lines.0.sku")), Some("string"));
    assert_eq!(kind_of(FieldSelector::new(&schema, "order.lines.99.qty")), Some("optional"));
    assert_eq!(kind_of(FieldSelector::new(&schema, "order.lines")), Some("optional"));
    assert_eq!(kind_of(FieldSelector::new(&schema, "order.lines.sku")), None);
    assert_eq!(kind_of(FieldSelector::new(&schema, "order.0")), None);
    assert_eq!(kind_of(FieldSelector::new(&schema, "order.nope")), None);
    assert_eq!(kind_of(FieldSelector::new(&schema, "")), None);
}

#[test]
fn returns_declared_node_with_wrappers() {
    let bio = z::string().max(10).optional().into_node();
    let schema = z::object().field("bio", &bio).into_node();
    let found = extract_field_from_schema(&FieldSelector::new(&schema, "bio")).unwrap();
    assert!(Node::ptr_eq(&found, &bio));
}

#[test]
fn discriminated_round_trip() {
    let schema = shape_schema();
    let circle = Discriminator::new("kind", "circle");
    let rect = Discriminator::new("kind", "rect");

    let radius = FieldSelector::new(&schema, "radius");
    let found = extract_field_from_schema(&radius.with_discriminator(Some(&circle))).unwrap();
    assert_eq!(found.description(), Some("Radius in cm"));

    assert!(extract_field_from_schema(&radius.with_discriminator(Some(&rect))).is_none());
    assert!(extract_field_from_schema(&radius).is_none());

    let unknown = Discriminator::new("kind", "hexagon");
    assert!(extract_field_from_schema(&radius.with_discriminator(Some(&unknown))).is_none());
}

#[test]
fn discriminator_field_needs_a_selection() {
    let schema = shape_schema();

    let omitted = FieldSelector::new(&schema, "kind");
    assert!(extract_field_from_schema(&omitted).is_none());
    assert!(!is_required_field(&omitted));

    let hexagon = Discriminator::new("kind", "hexagon");
    let unmatched = FieldSelector::new(&schema, "kind").with_discriminator(Some(&hexagon));
    assert!(extract_field_from_schema(&unmatched).is_none());
    assert!(!is_required_field(&unmatched));

    let rect = Discriminator::new("kind", "rect");
    let selected = FieldSelector::new(&schema, "kind").with_discriminator(Some(&rect));
    assert_eq!(kind_of(selected), Some("literal"));
    assert!(is_required_field(&selected));
}

#[test]
fn route_selections_apply_at_their_own_position() {
    let schema = z::object()
        .field("shape", shape_schema())
        .into_node();
    let route = vec![RouteSelection {
        at: "shape".to_string(),
        discriminator: Discriminator::new("kind", "rect"),
    }];
    let circle = Discriminator::new("kind", "circle");

    // the route wins over the general discriminator at "shape"
    let width = FieldSelector::new(&schema, "shape.width")
        .with_route(&route)
        .with_discriminator(Some(&circle));
    assert_eq!(kind_of(width), Some("number"));

    // a selection pinned elsewhere does not apply
    let misplaced = vec![RouteSelection {
        at: String::new(),
        discriminator: Discriminator::new("kind", "rect"),
    }];
    let width = FieldSelector::new(&schema, "shape.width").with_route(&misplaced);
    assert_eq!(kind_of(width), None);
}

#[test]
fn nested_union_narrowed_by_matching_key() {
    let schema = z::object()
        .field("title", z::string())
        .field("shape", shape_schema())
        .into_node();
    let rect = Discriminator::new("kind", "rect");

    let width = FieldSelector::new(&schema, "shape.width").with_discriminator(Some(&rect));
    assert_eq!(kind_of(width), Some("number"));

    // the root is a plain object, so the selection only matters at "shape"
    let title = FieldSelector::new(&schema, "title").with_discriminator(Some(&rect));
    assert_eq!(kind_of(title), Some("string"));
}

#[test]
fn pipelines_are_navigated_on_input_side() {
    let schema = z::object()
        .field("profile", z::object().field("age", z::number()))
        .transform(|v| v)
        .into_node();
    assert_eq!(kind_of(FieldSelector::new(&schema, "profile.age")), Some("number"));
}

#[test]
fn member_lookup() {
    let schema = shape_schema();
    let member = extract_discriminated_schema(&schema, &Discriminator::new("kind", "rect")).unwrap();
    let NodeKind::Object(object) = member.kind() else {
        panic!("members are objects");
    };
    assert_eq!(object.keyof(), vec!["kind", "width", "height"]);

    assert!(extract_discriminated_schema(&schema, &Discriminator::new("type", "rect")).is_none());
    let plain = z::object().into_node();
    assert!(extract_discriminated_schema(&plain, &Discriminator::new("kind", json!("rect"))).is_none());
}

#[test]
fn numeric_discriminator_values() {
    let schema = z::discriminated_union("version")
        .variant(z::object().field("version", z::literal(1)).field("a", z::string()))
        .variant(z::object().field("version", z::literal(2)).field("b", z::string()))
        .into_node();
    let v2 = Discriminator::new("version", 2);
    assert_eq!(kind_of(FieldSelector::new(&schema, "b").with_discriminator(Some(&v2))), Some("string"));
    assert_eq!(kind_of(FieldSelector::new(&schema, "a").with_discriminator(Some(&v2))), None);
}
