use fieldscope::schema::{self as z, prelude::*};
use fieldscope::{
    field_checks, get_field_checks, FieldSelector, NumberFormat, StringFormat, ValidationCheck,
};
use serde_json::json;

#[test]
fn string_bounds_in_declaration_order() {
    let checks = get_field_checks(&z::string().min(3).max(20).into_node());
    assert_eq!(
        checks,
        vec![
            ValidationCheck::MinLength { minimum: 3 },
            ValidationCheck::MaxLength { maximum: 20 },
        ]
    );
}

#[test]
fn string_formats_and_affixes() {
    let checks = get_field_checks(
        &z::string()
            .email()
            .starts_with("a")
            .ends_with(".nl")
            .contains("@")
            .len(12)
            .into_node(),
    );
    assert_eq!(
        checks,
        vec![
            ValidationCheck::StringFormat {
                format: StringFormat::Email
            },
            ValidationCheck::StartsWith {
                prefix: "a".into()
            },
            ValidationCheck::EndsWith {
                suffix: ".nl".into()
            },
            ValidationCheck::Includes {
                substring: "@".into()
            },
            ValidationCheck::LengthEquals { length: 12 },
        ]
    );
}

#[test]
fn number_bounds() {
    let checks = get_field_checks(
        &z::number()
            .int()
            .positive()
            .lte(100.0)
            .multiple_of(5.0)
            .finite()
            .safe()
            .optional()
            .into_node(),
    );
    assert_eq!(
        checks,
        vec![
            ValidationCheck::NumberFormat {
                format: NumberFormat::Int
            },
            ValidationCheck::GreaterThan {
                value: 0.0,
                inclusive: false
            },
            ValidationCheck::LessThan {
                value: 100.0,
                inclusive: true
            },
            ValidationCheck::MultipleOf { value: 5.0 },
            ValidationCheck::NumberFormat {
                format: NumberFormat::SafeInt
            },
        ]
    );
}

#[test]
fn array_bounds() {
    let checks = get_field_checks(&z::array(z::string().min(1)).min_len(1).max_len(5).into_node());
    assert_eq!(
        checks,
        vec![
            ValidationCheck::MinLength { minimum: 1 },
            ValidationCheck::MaxLength { maximum: 5 },
        ]
    );
}

#[test]
fn unconstrained_kinds_have_no_checks() {
    assert!(get_field_checks(&z::boolean().into_node()).is_empty());
    assert!(get_field_checks(&z::string().into_node()).is_empty());
    assert!(get_field_checks(&z::object().into_node()).is_empty());
}

#[test]
fn serialized_shape() {
    let checks = get_field_checks(&z::string().min(3).url().into_node());
    assert_eq!(
        serde_json::to_value(&checks).unwrap(),
        json!([
            {"check": "min_length", "minimum": 3},
            {"check": "string_format", "format": "url"},
        ])
    );
    let safe = ValidationCheck::NumberFormat {
        format: NumberFormat::SafeInt,
    };
    assert_eq!(serde_json::to_value(&safe).unwrap()["format"], "safeint");
    assert_eq!(safe.tag(), "number_format");
}

#[test]
fn field_checks_by_selector() {
    let schema = z::object()
        .field("code", z::string().len(6).optional())
        .into_node();
    assert_eq!(
        field_checks(&FieldSelector::new(&schema, "code")),
        vec![ValidationCheck::LengthEquals { length: 6 }]
    );
    assert!(field_checks(&FieldSelector::new(&schema, "nope")).is_empty());
}
