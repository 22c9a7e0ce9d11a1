use std::collections::BTreeMap;

use fieldscope::{AllNullable, Editable, EditableOf, Nullish};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Editable)]
#[editable(deep, derive(Debug, Clone, PartialEq))]
struct Address {
    street: String,
    city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Editable)]
struct Country {
    code: String,
}

#[derive(Serialize, Deserialize, Editable)]
#[serde(rename_all = "camelCase")]
#[editable(derive(Debug, Clone, PartialEq))]
struct Customer {
    full_name: String,
    age: Option<u32>,
    tags: Vec<String>,
    address: Address,
    country: Country,
    attributes: BTreeMap<String, String>,
    #[serde(rename = "mail")]
    email: String,
    #[serde(skip)]
    #[allow(dead_code)]
    session: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Editable)]
#[serde(rename_all = "lowercase")]
enum Plan {
    Free,
    Pro,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Editable)]
#[serde(tag = "kind")]
enum Payment {
    Card { last4: String },
    Invoice,
}

#[derive(Serialize, Deserialize, Editable)]
struct Subscription {
    plan: Plan,
    payment: Payment,
}

#[test]
fn slot_types_follow_the_field_kind() {
    let empty = EditableCustomer::default();
    let _: Option<String> = empty.full_name;
    let _: Option<u32> = empty.age;
    let _: Option<Vec<String>> = empty.tags;
    let _: Nullish<EditableAddress> = empty.address;
    let _: Nullish<Country> = empty.country;
    let _: Nullish<BTreeMap<String, String>> = empty.attributes;
    let _: Option<String> = empty.email;
}

#[test]
fn type_aliases_name_the_generated_structs() {
    fn editable(value: EditableOf<Customer>) -> EditableCustomer {
        value
    }
    fn nullable(value: AllNullable<Customer>) -> NullableCustomer {
        value
    }
    assert!(editable(Default::default()).full_name.is_none());
    assert!(nullable(Default::default()).full_name.is_absent());
}

#[test]
fn empty_value_serializes_to_empty_object() {
    let empty = EditableCustomer::default();
    assert_eq!(serde_json::to_value(&empty).unwrap(), json!({}));
}

#[test]
fn keys_follow_serde_renames() {
    let value = EditableCustomer {
        full_name: Some("Ada".into()),
        email: Some("ada@example.com".into()),
        address: Nullish::Value(EditableAddress {
            city: Some("Utrecht".into()),
            ..Default::default()
        }),
        country: Nullish::Null,
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!({
            "fullName": "Ada",
            "mail": "ada@example.com",
            "address": {"city": "Utrecht"},
            "country": null,
        })
    );
}

#[test]
fn deserializes_partial_input() {
    let value: EditableCustomer =
        serde_json::from_value(json!({"fullName": "Ada", "address": null, "age": 36})).unwrap();
    assert_eq!(value.full_name.as_deref(), Some("Ada"));
    assert_eq!(value.age, Some(36));
    assert!(value.address.is_null());
    assert!(value.country.is_absent());
    assert!(value.tags.is_none());
}

#[test]
fn plain_nested_structs_stay_whole() {
    let value: EditableCustomer =
        serde_json::from_value(json!({"country": {"code": "NL"}})).unwrap();
    assert_eq!(
        value.country,
        Nullish::Value(Country {
            code: "NL".into()
        })
    );
}

#[test]
fn nullable_struct_accepts_null_everywhere() {
    let value: NullableCustomer = serde_json::from_value(json!({
        "fullName": null,
        "age": null,
        "tags": null,
        "address": {"street": null},
    }))
    .unwrap();
    assert!(value.full_name.is_null());
    assert!(value.age.is_null());
    assert!(value.tags.is_null());
    let address: &NullableAddress = value.address.value().unwrap();
    assert!(address.street.is_null());
    assert!(address.city.is_absent());
    assert!(value.email.is_absent());
}

#[test]
fn enums_choose_slot_by_shape() {
    let empty = EditableSubscription::default();
    let _: Option<Plan> = empty.plan;
    let _: Nullish<Payment> = empty.payment;

    let value: EditableSubscription = serde_json::from_value(json!({
        "plan": "pro",
        "payment": {"kind": "Card", "last4": "4242"},
    }))
    .unwrap();
    assert_eq!(value.plan, Some(Plan::Pro));
    assert_eq!(
        value.payment,
        Nullish::Value(Payment::Card {
            last4: "4242".into()
        })
    );

    let cleared: EditableSubscription = serde_json::from_value(json!({"payment": null})).unwrap();
    assert!(cleared.payment.is_null());
    assert_eq!(cleared.plan, None);
}

#[test]
fn nullish_helpers() {
    let value: Nullish<u8> = 3.into();
    assert_eq!(value.value(), Some(&3));
    assert_eq!(value.map(|v| v * 2), Nullish::Value(6));
    assert_eq!(Nullish::<u8>::Null.into_value(), None);
    assert!(Nullish::<u8>::default().is_absent());
}
