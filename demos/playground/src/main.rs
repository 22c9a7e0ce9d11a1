use std::collections::HashMap;

use fieldscope::schema::{self as z, prelude::*};
use fieldscope::{paths, Discriminator, Editable, FieldPaths, PathGroup};
use fieldscope_form::{Form, FormContext};
use log::info;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// 1. Validated types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Editable, FieldPaths)]
#[serde(rename_all = "camelCase")]
#[editable(deep)]
pub struct Contact {
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Editable, FieldPaths)]
pub struct Item {
    pub sku: String,
    pub quantity: u32,
}

#[derive(Debug, Serialize, Deserialize, Editable, FieldPaths)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Delivery {
    Pickup { store: String },
    Ship { street: String, express: bool },
}

#[derive(Debug, Serialize, Deserialize, Editable, FieldPaths)]
pub struct Order {
    pub contact: Contact,
    pub items: Vec<Item>,
    pub delivery: Delivery,
    pub note: Option<String>,
}

fn order_schema() -> Node {
    z::object()
        .field(
            "contact",
            z::object()
                .field("fullName", z::string().min(2).max(60))
                .field("email", z::string().email().describe("We send the receipt here")),
        )
        .field(
            "items",
            z::array(
                z::object()
                    .field("sku", z::string().len(8))
                    .field("quantity", z::number().int().positive().with_default(1)),
            )
            .min_len(1),
        )
        .field(
            "delivery",
            z::discriminated_union("method")
                .variant(
                    z::object()
                        .field("method", z::literal("pickup"))
                        .field("store", z::enumeration(&["north", "south"])),
                )
                .variant(
                    z::object()
                        .field("method", z::literal("ship"))
                        .field("street", z::string().min(1))
                        .field("express", z::boolean().with_default(false)),
                ),
        )
        .field("note", z::string().max(200).nullish())
        .into_node()
}

fn print_field<V>(context: &FormContext<Order>, path: &fieldscope::FieldPath<Order, V>) {
    let field = context.field(path);
    let marker = if field.required { " *" } else { "" };
    println!("  {:<24} {}{}", field.name, field.label, marker);
    for hint in field.hints() {
        println!("  {:<24}   - {}", "", hint);
    }
    if let Some(default) = &field.default_value {
        println!("  {:<24}   default: {}", "", default);
    }
}

fn main() {
    env_logger::init();
    println!("=== fieldscope playground ===\n");

    // ---------------------------------------------------------------------------
    // 2. Field descriptors
    // ---------------------------------------------------------------------------
    println!("--- Field descriptors ---");

    let mut labels = HashMap::new();
    labels.insert("contact.fullName".to_string(), "Name on the order".to_string());
    let context = FormContext::<Order>::new(order_schema()).with_labels(labels);

    let order = paths::<Order>();
    print_field(&context, &order.contact().full_name());
    print_field(&context, &order.contact().email());
    print_field(&context, &order.items().at(0).sku());
    print_field(&context, &order.items().at(0).quantity());
    print_field(&context, &order.delivery().method());
    print_field(&context, &order.delivery().ship().street());
    print_field(&context, &order.delivery().ship().express());
    print_field(&context, &order.delivery().pickup().store());
    print_field(&context, &order.note());
    info!("{} descriptors cached", context.cache().len());

    // ---------------------------------------------------------------------------
    // 3. Editing and submitting
    // ---------------------------------------------------------------------------
    println!("\n--- Editing ---");

    let mut form = Form::new(context.clone());
    println!("  initial values: {}", serde_json::Value::Object(form.values().clone()));

    let edits = [
        form.input_text(&order.contact().full_name(), "Ada Lovelace"),
        form.input_text(&order.contact().email(), "ada@example.com"),
        form.input_text(&order.items().at(0).sku(), "ABCD1234"),
        form.set(&order.delivery().method(), "ship".to_string()),
        form.input_text(&order.delivery().ship().street(), "Analytical Way 1"),
    ];
    for result in edits {
        if let Err(err) = result {
            println!("  [ERR] {}", err);
        }
    }
    println!("  current values: {}", serde_json::Value::Object(form.values().clone()));

    match form.editable() {
        Ok(editable) => println!("  editable view: contact present = {}", !editable.contact.is_absent()),
        Err(err) => println!("  [ERR] {}", err),
    }

    match form.submit() {
        Ok(order) => println!("  [OK] {:?}", order),
        Err(err) => println!("  [ERR] {}", err),
    }

    // ---------------------------------------------------------------------------
    // 4. Rejected submission
    // ---------------------------------------------------------------------------
    println!("\n--- Rejected submission ---");

    let mut incomplete = Form::new(context.clone());
    let _ = incomplete.input_text(&order.contact().email(), "not-an-email");
    match incomplete.submit() {
        Ok(order) => println!("  [OK] {:?}", order),
        Err(err) => {
            for (path, message) in err.field_messages() {
                println!("  {:<24} {}", path, message);
            }
        }
    }

    // ---------------------------------------------------------------------------
    // 5. Union member switching
    // ---------------------------------------------------------------------------
    println!("\n--- Union members ---");

    let delivery_schema = z::discriminated_union("method")
        .variant(
            z::object()
                .field("method", z::literal("pickup"))
                .field("store", z::enumeration(&["north", "south"])),
        )
        .variant(
            z::object()
                .field("method", z::literal("ship"))
                .field("street", z::string().min(1))
                .field("express", z::boolean().with_default(false)),
        );
    let mut delivery = FormContext::<Delivery>::new(delivery_schema);
    for method in ["pickup", "ship"] {
        delivery.set_discriminator(Some(Discriminator::new("method", method)));
        println!(
            "  {:<8} defaults {} / street required: {}",
            method,
            serde_json::Value::Object(delivery.default_values()),
            delivery.describe("street").required
        );
    }
    println!(
        "  delivery group path: {}",
        paths::<Order>().delivery().as_field()
    );
}
