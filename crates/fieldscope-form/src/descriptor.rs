use serde::Serialize;
use serde_json::Value;

use fieldscope::schema::NodeKind;
use fieldscope::walker::{find_description, unwrap_to_primitive, UnwrapOptions};
use fieldscope::{
    extract_default, extract_field_from_schema, get_field_checks, requires_valid_input,
    FieldSelector, NumberFormat, StringFormat, ValidationCheck,
};

use crate::label::{humanize, label_key, LabelLookup};

/// Everything a field component needs to render itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Dotted path of the field.
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    /// Show a required marker.
    pub required: bool,
    pub checks: Vec<ValidationCheck>,
    pub default_value: Option<Value>,
}

impl FieldDescriptor {
    /// Describe the field a selector addresses.
    ///
    /// An unresolvable field still gets a label, but is not required and has
    /// no description, checks or default. The discriminator field of a union
    /// without a selected member is the exception: it is required, since
    /// picking a member is how the rest of the form resolves.
    pub fn resolve(selector: &FieldSelector<'_>, labels: &dyn LabelLookup) -> Self {
        let name = selector.name.to_string();
        let field = extract_field_from_schema(selector);
        let description = field.as_ref().and_then(find_description);

        let label = labels
            .lookup(&label_key(&name))
            .or_else(|| description.clone())
            .unwrap_or_else(|| humanize(&name));

        match field {
            Some(node) => Self {
                label,
                description,
                required: requires_valid_input(&node),
                checks: get_field_checks(&node),
                default_value: extract_default(&node),
                name,
            },
            None => Self {
                label,
                description: None,
                required: is_discriminator_field(selector),
                checks: vec![],
                default_value: None,
                name,
            },
        }
    }

    /// Hint lines for the declared checks (`"At least 3 characters"`).
    pub fn hints(&self) -> Vec<String> {
        self.checks.iter().map(hint).collect()
    }
}

/// Whether `selector` names the discriminator field of a discriminated union
/// (`"mode"`, `"delivery.method"`), whichever member is selected.
pub fn is_discriminator_field(selector: &FieldSelector<'_>) -> bool {
    let (parent, key) = match selector.name.rsplit_once('.') {
        Some((parent, key)) => (Some(parent), key),
        None => (None, selector.name),
    };
    let container = match parent {
        Some(parent) => extract_field_from_schema(&FieldSelector {
            name: parent,
            ..*selector
        }),
        None => Some(selector.schema.clone()),
    };
    container.is_some_and(|node| {
        matches!(
            unwrap_to_primitive(&node, UnwrapOptions::default()).kind(),
            NodeKind::DiscriminatedUnion(union) if union.discriminator() == key
        )
    })
}

fn hint(check: &ValidationCheck) -> String {
    match check {
        ValidationCheck::MinLength { minimum } => format!("At least {} characters", minimum),
        ValidationCheck::MaxLength { maximum } => format!("At most {} characters", maximum),
        ValidationCheck::LengthEquals { length } => format!("Exactly {} characters", length),
        ValidationCheck::GreaterThan { value, inclusive: true } => format!("At least {}", value),
        ValidationCheck::GreaterThan { value, inclusive: false } => format!("Greater than {}", value),
        ValidationCheck::LessThan { value, inclusive: true } => format!("At most {}", value),
        ValidationCheck::LessThan { value, inclusive: false } => format!("Less than {}", value),
        ValidationCheck::MultipleOf { value } => format!("Multiple of {}", value),
        ValidationCheck::NumberFormat { format } => match format {
            NumberFormat::Int => "Whole number".to_string(),
            NumberFormat::SafeInt => "Whole number within the safe integer range".to_string(),
        },
        ValidationCheck::StringFormat { format } => {
            let what = match format {
                StringFormat::Email => "an email address",
                StringFormat::Url => "a URL",
                StringFormat::Uuid => "a UUID",
                StringFormat::Ipv4 => "an IPv4 address",
                StringFormat::IsoDate => "a date (YYYY-MM-DD)",
                StringFormat::Hostname => "a host name",
            };
            format!("Must be {}", what)
        }
        ValidationCheck::StartsWith { prefix } => format!("Starts with \"{}\"", prefix),
        ValidationCheck::EndsWith { suffix } => format!("Ends with \"{}\"", suffix),
        ValidationCheck::Includes { substring } => format!("Contains \"{}\"", substring),
    }
}
