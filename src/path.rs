//! Field addressing and schema-path navigation.

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fieldscope_schema::combinators::ZDiscriminatedUnion;
use fieldscope_schema::{Node, NodeKind};

use crate::walker::{unwrap_to_primitive, UnwrapOptions};

/// Which member of a discriminated union is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discriminator {
    pub key: String,
    pub value: Value,
}

impl Discriminator {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// `value` rendered for cache keys and logs (`"edit"`, `3`, ...).
    pub fn value_key(&self) -> String {
        self.value.to_string()
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// A union member selection pinned to the point of a path where the union
/// sits (`""` for the root).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSelection {
    pub at: String,
    pub discriminator: Discriminator,
}

/// The addressing unit every introspection operation takes.
#[derive(Debug, Clone, Copy)]
pub struct FieldSelector<'a> {
    /// Root schema.
    pub schema: &'a Node,
    /// Dotted path; numeric segments address array elements (`items.0.title`).
    pub name: &'a str,
    /// Applies to any union keyed on `discriminator.key`.
    pub discriminator: Option<&'a Discriminator>,
    /// Selections for the unions at specific points of `name`. These win
    /// over `discriminator`.
    pub route: &'a [RouteSelection],
}

impl<'a> FieldSelector<'a> {
    pub fn new(schema: &'a Node, name: &'a str) -> Self {
        Self {
            schema,
            name,
            discriminator: None,
            route: &[],
        }
    }

    pub fn with_discriminator(mut self, discriminator: Option<&'a Discriminator>) -> Self {
        self.discriminator = discriminator;
        self
    }

    pub fn with_route(mut self, route: &'a [RouteSelection]) -> Self {
        self.route = route;
        self
    }

    /// The selection for a union keyed on `key` met after walking `at`.
    pub fn selection_at(&self, at: &str, key: &str) -> Option<&'a Discriminator> {
        self.route
            .iter()
            .find(|s| s.at == at && s.discriminator.key == key)
            .map(|s| &s.discriminator)
            .or(self.discriminator)
    }
}

/// One segment of a dotted field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Field(&'a str),
    Index(usize),
}

/// Split a dotted path. Purely numeric segments become [`Segment::Index`].
///
/// ```
/// use fieldscope::path::{split_path, Segment};
///
/// assert_eq!(
///     split_path("items.0.title"),
///     vec![Segment::Field("items"), Segment::Index(0), Segment::Field("title")]
/// );
/// ```
pub fn split_path(name: &str) -> Vec<Segment<'_>> {
    name.split('.').map(Segment::parse).collect()
}

impl<'a> Segment<'a> {
    fn parse(part: &'a str) -> Self {
        let numeric = !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        match part.parse::<usize>() {
            Ok(index) if numeric => Segment::Index(index),
            _ => Segment::Field(part),
        }
    }
}

/// The member of a discriminated-union schema selected by `discriminator`.
///
/// `None` when `schema` is not a discriminated union, keys on a different
/// field, or has no member with that discriminator value.
pub fn extract_discriminated_schema(schema: &Node, discriminator: &Discriminator) -> Option<Node> {
    let root = unwrap_to_primitive(schema, UnwrapOptions::default());
    let NodeKind::DiscriminatedUnion(union) = root.kind() else {
        return None;
    };
    select_member(union, Some(discriminator))
}

fn select_member(union: &ZDiscriminatedUnion, discriminator: Option<&Discriminator>) -> Option<Node> {
    let Some(discriminator) = discriminator.filter(|d| d.key == union.discriminator()) else {
        trace!(
            "no selection for discriminated union on \"{}\"",
            union.discriminator()
        );
        return None;
    };
    let member = union.member_for(&discriminator.value).cloned();
    if member.is_none() {
        trace!("no union member matches {}", discriminator);
    }
    member
}

/// The container the segment after `at` is resolved against: wrappers
/// peeled and a discriminated union narrowed to its selected member.
///
/// A union without a matching selection resolves nothing, its own
/// discriminator field included.
fn resolve_container(node: &Node, at: &str, selector: &FieldSelector<'_>) -> Option<Node> {
    let container = unwrap_to_primitive(node, UnwrapOptions::default());
    let NodeKind::DiscriminatedUnion(union) = container.kind() else {
        return Some(container.clone());
    };
    let member = select_member(union, selector.selection_at(at, union.discriminator()))?;
    Some(unwrap_to_primitive(&member, UnwrapOptions::default()))
}

/// The schema node declared at `selector.name`, wrappers intact.
///
/// Navigation walks object shapes by exact key, array element schemas for
/// numeric segments (any index), pipeline input sides, and narrows every
/// discriminated union whose discriminator matches the selection key.
/// Route selections apply to the union at their own point of the path.
/// Anything unresolvable, including an empty name, yields `None`.
///
/// ```
/// use fieldscope::schema::{self as z, prelude::*};
/// use fieldscope::{extract_field_from_schema, FieldSelector};
///
/// let schema = z::object()
///     .field("tags", z::array(z::object().field("label", z::string().min(1))))
///     .into_node();
///
/// let label = extract_field_from_schema(&FieldSelector::new(&schema, "tags.3.label"));
/// assert_eq!(label.map(|n| n.kind().name()), Some("string"));
/// assert!(extract_field_from_schema(&FieldSelector::new(&schema, "tags.label")).is_none());
/// ```
pub fn extract_field_from_schema(selector: &FieldSelector<'_>) -> Option<Node> {
    if selector.name.is_empty() {
        return None;
    }

    let mut current = selector.schema.clone();
    let mut walked: usize = 0;
    for part in selector.name.split('.') {
        let at = &selector.name[..walked.saturating_sub(1)];
        walked += part.len() + 1;
        let segment = Segment::parse(part);
        let container = resolve_container(&current, at, selector)?;
        let next = match (segment, container.kind()) {
            (Segment::Field(name), NodeKind::Object(object)) => object.get(name).cloned(),
            (Segment::Index(_), NodeKind::Array(array)) => Some(array.element().clone()),
            _ => None,
        };
        match next {
            Some(node) => current = node,
            None => {
                trace!("path \"{}\" does not resolve at {:?}", selector.name, segment);
                return None;
            }
        }
    }
    Some(current)
}
