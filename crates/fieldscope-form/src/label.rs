use std::collections::HashMap;
use std::hash::BuildHasher;

use fieldscope::path::{split_path, Segment};

/// Injected label source, typically a translation table.
///
/// Keys are dotted field paths without array indices (`items.title`).
pub trait LabelLookup {
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<F> LabelLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl<S: BuildHasher> LabelLookup for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Lookup that never finds a label.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLabels;

impl LabelLookup for NoLabels {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Lookup key for a field name: array indices are dropped.
pub fn label_key(name: &str) -> String {
    split_path(name)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Field(key) => Some(key),
            Segment::Index(_) => None,
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Readable label from the last field segment of a path.
///
/// `firstName`, `first_name` and `first-name` all become `First name`.
pub fn humanize(name: &str) -> String {
    let last = split_path(name)
        .into_iter()
        .rev()
        .find_map(|segment| match segment {
            Segment::Field(key) => Some(key),
            Segment::Index(_) => None,
        })
        .unwrap_or_default();

    let mut words = String::new();
    for (i, ch) in last.chars().enumerate() {
        if ch == '_' || ch == '-' {
            words.push(' ');
        } else if ch.is_uppercase() && i > 0 {
            words.push(' ');
            words.extend(ch.to_lowercase());
        } else {
            words.extend(ch.to_lowercase());
        }
    }

    let words = words.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
