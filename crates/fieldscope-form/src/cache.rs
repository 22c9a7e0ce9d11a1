use std::cell::RefCell;
use std::collections::HashMap;

use log::debug;

use fieldscope::FieldSelector;

use crate::descriptor::FieldDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    schema: usize,
    path: String,
    discriminator: Option<(String, String)>,
    route: Vec<(String, String, String)>,
}

impl CacheKey {
    fn of(selector: &FieldSelector<'_>) -> Self {
        Self {
            schema: selector.schema.identity(),
            path: selector.name.to_string(),
            discriminator: selector
                .discriminator
                .map(|d| (d.key.clone(), d.value_key())),
            route: selector
                .route
                .iter()
                .map(|s| (s.at.clone(), s.discriminator.key.clone(), s.discriminator.value_key()))
                .collect(),
        }
    }
}

/// Memoized field descriptors.
///
/// Keyed by schema identity, path and union selections, never by
/// schema contents: the schema must outlive the cache and stay unchanged,
/// which holds for the one owned by a [`FormContext`](crate::FormContext).
#[derive(Debug, Default)]
pub struct IntrospectionCache {
    entries: RefCell<HashMap<CacheKey, FieldDescriptor>>,
}

impl IntrospectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached descriptor for `selector`, computed by `resolve` on a miss.
    pub fn get_or_insert_with<F>(&self, selector: &FieldSelector<'_>, resolve: F) -> FieldDescriptor
    where
        F: FnOnce() -> FieldDescriptor,
    {
        let key = CacheKey::of(selector);
        if let Some(hit) = self.entries.borrow().get(&key) {
            return hit.clone();
        }
        debug!(
            "introspecting field \"{}\" (discriminator: {:?}, route: {:?})",
            selector.name, key.discriminator, key.route
        );
        let descriptor = resolve();
        self.entries.borrow_mut().insert(key, descriptor.clone());
        descriptor
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}
