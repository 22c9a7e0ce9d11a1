use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use serde_json::{Map, Value};

use fieldscope::schema::{IntoNode, Node};
use fieldscope::{get_schema_defaults, Discriminator, FieldPath, FieldSelector, ValidationCheck};

use crate::cache::IntrospectionCache;
use crate::descriptor::FieldDescriptor;
use crate::label::{LabelLookup, NoLabels};

/// The schema and active union member shared by every field of a form.
///
/// Field components ask the context instead of threading the schema through
/// their arguments. Descriptors are memoized per context.
pub struct FormContext<R> {
    schema: Node,
    discriminator: Option<Discriminator>,
    labels: Rc<dyn LabelLookup>,
    cache: IntrospectionCache,
    _marker: PhantomData<fn() -> R>,
}

impl<R> FormContext<R> {
    pub fn new(schema: impl IntoNode) -> Self {
        Self {
            schema: schema.into_node(),
            discriminator: None,
            labels: Rc::new(NoLabels),
            cache: IntrospectionCache::new(),
            _marker: PhantomData,
        }
    }

    pub fn with_discriminator(mut self, discriminator: Discriminator) -> Self {
        self.discriminator = Some(discriminator);
        self
    }

    pub fn with_labels(mut self, labels: impl LabelLookup + 'static) -> Self {
        self.labels = Rc::new(labels);
        self.cache.clear();
        self
    }

    pub fn schema(&self) -> &Node {
        &self.schema
    }

    pub fn discriminator(&self) -> Option<&Discriminator> {
        self.discriminator.as_ref()
    }

    /// Switch the active union member.
    pub fn set_discriminator(&mut self, discriminator: Option<Discriminator>) {
        self.discriminator = discriminator;
    }

    pub fn cache(&self) -> &IntrospectionCache {
        &self.cache
    }

    /// Selector for `name` under the active discriminator.
    pub fn selector<'a>(&'a self, name: &'a str) -> FieldSelector<'a> {
        FieldSelector::new(&self.schema, name).with_discriminator(self.discriminator.as_ref())
    }

    /// Descriptor for a field addressed by its dotted name.
    pub fn describe(&self, name: &str) -> FieldDescriptor {
        self.describe_selector(&self.selector(name))
    }

    /// Descriptor for a typed path. Selections carried by the path win over
    /// the active discriminator.
    pub fn field<V>(&self, path: &FieldPath<R, V>) -> FieldDescriptor {
        let selector = path
            .selector(&self.schema)
            .with_discriminator(self.discriminator.as_ref());
        self.describe_selector(&selector)
    }

    pub fn is_required<V>(&self, path: &FieldPath<R, V>) -> bool {
        self.field(path).required
    }

    pub fn checks<V>(&self, path: &FieldPath<R, V>) -> Vec<ValidationCheck> {
        self.field(path).checks
    }

    /// Initial values for the active member.
    pub fn default_values(&self) -> Map<String, Value> {
        get_schema_defaults(&self.schema, self.discriminator.as_ref())
    }

    fn describe_selector(&self, selector: &FieldSelector<'_>) -> FieldDescriptor {
        self.cache
            .get_or_insert_with(selector, || FieldDescriptor::resolve(selector, &*self.labels))
    }
}

impl<R> Clone for FormContext<R> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            discriminator: self.discriminator.clone(),
            labels: Rc::clone(&self.labels),
            cache: IntrospectionCache::new(),
            _marker: PhantomData,
        }
    }
}

impl<R> fmt::Debug for FormContext<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormContext")
            .field("schema", &self.schema)
            .field("discriminator", &self.discriminator)
            .field("cached", &self.cache.len())
            .finish()
    }
}
