use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use fieldscope::path::{split_path, Segment};
use fieldscope::walker::{primitive_type, PrimitiveType};
use fieldscope::{
    extract_field_from_schema, BoolValue, Editable, FieldPath, NumberValue, TextValue,
};

use crate::context::FormContext;
use crate::descriptor::{is_discriminator_field, FieldDescriptor};
use crate::error::FormError;

/// A field's descriptor together with its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBinding<T> {
    pub descriptor: FieldDescriptor,
    /// `None` while the field is absent or holds a value of another type.
    pub value: Option<T>,
}

/// Values being edited for a validated type `R`.
///
/// Values start from the schema defaults and are edited through typed
/// paths; [`submit`](Form::submit) validates them and produces `R`.
pub struct Form<R: Editable> {
    context: FormContext<R>,
    values: Map<String, Value>,
}

impl<R> Form<R>
where
    R: Editable + DeserializeOwned,
{
    pub fn new(context: FormContext<R>) -> Self {
        let values = initial_values(&context);
        Self { context, values }
    }

    /// Start from existing editing-time values instead of the defaults.
    pub fn from_editable(context: FormContext<R>, editable: &R::Editable) -> Result<Self, FormError> {
        let values = match serde_json::to_value(editable)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Ok(Self { context, values })
    }

    pub fn context(&self) -> &FormContext<R> {
        &self.context
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Current values as the generated editing type.
    pub fn editable(&self) -> Result<R::Editable, FormError> {
        Ok(serde_json::from_value(Value::Object(self.values.clone()))?)
    }

    /// Back to the schema defaults.
    pub fn reset(&mut self) {
        self.values = initial_values(&self.context);
    }

    pub fn set<V: Serialize>(&mut self, path: &FieldPath<R, V>, value: V) -> Result<(), FormError> {
        let value = serde_json::to_value(value)?;
        self.write(path, Some(value))
    }

    /// Explicitly clear a field to `null`.
    pub fn set_null<V>(&mut self, path: &FieldPath<R, V>) -> Result<(), FormError> {
        self.write(path, Some(Value::Null))
    }

    /// Make a field absent again.
    pub fn clear<V>(&mut self, path: &FieldPath<R, V>) -> Result<(), FormError> {
        self.write(path, None)
    }

    pub fn get<V: DeserializeOwned>(&self, path: &FieldPath<R, V>) -> Option<V> {
        self.raw(path.as_str())
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Bind a text input.
    pub fn text<V: TextValue>(&self, path: &FieldPath<R, V>) -> FieldBinding<String> {
        self.bind(path, |value| value.as_str().map(str::to_string))
    }

    /// Bind a number input.
    pub fn number<V: NumberValue>(&self, path: &FieldPath<R, V>) -> FieldBinding<f64> {
        self.bind(path, Value::as_f64)
    }

    /// Bind a checkbox.
    pub fn checkbox<V: BoolValue>(&self, path: &FieldPath<R, V>) -> FieldBinding<bool> {
        self.bind(path, Value::as_bool)
    }

    /// Store what the user typed into a text input, verbatim.
    pub fn input_text<V: TextValue>(&mut self, path: &FieldPath<R, V>, text: &str) -> Result<(), FormError> {
        self.write(path, Some(Value::String(text.to_string())))
    }

    /// Validate the current values and convert them to `R`.
    pub fn submit(&self) -> Result<R, FormError> {
        let parsed = self
            .context
            .schema()
            .parse(&Value::Object(self.values.clone()))
            .map_err(|err| {
                debug!("form submission rejected with {} issue(s)", err.issues.len());
                err
            })?;
        Ok(serde_json::from_value(parsed)?)
    }

    fn bind<V, T>(&self, path: &FieldPath<R, V>, read: impl Fn(&Value) -> Option<T>) -> FieldBinding<T> {
        FieldBinding {
            descriptor: self.context.field(path),
            value: self.raw(path.as_str()).and_then(read),
        }
    }

    fn raw(&self, name: &str) -> Option<&Value> {
        let mut segments = split_path(name).into_iter();
        let first = match segments.next()? {
            Segment::Field(key) => self.values.get(key)?,
            Segment::Index(_) => return None,
        };
        segments.try_fold(first, |current, segment| match segment {
            Segment::Field(key) => current.get(key),
            Segment::Index(index) => current.get(index),
        })
    }

    fn write<V>(&mut self, path: &FieldPath<R, V>, value: Option<Value>) -> Result<(), FormError> {
        let selector = path
            .selector(self.context.schema())
            .with_discriminator(self.context.discriminator());
        if extract_field_from_schema(&selector).is_none() && !is_discriminator_field(&selector) {
            return Err(FormError::UnknownPath {
                path: path.to_string(),
            });
        }

        trace!("set {} = {:?}", path, value);
        let segments = split_path(path.as_str());
        let Some((last, parents)) = segments.split_last() else {
            return Err(FormError::UnknownPath {
                path: path.to_string(),
            });
        };

        let mut root = Value::Object(std::mem::take(&mut self.values));
        if value.is_some() && !within_bounds(&root, &segments) {
            if let Value::Object(map) = root {
                self.values = map;
            }
            return Err(FormError::IndexOutOfRange {
                path: path.to_string(),
            });
        }
        match value {
            Some(value) => {
                if let Some(parent) = slot_mut(&mut root, parents) {
                    match last {
                        Segment::Field(key) => {
                            if let Some(object) = object_slot(parent) {
                                object.insert(key.to_string(), value);
                            }
                        }
                        Segment::Index(index) => {
                            if let Some(items) = array_slot(parent) {
                                if *index == items.len() {
                                    items.push(value);
                                } else if let Some(item) = items.get_mut(*index) {
                                    *item = value;
                                }
                            }
                        }
                    }
                }
            }
            None => {
                let parent = existing_mut(&mut root, parents);
                match (parent, last) {
                    (Some(Value::Object(object)), Segment::Field(key)) => {
                        object.remove(*key);
                    }
                    (Some(Value::Array(items)), Segment::Index(index)) => {
                        if let Some(item) = items.get_mut(*index) {
                            *item = Value::Null;
                        }
                    }
                    _ => {}
                }
            }
        }
        if let Value::Object(map) = root {
            self.values = map;
        }
        Ok(())
    }
}

fn initial_values<R>(context: &FormContext<R>) -> Map<String, Value> {
    let mut values = context.default_values();
    if let Some(discriminator) = context.discriminator() {
        if primitive_type(context.schema()) == PrimitiveType::DiscriminatedUnion {
            values.insert(discriminator.key.clone(), discriminator.value.clone());
        }
    }
    values
}

fn object_slot(value: &mut Value) -> Option<&mut Map<String, Value>> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    value.as_object_mut()
}

fn array_slot(value: &mut Value) -> Option<&mut Vec<Value>> {
    if !value.is_array() {
        *value = Value::Array(vec![]);
    }
    value.as_array_mut()
}

/// The value at `segments`, if every step exists.
fn existing_mut<'a>(root: &'a mut Value, segments: &[Segment<'_>]) -> Option<&'a mut Value> {
    segments.iter().try_fold(root, |current, segment| match segment {
        Segment::Field(key) => current.get_mut(*key),
        Segment::Index(index) => current.get_mut(*index),
    })
}

/// Whether every index along `segments` addresses an existing element or
/// the slot right after the last one. Lists grow by appending only.
fn within_bounds(root: &Value, segments: &[Segment<'_>]) -> bool {
    let mut current = Some(root);
    for segment in segments {
        current = match segment {
            Segment::Field(key) => current.and_then(|value| value.get(*key)),
            Segment::Index(index) => {
                let len = current.and_then(Value::as_array).map_or(0, Vec::len);
                if *index > len {
                    return false;
                }
                current.and_then(|value| value.get(*index))
            }
        };
    }
    true
}

/// The value at `segments`, creating objects and arrays along the way.
fn slot_mut<'a>(root: &'a mut Value, segments: &[Segment<'_>]) -> Option<&'a mut Value> {
    let mut current = root;
    for segment in segments {
        current = match segment {
            Segment::Field(key) => object_slot(current)?
                .entry(key.to_string())
                .or_insert(Value::Null),
            Segment::Index(index) => {
                let items = array_slot(current)?;
                if *index == items.len() {
                    items.push(Value::Null);
                }
                items.get_mut(*index)?
            }
        };
    }
    Some(current)
}
