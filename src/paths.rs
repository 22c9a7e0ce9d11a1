//! Typed field paths.
//!
//! `#[derive(FieldPaths)]` gives a struct a `{Name}Paths<R>` accessor type
//! with one method per field, so a dotted path is spelled as a method chain
//! and checked by the compiler:
//!
//! ```
//! use fieldscope::{paths, FieldPath, FieldPaths};
//!
//! #[derive(FieldPaths)]
//! struct Address {
//!     city: String,
//! }
//!
//! #[derive(FieldPaths)]
//! struct Order {
//!     address: Address,
//!     items: Vec<Address>,
//! }
//!
//! let city: FieldPath<Order, String> = paths::<Order>().items().at(2).city();
//! assert_eq!(city.as_str(), "items.2.city");
//! assert_eq!(paths::<Order>().address().city().as_str(), "address.city");
//! ```
//!
//! Internally tagged enums get one accessor per variant. Paths below a
//! variant carry the [`Discriminator`] that selects it, pinned to where the
//! enum sits, so they resolve against a discriminated-union schema without
//! further context. Nested variant accessors add one selection each.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;
use std::time::{Duration, SystemTime};

use serde_json::Value;

use fieldscope_schema::Node;

use crate::path::{Discriminator, FieldSelector, RouteSelection};

/// A path rooted at `R` that resolves to a value of type `V`.
pub struct FieldPath<R, V> {
    path: String,
    route: Vec<RouteSelection>,
    _marker: PhantomData<fn() -> (R, V)>,
}

impl<R, V> FieldPath<R, V> {
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The innermost union member selection along the route, if it crosses one.
    pub fn discriminator(&self) -> Option<&Discriminator> {
        self.route.last().map(|s| &s.discriminator)
    }

    /// Every union member selection along the route, outermost first.
    pub fn route(&self) -> &[RouteSelection] {
        &self.route
    }

    /// Selector for this path against `schema`.
    pub fn selector<'a>(&'a self, schema: &'a Node) -> FieldSelector<'a> {
        FieldSelector::new(schema, &self.path).with_route(&self.route)
    }
}

impl<R, V> Clone for FieldPath<R, V> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            route: self.route.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R, V> PartialEq for FieldPath<R, V> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.route == other.route
    }
}

impl<R, V> fmt::Debug for FieldPath<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldPath")
            .field("path", &self.path)
            .field("route", &self.route)
            .finish()
    }
}

impl<R, V> fmt::Display for FieldPath<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Partial route from `R` while a path is being built.
pub struct PathPrefix<R> {
    path: String,
    route: Vec<RouteSelection>,
    _marker: PhantomData<fn() -> R>,
}

impl<R> PathPrefix<R> {
    pub fn root() -> Self {
        Self {
            path: String::new(),
            route: Vec::new(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn discriminator(&self) -> Option<&Discriminator> {
        self.route.last().map(|s| &s.discriminator)
    }

    /// Append an object key.
    pub fn nested(&self, key: &str) -> Self {
        self.join(key)
    }

    /// Append an array index.
    pub fn index(&self, index: usize) -> Self {
        self.join(&index.to_string())
    }

    /// Record the union member selected at this point of the route.
    /// Selections made further up are kept.
    pub fn select(&self, key: &str, value: impl Into<Value>) -> Self {
        let mut route = self.route.clone();
        route.retain(|s| s.at != self.path);
        route.push(RouteSelection {
            at: self.path.clone(),
            discriminator: Discriminator::new(key, value),
        });
        Self {
            path: self.path.clone(),
            route,
            _marker: PhantomData,
        }
    }

    /// Finish the route at a value of type `V`.
    pub fn field<V>(self) -> FieldPath<R, V> {
        FieldPath {
            path: self.path,
            route: self.route,
            _marker: PhantomData,
        }
    }

    fn join(&self, segment: &str) -> Self {
        let path = if self.path.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", self.path, segment)
        };
        Self {
            path,
            route: self.route.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R> Clone for PathPrefix<R> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            route: self.route.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R> fmt::Debug for PathPrefix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathPrefix")
            .field("path", &self.path)
            .field("route", &self.route)
            .finish()
    }
}

/// Types that can appear along a typed path.
///
/// Leaves map to [`FieldPath`], `Vec<T>` to [`ArrayPath`], derived structs
/// and tagged enums to their generated accessor types.
pub trait PathNode {
    type Path<R>;

    fn at_prefix<R>(prefix: PathPrefix<R>) -> Self::Path<R>;
}

/// Generated accessor groups (and arrays) addressed as a whole.
pub trait PathGroup<R> {
    type Value;

    fn prefix(&self) -> &PathPrefix<R>;

    /// The path of the group itself (`"address"`, `"items"`).
    fn as_field(&self) -> FieldPath<R, Self::Value> {
        self.prefix().clone().field()
    }
}

/// Path to a `Vec<T>`; [`at`](ArrayPath::at) continues into an element.
pub struct ArrayPath<R, T> {
    prefix: PathPrefix<R>,
    _marker: PhantomData<fn() -> T>,
}

impl<R, T: PathNode> ArrayPath<R, T> {
    pub fn at(&self, index: usize) -> T::Path<R> {
        T::at_prefix(self.prefix.index(index))
    }

    pub fn path(&self) -> FieldPath<R, Vec<T>> {
        self.prefix.clone().field()
    }
}

impl<R, T> PathGroup<R> for ArrayPath<R, T> {
    type Value = Vec<T>;

    fn prefix(&self) -> &PathPrefix<R> {
        &self.prefix
    }
}

impl<T: PathNode> PathNode for Vec<T> {
    type Path<R> = ArrayPath<R, T>;

    fn at_prefix<R>(prefix: PathPrefix<R>) -> Self::Path<R> {
        ArrayPath {
            prefix,
            _marker: PhantomData,
        }
    }
}

impl<T: PathNode> PathNode for Option<T> {
    type Path<R> = T::Path<R>;

    fn at_prefix<R>(prefix: PathPrefix<R>) -> Self::Path<R> {
        T::at_prefix(prefix)
    }
}

macro_rules! leaf_paths {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PathNode for $ty {
                type Path<R> = FieldPath<R, $ty>;

                fn at_prefix<R>(prefix: PathPrefix<R>) -> Self::Path<R> {
                    prefix.field()
                }
            }
        )*
    };
}

leaf_paths!(
    String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    SystemTime, Duration, Value,
);

#[cfg(feature = "chrono")]
leaf_paths!(
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::FixedOffset>,
);

impl<K, V, S> PathNode for HashMap<K, V, S> {
    type Path<R> = FieldPath<R, Self>;

    fn at_prefix<R>(prefix: PathPrefix<R>) -> Self::Path<R> {
        prefix.field()
    }
}

impl<K, V> PathNode for BTreeMap<K, V> {
    type Path<R> = FieldPath<R, Self>;

    fn at_prefix<R>(prefix: PathPrefix<R>) -> Self::Path<R> {
        prefix.field()
    }
}

impl<T, S> PathNode for HashSet<T, S> {
    type Path<R> = FieldPath<R, Self>;

    fn at_prefix<R>(prefix: PathPrefix<R>) -> Self::Path<R> {
        prefix.field()
    }
}

impl<T> PathNode for BTreeSet<T> {
    type Path<R> = FieldPath<R, Self>;

    fn at_prefix<R>(prefix: PathPrefix<R>) -> Self::Path<R> {
        prefix.field()
    }
}

/// Accessors for every path rooted at `R`.
pub fn paths<R: PathNode>() -> R::Path<R> {
    R::at_prefix(PathPrefix::root())
}

/// Values a text input can edit.
pub trait TextValue {}

/// Values a number input can edit.
pub trait NumberValue {}

/// Values a checkbox can edit.
pub trait BoolValue {}

impl TextValue for String {}
impl TextValue for char {}
impl BoolValue for bool {}

macro_rules! number_values {
    ($($ty:ty),*) => {
        $(impl NumberValue for $ty {})*
    };
}

number_values!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
