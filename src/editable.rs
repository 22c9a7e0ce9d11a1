//! Editing-time value types.
//!
//! A validated struct describes what a form *submits*. While the form is
//! being filled in, every field may still be missing, and some may be
//! explicitly cleared. [`Editable`] maps a validated struct to its editing
//! counterpart field by field:
//!
//! | field type | editable slot |
//! |---|---|
//! | primitive (`String`, numbers, `bool`, fieldless enums) | `Option<T>` |
//! | sequence (`Vec<T>`, `VecDeque<T>`, `[T; N]`) | `Option<T>` |
//! | built-in leaf (maps, sets, `SystemTime`, `Duration`, `serde_json::Value`, chrono types) | `Nullish<T>` |
//! | derived struct | `Nullish<T>`, kept whole |
//! | derived struct marked `#[editable(deep)]` | `Nullish<EditableT>` |
//! | `Option<T>` | the slot of `T` |
//!
//! Plain nested structs stay whole on purpose: a value picked from a list is
//! either chosen or not. Structs filled in field by field opt into recursion
//! with `#[editable(deep)]`.
//!
//! ```
//! use fieldscope::{Editable, Nullish};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Editable)]
//! struct Profile {
//!     bio: String,
//! }
//!
//! #[derive(Serialize, Deserialize, Editable)]
//! struct User {
//!     name: String,
//!     tags: Vec<String>,
//!     profile: Profile,
//! }
//!
//! let empty = EditableUser::default();
//! assert!(empty.name.is_none());
//!
//! let cleared = EditableUser {
//!     profile: Nullish::Null,
//!     ..Default::default()
//! };
//! assert_eq!(serde_json::to_value(&cleared).unwrap(), serde_json::json!({"profile": null}));
//! ```
//!
//! Primitives and sequences can be missing but never `null`:
//!
//! ```compile_fail
//! use fieldscope::{Editable, Nullish};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Editable)]
//! struct User {
//!     name: String,
//! }
//!
//! let user = EditableUser { name: Nullish::Null };
//! ```
//!
//! ```compile_fail
//! use fieldscope::{Editable, Nullish};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Editable)]
//! struct User {
//!     tags: Vec<String>,
//! }
//!
//! let user = EditableUser { tags: Nullish::Null };
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::time::{Duration, SystemTime};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A slot that can be missing, explicitly `null`, or hold a value.
///
/// Serializes `Value(v)` as `v` and both other states as `null`; struct
/// fields generated by the derive skip `Absent` entirely. Deserializing
/// `null` gives `Null`; a missing key falls back to `Absent` via `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullish<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Nullish<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Nullish::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullish::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Nullish::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Nullish::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullish<U> {
        match self {
            Nullish::Absent => Nullish::Absent,
            Nullish::Null => Nullish::Null,
            Nullish::Value(v) => Nullish::Value(f(v)),
        }
    }
}

impl<T> Default for Nullish<T> {
    fn default() -> Self {
        Nullish::Absent
    }
}

impl<T> From<T> for Nullish<T> {
    fn from(value: T) -> Self {
        Nullish::Value(value)
    }
}

impl<T: Serialize> Serialize for Nullish<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullish::Value(v) => serializer.serialize_some(v),
            Nullish::Absent | Nullish::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullish<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Nullish::Null, Nullish::Value))
    }
}

/// Slot types that can report "not filled in yet".
pub trait EditableValue {
    fn is_absent(&self) -> bool;
}

impl<T> EditableValue for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T> EditableValue for Nullish<T> {
    fn is_absent(&self) -> bool {
        Nullish::is_absent(self)
    }
}

/// Editing slot of a field type, following the table in the module docs.
pub trait EditableField {
    type Editable: EditableValue + Default;
}

/// Slot of a field type when every field is optional and nullable.
pub trait NullableField {
    type Nullable: EditableValue + Default;
}

/// A validated struct with generated editing types.
///
/// Implemented by `#[derive(Editable)]`, which generates `Editable{Name}`
/// (per-field slots from [`EditableField`]) and `Nullable{Name}` (every
/// field [`Nullish`], branded structs recursed).
pub trait Editable: Sized {
    type Editable: Default + Serialize + DeserializeOwned;
    type AllNullable: Default + Serialize + DeserializeOwned;
}

/// `Editable{T}` by name of the validated type.
pub type EditableOf<T> = <T as Editable>::Editable;

/// `Nullable{T}` by name of the validated type.
pub type AllNullable<T> = <T as Editable>::AllNullable;

macro_rules! primitive_slots {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EditableField for $ty {
                type Editable = Option<$ty>;
            }

            impl NullableField for $ty {
                type Nullable = Nullish<$ty>;
            }
        )*
    };
}

macro_rules! leaf_slots {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EditableField for $ty {
                type Editable = Nullish<$ty>;
            }

            impl NullableField for $ty {
                type Nullable = Nullish<$ty>;
            }
        )*
    };
}

primitive_slots!(
    String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

leaf_slots!(SystemTime, Duration, serde_json::Value);

#[cfg(feature = "chrono")]
leaf_slots!(
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::FixedOffset>,
);

impl<T> EditableField for Vec<T> {
    type Editable = Option<Vec<T>>;
}

impl<T> NullableField for Vec<T> {
    type Nullable = Nullish<Vec<T>>;
}

impl<T> EditableField for VecDeque<T> {
    type Editable = Option<VecDeque<T>>;
}

impl<T> NullableField for VecDeque<T> {
    type Nullable = Nullish<VecDeque<T>>;
}

impl<T, const N: usize> EditableField for [T; N] {
    type Editable = Option<[T; N]>;
}

impl<T, const N: usize> NullableField for [T; N] {
    type Nullable = Nullish<[T; N]>;
}

impl<K, V, S> EditableField for HashMap<K, V, S> {
    type Editable = Nullish<HashMap<K, V, S>>;
}

impl<K, V, S> NullableField for HashMap<K, V, S> {
    type Nullable = Nullish<HashMap<K, V, S>>;
}

impl<K, V> EditableField for BTreeMap<K, V> {
    type Editable = Nullish<BTreeMap<K, V>>;
}

impl<K, V> NullableField for BTreeMap<K, V> {
    type Nullable = Nullish<BTreeMap<K, V>>;
}

impl<T, S> EditableField for HashSet<T, S> {
    type Editable = Nullish<HashSet<T, S>>;
}

impl<T, S> NullableField for HashSet<T, S> {
    type Nullable = Nullish<HashSet<T, S>>;
}

impl<T> EditableField for BTreeSet<T> {
    type Editable = Nullish<BTreeSet<T>>;
}

impl<T> NullableField for BTreeSet<T> {
    type Nullable = Nullish<BTreeSet<T>>;
}

impl<T: EditableField> EditableField for Option<T> {
    type Editable = T::Editable;
}

impl<T: NullableField> NullableField for Option<T> {
    type Nullable = T::Nullable;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nullish_serde() {
        assert_eq!(serde_json::to_value(Nullish::Value(3)).unwrap(), json!(3));
        assert_eq!(serde_json::to_value(Nullish::<i32>::Null).unwrap(), json!(null));

        let parsed: Nullish<String> = serde_json::from_value(json!(null)).unwrap();
        assert!(parsed.is_null());
        let parsed: Nullish<String> = serde_json::from_value(json!("x")).unwrap();
        assert_eq!(parsed.value().map(String::as_str), Some("x"));
    }

    #[test]
    fn option_delegates_to_inner_slot() {
        fn slot<T: EditableField>() -> T::Editable {
            T::Editable::default()
        }
        let slot: Option<String> = slot::<Option<String>>();
        assert!(slot.is_absent());
    }
}
