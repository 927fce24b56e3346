//! The dynamic value model shared by every toolkit operation.

mod convert;
mod serde_impl;

use std::fmt;

use indexmap::IndexMap;

pub use convert::object_from_json_str;

/// Insertion-ordered mapping from keys to values.
///
/// Order is significant: flatten and expand walk entries in insertion order,
/// and merges append new keys after existing ones.
pub type ObjectMap = IndexMap<String, DynamicValue>;

/// A JSON-like value.
///
/// The tree owns all of its children, so cloning it yields a structurally
/// independent copy and cycles cannot be constructed.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DynamicValue {
    /// The absence of a value that is nonetheless present.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number. May hold non-finite values; see
    /// [`crate::duplicate`] for stripping them.
    Number(f64),
    /// A UTF-8 string.
    String(String),
    /// A positionally ordered sequence.
    Array(Vec<DynamicValue>),
    /// An insertion-ordered mapping.
    Object(ObjectMap),
}

/// The coarse type of a [`DynamicValue`], used for `enforce_types` checks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CoarseType {
    /// [`DynamicValue::Null`].
    Null,
    /// [`DynamicValue::Bool`].
    Bool,
    /// [`DynamicValue::Number`].
    Number,
    /// [`DynamicValue::String`].
    String,
    /// [`DynamicValue::Array`].
    Array,
    /// [`DynamicValue::Object`].
    Object,
}

impl CoarseType {
    /// Lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for CoarseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DynamicValue {
    /// Returns the coarse type of this value.
    #[must_use]
    pub const fn coarse_type(&self) -> CoarseType {
        match self {
            Self::Null => CoarseType::Null,
            Self::Bool(_) => CoarseType::Bool,
            Self::Number(_) => CoarseType::Number,
            Self::String(_) => CoarseType::String,
            Self::Array(_) => CoarseType::Array,
            Self::Object(_) => CoarseType::Object,
        }
    }

    /// Returns `true` for [`DynamicValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for objects.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns `true` for arrays.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns `true` only for an object with no entries.
    ///
    /// Empty arrays, empty strings and `null` are not empty objects.
    #[must_use]
    pub fn is_empty_object(&self) -> bool {
        self.as_object().is_some_and(ObjectMap::is_empty)
    }

    /// Returns the boolean payload, if any.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the numeric payload, if any.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the array elements, if any.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the object entries, if any.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the object entries mutably, if any.
    pub const fn as_object_mut(&mut self) -> Option<&mut ObjectMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` when this value is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Resolves a single path segment: an object key, or an array index
    /// written in decimal.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Object(map) => map.get(segment),
            Self::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        }
    }

    /// Mutable counterpart of [`DynamicValue::child`].
    pub fn child_mut(&mut self, segment: &str) -> Option<&mut Self> {
        match self {
            Self::Object(map) => map.get_mut(segment),
            Self::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get_mut(index)),
            _ => None,
        }
    }
}

impl fmt::Display for DynamicValue {
    /// Renders compact JSON. Non-finite numbers render as `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<bool> for DynamicValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for DynamicValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for DynamicValue {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for DynamicValue {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for DynamicValue {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for DynamicValue {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Vec<Self>> for DynamicValue {
    fn from(items: Vec<Self>) -> Self {
        Self::Array(items)
    }
}

impl From<ObjectMap> for DynamicValue {
    fn from(map: ObjectMap) -> Self {
        Self::Object(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Self)> for DynamicValue {
    fn from_iter<I: IntoIterator<Item = (K, Self)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }
}
