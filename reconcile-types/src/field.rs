//! Tri-state attribute values.
//!
//! A schema-driven decoder distinguishes three situations for every optional
//! attribute: the attribute was never populated, it was explicitly null, or
//! it carries a value. Collapsing the first two into `Option::None` loses the
//! information the merge rules depend on, so they are kept apart here.

use crate::Scalar;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An attribute value that may be unset, null, or known.
///
/// Deserializing a struct field declared `#[serde(default)]` yields
/// [`Field::Unset`] when the key is missing, [`Field::Null`] for an explicit
/// JSON `null`, and [`Field::Value`] otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// Never populated (unknown).
    #[default]
    Unset,
    /// Explicitly absent.
    Null,
    /// A concrete value.
    Value(T),
}

impl<T> Field<T> {
    /// Returns true if the field was never populated.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns true if the field is explicitly null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the field carries a value.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns a reference to the value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Converts into an `Option`, dropping the unset/null distinction.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Maps the contained value, preserving unset/null.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Self::Unset => Field::Unset,
            Self::Null => Field::Null,
            Self::Value(v) => Field::Value(f(v)),
        }
    }

    /// Returns `self` if it carries a value, otherwise `other`.
    #[must_use]
    pub fn or_field(self, other: Self) -> Self {
        match self {
            Self::Value(_) => self,
            _ => other,
        }
    }
}

impl<T: Scalar> Field<T> {
    /// Returns true if the field carries a value that is not empty.
    #[must_use]
    pub fn is_present_non_empty(&self) -> bool {
        match self {
            Self::Value(v) => !v.is_empty_value(),
            _ => false,
        }
    }
}

impl Field<String> {
    /// Borrows the value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value().map(String::as_str)
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }
}

impl From<&str> for Field<String> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_some(v),
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only reached when the key is present; missing keys go through `Default`.
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
