//! Record reflection.
//!
//! Records are reflected through serde into JSON and then flattened into a
//! string-keyed map. Only one level of nesting is expanded: the locator does
//! shallow "find by name, read back its id" lookups, not deep searches.

use crate::error::{EngineError, EngineResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

/// A flattened key → value view of one record.
pub type FlatMap = BTreeMap<String, Value>;

/// Reflects any serializable record into a JSON value.
pub fn reflect<T: Serialize + ?Sized>(record: &T) -> EngineResult<Value> {
    Ok(serde_json::to_value(record)?)
}

/// Flattens a JSON object one level deep.
///
/// Every member appears under its own name. Members that are themselves
/// objects also contribute `parent{separator}child` entries. Returns `None`
/// for non-objects.
#[must_use]
pub fn flatten_value(value: &Value, separator: &str) -> Option<FlatMap> {
    let object = value.as_object()?;
    let mut flat = FlatMap::new();
    for (key, member) in object {
        if let Value::Object(nested) = member {
            for (child, child_value) in nested {
                flat.insert(format!("{key}{separator}{child}"), child_value.clone());
            }
        }
        flat.insert(key.clone(), member.clone());
    }
    Some(flat)
}

/// A located record's flattened fields, with typed extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Reflected {
    fields: FlatMap,
}

impl Reflected {
    #[must_use]
    pub fn new(fields: FlatMap) -> Self {
        Self { fields }
    }

    /// Returns the raw value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns `key` as a string slice.
    ///
    /// Fails if the key is missing or not a JSON string.
    pub fn get_str(&self, key: &str) -> EngineResult<&str> {
        match self.require(key)? {
            Value::String(s) => Ok(s),
            other => Err(EngineError::field_parse(
                key,
                format!("expected string, found {}", kind_name(other)),
            )),
        }
    }

    /// Returns `key` as an owned string, stringifying numbers.
    ///
    /// Identifiers often drift between string and numeric encodings.
    pub fn get_string(&self, key: &str) -> EngineResult<String> {
        match self.require(key)? {
            Value::String(s) if !s.is_empty() => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::String(_) => Err(EngineError::field_parse(key, "value is empty")),
            other => Err(EngineError::field_parse(
                key,
                format!("expected string or number, found {}", kind_name(other)),
            )),
        }
    }

    /// Deserializes `key` into `T`.
    pub fn extract<T: DeserializeOwned>(&self, key: &str) -> EngineResult<T> {
        let value = self.require(key)?;
        serde_json::from_value(value.clone())
            .map_err(|e| EngineError::field_parse(key, e.to_string()))
    }

    fn require(&self, key: &str) -> EngineResult<&Value> {
        self.fields
            .get(key)
            .ok_or_else(|| EngineError::field_parse(key, "key not present in located record"))
    }
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
