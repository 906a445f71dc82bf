//! Entity location.
//!
//! Several create endpoints do not echo back the identifier they assign. The
//! handler re-lists the collection, finds the entity it just created by a
//! user-supplied unique field (usually its name), and reads the identifier
//! off the match.

use crate::config::{LocatorConfig, Normalization};
use crate::error::{EngineError, EngineResult};
use crate::reflect::{Reflected, flatten_value, reflect};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

/// Decides whether a candidate value matches the target value.
pub trait Comparator {
    fn matches(&self, candidate: &Value, target: &Value) -> bool;
}

impl<F> Comparator for F
where
    F: Fn(&Value, &Value) -> bool,
{
    fn matches(&self, candidate: &Value, target: &Value) -> bool {
        self(candidate, target)
    }
}

impl Comparator for Normalization {
    fn matches(&self, candidate: &Value, target: &Value) -> bool {
        match self {
            Normalization::Strict => candidate == target,
            Normalization::StringForm => match (string_form(candidate), string_form(target)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            Normalization::Numeric => match (numeric_form(candidate), numeric_form(target)) {
                (Some(a), Some(b)) => a == b,
                _ => Normalization::StringForm.matches(candidate, target),
            },
        }
    }
}

/// Renders a value the way it would read on the wire. `null` has no form.
fn string_form(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

fn numeric_form(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Finds entities in listed collections.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    config: LocatorConfig,
}

impl Locator {
    #[must_use]
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// Locates using the configured normalization.
    pub fn locate(&self, collection: &Value, field: &str, value: &Value) -> EngineResult<Reflected> {
        self.locate_with(collection, field, value, &self.config.normalization)
    }

    /// Reflects a typed collection (a record or a sequence of records) and
    /// locates within it.
    pub fn locate_in<T: Serialize + ?Sized>(
        &self,
        collection: &T,
        field: &str,
        value: &Value,
    ) -> EngineResult<Reflected> {
        let reflected = reflect(collection)?;
        self.locate(&reflected, field, value)
    }

    /// Locates with an explicit comparator.
    ///
    /// Sequences are searched in order and the first match wins; a single
    /// record is its own sole candidate. Non-record elements are skipped.
    pub fn locate_with<C: Comparator + ?Sized>(
        &self,
        collection: &Value,
        field: &str,
        value: &Value,
        comparator: &C,
    ) -> EngineResult<Reflected> {
        let candidates: &[Value] = match collection {
            Value::Array(items) => items,
            single => std::slice::from_ref(single),
        };

        for (index, candidate) in candidates.iter().enumerate() {
            let Some(flat) = flatten_value(candidate, &self.config.separator) else {
                trace!("skipping non-record element {}", index);
                continue;
            };
            if flat.get(field).is_some_and(|v| comparator.matches(v, value)) {
                debug!("located {} = {} at index {}", field, value, index);
                return Ok(Reflected::new(flat));
            }
        }

        debug!("no match for {} = {} among {} candidates", field, value, candidates.len());
        Err(EngineError::NotFound {
            field: field.to_string(),
            value: string_form(value).unwrap_or_else(|| "null".to_string()),
        })
    }
}

/// Locates with the default configuration and an explicit comparator.
pub fn locate<C: Comparator + ?Sized>(
    collection: &Value,
    field: &str,
    value: &Value,
    comparator: &C,
) -> EngineResult<Reflected> {
    Locator::default().locate_with(collection, field, value, comparator)
}
