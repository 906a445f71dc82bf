//! Schema-less state merging for records carried as JSON.
//!
//! Same rules as the typed merger, with JSON shapes standing in for Rust
//! types: a missing key is unset, `null` is null, objects are nested
//! records, arrays are sequences.

use crate::reflect::kind_name;
use reconcile_types::{MergeMode, Scalar};
use serde_json::{Map, Value};

/// Reconciles `state` with `observed`.
///
/// # Panics
///
/// Panics when the two sides disagree on shape (for example an object
/// against an array). Both records must come from the same schema; a
/// mismatch is a caller bug, not a runtime condition.
#[must_use]
pub fn merge_value(state: &Value, observed: &Value, mode: MergeMode) -> Value {
    match (state, observed) {
        (Value::Object(s), Value::Object(o)) => Value::Object(merge_object(s, o, mode)),
        (_, Value::Object(_)) if state.is_null() => observed.clone(),
        (Value::Object(_), Value::Null) => state.clone(),
        (Value::Array(_), Value::Array(o)) if o.is_empty() => state.clone(),
        (_, Value::Array(_)) if state.is_null() || state.is_array() => observed.clone(),
        (Value::Array(_), Value::Null) => state.clone(),
        (Value::Object(_) | Value::Array(_), _) | (_, Value::Object(_) | Value::Array(_)) => {
            panic!(
                "record shape mismatch: state is {}, observed is {}",
                kind_name(state),
                kind_name(observed)
            )
        }
        _ => merge_scalar(state, observed, mode),
    }
}

fn merge_object(state: &Map<String, Value>, observed: &Map<String, Value>, mode: MergeMode) -> Map<String, Value> {
    let mut merged = state.clone();
    for (key, observed_value) in observed {
        let value = match state.get(key) {
            Some(state_value) => merge_value(state_value, observed_value, mode),
            None => observed_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}

fn merge_scalar(state: &Value, observed: &Value, mode: MergeMode) -> Value {
    if !observed.is_empty_value() {
        return observed.clone();
    }
    match mode {
        MergeMode::Authoritative => observed.clone(),
        MergeMode::Echo if !state.is_null() => state.clone(),
        MergeMode::Echo => observed.clone(),
    }
}
