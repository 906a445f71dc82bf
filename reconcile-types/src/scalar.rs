//! Scalar emptiness.

/// A leaf attribute type that knows whether a value counts as empty.
///
/// Empty values do not override prior state in echo-mode merges. Only
/// strings (and their JSON equivalents) have an empty form; zero and `false`
/// are real values a remote system can legitimately report.
pub trait Scalar: Clone {
    /// Returns true if this value should be treated as "not reported".
    fn is_empty_value(&self) -> bool {
        false
    }
}

impl Scalar for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Scalar for serde_json::Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            Self::Array(a) => a.is_empty(),
            Self::Object(o) => o.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }
}

macro_rules! never_empty {
    ($($ty:ty),* $(,)?) => {
        $(impl Scalar for $ty {})*
    };
}

never_empty!(bool, i32, i64, u32, u64, f32, f64);
