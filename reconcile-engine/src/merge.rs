//! Typed state merging.
//!
//! Every record shape implements [`Mergeable`], usually through
//! [`impl_mergeable!`](crate::impl_mergeable), which walks the struct's fields
//! in declaration order. Leaf rules:
//!
//! - [`Field<T>`] scalars: a non-empty observed value wins; an unset observed
//!   value falls back to state; a null or empty observed value wins in
//!   authoritative mode, and in echo mode only when state has nothing known.
//! - `Option<T>` nested records: recurse when both sides are present, take
//!   observed when only it is present, otherwise keep state.
//! - `Vec<T>` sequences: replaced wholesale by a non-empty observed sequence,
//!   never merged element-wise.
//!
//! Merging is pure: both inputs are borrowed and a new record is returned.

use reconcile_types::{Field, MergeMode, Scalar};

/// A record (or record member) that can be reconciled against an observed copy.
pub trait Mergeable: Clone {
    /// Returns `self` (state) reconciled with `observed`.
    #[must_use]
    fn merge_with(&self, observed: &Self, mode: MergeMode) -> Self;
}

/// Reconciles `state` with `observed`.
#[must_use]
pub fn merge<T: Mergeable>(state: &T, observed: &T, mode: MergeMode) -> T {
    state.merge_with(observed, mode)
}

impl<T: Scalar> Mergeable for Field<T> {
    fn merge_with(&self, observed: &Self, mode: MergeMode) -> Self {
        match (observed, mode) {
            (Field::Value(v), _) if !v.is_empty_value() => observed.clone(),
            (Field::Unset, _) => self.clone(),
            (_, MergeMode::Authoritative) => observed.clone(),
            (_, MergeMode::Echo) if self.is_known() => self.clone(),
            (_, MergeMode::Echo) => observed.clone(),
        }
    }
}

impl<T: Mergeable> Mergeable for Option<T> {
    fn merge_with(&self, observed: &Self, mode: MergeMode) -> Self {
        match (self, observed) {
            (Some(state), Some(observed)) => Some(state.merge_with(observed, mode)),
            (None, Some(observed)) => Some(observed.clone()),
            (_, None) => self.clone(),
        }
    }
}

impl<T: Mergeable> Mergeable for Box<T> {
    fn merge_with(&self, observed: &Self, mode: MergeMode) -> Self {
        Box::new((**self).merge_with(observed, mode))
    }
}

impl<T: Clone> Mergeable for Vec<T> {
    fn merge_with(&self, observed: &Self, _mode: MergeMode) -> Self {
        if observed.is_empty() {
            self.clone()
        } else {
            observed.clone()
        }
    }
}

/// Implements [`Mergeable`] for a record struct by merging each listed field.
///
/// Every field of the struct must be listed; the generated impl builds the
/// result with a struct literal, so an omitted field is a compile error.
///
/// ```
/// use reconcile_engine::{Mergeable, impl_mergeable};
/// use reconcile_types::{Field, MergeMode};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Network {
///     id: Field<String>,
///     name: Field<String>,
///     tags: Vec<String>,
/// }
///
/// impl_mergeable!(Network { id, name, tags });
///
/// let state = Network { id: Field::Unset, name: "a".into(), tags: vec![] };
/// let observed = Network { id: "n-1".into(), name: Field::Unset, tags: vec![] };
/// let merged = state.merge_with(&observed, MergeMode::Echo);
/// assert_eq!(merged.id, Field::Value("n-1".to_string()));
/// assert_eq!(merged.name, Field::Value("a".to_string()));
/// ```
#[macro_export]
macro_rules! impl_mergeable {
    ($record:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Mergeable for $record {
            fn merge_with(
                &self,
                observed: &Self,
                mode: $crate::reexports::MergeMode,
            ) -> Self {
                Self {
                    $($field: $crate::Mergeable::merge_with(&self.$field, &observed.$field, mode),)*
                }
            }
        }
    };
}
