//! Core value types for the reconciliation engine.
//!
//! This crate defines the small vocabulary every other crate speaks:
//! - [`Field<T>`] — tri-state attribute value (unset, null, or a value)
//! - [`Scalar`] — what counts as an "empty" scalar for merge purposes
//! - [`MergeMode`] — whether an observed record is the whole remote truth
//!
//! Resource-specific record types live with their handlers, not here.

mod field;
mod mode;
mod scalar;

pub use field::Field;
pub use mode::MergeMode;
pub use scalar::Scalar;
