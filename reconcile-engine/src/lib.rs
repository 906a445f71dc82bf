//! State-reconciliation engine for provider resources.
//!
//! Three stateless pieces used together on every mutating operation:
//!
//! - [`select_method`] / [`Candidates`] — pick the most specific API call
//!   shape whose identifying inputs are all present
//! - [`Locator`] — find a just-created entity in a listed collection and read
//!   back a field the create call did not return (usually its identifier)
//! - [`Mergeable`] / [`merge`] / [`merge_value`] — reconcile declared state
//!   with a freshly observed copy
//!
//! None of these perform I/O, hold shared state, or block. They are safe to
//! call from any number of tasks concurrently.

mod config;
mod error;
mod json_merge;
mod locator;
mod merge;
mod reflect;
mod selector;

pub use config::{LocatorConfig, Normalization};
pub use error::{EngineError, EngineResult};
pub use json_merge::merge_value;
pub use locator::{Comparator, Locator, locate};
pub use merge::{Mergeable, merge};
pub use reflect::{FlatMap, Reflected, flatten_value, reflect};
pub use selector::{Candidates, Signature, select_method};

#[doc(hidden)]
pub mod reexports {
    pub use reconcile_types::MergeMode;
}
