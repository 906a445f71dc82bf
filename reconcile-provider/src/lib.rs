//! Resource lifecycle helpers for provider handlers.
//!
//! Resource handlers plug a vendor API into [`ResourceApi`] and get the
//! standard flows from [`Lifecycle`]:
//!
//! 1. **Select**: pick get-by-id or list-and-search from the identifying
//!    attributes that are set
//! 2. **Locate**: when a create call does not return the assigned id,
//!    re-list and find the new entity by name
//! 3. **Merge**: reconcile the declared record with the canonical read
//!    (echo mode after writes, authoritative on refresh)
//!
//! Failures become [`Diagnostic`]s with actionable text.

mod config;
mod diagnostics;
mod error;
mod lifecycle;
mod logging;
mod resource;

pub use config::ProviderConfig;
pub use diagnostics::{Diagnostic, Severity};
pub use error::{ProviderError, ProviderResult};
pub use lifecycle::{Lifecycle, ReadMethod, read_method};
pub use logging::init_tracing;
pub use resource::{Resource, ResourceApi};
