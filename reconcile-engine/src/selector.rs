//! Method selection.
//!
//! A resource handler usually has several API call shapes that can serve the
//! same logical read: list everything, list filtered by a parent, get one by
//! identifier. Each shape is described by a [`Signature`] listing whether the
//! identifying inputs it needs are present. Candidates are ordered from most
//! general to most specific, and the last eligible one wins.

use crate::error::{EngineError, EngineResult};
use tracing::debug;

/// Returns the index of the last candidate whose predicates are all true.
///
/// Candidates must be ordered general → specific. An empty predicate list is
/// always eligible. Returns `None` when no candidate applies.
#[must_use]
pub fn select_method<P: AsRef<[bool]>>(candidates: &[P]) -> Option<usize> {
    candidates
        .iter()
        .rposition(|predicates| predicates.as_ref().iter().all(|present| *present))
}

/// The presence checks a single call shape requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    predicates: Vec<bool>,
}

impl Signature {
    /// Creates an empty (always eligible) signature.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one presence check.
    #[must_use]
    pub fn requires(mut self, present: bool) -> Self {
        self.predicates.push(present);
        self
    }

    /// Returns true if every check passed.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.predicates.iter().all(|p| *p)
    }

    #[must_use]
    pub fn predicates(&self) -> &[bool] {
        &self.predicates
    }
}

impl AsRef<[bool]> for Signature {
    fn as_ref(&self) -> &[bool] {
        &self.predicates
    }
}

impl From<Vec<bool>> for Signature {
    fn from(predicates: Vec<bool>) -> Self {
        Self { predicates }
    }
}

/// An ordered set of call shapes, each tagged with a caller-defined method.
#[derive(Debug, Clone)]
pub struct Candidates<M> {
    entries: Vec<(M, Signature)>,
}

impl<M> Candidates<M> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a candidate. Call in general → specific order.
    #[must_use]
    pub fn candidate(mut self, method: M, signature: Signature) -> Self {
        self.entries.push((method, signature));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Picks the most specific eligible method.
    pub fn select(&self) -> EngineResult<&M> {
        let signatures: Vec<&Signature> = self.entries.iter().map(|(_, s)| s).collect();
        match select_method(&signatures) {
            Some(index) => {
                debug!("selected method {} of {}", index, self.entries.len());
                Ok(&self.entries[index].0)
            }
            None => Err(EngineError::NoEligibleMethod {
                candidates: self.entries.len(),
            }),
        }
    }
}

impl<M> Default for Candidates<M> {
    fn default() -> Self {
        Self::new()
    }
}
