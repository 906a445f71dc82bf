//! Create/Read/Update/Delete flows built on the engine.
//!
//! Every handler follows the same shape: pick a lookup strategy from the
//! identifying attributes that are set, talk to the API, then merge what
//! came back into the declared record. Writes merge in echo mode so
//! write-only attributes survive; refreshes merge authoritatively.

use crate::config::ProviderConfig;
use crate::error::{ProviderError, ProviderResult};
use crate::resource::{Resource, ResourceApi};
use reconcile_engine::{Candidates, EngineError, EngineResult, Locator, Signature, merge};
use reconcile_types::{Field, MergeMode};
use serde_json::Value;
use tracing::{debug, info, warn};

/// How an existing entity is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMethod {
    /// List the collection and search it by name.
    ListAndSearch,
    /// Read the entity directly by identifier.
    GetById,
}

/// Picks the lookup strategy for the given identifying attributes.
///
/// Get-by-id is the more specific strategy and wins when the id is set and
/// non-empty. An empty string counts as absent for both attributes.
pub fn read_method(id: &Field<String>, name: &Field<String>) -> EngineResult<ReadMethod> {
    Candidates::new()
        .candidate(
            ReadMethod::ListAndSearch,
            Signature::new().requires(name.is_present_non_empty()),
        )
        .candidate(
            ReadMethod::GetById,
            Signature::new().requires(id.is_present_non_empty()),
        )
        .select()
        .copied()
}

/// Drives one resource type's lifecycle against its API.
pub struct Lifecycle<A> {
    api: A,
    locator: Locator,
}

impl<A: ResourceApi> Lifecycle<A> {
    pub fn new(api: A, config: &ProviderConfig) -> Self {
        Self {
            api,
            locator: Locator::new(config.locator.clone()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Creates the entity and returns the planned record reconciled with
    /// the canonical read that follows.
    pub async fn create(&self, planned: &A::Record) -> ProviderResult<A::Record> {
        let type_name = A::Record::TYPE_NAME;
        info!("creating {}", type_name);
        let created = self.api.create(planned).await?;

        let id = match read_method(created.id(), planned.name())? {
            ReadMethod::GetById => required_id(created.id())?,
            ReadMethod::ListAndSearch => {
                debug!("{} create did not return an id, resolving by name", type_name);
                self.resolve_id(planned.name()).await?
            }
        };

        info!("{} created with id {}", type_name, id);
        let observed = self.api.get(&id).await?;
        Ok(merge(planned, &observed, MergeMode::Echo))
    }

    /// Refreshes `state` from the remote system.
    ///
    /// Returns `None` when the entity no longer exists, so the caller can
    /// drop it from state.
    pub async fn read(&self, state: &A::Record) -> ProviderResult<Option<A::Record>> {
        let type_name = A::Record::TYPE_NAME;
        let id = match read_method(state.id(), state.name())? {
            ReadMethod::GetById => required_id(state.id())?,
            ReadMethod::ListAndSearch => match self.resolve_id(state.name()).await {
                Ok(id) => id,
                Err(ProviderError::Engine(EngineError::NotFound { .. })) => {
                    warn!("{} {:?} not found while refreshing", type_name, state.name().as_str());
                    return Ok(None);
                }
                Err(e) => return Err(e),
            },
        };

        match self.api.get(&id).await {
            Ok(observed) => Ok(Some(merge(state, &observed, MergeMode::Authoritative))),
            Err(ProviderError::RemoteNotFound(_)) => {
                warn!("{} {} no longer exists", type_name, id);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Applies `planned` to the entity identified by `state`.
    pub async fn update(&self, state: &A::Record, planned: &A::Record) -> ProviderResult<A::Record> {
        let id = required_id(state.id())?;
        info!("updating {} {}", A::Record::TYPE_NAME, id);
        self.api.update(&id, planned).await?;
        let observed = self.api.get(&id).await?;
        let declared = merge(state, planned, MergeMode::Echo);
        Ok(merge(&declared, &observed, MergeMode::Echo))
    }

    /// Deletes the entity identified by `state`. Deleting an entity that is
    /// already gone succeeds.
    pub async fn delete(&self, state: &A::Record) -> ProviderResult<()> {
        let id = required_id(state.id())?;
        info!("deleting {} {}", A::Record::TYPE_NAME, id);
        match self.api.delete(&id).await {
            Err(ProviderError::RemoteNotFound(_)) => {
                debug!("{} {} was already deleted", A::Record::TYPE_NAME, id);
                Ok(())
            }
            other => other,
        }
    }

    /// Lists the collection and reads the identifier off the entity whose
    /// name matches.
    pub async fn resolve_id(&self, name: &Field<String>) -> ProviderResult<String> {
        let Some(name) = name.as_str().filter(|n| !n.is_empty()) else {
            return Err(EngineError::NoEligibleMethod { candidates: 1 }.into());
        };
        let listing = self.api.list().await?;
        let found = self.locator.locate_in(
            &listing,
            A::Record::NAME_FIELD,
            &Value::String(name.to_string()),
        )?;
        Ok(found.get_string(A::Record::ID_FIELD)?)
    }
}

fn required_id(id: &Field<String>) -> ProviderResult<String> {
    match id.as_str() {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(EngineError::NoEligibleMethod { candidates: 1 }.into()),
    }
}
