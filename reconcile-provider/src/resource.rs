//! Resource records and the remote API seam.

use crate::error::ProviderResult;
use async_trait::async_trait;
use reconcile_engine::Mergeable;
use reconcile_types::Field;
use serde::Serialize;

/// A declarative resource record.
pub trait Resource: Mergeable + Serialize + Send + Sync {
    /// Resource type name used in diagnostics and logs.
    const TYPE_NAME: &'static str;
    /// Key of the server-assigned identifier in the reflected record.
    const ID_FIELD: &'static str = "id";
    /// Key of the user-supplied unique name in the reflected record.
    const NAME_FIELD: &'static str = "name";

    fn id(&self) -> &Field<String>;

    fn name(&self) -> &Field<String>;
}

/// The vendor API for one resource type.
///
/// Implementations translate records to and from wire calls. They are the
/// only part of a handler that performs I/O.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    type Record: Resource;

    /// Creates the entity. Some endpoints do not return the assigned
    /// identifier, in which case the returned record's id is not known.
    async fn create(&self, planned: &Self::Record) -> ProviderResult<Self::Record>;

    /// Lists every entity visible to the caller, in API response order.
    async fn list(&self) -> ProviderResult<Vec<Self::Record>>;

    /// Reads one entity by identifier.
    ///
    /// Returns [`ProviderError::RemoteNotFound`](crate::ProviderError::RemoteNotFound)
    /// if it no longer exists.
    async fn get(&self, id: &str) -> ProviderResult<Self::Record>;

    async fn update(&self, id: &str, planned: &Self::Record) -> ProviderResult<Self::Record>;

    async fn delete(&self, id: &str) -> ProviderResult<()>;
}
