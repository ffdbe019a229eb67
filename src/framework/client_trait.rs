//! # ActorClient Trait
//!
//! Provides a common interface for partition-specific clients, adding default `get` and
//! `snapshot` queries built on top of a generic `ResourceClient`.
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::collections::HashMap;

/// Trait for partition-specific clients to inherit the standard queries.
///
/// Implementors provide access to the inner `ResourceClient` and a mapping from
/// [`FrameworkError`] into their own error type; `get` and `snapshot` come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The partition-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch an owned copy of the whole partition.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<HashMap<T::Id, T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
