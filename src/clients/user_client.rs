//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and exposes domain‑specific methods.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{RegisterUser, User, UserId};
use crate::user_actor::{UserAction, UserError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl std::fmt::Debug for UserClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserClient").finish_non_exhaustive()
    }
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Returns a client whose queries give up after `timeout`.
    pub fn with_query_timeout(self, timeout: Duration) -> Self {
        Self::new(self.inner.with_query_timeout(timeout))
    }

    #[instrument(skip(self))]
    pub fn register_user(&self, params: RegisterUser) -> Result<(), UserError> {
        debug!("Sending request");
        self.inner.create(params).map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub fn update_karma(&self, user_id: UserId, karma_change: i64) -> Result<(), UserError> {
        debug!("Sending request");
        self.inner
            .perform_action(UserAction::UpdateKarma {
                user_id,
                karma_change,
            })
            .map_err(Self::map_error)
    }

    /// Fetches every registered user as of the moment the actor handles the query.
    pub async fn get_all_users(&self) -> Result<HashMap<UserId, User>, UserError> {
        self.snapshot().await
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::ActorCommunicationError(e.to_string())
    }
}
