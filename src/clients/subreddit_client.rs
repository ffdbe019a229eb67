//! # Subreddit Client
//!
//! Provides a high‑level API for interacting with the `Subreddit` actor.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CreateSubreddit, Subreddit};
use crate::subreddit_actor::SubredditError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for interacting with the Subreddit actor.
#[derive(Clone)]
pub struct SubredditClient {
    inner: ResourceClient<Subreddit>,
}

impl SubredditClient {
    pub fn new(inner: ResourceClient<Subreddit>) -> Self {
        Self { inner }
    }

    pub fn with_query_timeout(self, timeout: Duration) -> Self {
        Self::new(self.inner.with_query_timeout(timeout))
    }

    #[instrument(skip(self))]
    pub fn create_subreddit(&self, params: CreateSubreddit) -> Result<(), SubredditError> {
        debug!("Sending request");
        self.inner.create(params).map_err(Self::map_error)
    }

    /// Fetches every subreddit, keyed by name.
    pub async fn get_all_subreddits(&self) -> Result<HashMap<String, Subreddit>, SubredditError> {
        self.snapshot().await
    }
}

#[async_trait]
impl ActorClient<Subreddit> for SubredditClient {
    type Error = SubredditError;

    fn inner(&self) -> &ResourceClient<Subreddit> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SubredditError::ActorCommunicationError(e.to_string())
    }
}
