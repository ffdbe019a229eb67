//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// How long a query waits for the actor's reply unless configured otherwise.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
/// A type-safe handle for sending messages to a `ResourceActor`.
///
/// The client holds only a sender, so cloning is inexpensive and confers no access to the
/// actor's state.
///
/// * **Commands** (`create`, `perform_action`, `assign_context`) enqueue and return at once.
///   The only error they report is that the actor has stopped.
/// * **Queries** (`get`, `snapshot`) wait for the reply for at most the query timeout.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::UnboundedSender<ResourceRequest<T>>,
    query_timeout: Duration,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::UnboundedSender<ResourceRequest<T>>) -> Self {
        Self {
            sender,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Returns a client that gives up on queries after `timeout`.
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    pub fn create(&self, params: T::Create) -> Result<(), FrameworkError> {
        self.tell(ResourceRequest::Create { params })
    }

    pub fn perform_action(&self, action: T::Action) -> Result<(), FrameworkError> {
        self.tell(ResourceRequest::Action { action })
    }

    pub fn assign_context(&self, context: T::Context) -> Result<(), FrameworkError> {
        self.tell(ResourceRequest::AssignContext { context })
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.ask(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<HashMap<T::Id, T>, FrameworkError> {
        self.ask(|respond_to| ResourceRequest::Snapshot { respond_to })
            .await
    }

    fn tell(&self, request: ResourceRequest<T>) -> Result<(), FrameworkError> {
        self.sender
            .send(request)
            .map_err(|_| FrameworkError::ActorClosed)
    }

    async fn ask<R>(
        &self,
        request: impl FnOnce(oneshot::Sender<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.tell(request(respond_to))?;
        match tokio::time::timeout(self.query_timeout, response).await {
            Ok(Ok(reply)) => Ok(reply),
            Ok(Err(_)) => Err(FrameworkError::ActorDropped),
            Err(_) => Err(FrameworkError::Timeout(self.query_timeout)),
        }
    }
}
