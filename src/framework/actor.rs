//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one partition of the
//! data. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the partition.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a partition of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`), the injected
/// `context` and the receiver end of the mailbox.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially* in a loop, so the `store`
/// needs no `Mutex` or `RwLock`. Different actors run in parallel on the Tokio worker pool.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client`.
/// 2.  **Wire**: Send dependencies with `client.assign_context(..)` before other traffic.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// # Identifier Assignment
///
/// A `Create` message is numbered `store.len() + 1` when it is *processed*, not when it is
/// sent. Since nothing is ever removed from the store, this yields `1, 2, 3, ...` with no gaps
/// no matter how many callers raced to enqueue creations.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::UnboundedReceiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    context: T::Context,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// The mailbox is unbounded: sending a command never waits on the actor.
    pub fn new() -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = Self {
            receiver,
            store: HashMap::new(),
            context: T::Context::default(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "User" instead of "reddit_engine::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params } => {
                    debug!(entity_type, ?params, "Create");
                    let seq = self.store.len() as u32 + 1;

                    match T::from_create_params(seq, params) {
                        Ok(item) => {
                            let id = item.id();
                            if self.store.contains_key(&id) {
                                warn!(entity_type, %id, "Already exists");
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                        }
                    }
                }
                ResourceRequest::Action { action } => {
                    debug!(entity_type, ?action, "Action");
                    let Some(id) = T::action_target(&action) else {
                        debug!(entity_type, "Action ignored");
                        continue;
                    };
                    if let Some(item) = self.store.get_mut(&id) {
                        match item.handle_action(action, &self.context).await {
                            Ok(()) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                    } else {
                        warn!(entity_type, %id, "Not found");
                    }
                }
                ResourceRequest::AssignContext { context } => {
                    self.context = context;
                    info!(entity_type, "Context assigned");
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(item);
                }
                ResourceRequest::Snapshot { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "Snapshot");
                    let _ = respond_to.send(self.store.clone());
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        seq: u32,
        label: String,
        hits: u32,
    }

    #[derive(Debug)]
    struct TagCreate {
        label: String,
    }

    #[derive(Debug)]
    enum TagAction {
        Hit(String),
        Noop,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tag error")]
    struct TagError;

    #[async_trait]
    impl ActorEntity for Tag {
        type Id = String;
        type Create = TagCreate;
        type Action = TagAction;
        type Context = u32;
        type Error = TagError;

        fn from_create_params(seq: u32, params: TagCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                seq,
                label: params.label,
                hits: 0,
            })
        }

        fn id(&self) -> String {
            self.label.clone()
        }

        fn action_target(action: &TagAction) -> Option<String> {
            match action {
                TagAction::Hit(label) => Some(label.clone()),
                TagAction::Noop => None,
            }
        }

        async fn handle_action(&mut self, action: TagAction, ctx: &u32) -> Result<(), TagError> {
            match action {
                TagAction::Hit(_) => {
                    self.hits += *ctx;
                    Ok(())
                }
                TagAction::Noop => Err(TagError),
            }
        }
    }

    fn create(client: &ResourceClient<Tag>, label: &str) {
        client
            .create(TagCreate {
                label: label.to_string(),
            })
            .unwrap();
    }

    fn hit(client: &ResourceClient<Tag>, label: &str) {
        client
            .perform_action(TagAction::Hit(label.to_string()))
            .unwrap();
    }

    #[tokio::test]
    async fn test_sequence_follows_partition_size() {
        let (actor, client) = ResourceActor::<Tag>::new();
        tokio::spawn(actor.run());

        create(&client, "rust");
        create(&client, "go");
        create(&client, "rust");
        create(&client, "zig");

        let tags = client.snapshot().await.unwrap();
        assert_eq!(tags.len(), 3);
        assert_eq!(tags["rust"].seq, 1);
        assert_eq!(tags["go"].seq, 2);
        // The rejected duplicate did not consume a sequence number
        assert_eq!(tags["zig"].seq, 3);
    }

    #[tokio::test]
    async fn test_actions_use_assigned_context() {
        let (actor, client) = ResourceActor::<Tag>::new();
        client.assign_context(5).unwrap();
        tokio::spawn(actor.run());

        create(&client, "rust");
        hit(&client, "rust");
        client.assign_context(1).unwrap();
        hit(&client, "rust");
        // Unknown target and untargeted actions are absorbed
        hit(&client, "cobol");
        client.perform_action(TagAction::Noop).unwrap();

        let tag = client.get("rust".to_string()).await.unwrap().unwrap();
        assert_eq!(tag.hits, 6);
        assert!(client.get("cobol".to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_snapshot_is_detached_copy() {
        let (actor, client) = ResourceActor::<Tag>::new();
        tokio::spawn(actor.run());

        create(&client, "rust");
        let before = client.snapshot().await.unwrap();

        client.assign_context(1).unwrap();
        hit(&client, "rust");
        let after = client.snapshot().await.unwrap();

        assert_eq!(before["rust"].hits, 0);
        assert_eq!(after["rust"].hits, 1);
    }

    #[tokio::test]
    async fn test_actor_stops_when_clients_dropped() {
        let (actor, client) = ResourceActor::<Tag>::new();
        let handle = tokio::spawn(actor.run());

        create(&client, "rust");
        drop(client);

        handle.await.unwrap();
    }
}
