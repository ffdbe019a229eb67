//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every partition record (User, Subreddit,
//! Post) must implement to be managed by the generic `ResourceActor`. It specifies associated
//! types for the partition key, the creation payload, the actions, the injected context and the
//! error type, and provides the hooks the actor calls while draining its mailbox.
//!
//! # Architecture Note
//! By defining a contract (`ActorEntity`) that all our record types must satisfy, we write the
//! `ResourceActor` logic *once* and reuse it for every partition.
//!
//! Associated types enforce type safety: a `User` partition only accepts a `RegisterUser`
//! payload, and you can't accidentally send it a `CreatePost`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any partition record must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks may await. It also defines a `Context` type, which
/// is injected into every action hook. The context starts out as `Default::default()` and is
/// replaced by an `AssignContext` message, which lets the system wire actors together *after*
/// they have been created ("late binding").
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The partition key (e.g. `UserId`, or a subreddit's name).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// Enum representing record-specific operations (e.g. `UpdateKarma`).
    type Action: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Default + Send + Sync;

    /// The error type for this entity.
    ///
    /// Errors never travel back to the sender of a command: the actor logs them and moves on
    /// to the next message.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the sequence number and payload.
    ///
    /// `seq` is `partition size + 1` at the moment the actor processes the message.
    fn from_create_params(seq: u32, params: Self::Create) -> Result<Self, Self::Error>;

    /// The key this record is stored under.
    fn id(&self) -> Self::Id;

    /// The record an action addresses, or `None` if the action is accepted but addresses
    /// nothing in this partition.
    fn action_target(action: &Self::Action) -> Option<Self::Id>;

    /// Handle a record-specific action against the record named by `action_target`.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
