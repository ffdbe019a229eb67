//! # Post Actor
//!
//! This module implements the Post resource actor, which owns posts and their comments.
//!
//! ## Overview
//!
//! The Post actor is the only actor with a dependency: it holds a [`UserClient`] in its
//! context so that a vote on a post can adjust the author's karma.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Post`]
//! - [`error`] - [`PostError`] type for type-safe error handling
//! - [`actions`] - [`PostAction`] and the injected [`PostContext`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Wiring
//!
//! The dependency is injected with a message rather than at construction, so the actor can be
//! created before the User actor exists:
//!
//! ```rust,ignore
//! let (post_actor, post_client) = post_actor::new();
//! post_client.assign_user_actor(user_client.clone())?;
//! tokio::spawn(post_actor.run());
//! ```
//!
//! Until the assignment is processed, votes on posts are rejected with
//! [`PostError::UserActorUnassigned`].
//!
//! [`UserClient`]: crate::clients::UserClient

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::PostClient;
use crate::framework::ResourceActor;
use crate::model::Post;

/// Creates a new Post actor and its client.
pub fn new() -> (ResourceActor<Post>, PostClient) {
    let (actor, generic_client) = ResourceActor::new();
    (actor, PostClient::new(generic_client))
}
