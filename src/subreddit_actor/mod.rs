//! # Subreddit Actor
//!
//! Owns the community partition. Its only command is creation; a name that already exists is
//! rejected inside the actor and logged, and does not consume an identifier.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Subreddit`]
//! - [`error`] - [`SubredditError`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::SubredditClient;
use crate::framework::ResourceActor;
use crate::model::Subreddit;

/// Creates a new Subreddit actor and its client.
pub fn new() -> (ResourceActor<Subreddit>, SubredditClient) {
    let (actor, generic_client) = ResourceActor::new();
    (actor, SubredditClient::new(generic_client))
}
