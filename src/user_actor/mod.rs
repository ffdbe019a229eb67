//! # User Actor
//!
//! This module implements the User resource actor, the sole owner of the user partition.
//!
//! ## Overview
//!
//! The User actor is the simplest actor in the system: it has no dependencies (Context = `()`),
//! registers users, applies karma updates sent by the Post actor and answers snapshot queries.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`actions`] - [`UserAction`] for karma updates
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use reddit_engine::user_actor;
//! use reddit_engine::model::RegisterUser;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new();
//!     tokio::spawn(actor.run());
//!
//!     client.register_user(RegisterUser::new("alice", "pw1"))?;
//!     let users = client.get_all_users().await?;
//!     assert_eq!(users.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Sequential ID generation**: the n-th registration processed becomes `user_n`
//! - **Duplicate usernames allowed**: every registration creates a new user
//! - **Checked karma**: an update that would overflow is rejected and logged

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;

/// Creates a new User actor and its client.
pub fn new() -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new();
    (actor, UserClient::new(generic_client))
}
