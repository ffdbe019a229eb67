//! Custom actions for the User actor.
//!
//! These are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! on the [`User`](crate::model::User) they name.

use crate::model::UserId;

/// Actions that mutate an existing user.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Adds `karma_change` to the user's karma. Sent by the Post actor when a post is voted on.
    ///
    /// An unknown `user_id` is logged by the actor and otherwise ignored.
    UpdateKarma { user_id: UserId, karma_change: i64 },
}
