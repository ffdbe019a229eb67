//! Error types for the User actor.

use crate::model::UserId;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// Applying the karma change would overflow the user's karma.
    #[error("Karma overflow for {user_id}: {karma} + {delta}")]
    KarmaOverflow {
        user_id: UserId,
        karma: i64,
        delta: i64,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
