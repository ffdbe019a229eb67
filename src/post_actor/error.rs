//! Error types for the Post actor.

use thiserror::Error;

/// Errors that can occur during post operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PostError {
    /// A vote arrived before the User actor was assigned.
    #[error("User actor has not been assigned")]
    UserActorUnassigned,

    /// The vote was counted but the karma update could not be sent.
    #[error("Karma notification failed: {0}")]
    KarmaNotificationFailed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
