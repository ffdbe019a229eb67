//! Error types for the Subreddit actor.

use thiserror::Error;

/// Errors that can occur during subreddit operations.
///
/// A duplicate name is not an error value: the actor logs it and keeps the existing record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubredditError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
