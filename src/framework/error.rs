//! # Framework Errors
//!
//! This module defines the errors a caller can observe when talking to an actor.
//! Rejections *inside* an actor (unknown id, duplicate key) are never surfaced here:
//! commands are fire-and-forget, so those are logged by the actor instead.

use std::time::Duration;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Actor did not reply within {0:?}")]
    Timeout(Duration),
}
