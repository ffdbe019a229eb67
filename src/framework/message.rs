//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::framework::entity::ActorEntity;
use std::collections::HashMap;
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel used by queries.
pub type Response<T> = oneshot::Sender<T>;

/// Message type placed on an actor's mailbox.
///
/// # Commands and Queries
/// The variants split into two groups:
///
/// - **Commands** (`Create`, `Action`, `AssignContext`) carry no reply channel. The sender gets
///   no acknowledgment; whatever the actor decides is only visible in its logs and in later
///   queries.
/// - **Queries** (`Get`, `Snapshot`) carry a [`Response`] the actor answers exactly once.
///
/// # Entity Interaction
/// This type is generic over `T: ActorEntity` and uses its associated types (`Create`,
/// `Action`, `Context`) so the compiler rejects a payload sent to the wrong partition.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
    },
    Action {
        action: T::Action,
    },
    AssignContext {
        context: T::Context,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Snapshot {
        respond_to: Response<HashMap<T::Id, T>>,
    },
}
