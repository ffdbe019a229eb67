//! # Mock Mailboxes & Testing Guide
//!
//! Testing an actor that talks to *another* actor is easiest when the other actor is replaced
//! by a mailbox the test reads directly. [`create_mock_client`] hands out a real
//! [`ResourceClient`] together with the receiving end of its mailbox, so a test can:
//!
//! - assert which commands a component emitted (`expect_create`, `expect_action`),
//! - answer queries by hand (`expect_get`, `expect_snapshot`),
//! - or never answer at all, to exercise the query timeout.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | Mock mailbox | Real Actor |
//! |---------|--------------|------------|
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **State** | None, the test decides the replies | Real partition |
//! | **Use Case** | Checking what a component *sends* | Testing the actor itself or the full system |
//! | **Error Injection** | Easy (drop the responder, never reply) | Hard |
//!
//! ## Example
//!
//! ```rust
//! use reddit_engine::clients::UserClient;
//! use reddit_engine::framework::mock::{create_mock_client, expect_action};
//! use reddit_engine::model::{User, UserId};
//! use reddit_engine::user_actor::UserAction;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut mailbox) = create_mock_client::<User>();
//!     let users = UserClient::new(client);
//!
//!     users.update_karma(UserId(7), -1).unwrap();
//!
//!     let action = expect_action(&mut mailbox).await.expect("Expected Action request");
//!     assert!(matches!(
//!         action,
//!         UserAction::UpdateKarma { user_id: UserId(7), karma_change: -1 }
//!     ));
//! }
//! ```

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::message::{ResourceRequest, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;

/// Receiving end of a mock client's mailbox.
pub type MockMailbox<T> = mpsc::UnboundedReceiver<ResourceRequest<T>>;

/// Creates a client and the receiver of its mailbox.
///
/// Nothing drains the receiver unless the test does, so queries sent through the client
/// time out unless the test answers them.
pub fn create_mock_client<T: ActorEntity>() -> (ResourceClient<T>, MockMailbox<T>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (ResourceClient::new(sender), receiver)
}

/// Returns the next message if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::UnboundedReceiver<ResourceRequest<T>>,
) -> Option<T::Create> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params }) => Some(params),
        _ => None,
    }
}

/// Returns the next message if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::UnboundedReceiver<ResourceRequest<T>>,
) -> Option<T::Action> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { action }) => Some(action),
        _ => None,
    }
}

/// Returns the next message if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::UnboundedReceiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next message if it is a Snapshot request.
pub async fn expect_snapshot<T: ActorEntity>(
    receiver: &mut mpsc::UnboundedReceiver<ResourceRequest<T>>,
) -> Option<Response<HashMap<T::Id, T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Returns `true` if no message is waiting in the mailbox right now.
pub fn mailbox_is_empty<T: ActorEntity>(
    receiver: &mut mpsc::UnboundedReceiver<ResourceRequest<T>>,
) -> bool {
    receiver.try_recv().is_err()
}
