//! Generic actor framework for partitioned state.
//!
//! This module provides the building blocks every actor in the engine is made from:
//! one actor per partition, one mailbox per actor, and typed messages in between.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be owned by an actor
//! - [`ResourceActor`] - Generic actor that owns a partition and drains its mailbox
//! - [`ResourceClient`] - Type-safe, cloneable handle used to send messages to an actor
//! - [`ActorClient`] - Default queries for partition-specific client wrappers
//! - [`FrameworkError`] - Errors a caller can observe (closed actor, dropped reply, timeout)
//!
//! # Testing
//!
//! See [`mock`] for utilities to test a component against a mailbox the test controls.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::{ResourceClient, DEFAULT_QUERY_TIMEOUT};
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
