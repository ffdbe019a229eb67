//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the engine: starting the three actors,
//! wiring them together, exposing their operations and shutting them down.
//!
//! ## The ActorSystem Pattern
//!
//! Individual actors are simple; wiring them together is where the care goes. The
//! [`ActorSystem`] is the "conductor":
//!
//! 1. **Actor Creation** - Instantiate the User, Subreddit and Post actors and their clients
//! 2. **Dependency Injection** - Send the Post actor a `UserClient` as its first message
//! 3. **Startup** - Spawn each actor's run loop on the Tokio runtime
//! 4. **Graceful Shutdown** - Drop the clients and await every actor task
//!
//! ```rust,ignore
//! let (user_actor, users) = user_actor::new();
//! let (post_actor, posts) = post_actor::new();
//!
//! posts.assign_user_actor(users.clone())?;
//!
//! tokio::spawn(user_actor.run());
//! tokio::spawn(post_actor.run());
//! ```
//!
//! ## Dependency Injection via Context
//!
//! The Post actor depends on the User actor; the User actor depends on nothing. The dependency
//! travels as an `AssignContext` message rather than a constructor argument ("late binding"),
//! so actors can be created in any order.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of each mailbox
//! 2. **Actors drain** - Messages already enqueued are still processed
//! 3. **Actors detect closure** - `receiver.recv()` returns `None`, the final size is logged
//! 4. **Await completion** - Every actor task is joined
//!
//! The dependency graph is acyclic (Post → User), so channel closure alone is enough to stop
//! everything.
//!
//! ## Configuration & Observability
//!
//! [`SystemConfig`] carries the query timeout. [`setup_tracing`] installs the log subscriber;
//! see the [`tracing`] module for what gets logged.

pub mod actor_system;
pub mod config;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use actor_system::*;
pub use config::*;
