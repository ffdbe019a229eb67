//! # Observability & Tracing
//!
//! This module provides the tracing setup for the whole engine.
//!
//! ## Configuration
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter that hides the module
//! path (`with_target(false)`); every actor log line carries an `entity_type` field instead.
//! The level is read from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final partition size
//! - **Mutations**: `Created`, `Action ok` at `info`
//! - **Rejections**: `Already exists`, `Not found`, `Action failed` at `warn`
//! - **Payloads**: every message at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run -- demo
//! RUST_LOG=debug cargo run -- demo
//! RUST_LOG=warn cargo run -- simulate --users 200
//! ```
//!
//! ## Workflow Trace Example
//!
//! An upvote on alice's post, with `RUST_LOG=info`:
//!
//! ```text
//! INFO Created entity_type="User" id=user_1 size=1
//! INFO Created entity_type="Post" id=post_1 size=1
//! INFO Action ok entity_type="Post" id=post_1
//! INFO Action ok entity_type="User" id=user_1
//! ```
//!
//! With `RUST_LOG=debug` the payloads appear too; the password of a `RegisterUser` is
//! printed as `<redacted>`:
//!
//! ```text
//! DEBUG register_user: Sending request params=RegisterUser { username: "alice", password: "<redacted>" }
//! DEBUG Create entity_type="User" params=RegisterUser { username: "alice", password: "<redacted>" }
//! DEBUG Action entity_type="Post" action=Vote(Vote { user_id: UserId(1), target: Post, id: 1, vote_type: Upvote })
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
