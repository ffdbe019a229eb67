//! # Reddit Engine
//!
//! > **A concurrent, actor-based engine for a Reddit-style content graph.**
//!
//! Users, subreddits, posts, comments, votes and karma are split into three partitions. Each
//! partition is owned by one actor that processes its mailbox one message at a time, so no
//! partition needs a lock. Actors only ever talk through typed messages.
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: one actor loop
//! `ResourceActor<T: ActorEntity>` is written once and runs the User, Subreddit and Post
//! partitions alike. Each record type says what creates it, which actions it accepts and what
//! context it needs.
//!
//! ### Commands and queries
//! Commands (register, create, comment, vote) are enqueued and forgotten: the caller never
//! waits and never sees an error from inside an actor. Queries carry a reply channel and give
//! up after a timeout (5 seconds by default).
//!
//! ### The one cross-actor effect
//! Voting on a post makes the Post actor send `UpdateKarma` to the User actor. The vote
//! counter changes at once; the author's karma changes when the User actor gets to the
//! message.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor),
//!   [`ResourceClient`](framework::ResourceClient).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! - **Role**: Starts the actors, wires the Post actor to the User actor, exposes every
//!   operation and shuts everything down.
//! - **Key items**: [`ActorSystem`](lifecycle::ActorSystem), [`SystemConfig`](lifecycle::SystemConfig).
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: Domain-specific wrappers around `ResourceClient`.
//!
//! ### 4. The Implementation ([`user_actor`], [`subreddit_actor`], [`post_actor`])
//! - **Role**: `ActorEntity` implementations for [`model`] types.
//!
//! ### 5. Load ([`simulator`])
//! - **Role**: Many concurrent simulated users with latency metrics.
//!
//! ## Quick Start
//!
//! ```rust
//! use reddit_engine::lifecycle::ActorSystem;
//! use reddit_engine::model::{CreatePost, PostId, RegisterUser, UserId, Vote, VoteType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = ActorSystem::new();
//!
//!     system.register_user(RegisterUser::new("alice", "pw1"));
//!     system.create_post(CreatePost::new(UserId(1), "golang", "hello"));
//!     system.vote_post(Vote::post(UserId(1), PostId(1), VoteType::Upvote));
//!
//!     let post = system.get_post(PostId(1)).await?.expect("post exists");
//!     assert_eq!(post.upvotes, 1);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod post_actor;
pub mod simulator;
pub mod subreddit_actor;
pub mod user_actor;
