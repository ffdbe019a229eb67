//! # Domain Models
//!
//! Plain data structures for the three partitions and the payloads that create or mutate
//! them. Records derive `Serialize` and inbound payloads derive `Deserialize`, so a transport
//! layer can encode and decode them directly.

pub mod post;
pub mod subreddit;
pub mod user;

pub use post::*;
pub use subreddit::*;
pub use user::*;
