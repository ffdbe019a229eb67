//! Domain-specific clients.
//!
//! Each client wraps a generic [`ResourceClient`](crate::framework::ResourceClient) and exposes
//! one method per message its actor understands. Commands return as soon as the message is
//! enqueued; queries wait for the reply up to the client's timeout.

pub mod post_client;
pub mod subreddit_client;
pub mod user_client;

pub use post_client::PostClient;
pub use subreddit_client::SubredditClient;
pub use user_client::UserClient;
