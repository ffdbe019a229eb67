//! # Actor System
//!
//! The supervisor that owns the three actors and is the only entry point callers use.

use super::config::SystemConfig;
use crate::clients::{PostClient, SubredditClient, UserClient};
use crate::model::{
    AddComment, CreatePost, CreateSubreddit, Post, PostId, RegisterUser, Subreddit, User, UserId,
    Vote,
};
use crate::post_actor::PostError;
use crate::subreddit_actor::SubredditError;
use crate::user_actor::UserError;
use crate::{post_actor, subreddit_actor, user_actor};
use std::collections::HashMap;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Errors reported while shutting the system down.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// Owns the User, Subreddit and Post actors and exposes one operation per message.
///
/// Commands (`register_user`, `create_subreddit`, `create_post`, `add_comment`,
/// `vote_post`) only enqueue: the caller gets no acknowledgment, and a rejection inside an
/// actor shows up in the logs only. Queries wait for the reply up to the configured timeout.
///
/// Messages one caller sends to the same actor are processed in the order they were sent.
/// Nothing orders messages across actors, so a karma change caused by a vote becomes visible
/// some time after the vote itself.
pub struct ActorSystem {
    users: UserClient,
    subreddits: SubredditClient,
    posts: PostClient,
    handles: Vec<JoinHandle<()>>,
}

impl ActorSystem {
    /// Starts the system with the default configuration. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        info!(query_timeout = ?config.query_timeout, "Starting actor system");

        let (user_actor, users) = user_actor::new();
        let (subreddit_actor, subreddits) = subreddit_actor::new();
        let (post_actor, posts) = post_actor::new();

        let users = users.with_query_timeout(config.query_timeout);
        let subreddits = subreddits.with_query_timeout(config.query_timeout);
        let posts = posts.with_query_timeout(config.query_timeout);

        // First message in the post mailbox, so no vote is processed before it
        if let Err(e) = posts.assign_user_actor(users.clone()) {
            warn!(error = %e, "Failed to assign user actor");
        }

        let handles = vec![
            tokio::spawn(user_actor.run()),
            tokio::spawn(subreddit_actor.run()),
            tokio::spawn(post_actor.run()),
        ];

        Self {
            users,
            subreddits,
            posts,
            handles,
        }
    }

    pub fn register_user(&self, params: RegisterUser) {
        if let Err(e) = self.users.register_user(params) {
            warn!(error = %e, "Failed to enqueue RegisterUser");
        }
    }

    pub fn create_subreddit(&self, params: CreateSubreddit) {
        if let Err(e) = self.subreddits.create_subreddit(params) {
            warn!(error = %e, "Failed to enqueue CreateSubreddit");
        }
    }

    pub fn create_post(&self, params: CreatePost) {
        if let Err(e) = self.posts.create_post(params) {
            warn!(error = %e, "Failed to enqueue CreatePost");
        }
    }

    pub fn add_comment(&self, params: AddComment) {
        if let Err(e) = self.posts.add_comment(params) {
            warn!(error = %e, "Failed to enqueue AddComment");
        }
    }

    pub fn vote_post(&self, vote: Vote) {
        if let Err(e) = self.posts.vote(vote) {
            warn!(error = %e, "Failed to enqueue Vote");
        }
    }

    /// Fetches a snapshot of every user, failing if the User actor does not answer in time.
    pub async fn get_all_users(&self) -> Result<HashMap<UserId, User>, UserError> {
        self.users.get_all_users().await
    }

    pub async fn get_post(&self, id: PostId) -> Result<Option<Post>, PostError> {
        self.posts.get_post(id).await
    }

    pub async fn get_all_posts(&self) -> Result<HashMap<PostId, Post>, PostError> {
        self.posts.get_all_posts().await
    }

    pub async fn get_all_subreddits(&self) -> Result<HashMap<String, Subreddit>, SubredditError> {
        self.subreddits.get_all_subreddits().await
    }

    /// Stops every actor after it drains the messages already in its mailbox.
    ///
    /// The Post actor holds a `UserClient`, so the User actor finishes only after the Post
    /// actor does.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down actor system");
        drop(self.users);
        drop(self.subreddits);
        drop(self.posts);

        let mut result = Ok(());
        for handle in self.handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "Actor task failed");
                if result.is_ok() {
                    result = Err(SystemError::from(e));
                }
            }
        }
        info!("Actor system stopped");
        result
    }
}

impl Default for ActorSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::ActorClient;
    use crate::model::VoteType;
    use std::time::Duration;

    #[tokio::test]
    async fn test_upvote_reaches_author_karma() {
        let system = ActorSystem::new();

        system.register_user(RegisterUser::new("alice", "pw1"));
        system.create_post(CreatePost::new(UserId(1), "golang", "hello"));
        system.vote_post(Vote::post(UserId(1), PostId(1), VoteType::Upvote));

        let post = system.get_post(PostId(1)).await.unwrap().unwrap();
        assert_eq!((post.upvotes, post.downvotes), (1, 0));

        // The karma update was enqueued before the post query was answered
        let users = system.get_all_users().await.unwrap();
        assert_eq!(users[&UserId(1)].karma, 1);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_config_sets_query_timeout() {
        let config = SystemConfig::default().with_query_timeout(Duration::from_millis(250));
        let system = ActorSystem::with_config(config);

        assert_eq!(
            system.users.inner().query_timeout(),
            Duration::from_millis(250)
        );
        assert!(system.get_all_subreddits().await.unwrap().is_empty());

        system.shutdown().await.unwrap();
    }
}
