//! # Post Client
//!
//! Provides a high‑level API for interacting with the `Post` actor, including the one-time
//! assignment of the User actor it reports karma changes to.
use crate::clients::UserClient;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{AddComment, CreatePost, Post, PostId, Vote};
use crate::post_actor::{PostAction, PostContext, PostError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Client for interacting with the Post actor.
#[derive(Clone)]
pub struct PostClient {
    inner: ResourceClient<Post>,
}

impl PostClient {
    pub fn new(inner: ResourceClient<Post>) -> Self {
        Self { inner }
    }

    pub fn with_query_timeout(self, timeout: Duration) -> Self {
        Self::new(self.inner.with_query_timeout(timeout))
    }

    /// Gives the Post actor the User actor to send karma updates to. Overwrites any earlier
    /// assignment.
    #[instrument(skip(self, user_actor))]
    pub fn assign_user_actor(&self, user_actor: UserClient) -> Result<(), PostError> {
        info!("Assigning user actor");
        self.inner
            .assign_context(PostContext::new(user_actor))
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub fn create_post(&self, params: CreatePost) -> Result<(), PostError> {
        debug!("Sending request");
        self.inner.create(params).map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub fn add_comment(&self, params: AddComment) -> Result<(), PostError> {
        debug!("Sending request");
        self.inner
            .perform_action(PostAction::AddComment(params))
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub fn vote(&self, vote: Vote) -> Result<(), PostError> {
        debug!("Sending request");
        self.inner
            .perform_action(PostAction::Vote(vote))
            .map_err(Self::map_error)
    }

    pub async fn get_post(&self, id: PostId) -> Result<Option<Post>, PostError> {
        self.get(id).await
    }

    pub async fn get_all_posts(&self) -> Result<HashMap<PostId, Post>, PostError> {
        self.snapshot().await
    }
}

#[async_trait]
impl ActorClient<Post> for PostClient {
    type Error = PostError;

    fn inner(&self) -> &ResourceClient<Post> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PostError::ActorCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, mailbox_is_empty};
    use crate::framework::ResourceRequest;
    use crate::model::{UserId, VoteType};

    #[tokio::test]
    async fn test_commands_reach_the_mailbox_in_order() {
        let (client, mut mailbox) = create_mock_client::<Post>();
        let posts = PostClient::new(client);

        posts
            .add_comment(AddComment::new(UserId(1), PostId(1), "first"))
            .unwrap();
        posts
            .vote(Vote::post(UserId(2), PostId(1), VoteType::Downvote))
            .unwrap();

        let first = expect_action(&mut mailbox).await.unwrap();
        assert!(matches!(first, PostAction::AddComment(c) if c.content == "first"));
        let second = expect_action(&mut mailbox).await.unwrap();
        assert!(matches!(second, PostAction::Vote(v) if v.vote_type == VoteType::Downvote));
        assert!(mailbox_is_empty(&mut mailbox));
    }

    #[tokio::test]
    async fn test_assign_user_actor_sends_context() {
        let (client, mut mailbox) = create_mock_client::<Post>();
        let (user_client, _user_mailbox) = create_mock_client();
        let posts = PostClient::new(client);

        posts
            .assign_user_actor(UserClient::new(user_client))
            .unwrap();

        let Some(ResourceRequest::AssignContext { context }) = mailbox.recv().await else {
            panic!("Expected AssignContext");
        };
        assert!(context.user_actor.is_some());
    }

    #[tokio::test]
    async fn test_commands_fail_after_actor_stops() {
        let (client, mailbox) = create_mock_client::<Post>();
        drop(mailbox);
        let posts = PostClient::new(client);

        let err = posts
            .create_post(CreatePost::new(UserId(1), "golang", "hello"))
            .unwrap_err();
        assert_eq!(
            err,
            PostError::ActorCommunicationError("Actor closed".to_string())
        );
    }
}
