//! ActorEntity trait implementation for the Post domain type.
//!
//! Voting on a post is the one place where an actor talks to another actor: after the
//! counter changes, an `UpdateKarma` is enqueued on the User actor for the post's author.
//! The enqueue does not wait, so the two partitions are only eventually consistent.

use super::actions::{PostAction, PostContext};
use super::error::PostError;
use crate::framework::ActorEntity;
use crate::model::{CreatePost, Post, PostId, VoteTarget};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Post {
    type Id = PostId;
    type Create = CreatePost;
    type Action = PostAction;
    type Context = PostContext;
    type Error = PostError;

    /// Creates a new Post with no votes and no comments. The subreddit is not validated.
    fn from_create_params(seq: u32, params: CreatePost) -> Result<Self, Self::Error> {
        Ok(Self::new(
            PostId(seq),
            params.user_id,
            params.subreddit,
            params.content,
        ))
    }

    fn id(&self) -> PostId {
        self.id
    }

    fn action_target(action: &PostAction) -> Option<PostId> {
        match action {
            PostAction::AddComment(comment) => Some(comment.post_id),
            PostAction::Vote(vote) => match vote.target {
                VoteTarget::Post => Some(PostId(vote.id)),
                // Comment votes are not counted anywhere yet
                VoteTarget::Comment => None,
            },
        }
    }

    /// Handles custom actions for the Post entity.
    ///
    /// # Actions
    /// - `AddComment`: appends a comment numbered after the existing ones
    /// - `Vote`: bumps a counter and sends the author's karma change to the User actor
    async fn handle_action(
        &mut self,
        action: PostAction,
        ctx: &PostContext,
    ) -> Result<(), Self::Error> {
        match action {
            PostAction::AddComment(params) => {
                let comment_id = self.add_comment(params);
                debug!(post_id = %self.id, %comment_id, "Comment added");
                Ok(())
            }
            PostAction::Vote(vote) => {
                let users = ctx
                    .user_actor
                    .as_ref()
                    .ok_or(PostError::UserActorUnassigned)?;
                let karma_change = self.record_vote(vote.vote_type);
                users
                    .update_karma(self.user_id, karma_change)
                    .map_err(|e| PostError::KarmaNotificationFailed(e.to_string()))
            }
        }
    }
}
