//! Posts, their comments, and the payloads that create or mutate them.

use crate::model::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe identifier for Posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub u32);

impl From<u32> for PostId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post_{}", self.0)
    }
}

/// Identifier of a comment, unique only within its post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(pub u32);

impl From<u32> for CommentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "comment_{}", self.0)
    }
}

/// A post inside a subreddit.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// `subreddit` is a copy of the name given at creation and is not checked against the
/// subreddit partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub subreddit: String,
    pub content: String,
    pub upvotes: u32,
    pub downvotes: u32,
    pub comments: Vec<Comment>,
}

/// A comment stored flat in its post's `comments`.
///
/// `parent_id` records the comment being replied to; no tree is built from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub parent_id: Option<CommentId>,
    /// Reserved. Replies stay flat in the post.
    pub replies: Vec<Comment>,
    pub user_id: UserId,
    pub content: String,
    pub upvotes: u32,
    pub downvotes: u32,
}

impl Post {
    pub fn new(
        id: PostId,
        user_id: UserId,
        subreddit: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            subreddit: subreddit.into(),
            content: content.into(),
            upvotes: 0,
            downvotes: 0,
            comments: Vec::new(),
        }
    }

    /// Appends a comment numbered `comments.len() + 1` and returns its id.
    pub fn add_comment(&mut self, params: AddComment) -> CommentId {
        let id = CommentId(self.comments.len() as u32 + 1);
        self.comments.push(Comment {
            id,
            post_id: self.id,
            parent_id: params.parent(),
            replies: Vec::new(),
            user_id: params.user_id,
            content: params.content,
            upvotes: 0,
            downvotes: 0,
        });
        id
    }

    /// Bumps the matching counter and returns the karma delta owed to the author.
    pub fn record_vote(&mut self, vote_type: VoteType) -> i64 {
        match vote_type {
            VoteType::Upvote => self.upvotes += 1,
            VoteType::Downvote => self.downvotes += 1,
        }
        vote_type.karma_delta()
    }
}

/// Payload for creating a new post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub user_id: UserId,
    pub subreddit: String,
    pub content: String,
}

impl CreatePost {
    pub fn new(user_id: UserId, subreddit: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_id,
            subreddit: subreddit.into(),
            content: content.into(),
        }
    }
}

/// Payload for commenting on a post. A `parent_id` of `0` means a top-level comment.
#[derive(Debug, Clone, Deserialize)]
pub struct AddComment {
    pub user_id: UserId,
    pub post_id: PostId,
    #[serde(default)]
    pub parent_id: u32,
    pub content: String,
}

impl AddComment {
    pub fn new(user_id: UserId, post_id: PostId, content: impl Into<String>) -> Self {
        Self {
            user_id,
            post_id,
            parent_id: 0,
            content: content.into(),
        }
    }

    pub fn reply_to(mut self, parent: CommentId) -> Self {
        self.parent_id = parent.0;
        self
    }

    pub fn parent(&self) -> Option<CommentId> {
        (self.parent_id != 0).then_some(CommentId(self.parent_id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteTarget {
    Post,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Upvote,
    Downvote,
}

impl VoteType {
    pub fn karma_delta(self) -> i64 {
        match self {
            VoteType::Upvote => 1,
            VoteType::Downvote => -1,
        }
    }
}

/// Returned when a vote target or vote type string is not recognised.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown {kind}: {value:?}")]
pub struct ParseVoteError {
    kind: &'static str,
    value: String,
}

impl FromStr for VoteTarget {
    type Err = ParseVoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(VoteTarget::Post),
            "comment" => Ok(VoteTarget::Comment),
            other => Err(ParseVoteError {
                kind: "vote target",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for VoteType {
    type Err = ParseVoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" => Ok(VoteType::Upvote),
            "downvote" => Ok(VoteType::Downvote),
            other => Err(ParseVoteError {
                kind: "vote type",
                value: other.to_string(),
            }),
        }
    }
}

/// Payload for voting on a post or a comment.
///
/// `id` names a post when `target` is [`VoteTarget::Post`] and a comment otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct Vote {
    pub user_id: UserId,
    pub target: VoteTarget,
    pub id: u32,
    #[serde(rename = "type")]
    pub vote_type: VoteType,
}

impl Vote {
    pub fn post(user_id: UserId, post_id: PostId, vote_type: VoteType) -> Self {
        Self {
            user_id,
            target: VoteTarget::Post,
            id: post_id.0,
            vote_type,
        }
    }

    pub fn comment(user_id: UserId, comment_id: CommentId, vote_type: VoteType) -> Self {
        Self {
            user_id,
            target: VoteTarget::Comment,
            id: comment_id.0,
            vote_type,
        }
    }
}
