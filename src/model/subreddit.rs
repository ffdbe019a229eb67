use crate::model::{PostId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Type-safe identifier for Subreddits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubredditId(pub u32);

impl From<u32> for SubredditId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for SubredditId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subreddit_{}", self.0)
    }
}

/// A community. The partition is keyed by `name`, which is matched exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subreddit {
    pub id: SubredditId,
    pub name: String,
    /// Reserved. Nothing joins a subreddit yet.
    pub members: HashSet<UserId>,
    /// Reserved. Posts carry the subreddit name instead.
    pub posts: Vec<PostId>,
}

impl Subreddit {
    pub fn new(id: SubredditId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: HashSet::new(),
            posts: Vec::new(),
        }
    }
}

/// Payload for creating a new subreddit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubreddit {
    pub name: String,
}

impl CreateSubreddit {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
