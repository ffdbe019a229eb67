//! Custom actions for the Post actor.

use crate::clients::UserClient;
use crate::model::{AddComment, Vote};

/// Actions addressed to an existing post.
#[derive(Debug, Clone)]
pub enum PostAction {
    /// Appends a comment to the post named by `post_id`.
    AddComment(AddComment),
    /// Votes on a post. Votes that target a comment are accepted and have no effect.
    Vote(Vote),
}

/// Dependencies injected into the Post actor.
///
/// Starts out empty. The system assigns the User actor's client before any other message.
#[derive(Debug, Clone, Default)]
pub struct PostContext {
    pub user_actor: Option<UserClient>,
}

impl PostContext {
    pub fn new(user_actor: UserClient) -> Self {
        Self {
            user_actor: Some(user_actor),
        }
    }
}
