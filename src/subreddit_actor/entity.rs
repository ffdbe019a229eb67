//! ActorEntity trait implementation for the Subreddit domain type.
//!
//! Subreddits are keyed by name, so the actor's duplicate-key check is what rejects a
//! second community with the same name.

use super::error::SubredditError;
use crate::framework::ActorEntity;
use crate::model::{CreateSubreddit, Subreddit, SubredditId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Subreddit {
    type Id = String;
    type Create = CreateSubreddit;
    type Action = (); // No custom actions
    type Context = ();
    type Error = SubredditError;

    fn from_create_params(seq: u32, params: CreateSubreddit) -> Result<Self, Self::Error> {
        Ok(Self::new(SubredditId(seq), params.name))
    }

    fn id(&self) -> String {
        self.name.clone()
    }

    fn action_target(_action: &()) -> Option<String> {
        None
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
