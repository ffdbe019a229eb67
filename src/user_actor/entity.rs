//! ActorEntity trait implementation for the User domain type.
//!
//! This module contains the [`ActorEntity`] implementation that enables [`User`] to be
//! managed by the generic [`ResourceActor`](crate::framework::ResourceActor).

use super::actions::UserAction;
use super::error::UserError;
use crate::framework::ActorEntity;
use crate::model::{RegisterUser, User, UserId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = RegisterUser;
    type Action = UserAction;
    type Context = ();
    type Error = UserError;

    /// Creates a new User with zero karma under the next sequence number.
    fn from_create_params(seq: u32, params: RegisterUser) -> Result<Self, Self::Error> {
        Ok(Self::new(UserId(seq), params.username, params.password))
    }

    fn id(&self) -> UserId {
        self.id
    }

    fn action_target(action: &UserAction) -> Option<UserId> {
        match action {
            UserAction::UpdateKarma { user_id, .. } => Some(*user_id),
        }
    }

    /// Handles custom actions for the User entity.
    ///
    /// # Actions
    /// - `UpdateKarma`: adds the delta to `karma`
    ///
    /// A delta that would take `karma` past the `i64` limits is rejected with
    /// [`UserError::KarmaOverflow`] and leaves `karma` unchanged, rather than wrapping or
    /// saturating.
    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {
            UserAction::UpdateKarma { karma_change, .. } => {
                let Some(karma) = self.karma.checked_add(karma_change) else {
                    return Err(UserError::KarmaOverflow {
                        user_id: self.id,
                        karma: self.karma,
                        delta: karma_change,
                    });
                };
                self.karma = karma;
                Ok(())
            }
        }
    }
}
