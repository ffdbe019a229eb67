//! Runtime configuration for the actor system.

use crate::framework::DEFAULT_QUERY_TIMEOUT;
use std::time::Duration;

/// Settings applied when the [`ActorSystem`](super::ActorSystem) starts its actors.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// How long a query waits for an actor's reply before failing.
    pub query_timeout: Duration,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}

impl SystemConfig {
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }
}
