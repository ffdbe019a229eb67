//! # Load Simulator
//!
//! Drives many concurrent simulated users through an [`ActorSystem`] and reports how long it
//! took to hand their actions to the actors.
//!
//! Each user is registered by the driver itself, one after another, so user `n` is always
//! `user_n`. Then every user gets its own task that performs a fixed number of random actions:
//! a post, a comment on a random post id, or an upvote on a random post id. Random ids may not
//! exist yet; those messages are rejected inside the Post actor like any other unknown id.
//!
//! The report also carries a [`ResourceReport`] taken before and after the run.

pub mod metrics;

pub use metrics::*;

use crate::lifecycle::ActorSystem;
use crate::model::{AddComment, CreatePost, PostId, RegisterUser, UserId, Vote, VoteType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Password every simulated user registers with.
pub const SIMULATED_PASSWORD: &str = "password123";

/// Random post ids are drawn from `0..RANDOM_POST_IDS`.
pub const RANDOM_POST_IDS: u32 = 100;

/// How a simulation run is shaped.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub users: u32,
    pub actions_per_user: u32,
    /// Upper bound (exclusive) of the random pause between two actions of one user.
    pub max_delay: Duration,
    /// Seed for reproducible runs. Each user derives its own generator from it.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            users: 1000,
            actions_per_user: 10,
            max_delay: Duration::from_millis(1000),
            seed: None,
        }
    }
}

fn user_rng(seed: Option<u64>, user: u32) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(u64::from(user))),
        None => StdRng::from_entropy(),
    }
}

/// Runs the simulation and returns once every simulated user has finished.
pub async fn simulate_many_users(
    system: Arc<ActorSystem>,
    config: &SimulationConfig,
) -> SimulationReport {
    info!(
        users = config.users,
        actions_per_user = config.actions_per_user,
        "Starting simulation"
    );
    let resources_before = ResourceReport::sample();
    let started = Instant::now();
    let mut tasks = Vec::with_capacity(config.users as usize);

    for i in 1..=config.users {
        system.register_user(RegisterUser::new(format!("user{i}"), SIMULATED_PASSWORD));

        let system = Arc::clone(&system);
        let rng = user_rng(config.seed, i);
        let actions = config.actions_per_user;
        let max_delay = config.max_delay;
        tasks.push(tokio::spawn(async move {
            simulate_user(&system, UserId(i), rng, actions, max_delay).await
        }));
    }

    let mut metrics = Metrics::default();
    for task in tasks {
        match task.await {
            Ok(user_metrics) => metrics.merge(user_metrics),
            Err(e) => warn!(error = %e, "Simulated user failed"),
        }
    }

    let elapsed = started.elapsed();
    let report = SimulationReport::new(
        config.users,
        metrics,
        elapsed,
        resources_before,
        ResourceReport::sample(),
    );
    report.log();
    report
}

async fn simulate_user(
    system: &ActorSystem,
    user_id: UserId,
    mut rng: StdRng,
    actions: u32,
    max_delay: Duration,
) -> Metrics {
    let mut metrics = Metrics::default();
    let max_delay_ms = max_delay.as_millis() as u64;

    for n in 0..actions {
        let started = Instant::now();
        let action = match rng.gen_range(0..3) {
            0 => {
                system.create_post(CreatePost::new(
                    user_id,
                    format!("random{n}"),
                    format!("This is post by user {}", user_id.0),
                ));
                SimAction::Post
            }
            1 => {
                system.add_comment(AddComment::new(
                    user_id,
                    PostId(rng.gen_range(0..RANDOM_POST_IDS)),
                    format!("This is a comment by user {}", user_id.0),
                ));
                SimAction::Comment
            }
            _ => {
                system.vote_post(Vote::post(
                    user_id,
                    PostId(rng.gen_range(0..RANDOM_POST_IDS)),
                    VoteType::Upvote,
                ));
                SimAction::Vote
            }
        };
        metrics.record(action, started.elapsed());

        if max_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(rng.gen_range(0..max_delay_ms))).await;
        }
    }

    debug!(%user_id, actions, "Simulated user done");
    metrics
}
