//! # Reddit Engine
//!
//! Command-line entry point for the actor-based content engine.
//!
//! - `reddit-engine demo` registers a user, creates a subreddit and a post, upvotes it and
//!   prints the resulting state.
//! - `reddit-engine simulate` drives many concurrent simulated users through the engine.
//!
//! Logging is controlled by `RUST_LOG`, e.g. `RUST_LOG=info reddit-engine demo`.

use clap::{Parser, Subcommand};
use reddit_engine::lifecycle::{setup_tracing, ActorSystem, SystemConfig};
use reddit_engine::model::{
    AddComment, CreatePost, CreateSubreddit, PostId, RegisterUser, UserId, Vote, VoteType,
};
use reddit_engine::simulator::{simulate_many_users, SimulationConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Instrument};

#[derive(Parser)]
#[command(name = "reddit-engine")]
#[command(version, about = "An actor-based Reddit-style content engine", long_about = None)]
struct Cli {
    /// How long queries wait for an actor's reply, in milliseconds
    #[arg(long, env = "REDDIT_QUERY_TIMEOUT_MS", default_value_t = 5000)]
    query_timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the end-to-end scenario and print the final state
    Demo,

    /// Simulate many concurrent users
    Simulate {
        /// Number of simulated users
        #[arg(long, default_value_t = 1000)]
        users: u32,

        /// Actions performed by each user
        #[arg(long, default_value_t = 10)]
        actions: u32,

        /// Upper bound of the random pause between actions, in milliseconds
        #[arg(long, default_value_t = 1000)]
        max_delay_ms: u64,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let cli = Cli::parse();

    let query_timeout = Duration::from_millis(cli.query_timeout_ms);
    let config = SystemConfig::default().with_query_timeout(query_timeout);
    let system = ActorSystem::with_config(config);

    match cli.command {
        Commands::Demo => {
            let span = tracing::info_span!("demo");
            run_demo(&system).instrument(span).await?;
        }
        Commands::Simulate {
            users,
            actions,
            max_delay_ms,
            seed,
        } => {
            let sim = SimulationConfig {
                users,
                actions_per_user: actions,
                max_delay: Duration::from_millis(max_delay_ms),
                seed,
            };
            let system = Arc::new(system);
            let report = simulate_many_users(Arc::clone(&system), &sim).await;

            let users = system.get_all_users().await.map_err(|e| e.to_string())?;
            info!(
                registered = users.len(),
                actions = report.total_actions,
                "Simulation complete"
            );
            return shutdown(system).await;
        }
    }

    system.shutdown().await.map_err(|e| e.to_string())?;
    info!("Application completed successfully");
    Ok(())
}

async fn run_demo(system: &ActorSystem) -> Result<(), String> {
    info!("Running demo scenario");

    system.register_user(RegisterUser::new("alice", "pw1"));
    system.register_user(RegisterUser::new("bob", "pw2"));
    system.create_subreddit(CreateSubreddit::new("golang"));
    system.create_subreddit(CreateSubreddit::new("golang"));
    system.create_post(CreatePost::new(UserId(1), "golang", "hello"));
    system.add_comment(AddComment::new(UserId(2), PostId(1), "welcome"));
    system.vote_post(Vote::post(UserId(2), PostId(1), VoteType::Upvote));

    // Answered after the vote, so the karma update is already queued for the User actor
    let posts = system.get_all_posts().await.map_err(|e| e.to_string())?;
    for post in posts.values() {
        info!(
            id = %post.id,
            author = %post.user_id,
            subreddit = %post.subreddit,
            upvotes = post.upvotes,
            downvotes = post.downvotes,
            comments = post.comments.len(),
            "Post"
        );
    }

    let subreddits = system
        .get_all_subreddits()
        .await
        .map_err(|e| e.to_string())?;
    for subreddit in subreddits.values() {
        info!(id = %subreddit.id, name = %subreddit.name, "Subreddit");
    }

    let users = system.get_all_users().await.map_err(|e| e.to_string())?;
    let mut users: Vec<_> = users.into_values().collect();
    users.sort_by_key(|u| u.id);
    for user in users {
        info!(id = %user.id, username = %user.username, karma = user.karma, "User");
    }
    Ok(())
}

async fn shutdown(system: Arc<ActorSystem>) -> Result<(), String> {
    let system = Arc::try_unwrap(system)
        .map_err(|_| "Actor system is still shared after the simulation".to_string())?;
    system.shutdown().await.map_err(|e| e.to_string())?;
    info!("Application completed successfully");
    Ok(())
}
