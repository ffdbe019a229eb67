use reddit_engine::lifecycle::ActorSystem;
use reddit_engine::model::{
    AddComment, CommentId, CreatePost, CreateSubreddit, PostId, RegisterUser, SubredditId, UserId,
    Vote, VoteTarget, VoteType,
};
use reddit_engine::simulator::{simulate_many_users, SimulationConfig};
use std::sync::Arc;
use std::time::Duration;

/// Full end-to-end test with all real actors.
#[tokio::test]
async fn test_upvote_flows_into_author_karma() {
    let system = ActorSystem::new();

    system.register_user(RegisterUser::new("alice", "pw1"));
    let users = system.get_all_users().await.expect("Failed to get users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[&UserId(1)].username, "alice");
    assert_eq!(users[&UserId(1)].password, "pw1");
    assert_eq!(users[&UserId(1)].karma, 0);

    system.create_post(CreatePost::new(UserId(1), "golang", "hello"));
    let post = system
        .get_post(PostId(1))
        .await
        .expect("Failed to get post")
        .expect("Post not found");
    assert_eq!(post.user_id, UserId(1));
    assert_eq!(post.subreddit, "golang");
    assert_eq!((post.upvotes, post.downvotes), (0, 0));

    system.vote_post(Vote::post(UserId(1), PostId(1), VoteType::Upvote));
    let post = system.get_post(PostId(1)).await.unwrap().unwrap();
    assert_eq!(post.upvotes, 1);

    let users = system.get_all_users().await.unwrap();
    assert_eq!(users[&UserId(1)].karma, 1);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_downvote_lowers_author_karma() {
    let system = ActorSystem::new();

    system.register_user(RegisterUser::new("alice", "pw1"));
    system.register_user(RegisterUser::new("bob", "pw2"));
    system.create_post(CreatePost::new(UserId(2), "rust", "borrowck"));
    system.vote_post(Vote::post(UserId(1), PostId(1), VoteType::Downvote));
    system.vote_post(Vote::post(UserId(1), PostId(1), VoteType::Downvote));
    system.vote_post(Vote::post(UserId(1), PostId(1), VoteType::Upvote));

    let posts = system.get_all_posts().await.unwrap();
    let post = &posts[&PostId(1)];
    assert_eq!((post.upvotes, post.downvotes), (1, 2));

    let users = system.get_all_users().await.unwrap();
    assert_eq!(users[&UserId(2)].karma, -1);
    assert_eq!(users[&UserId(1)].karma, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_get_gap_free_ids() {
    let system = Arc::new(ActorSystem::new());

    let mut tasks = Vec::new();
    for t in 0..10 {
        let system = Arc::clone(&system);
        tasks.push(tokio::spawn(async move {
            for n in 0..100 {
                system.register_user(RegisterUser::new(format!("user{t}_{n}"), "pw"));
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let users = system.get_all_users().await.unwrap();
    assert_eq!(users.len(), 1000);
    let mut ids: Vec<u32> = users.keys().map(|id| id.0).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=1000).collect::<Vec<_>>());
    assert!(users.iter().all(|(id, user)| *id == user.id));

    let system = Arc::try_unwrap(system).ok().unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_usernames_are_allowed() {
    let system = ActorSystem::new();

    system.register_user(RegisterUser::new("alice", "pw1"));
    system.register_user(RegisterUser::new("alice", "other"));

    let users = system.get_all_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[&UserId(2)].username, "alice");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_subreddit_is_rejected() {
    let system = ActorSystem::new();

    system.create_subreddit(CreateSubreddit::new("golang"));
    system.create_subreddit(CreateSubreddit::new("golang"));
    system.create_subreddit(CreateSubreddit::new("rust"));

    let subreddits = system.get_all_subreddits().await.unwrap();
    assert_eq!(subreddits.len(), 2);
    assert_eq!(subreddits["golang"].id, SubredditId(1));
    // The rejected duplicate did not use up an id
    assert_eq!(subreddits["rust"].id, SubredditId(2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_comment_on_unknown_post_changes_nothing() {
    let system = ActorSystem::new();

    system.create_post(CreatePost::new(UserId(1), "golang", "hello"));
    system.add_comment(AddComment::new(UserId(1), PostId(1), "first"));
    system.add_comment(AddComment::new(UserId(1), PostId(9), "lost"));
    system.add_comment(AddComment::new(UserId(2), PostId(1), "reply").reply_to(CommentId(1)));

    let posts = system.get_all_posts().await.unwrap();
    assert_eq!(posts.len(), 1);
    let comments = &posts[&PostId(1)].comments;
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, CommentId(1));
    assert_eq!(comments[0].parent_id, None);
    assert_eq!(comments[1].id, CommentId(2));
    assert_eq!(comments[1].parent_id, Some(CommentId(1)));
    assert!(posts.values().all(|p| p.id == PostId(1)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_comment_vote_has_no_effect() {
    let system = ActorSystem::new();

    system.register_user(RegisterUser::new("alice", "pw1"));
    system.create_post(CreatePost::new(UserId(1), "golang", "hello"));
    system.add_comment(AddComment::new(UserId(1), PostId(1), "first"));
    system.vote_post(Vote::comment(UserId(1), CommentId(1), VoteType::Upvote));
    system.vote_post(Vote {
        user_id: UserId(1),
        target: VoteTarget::Comment,
        id: 1,
        vote_type: VoteType::Downvote,
    });

    let post = system.get_post(PostId(1)).await.unwrap().unwrap();
    assert_eq!((post.upvotes, post.downvotes), (0, 0));
    assert_eq!(
        (post.comments[0].upvotes, post.comments[0].downvotes),
        (0, 0)
    );

    let users = system.get_all_users().await.unwrap();
    assert_eq!(users[&UserId(1)].karma, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_vote_on_unknown_post_changes_nothing() {
    let system = ActorSystem::new();

    system.register_user(RegisterUser::new("alice", "pw1"));
    system.create_post(CreatePost::new(UserId(1), "golang", "hello"));
    system.vote_post(Vote::post(UserId(1), PostId(2), VoteType::Upvote));
    system.vote_post(Vote::post(UserId(1), PostId(0), VoteType::Upvote));

    let post = system.get_post(PostId(1)).await.unwrap().unwrap();
    assert_eq!(post.upvotes, 0);
    assert!(system.get_post(PostId(2)).await.unwrap().is_none());

    let users = system.get_all_users().await.unwrap();
    assert_eq!(users[&UserId(1)].karma, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_karma_for_unknown_author_is_dropped() {
    let system = ActorSystem::new();

    system.register_user(RegisterUser::new("alice", "pw1"));
    // Posts are not checked against the user partition
    system.create_post(CreatePost::new(UserId(42), "golang", "ghost"));
    system.vote_post(Vote::post(UserId(1), PostId(1), VoteType::Upvote));

    let post = system.get_post(PostId(1)).await.unwrap().unwrap();
    assert_eq!(post.upvotes, 1);

    let users = system.get_all_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[&UserId(1)].karma, 0);
    assert!(!users.contains_key(&UserId(42)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_snapshots_are_detached() {
    let system = ActorSystem::new();

    system.register_user(RegisterUser::new("alice", "pw1"));
    system.create_post(CreatePost::new(UserId(1), "golang", "hello"));
    let mut before = system.get_all_users().await.unwrap();
    before.clear();

    system.vote_post(Vote::post(UserId(1), PostId(1), VoteType::Upvote));
    system.get_all_posts().await.unwrap();

    let after = system.get_all_users().await.unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[&UserId(1)].karma, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_seeded_simulation_registers_every_user() {
    let system = Arc::new(ActorSystem::new());
    let config = SimulationConfig {
        users: 25,
        actions_per_user: 4,
        max_delay: Duration::from_millis(5),
        seed: Some(42),
    };

    let report = simulate_many_users(Arc::clone(&system), &config).await;

    assert_eq!(report.users, 25);
    assert_eq!(report.total_actions, 100);
    assert_eq!(report.action_counts.values().sum::<u64>(), 100);
    assert_eq!(report.resources_before.runtime_workers, 4);
    assert_eq!(report.resources_after.runtime_workers, 4);
    assert!(report.resources_before.available_parallelism >= 1);

    let users = system.get_all_users().await.unwrap();
    assert_eq!(users.len(), 25);
    for i in 1..=25 {
        assert_eq!(users[&UserId(i)].username, format!("user{i}"));
        assert_eq!(users[&UserId(i)].password, "password123");
    }

    let posts = system.get_all_posts().await.unwrap();
    let upvotes: u32 = posts.values().map(|p| p.upvotes).sum();
    let karma: i64 = system
        .get_all_users()
        .await
        .unwrap()
        .values()
        .map(|u| u.karma)
        .sum();
    // Every counted upvote sent exactly one karma update, and all authors are registered
    assert_eq!(karma, i64::from(upvotes));

    let system = Arc::try_unwrap(system).ok().unwrap();
    system.shutdown().await.unwrap();
}
