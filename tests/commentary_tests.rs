use std::sync::Arc;
use std::time::{Duration, Instant};

use gunnery::{
    fallback_line, Board, CannedCommentary, CommentaryFeed, CommentarySource, EventContext,
    EventKind, TargetSelector,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

struct FixedSource(&'static str);

#[async_trait::async_trait]
impl CommentarySource for FixedSource {
    async fn get_text(&self, _event: EventKind, _ctx: &EventContext) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

struct FailingSource;

#[async_trait::async_trait]
impl CommentarySource for FailingSource {
    async fn get_text(&self, _event: EventKind, _ctx: &EventContext) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("service unreachable"))
    }
}

struct SlowSource;

#[async_trait::async_trait]
impl CommentarySource for SlowSource {
    async fn get_text(&self, _event: EventKind, _ctx: &EventContext) -> anyhow::Result<String> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok("too late".to_string())
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_working_source_line_is_attached() {
    let feed = CommentaryFeed::new(Arc::new(FixedSource("Fire for effect!")), Duration::from_secs(1));
    let line = feed
        .dispatch(EventKind::Hit, EventContext::default())
        .wait()
        .await;
    assert_eq!(line, "Fire for effect!");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failure_degrades_to_fallback() {
    let feed = CommentaryFeed::new(Arc::new(FailingSource), Duration::from_secs(1));
    let line = feed
        .dispatch(EventKind::Miss, EventContext::default())
        .wait()
        .await;
    assert_eq!(line, fallback_line(EventKind::Miss));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_timeout_degrades_to_fallback() {
    let feed = CommentaryFeed::new(Arc::new(SlowSource), Duration::from_millis(50));
    let start = Instant::now();
    let line = feed
        .dispatch(EventKind::Sink, EventContext::default())
        .wait()
        .await;
    assert_eq!(line, fallback_line(EventKind::Sink));
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_text_degrades_to_fallback() {
    let feed = CommentaryFeed::new(Arc::new(FixedSource("   ")), Duration::from_secs(1));
    let line = feed
        .dispatch(EventKind::Win, EventContext::default())
        .wait()
        .await;
    assert_eq!(line, fallback_line(EventKind::Win));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_disabled_feed_resolves_immediately() {
    let feed = CommentaryFeed::disabled();
    let mut handle = feed.dispatch(EventKind::GameStart, EventContext::default());
    assert_eq!(
        handle.try_take().as_deref(),
        Some(fallback_line(EventKind::GameStart))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dispatch_never_blocks_the_turn() {
    let feed = CommentaryFeed::new(Arc::new(SlowSource), Duration::from_secs(5));

    let start = Instant::now();
    let handle = feed.dispatch(EventKind::Hit, EventContext::default());
    assert!(
        start.elapsed() < Duration::from_millis(100),
        "dispatch must return before the fetch resolves"
    );

    // the next move proceeds while the fetch is still in flight
    let mut board = Board::new();
    let mut selector = TargetSelector::new();
    let mut rng = SmallRng::seed_from_u64(1);
    let shot = selector.fire(&mut board, &mut rng).unwrap();
    assert!(shot.is_some());

    drop(handle);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_canned_source_always_answers() {
    let feed = CommentaryFeed::new(Arc::new(CannedCommentary), Duration::from_secs(1));
    for event in [
        EventKind::GameStart,
        EventKind::Hit,
        EventKind::Miss,
        EventKind::Sink,
        EventKind::Win,
        EventKind::Lose,
        EventKind::PlayerHit,
        EventKind::PlayerMiss,
        EventKind::PlayerSink,
    ] {
        let line = feed.dispatch(event, EventContext::default()).wait().await;
        assert!(!line.is_empty());
    }
}
