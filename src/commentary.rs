#![cfg(feature = "std")]

//! Decorative battle commentary, fetched off the turn path.
//!
//! A [`CommentaryFeed`] dispatches one fetch per game event on a
//! background task and hands back a handle the caller can poll or await
//! later. The fetch is bounded by a timeout and every failure path
//! resolves to a canned line, so commentary can never stall or fail a
//! turn — targeting state is entirely oblivious to it.

use std::sync::Arc;
use std::time::Duration;

use log::warn;
use rand::Rng;
use tokio::sync::oneshot;

use crate::common::AttackOutcome;
use crate::coord::Coord;

/// Game moments worth a line of banter. The `Player*` variants describe
/// the player's attacks on the commentator's own fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    GameStart,
    Hit,
    Miss,
    Sink,
    Win,
    Lose,
    PlayerHit,
    PlayerMiss,
    PlayerSink,
}

impl EventKind {
    /// Event for an attack the commentator just made.
    pub fn from_outcome(outcome: &AttackOutcome) -> Self {
        match outcome {
            AttackOutcome::Hit => EventKind::Hit,
            AttackOutcome::Miss => EventKind::Miss,
            AttackOutcome::Sunk(_) => EventKind::Sink,
        }
    }

    /// Event for an attack landing on the commentator's fleet.
    pub fn from_player_outcome(outcome: &AttackOutcome) -> Self {
        match outcome {
            AttackOutcome::Hit => EventKind::PlayerHit,
            AttackOutcome::Miss => EventKind::PlayerMiss,
            AttackOutcome::Sunk(_) => EventKind::PlayerSink,
        }
    }
}

/// Where and what the event happened to, for flavor.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventContext {
    pub coord: Option<Coord>,
    pub ship: Option<&'static str>,
}

impl EventContext {
    pub fn at(coord: Coord) -> Self {
        EventContext {
            coord: Some(coord),
            ship: None,
        }
    }

    pub fn ship(mut self, name: &'static str) -> Self {
        self.ship = Some(name);
        self
    }
}

/// A provider of narrative text, typically remote. Errors and timeouts
/// are the feed's problem; implementations just report them.
#[async_trait::async_trait]
pub trait CommentarySource: Send + Sync {
    async fn get_text(&self, event: EventKind, ctx: &EventContext) -> anyhow::Result<String>;
}

fn lines_for(event: EventKind) -> &'static [&'static str] {
    match event {
        EventKind::GameStart => &[
            "Enemy fleet sighted. All batteries stand by.",
            "Condition one. Let's see what they've got.",
        ],
        EventKind::Hit => &[
            "Direct hit! Keep the guns on that bearing.",
            "Contact confirmed. Pour it on.",
        ],
        EventKind::Miss => &[
            "Splash, no contact. Adjusting fire.",
            "Wide. Recompute the solution.",
        ],
        EventKind::Sink => &[
            "Enemy vessel destroyed. Good shooting.",
            "She's going down. Next target.",
        ],
        EventKind::Win => &[
            "The enemy fleet is on the bottom. Well fought.",
            "Victory. Secure the guns.",
        ],
        EventKind::Lose => &[
            "Our fleet is lost. Strike the colors.",
            "We're done. You fought well.",
        ],
        EventKind::PlayerHit => &[
            "We're hit! Damage control, report.",
            "They found us. Brace for the next salvo.",
        ],
        EventKind::PlayerMiss => &[
            "Their salvo went wide. Hold steady.",
            "Close, but the sea took it.",
        ],
        EventKind::PlayerSink => &[
            "We lost a ship. Make them pay for it.",
            "She's gone. Avenge her.",
        ],
    }
}

/// The canned line substituted when no source answers in time.
pub fn fallback_line(event: EventKind) -> &'static str {
    lines_for(event)[0]
}

/// Offline source that picks a random canned line per event. Useful for
/// play without a remote text service and for tests.
pub struct CannedCommentary;

#[async_trait::async_trait]
impl CommentarySource for CannedCommentary {
    async fn get_text(&self, event: EventKind, _ctx: &EventContext) -> anyhow::Result<String> {
        let lines = lines_for(event);
        let pick = rand::rng().random_range(0..lines.len());
        Ok(lines[pick].to_string())
    }
}

/// Resolves to the commentary line for one dispatched event.
pub struct CommentaryHandle {
    event: EventKind,
    rx: oneshot::Receiver<String>,
}

impl CommentaryHandle {
    /// The line, if it has already arrived.
    pub fn try_take(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }

    /// Wait for the line. Infallible: a vanished task yields the canned
    /// fallback.
    pub async fn wait(self) -> String {
        let event = self.event;
        self.rx
            .await
            .unwrap_or_else(|_| fallback_line(event).to_string())
    }
}

/// Dispatches commentary fetches without ever blocking the caller.
pub struct CommentaryFeed {
    source: Option<Arc<dyn CommentarySource>>,
    timeout: Duration,
}

impl CommentaryFeed {
    pub fn new(source: Arc<dyn CommentarySource>, timeout: Duration) -> Self {
        CommentaryFeed {
            source: Some(source),
            timeout,
        }
    }

    /// A feed with no source; every handle resolves immediately to the
    /// canned line.
    pub fn disabled() -> Self {
        CommentaryFeed {
            source: None,
            timeout: Duration::ZERO,
        }
    }

    /// Kick off the fetch for `event` and return at once. The spawned
    /// task always sends something: the source's line, or the canned
    /// fallback on error, empty text, or timeout.
    pub fn dispatch(&self, event: EventKind, ctx: EventContext) -> CommentaryHandle {
        let (tx, rx) = oneshot::channel();
        match &self.source {
            None => {
                let _ = tx.send(fallback_line(event).to_string());
            }
            Some(source) => {
                let source = Arc::clone(source);
                let ttl = self.timeout;
                tokio::spawn(async move {
                    let line = match tokio::time::timeout(ttl, source.get_text(event, &ctx)).await
                    {
                        Ok(Ok(text)) if !text.trim().is_empty() => text,
                        Ok(Ok(_)) => fallback_line(event).to_string(),
                        Ok(Err(err)) => {
                            warn!("commentary fetch failed: {:#}", err);
                            fallback_line(event).to_string()
                        }
                        Err(_) => {
                            warn!("commentary fetch timed out after {:?}", ttl);
                            fallback_line(event).to_string()
                        }
                    };
                    let _ = tx.send(line);
                });
            }
        }
        CommentaryHandle { event, rx }
    }
}
