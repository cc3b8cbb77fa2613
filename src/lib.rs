#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cluster;
mod common;
#[cfg(feature = "std")]
mod commentary;
mod config;
mod coord;
mod frontier;
mod game;
mod grid;
mod history;
#[cfg(feature = "std")]
mod logging;
mod selector;
mod ship;

pub use board::{Board, BoardMask};
pub use cluster::HitCluster;
pub use common::{AttackOutcome, BoardError};
#[cfg(feature = "std")]
pub use commentary::{
    fallback_line, CannedCommentary, CommentaryFeed, CommentaryHandle, CommentarySource,
    EventContext, EventKind,
};
pub use config::{canonical_ship_name, BOARD_SIZE, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};
pub use coord::Coord;
pub use frontier::Frontier;
pub use game::{Game, GameStatus};
pub use grid::{CellMask, GridError};
pub use history::AttackHistory;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use selector::{Mode, Shot, TargetSelector};
pub use ship::{Orientation, Ship, ShipClass};
