//! Two-board turn orchestration: the player's fleet versus the
//! automated opponent.

use log::info;
use rand::Rng;

use crate::board::Board;
use crate::common::{AttackOutcome, BoardError};
use crate::coord::Coord;
use crate::selector::{Shot, TargetSelector};

/// Result of the game from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A full game: the player's board defended against the targeting
/// opponent, and the enemy fleet the player shoots back at.
pub struct Game {
    player_board: Board,
    enemy_board: Board,
    opponent: TargetSelector,
}

impl Game {
    pub fn new() -> Self {
        Game {
            player_board: Board::new(),
            enemy_board: Board::new(),
            opponent: TargetSelector::new(),
        }
    }

    /// Randomly place both fleets.
    pub fn setup<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.player_board.auto_place(rng)?;
        self.enemy_board.auto_place(rng)?;
        info!("fleets placed, game on");
        Ok(())
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// Mutable access for manual fleet placement before the first turn.
    pub fn player_board_mut(&mut self) -> &mut Board {
        &mut self.player_board
    }

    pub fn enemy_board(&self) -> &Board {
        &self.enemy_board
    }

    pub fn opponent(&self) -> &TargetSelector {
        &self.opponent
    }

    /// The player's attack on the enemy fleet.
    pub fn player_attack(&mut self, at: Coord) -> Result<AttackOutcome, BoardError> {
        self.enemy_board.receive_attack(at)
    }

    /// One opponent turn against the player's board. `Ok(None)` only
    /// when the board has no untried cell left.
    pub fn opponent_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<Shot>, BoardError> {
        self.opponent.fire(&mut self.player_board, rng)
    }

    pub fn status(&self) -> GameStatus {
        if self.enemy_board.all_sunk() {
            GameStatus::Won
        } else if self.player_board.all_sunk() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Full reset: both boards and the opponent's entire memory,
    /// attack ledger included.
    pub fn reset(&mut self) {
        self.player_board.reset();
        self.enemy_board.reset();
        self.opponent.reset();
        info!("game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
