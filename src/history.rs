//! Append-only ledger of every cell already attacked.

use crate::board::BoardMask;
use crate::coord::Coord;

/// Dedup record consulted before every attack. Lives for the opponent's
/// whole lifetime; only a full game reset clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackHistory {
    attacked: BoardMask,
}

impl AttackHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a cell as attacked. Idempotent; off-board cells are ignored.
    pub fn record(&mut self, at: Coord) {
        let _ = self.attacked.mark(at);
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.attacked.contains(at)
    }

    /// Merge the board's own attacked record so the ledger can never lag
    /// behind attacks made outside this opponent.
    pub fn absorb(&mut self, board_record: BoardMask) {
        self.attacked |= board_record;
    }

    pub fn count(&self) -> usize {
        self.attacked.count()
    }

    /// No untried cell remains anywhere on the board.
    pub fn is_exhausted(&self) -> bool {
        self.attacked.is_full()
    }

    /// First untried cell in row-major order, if any.
    pub fn first_untried(&self) -> Option<Coord> {
        self.attacked.first_unmarked()
    }

    /// Full-reset only; never called on a ship sinking.
    pub fn clear(&mut self) {
        self.attacked.clear_all();
    }
}
