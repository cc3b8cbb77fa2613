//! Hunt/target move selection against a hidden fleet.
//!
//! The selector starts hunting (randomized search), switches to target
//! mode when an attack lands, chases the wounded ship through its
//! orthogonal neighborhood, and collapses to a two-ended axis probe as
//! soon as a second hit reveals the ship's orientation. Sinking the ship
//! drops it back to hunting.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::cluster::HitCluster;
use crate::common::{AttackOutcome, BoardError};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::frontier::Frontier;
use crate::history::AttackHistory;
use crate::ship::Orientation;

/// Search phase of the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No active target; scanning for any ship.
    Hunt,
    /// Chasing a partially-hit, not-yet-sunk ship.
    Target,
}

/// A chosen coordinate together with what it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub coord: Coord,
    pub outcome: AttackOutcome,
}

/// Bound on random rejection sampling before falling back to a
/// deterministic scan of the grid.
const HUNT_SAMPLE_CAP: usize = 1000;

/// The opponent's targeting brain. Owns the attack ledger, the candidate
/// frontier and the hit cluster for the ship currently under fire.
#[derive(Debug, Default)]
pub struct TargetSelector {
    mode: Mode,
    history: AttackHistory,
    frontier: Frontier,
    cluster: HitCluster,
    axis: Option<Orientation>,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Hunt
    }
}

impl TargetSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn history(&self) -> &AttackHistory {
        &self.history
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn cluster(&self) -> &HitCluster {
        &self.cluster
    }

    /// Inferred axis of the current target ship, once two hits have
    /// revealed it.
    pub fn axis(&self) -> Option<Orientation> {
        self.axis
    }

    /// Choose the next cell to attack, or `None` once every cell has
    /// been tried — the normal end of a finished board, not an error.
    ///
    /// Frontier candidates go first (stale ones are discarded on pop);
    /// with the frontier dry the selector returns to hunting: random
    /// sampling with a bounded number of rejections, then a row-major
    /// scan for the first untried cell so termination never depends on
    /// luck near a full board.
    pub fn next_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        if let Some(candidate) = self.frontier.pop(&self.history) {
            return Some(candidate);
        }

        if self.mode != Mode::Hunt {
            debug!("frontier exhausted, back to hunt mode");
            self.mode = Mode::Hunt;
        }

        for _ in 0..HUNT_SAMPLE_CAP {
            let pick = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if !self.history.contains(pick) {
                return Some(pick);
            }
        }

        self.history.first_untried()
    }

    /// Run one full turn: sync the ledger against the board, choose a
    /// cell, attack it, and fold the outcome back into the targeting
    /// state. `Ok(None)` means the board is exhausted.
    ///
    /// A board error propagates without touching the cluster or
    /// frontier, so a misbehaving collaborator cannot corrupt the chase.
    pub fn fire<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<Option<Shot>, BoardError> {
        self.history.absorb(board.attacked_mask());

        let coord = match self.next_move(rng) {
            Some(coord) => coord,
            None => return Ok(None),
        };

        let outcome = board.receive_attack(coord)?;
        self.apply_outcome(coord, outcome, rng);
        Ok(Some(Shot { coord, outcome }))
    }

    /// Fold one attack outcome into the ledger, cluster and frontier.
    /// Exposed so a driver that applies attacks itself can still route
    /// results through the selector.
    pub fn apply_outcome<R: Rng + ?Sized>(
        &mut self,
        coord: Coord,
        outcome: AttackOutcome,
        rng: &mut R,
    ) {
        self.history.record(coord);

        match outcome {
            AttackOutcome::Miss => {
                // A wrong direction guess; remaining frontier entries
                // keep the other directions alive.
                debug!("miss at {}", coord);
            }
            AttackOutcome::Hit => {
                self.mode = Mode::Target;
                self.cluster.push(coord);
                debug!("hit at {}, cluster size {}", coord, self.cluster.len());
                if self.cluster.len() == 1 {
                    self.frontier.push_neighbors(coord, &self.history, rng);
                } else {
                    self.refit_frontier_to_axis(coord, rng);
                }
            }
            AttackOutcome::Sunk(name) => {
                debug!("sunk {} at {}", name, coord);
                self.mode = Mode::Hunt;
                self.cluster.clear();
                self.axis = None;
                // Queued candidates are dropped wholesale, even ones that
                // could belong to a neighboring ship; hunting rediscovers
                // those.
                self.frontier.clear();
            }
        }
    }

    /// With two or more hits on the target, pin the axis (once) and
    /// narrow the frontier to the two cells extending the known run,
    /// superseding any off-axis neighbors queued earlier.
    fn refit_frontier_to_axis<R: Rng + ?Sized>(&mut self, latest: Coord, rng: &mut R) {
        if self.axis.is_none() {
            self.axis = self.cluster.orientation();
        }
        match self.axis {
            Some(axis) => {
                let (first, last) = self.cluster.endpoints(axis);
                self.frontier.push_axis_endpoints(first, last, axis);
            }
            None => {
                // Non-collinear cluster; a straight ship cannot produce
                // this, so just keep exploring around the newest hit.
                debug!("cluster not collinear, keeping neighbor search");
                self.frontier.push_neighbors(latest, &self.history, rng);
            }
        }
    }

    /// Full game reset: forgets the attack ledger along with any active
    /// chase.
    pub fn reset(&mut self) {
        self.mode = Mode::Hunt;
        self.history.clear();
        self.frontier.clear();
        self.cluster.clear();
        self.axis = None;
    }
}
