//! Queue of candidate cells to try next, generated around confirmed hits.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::coord::Coord;
use crate::history::AttackHistory;
use crate::ship::Orientation;

/// Untried candidates around the active target. Entries may go stale
/// (attacked through another path by the time they surface); staleness
/// is resolved by filtering on pop, never by eager removal.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    queue: VecDeque<Coord>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue the in-bounds, unattacked orthogonal neighbors of `around`
    /// in randomized order, so repeated games don't favor one direction.
    pub fn push_neighbors<R: Rng + ?Sized>(
        &mut self,
        around: Coord,
        history: &AttackHistory,
        rng: &mut R,
    ) {
        let mut neighbors: Vec<Coord> = around.orthogonal_neighbors().collect();
        neighbors.shuffle(rng);
        for n in neighbors {
            if !history.contains(n) && !self.queue.contains(&n) {
                self.queue.push_back(n);
            }
        }
    }

    /// Replace all queued candidates with the two cells that extend the
    /// known run: one before `first` and one after `last` along `axis`.
    /// Off-board extensions are dropped.
    pub fn push_axis_endpoints(&mut self, first: Coord, last: Coord, axis: Orientation) {
        self.queue.clear();
        if let Some(before) = first.step_back(axis) {
            self.queue.push_back(before);
        }
        if let Some(after) = last.step_forward(axis) {
            self.queue.push_back(after);
        }
    }

    /// Next fresh candidate. Entries the history already knows are
    /// discarded, not requeued.
    pub fn pop(&mut self, history: &AttackHistory) -> Option<Coord> {
        while let Some(candidate) = self.queue.pop_front() {
            if !history.contains(candidate) {
                return Some(candidate);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queued candidates in pop order, stale entries included.
    pub fn candidates(&self) -> impl Iterator<Item = Coord> + '_ {
        self.queue.iter().copied()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
