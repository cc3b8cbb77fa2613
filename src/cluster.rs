//! Confirmed hits on the ship currently being chased, and the axis they
//! reveal.

use alloc::vec::Vec;

use crate::coord::Coord;
use crate::ship::Orientation;

/// Ordered set of confirmed hits on the current, not-yet-sunk target
/// ship. Empty whenever there is no active target.
#[derive(Debug, Clone, Default)]
pub struct HitCluster {
    hits: Vec<Coord>,
}

impl HitCluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a confirmed hit. Duplicates are ignored.
    pub fn push(&mut self, at: Coord) {
        if !self.hits.contains(&at) {
            self.hits.push(at);
        }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn members(&self) -> &[Coord] {
        &self.hits
    }

    /// Axis shared by all members: a common column means the ship runs
    /// vertically, a common row horizontally. `None` below two members,
    /// and `None` for non-collinear input (which a straight ship never
    /// produces; callers treat it as a no-op).
    pub fn orientation(&self) -> Option<Orientation> {
        let (first, rest) = self.hits.split_first()?;
        if rest.is_empty() {
            return None;
        }
        if rest.iter().all(|c| c.col == first.col) {
            Some(Orientation::Vertical)
        } else if rest.iter().all(|c| c.row == first.row) {
            Some(Orientation::Horizontal)
        } else {
            None
        }
    }

    /// Minimum and maximum member along `axis`. Panics on an empty
    /// cluster, which callers rule out by only asking after a hit.
    pub fn endpoints(&self, axis: Orientation) -> (Coord, Coord) {
        let mut first = self.hits[0];
        let mut last = self.hits[0];
        for &c in &self.hits[1..] {
            if c.along(axis) < first.along(axis) {
                first = c;
            }
            if c.along(axis) > last.along(axis) {
                last = c;
            }
        }
        (first, last)
    }

    /// Reset on sink.
    pub fn clear(&mut self) {
        self.hits.clear();
    }
}
