//! Board state: fleet placement, incoming attacks, hit/miss record.

use alloc::vec::Vec;

use rand::Rng;

use crate::common::{AttackOutcome, BoardError};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::coord::Coord;
use crate::grid::CellMask;
use crate::ship::{Orientation, Ship};

/// Mask covering the standard board.
pub type BoardMask = CellMask<u128, BOARD_SIZE>;

/// One side's board: placed ships plus everything the opponent has done
/// to it. The attacked record (`hits | misses`) is the ground truth a
/// targeting ledger cross-checks against.
pub struct Board {
    ships: [Option<Ship<u128, BOARD_SIZE>>; NUM_SHIPS],
    ship_map: BoardMask,
    hits: BoardMask,
    misses: BoardMask,
}

impl Board {
    /// Empty board, no ships placed.
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: BoardMask::new(),
            hits: BoardMask::new(),
            misses: BoardMask::new(),
        }
    }

    /// Place the fleet ship at `index` with its bow at `bow`.
    pub fn place(
        &mut self,
        index: usize,
        bow: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if index >= NUM_SHIPS {
            return Err(BoardError::InvalidShipIndex);
        }
        if self.ships[index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::place(FLEET[index], orientation, bow)?;
        if self.ship_map.overlaps(&ship.occupied()) {
            return Err(BoardError::ShipOverlap);
        }
        self.ship_map |= ship.occupied();
        self.ships[index] = Some(ship);
        Ok(())
    }

    /// Find a random non-overlapping placement for the ship at `index`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        index: usize,
    ) -> Result<(Coord, Orientation), BoardError> {
        if index >= NUM_SHIPS {
            return Err(BoardError::InvalidShipIndex);
        }
        let len = FLEET[index].length();
        for _ in 0..100 {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - len),
                Orientation::Vertical => (BOARD_SIZE - len, BOARD_SIZE - 1),
            };
            let bow = Coord::new(rng.random_range(0..=max_row), rng.random_range(0..=max_col));
            let ship = Ship::<u128, BOARD_SIZE>::place(FLEET[index], orientation, bow)?;
            if !self.ship_map.overlaps(&ship.occupied()) {
                return Ok((bow, orientation));
            }
        }
        Err(BoardError::PlacementExhausted)
    }

    /// Randomly place every ship of the fleet.
    pub fn auto_place<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for index in 0..NUM_SHIPS {
            let (bow, orientation) = self.random_placement(rng, index)?;
            self.place(index, bow, orientation)?;
        }
        Ok(())
    }

    /// Resolve an incoming attack. Attacking the same cell twice is an
    /// error rather than a silent repeat.
    pub fn receive_attack(&mut self, at: Coord) -> Result<AttackOutcome, BoardError> {
        if self.hits.test(at)? || self.misses.test(at)? {
            return Err(BoardError::AlreadyAttacked);
        }
        if !self.ship_map.test(at)? {
            self.misses.mark(at)?;
            return Ok(AttackOutcome::Miss);
        }
        self.hits.mark(at)?;
        for slot in self.ships.iter_mut() {
            if let Some(ship) = slot {
                if ship.register_hit(at) {
                    if ship.is_sunk() {
                        return Ok(AttackOutcome::Sunk(ship.class().name()));
                    }
                    return Ok(AttackOutcome::Hit);
                }
            }
        }
        // ship_map said occupied but no ship claimed the cell
        Err(BoardError::UnknownShipHit)
    }

    /// Every cell ever attacked, hit or miss.
    pub fn attacked_mask(&self) -> BoardMask {
        self.hits | self.misses
    }

    /// Attacked cells as a list, row-major.
    pub fn attacked_coords(&self) -> Vec<Coord> {
        self.attacked_mask().iter_marked().collect()
    }

    pub fn hits(&self) -> BoardMask {
        self.hits
    }

    pub fn misses(&self) -> BoardMask {
        self.misses
    }

    pub fn ship_map(&self) -> BoardMask {
        self.ship_map
    }

    /// Whether every placed ship is sunk. An empty board counts as sunk
    /// only once at least one ship has been placed.
    pub fn all_sunk(&self) -> bool {
        let mut placed = 0;
        for ship in self.ships.iter().flatten() {
            if !ship.is_sunk() {
                return false;
            }
            placed += 1;
        }
        placed > 0
    }

    /// Ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.ships
            .iter()
            .flatten()
            .filter(|ship| !ship.is_sunk())
            .count()
    }

    /// Clear ships and attack record for a fresh game.
    pub fn reset(&mut self) {
        self.ships = [None; NUM_SHIPS];
        self.ship_map.clear_all();
        self.hits.clear_all();
        self.misses.clear_all();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Board {{ ships: {:?}, hits: {}, misses: {} }}",
            self.ships,
            self.hits.count(),
            self.misses.count(),
        )
    }
}
