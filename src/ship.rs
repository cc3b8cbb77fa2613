//! Ship classes and placed ships, with hits tracked in a [`CellMask`].

use core::fmt;

use num_traits::{PrimInt, Unsigned};

use crate::common::BoardError;
use crate::coord::Coord;
use crate::grid::CellMask;

/// Axis a ship lies along. Horizontal ships span columns, vertical
/// ships span rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A kind of ship: display name and segment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on an N×N board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    class: ShipClass,
    orientation: Orientation,
    bow: Coord,
    occupied: CellMask<T, N>,
    damaged: CellMask<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned,
{
    /// Place a ship with its bow at `bow`, extending along `orientation`.
    pub fn place(class: ShipClass, orientation: Orientation, bow: Coord) -> Result<Self, BoardError> {
        let len = class.length();
        let fits = match orientation {
            Orientation::Horizontal => bow.col + len <= N,
            Orientation::Vertical => bow.row + len <= N,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }

        let occupied = CellMask::from_cells((0..len).map(|i| match orientation {
            Orientation::Horizontal => Coord::new(bow.row, bow.col + i),
            Orientation::Vertical => Coord::new(bow.row + i, bow.col),
        }))?;

        Ok(Ship {
            class,
            orientation,
            bow,
            occupied,
            damaged: CellMask::new(),
        })
    }

    /// Record damage at `at` if this ship occupies the cell. Returns whether
    /// the cell belongs to the ship.
    pub fn register_hit(&mut self, at: Coord) -> bool {
        if self.occupied.contains(at) {
            let _ = self.damaged.mark(at);
            true
        } else {
            false
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.damaged.count() == self.class.length()
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.occupied.contains(at)
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    /// Occupancy mask of this ship on the board.
    pub fn occupied(&self) -> CellMask<T, N> {
        self.occupied
    }

    /// Cells the ship occupies, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let bow = self.bow;
        let orientation = self.orientation;
        (0..self.class.length()).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(bow.row, bow.col + i),
            Orientation::Vertical => Coord::new(bow.row + i, bow.col),
        })
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ {} at {:?} {:?}, {}/{} damaged }}",
            self.class.name(),
            self.bow,
            self.orientation,
            self.damaged.count(),
            self.class.length(),
        )
    }
}
