//! Grid coordinates and the orthogonal neighborhood used by targeting.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// A cell on the board, compared by value. `row` and `col` are both in
/// `[0, BOARD_SIZE)` for any coordinate produced by this crate.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Whether the coordinate lies on the standard board.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The ≤4 orthogonal neighbors that stay on the board.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            (row + 1 < BOARD_SIZE).then(|| Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            (col + 1 < BOARD_SIZE).then(|| Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// One step towards the board origin along `axis`, if still on the board.
    pub fn step_back(self, axis: Orientation) -> Option<Coord> {
        match axis {
            Orientation::Horizontal => self.col.checked_sub(1).map(|c| Coord::new(self.row, c)),
            Orientation::Vertical => self.row.checked_sub(1).map(|r| Coord::new(r, self.col)),
        }
    }

    /// One step away from the board origin along `axis`, if still on the board.
    pub fn step_forward(self, axis: Orientation) -> Option<Coord> {
        match axis {
            Orientation::Horizontal => {
                (self.col + 1 < BOARD_SIZE).then(|| Coord::new(self.row, self.col + 1))
            }
            Orientation::Vertical => {
                (self.row + 1 < BOARD_SIZE).then(|| Coord::new(self.row + 1, self.col))
            }
        }
    }

    /// Position along `axis`: the column for horizontal, the row for vertical.
    pub fn along(self, axis: Orientation) -> usize {
        match axis {
            Orientation::Horizontal => self.col,
            Orientation::Vertical => self.row,
        }
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Renders as column letter plus one-based row, e.g. `C7`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", col, self.row + 1)
    }
}
