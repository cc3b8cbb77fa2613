use crate::ship::ShipClass;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

pub const NUM_SHIPS: usize = 5;

/// The standard fleet, largest first.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];

/// Total ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Map a ship name back to the canonical static name from the fleet
/// configuration, or `None` for an unknown ship.
pub fn canonical_ship_name(name: &str) -> Option<&'static str> {
    FLEET.iter().map(|class| class.name()).find(|n| *n == name)
}
