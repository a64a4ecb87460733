//! Placed tiles

use crate::spatial::catalog::PartId;

/// A part bound to a grid cell
///
/// Created once, the first time its cell is resolved, and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Part occupying the cell
    pub part: PartId,
    /// Grid coordinates (x, y)
    pub position: [i32; 2],
}

impl Tile {
    /// Bind a part to a grid cell
    pub const fn new(part: PartId, position: [i32; 2]) -> Self {
        Self { part, position }
    }

    /// Grid column
    pub const fn x(&self) -> i32 {
        self.position[0]
    }

    /// Grid row
    pub const fn y(&self) -> i32 {
        self.position[1]
    }
}

/// The four von Neumann neighbors of a cell, in resolution order
///
/// The order (+x, -x, +y, -y) decides how neighbor-pool candidates are
/// concatenated.
pub const fn von_neumann_neighbors(position: [i32; 2]) -> [[i32; 2]; 4] {
    let [x, y] = position;
    [[x + 1, y], [x - 1, y], [x, y + 1], [x, y - 1]]
}
