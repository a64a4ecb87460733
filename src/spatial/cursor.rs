//! Player cursor and unit-step movement

use std::fmt;

/// One of the four unit moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller `y`
    Up,
    /// Towards larger `y`
    Down,
    /// Towards smaller `x`
    Left,
    /// Towards larger `x`
    Right,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Coordinate delta (dx, dy) of this move
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::Up => [0, -1],
            Self::Down => [0, 1],
            Self::Left => [-1, 0],
            Self::Right => [1, 0],
        }
    }

    /// The move that undoes this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Current player position on the grid
///
/// Unbounded: any `i32` coordinate is reachable, filled or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: [i32; 2],
}

impl Cursor {
    /// Place the cursor at a starting cell
    pub const fn new(position: [i32; 2]) -> Self {
        Self { position }
    }

    /// Current grid coordinates (x, y)
    pub const fn position(&self) -> [i32; 2] {
        self.position
    }

    /// Move one cell and return the new position
    pub const fn step(&mut self, direction: Direction) -> [i32; 2] {
        let delta = direction.delta();
        self.position = [
            self.position[0].wrapping_add(delta[0]),
            self.position[1].wrapping_add(delta[1]),
        ];
        self.position
    }
}
