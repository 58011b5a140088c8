use super::rules;

/// Cell represents the fundamental unit in Conway's Game of Life.
/// The discriminants double as the 0/1 value summed by neighbor counting.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric value of the cell (0 or 1)
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Next state given the number of live neighbors (B3/S23)
    pub const fn evolve(self, neighbors: u8) -> Self {
        rules::next_state(self, neighbors)
    }
}
