//! The classic B3/S23 rule.

use super::Cell;

/// Pure function computing the next state of a cell:
/// 1. Dead cell with exactly 3 neighbors becomes alive
/// 2. Live cell with 2-3 neighbors survives
/// 3. All other cases result in death
pub const fn next_state(current: Cell, neighbors: u8) -> Cell {
    match (current, neighbors) {
        (Cell::Dead, 3) => Cell::Alive,
        (Cell::Alive, 2 | 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}
