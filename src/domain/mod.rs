mod cell;
mod grid;
mod patterns;
pub mod rules;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
