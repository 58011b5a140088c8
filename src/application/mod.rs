mod clock;
mod config;
mod game_loop;

pub use clock::{ClockState, SimulationClock};
pub use config::{Config, OutputMode};
pub use game_loop::GameLoop;
pub use crate::error::ConfigError;
