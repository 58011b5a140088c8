// Domain layer - cells, rule and the double-buffered grid
pub mod domain;

// Application layer - configuration, clock and the frame loop
pub mod application;

// Output builders and the renderer contract
pub mod rendering;
pub mod input;

pub mod error;

// Re-exports for convenience
pub use application::{Config, GameLoop, OutputMode, SimulationClock};
pub use domain::{Cell, Grid, Pattern, presets};
pub use error::{ConfigError, Error, Result};
pub use rendering::{Frame, RenderOutput, Renderer};
