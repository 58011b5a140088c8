use crate::domain::presets;
use crate::error::ConfigError;
use crate::rendering::MAX_MESH_CELLS;

/// Which strategy turns the grid into drawable output
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Triangle mesh of alive cells over a static background
    #[default]
    Mesh,
    /// Full-screen pixel buffer
    Raster,
}

/// Startup configuration. Fixed for the lifetime of the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Pixels per cell edge
    pub cell_size: usize,
    /// Each cell starts alive with probability 1/density
    pub density: u32,
    /// Frames between generation advances
    pub ticks_per_generation: u32,
    pub mode: OutputMode,
    pub gridlines: bool,
    pub debug: bool,
    /// Seed for reproducible starting grids
    pub seed: Option<u64>,
    /// Start from a named pattern instead of random cells
    pub pattern: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            cell_size: 4,
            density: 5,
            ticks_per_generation: 5,
            mode: OutputMode::Mesh,
            gridlines: true,
            debug: false,
            seed: None,
            pattern: None,
        }
    }
}

impl Config {
    pub const fn screen_width(&self) -> usize {
        self.width * self.cell_size
    }

    pub const fn screen_height(&self) -> usize {
        self.height * self.cell_size
    }

    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Reject inconsistent settings before anything is allocated
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { name: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { name: "height" });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.density == 0 {
            return Err(ConfigError::ZeroDensity);
        }

        let overflow = ConfigError::ScreenOverflow {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
        };
        let screen_width = self.width.checked_mul(self.cell_size).ok_or(overflow.clone())?;
        let screen_height = self.height.checked_mul(self.cell_size).ok_or(overflow.clone())?;
        screen_width
            .checked_mul(screen_height)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or(overflow)?;

        let cells = self.width * self.height;
        if self.mode == OutputMode::Mesh && cells > MAX_MESH_CELLS {
            return Err(ConfigError::MeshTooLarge { cells, max_cells: MAX_MESH_CELLS });
        }

        if let Some(name) = &self.pattern {
            if presets::by_name(name).is_none() {
                return Err(ConfigError::UnknownPattern(name.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.screen_width(), 512);
        assert_eq!(config.screen_height(), 512);
    }

    #[test]
    fn test_zero_values_rejected() {
        let cases = [
            (Config { width: 0, ..Config::default() }, ConfigError::ZeroDimension { name: "width" }),
            (Config { height: 0, ..Config::default() }, ConfigError::ZeroDimension { name: "height" }),
            (Config { cell_size: 0, ..Config::default() }, ConfigError::ZeroCellSize),
            (Config { density: 0, ..Config::default() }, ConfigError::ZeroDensity),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn test_mesh_limit_only_applies_to_mesh_mode() {
        let big = Config { width: 200, height: 200, ..Config::default() };
        assert_eq!(
            big.validate(),
            Err(ConfigError::MeshTooLarge { cells: 40_000, max_cells: MAX_MESH_CELLS })
        );

        let raster = Config { mode: OutputMode::Raster, ..big };
        assert_eq!(raster.validate(), Ok(()));
    }

    #[test]
    fn test_screen_overflow_rejected() {
        let config = Config {
            width: usize::MAX / 2,
            height: 1,
            cell_size: 4,
            mode: OutputMode::Raster,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ScreenOverflow { .. })));
    }

    #[test]
    fn test_unknown_pattern_rejected() {
        let config = Config { pattern: Some("spaceship-9000".into()), ..Config::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownPattern("spaceship-9000".into()))
        );

        let config = Config { pattern: Some("Glider".into()), ..Config::default() };
        assert_eq!(config.validate(), Ok(()));
    }
}
