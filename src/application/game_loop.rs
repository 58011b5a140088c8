use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{ClockState, Config, OutputMode, SimulationClock};
use crate::domain::{Grid, presets};
use crate::error::{ConfigError, Result};
use crate::input::FrameInput;
use crate::rendering::{Frame, GeometryBuilder, RasterBuilder, RenderOutput, Renderer};

/// GameLoop owns all simulation state and runs it one display frame at a time.
///
/// Per frame: the clock decides whether a generation is due; if so the grid
/// computes the next generation, flips its buffers and the output is rebuilt
/// from the newly active buffer. The pause toggle is applied afterwards.
pub struct GameLoop {
    grid: Grid,
    clock: SimulationClock,
    output: Box<dyn RenderOutput>,
    generation: u64,
}

impl GameLoop {
    /// Build the simulation from a config, seeding the grid as configured
    pub fn new(config: &Config) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::with_rng(config, &mut StdRng::seed_from_u64(seed)),
            None => Self::with_rng(config, &mut rand::rng()),
        }
    }

    /// Build the simulation, drawing random cells from `rng`
    pub fn with_rng<R: Rng>(config: &Config, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut grid = Grid::new(config.width, config.height)?;
        match config.pattern.as_deref() {
            Some(name) => {
                let pattern = presets::by_name(name)
                    .ok_or_else(|| ConfigError::UnknownPattern(name.to_owned()))?;
                pattern.place_centered(&mut grid);
                log::info!("Seeded grid with pattern {}", pattern.name);
            }
            None => grid.randomize(config.density, rng),
        }

        Self::from_grid(config, grid)
    }

    /// Build the simulation around an already populated grid
    pub fn from_grid(config: &Config, grid: Grid) -> Result<Self> {
        config.validate()?;
        if grid.dimensions() != (config.width, config.height) {
            return Err(ConfigError::GridMismatch {
                expected: (config.width, config.height),
                actual: grid.dimensions(),
            }
            .into());
        }

        let mut output: Box<dyn RenderOutput> = match config.mode {
            OutputMode::Mesh => Box::new(GeometryBuilder::new(
                config.width,
                config.height,
                config.cell_size,
                config.gridlines,
            )?),
            OutputMode::Raster => Box::new(RasterBuilder::new(
                config.width,
                config.height,
                config.cell_size,
                config.gridlines,
            )?),
        };
        output.rebuild(&grid);

        log::info!(
            "Initialized {}x{} grid ({}x{} px, {:?} output), {} cells alive",
            config.width,
            config.height,
            config.screen_width(),
            config.screen_height(),
            config.mode,
            grid.count_alive(),
        );

        Ok(Self {
            grid,
            clock: SimulationClock::new(config.ticks_per_generation),
            output,
            generation: 0,
        })
    }

    /// Run one display frame. Returns true if a generation advanced.
    pub fn frame(&mut self, input: FrameInput) -> bool {
        let advanced = self.clock.tick();
        if advanced {
            self.advance();
        }

        if input.toggle_pause {
            let state = self.clock.toggle_pause();
            log::debug!("Simulation {state:?} at generation {}", self.generation);
        }

        advanced
    }

    /// Advance one generation regardless of the clock
    pub fn advance(&mut self) {
        self.grid.advance();
        self.output.rebuild(&self.grid);
        self.generation += 1;

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Generation {}: {} alive\n{}", self.generation, self.grid.count_alive(), self.grid);
        }
    }

    /// Hand the current output to the renderer
    pub fn present(&self, renderer: &mut dyn Renderer) {
        renderer.submit(self.output.frame());
    }

    pub fn frame_output(&self) -> Frame<'_> {
        self.output.frame()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn is_paused(&self) -> bool {
        self.clock.state() == ClockState::Paused
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.count_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use crate::rendering::{Vertex, palette};

    const RUN: FrameInput = FrameInput { toggle_pause: false, quit: false };
    const TOGGLE: FrameInput = FrameInput { toggle_pause: true, quit: false };

    fn config(mode: OutputMode) -> Config {
        Config {
            width: 8,
            height: 6,
            cell_size: 3,
            ticks_per_generation: 2,
            mode,
            seed: Some(7),
            ..Config::default()
        }
    }

    fn output_bytes(game: &GameLoop) -> Vec<u8> {
        match game.frame_output() {
            Frame::Raster { pixels, .. } => pixels.to_vec(),
            Frame::Mesh { vertices, indices, .. } => {
                let mut bytes = Vec::new();
                for v in vertices {
                    for f in [v.x, v.y, v.u, v.v] {
                        bytes.extend_from_slice(&f.to_le_bytes());
                    }
                    bytes.extend_from_slice(&v.color);
                }
                for i in indices {
                    bytes.extend_from_slice(&i.to_le_bytes());
                }
                bytes
            }
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        meshes: usize,
        rasters: Vec<(usize, usize, usize)>,
    }

    impl Renderer for RecordingRenderer {
        fn submit(&mut self, frame: Frame<'_>) {
            match frame {
                Frame::Mesh { vertices, indices, background, screen, .. } => {
                    assert_eq!(vertices.len() * 6, indices.len() * 4);
                    assert_eq!(background.len(), screen.0 * screen.1 * 4);
                    self.meshes += 1;
                }
                Frame::Raster { pixels, width, height } => self.rasters.push((pixels.len(), width, height)),
            }
        }
    }

    #[test]
    fn test_generation_advances_on_clock() {
        let mut game = GameLoop::new(&config(OutputMode::Mesh)).unwrap();
        let advanced: Vec<bool> = (0..6).map(|_| game.frame(RUN)).collect();
        assert_eq!(advanced, [false, false, true, false, false, true]);
        assert_eq!(game.generation(), 2);
        assert_eq!(game.grid().active_index(), 0);
    }

    #[test]
    fn test_pause_freezes_grid_and_output() {
        for mode in [OutputMode::Mesh, OutputMode::Raster] {
            let mut game = GameLoop::new(&config(mode)).unwrap();
            game.frame(TOGGLE);
            assert!(game.is_paused());

            let buffers = (game.grid().buffer(0).to_vec(), game.grid().buffer(1).to_vec());
            let output = output_bytes(&game);

            for _ in 0..20 {
                assert!(!game.frame(RUN));
            }

            assert_eq!(game.grid().buffer(0), buffers.0.as_slice());
            assert_eq!(game.grid().buffer(1), buffers.1.as_slice());
            assert_eq!(output_bytes(&game), output);
            assert_eq!(game.generation(), 0);

            game.frame(TOGGLE);
            assert!(!game.is_paused());
        }
    }

    #[test]
    fn test_toggle_applies_after_update() {
        let mut game = GameLoop::new(&Config { ticks_per_generation: 0, ..config(OutputMode::Raster) }).unwrap();
        assert!(game.frame(TOGGLE));
        assert!(game.is_paused());
        assert!(!game.frame(RUN));
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn test_output_follows_active_buffer() {
        let cfg = Config { pattern: Some("blinker".into()), ..config(OutputMode::Mesh) };
        let mut game = GameLoop::new(&cfg).unwrap();
        // blinker centered on 8x6: cells (2..5, 2)
        let alive_slots = |game: &GameLoop| -> Vec<usize> {
            match game.frame_output() {
                Frame::Mesh { vertices, .. } => vertices
                    .chunks_exact(4)
                    .enumerate()
                    .filter(|(_, quad)| quad[0] != Vertex::ZERO)
                    .map(|(cell, _)| cell)
                    .collect(),
                Frame::Raster { .. } => unreachable!(),
            }
        };
        assert_eq!(alive_slots(&game), vec![18, 19, 20]);

        game.advance();
        assert_eq!(alive_slots(&game), vec![11, 19, 27]);

        game.advance();
        assert_eq!(alive_slots(&game), vec![18, 19, 20]);
    }

    #[test]
    fn test_raster_frame_after_advance() {
        let mut grid = Grid::new(8, 6).unwrap();
        grid.set(0, 0, Cell::Alive);
        let cfg = Config { gridlines: false, ..config(OutputMode::Raster) };
        let mut game = GameLoop::from_grid(&cfg, grid).unwrap();
        match game.frame_output() {
            Frame::Raster { pixels, .. } => assert_eq!(&pixels[..4], palette::ALIVE),
            Frame::Mesh { .. } => unreachable!(),
        }

        game.advance();
        assert_eq!(game.population(), 0);
        match game.frame_output() {
            Frame::Raster { pixels, .. } => assert!(pixels.chunks_exact(4).all(|px| px == palette::DEAD)),
            Frame::Mesh { .. } => unreachable!(),
        }
    }

    #[test]
    fn test_present_hands_frame_to_renderer() {
        let mut renderer = RecordingRenderer::default();

        GameLoop::new(&config(OutputMode::Mesh)).unwrap().present(&mut renderer);
        GameLoop::new(&config(OutputMode::Raster)).unwrap().present(&mut renderer);

        assert_eq!(renderer.meshes, 1);
        assert_eq!(renderer.rasters, vec![(24 * 18 * 4, 24, 18)]);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = GameLoop::new(&config(OutputMode::Raster)).unwrap();
        let b = GameLoop::new(&config(OutputMode::Raster)).unwrap();
        assert_eq!(a.grid().cells(), b.grid().cells());
    }

    #[test]
    fn test_invalid_config_fails_before_allocation() {
        let cfg = Config { cell_size: 0, ..config(OutputMode::Mesh) };
        assert!(GameLoop::new(&cfg).is_err());
    }

    #[test]
    fn test_grid_must_match_config() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(GameLoop::from_grid(&config(OutputMode::Mesh), grid).is_err());
    }
}
