use super::palette::{self, Rgba};
use super::{Frame, RenderOutput};
use crate::domain::Grid;
use crate::error::{ConfigError, Result, allocate};

/// Paints every screen pixel from the cell covering it.
pub struct RasterBuilder {
    grid_width: usize,
    cell_size: usize,
    screen_width: usize,
    screen_height: usize,
    gridlines: bool,
    pixels: Vec<u8>,
}

impl RasterBuilder {
    pub fn new(grid_width: usize, grid_height: usize, cell_size: usize, gridlines: bool) -> Result<Self> {
        if grid_width == 0 || grid_height == 0 {
            let name = if grid_width == 0 { "width" } else { "height" };
            return Err(ConfigError::ZeroDimension { name }.into());
        }
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize.into());
        }
        let overflow = ConfigError::ScreenOverflow { width: grid_width, height: grid_height, cell_size };
        let screen_width = grid_width.checked_mul(cell_size).ok_or(overflow.clone())?;
        let screen_height = grid_height.checked_mul(cell_size).ok_or(overflow.clone())?;
        let len = screen_width
            .checked_mul(screen_height)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or(overflow)?;

        Ok(Self {
            grid_width,
            cell_size,
            screen_width,
            screen_height,
            gridlines,
            pixels: allocate("pixel buffer", len, 0u8)?,
        })
    }

    pub const fn screen_size(&self) -> (usize, usize) {
        (self.screen_width, self.screen_height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color of the pixel at (x, y)
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let offset = (y * self.screen_width + x) * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + 4]);
        rgba
    }

    /// Paint the screen as if every cell were dead.
    /// With gridlines on this is the static backdrop of the mesh variant.
    pub fn paint_empty(&mut self) {
        self.paint(|_, _| false);
    }

    fn paint(&mut self, is_alive: impl Fn(usize, usize) -> bool) {
        let (cell_size, gridlines) = (self.cell_size, self.gridlines);

        for (py, row) in self.pixels.chunks_exact_mut(self.screen_width * 4).enumerate() {
            let cell_y = py / cell_size;
            let on_row_line = py % cell_size == 0;

            for (px, pixel) in row.chunks_exact_mut(4).enumerate() {
                let color = if gridlines && (on_row_line || px % cell_size == 0) {
                    palette::GRIDLINE
                } else if is_alive(px / cell_size, cell_y) {
                    palette::ALIVE
                } else {
                    palette::DEAD
                };
                pixel.copy_from_slice(&color);
            }
        }
    }
}

impl RenderOutput for RasterBuilder {
    fn rebuild(&mut self, grid: &Grid) {
        debug_assert_eq!(grid.dimensions().0, self.grid_width);
        let (cells, width) = (grid.cells(), self.grid_width);
        self.paint(|x, y| cells[y * width + x].is_alive());
    }

    fn frame(&self) -> Frame<'_> {
        Frame::Raster {
            pixels: &self.pixels,
            width: self.screen_width,
            height: self.screen_height,
        }
    }
}
