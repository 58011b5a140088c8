use std::fmt;

use rand::Rng;

use super::Cell;
use crate::error::{ConfigError, Result, allocate};

/// Grid manages the toroidal cell lattice.
///
/// Two equally sized buffers are allocated once. One is active (readable as
/// the current generation), the other receives the next generation during
/// [`Grid::advance`]. Swapping is a parity flip, contents are never copied.
pub struct Grid {
    width: usize,
    height: usize,
    buffers: [Vec<Cell>; 2],
    active: usize,
}

impl Grid {
    /// Create a new grid with all cells dead in both buffers
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 {
            return Err(ConfigError::ZeroDimension { name: "width" }.into());
        }
        if height == 0 {
            return Err(ConfigError::ZeroDimension { name: "height" }.into());
        }
        let len = width
            .checked_mul(height)
            .ok_or(ConfigError::ScreenOverflow { width, height, cell_size: 1 })?;

        Ok(Self {
            width,
            height,
            buffers: [
                allocate("grid buffer", len, Cell::Dead)?,
                allocate("grid buffer", len, Cell::Dead)?,
            ],
            active: 0,
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Index (0 or 1) of the buffer holding the current generation
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// Raw access to either buffer, row-major
    pub fn buffer(&self, index: usize) -> &[Cell] {
        &self.buffers[index & 1]
    }

    /// Current generation, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.buffers[self.active]
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position in the active buffer
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < self.width && y < self.height);
        self.cells()[self.get_index(x, y)]
    }

    /// Set cell at position in the active buffer (out of range is ignored)
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.buffers[self.active][idx] = cell;
        }
    }

    /// Count live neighbors of (x, y) using toroidal wrapping
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        count_neighbors(self.cells(), self.width, self.height, x, y)
    }

    /// Compute the next generation into the inactive buffer, then flip.
    pub fn advance(&mut self) {
        let (width, height) = (self.width, self.height);
        let [first, second] = &mut self.buffers;
        let (current, next) = if self.active == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        for y in 0..height {
            for x in 0..width {
                let idx = y * width + x;
                let neighbors = count_neighbors(current, width, height, x, y);
                next[idx] = current[idx].evolve(neighbors);
            }
        }

        self.active ^= 1;
    }

    /// Set every cell of the active buffer to dead
    pub fn clear(&mut self) {
        self.buffers[self.active].fill(Cell::Dead);
    }

    /// Seed the active buffer: each cell alive with probability `1/density`
    pub fn randomize<R: Rng>(&mut self, density: u32, rng: &mut R) {
        debug_assert!(density > 0);
        self.buffers[self.active].iter_mut().for_each(|cell| {
            *cell = Cell::from_alive(rng.random_range(0..density) == 0);
        });
    }

    /// Count alive cells in the current generation
    pub fn count_alive(&self) -> usize {
        self.cells().iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells()
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % width, idx / width, cell))
    }
}

/// Sum all nine cells of the 3x3 block around (x, y) and subtract the
/// center. Offsets are added modulo the dimension, so `width - 1` is -1.
#[inline]
fn count_neighbors(cells: &[Cell], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let mut sum = 0u8;

    for dy in [height - 1, 0, 1] {
        let row = (y + dy) % height * width;
        for dx in [width - 1, 0, 1] {
            let col = (x + dx) % width;
            sum += cells[row + col].value();
        }
    }

    sum - cells[y * width + x].value()
}

/// Console dump of the current generation
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells().chunks(self.width) {
            for cell in row {
                f.write_str(if cell.is_alive() { "XX" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
