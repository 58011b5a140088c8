use super::{Cell, Grid};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Place pattern with its top-left corner at (x, y).
    /// Coordinates wrap around the grid edges.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        let (width, height) = grid.dimensions();
        for (dx, dy) in &self.cells {
            grid.set((x + dx) % width, (y + dy) % height, Cell::Alive);
        }
    }

    /// Place pattern centered on the grid
    pub fn place_centered(&self, grid: &mut Grid) {
        let (width, height) = grid.dimensions();
        let x = width.saturating_sub(self.width) / 2;
        let y = height.saturating_sub(self.height) / 2;
        self.place_on(grid, x, y);
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (2, 0)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider(), r_pentomino()]
    }

    /// Look a pattern up by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let blinker = presets::blinker();
        assert_eq!((blinker.width, blinker.height), (3, 1));
    }

    #[test]
    fn test_place_wraps_at_edges() {
        let mut grid = Grid::new(4, 4).unwrap();
        presets::block().place_on(&mut grid, 3, 3);
        assert_eq!(alive_cells(&grid), vec![(0, 0), (3, 0), (0, 3), (3, 3)]);
    }

    #[test]
    fn test_place_centered() {
        let mut grid = Grid::new(9, 9).unwrap();
        presets::blinker().place_centered(&mut grid);
        assert_eq!(alive_cells(&grid), vec![(3, 4), (4, 4), (5, 4)]);
    }

    #[test]
    fn test_block_wrapped_across_corner_is_stable() {
        let mut grid = Grid::new(6, 6).unwrap();
        presets::block().place_on(&mut grid, 5, 5);
        let before = alive_cells(&grid);
        for _ in 0..4 {
            grid.advance();
        }
        assert_eq!(alive_cells(&grid), before);
    }

    #[test]
    fn test_glider_returns_shifted_after_four_generations() {
        let mut grid = Grid::new(10, 10).unwrap();
        presets::glider().place_on(&mut grid, 1, 1);
        let start = alive_cells(&grid);

        for _ in 0..4 {
            grid.advance();
        }

        let shifted: Vec<_> = start.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(alive_cells(&grid), shifted);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(presets::by_name("Glider").map(|p| p.name), Some("glider"));
        assert!(presets::by_name("nope").is_none());
    }
}
