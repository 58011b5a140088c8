//! Per-frame cost of the grid pass and both output strategies

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use triangle_life::{Grid, Result};
use triangle_life::rendering::{GeometryBuilder, MAX_MESH_CELLS, RasterBuilder, RenderOutput};

const CELL_SIZE: usize = 4;

fn seeded_grid(size: usize) -> Result<Grid> {
    let mut grid = Grid::new(size, size)?;
    grid.randomize(5, &mut StdRng::seed_from_u64(0x5eed));
    Ok(grid)
}

fn benchmark_advance(size: usize, iterations: u32) -> Result<f64> {
    let mut grid = seeded_grid(size)?;

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn benchmark_rebuild(grid: &Grid, output: &mut dyn RenderOutput, iterations: u32) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        output.rebuild(grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> Result<()> {
    println!("=== Game of Life Frame Benchmark (cell size {CELL_SIZE}px) ===\n");

    let sizes = [32, 64, 128, 256, 512, 1024];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12}", "Size", "Advance", "Mesh", "Raster");
    println!("{:-<50}", "");

    for size in sizes {
        let grid = seeded_grid(size)?;
        let advance_ms = benchmark_advance(size, iterations)?;

        let mesh_str = if size * size <= MAX_MESH_CELLS {
            let mut mesh = GeometryBuilder::new(size, size, CELL_SIZE, true)?;
            format!("{:>12.3}", benchmark_rebuild(&grid, &mut mesh, iterations))
        } else {
            format!("{:>12}", "-")
        };

        let mut raster = RasterBuilder::new(size, size, CELL_SIZE, true)?;
        let raster_ms = benchmark_rebuild(&grid, &mut raster, iterations);

        println!(
            "{:>10} {:>12.3} {} {:>12.3}",
            format!("{}x{}", size, size),
            advance_ms,
            mesh_str,
            raster_ms
        );
    }

    println!("\nTimes are ms per call; mesh output is limited to {MAX_MESH_CELLS} cells.");
    Ok(())
}
