use super::palette::{self, Rgba};
use super::{Frame, RenderOutput, RasterBuilder, SolidSource, Vertex};
use crate::domain::Grid;
use crate::error::{ConfigError, Result, allocate};

/// Largest grid whose quads are all addressable with 16-bit indices
pub const MAX_MESH_CELLS: usize = (u16::MAX as usize + 1) / 4;

/// Quad corners in write order:
/// ```text
/// 0   2
///
/// 1   3
/// ```
const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Two triangles per quad, relative to the quad's first vertex
const QUAD_INDICES: [u16; 6] = [0, 1, 3, 0, 2, 3];

/// Builds one triangle list covering every alive cell.
///
/// Every cell owns a fixed 4-vertex slot and a fixed 6-index slot, so the
/// buffers are sized `cells * 4` and `cells * 6` regardless of population.
/// Slots of dead cells stay zeroed and rasterize to nothing.
pub struct GeometryBuilder {
    grid_width: usize,
    cell_size: usize,
    color: Rgba,
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
    background: RasterBuilder,
}

impl GeometryBuilder {
    pub fn new(grid_width: usize, grid_height: usize, cell_size: usize, gridlines: bool) -> Result<Self> {
        // also validates dimensions and cell size
        let mut background = RasterBuilder::new(grid_width, grid_height, cell_size, gridlines)?;
        background.paint_empty();

        let cells = grid_width * grid_height;
        if cells > MAX_MESH_CELLS {
            return Err(ConfigError::MeshTooLarge { cells, max_cells: MAX_MESH_CELLS }.into());
        }

        Ok(Self {
            grid_width,
            cell_size,
            color: palette::ALIVE,
            vertices: allocate("vertex buffer", cells * 4, Vertex::ZERO)?,
            indices: allocate("index buffer", cells * 6, 0u16)?,
            background,
        })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Static backdrop drawn underneath the mesh
    pub fn background(&self) -> &RasterBuilder {
        &self.background
    }

    /// Corner of the cell at (cell_x, cell_y). Left and top edges are inset
    /// by one pixel so the gridline underneath stays visible.
    fn corner(&self, cell_x: usize, cell_y: usize, (i, j): (usize, usize)) -> (f32, f32) {
        let size = self.cell_size;
        let x = cell_x * size + i * size + 1 - i;
        let y = cell_y * size + j * size + 1 - j;
        (x as f32, y as f32)
    }
}

impl RenderOutput for GeometryBuilder {
    fn rebuild(&mut self, grid: &Grid) {
        debug_assert_eq!(grid.cell_count() * 4, self.vertices.len());

        // stale quads from the previous generation must not survive
        self.vertices.fill(Vertex::ZERO);

        let (u, v) = SolidSource::TEXEL_CENTER;
        let color = self.color;
        let mut base = 0usize;
        let mut index = 0usize;

        for (cell_y, row) in grid.cells().chunks(self.grid_width).enumerate() {
            for (cell_x, cell) in row.iter().enumerate() {
                if cell.is_alive() {
                    for (slot, corner) in CORNERS.into_iter().enumerate() {
                        let (x, y) = self.corner(cell_x, cell_y, corner);
                        self.vertices[base + slot] = Vertex { x, y, u, v, color };
                    }
                }

                for (dst, offset) in self.indices[index..index + 6].iter_mut().zip(QUAD_INDICES) {
                    *dst = base as u16 + offset;
                }

                index += 6;
                base += 4;
            }
        }
    }

    fn frame(&self) -> Frame<'_> {
        Frame::Mesh {
            vertices: &self.vertices,
            indices: &self.indices,
            source: SolidSource::WHITE,
            background: self.background.pixels(),
            screen: self.background.screen_size(),
        }
    }
}
