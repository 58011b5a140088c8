//! Turning grid state into something a renderer can draw.
//!
//! Two strategies share the [`RenderOutput`] capability: a triangle mesh of
//! alive cells ([`GeometryBuilder`]) and a full-screen pixel buffer
//! ([`RasterBuilder`]). Both pre-size their buffers once and overwrite them
//! in place on every rebuild.

mod mesh;
pub mod palette;
mod raster;

pub use mesh::{GeometryBuilder, MAX_MESH_CELLS};
pub use raster::RasterBuilder;

use crate::domain::Grid;
use palette::Rgba;

/// A mesh vertex: screen position, texture coordinate and color
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub u: f32,
    pub v: f32,
    pub color: Rgba,
}

impl Vertex {
    /// Degenerate, fully transparent vertex used for unused quad slots
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, u: 0.0, v: 0.0, color: [0; 4] };
}

/// The 1x1 solid-color texel mesh vertices sample from.
/// Texture coordinates of every vertex point at its center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolidSource {
    pub color: Rgba,
}

impl SolidSource {
    pub const WHITE: Self = Self { color: [0xff; 4] };
    pub const TEXEL_CENTER: (f32, f32) = (0.5, 0.5);
}

/// Read-only view of the current output, handed to a [`Renderer`]
#[derive(Clone, Copy, Debug)]
pub enum Frame<'a> {
    Mesh {
        vertices: &'a [Vertex],
        indices: &'a [u16],
        source: SolidSource,
        /// Static RGBA image drawn underneath the mesh
        background: &'a [u8],
        screen: (usize, usize),
    },
    Raster {
        pixels: &'a [u8],
        width: usize,
        height: usize,
    },
}

/// Something that turns the active grid buffer into drawable output.
pub trait RenderOutput {
    /// Regenerate the output from the grid's active buffer
    fn rebuild(&mut self, grid: &Grid);

    fn frame(&self) -> Frame<'_>;
}

/// Draw-call collaborator. Each submission replaces the previous one.
pub trait Renderer {
    fn submit(&mut self, frame: Frame<'_>);
}
