use std::collections::TryReserveError;

use thiserror::Error;

/// Inconsistent startup configuration. Rejected before any buffer is allocated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid {name} must be at least 1 cell")]
    ZeroDimension { name: &'static str },

    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    #[error("seed density must be at least 1 (one in N cells alive)")]
    ZeroDensity,

    #[error("screen size {width}x{height} cells at {cell_size}px per cell overflows")]
    ScreenOverflow {
        width: usize,
        height: usize,
        cell_size: usize,
    },

    #[error("mesh output supports at most {max_cells} cells with 16-bit indices, grid has {cells}")]
    MeshTooLarge { cells: usize, max_cells: usize },

    #[error("grid is {actual:?} cells but configuration expects {expected:?}")]
    GridMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
}

/// Errors raised while setting up the simulation.
/// The per-frame path never fails; everything here happens at startup.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to allocate {bytes} bytes for {what}")]
    Allocation {
        what: &'static str,
        bytes: usize,
        #[source]
        source: TryReserveError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Allocate a buffer of `len` copies of `value` up front.
/// Buffers are sized once and reused for the lifetime of the process.
pub(crate) fn allocate<T: Clone>(what: &'static str, len: usize, value: T) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|source| Error::Allocation {
            what,
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
            source,
        })?;
    buffer.resize(len, value);
    Ok(buffer)
}
