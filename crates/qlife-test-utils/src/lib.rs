//! Test utilities and pattern fixtures for qlife development.
//!
//! Grids are written as ASCII rows: `.` is dead, `#` alive, `*`
//! superposed. [`grid_from_pattern`] builds a [`Grid`] from such rows and
//! [`render_pattern`] turns any snapshot back into them, which keeps
//! scenario tests readable. [`MockSnapshot`] implements
//! [`SnapshotAccess`] without an engine behind it.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod pattern;

pub use pattern::{cells_from_pattern, glyph, grid_from_pattern, render_pattern};

use qlife_core::{CellState, Generation, SnapshotAccess};
use qlife_engine::Grid;

/// Mock snapshot implementing [`SnapshotAccess`].
///
/// Backed by a flat row-major `Vec<CellState>` with a configurable
/// generation. Reports no entangled pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockSnapshot {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
    generation: Generation,
}

impl MockSnapshot {
    /// Panics if `cells.len() != width * height`.
    pub fn new(width: u32, height: u32, cells: Vec<CellState>, generation: Generation) -> Self {
        assert_eq!(
            cells.len(),
            (width as usize) * (height as usize),
            "cell count must equal width * height"
        );
        Self {
            width,
            height,
            cells,
            generation,
        }
    }

    /// Build from ASCII rows (see [`cells_from_pattern`]).
    pub fn from_pattern(rows: &[&str], generation: Generation) -> Self {
        let (width, height, cells) = cells_from_pattern(rows);
        Self::new(width, height, cells.into_iter().flatten().collect(), generation)
    }
}

impl SnapshotAccess for MockSnapshot {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cells(&self) -> &[CellState] {
        &self.cells
    }

    fn generation(&self) -> Generation {
        self.generation
    }

    fn entangled_count(&self) -> usize {
        0
    }
}

/// Step `grid` `n` times, returning how many of those steps were fixed
/// points.
pub fn iterate_n(grid: &mut Grid, n: usize) -> usize {
    (0..n).filter(|_| grid.iterate()).count()
}
