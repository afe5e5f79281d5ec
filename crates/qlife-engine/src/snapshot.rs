//! Owned copies of committed generations.

use qlife_core::{CellState, Generation, SnapshotAccess};

use crate::entangle::EntangledPair;

/// An owned, immutable copy of one committed generation.
///
/// Holds everything a renderer or status line needs: the row-major cell
/// array, the active pairs, the generation index, the seed, and whether
/// the generation that produced it was a fixed point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) cells: Vec<CellState>,
    pub(crate) pairs: Vec<EntangledPair>,
    pub(crate) generation: Generation,
    pub(crate) seed: u64,
    pub(crate) stable: bool,
}

impl GridSnapshot {
    /// Rows of the grid, top to bottom, each `width` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Active pairs in creation order.
    pub fn pairs(&self) -> &[EntangledPair] {
        &self.pairs
    }

    /// Seed the grid was constructed with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether the step that produced this snapshot changed no cell.
    pub fn is_stable(&self) -> bool {
        self.stable
    }
}

impl SnapshotAccess for GridSnapshot {
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
        self.pairs.len()
    }
}
