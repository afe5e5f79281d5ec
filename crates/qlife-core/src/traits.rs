//! Read-only access to committed generations.

use crate::cell::CellState;
use crate::id::Generation;

/// Read-only view of a committed generation.
///
/// Decouples consumers (renderers, replay hashing, test assertions) from
/// the engine's storage. Cells are exposed as one flat row-major slice of
/// `height * width` states; row `y` occupies `[y * width, (y + 1) * width)`.
pub trait SnapshotAccess {
    /// Grid width in cells.
    fn width(&self) -> u32;

    /// Grid height in cells.
    fn height(&self) -> u32;

    /// Flat row-major cell states.
    fn cells(&self) -> &[CellState];

    /// Number of generations applied since construction.
    fn generation(&self) -> Generation;

    /// Number of active entangled pairs.
    fn entangled_count(&self) -> usize;

    /// Cell at in-range `(x, y)`, or `None` when out of range.
    fn cell(&self, x: u32, y: u32) -> Option<CellState> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = (y as usize) * (self.width() as usize) + (x as usize);
        self.cells().get(idx).copied()
    }

    /// Number of cells currently in `state`.
    fn count(&self, state: CellState) -> usize {
        self.cells().iter().filter(|&&c| c == state).count()
    }
}
