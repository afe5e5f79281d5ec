//! ASCII pattern fixtures.

use qlife_core::{CellState, SnapshotAccess};
use qlife_engine::Grid;

/// Glyph for `state` in the fixture alphabet.
pub fn glyph(state: CellState) -> char {
    match state {
        CellState::Dead => '.',
        CellState::Alive => '#',
        CellState::Superposed => '*',
    }
}

fn parse(c: char) -> CellState {
    match c {
        '.' => CellState::Dead,
        '#' => CellState::Alive,
        '*' => CellState::Superposed,
        other => panic!("unknown pattern glyph {other:?}"),
    }
}

/// Parse rows into `(width, height, rows)`.
///
/// Width is taken from the first row; ragged input is returned as-is so
/// callers can exercise shape validation.
pub fn cells_from_pattern(rows: &[&str]) -> (u32, u32, Vec<Vec<CellState>>) {
    let parsed: Vec<Vec<CellState>> = rows.iter().map(|r| r.chars().map(parse).collect()).collect();
    let width = parsed.first().map_or(0, |r| r.len()) as u32;
    (width, parsed.len() as u32, parsed)
}

/// Build a [`Grid`] from ASCII rows with the given collapse seed.
///
/// Panics if the pattern is empty or ragged.
pub fn grid_from_pattern(rows: &[&str], seed: u64) -> Grid {
    let (width, height, cells) = cells_from_pattern(rows);
    match Grid::from_rows(width, height, cells, seed) {
        Ok(grid) => grid,
        Err(e) => panic!("invalid pattern: {e}"),
    }
}

/// Render any snapshot back to ASCII rows.
pub fn render_pattern(snapshot: &dyn SnapshotAccess) -> Vec<String> {
    snapshot
        .cells()
        .chunks(snapshot.width() as usize)
        .map(|row| row.iter().map(|&c| glyph(c)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_round_trips_through_grid() {
        let rows = ["#..*", ".##.", "...."];
        let grid = grid_from_pattern(&rows, 0);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(3, 0), CellState::Superposed);
        assert_eq!(render_pattern(&grid), rows);
    }

    #[test]
    fn ragged_pattern_keeps_row_lengths() {
        let (w, h, cells) = cells_from_pattern(&["###", "#"]);
        assert_eq!((w, h), (3, 2));
        assert_eq!(cells[1].len(), 1);
    }

    #[test]
    #[should_panic(expected = "unknown pattern glyph")]
    fn unknown_glyph_panics() {
        cells_from_pattern(&["#x"]);
    }
}
