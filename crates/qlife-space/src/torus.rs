//! 2D torus with an 8-connected (Moore) neighbourhood.

use crate::error::SpaceError;
use qlife_core::Position;

/// Moore offsets `(dx, dy)` in enumeration order: NW, N, NE, W, E, SW, S, SE.
///
/// Row-major over the 3x3 block with the centre skipped. The order is part
/// of the automaton's contract: entanglement partners are chosen as the
/// first live neighbour in this order.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A `width x height` grid whose left/right and top/bottom edges meet.
///
/// Every position, including negative and far out-of-range ones, resolves
/// to exactly one cell via a non-negative modulo on each axis. Cells are
/// stored row-major: position `(x, y)` maps to flat index `y * width + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Torus {
    width: u32,
    height: u32,
}

impl Torus {
    /// Largest accepted dimension: positions use `i32` components.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace { width, height });
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Resolve `pos` onto the torus. Both components of the result are in
    /// `[0, width)` and `[0, height)` respectively.
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(
            wrap_axis(pos.x, self.width),
            wrap_axis(pos.y, self.height),
        )
    }

    /// Flat row-major index of `pos` after wrapping.
    pub fn index(&self, pos: Position) -> usize {
        let p = self.wrap(pos);
        (p.y as usize) * (self.width as usize) + (p.x as usize)
    }

    /// Position of flat index `idx`, or `None` if `idx >= cell_count()`.
    pub fn position(&self, idx: usize) -> Option<Position> {
        if idx >= self.cell_count() {
            return None;
        }
        let w = self.width as usize;
        Some(Position::new((idx % w) as i32, (idx / w) as i32))
    }

    /// The 8 wrapped Moore neighbours of `pos`, in [`MOORE_OFFSETS`] order.
    ///
    /// `pos` is wrapped before the offsets are applied, so it may lie
    /// anywhere in `i32` space. On tori narrower than 3 cells on an axis,
    /// some neighbours coincide (or equal `pos` itself); they are still
    /// reported once per offset.
    pub fn neighbours(&self, pos: Position) -> [Position; 8] {
        let pos = self.wrap(pos);
        MOORE_OFFSETS.map(|(dx, dy)| {
            Position::new(
                wrap_axis(pos.x + dx, self.width),
                wrap_axis(pos.y + dy, self.height),
            )
        })
    }

    /// Flat indices of the 8 Moore neighbours of `pos`.
    pub fn neighbour_indices(&self, pos: Position) -> [usize; 8] {
        let w = self.width as usize;
        self.neighbours(pos)
            .map(|p| (p.y as usize) * w + (p.x as usize))
    }

    /// Row-major canonical ordering: `(0,0), (1,0), ..., (width-1, height-1)`.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Position::new(x, y)))
    }
}

/// Non-negative modulo of a single axis value.
fn wrap_axis(val: i32, len: u32) -> i32 {
    let n = len as i32;
    if val >= 0 && val < n {
        return val;
    }
    val.rem_euclid(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_width_returns_error() {
        assert_eq!(
            Torus::new(0, 5),
            Err(SpaceError::EmptySpace {
                width: 0,
                height: 5
            })
        );
        assert!(matches!(
            Torus::new(5, 0),
            Err(SpaceError::EmptySpace { .. })
        ));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Torus::new(big, 5),
            Err(SpaceError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Torus::new(5, big),
            Err(SpaceError::DimensionTooLarge { name: "height", .. })
        ));
    }

    // ── Wrap and index tests ────────────────────────────────────

    #[test]
    fn wrap_negative_and_overflowing() {
        let t = Torus::new(5, 4).unwrap();
        assert_eq!(t.wrap(p(-1, -1)), p(4, 3));
        assert_eq!(t.wrap(p(5, 4)), p(0, 0));
        assert_eq!(t.wrap(p(12, -9)), p(2, 3));
    }

    #[test]
    fn index_is_row_major() {
        let t = Torus::new(5, 4).unwrap();
        assert_eq!(t.index(p(0, 0)), 0);
        assert_eq!(t.index(p(4, 0)), 4);
        assert_eq!(t.index(p(0, 1)), 5);
        assert_eq!(t.index(p(-1, -1)), 19);
        assert_eq!(t.position(19), Some(p(4, 3)));
        assert_eq!(t.position(20), None);
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior_in_fixed_order() {
        let t = Torus::new(5, 5).unwrap();
        assert_eq!(
            t.neighbours(p(2, 2)),
            [
                p(1, 1),
                p(2, 1),
                p(3, 1),
                p(1, 2),
                p(3, 2),
                p(1, 3),
                p(2, 3),
                p(3, 3),
            ]
        );
    }

    #[test]
    fn neighbours_wrap_corner() {
        let t = Torus::new(5, 5).unwrap();
        let n = t.neighbours(p(0, 0));
        assert_eq!(n[0], p(4, 4)); // NW wraps on both axes
        assert_eq!(n[1], p(0, 4)); // N wraps
        assert_eq!(n[3], p(4, 0)); // W wraps
        assert_eq!(n[7], p(1, 1));
    }

    #[test]
    fn single_cell_neighbours_are_self() {
        let t = Torus::new(1, 1).unwrap();
        assert!(t.neighbours(p(0, 0)).iter().all(|&nb| nb == p(0, 0)));
    }

    #[test]
    fn neighbours_of_extreme_positions_wrap_first() {
        let t = Torus::new(3, 3).unwrap();
        // i32::MAX wraps to column 1; its E neighbour is column 2.
        let n = t.neighbours(p(i32::MAX, 0));
        assert_eq!(t.wrap(p(i32::MAX, 0)), p(1, 0));
        assert_eq!(n, t.neighbours(p(1, 0)));
        assert_eq!(n[4], p(2, 0));
        let far = p(i32::MIN, i32::MIN);
        assert_eq!(t.neighbours(far), t.neighbours(t.wrap(far)));
    }

    #[test]
    fn neighbour_indices_match_positions() {
        let t = Torus::new(4, 3).unwrap();
        let idx = t.neighbour_indices(p(0, 0));
        let pos = t.neighbours(p(0, 0));
        for (i, nb) in idx.iter().zip(pos.iter()) {
            assert_eq!(*i, t.index(*nb));
        }
    }

    #[test]
    fn canonical_ordering_is_row_major() {
        let t = Torus::new(3, 2).unwrap();
        let order: Vec<Position> = t.canonical_ordering().collect();
        assert_eq!(order.len(), 6);
        for (i, pos) in order.iter().enumerate() {
            assert_eq!(t.index(*pos), i);
        }
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn wrap_is_periodic(
            w in 1u32..20, h in 1u32..20,
            x in -100i32..100, y in -100i32..100,
            k in -5i32..5,
        ) {
            let t = Torus::new(w, h).unwrap();
            let shifted = p(x + k * w as i32, y + k * h as i32);
            prop_assert_eq!(t.wrap(shifted), t.wrap(p(x, y)));
            prop_assert_eq!(t.index(shifted), t.index(p(x, y)));
        }

        #[test]
        fn neighbours_symmetric(
            w in 3u32..12, h in 3u32..12,
            x in 0i32..12, y in 0i32..12,
        ) {
            let t = Torus::new(w, h).unwrap();
            let pos = t.wrap(p(x, y));
            let nbs = t.neighbours(pos);
            for nb in nbs {
                prop_assert!(nb != pos);
                prop_assert!(t.neighbours(nb).contains(&pos));
            }
            let mut distinct = nbs.to_vec();
            distinct.sort();
            distinct.dedup();
            prop_assert_eq!(distinct.len(), 8);
        }

        #[test]
        fn neighbours_ignore_far_offsets(
            w in 1u32..12, h in 1u32..12,
            x in any::<i32>(), y in any::<i32>(),
        ) {
            let t = Torus::new(w, h).unwrap();
            let pos = p(x, y);
            prop_assert_eq!(t.neighbours(pos), t.neighbours(t.wrap(pos)));
        }
    }
}
