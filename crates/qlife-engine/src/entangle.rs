//! Exclusive pairwise entanglement bookkeeping.
//!
//! [`Entanglements`] keeps the active pairs in creation order alongside a
//! position-to-partner index, so "who is P paired with?" is a single map
//! lookup instead of a scan. Exclusivity is enforced on insert: a position
//! belongs to at most one pair.

use std::collections::HashMap;

use indexmap::IndexSet;
use qlife_core::Position;

/// Two linked cells. Member order records which cell initiated the link
/// and carries no other meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntangledPair {
    /// The cell that initiated the link (the birthing cell).
    pub first: Position,
    /// The partner it linked with.
    pub second: Position,
}

/// The set of active entangled pairs.
///
/// Invariant: every position appears in at most one pair, and
/// `partners` holds both directions of every pair in `pairs`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entanglements {
    pairs: IndexSet<EntangledPair>,
    partners: HashMap<Position, Position>,
}

impl Entanglements {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Link `a` with `b`.
    ///
    /// Refused (returns `false`, nothing changes) when `a == b` or when
    /// either position is already paired.
    pub fn link(&mut self, a: Position, b: Position) -> bool {
        if a == b || self.partners.contains_key(&a) || self.partners.contains_key(&b) {
            return false;
        }
        self.pairs.insert(EntangledPair {
            first: a,
            second: b,
        });
        self.partners.insert(a, b);
        self.partners.insert(b, a);
        true
    }

    /// Remove the pair linking `a` and `b`, in either order.
    ///
    /// Returns `false` when no such pair exists. A position paired with
    /// someone other than the given partner is left untouched.
    pub fn unlink(&mut self, a: Position, b: Position) -> bool {
        if self.partners.get(&a) != Some(&b) {
            return false;
        }
        let forward = EntangledPair {
            first: a,
            second: b,
        };
        let backward = EntangledPair {
            first: b,
            second: a,
        };
        if !self.pairs.shift_remove(&forward) {
            self.pairs.shift_remove(&backward);
        }
        self.partners.remove(&a);
        self.partners.remove(&b);
        true
    }

    /// Partner of `pos`, if it is currently paired.
    pub fn partner_of(&self, pos: Position) -> Option<Position> {
        self.partners.get(&pos).copied()
    }

    /// Whether `pos` belongs to any active pair.
    pub fn contains(&self, pos: Position) -> bool {
        self.partners.contains_key(&pos)
    }

    /// Active pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &EntangledPair> {
        self.pairs.iter()
    }

    /// Number of active pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` when no pairs are active.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
