//! The three-valued cell state.

use std::fmt;

/// State of a single grid cell.
///
/// `Superposed` is a label for a cell that was born entangled and has not yet
/// been observed by a live neighbour. It carries no amplitude or phase; the
/// collapse rule is a fair coin drawn from the grid's seeded RNG.
///
/// Only equality is meaningful. Glyph mapping is left to renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Empty cell.
    #[default]
    Dead,
    /// Live cell. The only state counted as a live neighbour.
    Alive,
    /// Entangled, unobserved cell.
    Superposed,
}

impl CellState {
    /// All variants in discriminant order.
    pub const ALL: [CellState; 3] = [CellState::Dead, CellState::Alive, CellState::Superposed];

    /// `true` only for [`CellState::Alive`].
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// `true` only for [`CellState::Superposed`].
    pub fn is_superposed(self) -> bool {
        self == CellState::Superposed
    }

    /// Map a collapse outcome to a classical state.
    pub fn from_alive(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }

    /// The anti-correlated partner of a collapsed state.
    ///
    /// `Alive` and `Dead` swap; `Superposed` has no classical opposite and
    /// returns `None`.
    pub fn opposite(self) -> Option<Self> {
        match self {
            CellState::Dead => Some(CellState::Alive),
            CellState::Alive => Some(CellState::Dead),
            CellState::Superposed => None,
        }
    }

    /// Stable single-byte tag, used by snapshot hashing.
    pub fn as_u8(self) -> u8 {
        match self {
            CellState::Dead => 0,
            CellState::Alive => 1,
            CellState::Superposed => 2,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dead => write!(f, "dead"),
            Self::Alive => write!(f, "alive"),
            Self::Superposed => write!(f, "superposed"),
        }
    }
}
