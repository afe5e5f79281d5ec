//! The per-cell transition table.
//!
//! Thresholds deliberately differ from classic Life: births happen on 3 or
//! 4 live neighbours and live cells survive on 2 through 5.

use qlife_core::CellState;

/// Fewest live neighbours that birth a dead cell.
pub const BIRTH_MIN: u8 = 3;
/// Most live neighbours that birth a dead cell.
pub const BIRTH_MAX: u8 = 4;
/// Live-neighbour count at which a birth also attempts entanglement.
pub const ENTANGLE_AT: u8 = 4;
/// Fewest live neighbours a live cell survives with.
pub const SURVIVE_MIN: u8 = 2;
/// Most live neighbours a live cell survives with.
pub const SURVIVE_MAX: u8 = 5;

/// Base outcome for one cell, before entanglement overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Carry the previous state forward.
    Keep,
    /// Dead cell becomes alive; `entangle` requests a link with the first
    /// live neighbour.
    Birth {
        /// Whether the birth attempts to form an entangled pair.
        entangle: bool,
    },
    /// Live cell dies from under- or overpopulation.
    Death,
    /// Observed superposed cell collapses to a random classical state.
    Collapse,
}

/// Classify a cell from its previous state and live-neighbour count.
pub fn transition(prev: CellState, alive_neighbours: u8) -> Transition {
    match prev {
        CellState::Dead if (BIRTH_MIN..=BIRTH_MAX).contains(&alive_neighbours) => {
            Transition::Birth {
                entangle: alive_neighbours == ENTANGLE_AT,
            }
        }
        CellState::Alive if !(SURVIVE_MIN..=SURVIVE_MAX).contains(&alive_neighbours) => {
            Transition::Death
        }
        CellState::Superposed if alive_neighbours > 0 => Transition::Collapse,
        _ => Transition::Keep,
    }
}
