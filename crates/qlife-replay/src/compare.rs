//! Snapshot comparison and replay verification.
//!
//! Hash-first comparison (fast path) with a per-cell fallback on
//! mismatch, plus a driver that replays a run against recorded hashes.

use qlife_core::{CellState, SnapshotAccess};

use crate::hash::snapshot_hash;

/// A single cell that differs between recorded and replayed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellDivergence {
    /// Flat row-major index of the cell.
    pub index: usize,
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
    /// State in the recorded run.
    pub recorded: CellState,
    /// State in the replayed run.
    pub replayed: CellState,
}

/// Report of the divergence found at one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivergenceReport {
    /// Generation at which divergence was detected.
    pub generation: u64,
    /// Hash from the recorded run.
    pub recorded_hash: u64,
    /// Hash computed from the replayed run.
    pub replayed_hash: u64,
    /// Per-cell differences. Empty when only hashes were available, or
    /// when the two snapshots have different shapes.
    pub divergences: Vec<CellDivergence>,
}

/// Compare a replayed snapshot against a recorded hash.
///
/// Returns `None` when the hashes match. On mismatch, and when
/// `recorded_snapshot` is supplied with the same shape, every differing
/// cell is listed.
pub fn compare_snapshot(
    replayed: &dyn SnapshotAccess,
    recorded_hash: u64,
    generation: u64,
    recorded_snapshot: Option<&dyn SnapshotAccess>,
) -> Option<DivergenceReport> {
    let replayed_hash = snapshot_hash(replayed);
    if replayed_hash == recorded_hash {
        return None;
    }

    let mut divergences = Vec::new();
    if let Some(recorded) = recorded_snapshot {
        let same_shape =
            recorded.width() == replayed.width() && recorded.height() == replayed.height();
        if same_shape {
            let width = replayed.width() as usize;
            for (index, (&rec, &rep)) in recorded
                .cells()
                .iter()
                .zip(replayed.cells().iter())
                .enumerate()
            {
                if rec != rep {
                    divergences.push(CellDivergence {
                        index,
                        x: (index % width) as u32,
                        y: (index / width) as u32,
                        recorded: rec,
                        replayed: rep,
                    });
                }
            }
        }
    }

    Some(DivergenceReport {
        generation,
        recorded_hash,
        replayed_hash,
        divergences,
    })
}

/// Run `step_fn` `generations` times, collecting the hash it returns
/// after each step.
pub fn record_hashes(generations: u64, step_fn: &mut dyn FnMut() -> u64) -> Vec<u64> {
    (0..generations).map(|_| step_fn()).collect()
}

/// Replay a run through a caller-provided step function and compare the
/// hash of every generation against `recorded`.
///
/// `step_fn` advances the simulation one generation and returns the hash
/// of the committed state. Generations are numbered from 1. Returns the
/// report for the first mismatch, or `None` if all match.
pub fn replay_and_compare(
    recorded: &[u64],
    step_fn: &mut dyn FnMut() -> u64,
) -> Option<DivergenceReport> {
    for (i, &recorded_hash) in recorded.iter().enumerate() {
        let replayed_hash = step_fn();
        if replayed_hash != recorded_hash {
            return Some(DivergenceReport {
                generation: i as u64 + 1,
                recorded_hash,
                replayed_hash,
                divergences: Vec::new(),
            });
        }
    }
    None
}
