//! Hashing utilities for snapshot and configuration comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of simulation state.
//! These hashes are not cryptographically secure; they are used for
//! fast equality checks during replay comparison.

use qlife_core::SnapshotAccess;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the cell content of a snapshot.
///
/// Folds in width and height, then every cell's tag byte in row-major
/// order. The generation index and entanglement set are excluded, so two
/// snapshots hash equal exactly when their cell arrays are equal (modulo
/// collisions), matching grid equality.
pub fn snapshot_hash(snapshot: &dyn SnapshotAccess) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, snapshot.width());
    hash = fnv1a_u32(hash, snapshot.height());
    for cell in snapshot.cells() {
        hash = fnv1a_byte(hash, cell.as_u8());
    }
    hash
}

/// Hash the parameters that determine a run's initial state.
///
/// Used to reject comparisons between runs that could never match.
pub fn config_hash(seed: u64, width: u32, height: u32, start_alive_probability: f64) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, seed);
    hash = fnv1a_u32(hash, width);
    hash = fnv1a_u32(hash, height);
    fnv1a_u64(hash, start_alive_probability.to_bits())
}
