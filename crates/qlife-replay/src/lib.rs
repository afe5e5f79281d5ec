//! Determinism verification for qlife runs.
//!
//! A run is reproducible when the same seed and configuration yield the
//! same generation sequence. This crate fingerprints generations with
//! FNV-1a so two runs can be compared cheaply, and falls back to a
//! per-cell diff when fingerprints disagree.
//!
//! - [`snapshot_hash`] / [`config_hash`] fingerprint state and setup
//! - [`record_hashes`] captures a run as a list of per-generation hashes
//! - [`compare_snapshot`] and [`replay_and_compare`] locate divergence

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod hash;

pub use compare::{
    compare_snapshot, record_hashes, replay_and_compare, CellDivergence, DivergenceReport,
};
pub use hash::{config_hash, snapshot_hash};
