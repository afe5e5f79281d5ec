//! Core types and traits for the qlife cellular automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: the three-valued
//! [`CellState`], the [`Position`] value type, the [`Generation`] counter,
//! and the [`SnapshotAccess`] trait through which renderers and replay
//! tooling read committed generations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod id;
pub mod traits;

pub use cell::CellState;
pub use id::{Generation, Position};
pub use traits::SnapshotAccess;
