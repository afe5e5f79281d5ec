//! Toroidal lattice topology for qlife grids.
//!
//! [`Torus`] resolves arbitrary [`Position`](qlife_core::Position) values
//! onto a fixed `width x height` grid whose opposite edges are adjacent,
//! maps them to flat row-major indices, and enumerates the 8-connected
//! Moore neighbourhood in a fixed order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod torus;

pub use error::SpaceError;
pub use torus::{Torus, MOORE_OFFSETS};
