//! The toroidal grid and its generation step.
//!
//! # Update model
//!
//! [`Grid::iterate`] is synchronous. Every cell reads only the previous
//! generation; results land in a fresh buffer that starts as a copy of the
//! previous one, so a cell no rule matches keeps its state. Entanglement
//! effects that touch *another* cell (the partner of a new link, the
//! anti-correlated partner of a collapse) are collected during the scan
//! and applied after it, so they win over that cell's own base result
//! regardless of scan order.
//!
//! All randomness (initial sampling, collapse outcomes) comes from one
//! `ChaCha8Rng` seeded at construction and consumed in row-major order.
//! Identical seeds and call sequences reproduce identical runs.

use std::fmt;
use std::time::Instant;

use qlife_core::{CellState, Generation, Position, SnapshotAccess};
use qlife_space::{SpaceError, Torus};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use crate::entangle::Entanglements;
use crate::metrics::GenerationMetrics;
use crate::rule::{self, Transition};
use crate::snapshot::GridSnapshot;

// ── GridError ──────────────────────────────────────────────────────

/// Errors detected while constructing a [`Grid`].
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The dimensions do not describe a valid torus.
    Space(SpaceError),
    /// The supplied cell data has the wrong number of rows.
    RowCountMismatch {
        /// The configured height.
        expected: u32,
        /// Rows actually supplied.
        found: usize,
    },
    /// A supplied row has the wrong number of cells.
    RowLengthMismatch {
        /// Index of the offending row.
        row: usize,
        /// The configured width.
        expected: u32,
        /// Cells actually supplied in that row.
        found: usize,
    },
    /// Initial live probability is NaN or outside `[0, 1]`.
    InvalidProbability {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::RowCountMismatch { expected, found } => {
                write!(f, "expected {expected} rows, got {found}")
            }
            Self::RowLengthMismatch {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row}: expected {expected} cells, got {found}")
            }
            Self::InvalidProbability { value } => {
                write!(f, "start alive probability must be in [0, 1], got {value}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for GridError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── Grid ───────────────────────────────────────────────────────────

/// A toroidal cellular automaton with superposed cells and entanglement.
///
/// Two grids compare equal when their dimensions and cells match; the
/// entanglement set, RNG state and generation counter are not compared.
#[derive(Clone)]
pub struct Grid {
    torus: Torus,
    cells: Vec<CellState>,
    entangled: Entanglements,
    rng: ChaCha8Rng,
    seed: u64,
    generation: Generation,
    stable: bool,
    last_metrics: GenerationMetrics,
}

impl Grid {
    /// Build a grid by sampling each cell, row-major, as `Alive` with
    /// probability `start_alive_probability` and `Dead` otherwise.
    ///
    /// # Errors
    ///
    /// [`GridError::Space`] for a zero or oversized dimension,
    /// [`GridError::InvalidProbability`] for a NaN or out-of-range
    /// probability.
    pub fn random(
        width: u32,
        height: u32,
        seed: u64,
        start_alive_probability: f64,
    ) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&start_alive_probability) {
            return Err(GridError::InvalidProbability {
                value: start_alive_probability,
            });
        }
        let torus = Torus::new(width, height)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cells = (0..torus.cell_count())
            .map(|_| CellState::from_alive(rng.random::<f64>() < start_alive_probability))
            .collect();
        Ok(Self::assemble(torus, cells, rng, seed))
    }

    /// Build a grid from explicit rows of cells.
    ///
    /// `seed` initialises the RNG used for collapse outcomes.
    ///
    /// # Errors
    ///
    /// [`GridError::Space`] for a zero or oversized dimension,
    /// [`GridError::RowCountMismatch`] if `rows.len() != height`, and
    /// [`GridError::RowLengthMismatch`] for the first row whose length is
    /// not `width`.
    pub fn from_rows(
        width: u32,
        height: u32,
        rows: Vec<Vec<CellState>>,
        seed: u64,
    ) -> Result<Self, GridError> {
        let torus = Torus::new(width, height)?;
        if rows.len() != height as usize {
            return Err(GridError::RowCountMismatch {
                expected: height,
                found: rows.len(),
            });
        }
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != width as usize)
            .map(|(i, r)| (i, r.len()))
        {
            return Err(GridError::RowLengthMismatch {
                row,
                expected: width,
                found,
            });
        }
        let cells = rows.into_iter().flatten().collect();
        Ok(Self::assemble(
            torus,
            cells,
            ChaCha8Rng::seed_from_u64(seed),
            seed,
        ))
    }

    fn assemble(torus: Torus, cells: Vec<CellState>, rng: ChaCha8Rng, seed: u64) -> Self {
        let mut grid = Self {
            torus,
            cells,
            entangled: Entanglements::new(),
            rng,
            seed,
            generation: Generation(0),
            stable: false,
            last_metrics: GenerationMetrics::default(),
        };
        grid.last_metrics.alive = grid.count(CellState::Alive);
        grid.last_metrics.superposed = grid.count(CellState::Superposed);
        grid
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.torus.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.torus.height()
    }

    /// The grid's topology.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// Seed the grid was constructed with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether the most recent `iterate()` left every cell unchanged.
    /// `false` before the first iteration.
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Metrics from the most recent generation.
    pub fn last_metrics(&self) -> &GenerationMetrics {
        &self.last_metrics
    }

    /// State at `(x, y)`, wrapped onto the torus.
    pub fn get(&self, x: i32, y: i32) -> CellState {
        self.cells[self.torus.index(Position::new(x, y))]
    }

    /// Overwrite the state at `(x, y)`, wrapped onto the torus.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) {
        let idx = self.torus.index(Position::new(x, y));
        self.cells[idx] = state;
    }

    /// The 8 Moore neighbours of `(x, y)` with their wrapped positions,
    /// in N-W, N, N-E, W, E, S-W, S, S-E order.
    pub fn neighbours(&self, x: i32, y: i32) -> [(CellState, Position); 8] {
        self.torus
            .neighbours(Position::new(x, y))
            .map(|p| (self.cells[self.torus.index(p)], p))
    }

    /// Entangle the cells at `a` and `b` (wrapped onto the torus).
    ///
    /// Silently refused when both wrap to the same cell or either is
    /// already entangled. Returns whether a pair was created.
    pub fn link(&mut self, a: Position, b: Position) -> bool {
        let (a, b) = (self.torus.wrap(a), self.torus.wrap(b));
        self.entangled.link(a, b)
    }

    /// Remove the pair linking `a` and `b`, if any. Returns whether a pair
    /// was removed.
    pub fn unlink(&mut self, a: Position, b: Position) -> bool {
        let (a, b) = (self.torus.wrap(a), self.torus.wrap(b));
        self.entangled.unlink(a, b)
    }

    /// The active entanglement set.
    pub fn entangled(&self) -> &Entanglements {
        &self.entangled
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.torus.width() as usize)
    }

    /// Owned copy of the current generation.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width(),
            height: self.height(),
            cells: self.cells.clone(),
            pairs: self.entangled.iter().copied().collect(),
            generation: self.generation,
            seed: self.seed,
            stable: self.stable,
        }
    }

    /// Advance one generation and return whether it was a fixed point.
    ///
    /// The new generation is committed even when unchanged; the returned
    /// flag is also available from [`is_stable`](Self::is_stable).
    pub fn iterate(&mut self) -> bool {
        let started = Instant::now();
        let torus = self.torus;
        let prev = &self.cells;
        let entangled = &mut self.entangled;
        let rng = &mut self.rng;

        let mut next = prev.clone();
        let mut overrides: SmallVec<[(usize, CellState); 16]> = SmallVec::new();
        let mut metrics = GenerationMetrics::default();

        for (idx, pos) in torus.canonical_ordering().enumerate() {
            let nb_idx = torus.neighbour_indices(pos);
            let alive = nb_idx.iter().filter(|&&i| prev[i].is_alive()).count() as u8;

            match rule::transition(prev[idx], alive) {
                Transition::Keep => {}
                Transition::Birth { entangle } => {
                    next[idx] = CellState::Alive;
                    metrics.births += 1;
                    if !entangle {
                        continue;
                    }
                    let Some(partner_idx) = nb_idx.iter().copied().find(|&i| prev[i].is_alive())
                    else {
                        continue;
                    };
                    let Some(partner) = torus.position(partner_idx) else {
                        continue;
                    };
                    if entangled.link(pos, partner) {
                        overrides.push((idx, CellState::Superposed));
                        overrides.push((partner_idx, CellState::Superposed));
                        metrics.links_formed += 1;
                    } else {
                        metrics.links_refused += 1;
                    }
                }
                Transition::Death => {
                    next[idx] = CellState::Dead;
                    metrics.deaths += 1;
                }
                Transition::Collapse => {
                    let collapsed = CellState::from_alive(rng.random_bool(0.5));
                    next[idx] = collapsed;
                    metrics.collapses += 1;
                    if let Some(partner) = entangled.partner_of(pos) {
                        let partner_idx = torus.index(partner);
                        if prev[partner_idx].is_superposed() {
                            if let Some(opposite) = collapsed.opposite() {
                                overrides.push((partner_idx, opposite));
                                metrics.anti_correlated += 1;
                            }
                        }
                        entangled.unlink(pos, partner);
                    }
                }
            }
        }

        for (idx, state) in overrides {
            next[idx] = state;
        }

        let stable = next == *prev;
        self.cells = next;
        self.generation = self.generation.next();
        self.stable = stable;

        metrics.alive = self.count(CellState::Alive);
        metrics.superposed = self.count(CellState::Superposed);
        metrics.entangled_pairs = self.entangled.len();
        metrics.total_us = started.elapsed().as_micros() as u64;
        self.last_metrics = metrics;

        stable
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.torus == other.torus && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("generation", &self.generation)
            .field("seed", &self.seed)
            .field("entangled", &self.entangled.len())
            .field("stable", &self.stable)
            .finish()
    }
}

impl SnapshotAccess for Grid {
    fn width(&self) -> u32 {
        self.torus.width()
    }

    fn height(&self) -> u32 {
        self.torus.height()
    }

    fn cells(&self) -> &[CellState] {
        &self.cells
    }

    fn generation(&self) -> Generation {
        self.generation
    }

    fn entangled_count(&self) -> usize {
        self.entangled.len()
    }
}
