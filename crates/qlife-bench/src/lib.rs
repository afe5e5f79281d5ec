//! Benchmark profiles for the qlife cellular automaton.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarking:
//!
//! - [`reference_config`]: 100x100 grid (10K cells)
//! - [`stress_config`]: 316x316 grid (~100K cells)
//! - [`warmed_grid`]: a grid advanced past its initial transient

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use qlife_engine::{Grid, SimConfig};

/// Reference profile: 100x100 grid, 35% initially alive, unbounded.
pub fn reference_config(seed: u64) -> SimConfig {
    SimConfig {
        width: 100,
        height: 100,
        seed,
        start_alive_probability: 0.35,
        ..SimConfig::default()
    }
}

/// Stress profile: 316x316 grid (~100K cells), same density as
/// [`reference_config`].
pub fn stress_config(seed: u64) -> SimConfig {
    SimConfig {
        width: 316,
        height: 316,
        ..reference_config(seed)
    }
}

/// Build the grid for `config` and advance it `warmup` generations, so
/// benchmarks measure a populated mix of states and live pairs rather
/// than the initial random soup.
///
/// Panics if `config` is invalid.
pub fn warmed_grid(config: &SimConfig, warmup: usize) -> Grid {
    let mut grid = match config.build_grid() {
        Ok(grid) => grid,
        Err(e) => panic!("invalid benchmark profile: {e}"),
    };
    for _ in 0..warmup {
        grid.iterate();
    }
    grid
}
