//! Per-generation counters for the stepping loop.
//!
//! [`GenerationMetrics`] captures timing and transition counts for a
//! single `iterate()` call, so drivers can render status lines or profile
//! without re-scanning the grid.

/// Timing and transition counts collected during a single generation.
///
/// Transition counters describe base-rule outcomes; overrides are counted
/// separately in `links_formed` and `anti_correlated`. The population
/// fields describe the committed generation after overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationMetrics {
    /// Wall-clock time for the whole pass, in microseconds.
    pub total_us: u64,
    /// Dead cells born this generation (3 or 4 live neighbours).
    pub births: u32,
    /// Live cells killed by under- or overpopulation.
    pub deaths: u32,
    /// Observed superposed cells that collapsed.
    pub collapses: u32,
    /// Births that formed a new entangled pair.
    pub links_formed: u32,
    /// Births with 4 live neighbours whose link was refused by exclusivity.
    pub links_refused: u32,
    /// Partners forced to the opposite of a collapsing cell.
    pub anti_correlated: u32,
    /// Live cells after the generation.
    pub alive: usize,
    /// Superposed cells after the generation.
    pub superposed: usize,
    /// Active entangled pairs after the generation.
    pub entangled_pairs: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = GenerationMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.births, 0);
        assert_eq!(m.deaths, 0);
        assert_eq!(m.collapses, 0);
        assert_eq!(m.links_formed, 0);
        assert_eq!(m.links_refused, 0);
        assert_eq!(m.anti_correlated, 0);
        assert_eq!(m.alive, 0);
        assert_eq!(m.superposed, 0);
        assert_eq!(m.entangled_pairs, 0);
    }
}
