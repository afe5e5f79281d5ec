//! Integration test: seeded runs replay bit-for-bit.

use qlife_core::SnapshotAccess;
use qlife_engine::{Grid, SimConfig, Simulation};
use qlife_replay::{
    compare_snapshot, config_hash, record_hashes, replay_and_compare, snapshot_hash,
};

fn config(seed: u64) -> SimConfig {
    SimConfig {
        width: 32,
        height: 20,
        seed,
        start_alive_probability: 0.35,
        ..SimConfig::default()
    }
}

#[test]
fn same_seed_replays_identically() {
    let mut a = Simulation::new(config(2024)).unwrap();
    let recorded = record_hashes(40, &mut || snapshot_hash(&a.step().snapshot));

    let mut b = Simulation::new(config(2024)).unwrap();
    let report = replay_and_compare(&recorded, &mut || snapshot_hash(&b.step().snapshot));
    assert_eq!(report, None);
}

#[test]
fn different_seed_diverges() {
    let mut a = Simulation::new(config(1)).unwrap();
    let recorded = record_hashes(10, &mut || snapshot_hash(&a.step().snapshot));

    let mut b = Simulation::new(config(2)).unwrap();
    let report = replay_and_compare(&recorded, &mut || snapshot_hash(&b.step().snapshot));
    assert!(report.is_some());
}

#[test]
fn entanglement_sets_match_step_for_step() {
    let mut a = Simulation::new(config(77)).unwrap();
    let mut b = Simulation::new(config(77)).unwrap();
    for _ in 0..30 {
        let ra = a.step();
        let rb = b.step();
        assert_eq!(ra.snapshot, rb.snapshot);
        assert_eq!(ra.snapshot.pairs(), rb.snapshot.pairs());
    }
}

#[test]
fn divergent_cell_is_located() {
    let recorded = Grid::random(8, 8, 5, 0.5).unwrap();
    let mut replayed = recorded.clone();
    let flipped = replayed.get(3, 6).opposite().unwrap();
    replayed.set(3, 6, flipped);

    let report = compare_snapshot(&replayed, snapshot_hash(&recorded), 0, Some(&recorded))
        .expect("cells differ");
    assert_eq!(report.divergences.len(), 1);
    assert_eq!((report.divergences[0].x, report.divergences[0].y), (3, 6));
}

#[test]
fn config_hash_tracks_initial_state_inputs() {
    let c = config(9);
    let h = config_hash(c.seed, c.width, c.height, c.start_alive_probability);
    assert_eq!(h, config_hash(9, 32, 20, 0.35));
    assert_eq!(
        snapshot_hash(&Simulation::new(c.clone()).unwrap().snapshot()),
        snapshot_hash(&Simulation::new(c).unwrap().snapshot())
    );
}

#[test]
fn snapshot_reports_status_fields() {
    let mut sim = Simulation::new(config(31)).unwrap();
    let result = sim.step();
    assert_eq!(result.snapshot.generation().0, 1);
    assert_eq!(result.snapshot.seed(), 31);
    assert_eq!(
        result.snapshot.entangled_count(),
        result.metrics.entangled_pairs
    );
    assert_eq!(
        result.snapshot.count(qlife_core::CellState::Alive),
        result.metrics.alive
    );
}
