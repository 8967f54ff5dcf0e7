//! Integration tests for the simulation model.

use tg_core::{GridParams, SimConfig};

use crate::{NoopObserver, TrafficModel};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(width: u32, height: u32, n_vehicles: u32, seed: u64) -> SimConfig {
    SimConfig::new(GridParams::new(width, height, n_vehicles), seed, 10)
}

#[cfg(test)]
mod construction {
    use std::collections::HashSet;

    use tg_core::SimConfig;
    use tg_grid::Cell;

    use super::*;
    use crate::SimError;

    #[test]
    fn builds_exact_fleet_on_valid_cells() {
        let model = TrafficModel::new(config(10, 10, 5, 42)).unwrap();
        assert_eq!(model.vehicles().len(), 5);
        for v in model.vehicles() {
            assert!(model.grid().contains(v.cell), "vehicle {} off-grid", v.id);
            assert_eq!(v.speed, 0, "speed must be 0 before the first move");
        }
    }

    #[test]
    fn placement_is_collision_free() {
        // Tight fit: 24 vehicles on 25 cells leaves no room for stacking.
        let model = TrafficModel::new(config(5, 5, 24, 7)).unwrap();
        let cells: HashSet<Cell> = model.vehicles().iter().map(|v| v.cell).collect();
        assert_eq!(cells.len(), 24, "every vehicle on its own cell");
        assert_eq!(model.grid().occupancy_count(), 24);
    }

    #[test]
    fn ids_are_dense_and_stable() {
        let model = TrafficModel::new(config(10, 10, 8, 1)).unwrap();
        for (i, v) in model.vehicles().iter().enumerate() {
            assert_eq!(v.id.index(), i);
        }
    }

    #[test]
    fn rejects_invalid_params_before_allocation() {
        let err = TrafficModel::new(config(4, 10, 5, 0)).unwrap_err();
        let SimError::Config(core) = err;
        assert!(core.to_string().contains("width"));
    }

    #[test]
    fn rejects_more_vehicles_than_cells() {
        assert!(TrafficModel::new(config(5, 5, 26, 0)).is_err());
    }

    #[test]
    fn grid_matches_fleet_positions() {
        let model = TrafficModel::new(config(8, 6, 10, 3)).unwrap();
        for v in model.vehicles() {
            assert_eq!(model.grid().occupant(v.cell), Some(v.id));
        }
    }

    #[test]
    fn default_save_interval_is_ten() {
        let cfg: SimConfig = config(10, 10, 5, 0);
        assert_eq!(cfg.save_interval_steps, 10);
    }
}

#[cfg(test)]
mod stepping {
    use std::collections::HashMap;

    use tg_core::VehicleId;
    use tg_grid::Cell;

    use super::*;

    #[test]
    fn step_counter_increments_once_per_call() {
        let mut model = TrafficModel::new(config(10, 10, 5, 42)).unwrap();
        assert_eq!(model.step_count(), 0);
        for expected in 0..3u64 {
            let snapshot = model.step();
            assert_eq!(snapshot.step, expected, "snapshots are 0-indexed");
            assert_eq!(model.step_count(), expected + 1);
        }
    }

    #[test]
    fn vehicle_count_is_stable_across_ticks() {
        let mut model = TrafficModel::new(config(10, 10, 5, 42)).unwrap();
        for _ in 0..3 {
            let snapshot = model.step();
            assert_eq!(snapshot.vehicles.len(), 5);
            assert_eq!(model.grid().occupancy_count(), 5);
        }
    }

    #[test]
    fn moves_stay_within_moore_neighborhood() {
        let mut model = TrafficModel::new(config(10, 10, 5, 42)).unwrap();
        for _ in 0..3 {
            let before: HashMap<VehicleId, Cell> =
                model.vehicles().iter().map(|v| (v.id, v.cell)).collect();
            model.step();
            for v in model.vehicles() {
                let prev = before[&v.id];
                let stayed = v.cell == prev;
                let adjacent = model.grid().neighbors(prev).contains(&v.cell);
                assert!(
                    stayed || adjacent,
                    "vehicle {} jumped from {prev} to {}",
                    v.id,
                    v.cell
                );
            }
        }
    }

    #[test]
    fn speeds_follow_the_move_state_machine() {
        let mut model = TrafficModel::new(config(10, 10, 5, 42)).unwrap();
        for _ in 0..20 {
            let before: HashMap<VehicleId, (Cell, u8)> = model
                .vehicles()
                .iter()
                .map(|v| (v.id, (v.cell, v.speed)))
                .collect();
            model.step();
            for v in model.vehicles() {
                let (prev_cell, prev_speed) = before[&v.id];
                if v.cell == prev_cell {
                    assert_eq!(v.speed, prev_speed, "blocked vehicles keep their speed");
                } else {
                    assert!((1..=4).contains(&v.speed), "moved vehicle speed {}", v.speed);
                }
            }
        }
    }

    #[test]
    fn bijective_placement_survives_stepping() {
        let mut model = TrafficModel::new(config(6, 6, 20, 9)).unwrap();
        for _ in 0..50 {
            model.step();
            for v in model.vehicles() {
                assert_eq!(model.grid().occupant(v.cell), Some(v.id));
            }
            assert_eq!(model.grid().occupancy_count(), 20);
        }
    }

    #[test]
    fn run_steps_collects_one_snapshot_per_tick() {
        let mut model = TrafficModel::new(config(10, 10, 5, 42)).unwrap();
        let run = model.run_steps(12, &mut NoopObserver);
        assert_eq!(run.len(), 12);
        assert_eq!(run.last().unwrap().step, 11);
    }
}

#[cfg(test)]
mod congestion {
    use super::*;

    #[test]
    fn always_in_unit_interval() {
        let mut model = TrafficModel::new(config(10, 10, 30, 5)).unwrap();
        for _ in 0..20 {
            let c = model.step().congestion;
            assert!((0.0..=1.0).contains(&c), "congestion {c} out of range");
        }
    }

    #[test]
    fn full_grid_is_one() {
        let mut model = TrafficModel::new(config(5, 5, 25, 0)).unwrap();
        assert_eq!(model.congestion(), 1.0);
        // Nobody can move on a saturated grid, so it stays full.
        model.step();
        assert_eq!(model.congestion(), 1.0);
    }

    #[test]
    fn matches_fleet_over_cells() {
        let model = TrafficModel::new(config(10, 10, 25, 1)).unwrap();
        assert!((model.congestion() - 0.25).abs() < f64::EPSILON);
    }
}

#[cfg(test)]
mod snapshots {
    use super::*;

    #[test]
    fn metadata_only_on_step_zero() {
        let mut model = TrafficModel::new(config(10, 10, 5, 42)).unwrap();
        let first = model.step();
        let meta = first.metadata.expect("step 0 carries metadata");
        assert_eq!(meta.width, 10);
        assert_eq!(meta.height, 10);
        assert_eq!(meta.vehicle_count, 5);

        let second = model.step();
        assert!(second.metadata.is_none());
    }

    #[test]
    fn vehicles_in_id_order() {
        let mut model = TrafficModel::new(config(10, 10, 7, 4)).unwrap();
        let snapshot = model.step();
        let ids: Vec<u32> = snapshot.vehicles.iter().map(|v| v.id).collect();
        assert_eq!(ids, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn serde_roundtrip() {
        let mut model = TrafficModel::new(config(10, 10, 3, 11)).unwrap();
        let snapshot = model.step();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: crate::Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}

#[cfg(test)]
mod determinism {
    use super::*;

    /// Strip timestamps: they are wall-clock and differ between runs.
    fn trace(model: &mut TrafficModel, steps: u64) -> Vec<(u64, Vec<(u32, u32, u32, u8)>, f64)> {
        (0..steps)
            .map(|_| {
                let s = model.step();
                let vs = s.vehicles.iter().map(|v| (v.id, v.x, v.y, v.speed)).collect();
                (s.step, vs, s.congestion)
            })
            .collect()
    }

    #[test]
    fn same_seed_same_run() {
        let mut a = TrafficModel::new(config(12, 12, 20, 99)).unwrap();
        let mut b = TrafficModel::new(config(12, 12, 20, 99)).unwrap();
        assert_eq!(trace(&mut a, 15), trace(&mut b, 15));
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = TrafficModel::new(config(12, 12, 20, 1)).unwrap();
        let mut b = TrafficModel::new(config(12, 12, 20, 2)).unwrap();
        assert_ne!(trace(&mut a, 15), trace(&mut b, 15));
    }
}

#[cfg(test)]
mod observers {
    use super::*;
    use crate::{SimObserver, Snapshot};

    struct Counter {
        snapshots: usize,
        ended_at: Option<u64>,
    }

    impl SimObserver for Counter {
        fn on_snapshot(&mut self, _snapshot: &Snapshot) {
            self.snapshots += 1;
        }
        fn on_run_end(&mut self, final_step: u64) {
            self.ended_at = Some(final_step);
        }
    }

    #[test]
    fn hooks_fire_per_tick_and_at_end() {
        let mut model = TrafficModel::new(config(10, 10, 5, 42)).unwrap();
        let mut obs = Counter { snapshots: 0, ended_at: None };
        let run = model.run(&mut obs);
        assert_eq!(run.len(), 10);
        assert_eq!(obs.snapshots, 10);
        assert_eq!(obs.ended_at, Some(10));
    }
}
