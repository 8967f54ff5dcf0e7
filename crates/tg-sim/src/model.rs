//! The `TrafficModel` struct and its tick loop.

use chrono::Utc;

use tg_core::{SimConfig, SimRng, VehicleId, VehicleRng};
use tg_grid::Grid;

use crate::observer::SimObserver;
use crate::snapshot::{Run, RunMetadata, Snapshot};
use crate::vehicle::Vehicle;
use crate::SimResult;

/// The main simulation runner.
///
/// Owns the grid and the fleet and drives the per-tick loop:
///
/// 1. **Activation order**: shuffle the fleet order with the model-level RNG.
///    Randomized order is deliberate — no vehicle is structurally advantaged
///    by its ID.  (The alternative, a fixed deterministic order, would bias
///    contention toward low IDs.)
/// 2. **Move round**: offer every vehicle exactly one move, sequentially.
///    Each move observes the live grid, so within a tick the occupancy a
///    vehicle sees already includes earlier movers — consistent because the
///    round is strictly sequential.
/// 3. **Capture**: increment the step counter and emit the [`Snapshot`] for
///    the completed tick.  Snapshots are 0-indexed.
///
/// Create via [`TrafficModel::new`]; construction is gated by the parameter
/// validator and fails before any allocation on a rejected configuration.
#[derive(Debug)]
pub struct TrafficModel {
    /// Run configuration (validated world params, seed, run length).
    config: SimConfig,

    /// The occupancy lattice.
    grid: Grid,

    /// The fleet, indexed by `VehicleId`.
    vehicles: Vec<Vehicle>,

    /// Per-vehicle deterministic RNGs, parallel to `vehicles`.
    rngs: Vec<VehicleRng>,

    /// Model-level RNG: initial placement, per-tick activation shuffle.
    sim_rng: SimRng,

    /// Ticks completed so far.  The snapshot emitted by `step()` carries the
    /// pre-increment value, so records are 0-indexed.
    step_count: u64,
}

impl TrafficModel {
    /// Validate `config` and build the model.
    ///
    /// Placement samples `n_vehicles` *distinct* cells uniformly, so the
    /// grid's one-vehicle-per-cell invariant holds from tick 0.  The
    /// validator has already guaranteed the fleet fits the grid.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.params.validate()?;

        let params = config.params;
        let mut grid = Grid::new(params.width, params.height);
        let mut sim_rng = SimRng::new(config.seed);

        let spots = sim_rng.sample_indices(grid.cell_count(), params.n_vehicles as usize);
        let mut vehicles = Vec::with_capacity(spots.len());
        let mut rngs = Vec::with_capacity(spots.len());
        for (i, spot) in spots.into_iter().enumerate() {
            let id = VehicleId(i as u32);
            let cell = grid.cell_at(spot);
            grid.place(id, cell);
            vehicles.push(Vehicle::new(id, cell));
            rngs.push(VehicleRng::new(config.seed, id));
        }

        log::debug!(
            "model built: {}x{} grid, {} vehicles, seed {}",
            params.width, params.height, vehicles.len(), config.seed
        );

        Ok(Self {
            config,
            grid,
            vehicles,
            rngs,
            sim_rng,
            step_count: 0,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the model by one tick and return the resulting snapshot.
    pub fn step(&mut self) -> Snapshot {
        let step = self.step_count;

        // Activation order is re-randomized every tick.
        let mut order: Vec<usize> = (0..self.vehicles.len()).collect();
        self.sim_rng.shuffle(&mut order);

        for i in order {
            self.vehicles[i].try_move(&mut self.grid, &mut self.rngs[i]);
        }

        self.step_count += 1;
        self.capture(step)
    }

    /// Run `total_steps` ticks from the current position, invoking observer
    /// hooks, and return the accumulated run.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Run {
        self.run_steps(self.config.total_steps, observer)
    }

    /// Run exactly `n` ticks from the current position.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> Run {
        let mut run = Vec::with_capacity(n as usize);
        for _ in 0..n {
            let snapshot = self.step();
            observer.on_snapshot(&snapshot);
            run.push(snapshot);
        }
        observer.on_run_end(self.step_count);
        run
    }

    /// Fraction of grid cells currently occupied, in `[0, 1]`.  Computed
    /// from live occupancy on every call.
    pub fn congestion(&self) -> f64 {
        self.grid.occupancy_count() as f64 / self.grid.cell_count() as f64
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Ticks completed so far.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    // ── Capture ───────────────────────────────────────────────────────────

    /// Build the snapshot for the just-completed tick `step`.
    fn capture(&self, step: u64) -> Snapshot {
        Snapshot {
            timestamp: Utc::now(),
            step,
            vehicles: self.vehicles.iter().map(Vehicle::state).collect(),
            congestion: self.congestion(),
            metadata: (step == 0).then(|| self.metadata()),
        }
    }

    fn metadata(&self) -> RunMetadata {
        RunMetadata {
            width: self.config.params.width,
            height: self.config.params.height,
            vehicle_count: self.vehicles.len() as u32,
        }
    }
}
