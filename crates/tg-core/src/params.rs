//! Simulation parameters and their validation rules.
//!
//! # Design
//!
//! `GridParams` is the gate in front of model construction: a model must
//! never be built from a tuple the validator rejects.  Validation collects
//! *every* violated rule, not just the first, so a caller fixing a bad
//! configuration sees the whole picture in one pass.
//!
//! The bounds mirror what the engine can meaningfully simulate: grids below
//! 5×5 degenerate (most cells are edge cells), grids above 100×100 and fleets
//! above 1,000 vehicles exceed the intended scale of a single sequential run.

use crate::error::{CoreError, CoreResult};

// ── Validation bounds ─────────────────────────────────────────────────────────

/// Smallest accepted grid dimension.
pub const MIN_DIM: u32 = 5;
/// Largest accepted grid dimension.
pub const MAX_DIM: u32 = 100;
/// Smallest accepted fleet size.
pub const MIN_VEHICLES: u32 = 1;
/// Largest accepted fleet size.
pub const MAX_VEHICLES: u32 = 1_000;

/// Default save cadence: persist the accumulated run every N ticks.
pub const DEFAULT_SAVE_INTERVAL: u64 = 10;

// ── GridParams ────────────────────────────────────────────────────────────────

/// The validated triple defining a simulation world.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridParams {
    /// Grid width in cells.  Accepted range: `[5, 100]`.
    pub width: u32,
    /// Grid height in cells.  Accepted range: `[5, 100]`.
    pub height: u32,
    /// Number of vehicles placed at construction.  Accepted range:
    /// `[1, 1000]`, and never more than `width * height`.
    pub n_vehicles: u32,
}

impl GridParams {
    pub fn new(width: u32, height: u32, n_vehicles: u32) -> Self {
        Self { width, height, n_vehicles }
    }

    /// Total number of cells in the grid.
    #[inline]
    pub fn cell_count(&self) -> u32 {
        self.width * self.height
    }

    /// Pure predicate: collect human-readable descriptions of every violated
    /// rule.  An empty vector means the parameters are valid.
    pub fn violations(&self) -> Vec<String> {
        let mut reasons = Vec::new();

        if !(MIN_DIM..=MAX_DIM).contains(&self.width) {
            reasons.push(format!(
                "width must be between {MIN_DIM} and {MAX_DIM}, got {}",
                self.width
            ));
        }
        if !(MIN_DIM..=MAX_DIM).contains(&self.height) {
            reasons.push(format!(
                "height must be between {MIN_DIM} and {MAX_DIM}, got {}",
                self.height
            ));
        }
        if !(MIN_VEHICLES..=MAX_VEHICLES).contains(&self.n_vehicles) {
            reasons.push(format!(
                "vehicle count must be between {MIN_VEHICLES} and {MAX_VEHICLES}, got {}",
                self.n_vehicles
            ));
        }
        if self.n_vehicles as u64 > self.width as u64 * self.height as u64 {
            reasons.push(format!(
                "{} vehicles do not fit on a {}x{} grid",
                self.n_vehicles, self.width, self.height
            ));
        }

        reasons
    }

    /// `true` iff no rule is violated.
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// Validate, turning a non-empty violation list into a fatal
    /// [`CoreError::InvalidParams`].  Rejections are logged at `warn`.
    pub fn validate(&self) -> CoreResult<()> {
        let reasons = self.violations();
        if reasons.is_empty() {
            return Ok(());
        }
        log::warn!("parameter validation failed: {}", reasons.join("; "));
        Err(CoreError::InvalidParams { reasons })
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically constructed by the application crate and handed to the model;
/// `params` must pass validation before any model is built.
#[derive(Copy, Clone, Debug)]
pub struct SimConfig {
    /// The world definition (validated triple).
    pub params: GridParams,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Total ticks to simulate when driving the model with `run`.
    pub total_steps: u64,

    /// Persist the accumulated run every N ticks (plus once at run end).
    /// `0` disables mid-run saves.  Default: 10.
    pub save_interval_steps: u64,
}

impl SimConfig {
    /// A config with the default save cadence.
    pub fn new(params: GridParams, seed: u64, total_steps: u64) -> Self {
        Self {
            params,
            seed,
            total_steps,
            save_interval_steps: DEFAULT_SAVE_INTERVAL,
        }
    }
}
