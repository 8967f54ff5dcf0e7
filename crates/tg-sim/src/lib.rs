//! `tg-sim` — the simulation model and its tick loop.
//!
//! [`TrafficModel`] owns the grid and the fleet, advances one tick at a
//! time, and emits one [`Snapshot`] per tick.  Persistence and statistics
//! live downstream in `tg-output`; the model only produces state.

pub mod error;
pub mod model;
pub mod observer;
pub mod snapshot;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimError, SimResult};
pub use model::TrafficModel;
pub use observer::{NoopObserver, SimObserver};
pub use snapshot::{Run, RunMetadata, Snapshot, VehicleState};
pub use vehicle::{MoveOutcome, Vehicle};
