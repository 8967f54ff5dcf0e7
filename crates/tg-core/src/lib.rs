//! `tg-core` — foundational types for the `tg` grid traffic simulator.
//!
//! This crate is a dependency of every other `tg-*` crate.  It intentionally
//! has no `tg-*` dependencies and minimal external ones (only `rand`,
//! `thiserror`, and the `log` facade).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `VehicleId`                                       |
//! | [`params`] | `GridParams` (validated), `SimConfig`             |
//! | [`rng`]    | `VehicleRng` (per-vehicle), `SimRng` (global)     |
//! | [`timing`] | `timed` — scoped wall-clock measurement           |
//! | [`error`]  | `CoreError`, `CoreResult`                         |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod timing;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::VehicleId;
pub use params::{GridParams, SimConfig};
pub use rng::{SimRng, VehicleRng};
pub use timing::timed;
