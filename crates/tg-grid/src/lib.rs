//! `tg-grid` — the fixed-size 2D occupancy lattice.
//!
//! A [`Grid`] maps each cell to at most one [`VehicleId`][tg_core::VehicleId]
//! and answers neighbor and occupancy queries.  It knows nothing about
//! movement rules or snapshots; those live in `tg-sim`.

pub mod grid;

#[cfg(test)]
mod tests;

pub use grid::{Cell, Grid};
