//! Per-tick state records.
//!
//! # Design
//!
//! Snapshots are explicit serde records with a fixed schema, not free-form
//! maps: the wire format is part of the engine's contract and downstream
//! tooling (codec, statistics, analysis notebooks) relies on stable field
//! names.  Timestamps are `chrono` UTC instants and serialize as ISO-8601 /
//! RFC 3339 strings.
//!
//! `metadata` is authoritative once per run: the step-0 snapshot carries
//! `Some`, every later snapshot `None` and references it implicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The full ordered sequence of snapshots produced by one execution.
pub type Run = Vec<Snapshot>;

// ── RunMetadata ───────────────────────────────────────────────────────────────

/// Run-constant facts, recorded once on the first snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub width: u32,
    pub height: u32,
    pub vehicle_count: u32,
}

// ── VehicleState ──────────────────────────────────────────────────────────────

/// One vehicle's position and speed at snapshot time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleState {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    /// `0` until the vehicle's first successful move, then in `[1, 4]`.
    pub speed: u8,
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// The complete simulation state after one tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Wall-clock capture instant (UTC, RFC 3339 on the wire).
    pub timestamp: DateTime<Utc>,

    /// 0-indexed tick this snapshot describes: the first `step()` call of a
    /// run yields `step == 0`.
    pub step: u64,

    /// Vehicle states in ascending `VehicleId` order.
    pub vehicles: Vec<VehicleState>,

    /// Fraction of grid cells occupied, in `[0, 1]`.
    pub congestion: f64,

    /// `Some` only on the step-0 snapshot.
    pub metadata: Option<RunMetadata>,
}
