//! Snapshot wire codec.
//!
//! # Wire format
//!
//! A persisted run is a JSON array of compressed snapshots.  Compression is
//! structural, not byte-level: the per-vehicle `speed` field is shortened to
//! `s`, congestion is rounded to 3 decimal places (lossy by design), and the
//! run-constant `metadata` object is physically present only on the step-0
//! record.
//!
//! # Round-trip law
//!
//! `decompress_run(compress_run(run))` reproduces every snapshot field
//! except congestion (within rounding error) and recovers the step-0
//! metadata exactly.  Snapshots after step 0 come back with `metadata:
//! None` — see [`decompress_run`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tg_sim::{Run, RunMetadata, Snapshot, VehicleState};

// ── Wire records ──────────────────────────────────────────────────────────────

/// One vehicle on the wire: `speed` shortened to `s`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedVehicle {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    pub s: u8,
}

/// One snapshot on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompressedSnapshot {
    pub step: u64,
    pub timestamp: DateTime<Utc>,
    /// Rounded to 3 decimal places.
    pub congestion: f64,
    pub vehicles: Vec<CompressedVehicle>,
    /// Serialized only on the step-0 record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RunMetadata>,
}

// ── Compression ───────────────────────────────────────────────────────────────

/// Round to 3 decimal places — the stored congestion precision.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Compress one snapshot.  `is_first` controls whether the metadata object
/// is carried on the wire.
pub fn compress(snapshot: &Snapshot, is_first: bool) -> CompressedSnapshot {
    CompressedSnapshot {
        step: snapshot.step,
        timestamp: snapshot.timestamp,
        congestion: round3(snapshot.congestion),
        vehicles: snapshot
            .vehicles
            .iter()
            .map(|v| CompressedVehicle { id: v.id, x: v.x, y: v.y, s: v.speed })
            .collect(),
        metadata: if is_first { snapshot.metadata } else { None },
    }
}

/// Compress a whole run; only the first record carries metadata.
pub fn compress_run(run: &[Snapshot]) -> Vec<CompressedSnapshot> {
    run.iter()
        .enumerate()
        .map(|(i, snapshot)| compress(snapshot, i == 0))
        .collect()
}

// ── Decompression ─────────────────────────────────────────────────────────────

/// Rebuild full snapshots from wire records.
///
/// The metadata carried on the first record is reattached to the snapshot
/// whose `step == 0`; every other snapshot receives `None`.  This asymmetry
/// is the on-disk compatibility contract for existing run files — changing
/// it would re-interpret data already written — so it is preserved here
/// deliberately rather than reconstructing metadata onto later snapshots.
pub fn decompress_run(records: &[CompressedSnapshot]) -> Run {
    let carried: Option<RunMetadata> = records.first().and_then(|r| r.metadata);

    records
        .iter()
        .map(|record| Snapshot {
            timestamp: record.timestamp,
            step: record.step,
            vehicles: record
                .vehicles
                .iter()
                .map(|v| VehicleState { id: v.id, x: v.x, y: v.y, speed: v.s })
                .collect(),
            congestion: record.congestion,
            metadata: if record.step == 0 { carried } else { None },
        })
        .collect()
}
