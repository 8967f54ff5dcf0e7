//! Summary statistics over a completed (decompressed) run.

use tg_sim::Snapshot;

/// Metrics computed by [`summarize`].  All fields are pre-rounded to their
/// stored precision: congestion to 3 decimal places, speed to 2.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunStats {
    pub total_steps: u64,
    pub avg_congestion: f64,
    pub min_congestion: f64,
    pub max_congestion: f64,
    /// Mean over every vehicle-tick speed observation; `0.0` when the run
    /// holds no observations.
    pub avg_speed: f64,
    /// Vehicle count taken from the first snapshot.
    pub total_vehicles: usize,
}

impl RunStats {
    /// Flat metric-name → value view for downstream consumers.
    pub fn rows(&self) -> [(&'static str, f64); 6] {
        [
            ("total_steps", self.total_steps as f64),
            ("avg_congestion", self.avg_congestion),
            ("min_congestion", self.min_congestion),
            ("max_congestion", self.max_congestion),
            ("avg_speed", self.avg_speed),
            ("total_vehicles", self.total_vehicles as f64),
        ]
    }
}

fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// Compute summary metrics over `run`.  Pure: no side effects, the input is
/// not mutated.  An empty run yields the all-zero default.
pub fn summarize(run: &[Snapshot]) -> RunStats {
    if run.is_empty() {
        return RunStats::default();
    }

    let congestions: Vec<f64> = run.iter().map(|s| s.congestion).collect();
    let avg = congestions.iter().sum::<f64>() / congestions.len() as f64;
    let min = congestions.iter().copied().fold(f64::INFINITY, f64::min);
    let max = congestions.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let speeds: Vec<f64> = run
        .iter()
        .flat_map(|s| s.vehicles.iter().map(|v| v.speed as f64))
        .collect();
    let avg_speed = if speeds.is_empty() {
        0.0
    } else {
        speeds.iter().sum::<f64>() / speeds.len() as f64
    };

    RunStats {
        total_steps: run.len() as u64,
        avg_congestion: round_to(avg, 3),
        min_congestion: round_to(min, 3),
        max_congestion: round_to(max, 3),
        avg_speed: round_to(avg_speed, 2),
        total_vehicles: run[0].vehicles.len(),
    }
}
