//! Simulation observer trait for progress reporting and data collection.

use crate::snapshot::Snapshot;

/// Callbacks invoked by [`TrafficModel::run`][crate::TrafficModel::run] at
/// tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The persistence bridge in `tg-output`
/// is the main implementor; a progress printer is another:
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_snapshot(&mut self, snapshot: &Snapshot) {
///         if snapshot.step % self.interval == 0 {
///             println!("step {}: congestion {:.3}", snapshot.step, snapshot.congestion);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per tick with the freshly captured snapshot.
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// Called once after the final tick completes.  `final_step` is the
    /// total number of ticks run.
    fn on_run_end(&mut self, _final_step: u64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
