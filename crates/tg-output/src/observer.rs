//! `StoreObserver` — bridges `SimObserver` to a `RunStore`.

use std::path::{Path, PathBuf};

use tg_sim::{Run, SimObserver, Snapshot};

use crate::error::OutputError;
use crate::store::RunStore;

/// A [`SimObserver`] that accumulates the run in memory and persists it
/// through a [`RunStore`]: every `save_interval` ticks during the run, and
/// unconditionally once more at run end.
///
/// Persistence and stepping are deliberately decoupled: a failed save never
/// aborts the tick loop.  Errors are parked internally because observer
/// methods have no return value — after the run, check with
/// [`take_error`][Self::take_error].  Only the first error is kept; files
/// written by earlier successful saves are unaffected.
pub struct StoreObserver {
    store:         RunStore,
    save_interval: u64,
    run:           Run,
    last_saved:    Option<PathBuf>,
    last_error:    Option<OutputError>,
}

impl StoreObserver {
    /// An observer saving through `store` every `save_interval` ticks.
    /// `0` disables mid-run saves; the run-end save still happens.
    pub fn new(store: RunStore, save_interval: u64) -> Self {
        Self {
            store,
            save_interval,
            run:        Vec::new(),
            last_saved: None,
            last_error: None,
        }
    }

    /// Take the stored persistence error (if any) after the run.
    ///
    /// Returns `None` if all saves succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Path written by the most recent successful save.
    pub fn last_saved(&self) -> Option<&Path> {
        self.last_saved.as_deref()
    }

    /// The run accumulated so far.
    pub fn run(&self) -> &[Snapshot] {
        &self.run
    }

    /// Unwrap the inner store (e.g. to load the run back after the sim).
    pub fn into_store(self) -> RunStore {
        self.store
    }

    fn save_now(&mut self) {
        match self.store.save(&self.run) {
            Ok(path) => self.last_saved = Some(path),
            Err(e) => {
                // Keep only the first error.
                if self.last_error.is_none() {
                    self.last_error = Some(e);
                }
            }
        }
    }
}

impl SimObserver for StoreObserver {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self.run.push(snapshot.clone());
        if self.save_interval > 0 && self.run.len() as u64 % self.save_interval == 0 {
            self.save_now();
        }
    }

    fn on_run_end(&mut self, _final_step: u64) {
        self.save_now();
    }
}
