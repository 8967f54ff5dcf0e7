//! Run persistence: timestamped JSON files with retention.
//!
//! # File layout
//!
//! The store treats its results directory as a flat namespace of
//! `simulation_<YYYYMMDD_HHMMSS>.json` files (UTC generation timestamp, no
//! subdirectories, no index file).  Each save event writes the *entire*
//! accumulated run as an indented JSON array of compressed snapshots, so
//! the most recently modified file is always the most complete picture of
//! the run.
//!
//! The store does not create or configure the directory — that is the
//! embedding application's bootstrap job — and it emits diagnostics through
//! the `log` facade with whatever sink that application installed.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::Utc;

use tg_sim::{Run, Snapshot};

use crate::codec::{CompressedSnapshot, compress_run, decompress_run};
use crate::error::OutputResult;

/// Run-file name pieces: `simulation_<timestamp>.json`.
const FILE_PREFIX: &str = "simulation_";
const FILE_SUFFIX: &str = ".json";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// ── CleanupStats ──────────────────────────────────────────────────────────────

/// Outcome of one retention sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanupStats {
    /// Files deleted by either retention rule.
    pub removed: usize,
    /// Deletions that failed and were skipped (logged, non-fatal).
    pub failed: usize,
    /// Run files remaining after the sweep.
    pub kept: usize,
}

// ── RunStore ──────────────────────────────────────────────────────────────────

/// Persists runs to a results directory and loads them back.
pub struct RunStore {
    dir: PathBuf,
}

impl RunStore {
    /// A store over `dir`.  The directory must already exist for saves to
    /// succeed; loads against a missing directory report absence, not error.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // ── Save ──────────────────────────────────────────────────────────────

    /// Compress `run` and write it to a fresh timestamp-named file.
    ///
    /// Failures propagate to the caller; files from earlier save events are
    /// never touched.
    pub fn save(&self, run: &[Snapshot]) -> OutputResult<PathBuf> {
        let filename = format!(
            "{FILE_PREFIX}{}{FILE_SUFFIX}",
            Utc::now().format(TIMESTAMP_FORMAT)
        );
        let path = self.dir.join(filename);

        let records = compress_run(run);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writer.flush()?;

        log::info!("saved {} steps to {}", run.len(), path.display());
        Ok(path)
    }

    // ── Load ──────────────────────────────────────────────────────────────

    /// Load and decompress the most recently modified run file.
    ///
    /// Returns `Ok(None)` when the directory is missing or holds no run
    /// files.  A file that exists but fails to parse is an error — corrupt
    /// data must surface, not vanish.
    pub fn load_latest(&self) -> OutputResult<Option<Run>> {
        let files = self.run_files()?;
        let Some((path, _)) = files.into_iter().max_by_key(|&(_, mtime)| mtime) else {
            log::warn!("no saved runs in {}", self.dir.display());
            return Ok(None);
        };

        let reader = BufReader::new(File::open(&path)?);
        let records: Vec<CompressedSnapshot> = serde_json::from_reader(reader)?;
        let run = decompress_run(&records);

        log::info!("loaded {} steps from {}", run.len(), path.display());
        Ok(Some(run))
    }

    // ── Retention ─────────────────────────────────────────────────────────

    /// Apply the retention policy: keep at most `max_files` newest run
    /// files, then additionally delete any survivor older than
    /// `max_age_days`.
    ///
    /// The two rules are independent and always applied together.  Each
    /// deletion is best-effort: a failure is logged and skipped, and the
    /// sweep continues.  Running cleanup twice with the same limits leaves
    /// the directory unchanged the second time.
    pub fn cleanup(&self, max_files: usize, max_age_days: u64) -> OutputResult<CleanupStats> {
        let cutoff = SystemTime::now()
            .checked_sub(Duration::from_secs(max_age_days.saturating_mul(86_400)))
            .unwrap_or(UNIX_EPOCH);
        self.apply_retention(max_files, cutoff)
    }

    /// Retention core with an explicit age cutoff (everything modified
    /// before `cutoff` is too old).  Split out so tests can exercise the
    /// age rule without rewinding file mtimes.
    pub(crate) fn apply_retention(
        &self,
        max_files: usize,
        cutoff: SystemTime,
    ) -> OutputResult<CleanupStats> {
        let mut files = self.run_files()?;
        files.sort_by(|a, b| b.1.cmp(&a.1)); // newest first

        let mut stats = CleanupStats::default();

        // Rule (a): cap the file count, dropping the oldest beyond the cap.
        let survivors = if files.len() > max_files {
            let excess = files.split_off(max_files);
            for (path, _) in excess {
                self.remove_logged(&path, "over file limit", &mut stats);
            }
            files
        } else {
            files
        };

        // Rule (b): age out remaining files past the cutoff.
        for (path, mtime) in survivors {
            if mtime < cutoff {
                self.remove_logged(&path, "over age limit", &mut stats);
            } else {
                stats.kept += 1;
            }
        }

        log::info!(
            "retention sweep in {}: removed {}, kept {}, failed {}",
            self.dir.display(), stats.removed, stats.kept, stats.failed
        );
        Ok(stats)
    }

    /// Best-effort single-file deletion.  A failure must not abort the
    /// sweep: log, count, move on.
    fn remove_logged(&self, path: &Path, reason: &str, stats: &mut CleanupStats) {
        match fs::remove_file(path) {
            Ok(()) => {
                stats.removed += 1;
                log::info!("removed {} ({reason})", path.display());
            }
            Err(e) => {
                stats.failed += 1;
                stats.kept += 1;
                log::warn!("failed to remove {} ({reason}): {e}; skipping", path.display());
            }
        }
    }

    // ── Directory scan ────────────────────────────────────────────────────

    /// All run files in the directory with their modification times.
    /// A missing directory yields an empty list.
    fn run_files(&self) -> OutputResult<Vec<(PathBuf, SystemTime)>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.starts_with(FILE_PREFIX) || !name.ends_with(FILE_SUFFIX) {
                continue;
            }
            let meta = entry.metadata()?;
            if !meta.is_file() {
                continue;
            }
            files.push((entry.path(), meta.modified()?));
        }
        Ok(files)
    }
}
