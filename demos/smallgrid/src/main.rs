//! smallgrid — end-to-end demo for the tg grid traffic simulator.
//!
//! Runs the original reference scenario: 50 vehicles random-walking a 20×20
//! grid for 100 ticks, persisting the run every 10 ticks, then reloading the
//! latest file and printing summary statistics.  Scale the constants up (the
//! validator allows grids to 100×100 and fleets to 1,000) to stress the
//! pipeline.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use tg_core::{GridParams, SimConfig, timed};
use tg_output::{RunStore, StoreObserver, summarize};
use tg_sim::TrafficModel;

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:         u32 = 20;
const HEIGHT:        u32 = 20;
const VEHICLES:      u32 = 50;
const SEED:          u64 = 42;
const TOTAL_STEPS:   u64 = 100;
const RESULTS_DIR:   &str = "data/results";
const MAX_FILES:     usize = 50;
const MAX_AGE_DAYS:  u64 = 7;

fn main() -> Result<()> {
    env_logger::init();

    // Directory bootstrap is the application's job; the store never mkdirs.
    fs::create_dir_all(RESULTS_DIR)
        .with_context(|| format!("creating results directory {RESULTS_DIR}"))?;

    let config = SimConfig::new(GridParams::new(WIDTH, HEIGHT, VEHICLES), SEED, TOTAL_STEPS);
    let mut model = TrafficModel::new(config)?;

    log::info!(
        "starting traffic simulation: {WIDTH}x{HEIGHT} grid, {VEHICLES} vehicles, {TOTAL_STEPS} steps"
    );

    let mut observer = StoreObserver::new(
        RunStore::new(Path::new(RESULTS_DIR)),
        config.save_interval_steps,
    );

    let (run, elapsed) = timed(|| model.run(&mut observer));
    println!("simulation completed in {:.2} s ({} steps)", elapsed.as_secs_f64(), run.len());

    if let Some(e) = observer.take_error() {
        // Progress already in memory is intact; report and carry on.
        log::error!("persistence failed during the run: {e}");
    }

    let store = observer.into_store();
    store.cleanup(MAX_FILES, MAX_AGE_DAYS)?;

    match store.load_latest()? {
        Some(saved) => {
            println!("latest saved run: {} steps", saved.len());
            for (name, value) in summarize(&saved).rows() {
                println!("  {name} = {value}");
            }
        }
        None => println!("no saved runs found in {RESULTS_DIR}"),
    }

    Ok(())
}
