//! `tg-output` — the capture → compress → persist → decompress pipeline and
//! run statistics for the tg grid traffic simulator.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`codec`]    | `CompressedSnapshot`, compress/decompress             |
//! | [`store`]    | `RunStore` — save, load-latest, retention cleanup     |
//! | [`observer`] | `StoreObserver` — bridges `SimObserver` to the store  |
//! | [`stats`]    | `RunStats`, `summarize`                               |
//! | [`error`]    | `OutputError`, `OutputResult`                         |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tg_output::{RunStore, StoreObserver, summarize};
//!
//! let store = RunStore::new("./data/results");
//! let mut obs = StoreObserver::new(store, config.save_interval_steps);
//! model.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("persistence error: {e}"));
//!
//! let store = obs.into_store();
//! if let Some(run) = store.load_latest()? {
//!     println!("{:#?}", summarize(&run));
//! }
//! ```

pub mod codec;
pub mod error;
pub mod observer;
pub mod stats;
pub mod store;


pub use codec::{CompressedSnapshot, CompressedVehicle, compress, compress_run, decompress_run};
pub use error::{OutputError, OutputResult};
pub use observer::StoreObserver;
pub use stats::{RunStats, summarize};
pub use store::{CleanupStats, RunStore};
