//! Scoped wall-clock measurement.
//!
//! The caller wraps an operation explicitly and receives the duration next
//! to the result, instead of relying on an implicit instrumentation layer:
//!
//! ```rust
//! use tg_core::timed;
//!
//! let (sum, elapsed) = timed(|| (0..1_000u64).sum::<u64>());
//! assert_eq!(sum, 499_500);
//! assert!(elapsed.as_secs() < 1);
//! ```

use std::time::{Duration, Instant};

/// Run `f` and return its result together with the elapsed wall-clock time.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
