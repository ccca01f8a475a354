//! Wall-clock timing harness.

use std::time::{Duration, Instant};

use crate::error::{BenchError, Result};

/// Run `f` once and measure it with the monotonic clock.
pub fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Mean wall-clock seconds of `runs` consecutive calls of `f`.
///
/// The first failing run aborts the measurement.
pub fn mean_secs<F>(runs: usize, mut f: F) -> Result<f64>
where
    F: FnMut() -> Result<()>,
{
    if runs == 0 {
        return Err(BenchError::config("at least one timed run is required"));
    }

    let mut total = Duration::ZERO;
    for _ in 0..runs {
        let (res, elapsed) = timed(&mut f);
        res?;
        total += elapsed;
    }
    Ok(total.as_secs_f64() / runs as f64)
}

/// Speedup of a parallel run over the serial baseline.
#[inline]
pub fn speedup(baseline_secs: f64, parallel_secs: f64) -> f64 {
    baseline_secs / parallel_secs
}
