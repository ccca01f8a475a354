use core::fmt;
use core::ops::Range;
use core::sync::atomic::Ordering;
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use foundation::{block_ranges, effective_threads, fork_join_pool, timed, BenchError, Result};
use rayon::prelude::*;

use crate::atomic::AtomicF64;

/// How per-worker partial sums are merged into the shared total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accumulation {
    /// One thread, one running sum.
    Serial,
    /// Lock-free read-modify-write on an [`AtomicF64`].
    Atomic,
    /// Blocking `std` mutex around the merge.
    Critical,
    /// Explicit spin lock object; the guard releases it on every exit path.
    Lock,
    /// Parallel-iterator sum; the runtime combines partials pairwise.
    Reduction,
}

impl Accumulation {
    pub const ALL: [Accumulation; 5] = [
        Accumulation::Serial,
        Accumulation::Atomic,
        Accumulation::Critical,
        Accumulation::Lock,
        Accumulation::Reduction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Accumulation::Serial => "serial",
            Accumulation::Atomic => "atomic",
            Accumulation::Critical => "critical section",
            Accumulation::Lock => "lock",
            Accumulation::Reduction => "reduction",
        }
    }
}

impl fmt::Display for Accumulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One trapezoidal estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationResult {
    pub value: f64,
    /// Number of subdivisions.
    pub n: usize,
    pub elapsed: Duration,
}

/// Trapezoidal estimate of `f` over `[a, b]` with `n` subdivisions:
/// `(f(a)/2 + sum_{i=1}^{n-1} f(a + i*delta) + f(b)/2) * delta`.
///
/// `threads` is ignored by [`Accumulation::Serial`] and capped to the
/// `n - 1` interior samples otherwise.
pub fn integrate<F>(
    accumulation: Accumulation,
    f: &F,
    a: f64,
    b: f64,
    n: usize,
    threads: usize,
) -> Result<IntegrationResult>
where
    F: Fn(f64) -> f64 + Sync,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(BenchError::config(format!(
            "integration bounds must be finite, got [{a}, {b}]"
        )));
    }
    if n < 2 {
        return Err(BenchError::config(format!(
            "at least 2 subdivisions required, got {n}"
        )));
    }

    let delta = (b - a) / n as f64;
    let (value, elapsed) = timed(|| -> Result<f64> {
        let sum = interior_sum(accumulation, f, a, delta, n, threads)?;
        Ok((sum + f(a) / 2.0 + f(b) / 2.0) * delta)
    });

    Ok(IntegrationResult {
        value: value?,
        n,
        elapsed,
    })
}

fn interior_sum<F>(
    accumulation: Accumulation,
    f: &F,
    a: f64,
    delta: f64,
    n: usize,
    threads: usize,
) -> Result<f64>
where
    F: Fn(f64) -> f64 + Sync,
{
    match accumulation {
        Accumulation::Serial => Ok(partial_sum(f, a, delta, 1..n)),
        Accumulation::Atomic => {
            let sum = AtomicF64::new(0.0);
            for_each_block(f, a, delta, n, threads, |local| {
                sum.fetch_add(local, Ordering::AcqRel);
            })?;
            Ok(sum.into_inner())
        }
        Accumulation::Critical => {
            let sum = Mutex::new(0.0);
            for_each_block(f, a, delta, n, threads, |local| {
                let mut total = sum.lock().unwrap_or_else(PoisonError::into_inner);
                *total += local;
            })?;
            Ok(sum.into_inner().unwrap_or_else(PoisonError::into_inner))
        }
        Accumulation::Lock => {
            let lock = spin::Mutex::new(0.0);
            for_each_block(f, a, delta, n, threads, |local| {
                *lock.lock() += local;
            })?;
            Ok(lock.into_inner())
        }
        Accumulation::Reduction => {
            let threads = effective_threads(n - 1, threads)?;
            let pool = fork_join_pool(threads)?;
            Ok(pool.install(|| {
                (1..n)
                    .into_par_iter()
                    .map(|i| f(a + i as f64 * delta))
                    .sum::<f64>()
            }))
        }
    }
}

/// Fork one scoped worker per block of the interior samples `1..n`; each
/// sums its block locally and hands the result to `merge` exactly once.
fn for_each_block<F, M>(
    f: &F,
    a: f64,
    delta: f64,
    n: usize,
    threads: usize,
    merge: M,
) -> Result<()>
where
    F: Fn(f64) -> f64 + Sync,
    M: Fn(f64) + Sync,
{
    let ranges = block_ranges(n - 1, threads)?;
    let merge = &merge;
    thread::scope(|s| {
        for r in ranges {
            s.spawn(move || merge(partial_sum(f, a, delta, r.start + 1..r.end + 1)));
        }
    });
    Ok(())
}

#[inline]
fn partial_sum<F>(f: &F, a: f64, delta: f64, samples: Range<usize>) -> f64
where
    F: Fn(f64) -> f64,
{
    samples.map(|i| f(a + i as f64 * delta)).sum()
}
