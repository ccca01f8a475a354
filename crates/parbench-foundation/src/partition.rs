//! Work partitioning for fork-join workers.
//!
//! Both benchmarks hand each worker a contiguous half-open range of indices
//! (matrix rows, or interior integration samples). The worker count is
//! always capped to the size of the index space so no worker is ever handed
//! an empty range.

use core::ops::Range;

use crate::error::{BenchError, Result};

/// Number of workers actually used for `total` items.
pub fn effective_threads(total: usize, threads: usize) -> Result<usize> {
    if threads == 0 {
        return Err(BenchError::config("thread count must be positive"));
    }
    if total == 0 {
        return Err(BenchError::config("cannot partition an empty index space"));
    }
    Ok(threads.min(total))
}

/// Static block partition of `0..total`.
///
/// Worker `t` receives `[t * per, (t + 1) * per)` with `per = total / T`,
/// except the last worker, which extends to `total` and absorbs the
/// remainder of the integer division.
pub fn block_ranges(total: usize, threads: usize) -> Result<Vec<Range<usize>>> {
    let threads = effective_threads(total, threads)?;
    let per = total / threads;

    let ranges = (0..threads)
        .map(|t| {
            let start = t * per;
            let end = if t == threads - 1 { total } else { start + per };
            start..end
        })
        .collect();
    Ok(ranges)
}

/// Chunk size used when the runtime deals rows out to workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkSize {
    /// One row per chunk.
    Unit,
    /// `total / kernels` rows per chunk, one chunk per physical core.
    /// Fewer dispatches, but load imbalance when the worker count does not
    /// divide the chunk layout evenly.
    PerKernel(usize),
}

impl ChunkSize {
    pub fn rows(self, total: usize) -> usize {
        match self {
            ChunkSize::Unit => 1,
            ChunkSize::PerKernel(kernels) => (total / kernels.max(1)).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_worker_absorbs_remainder() {
        let ranges = block_ranges(10, 3).unwrap();
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn test_threads_capped_to_total() {
        let ranges = block_ranges(3, 8).unwrap();
        assert_eq!(ranges, vec![0..1, 1..2, 2..3]);
        assert_eq!(effective_threads(3, 8).unwrap(), 3);
    }

    #[test]
    fn test_single_worker_gets_everything() {
        assert_eq!(block_ranges(7, 1).unwrap(), vec![0..7]);
    }

    #[test]
    fn test_degenerate_configuration_rejected() {
        assert!(matches!(
            block_ranges(10, 0),
            Err(BenchError::InvalidConfig(_))
        ));
        assert!(matches!(
            block_ranges(0, 4),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_chunk_rows() {
        assert_eq!(ChunkSize::Unit.rows(1000), 1);
        assert_eq!(ChunkSize::PerKernel(6).rows(1000), 166);
        assert_eq!(ChunkSize::PerKernel(6).rows(4), 1);
        assert_eq!(ChunkSize::PerKernel(0).rows(4), 4);
    }
}
