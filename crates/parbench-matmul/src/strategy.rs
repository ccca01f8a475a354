use std::thread;

use foundation::{block_ranges, effective_threads, fork_join_pool, BenchError, ChunkSize, Result};
use rayon::prelude::*;

use crate::matrix::Matrix;

/// How rows of the result are assigned to workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Single thread, no partitioning.
    Serial,
    /// SPMD: one scoped OS thread per contiguous row block.
    Block,
    /// Rows dealt out by the rayon runtime, one chunk per task.
    Chunked(ChunkSize),
}

impl Strategy {
    /// Compared strategies, in output column order.
    pub fn parallel(kernels: usize) -> [Strategy; 3] {
        [
            Strategy::Block,
            Strategy::Chunked(ChunkSize::Unit),
            Strategy::Chunked(ChunkSize::PerKernel(kernels)),
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Serial => "serial",
            Strategy::Block => "block",
            Strategy::Chunked(ChunkSize::Unit) => "chunked",
            Strategy::Chunked(ChunkSize::PerKernel(_)) => "chunked-per-kernel",
        }
    }
}

/// `c = a * b` with `a: m x n`, `b: n x m`, `c: m x m`.
///
/// Every cell of `c` is assigned, never accumulated into. `threads` is
/// ignored by [`Strategy::Serial`] and capped to `m` otherwise.
pub fn multiply(
    strategy: Strategy,
    a: &Matrix,
    b: &Matrix,
    c: &mut Matrix,
    threads: usize,
) -> Result<()> {
    let (m, n) = check_shapes(a, b, c)?;
    let (a, b) = (a.as_slice(), b.as_slice());
    let c = c.as_mut_slice();

    match strategy {
        Strategy::Serial => {
            for (i, out) in c.chunks_mut(m).enumerate() {
                row_product(a, b, n, m, i, out);
            }
        }
        Strategy::Block => {
            let ranges = block_ranges(m, threads)?;
            let mut rest = c;
            thread::scope(|s| {
                for range in ranges {
                    let (rows, tail) = core::mem::take(&mut rest).split_at_mut(range.len() * m);
                    rest = tail;
                    s.spawn(move || {
                        for (r, out) in rows.chunks_mut(m).enumerate() {
                            row_product(a, b, n, m, range.start + r, out);
                        }
                    });
                }
            });
        }
        Strategy::Chunked(chunk) => {
            let threads = effective_threads(m, threads)?;
            let rows_per_chunk = chunk.rows(m);
            let pool = fork_join_pool(threads)?;
            pool.install(|| {
                c.par_chunks_mut(rows_per_chunk * m)
                    .with_max_len(1)
                    .enumerate()
                    .for_each(|(idx, block)| {
                        let first = idx * rows_per_chunk;
                        for (r, out) in block.chunks_mut(m).enumerate() {
                            row_product(a, b, n, m, first + r, out);
                        }
                    });
            });
        }
    }
    Ok(())
}

fn check_shapes(a: &Matrix, b: &Matrix, c: &Matrix) -> Result<(usize, usize)> {
    let (m, n) = (a.rows(), a.cols());
    if m == 0 || n == 0 {
        return Err(BenchError::config(format!(
            "matrix dimensions must be positive, got {m}x{n}"
        )));
    }
    if b.rows() != n || b.cols() != m {
        return Err(BenchError::config(format!(
            "right operand must be {n}x{m}, got {}x{}",
            b.rows(),
            b.cols()
        )));
    }
    if c.rows() != m || c.cols() != m {
        return Err(BenchError::config(format!(
            "result must be {m}x{m}, got {}x{}",
            c.rows(),
            c.cols()
        )));
    }
    Ok((m, n))
}

/// Row `i` of the product into `out` (length `m`).
#[inline]
fn row_product(a: &[i32], b: &[i32], n: usize, m: usize, i: usize, out: &mut [i32]) {
    let a_row = &a[i * n..(i + 1) * n];
    for (j, cell) in out.iter_mut().enumerate() {
        let mut sum = 0i32;
        for (k, &a_ik) in a_row.iter().enumerate() {
            sum = sum.wrapping_add(a_ik.wrapping_mul(b[j + k * m]));
        }
        *cell = sum;
    }
}
