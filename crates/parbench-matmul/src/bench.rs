//! Timing drivers: serial baseline vs. every parallel strategy.

use foundation::{mean_secs, speedup, BenchError, ComparisonRecord, Result};
use rng::OperandSource;

use crate::config::MatmulConfig;
use crate::matrix::{element_count, Matrix};
use crate::strategy::{multiply, Strategy};

/// Mean time of `repeats` runs of `strategy`; `c` is zeroed afterwards so
/// the next strategy starts from a clean buffer.
pub fn time_strategy(
    strategy: Strategy,
    a: &Matrix,
    b: &Matrix,
    c: &mut Matrix,
    threads: usize,
    repeats: usize,
) -> Result<f64> {
    let secs = mean_secs(repeats, || multiply(strategy, a, b, c, threads))?;
    c.reset();
    log::debug!(
        "{} ({}x{}, {} threads): {:.6}s",
        strategy.label(),
        a.rows(),
        a.cols(),
        threads,
        secs
    );
    Ok(secs)
}

/// One comparison record for the operands. A previously measured serial
/// baseline can be passed in to skip re-measuring it.
pub fn compare(
    a: &Matrix,
    b: &Matrix,
    threads: usize,
    cfg: &MatmulConfig,
    baseline: Option<f64>,
) -> Result<ComparisonRecord> {
    let mut c = Matrix::zeros(a.rows(), a.rows())?;
    let baseline_secs = match baseline {
        Some(secs) => secs,
        None => time_strategy(Strategy::Serial, a, b, &mut c, 1, cfg.repeats)?,
    };

    let speedups = Strategy::parallel(cfg.kernels)
        .into_iter()
        .map(|s| -> Result<f64> {
            let secs = time_strategy(s, a, b, &mut c, threads, cfg.repeats)?;
            Ok(speedup(baseline_secs, secs))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ComparisonRecord {
        baseline_secs,
        speedups,
    })
}

/// One record per matrix size, `cfg.threads` workers each.
pub fn size_sweep(
    sizes: &[usize],
    cfg: &MatmulConfig,
    source: &mut OperandSource,
) -> Result<Vec<ComparisonRecord>> {
    cfg.validate()?;
    ensure_positive("matrix size", sizes)?;
    for &size in sizes {
        element_count(size, size)?;
    }

    let mut records = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let (a, b) = square_operands(size, source)?;
        let record = compare(&a, &b, cfg.threads, cfg, None)?;
        log::info!("size {size}: {record}");
        records.push(record);
    }
    Ok(records)
}

/// One record per thread count on `cfg.fixed_size` operands. The operands
/// and the serial baseline are produced once and shared by every row.
pub fn thread_sweep(
    thread_counts: &[usize],
    cfg: &MatmulConfig,
    source: &mut OperandSource,
) -> Result<Vec<ComparisonRecord>> {
    cfg.validate()?;
    ensure_positive("thread count", thread_counts)?;

    let (a, b) = square_operands(cfg.fixed_size, source)?;
    let mut c = Matrix::zeros(cfg.fixed_size, cfg.fixed_size)?;
    let baseline = time_strategy(Strategy::Serial, &a, &b, &mut c, 1, cfg.repeats)?;

    let mut records = Vec::with_capacity(thread_counts.len());
    for &threads in thread_counts {
        let record = compare(&a, &b, threads, cfg, Some(baseline))?;
        log::info!("threads {threads}: {record}");
        records.push(record);
    }
    Ok(records)
}

fn square_operands(size: usize, source: &mut OperandSource) -> Result<(Matrix, Matrix)> {
    let (a, b) = source.operands(size, size);
    Ok((
        Matrix::from_vec(size, size, a)?,
        Matrix::from_vec(size, size, b)?,
    ))
}

fn ensure_positive(what: &str, values: &[usize]) -> Result<()> {
    if values.is_empty() {
        return Err(BenchError::config(format!("no {what} values given")));
    }
    if let Some(pos) = values.iter().position(|&v| v == 0) {
        return Err(BenchError::config(format!(
            "{what} #{} must be positive",
            pos + 1
        )));
    }
    Ok(())
}
