//! Matrix multiplication sweep benchmark.
//!
//! Times serial, block-partitioned and chunk-scheduled multiplication for
//! every size in the sizes file (fixed worker count) and every count in the
//! threads file (fixed size), writing one `serial,speedup,...` line per
//! configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use foundation::{logical_processors, read_counts, ComparisonRecord, RecordWriter};
use matmul::{size_sweep, thread_sweep, MatmulConfig};
use rng::OperandSource;

#[derive(Parser)]
#[command(
    name = "matrix-multiply",
    version,
    about = "Serial vs. parallel matrix multiplication sweep"
)]
struct Cli {
    /// Matrix sizes to test, whitespace separated
    #[arg(long, default_value = "size_data.txt")]
    sizes: PathBuf,

    /// Thread counts to test, whitespace separated
    #[arg(long, default_value = "number_threads.txt")]
    threads: PathBuf,

    #[arg(long, default_value = "time_size.txt")]
    size_output: PathBuf,

    #[arg(long, default_value = "time_threads.txt")]
    threads_output: PathBuf,

    /// Worker count used by the size sweep
    #[arg(long, default_value_t = 6)]
    workers: usize,

    /// Matrix size used by the thread sweep
    #[arg(long, default_value_t = 1000)]
    fixed_size: usize,

    /// Physical core count, sets the per-kernel chunk size
    #[arg(long, default_value_t = 6)]
    kernels: usize,

    /// Seed for reproducible operands (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    println!("Number of logical processors: {}\n", logical_processors());

    let sizes = read_counts(&cli.sizes)?;
    let thread_counts = read_counts(&cli.threads)?;

    let cfg = MatmulConfig::builder()
        .threads(cli.workers)
        .fixed_size(cli.fixed_size)
        .kernels(cli.kernels)
        .build()?;
    cfg.validate()?;

    let mut source = OperandSource::from_seed_opt(cli.seed);

    log::info!("size sweep over {} size(s)", sizes.len());
    let records = size_sweep(&sizes, &cfg, &mut source).context("size sweep failed")?;
    write_records(&cli.size_output, &records)?;

    log::info!("thread sweep over {} count(s)", thread_counts.len());
    let records =
        thread_sweep(&thread_counts, &cfg, &mut source).context("thread sweep failed")?;
    write_records(&cli.threads_output, &records)?;

    println!("Done!");
    Ok(())
}

fn write_records(path: &Path, records: &[ComparisonRecord]) -> Result<()> {
    let mut writer = RecordWriter::create(path)?;
    for record in records {
        writer.write(record)?;
    }
    writer.finish()?;
    log::info!("wrote {} record(s) to {}", records.len(), path.display());
    Ok(())
}
